//! Common traits for backend-mirrored records

pub mod table_record;

pub use table_record::{NameRef, TableRecord};
