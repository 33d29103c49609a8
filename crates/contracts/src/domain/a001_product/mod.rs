pub mod aggregate;
pub mod image;
