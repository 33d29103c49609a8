//! Product Details UI Module
//!
//! MVVM split as in the other detail forms:
//! - view_model.rs: form state, image selection and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
