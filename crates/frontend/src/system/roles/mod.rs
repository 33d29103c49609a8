pub mod api;
pub mod resolver;
pub mod ui;
