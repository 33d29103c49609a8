pub mod auth;
pub mod guard;
pub mod navigation;
pub mod roles;
pub mod users;
