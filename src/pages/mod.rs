pub mod admin;
pub mod index;
