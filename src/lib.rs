pub mod admin;
pub mod api;
pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod models;
pub mod pages;
pub mod reviews;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
