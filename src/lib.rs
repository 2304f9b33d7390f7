pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod theme;

pub use components::auth_header::{AuthHeader, AuthTarget};
pub use error::ThemeError;
pub use theme::{Color, Theme};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
