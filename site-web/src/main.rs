//! Nightfolio - Portfolio Site Frontend
//!
//! A static portfolio page with an animated night sky: starfield and digital
//! rain backgrounds, a media lightbox, a guestbook drawn as named stars and a
//! contact form with layered delivery fallbacks.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod engine;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("nightfolio starting");

    app::hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}
