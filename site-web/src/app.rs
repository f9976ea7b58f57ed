//! Nightfolio Web App - Leptos Frontend
//!
//! Night-sky themed portfolio shell: background canvases, router, footer.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::{DigitalRain, Navbar, ScrollProgress, Starfield};
use crate::pages::{AboutPage, HomePage};
use crate::state::config::provide_site_config;

#[component]
pub fn App() -> impl IntoView {
    provide_site_config();

    // Backup in case main() ran before the loading element existed.
    Effect::new(move || {
        hide_loading_screen();
    });

    view! {
        <Router>
            <div class="app-container">
                <Starfield/>
                <DigitalRain/>
                <ScrollProgress/>
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/about") view=AboutPage/>
                </Routes>
                <Footer/>
            </div>
        </Router>
    }
}

/// Hide the static loading screen once the app has taken over.
pub fn hide_loading_screen() {
    let Some(element) = gloo_utils::document().get_element_by_id("leptos-loading") else {
        return;
    };
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.class_list().add_1("hidden");
    }
    let _ = element.set_attribute("style", "display: none !important;");
}

#[component]
fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="site-footer">
            <span id="footer-year">{format!("© {year} nightfolio")}</span>
            <span class="footer-sep">"·"</span>
            <a href="#top" class="footer-link">"Back to top"</a>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1>"404 - Lost in the dark"</h1>
                <p>"That page isn't in this sky."</p>
                <A href="/">
                    <span class="btn">"Back to the stars"</span>
                </A>
            </div>
        </div>
    }
}
