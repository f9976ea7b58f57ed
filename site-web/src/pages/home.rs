//! Home Page - Night Sky Portfolio

use leptos::prelude::*;

use crate::components::{ContactForm, Gallery, GeoChip, Guestbook};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="hero" id="top">
                <h1>
                    <span class="night-cyan">"night"</span>
                    <span class="night-white">"folio"</span>
                </h1>
                <p class="hero-tagline">
                    "Telescopes, timelapses and the occasional bit of firmware."
                </p>
                <GeoChip/>
            </header>
            <Gallery/>
            <Guestbook/>
            <ContactForm/>
        </div>
    }
}
