//! Geo Greeting Chip Component
//!
//! "Hello from 🇫🇷 FR" — country resolved cookie-first, then a remote
//! lookup. The chip simply never appears when resolution fails.

use leptos::prelude::*;
use shared::utils::flag_emoji;

use crate::services::geo::resolve_country;
use crate::state::config::use_site_config;

#[component]
pub fn GeoChip() -> impl IntoView {
    let config = use_site_config();
    let (greeting, set_greeting) = signal(None::<String>);

    leptos::task::spawn_local(async move {
        let Some(code) = resolve_country(&config.geo_endpoint).await else {
            return;
        };
        let Some(flag) = flag_emoji(&code) else {
            return;
        };
        set_greeting.set(Some(format!("Hello from {flag} {code}")));
    });

    view! {
        {move || {
            greeting
                .get()
                .map(|text| view! { <span class="geo-chip" id="geo-hello">{text}</span> })
        }}
    }
}
