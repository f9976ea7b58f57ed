//! Scroll Progress Bar Component

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (progress, set_progress) = signal(0.0_f64);

    Effect::new(move || {
        let update = move || {
            let document = gloo_utils::document();
            let Some(root) = document.document_element() else {
                return;
            };
            let scrolled = root.scroll_top().max(gloo_utils::body().scroll_top()) as f64;
            let track = (root.scroll_height() - root.client_height()) as f64;
            let pct = if track > 0.0 {
                (scrolled / track * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };
            set_progress.set(pct);
        };
        update();

        let on_scroll = Closure::<dyn FnMut()>::new(update);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        let _ = gloo_utils::window().add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        );
        on_scroll.forget();
    });

    view! {
        <div
            class="progress-bar"
            id="progress-bar"
            role="progressbar"
            style:width=move || format!("{:.2}%", progress.get())
        ></div>
    }
}
