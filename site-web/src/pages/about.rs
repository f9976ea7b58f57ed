//! About Page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card about-card">
                <h1>"About this site"</h1>
                <p>
                    "I build telescope rigs by night and ship software by day. This site is
                    where the two meet: a gallery of recent builds, a guestbook rendered as
                    a patch of sky, and a way to reach me."
                </p>
                <h2>"The sky behind the page"</h2>
                <p>
                    "Everything animated here runs on two canvases: a starfield with the
                    occasional shooting star, and a slow digital rain of glyphs. Both back
                    off when the tab is hidden and stay still entirely if your system asks
                    for reduced motion."
                </p>
                <h2>"The guestbook"</h2>
                <p>
                    "Every signature becomes a named star. Hover one to see who left it and
                    where they were signing from."
                </p>
            </div>
        </div>
    }
}
