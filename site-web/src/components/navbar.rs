//! Navigation Bar Component - Night Sky Theme

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div style="max-width: 1100px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" {..} class="nav-link-clean">
                    <span class="nav-title">
                        <span class="night-cyan">"night"</span><span class="night-white">"folio"</span>
                    </span>
                </A>
                <div style="display: flex; gap: 20px; align-items: center;">
                    <a href="/#build-gallery" class="nav-link">"Builds"</a>
                    <a href="/#guestbook" class="nav-link">"Guestbook"</a>
                    <a href="/#contact" class="nav-link">"Contact"</a>
                    <A href="/about" {..} class="nav-link">"About"</A>
                </div>
            </div>
        </nav>
    }
}
