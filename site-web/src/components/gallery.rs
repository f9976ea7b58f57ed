//! Gallery + Lightbox Component
//!
//! Thumbnail grid opening into a full-screen overlay with next/prev
//! navigation. Navigation state and the stale-render token live in
//! [`crate::state::lightbox`]; this component applies the DOM side of the
//! contract: focus capture, scroll locking, video resource release and
//! neighbor preloading.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, HtmlImageElement, HtmlVideoElement, KeyboardEvent, MouseEvent};

use crate::state::lightbox::Lightbox;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MediaKind {
    Image,
    Video,
}

/// One gallery slot. Static for the page's lifetime; the lightbox refers to
/// items by index.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GalleryItem {
    pub kind: MediaKind,
    pub src: &'static str,
    pub thumb: &'static str,
    pub poster: Option<&'static str>,
    pub alt: &'static str,
}

const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        kind: MediaKind::Image,
        src: "/assets/gallery/observatory.jpg",
        thumb: "/assets/gallery/observatory_thumb.jpg",
        poster: None,
        alt: "Backyard observatory build",
    },
    GalleryItem {
        kind: MediaKind::Image,
        src: "/assets/gallery/tracker-rig.jpg",
        thumb: "/assets/gallery/tracker-rig_thumb.jpg",
        poster: None,
        alt: "Star tracker rig on the bench",
    },
    GalleryItem {
        kind: MediaKind::Video,
        src: "/assets/gallery/timelapse.mp4",
        thumb: "/assets/gallery/timelapse_thumb.jpg",
        poster: Some("/assets/gallery/timelapse_poster.jpg"),
        alt: "All-night sky timelapse",
    },
    GalleryItem {
        kind: MediaKind::Image,
        src: "/assets/gallery/andromeda.jpg",
        thumb: "/assets/gallery/andromeda_thumb.jpg",
        poster: None,
        alt: "Andromeda, stacked and stretched",
    },
    GalleryItem {
        kind: MediaKind::Video,
        src: "/assets/gallery/aurora.mp4",
        thumb: "/assets/gallery/aurora_thumb.jpg",
        poster: Some("/assets/gallery/aurora_poster.jpg"),
        alt: "Aurora over the ridge",
    },
    GalleryItem {
        kind: MediaKind::Image,
        src: "/assets/gallery/workbench.jpg",
        thumb: "/assets/gallery/workbench_thumb.jpg",
        poster: None,
        alt: "Mount controller wiring",
    },
];

#[component]
pub fn Gallery() -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::new(GALLERY_ITEMS.len()));

    let open_at = move |i: usize| {
        release_stage_video();
        lightbox.update(|lb| lb.open(i));
        lock_scroll(true);
        focus_close_control();
        preload_neighbor(lightbox.get_untracked());
    };

    let close = move || {
        release_stage_video();
        lightbox.update(|lb| lb.close());
        lock_scroll(false);
    };

    let navigate = move |forward: bool| {
        if !lightbox.get_untracked().is_open() {
            return;
        }
        release_stage_video();
        lightbox.update(|lb| if forward { lb.next() } else { lb.prev() });
        preload_neighbor(lightbox.get_untracked());
    };

    // Keyboard contract while open: Escape closes, arrows navigate.
    Effect::new(move || {
        use wasm_bindgen::prelude::Closure;
        let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            if !lightbox.get_untracked().is_open() {
                return;
            }
            match ev.key().as_str() {
                "Escape" => close(),
                "ArrowRight" => {
                    ev.prevent_default();
                    navigate(true);
                }
                "ArrowLeft" => {
                    ev.prevent_default();
                    navigate(false);
                }
                _ => {}
            }
        });
        let _ = gloo_utils::window()
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        on_keydown.forget();
    });

    let on_overlay_click = move |ev: MouseEvent| {
        // only a click on the backdrop itself closes
        let is_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.id() == "lightbox")
            .unwrap_or(false);
        if is_backdrop {
            close();
        }
    };

    let on_overlay_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Tab" {
            trap_focus(&ev);
        }
    };

    let stage = move || {
        let lb = lightbox.get();
        let index = lb.index()?;
        let item = &GALLERY_ITEMS[index];
        let token = lb.token();
        Some(match item.kind {
            MediaKind::Image => view! {
                <img src=item.src alt=item.alt decoding="async"/>
            }
            .into_any(),
            MediaKind::Video => view! {
                <video
                    controls=true
                    muted=true
                    playsinline=true
                    preload="metadata"
                    poster=item.poster
                    src=item.src
                    on:canplay=move |ev| try_autoplay(lightbox, token, &ev)
                ></video>
            }
            .into_any(),
        })
    };

    view! {
        <section class="gallery" id="build-gallery">
            <h2>"Recent builds"</h2>
            <div class="gallery-grid">
                {GALLERY_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        view! {
                            <button class="gallery-item" on:click=move |_| open_at(i)>
                                <img src=item.thumb alt=item.alt loading="lazy"/>
                                {(item.kind == MediaKind::Video)
                                    .then(|| view! { <span class="play-badge">"▶"</span> })}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div
                class="lightbox"
                id="lightbox"
                class:open=move || lightbox.get().is_open()
                aria-hidden=move || (!lightbox.get().is_open()).to_string()
                on:click=on_overlay_click
                on:keydown=on_overlay_keydown
            >
                <button class="lb-close" id="lb-close" aria-label="Close" on:click=move |_| close()>
                    "×"
                </button>
                <button
                    class="lb-prev"
                    id="lb-prev"
                    aria-label="Previous"
                    on:click=move |_| navigate(false)
                >
                    "‹"
                </button>
                <button
                    class="lb-next"
                    id="lb-next"
                    aria-label="Next"
                    on:click=move |_| navigate(true)
                >
                    "›"
                </button>
                <div class="lb-stage" id="lb-stage">{stage}</div>
            </div>
        </section>
    }
}

/// Attempt playback only if the user has not navigated away since this
/// video was put on stage.
fn try_autoplay(lightbox: RwSignal<Lightbox>, token: u64, ev: &web_sys::Event) {
    if !lightbox.get_untracked().is_current(token) {
        return;
    }
    let Some(video) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlVideoElement>().ok())
    else {
        return;
    };
    if let Ok(promise) = video.play() {
        leptos::task::spawn_local(async move {
            // autoplay can be blocked; swallow the rejection
            let _ = JsFuture::from(promise).await;
        });
    }
}

/// Stop any playing video and detach its source so the browser stops
/// decoding in the background.
fn release_stage_video() {
    let Some(stage) = gloo_utils::document().get_element_by_id("lb-stage") else {
        return;
    };
    let Ok(Some(element)) = stage.query_selector("video") else {
        return;
    };
    let Ok(video) = element.dyn_into::<HtmlVideoElement>() else {
        return;
    };
    let _ = video.pause();
    let _ = video.remove_attribute("src");
    video.load();
}

fn lock_scroll(lock: bool) {
    let style = gloo_utils::body().style();
    if lock {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

fn focus_close_control() {
    leptos::task::spawn_local(async {
        TimeoutFuture::new(0).await;
        if let Some(element) = gloo_utils::document().get_element_by_id("lb-close") {
            if let Ok(element) = element.dyn_into::<HtmlElement>() {
                let _ = element.focus();
            }
        }
    });
}

/// Warm the cache for the item `next()` would show. Images only; videos
/// are left to their own preload hints.
fn preload_neighbor(lb: Lightbox) {
    let Some(i) = lb.preload_index() else {
        return;
    };
    let item = &GALLERY_ITEMS[i];
    if item.kind == MediaKind::Image {
        if let Ok(img) = HtmlImageElement::new() {
            img.set_src(item.src);
        }
    }
}

/// Cycle Tab focus among the overlay's controls, wrapping at both ends.
fn trap_focus(ev: &KeyboardEvent) {
    const CONTROLS: [&str; 3] = ["lb-close", "lb-prev", "lb-next"];

    let document = gloo_utils::document();
    let active_id = document
        .active_element()
        .map(|el| el.id())
        .unwrap_or_default();

    let focus = |id: &str| {
        if let Some(element) = document.get_element_by_id(id) {
            if let Ok(element) = element.dyn_into::<HtmlElement>() {
                let _ = element.focus();
            }
        }
    };

    if ev.shift_key() && active_id == CONTROLS[0] {
        ev.prevent_default();
        focus(CONTROLS[CONTROLS.len() - 1]);
    } else if !ev.shift_key() && active_id == CONTROLS[CONTROLS.len() - 1] {
        ev.prevent_default();
        focus(CONTROLS[0]);
    }
}
