//! Guestbook Component
//!
//! Every signature becomes a named star on its own patch of sky. Entries
//! come from the remote store; a new signature appears immediately and the
//! write happens in the background. Placement is seeded from the entry id
//! so a star keeps its spot across refetches.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use shared::dto::{GuestbookEntry, NewGuestbookEntry};
use shared::utils::{first_name, flag_emoji};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::components::canvas::{context_2d, device_pixel_ratio};
use crate::engine::rng::{Rng, SeededRng};
use crate::engine::scheduler::FrameLoop;
use crate::services::geo::{cached_country, country_from_cookie};
use crate::services::guestbook::{create_entry, list_entries};
use crate::state::config::use_site_config;
use crate::utils::constants::GUESTBOOK_HOVER_RADIUS;

/// A guestbook entry projected onto the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedStar {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub base_alpha: f64,
    pub phase: f64,
    pub label: String,
    pub country: Option<String>,
}

impl NamedStar {
    pub fn alpha(&self) -> f64 {
        (self.base_alpha + self.phase.sin() * 0.22).clamp(0.06, 0.85)
    }
}

/// FNV-1a over the entry id, so placement is a pure function of identity.
fn seed_from_id(id: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in id.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Scatter entries over a `width` x `height` canvas, keeping a margin so
/// labels never clip at the edges.
pub fn project_entries(entries: &[GuestbookEntry], width: f64, height: f64) -> Vec<NamedStar> {
    entries
        .iter()
        .map(|entry| {
            let mut rng = SeededRng::new(seed_from_id(&entry.id));
            NamedStar {
                x: rng.range(0.06, 0.94) * width,
                y: rng.range(0.10, 0.85) * height,
                radius: rng.range(1.6, 3.2),
                base_alpha: rng.range(0.35, 0.75),
                phase: rng.range(0.0, TAU),
                label: first_name(&entry.name).to_string(),
                country: entry.country.clone(),
            }
        })
        .collect()
}

/// Index of the star nearest to `(x, y)` within `radius`, if any.
pub fn hover_index(stars: &[NamedStar], x: f64, y: f64, radius: f64) -> Option<usize> {
    let limit = radius * radius;
    stars
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            let d2 = (s.x - x).powi(2) + (s.y - y).powi(2);
            (d2 <= limit).then_some((i, d2))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

#[component]
pub fn Guestbook() -> impl IntoView {
    let config = use_site_config();
    let entries: RwSignal<Vec<GuestbookEntry>> = RwSignal::new(Vec::new());
    let (status, set_status) = signal(None::<String>);
    let (tooltip, set_tooltip) = signal(None::<(String, i32, i32)>);
    let (name, set_name) = signal(String::new());
    let (message, set_message) = signal(String::new());

    // initial fetch
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match list_entries(&config).await {
                Ok(list) => {
                    if list.is_empty() {
                        set_status.set(Some("No signatures yet — be the first.".to_string()));
                    }
                    entries.set(list);
                }
                Err(err) => {
                    log::warn!("guestbook list failed: {err}");
                    set_status.set(Some("The guestbook is offline right now.".to_string()));
                }
            }
        });
    }

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(100).await;
            let Some(element) = gloo_utils::document().get_element_by_id("guestbook-canvas")
            else {
                return;
            };
            let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
                return;
            };
            start(canvas, entries, set_tooltip);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let signer = name.get_untracked().trim().to_string();
        let text = message.get_untracked().trim().to_string();
        if signer.is_empty() || text.is_empty() {
            set_status.set(Some("Add your name and a message first.".to_string()));
            return;
        }

        let country = cached_country().or_else(country_from_cookie);
        let input = NewGuestbookEntry {
            name: signer.clone(),
            message: text.clone(),
            country: country.clone(),
        };

        // the star appears before the write round-trips
        let local_id = format!("local-{}", js_sys::Date::now());
        entries.update(|list| {
            list.push(GuestbookEntry {
                id: local_id.clone(),
                name: signer,
                message: text,
                country,
                created_at: Utc::now(),
            })
        });
        set_name.set(String::new());
        set_message.set(String::new());
        set_status.set(Some("Your star is up. Saving…".to_string()));

        let config = config.clone();
        leptos::task::spawn_local(async move {
            match create_entry(&config, &input).await {
                Ok(saved) => {
                    entries.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|e| e.id == local_id) {
                            *slot = saved;
                        }
                    });
                    set_status.set(Some("Thanks for signing!".to_string()));
                }
                Err(err) => {
                    log::warn!("guestbook create failed: {err}");
                    set_status.set(Some(
                        "Your star is up, but saving failed. It may fade on reload.".to_string(),
                    ));
                }
            }
        });
    };

    view! {
        <section class="guestbook" id="guestbook">
            <h2>"Guestbook"</h2>
            <p class="guestbook-hint">"Sign it and claim a star. Hover one to see who it is."</p>
            <div class="guestbook-sky">
                <canvas id="guestbook-canvas"></canvas>
                {move || {
                    tooltip
                        .get()
                        .map(|(label, x, y)| {
                            view! {
                                <div
                                    class="star-tooltip"
                                    style=format!("left: {}px; top: {}px;", x + 12, y - 10)
                                >
                                    {label}
                                </div>
                            }
                        })
                }}
            </div>
            <form id="guestbook-form" on:submit=on_submit>
                <input
                    type="text"
                    id="guestbook-name"
                    name="name"
                    placeholder="Your name"
                    autocomplete="name"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    id="guestbook-message"
                    name="message"
                    placeholder="Leave a note"
                    prop:value=message
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-sign">"Sign"</button>
            </form>
            <p class="form-status" id="guestbook-status" role="status" aria-live="polite">
                {move || status.get()}
            </p>
        </section>
    }
}

fn start(
    canvas: HtmlCanvasElement,
    entries: RwSignal<Vec<GuestbookEntry>>,
    set_tooltip: WriteSignal<Option<(String, i32, i32)>>,
) {
    let Some(ctx) = context_2d(&canvas) else {
        log::warn!("guestbook: 2d context unavailable");
        return;
    };

    let dpr = device_pixel_ratio();
    fit_to_box(&canvas, dpr);

    let stars: Rc<RefCell<Vec<NamedStar>>> = Rc::new(RefCell::new(Vec::new()));

    {
        let canvas = canvas.clone();
        let stars = stars.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            fit_to_box(&canvas, dpr);
            let (w, h) = (canvas.width() as f64, canvas.height() as f64);
            *stars.borrow_mut() = project_entries(&entries.get_untracked(), w, h);
        });
        let _ = gloo_utils::window()
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();
    }

    {
        let stars = stars.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            let (cx, cy) = (ev.offset_x(), ev.offset_y());
            let stars = stars.borrow();
            let hit = hover_index(
                &stars,
                cx as f64 * dpr,
                cy as f64 * dpr,
                GUESTBOOK_HOVER_RADIUS * dpr,
            );
            match hit {
                Some(i) => {
                    let star = &stars[i];
                    let label = match star.country.as_deref().and_then(flag_emoji) {
                        Some(flag) => format!("{} {flag}", star.label),
                        None => star.label.clone(),
                    };
                    set_tooltip.set(Some((label, cx, cy)));
                }
                None => set_tooltip.set(None),
            }
        });
        let _ = canvas
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        on_move.forget();

        let on_leave = Closure::<dyn FnMut()>::new(move || set_tooltip.set(None));
        let _ = canvas
            .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
        on_leave.forget();
    }

    FrameLoop::start(move |_now_ms, _dt| {
        let (w, h) = (canvas.width() as f64, canvas.height() as f64);
        let list = entries.get_untracked();

        let mut stars = stars.borrow_mut();
        if stars.len() != list.len() {
            *stars = project_entries(&list, w, h);
        }

        ctx.set_fill_style_str("#000013");
        ctx.fill_rect(0.0, 0.0, w, h);

        for star in stars.iter_mut() {
            star.phase += 0.016;
            ctx.set_global_alpha(star.alpha());
            ctx.set_fill_style_str("#cfeaff");
            ctx.begin_path();
            let _ = ctx.arc(star.x, star.y, star.radius * dpr, 0.0, TAU);
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
    });
}

/// Match the backing store to the element's CSS box. Falls back to a fixed
/// size when called before layout.
fn fit_to_box(canvas: &HtmlCanvasElement, dpr: f64) {
    let (cw, ch) = (canvas.client_width(), canvas.client_height());
    let (cw, ch) = if cw > 0 && ch > 0 { (cw, ch) } else { (800, 320) };
    canvas.set_width((cw as f64 * dpr) as u32);
    canvas.set_height((ch as f64 * dpr) as u32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(id: &str, name: &str, country: Option<&str>) -> GuestbookEntry {
        GuestbookEntry {
            id: id.to_string(),
            name: name.to_string(),
            message: "hi".to_string(),
            country: country.map(str::to_string),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_projection_stays_inside_margins() {
        let entries: Vec<_> = (0..50)
            .map(|i| entry(&format!("id-{i}"), "Ada Lovelace", Some("GB")))
            .collect();
        for star in project_entries(&entries, 1000.0, 400.0) {
            assert!((60.0..940.0).contains(&star.x), "x out of band: {}", star.x);
            assert!((40.0..340.0).contains(&star.y), "y out of band: {}", star.y);
            assert!((1.6..3.2).contains(&star.radius));
            assert!((0.35..0.75).contains(&star.base_alpha));
        }
    }

    #[test]
    fn test_projection_is_stable_per_id() {
        let a = project_entries(&[entry("e1", "Ada", None)], 800.0, 300.0);
        let b = project_entries(&[entry("e1", "Ada", None)], 800.0, 300.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_projection_uses_first_name_as_label() {
        let stars = project_entries(&[entry("e1", "Grace Hopper", Some("US"))], 800.0, 300.0);
        assert_eq!(stars[0].label, "Grace");
        assert_eq!(stars[0].country.as_deref(), Some("US"));
    }

    #[test]
    fn test_hover_picks_nearest_star_within_radius() {
        let mut stars = project_entries(
            &[entry("a", "A", None), entry("b", "B", None)],
            800.0,
            300.0,
        );
        stars[0].x = 100.0;
        stars[0].y = 100.0;
        stars[1].x = 104.0;
        stars[1].y = 100.0;
        assert_eq!(hover_index(&stars, 101.0, 100.0, 12.0), Some(0));
        assert_eq!(hover_index(&stars, 103.5, 100.0, 12.0), Some(1));
        assert_eq!(hover_index(&stars, 400.0, 200.0, 12.0), None);
    }

    #[test]
    fn test_alpha_stays_clamped_while_twinkling() {
        let mut star = project_entries(&[entry("z", "Zed", None)], 800.0, 300.0)
            .pop()
            .unwrap();
        for _ in 0..2_000 {
            star.phase += 0.016;
            let a = star.alpha();
            assert!((0.06..=0.85).contains(&a), "alpha out of range: {a}");
        }
    }
}
