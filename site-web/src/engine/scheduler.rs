//! Frame scheduling
//!
//! Drives a per-frame callback from `requestAnimationFrame` using the
//! self-rescheduling closure pattern. The loop never starts when the user
//! prefers reduced motion, skips ticks while the page is hidden, and resets
//! its timestamp on `visibilitychange` so a resumed tab gets a fresh delta
//! instead of one huge catch-up step.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_utils::{document, window};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// True when `(prefers-reduced-motion: reduce)` matches.
pub fn prefers_reduced_motion() -> bool {
    window()
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub struct FrameLoop;

impl FrameLoop {
    /// Start a frame loop invoking `tick(timestamp_ms, delta_ms)` once per
    /// display refresh. `delta_ms` is 0.0 on the first tick and after every
    /// visibility resume. Does nothing under reduced motion.
    pub fn start(mut tick: impl FnMut(f64, f64) + 'static) {
        if prefers_reduced_motion() {
            return;
        }

        let last_ts = Rc::new(Cell::new(None::<f64>));

        {
            let last_ts = last_ts.clone();
            let on_visibility = Closure::<dyn FnMut()>::new(move || {
                last_ts.set(None);
            });
            let _ = document().add_event_listener_with_callback(
                "visibilitychange",
                on_visibility.as_ref().unchecked_ref(),
            );
            // page-lifetime listener
            on_visibility.forget();
        }

        let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let first = frame.clone();

        *first.borrow_mut() = Some(Closure::new(move |ts: f64| {
            if !document().hidden() {
                let dt = last_ts.get().map(|prev| ts - prev).unwrap_or(0.0);
                last_ts.set(Some(ts));
                tick(ts, dt);
            } else {
                last_ts.set(None);
            }
            request_frame(&frame);
        }));

        request_frame(&first);
    }
}

fn request_frame(frame: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let Some(closure) = frame.borrow().as_ref() {
        let _ = window().request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
