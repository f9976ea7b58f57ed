//! Digital Rain Background Component
//!
//! Falling glyph streams on a translucent-fade canvas. Simulation in
//! [`crate::engine::rain`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::components::canvas::{context_2d, fit_to_viewport};
use crate::engine::rain::RainField;
use crate::engine::rng::JsRng;
use crate::engine::scheduler::FrameLoop;
use crate::utils::constants::RAIN_FONT_SIZE;

#[component]
pub fn DigitalRain() -> impl IntoView {
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(100).await;
            let Some(element) = gloo_utils::document().get_element_by_id("digital-rain") else {
                return;
            };
            let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
                return;
            };
            start(canvas);
        });
    });

    view! { <canvas class="digital-rain" id="digital-rain" aria-hidden="true"></canvas> }
}

fn start(canvas: HtmlCanvasElement) {
    let Some(ctx) = context_2d(&canvas) else {
        log::warn!("digital rain: 2d context unavailable");
        return;
    };

    // CSS-pixel backing store; the glyphs are chunky on purpose
    let (width, height) = fit_to_viewport(&canvas, 1.0);
    let field = Rc::new(RefCell::new(RainField::new(width, height, RAIN_FONT_SIZE)));

    {
        let canvas = canvas.clone();
        let field = field.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let (width, height) = fit_to_viewport(&canvas, 1.0);
            field.borrow_mut().resize(width, height);
        });
        let _ = gloo_utils::window()
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();
    }

    let font = format!("{RAIN_FONT_SIZE}px monospace");
    FrameLoop::start(move |_now_ms, _dt| {
        let mut field = field.borrow_mut();
        let (width, height) = (canvas.width() as f64, canvas.height() as f64);

        ctx.set_fill_style_str("rgba(0,0,0,0.08)");
        ctx.fill_rect(0.0, 0.0, width, height);

        ctx.set_fill_style_str("#00ffff");
        ctx.set_font(&font);
        let mut buf = [0u8; 4];
        field.step(&mut JsRng, |glyph, x, y| {
            let _ = ctx.fill_text(glyph.encode_utf8(&mut buf), x, y);
        });
    });
}
