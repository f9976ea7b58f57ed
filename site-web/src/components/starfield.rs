//! Starfield Background Component
//!
//! Full-viewport canvas of twinkling stars with an occasional shooting
//! star. The simulation lives in [`crate::engine::starfield`]; this
//! component owns the canvas, the resize listener and the paint code.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::canvas::{context_2d, device_pixel_ratio, fit_to_viewport};
use crate::engine::rng::JsRng;
use crate::engine::scheduler::FrameLoop;
use crate::engine::starfield::{Shooter, StarField, StarfieldConfig};

#[component]
pub fn Starfield() -> impl IntoView {
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            // wait a beat for the canvas to land in the DOM
            TimeoutFuture::new(100).await;
            let Some(element) = gloo_utils::document().get_element_by_id("starfield") else {
                return;
            };
            let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
                return;
            };
            start(canvas);
        });
    });

    view! { <canvas class="starfield" id="starfield" aria-hidden="true"></canvas> }
}

fn start(canvas: HtmlCanvasElement) {
    let Some(ctx) = context_2d(&canvas) else {
        log::warn!("starfield: 2d context unavailable");
        return;
    };

    let dpr = device_pixel_ratio();
    let (width, height) = fit_to_viewport(&canvas, dpr);
    let field = Rc::new(RefCell::new(StarField::new(
        width,
        height,
        dpr,
        StarfieldConfig::default(),
        &mut JsRng,
    )));

    {
        let canvas = canvas.clone();
        let field = field.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let dpr = device_pixel_ratio();
            let (width, height) = fit_to_viewport(&canvas, dpr);
            field.borrow_mut().resize(width, height, dpr, &mut JsRng);
        });
        let _ = gloo_utils::window()
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();
    }

    FrameLoop::start(move |now_ms, _dt| {
        let mut field = field.borrow_mut();
        field.step(now_ms, &mut JsRng);
        paint(&ctx, &field);
    });
}

fn paint(ctx: &CanvasRenderingContext2d, field: &StarField) {
    ctx.set_fill_style_str("#000013");
    ctx.fill_rect(0.0, 0.0, field.width(), field.height());

    ctx.save();
    ctx.set_fill_style_str("#ffffff");
    for star in field.stars() {
        ctx.set_global_alpha(star.alpha());
        ctx.begin_path();
        let _ = ctx.arc(star.x, star.y, star.radius, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
    ctx.restore();

    if let Some(shooter) = field.shooter() {
        paint_shooter(ctx, shooter, field.dpr());
    }
}

fn paint_shooter(ctx: &CanvasRenderingContext2d, shooter: &Shooter, dpr: f64) {
    ctx.save();
    // additive blend so overlapping trails brighten instead of occlude
    let _ = ctx.set_global_composite_operation("lighter");
    ctx.set_shadow_blur(12.0 * dpr);
    ctx.set_shadow_color("rgba(0,255,255,0.55)");

    let tail_x = shooter.x - shooter.vx;
    let tail_y = shooter.y - shooter.vy;
    let gradient = ctx.create_linear_gradient(shooter.x, shooter.y, tail_x, tail_y);
    let _ = gradient.add_color_stop(0.0, "rgba(255,255,255,1)");
    let _ = gradient.add_color_stop(0.4, "rgba(160,245,255,0.9)");
    let _ = gradient.add_color_stop(1.0, "rgba(0,255,255,0)");

    ctx.set_stroke_style_canvas_gradient(&gradient);
    ctx.set_line_width(shooter.tail_width);
    ctx.set_line_cap("round");
    ctx.begin_path();
    ctx.move_to(shooter.x, shooter.y);
    ctx.line_to(tail_x, tail_y);
    ctx.stroke();

    ctx.set_fill_style_str("rgba(255,255,255,0.95)");
    ctx.begin_path();
    let _ = ctx.arc(
        shooter.x,
        shooter.y,
        shooter.head_radius,
        0.0,
        std::f64::consts::TAU,
    );
    ctx.fill();
    ctx.restore();
}
