//! Canvas plumbing shared by the backdrop components.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Integer device-pixel ratio, at least 1.
pub(crate) fn device_pixel_ratio() -> f64 {
    gloo_utils::window().device_pixel_ratio().max(1.0).floor()
}

pub(crate) fn viewport_size() -> (f64, f64) {
    let window = gloo_utils::window();
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Size the backing store to viewport * dpr while keeping the CSS size in
/// CSS pixels. Returns the backing-store dimensions.
pub(crate) fn fit_to_viewport(canvas: &HtmlCanvasElement, dpr: f64) -> (f64, f64) {
    let (css_width, css_height) = viewport_size();
    let width = (css_width * dpr).floor();
    let height = (css_height * dpr).floor();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{css_width}px"));
    let _ = style.set_property("height", &format!("{css_height}px"));
    (width, height)
}

pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}
