//! Animation engine
//!
//! The simulation side of the canvas backdrops, kept free of `web-sys` so it
//! runs under plain `cargo test` on the host. The only browser-facing piece
//! is [`scheduler`], which owns the `requestAnimationFrame` loop.

pub mod rain;
pub mod rng;
pub mod scheduler;
pub mod starfield;
