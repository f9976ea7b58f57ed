//! Application state

pub mod config;
pub mod lightbox;
