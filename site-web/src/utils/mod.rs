//! Utility functions

pub mod constants;
pub mod cookie;
