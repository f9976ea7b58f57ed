//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the site frontend and the
//! external services it talks to (contact endpoint, geo lookup, guestbook
//! store). All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the external interfaces
//!   - **[`dto::contact`]**: Contact form payloads
//!   - **[`dto::geo`]**: Geolocation lookup response
//!   - **[`dto::guestbook`]**: Guestbook entries and GraphQL envelopes
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::flag_emoji`]**: Country code to regional-indicator flag
//!   - **[`utils::first_name`]**: First name token of a display name
//!
//! ## Wire Format
//!
//! - Contact and geo payloads use the default `serde` snake_case mapping.
//! - Guestbook types cross a GraphQL boundary that expects **camelCase**,
//!   declared with `#[serde(rename_all = "camelCase")]`.
//! - Optional fields are omitted from JSON when `None`
//!   (`#[serde(skip_serializing_if = "Option::is_none")]`).

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience; shared is a DTO library
// where all exports are meant to be public API.
pub use dto::*;
pub use utils::*;
