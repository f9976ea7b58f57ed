//! # Data Transfer Objects (DTOs)
//!
//! Wire types for everything the frontend sends to or receives from the
//! outside world.
//!
//! ## Module Organization
//!
//! - [`contact`] - Contact form submission payloads
//! - [`geo`] - Visitor geolocation lookup response
//! - [`guestbook`] - Guestbook entries and the GraphQL request/response
//!   envelopes used to read and write them

pub mod contact;
pub mod geo;
pub mod guestbook;

pub use contact::*;
pub use geo::*;
pub use guestbook::*;
