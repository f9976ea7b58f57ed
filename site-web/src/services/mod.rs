//! Service layer
//!
//! Everything that leaves the page: contact form delivery, visitor
//! geolocation, and the guestbook store.

pub mod contact;
pub mod geo;
pub mod guestbook;
