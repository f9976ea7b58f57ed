//! UI Components

pub mod canvas;
pub mod contact;
pub mod gallery;
pub mod geo_chip;
pub mod guestbook;
pub mod navbar;
pub mod progress;
pub mod rain;
pub mod starfield;

pub use contact::ContactForm;
pub use gallery::Gallery;
pub use geo_chip::GeoChip;
pub use guestbook::Guestbook;
pub use navbar::Navbar;
pub use progress::ScrollProgress;
pub use rain::DigitalRain;
pub use starfield::Starfield;
