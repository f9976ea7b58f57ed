//! Application constants

/// Cookie set by the CDN edge with the viewer's two-letter country code.
pub const COUNTRY_COOKIE: &str = "CloudFront-Viewer-Country";

/// Default geolocation lookup when the host sets no `data-geo-endpoint`.
pub const DEFAULT_GEO_ENDPOINT: &str = "https://ipapi.co/json/";

/// Per-attempt bound on contact transports before the request is aborted.
pub const SEND_TIMEOUT_MS: u32 = 15_000;

// Animation tuning
pub const RAIN_FONT_SIZE: f64 = 16.0;

// Guestbook
pub const GUESTBOOK_LIST_LIMIT: u32 = 60;
/// Hover hit-test radius around a guestbook star, in canvas pixels.
pub const GUESTBOOK_HOVER_RADIUS: f64 = 12.0;
