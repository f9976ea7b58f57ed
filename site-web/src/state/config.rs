//! Site configuration context
//!
//! Endpoint URLs and the guestbook API key are deployment details, not code:
//! they are read once from `data-*` attributes on `<body>` (set by the
//! hosting layer) and provided to the component tree as Leptos context. A
//! missing attribute simply disables the feature that needed it.

use leptos::prelude::*;

use crate::utils::constants::DEFAULT_GEO_ENDPOINT;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Primary contact endpoint (accepts text/plain and JSON POSTs).
    pub contact_endpoint: Option<String>,
    /// Third-party form relay, tried after the primary endpoint.
    pub relay_endpoint: Option<String>,
    /// Address for the mail-composer last resort.
    pub contact_mailto: Option<String>,
    /// Geolocation lookup URL.
    pub geo_endpoint: String,
    /// Guestbook GraphQL endpoint.
    pub guestbook_endpoint: Option<String>,
    /// Static API key sent as `x-api-key` to the guestbook store.
    pub guestbook_api_key: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: None,
            relay_endpoint: None,
            contact_mailto: None,
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            guestbook_endpoint: None,
            guestbook_api_key: None,
        }
    }
}

impl SiteConfig {
    /// Read configuration from `data-*` attributes on the document body.
    pub fn from_document() -> Self {
        let body = gloo_utils::body();
        let attr = |name: &str| {
            body.get_attribute(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            contact_endpoint: attr("data-contact-endpoint"),
            relay_endpoint: attr("data-relay-endpoint"),
            contact_mailto: attr("data-contact-mailto"),
            geo_endpoint: attr("data-geo-endpoint")
                .unwrap_or_else(|| DEFAULT_GEO_ENDPOINT.to_string()),
            guestbook_endpoint: attr("data-guestbook-endpoint"),
            guestbook_api_key: attr("data-guestbook-api-key"),
        }
    }
}

pub fn provide_site_config() -> SiteConfig {
    let config = SiteConfig::from_document();
    provide_context(config.clone());
    config
}

pub fn use_site_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}
