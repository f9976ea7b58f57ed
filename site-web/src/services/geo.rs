//! Visitor geolocation
//!
//! Resolves a two-letter country code, cookie first (set by the CDN edge,
//! no network), then a remote lookup. The outcome — including a failed
//! one — is memoized for the rest of the page session. Failure is silent;
//! callers just see `None`.

use std::cell::RefCell;

use gloo_net::http::Request;
use shared::dto::GeoLookupResponse;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, RequestCache};

use crate::utils::constants::COUNTRY_COOKIE;
use crate::utils::cookie::cookie_value;

thread_local! {
    /// `None` = not resolved yet; `Some(None)` = resolved to nothing.
    static RESOLVED: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

/// Country code from the edge cookie, if present and well-formed.
pub fn country_from_cookie() -> Option<String> {
    let document = gloo_utils::document().dyn_into::<HtmlDocument>().ok()?;
    let cookies = document.cookie().ok()?;
    normalize(&cookie_value(&cookies, COUNTRY_COOKIE)?)
}

/// The memoized result of an earlier [`resolve_country`] call, if any.
pub fn cached_country() -> Option<String> {
    RESOLVED.with(|cell| cell.borrow().clone().flatten())
}

/// Resolve the viewer's country code, memoizing the outcome.
pub async fn resolve_country(geo_endpoint: &str) -> Option<String> {
    if let Some(outcome) = RESOLVED.with(|cell| cell.borrow().clone()) {
        return outcome;
    }

    let resolved = match country_from_cookie() {
        Some(code) => Some(code),
        None => lookup_remote(geo_endpoint).await,
    };

    RESOLVED.with(|cell| *cell.borrow_mut() = Some(resolved.clone()));
    resolved
}

async fn lookup_remote(geo_endpoint: &str) -> Option<String> {
    let response = Request::get(geo_endpoint)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .ok()?;
    if !response.ok() {
        log::warn!("geo lookup returned {}", response.status());
        return None;
    }
    response
        .json::<GeoLookupResponse>()
        .await
        .ok()?
        .country_code()
}

fn normalize(code: &str) -> Option<String> {
    let code = code.trim();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(code.to_ascii_uppercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_accepts_only_two_letters() {
        assert_eq!(normalize("fr").as_deref(), Some("FR"));
        assert_eq!(normalize(" DE ").as_deref(), Some("DE"));
        assert_eq!(normalize("FRA"), None);
        assert_eq!(normalize("F"), None);
        assert_eq!(normalize("12"), None);
    }
}
