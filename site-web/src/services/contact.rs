//! Contact form delivery pipeline
//!
//! Transports are attempted strictly in order; the first 2xx wins. Each
//! network attempt gets its own abort controller and timeout, so a hung
//! attempt cannot stall the pipeline and aborting one attempt never cancels
//! the next. The mail-composer link is a deliberate last resort, not a
//! transport: delivery through it is unconfirmed, so it reports its own
//! outcome instead of success.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use shared::dto::ContactRequest;
use web_sys::{AbortController, RequestCache, RequestMode};

use crate::state::config::SiteConfig;
use crate::utils::constants::SEND_TIMEOUT_MS;

/// One way of getting the payload to the other side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// `text/plain;charset=UTF-8` POST of the JSON body. A "simple" request
    /// in CORS terms, so no preflight round trip.
    PlainPost(String),
    /// `application/json` POST to the same endpoint, in case a proxy
    /// rejects the text/plain body.
    JsonPost(String),
    /// Third-party form relay.
    Relay(String),
}

/// Terminal result of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// A transport returned 2xx; the form should clear.
    Delivered,
    /// All transports failed but a mail composer was opened; the form keeps
    /// its values since delivery is unconfirmed.
    MailFallback,
    /// All transports failed and no mailto is configured.
    Failed,
}

/// Check required fields; the pipeline never touches the network on failure.
pub fn validate(payload: &ContactRequest) -> Result<(), &'static str> {
    if payload.is_complete() {
        Ok(())
    } else {
        Err("Please fill out all fields.")
    }
}

/// Ordered transports for this configuration.
pub fn transport_plan(config: &SiteConfig) -> Vec<Transport> {
    let mut plan = Vec::new();
    if let Some(url) = &config.contact_endpoint {
        plan.push(Transport::PlainPost(url.clone()));
        plan.push(Transport::JsonPost(url.clone()));
    }
    if let Some(url) = &config.relay_endpoint {
        plan.push(Transport::Relay(url.clone()));
    }
    plan
}

/// Pre-filled mail composition link for the last resort.
pub fn mailto_url(address: &str, payload: &ContactRequest) -> String {
    let subject = format!("Site contact from {}", payload.name);
    let body = format!("{}\n\nReply to: {}", payload.message, payload.email);
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// Run the pipeline to completion. Validation is the caller's business;
/// this assumes a complete payload.
pub async fn deliver(config: &SiteConfig, payload: &ContactRequest) -> DeliveryOutcome {
    for transport in transport_plan(config) {
        match attempt(&transport, payload).await {
            Ok(()) => {
                log::info!("contact delivered via {transport:?}");
                return DeliveryOutcome::Delivered;
            }
            Err(err) => log::warn!("contact transport {transport:?} failed: {err}"),
        }
    }

    if let Some(address) = &config.contact_mailto {
        let href = mailto_url(address, payload);
        let _ = gloo_utils::window().location().set_href(&href);
        return DeliveryOutcome::MailFallback;
    }

    DeliveryOutcome::Failed
}

/// One bounded attempt: abort the fetch if it outlives [`SEND_TIMEOUT_MS`].
async fn attempt(transport: &Transport, payload: &ContactRequest) -> Result<(), String> {
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    // Dropping the Timeout on the way out cancels the pending abort.
    let _abort_timer = controller.clone().map(|controller| {
        Timeout::new(SEND_TIMEOUT_MS, move || controller.abort())
    });

    let request = match transport {
        Transport::PlainPost(url) => Request::post(url)
            .abort_signal(signal.as_ref())
            .mode(RequestMode::Cors)
            .cache(RequestCache::NoStore)
            .header("Content-Type", "text/plain;charset=UTF-8")
            .body(serde_json::to_string(payload).map_err(|e| e.to_string())?)
            .map_err(|e| e.to_string())?,
        Transport::JsonPost(url) | Transport::Relay(url) => Request::post(url)
            .abort_signal(signal.as_ref())
            .mode(RequestMode::Cors)
            .cache(RequestCache::NoStore)
            .json(payload)
            .map_err(|e| e.to_string())?,
    };

    let response = request.send().await.map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("endpoint returned {}", response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ContactRequest {
        ContactRequest::from_fields("Ada", "ada@example.com", "hello there")
    }

    #[test]
    fn test_validate_requires_every_field() {
        assert!(validate(&payload()).is_ok());
        let empty = ContactRequest::from_fields("Ada", "   ", "hello");
        assert_eq!(validate(&empty), Err("Please fill out all fields."));
    }

    #[test]
    fn test_plan_orders_plain_then_json_then_relay() {
        let config = SiteConfig {
            contact_endpoint: Some("https://fn.example/contact".to_string()),
            relay_endpoint: Some("https://relay.example/f/1".to_string()),
            ..SiteConfig::default()
        };
        assert_eq!(
            transport_plan(&config),
            vec![
                Transport::PlainPost("https://fn.example/contact".to_string()),
                Transport::JsonPost("https://fn.example/contact".to_string()),
                Transport::Relay("https://relay.example/f/1".to_string()),
            ]
        );
    }

    #[test]
    fn test_plan_skips_unconfigured_endpoints() {
        assert!(transport_plan(&SiteConfig::default()).is_empty());

        let relay_only = SiteConfig {
            relay_endpoint: Some("https://relay.example/f/1".to_string()),
            ..SiteConfig::default()
        };
        assert_eq!(
            transport_plan(&relay_only),
            vec![Transport::Relay("https://relay.example/f/1".to_string())]
        );
    }

    #[test]
    fn test_mailto_encodes_subject_and_body() {
        let url = mailto_url("me@example.com", &payload());
        assert!(url.starts_with("mailto:me@example.com?subject="));
        assert!(url.contains("Site%20contact%20from%20Ada"));
        assert!(url.contains("Reply%20to%3A%20ada%40example.com"));
        assert!(!url.contains(' '));
    }
}
