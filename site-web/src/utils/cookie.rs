//! Cookie-string parsing
//!
//! `document.cookie` hands back every cookie in one `k=v; k2=v2` string;
//! this picks a single value out of it without touching the DOM, so the
//! parsing is testable on the host.

use std::borrow::Cow;

/// Value of the named cookie within a raw `document.cookie` string.
pub fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then_some(value)
        })
        .map(|value| {
            urlencoding::decode(value)
                .map(Cow::into_owned)
                .unwrap_or_else(|_| value.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_cookie_among_many() {
        let header = "theme=dark; CloudFront-Viewer-Country=FR; session=abc123";
        assert_eq!(
            cookie_value(header, "CloudFront-Viewer-Country").as_deref(),
            Some("FR")
        );
    }

    #[test]
    fn test_missing_cookie() {
        assert_eq!(cookie_value("theme=dark", "country"), None);
        assert_eq!(cookie_value("", "country"), None);
    }

    #[test]
    fn test_name_must_match_exactly() {
        let header = "xcountry=DE; country=FR";
        assert_eq!(cookie_value(header, "country").as_deref(), Some("FR"));
    }

    #[test]
    fn test_percent_decoding() {
        let header = "greeting=hello%20world";
        assert_eq!(cookie_value(header, "greeting").as_deref(), Some("hello world"));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let header = "token=a=b=c";
        assert_eq!(cookie_value(header, "token").as_deref(), Some("a=b=c"));
    }
}
