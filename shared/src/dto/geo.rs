use serde::{Deserialize, Serialize};

/// Response from the remote geolocation lookup.
///
/// Only the country code is consumed; everything else the lookup service
/// returns is ignored by serde.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeoLookupResponse {
    pub country: Option<String>,
}

impl GeoLookupResponse {
    /// The two-letter uppercase country code, if the response carried one.
    pub fn country_code(&self) -> Option<String> {
        let cc = self.country.as_deref()?.trim();
        if cc.len() == 2 && cc.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(cc.to_ascii_uppercase())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_normalizes() {
        let resp = GeoLookupResponse { country: Some("fr".to_string()) };
        assert_eq!(resp.country_code().as_deref(), Some("FR"));
    }

    #[test]
    fn test_country_code_rejects_junk() {
        assert_eq!(GeoLookupResponse { country: None }.country_code(), None);
        assert_eq!(
            GeoLookupResponse { country: Some("FRA".to_string()) }.country_code(),
            None
        );
        assert_eq!(
            GeoLookupResponse { country: Some("1X".to_string()) }.country_code(),
            None
        );
    }
}
