use serde::{Deserialize, Serialize};

/// Contact form submission payload
///
/// The contact endpoint accepts the same JSON body whether it arrives as a
/// `text/plain` simple request or an `application/json` request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// Build a payload from raw field values, trimming surrounding whitespace.
    pub fn from_fields(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// True when every required field is non-empty after trimming.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_trims() {
        let req = ContactRequest::from_fields("  Ada ", "ada@example.com\n", " hi ");
        assert_eq!(req.name, "Ada");
        assert_eq!(req.email, "ada@example.com");
        assert_eq!(req.message, "hi");
    }

    #[test]
    fn test_is_complete() {
        assert!(ContactRequest::from_fields("a", "b", "c").is_complete());
        assert!(!ContactRequest::from_fields("a", "   ", "c").is_complete());
        assert!(!ContactRequest::from_fields("", "b", "c").is_complete());
    }
}
