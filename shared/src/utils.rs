//! # Shared Utility Functions
//!
//! Small display helpers used by the frontend.
//!
//! ## Country Flags
//!
//! [`flag_emoji`] converts a two-letter ISO country code into the pair of
//! Unicode regional-indicator symbols that most platforms render as a flag.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::flag_emoji;
//!
//! assert_eq!(flag_emoji("FR"), Some("\u{1F1EB}\u{1F1F7}".to_string()));
//! ```

/// First regional-indicator scalar, U+1F1E6 REGIONAL INDICATOR SYMBOL LETTER A.
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Convert a two-letter country code into a flag emoji.
///
/// Each ASCII letter is offset into the regional-indicator block; the two
/// resulting scalars are assembled in order. Returns `None` for anything
/// that is not exactly two ASCII letters.
pub fn flag_emoji(country_code: &str) -> Option<String> {
    let cc = country_code.trim();
    if cc.len() != 2 || !cc.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    cc.to_ascii_uppercase()
        .chars()
        .map(|c| char::from_u32(REGIONAL_INDICATOR_A + (c as u32 - 'A' as u32)))
        .collect()
}

/// First whitespace-separated token of a display name.
///
/// Guestbook stars are labeled with just the first name to keep the canvas
/// readable. An all-whitespace name yields an empty string.
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_emoji_fr() {
        // F and R regional indicators, in order
        assert_eq!(flag_emoji("FR").as_deref(), Some("\u{1F1EB}\u{1F1F7}"));
        assert_eq!(flag_emoji("fr"), flag_emoji("FR"));
    }

    #[test]
    fn test_flag_emoji_rejects_invalid() {
        assert_eq!(flag_emoji(""), None);
        assert_eq!(flag_emoji("F"), None);
        assert_eq!(flag_emoji("FRA"), None);
        assert_eq!(flag_emoji("1X"), None);
    }

    #[test]
    fn test_first_name() {
        assert_eq!(first_name("Grace Hopper"), "Grace");
        assert_eq!(first_name("  Ada   Lovelace "), "Ada");
        assert_eq!(first_name("solo"), "solo");
        assert_eq!(first_name("   "), "");
    }
}
