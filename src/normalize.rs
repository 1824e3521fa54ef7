//! Canonicalization of recognized card and phone values.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref CARD_SEPARATORS: Regex = Regex::new(r"[\s-]").unwrap();
    static ref NON_DIGITS: Regex = Regex::new(r"\D").unwrap();
}

/// Output style for [`format_phone_number`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneFormat {
    /// `(DDD) DDD-DDDD`
    #[default]
    Standard,
    /// `+1-DDD-DDD-DDDD`
    International,
    /// Bare digits.
    Digits,
}

impl From<&str> for PhoneFormat {
    /// Unrecognized names fall back to [`PhoneFormat::Digits`].
    fn from(name: &str) -> Self {
        match name {
            "standard" => PhoneFormat::Standard,
            "international" => PhoneFormat::International,
            _ => PhoneFormat::Digits,
        }
    }
}

/// Strip spaces, other whitespace and hyphens. No validation is performed.
pub fn clean_credit_card(card: &str) -> String {
    CARD_SEPARATORS.replace_all(card, "").into_owned()
}

/// Reformat a phone number. Anything that is not exactly ten digits comes back
/// as its bare digits, whatever the requested style.
pub fn format_phone_number(phone: &str, format: PhoneFormat) -> String {
    let digits = NON_DIGITS.replace_all(phone, "").into_owned();
    let chars: Vec<char> = digits.chars().collect();
    if chars.len() != 10 {
        return digits;
    }

    let area: String = chars[..3].iter().collect();
    let exchange: String = chars[3..6].iter().collect();
    let line: String = chars[6..].iter().collect();

    match format {
        PhoneFormat::Standard => format!("({}) {}-{}", area, exchange, line),
        PhoneFormat::International => format!("+1-{}-{}-{}", area, exchange, line),
        PhoneFormat::Digits => digits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_credit_card() {
        assert_eq!(clean_credit_card("1234 5678 9012 3456"), "1234567890123456");
        assert_eq!(clean_credit_card("1234-5678-9012-3456"), "1234567890123456");
        assert_eq!(clean_credit_card("1234\t5678-9012 3456"), "1234567890123456");
        // No validation
        assert_eq!(clean_credit_card("12-ab cd"), "12abcd");
    }

    #[test]
    fn test_clean_credit_card_idempotent() {
        for card in ["1234 5678 9012 3456", "1234-5678", "", " - ", "abc-def"] {
            let once = clean_credit_card(card);
            assert_eq!(clean_credit_card(&once), once);
        }
    }

    #[test]
    fn test_format_phone_styles() {
        assert_eq!(
            format_phone_number("123-456-7890", PhoneFormat::Standard),
            "(123) 456-7890"
        );
        assert_eq!(
            format_phone_number("123.456.7890", PhoneFormat::International),
            "+1-123-456-7890"
        );
        assert_eq!(
            format_phone_number("(123) 456-7890", PhoneFormat::Digits),
            "1234567890"
        );
    }

    #[test]
    fn test_format_phone_fallback() {
        assert_eq!(format_phone_number("12345", PhoneFormat::default()), "12345");
        assert_eq!(
            format_phone_number("+1-123-456-7890", PhoneFormat::Standard),
            "11234567890"
        );
        assert_eq!(format_phone_number("456-7890", PhoneFormat::International), "4567890");
        assert_eq!(format_phone_number("", PhoneFormat::Standard), "");
    }

    #[test]
    fn test_phone_format_from_name() {
        assert_eq!(PhoneFormat::from("standard"), PhoneFormat::Standard);
        assert_eq!(PhoneFormat::from("international"), PhoneFormat::International);
        assert_eq!(PhoneFormat::from("digits"), PhoneFormat::Digits);
        assert_eq!(PhoneFormat::from("fancy"), PhoneFormat::Digits);
        assert_eq!(
            format_phone_number("123-456-7890", PhoneFormat::from("fancy")),
            "1234567890"
        );
    }
}
