use lazy_static::lazy_static;
use regex::Regex;

use super::{PatternMatcher, PatternRule};
use crate::EntityKind;

// Area code is optional, so bare seven-digit numbers match too.
pub const RULE: PatternRule = PatternRule {
    kind: EntityKind::Phone,
    pattern: r"(?:\(\d{3}\)\s?|\d{3}[-.]?)?\d{3}[-.]?\d{4}",
    case_insensitive: false,
};

lazy_static! {
    static ref PHONE_PATTERN: Regex = RULE.compile(true).unwrap();
    pub(crate) static ref PHONE_EXTRACTION_PATTERN: Regex = RULE.compile(false).unwrap();
}

pub fn is_match(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

pub fn extract_phonenumbers(text: &str) -> Vec<String> {
    super::find_all(&PHONE_EXTRACTION_PATTERN, text, None)
}

pub struct PhoneNumberMatcher;

impl PatternMatcher for PhoneNumberMatcher {
    fn kind(&self) -> EntityKind {
        EntityKind::Phone
    }

    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone_numbers() {
        let valid_phones = vec![
            "(123) 456-7890",
            "(123)456-7890",
            "123-456-7890",
            "123.456.7890",
            "1234567890",
            "456-7890",
            "4567890",
        ];

        for phone in valid_phones {
            assert!(is_match(phone), "Should match: {}", phone);
        }
    }

    #[test]
    fn test_invalid_phone_numbers() {
        let invalid_phones = vec![
            "12345",
            "123-456",
            "123-45-678",
            "abcd",
            "+1-123-456-7890",
            "(123 456-7890",
        ];

        for phone in invalid_phones {
            assert!(!is_match(phone), "Should not match: {}", phone);
        }
    }

    #[test]
    fn test_extract_phonenumbers() {
        let text = "Office: (123) 456-7890, Mobile: 123-456-7890, Fax: 123.456.7890\n\
                    Short: 12345, Partial: 123-456";
        assert_eq!(
            extract_phonenumbers(text),
            vec!["(123) 456-7890", "123-456-7890", "123.456.7890"]
        );
    }

    #[test]
    fn test_extract_skips_country_prefix() {
        assert_eq!(
            extract_phonenumbers("International: +1-123-456-7890"),
            vec!["123-456-7890"]
        );
    }
}
