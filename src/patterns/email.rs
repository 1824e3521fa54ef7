use lazy_static::lazy_static;
use regex::Regex;

use super::{PatternMatcher, PatternRule};
use crate::EntityKind;

pub const RULE: PatternRule = PatternRule {
    kind: EntityKind::Email,
    pattern: r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
    case_insensitive: true,
};

lazy_static! {
    static ref EMAIL_PATTERN: Regex = RULE.compile(true).unwrap();
    pub(crate) static ref EMAIL_EXTRACTION_PATTERN: Regex = RULE.compile(false).unwrap();
}

pub fn is_match(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn extract_emails(text: &str) -> Vec<String> {
    super::find_all(&EMAIL_EXTRACTION_PATTERN, text, None)
}

pub struct EmailMatcher;

impl PatternMatcher for EmailMatcher {
    fn kind(&self) -> EntityKind {
        EntityKind::Email
    }

    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}
