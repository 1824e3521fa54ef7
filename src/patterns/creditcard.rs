use lazy_static::lazy_static;
use regex::Regex;

use super::{PatternMatcher, PatternRule};
use crate::EntityKind;

pub const RULE: PatternRule = PatternRule {
    kind: EntityKind::CreditCard,
    pattern: r"\b(?:\d{4}[- ]?){3}\d{4}\b",
    case_insensitive: false,
};

lazy_static! {
    static ref CREDIT_CARD_PATTERN: Regex = RULE.compile(true).unwrap();
    pub(crate) static ref CREDIT_CARD_EXTRACTION_PATTERN: Regex = RULE.compile(false).unwrap();
}

pub fn is_match(value: &str) -> bool {
    CREDIT_CARD_PATTERN.is_match(value)
}

pub fn extract_credit_cards(text: &str) -> Vec<String> {
    super::find_all(&CREDIT_CARD_EXTRACTION_PATTERN, text, None)
}

pub struct CreditCardMatcher;

impl PatternMatcher for CreditCardMatcher {
    fn kind(&self) -> EntityKind {
        EntityKind::CreditCard
    }

    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}
