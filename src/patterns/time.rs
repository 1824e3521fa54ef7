use lazy_static::lazy_static;
use regex::Regex;

use super::PatternRule;
use crate::EntityKind;

pub const TWENTY_FOUR_HOUR_RULE: PatternRule = PatternRule {
    kind: EntityKind::Time24h,
    pattern: r"\b(?:[01]?[0-9]|2[0-3]):[0-5][0-9]\b",
    case_insensitive: false,
};

pub const TWELVE_HOUR_RULE: PatternRule = PatternRule {
    kind: EntityKind::Time12h,
    pattern: r"\b(?:1[0-2]|0?[1-9]):[0-5][0-9]\s?(?:AM|PM|am|pm)\b",
    case_insensitive: true,
};

lazy_static! {
    pub(crate) static ref TWENTY_FOUR_HOUR_PATTERN: Regex = TWENTY_FOUR_HOUR_RULE.compile(false).unwrap();
    pub(crate) static ref TWELVE_HOUR_PATTERN: Regex = TWELVE_HOUR_RULE.compile(false).unwrap();
}

pub fn extract_twenty_four_hour(text: &str) -> Vec<String> {
    super::find_all(&TWENTY_FOUR_HOUR_PATTERN, text, None)
}

pub fn extract_twelve_hour(text: &str) -> Vec<String> {
    super::find_all(&TWELVE_HOUR_PATTERN, text, None)
}
