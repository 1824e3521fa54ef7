use lazy_static::lazy_static;
use regex::Regex;

use super::PatternRule;
use crate::EntityKind;

pub const RULE: PatternRule = PatternRule {
    kind: EntityKind::Currency,
    pattern: r"\$\d{1,3}(?:,\d{3})*(?:\.\d{2})?|\b\d+\s*(?:dollars|USD)\b",
    case_insensitive: true,
};

lazy_static! {
    pub(crate) static ref CURRENCY_PATTERN: Regex = RULE.compile(false).unwrap();
}

pub fn extract_currency(text: &str) -> Vec<String> {
    super::find_all(&CURRENCY_PATTERN, text, None)
}
