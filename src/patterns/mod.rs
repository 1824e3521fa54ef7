pub mod creditcard;
pub mod currency;
pub mod email;
pub mod phonenumber;
pub mod time;
pub mod url;

use regex::{Regex, RegexBuilder};

use crate::error::Result;
use crate::EntityKind;

/// Recognition rule for one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    pub kind: EntityKind,
    pub pattern: &'static str,
    pub case_insensitive: bool,
}

impl PatternRule {
    /// Compile the rule. An anchored regex must consume the whole input.
    pub fn compile(&self, anchored: bool) -> Result<Regex> {
        let source = if anchored {
            format!("^(?:{})$", self.pattern)
        } else {
            self.pattern.to_string()
        };

        let regex = RegexBuilder::new(&source)
            .case_insensitive(self.case_insensitive)
            .build()?;
        Ok(regex)
    }
}

/// Full-string check for the kinds that expose a validator.
pub trait PatternMatcher: Send + Sync {
    fn kind(&self) -> EntityKind;
    fn matches(&self, value: &str) -> bool;
}

/// Non-overlapping matches of `regex` in `text`, left to right.
///
/// `cut` marks where `text` was truncated from a longer input. A match ending
/// there may be a fragment of a longer token, so it is dropped.
pub fn find_all(regex: &Regex, text: &str, cut: Option<usize>) -> Vec<String> {
    regex
        .find_iter(text)
        .filter(|m| Some(m.end()) != cut)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Unanchored regex used to scan text for `kind`.
pub fn extraction_regex(kind: EntityKind) -> &'static Regex {
    match kind {
        EntityKind::Email => &*email::EMAIL_EXTRACTION_PATTERN,
        EntityKind::Url => &*url::URL_EXTRACTION_PATTERN,
        EntityKind::Phone => &*phonenumber::PHONE_EXTRACTION_PATTERN,
        EntityKind::CreditCard => &*creditcard::CREDIT_CARD_EXTRACTION_PATTERN,
        EntityKind::Time24h => &*time::TWENTY_FOUR_HOUR_PATTERN,
        EntityKind::Time12h => &*time::TWELVE_HOUR_PATTERN,
        EntityKind::Currency => &*currency::CURRENCY_PATTERN,
    }
}

/// One rule per kind, in `EntityKind::ALL` order.
pub static RULES: [PatternRule; 7] = [
    email::RULE,
    url::RULE,
    phonenumber::RULE,
    creditcard::RULE,
    time::TWENTY_FOUR_HOUR_RULE,
    time::TWELVE_HOUR_RULE,
    currency::RULE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_matches_kinds() {
        for (rule, kind) in RULES.iter().zip(EntityKind::ALL) {
            assert_eq!(rule.kind, kind);
        }
    }

    #[test]
    fn test_all_rules_compile() {
        for rule in RULES {
            assert!(rule.compile(false).is_ok(), "{} should compile", rule.kind);
            assert!(rule.compile(true).is_ok(), "{} should compile anchored", rule.kind);
        }
    }

    #[test]
    fn test_case_sensitivity_flags() {
        let insensitive: Vec<EntityKind> = RULES
            .iter()
            .filter(|rule| rule.case_insensitive)
            .map(|rule| rule.kind)
            .collect();
        assert_eq!(
            insensitive,
            vec![
                EntityKind::Email,
                EntityKind::Url,
                EntityKind::Time12h,
                EntityKind::Currency
            ]
        );
    }

    #[test]
    fn test_find_all_drops_match_at_cut() {
        let regex = email::RULE.compile(false).unwrap();
        let text = "a@example.com then b@example.co";
        assert_eq!(find_all(&regex, text, Some(text.len())), vec!["a@example.com"]);
        assert_eq!(
            find_all(&regex, text, None),
            vec!["a@example.com", "b@example.co"]
        );
        // Ends before the cut, so it is whole
        assert_eq!(find_all(&regex, "x@example.com ", Some(14)), vec!["x@example.com"]);
    }

    #[test]
    fn test_anchored_rejects_surrounding_text() {
        let regex = email::RULE.compile(true).unwrap();
        assert!(regex.is_match("user@example.com"));
        assert!(!regex.is_match("mail user@example.com"));
    }
}
