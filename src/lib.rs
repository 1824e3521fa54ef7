//! Regex-based extraction, validation and normalization of emails, URLs,
//! phone numbers, credit-card numbers, times and currency amounts.

pub mod config;
pub mod error;
pub mod normalize;
pub mod patterns;
pub mod report;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use config::ExtractorConfig;
pub use error::{Error, Result};
pub use normalize::{clean_credit_card, format_phone_number, PhoneFormat};
use patterns::{creditcard, email, phonenumber, url};
pub use patterns::{PatternMatcher, PatternRule};

/// The entity categories the extractor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Email,
    Url,
    Phone,
    CreditCard,
    #[serde(rename = "time_24h")]
    Time24h,
    #[serde(rename = "time_12h")]
    Time12h,
    Currency,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Email,
        EntityKind::Url,
        EntityKind::Phone,
        EntityKind::CreditCard,
        EntityKind::Time24h,
        EntityKind::Time12h,
        EntityKind::Currency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Email => "email",
            EntityKind::Url => "url",
            EntityKind::Phone => "phone",
            EntityKind::CreditCard => "credit_card",
            EntityKind::Time24h => "time_24h",
            EntityKind::Time12h => "time_12h",
            EntityKind::Currency => "currency",
        }
    }

    pub fn rule(&self) -> &'static PatternRule {
        &patterns::RULES[*self as usize]
    }

    /// Full-string matcher, present only for kinds with a validator.
    pub fn matcher(&self) -> Option<&'static dyn PatternMatcher> {
        match self {
            EntityKind::Email => Some(&email::EmailMatcher),
            EntityKind::Url => Some(&url::UrlMatcher),
            EntityKind::Phone => Some(&phonenumber::PhoneNumberMatcher),
            EntityKind::CreditCard => Some(&creditcard::CreditCardMatcher),
            EntityKind::Time24h | EntityKind::Time12h | EntityKind::Currency => None,
        }
    }

    pub fn has_validator(&self) -> bool {
        self.matcher().is_some()
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(EntityKind::Email),
            "url" => Ok(EntityKind::Url),
            "phone" | "phonenumber" => Ok(EntityKind::Phone),
            "credit_card" | "creditcard" => Ok(EntityKind::CreditCard),
            "time_24h" | "time24" => Ok(EntityKind::Time24h),
            "time_12h" | "time12" => Ok(EntityKind::Time12h),
            "currency" => Ok(EntityKind::Currency),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

/// Times found in a text, split by grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFormats {
    #[serde(rename = "12_hour")]
    pub twelve_hour: Vec<String>,
    #[serde(rename = "24_hour")]
    pub twenty_four_hour: Vec<String>,
}

impl TimeFormats {
    pub fn len(&self) -> usize {
        self.twelve_hour.len() + self.twenty_four_hour.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything [`DataExtractor::extract_all`] found, per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub emails: Vec<String>,
    pub urls: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub credit_cards: Vec<String>,
    pub time_formats: TimeFormats,
    pub currency: Vec<String>,
}

impl ExtractionResult {
    pub fn matches(&self, kind: EntityKind) -> &[String] {
        match kind {
            EntityKind::Email => &self.emails,
            EntityKind::Url => &self.urls,
            EntityKind::Phone => &self.phone_numbers,
            EntityKind::CreditCard => &self.credit_cards,
            EntityKind::Time24h => &self.time_formats.twenty_four_hour,
            EntityKind::Time12h => &self.time_formats.twelve_hour,
            EntityKind::Currency => &self.currency,
        }
    }

    fn matches_mut(&mut self, kind: EntityKind) -> &mut Vec<String> {
        match kind {
            EntityKind::Email => &mut self.emails,
            EntityKind::Url => &mut self.urls,
            EntityKind::Phone => &mut self.phone_numbers,
            EntityKind::CreditCard => &mut self.credit_cards,
            EntityKind::Time24h => &mut self.time_formats.twenty_four_hour,
            EntityKind::Time12h => &mut self.time_formats.twelve_hour,
            EntityKind::Currency => &mut self.currency,
        }
    }

    /// Drop the matches of every kind not listed in `keep`.
    pub fn retain(&mut self, keep: &[EntityKind]) {
        for kind in EntityKind::ALL {
            if !keep.contains(&kind) {
                self.matches_mut(kind).clear();
            }
        }
    }

    /// Per-category counts in report order; both time buckets count as one category.
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("Emails", self.emails.len()),
            ("Urls", self.urls.len()),
            ("Phone Numbers", self.phone_numbers.len()),
            ("Credit Cards", self.credit_cards.len()),
            ("Time Formats", self.time_formats.len()),
            ("Currency", self.currency.len()),
        ]
    }

    pub fn total(&self) -> usize {
        self.counts().iter().map(|(_, count)| count).sum()
    }

    /// Append another result, keeping the existing items first.
    pub fn extend(&mut self, other: ExtractionResult) {
        self.emails.extend(other.emails);
        self.urls.extend(other.urls);
        self.phone_numbers.extend(other.phone_numbers);
        self.credit_cards.extend(other.credit_cards);
        self.time_formats.twelve_hour.extend(other.time_formats.twelve_hour);
        self.time_formats
            .twenty_four_hour
            .extend(other.time_formats.twenty_four_hour);
        self.currency.extend(other.currency);
    }
}

/// The extraction engine. Stateless apart from its configuration; every
/// operation is a pure function of its input.
#[derive(Debug, Clone, Default)]
pub struct DataExtractor {
    config: ExtractorConfig,
}

impl DataExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Every non-overlapping match of `kind` in `text`, left to right.
    pub fn extract(&self, kind: EntityKind, text: &str) -> Vec<String> {
        let (text, cut) = self.budgeted(text);
        scan(kind, text, cut)
    }

    pub fn extract_emails(&self, text: &str) -> Vec<String> {
        self.extract(EntityKind::Email, text)
    }

    pub fn extract_urls(&self, text: &str) -> Vec<String> {
        self.extract(EntityKind::Url, text)
    }

    pub fn extract_phone_numbers(&self, text: &str) -> Vec<String> {
        self.extract(EntityKind::Phone, text)
    }

    pub fn extract_credit_cards(&self, text: &str) -> Vec<String> {
        self.extract(EntityKind::CreditCard, text)
    }

    pub fn extract_time_formats(&self, text: &str) -> TimeFormats {
        let (text, cut) = self.budgeted(text);
        TimeFormats {
            twelve_hour: scan(EntityKind::Time12h, text, cut),
            twenty_four_hour: scan(EntityKind::Time24h, text, cut),
        }
    }

    pub fn extract_currency(&self, text: &str) -> Vec<String> {
        self.extract(EntityKind::Currency, text)
    }

    pub fn extract_all(&self, text: &str) -> ExtractionResult {
        let (text, cut) = self.budgeted(text);
        ExtractionResult {
            emails: scan(EntityKind::Email, text, cut),
            urls: scan(EntityKind::Url, text, cut),
            phone_numbers: scan(EntityKind::Phone, text, cut),
            credit_cards: scan(EntityKind::CreditCard, text, cut),
            time_formats: TimeFormats {
                twelve_hour: scan(EntityKind::Time12h, text, cut),
                twenty_four_hour: scan(EntityKind::Time24h, text, cut),
            },
            currency: scan(EntityKind::Currency, text, cut),
        }
    }

    /// Run [`extract_all`](Self::extract_all) on each line in parallel and
    /// merge the results in line order. Matches that span a line break
    /// (`(555)\n123-4567`, `100\nUSD`) are not found, or only partly.
    /// `on_line` is called once per finished line.
    pub fn extract_all_lines<F>(&self, text: &str, on_line: F) -> ExtractionResult
    where
        F: Fn() + Sync,
    {
        let lines: Vec<&str> = text.lines().collect();

        // collect() keeps line order, so matches stay left to right
        let per_line: Vec<ExtractionResult> = lines
            .par_iter()
            .map(|line| {
                let result = self.extract_all(line);
                on_line();
                result
            })
            .collect();

        let mut merged = ExtractionResult::default();
        for result in per_line {
            merged.extend(result);
        }
        merged
    }

    /// The scanned prefix of `text`, and where it was cut if it was.
    fn budgeted<'a>(&self, text: &'a str) -> (&'a str, Option<usize>) {
        let clamped = self.config.clamp(text);
        let cut = (clamped.len() < text.len()).then_some(clamped.len());
        (clamped, cut)
    }

    /// Whole-string check. `None` for kinds without a validator.
    pub fn validate(&self, kind: EntityKind, candidate: &str) -> Option<bool> {
        let matcher = kind.matcher()?;
        if !self.config.fits(candidate) {
            debug!(kind = %kind, bytes = candidate.len(), "candidate over budget");
            return Some(false);
        }
        Some(matcher.matches(candidate))
    }

    pub fn validate_email(&self, email: &str) -> bool {
        self.validate(EntityKind::Email, email).unwrap_or(false)
    }

    pub fn validate_url(&self, url: &str) -> bool {
        self.validate(EntityKind::Url, url).unwrap_or(false)
    }

    pub fn validate_phone(&self, phone: &str) -> bool {
        self.validate(EntityKind::Phone, phone).unwrap_or(false)
    }

    pub fn validate_credit_card(&self, card: &str) -> bool {
        self.validate(EntityKind::CreditCard, card).unwrap_or(false)
    }

    pub fn clean_credit_card(&self, card: &str) -> String {
        clean_credit_card(card)
    }

    pub fn format_phone_number(&self, phone: &str, format: PhoneFormat) -> String {
        format_phone_number(phone, format)
    }
}

fn scan(kind: EntityKind, text: &str, cut: Option<usize>) -> Vec<String> {
    let found = patterns::find_all(patterns::extraction_regex(kind), text, cut);
    debug!(kind = %kind, matches = found.len(), "extracted");
    found
}

/// Kinds whose validator accepts the whole of `value`.
pub fn classify(value: &str) -> Vec<EntityKind> {
    if value.is_empty() {
        return vec![];
    }

    EntityKind::ALL
        .iter()
        .filter_map(|kind| kind.matcher())
        .filter(|matcher| matcher.matches(value))
        .map(|matcher| matcher.kind())
        .collect()
}

pub fn get_all_matchers() -> HashMap<EntityKind, Box<dyn PatternMatcher>> {
    let mut matchers: HashMap<EntityKind, Box<dyn PatternMatcher>> = HashMap::new();

    matchers.insert(EntityKind::Email, Box::new(email::EmailMatcher));
    matchers.insert(EntityKind::Url, Box::new(url::UrlMatcher));
    matchers.insert(EntityKind::Phone, Box::new(phonenumber::PhoneNumberMatcher));
    matchers.insert(EntityKind::CreditCard, Box::new(creditcard::CreditCardMatcher));

    matchers
}
