//! Plain-text rendering of extraction results.

use std::io::{self, Write};

use crate::{DataExtractor, EntityKind, ExtractionResult, PhoneFormat};

fn status(valid: bool) -> &'static str {
    if valid {
        "VALID"
    } else {
        "INVALID"
    }
}

/// Write one section per selected kind. Validated kinds are tagged
/// VALID/INVALID; phones and cards also show their normalized form.
pub fn write_report<W: Write>(
    out: &mut W,
    extractor: &DataExtractor,
    result: &ExtractionResult,
    phone_format: PhoneFormat,
    kinds: &[EntityKind],
) -> io::Result<()> {
    if kinds.contains(&EntityKind::Email) {
        writeln!(out, "\nEMAIL ADDRESSES:")?;
        if result.emails.is_empty() {
            writeln!(out, "  No emails found")?;
        }
        for email in &result.emails {
            writeln!(out, "  {} {}", status(extractor.validate_email(email)), email)?;
        }
    }

    if kinds.contains(&EntityKind::Url) {
        writeln!(out, "\nURLs:")?;
        if result.urls.is_empty() {
            writeln!(out, "  No URLs found")?;
        }
        for url in &result.urls {
            writeln!(out, "  {} {}", status(extractor.validate_url(url)), url)?;
        }
    }

    if kinds.contains(&EntityKind::Phone) {
        writeln!(out, "\nPHONE NUMBERS:")?;
        if result.phone_numbers.is_empty() {
            writeln!(out, "  No phone numbers found")?;
        }
        for phone in &result.phone_numbers {
            writeln!(
                out,
                "  {} {} -> {}",
                status(extractor.validate_phone(phone)),
                phone,
                extractor.format_phone_number(phone, phone_format)
            )?;
        }
    }

    if kinds.contains(&EntityKind::CreditCard) {
        writeln!(out, "\nCREDIT CARD NUMBERS:")?;
        if result.credit_cards.is_empty() {
            writeln!(out, "  No credit card numbers found")?;
        }
        for card in &result.credit_cards {
            writeln!(
                out,
                "  {} {} -> {}",
                status(extractor.validate_credit_card(card)),
                card,
                extractor.clean_credit_card(card)
            )?;
        }
    }

    let show_24 = kinds.contains(&EntityKind::Time24h);
    let show_12 = kinds.contains(&EntityKind::Time12h);
    if show_24 || show_12 {
        writeln!(out, "\nTIME FORMATS:")?;
        if result.time_formats.is_empty() {
            writeln!(out, "  No time formats found")?;
        } else {
            if show_24 {
                writeln!(out, "  24-Hour Format:")?;
                for time in &result.time_formats.twenty_four_hour {
                    writeln!(out, "    VALID {}", time)?;
                }
            }
            if show_12 {
                writeln!(out, "  12-Hour Format:")?;
                for time in &result.time_formats.twelve_hour {
                    writeln!(out, "    VALID {}", time)?;
                }
            }
        }
    }

    if kinds.contains(&EntityKind::Currency) {
        writeln!(out, "\nCURRENCY AMOUNTS:")?;
        if result.currency.is_empty() {
            writeln!(out, "  No currency amounts found")?;
        }
        for amount in &result.currency {
            writeln!(out, "  VALID {}", amount)?;
        }
    }

    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, result: &ExtractionResult) -> io::Result<()> {
    writeln!(out, "\nTotal items extracted: {}", result.total())?;
    for (label, count) in result.counts() {
        writeln!(out, "  {}: {}", label, count)?;
    }
    Ok(())
}
