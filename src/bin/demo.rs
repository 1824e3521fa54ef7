use std::io::{self, Write};

use clap::Parser;
use data_extractor::report::{write_report, write_stats};
use data_extractor::{DataExtractor, EntityKind, PhoneFormat};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const SAMPLE_TEXT: &str = "
    CONTACT INFORMATION:
    Email: biormajok9@gmail.com, b.aguerkui@alustudent.com, biorsamuel01@gmail.com
    Alternative: admin@sub.domain.org, test-user+tag@test-domain.com

    WEBSITES:
    Main: https://www.example.com, Blog: https://subdomain.example.org/page
    Invalid: http://bad-url, https://short.is/abc123

    PHONE NUMBERS:
    Office: (123) 456-7890, Mobile: 123-456-7890, Fax: 123.456.7890
    International: +1-123-456-7890, Short: 12345, Partial: 123-456

    PAYMENT DETAILS:
    Credit Cards: 1234 5678 9012 3456, 1234-5678-9012-3456, 1234567890123456
    Invalid: 1234, 1234-5678-9012

    CURRENCY AMOUNTS:
    Prices: $19.99, $1,234.56, 100 USD, 50 dollars, $500000
    Large: $12,345,678.90

    SCHEDULE INFORMATION:
    24-hour format: 14:30, 09:00, 23:59, 25:61 (invalid)
    12-hour format: 2:30 PM, 9:00 AM, 11:59 pm, 13:00 PM (invalid)

    EDGE CASES:
    Multiple emails in one line: test1@domain.com and test2@domain.org
    Phone without area code: 456-7890
    Mixed content: Contact us at hello@test.com or call 555-123-4567 for $99.99
";

const VALIDATION_CASES: &[(EntityKind, &str, bool)] = &[
    (EntityKind::Email, "user@example.com", true),
    (EntityKind::Email, "firstname.lastname@company.co.uk", true),
    (EntityKind::Email, "test-user+tag@domain.org", true),
    (EntityKind::Email, "invalid.email", false),
    (EntityKind::Email, "missing@tld.", false),
    (EntityKind::Email, "@nodomain.com", false),
    (EntityKind::Url, "https://www.example.com", true),
    (EntityKind::Url, "https://subdomain.example.org/page", true),
    (EntityKind::Url, "http://test.com", true),
    (EntityKind::Url, "https://short.is/abc", true),
    (EntityKind::Url, "not-a-url", false),
    (EntityKind::Url, "htt://bad-protocol.com", false),
    (EntityKind::Phone, "(123) 456-7890", true),
    (EntityKind::Phone, "123-456-7890", true),
    (EntityKind::Phone, "123.456.7890", true),
    (EntityKind::Phone, "1234567890", true),
    (EntityKind::Phone, "456-7890", true),
    (EntityKind::Phone, "12345", false),
    (EntityKind::Phone, "123-456", false),
    (EntityKind::CreditCard, "1234 5678 9012 3456", true),
    (EntityKind::CreditCard, "1234-5678-9012-3456", true),
    (EntityKind::CreditCard, "1234567890123456", true),
    (EntityKind::CreditCard, "1234", false),
    (EntityKind::CreditCard, "1234-5678-9012", false),
    (EntityKind::CreditCard, "1234 5678 9012 3456 7890", false),
];

const QUICK_TEST_TEXT: &str =
    "Email: test@example.com, Phone: (555) 123-4567, URL: https://example.com";

/// Run the extractor over built-in sample data and print a validation table
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Phone output style: standard, international or digits
    #[arg(short, long, default_value = "standard")]
    phone_format: String,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn write_validation_table<W: Write>(out: &mut W, extractor: &DataExtractor) -> io::Result<usize> {
    let mut failures = 0;
    let mut current = None;

    for &(kind, value, expected) in VALIDATION_CASES {
        if current != Some(kind) {
            writeln!(out, "\n{} Validation:", kind.as_str().to_uppercase())?;
            current = Some(kind);
        }

        let is_valid = extractor.validate(kind, value).unwrap_or(false);
        if is_valid != expected {
            failures += 1;
        }
        writeln!(
            out,
            "  {} [Got:{} Expected:{}] {}",
            if is_valid == expected { "PASS" } else { "FAIL" },
            if is_valid { "VALID" } else { "INVALID" },
            if expected { "VALID" } else { "INVALID" },
            value
        )?;
    }

    Ok(failures)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let extractor = DataExtractor::new();
    let phone_format = PhoneFormat::from(args.phone_format.as_str());
    let rule = "=".repeat(70);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", rule)?;
    writeln!(out, "DATA EXTRACTION: Emails, URLs, Phone Numbers, Credit Cards, Time, Currency")?;
    writeln!(out, "{}", rule)?;

    let results = extractor.extract_all(SAMPLE_TEXT);
    write_report(&mut out, &extractor, &results, phone_format, &EntityKind::ALL)?;

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "VALIDATION TESTS")?;
    writeln!(out, "{}", rule)?;
    let failures = write_validation_table(&mut out, &extractor)?;
    if failures > 0 {
        tracing::warn!(failures, "validation cases did not match expectations");
    }

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "EXTRACTION STATISTICS")?;
    writeln!(out, "{}", rule)?;
    write_stats(&mut out, &results)?;

    writeln!(out, "\nQUICK VERIFICATION")?;
    writeln!(out, "Text: {}", QUICK_TEST_TEXT)?;
    let quick = extractor.extract_all(QUICK_TEST_TEXT);
    writeln!(out, "{}", serde_json::to_string_pretty(&quick)?)?;

    Ok(())
}
