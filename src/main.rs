use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use data_extractor::report::{write_report, write_stats};
use data_extractor::{DataExtractor, EntityKind, ExtractionResult, ExtractorConfig, PhoneFormat};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Extract emails, URLs, phone numbers, credit cards, times and currency from text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a text file (reads stdin when omitted)
    #[arg(index = 1)]
    file_path: Option<PathBuf>,

    /// Scan this text instead of a file
    #[arg(long, conflicts_with = "file_path")]
    text: Option<String>,

    /// Report only these kinds (comma-separated)
    #[arg(short, long)]
    categories: Option<String>,

    /// Skip these kinds (comma-separated)
    #[arg(short, long)]
    exclude: Option<String>,

    /// Print the results as JSON
    #[arg(short, long)]
    json: bool,

    /// Phone output style: standard, international or digits
    #[arg(short, long, default_value = "standard")]
    phone_format: String,

    /// Show extraction statistics (text report only)
    #[arg(short, long, conflicts_with = "json")]
    stats: bool,

    /// Scan each line separately, in parallel. Phone numbers and amounts
    /// broken across a line break, such as "(555)" / "123-4567" or
    /// "100" / "USD", are then missed or only partly found
    #[arg(long)]
    per_line: bool,

    /// Number of threads for --per-line (0 = auto)
    #[arg(short, long, default_value = "0")]
    threads: usize,

    /// Scan at most this many bytes of each input
    #[arg(long)]
    max_input_bytes: Option<usize>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_kinds(list: &str) -> data_extractor::Result<Vec<EntityKind>> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse)
        .collect()
}

fn selected_kinds(args: &Args) -> anyhow::Result<Vec<EntityKind>> {
    let mut kinds = match &args.categories {
        Some(list) => parse_kinds(list)?,
        None => EntityKind::ALL.to_vec(),
    };
    if let Some(list) = &args.exclude {
        let excluded = parse_kinds(list)?;
        kinds.retain(|kind| !excluded.contains(kind));
    }
    Ok(kinds)
}

fn read_input(args: &Args) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    match &args.file_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn scan_lines(
    extractor: &DataExtractor,
    input: &str,
    show_progress: bool,
) -> anyhow::Result<ExtractionResult> {
    let progress_bar = if show_progress {
        let pb = ProgressBar::new(input.lines().count() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({eta})")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let result = extractor.extract_all_lines(input, || {
        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    });

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }
    Ok(result)
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

    let kinds = selected_kinds(&args)?;
    let phone_format = PhoneFormat::from(args.phone_format.as_str());

    let mut config = ExtractorConfig::default();
    if let Some(limit) = args.max_input_bytes {
        config = config.with_max_input_bytes(limit);
    }
    let extractor = DataExtractor::with_config(config)?;

    let input = read_input(&args)?;
    let start = Instant::now();

    let mut result = if args.per_line {
        if args.threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(args.threads)
                .build_global()?;
        }
        scan_lines(&extractor, &input, args.stats)?
    } else {
        extractor.extract_all(&input)
    };
    result.retain(&kinds);

    info!(
        bytes = input.len(),
        items = result.total(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "extraction finished"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &result)?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &extractor, &result, phone_format, &kinds)?;
        if args.stats {
            write_stats(&mut out, &result)?;
        }
    }

    Ok(())
}
