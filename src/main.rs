//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::process;
use std::sync::Arc;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatlens::ChatlensError;
use chatlens::cli::{Args, ReportFormat};
use chatlens::config::{AnalysisConfig, OutputConfig, ParserConfig};
use chatlens::core::output::{to_json, write_csv};
use chatlens::core::{Analyzer, LinkExtractor, Selection, StopWords, user_list};
use chatlens::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    setup_logging(&args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--log-level`.
fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let parser = TranscriptParser::with_config(ParserConfig::new().with_date_order(args.date_order));
    let parsed = parser.parse(&args.input)?;
    info!(
        input = %args.input.display(),
        messages = parsed.messages.len(),
        "parsed transcript"
    );

    if !parsed.is_complete() {
        eprintln!(
            "Warning: dropped {} segment(s) with unparseable timestamps",
            parsed.dropped_count()
        );
    }

    let users = user_list(&parsed.messages);
    if args.list_users {
        for user in &users {
            println!("{user}");
        }
        return Ok(());
    }

    let selection: Selection = args.user.parse()?;
    if !users.contains(&selection.to_string()) {
        return Err(ChatlensError::unknown_user(&args.user));
    }

    if let Some(path) = &args.messages_csv {
        write_csv(&parsed.messages, path, &OutputConfig::new().with_time_parts())?;
        info!(path = %path.display(), "wrote message table");
    }

    let stop_words = match &args.stop_words {
        Some(path) => Arc::new(StopWords::from_file(path)?),
        None => StopWords::bundled(),
    };
    debug!(stop_words = stop_words.len(), "stop words ready");

    let analyzer = Analyzer::with_parts(stop_words, LinkExtractor::new(), AnalysisConfig::default());
    let report = analyzer.report(&selection, &parsed.messages);

    let rendered = match args.format {
        ReportFormat::Text => report.to_string(),
        ReportFormat::Json => to_json(&report)? + "\n",
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(path = %path.display(), format = ?args.format, "wrote report");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
