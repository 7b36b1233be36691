//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - How the report is printed
//!
//! ```rust
//! use chatlens::cli::{Args, ReportFormat};
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "chat.txt", "--format", "json"]);
//! assert_eq!(args.format, ReportFormat::Json);
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::DateOrder;

/// Statistics for exported WhatsApp chats: activity, timelines, words and
/// emojis, overall or per participant.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt --format json -o report.json
    chatlens chat.txt --date-order mdy --messages-csv messages.csv
    chatlens chat.txt --list-users")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Restrict the statistics to one participant ("Overall" for everyone)
    #[arg(short, long, value_name = "NAME", default_value = "Overall")]
    pub user: String,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the parsed message table as CSV
    #[arg(long, value_name = "PATH")]
    pub messages_csv: Option<PathBuf>,

    /// Order of day and month in the export's dates (dmy or mdy)
    #[arg(long, value_name = "ORDER", default_value = "dmy")]
    pub date_order: DateOrder,

    /// Replace the bundled stop words with a list from this file
    #[arg(long, value_name = "PATH")]
    pub stop_words: Option<PathBuf>,

    /// Print the selectable users and exit
    #[arg(long)]
    pub list_users: bool,

    /// Log filter (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Report format options.
///
/// - [`Text`](ReportFormat::Text) - human-readable summary
/// - [`Json`](ReportFormat::Json) - the full report as pretty JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum ReportFormat {
    /// Plain-text summary (default)
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}
