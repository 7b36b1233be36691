//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - the parsed message table, semicolon
//!   delimited (requires `csv-output` feature)
//! - [`write_json`] / [`to_json`] - a [`Report`](crate::core::report::Report)
//!   as pretty JSON (requires `json-output` feature)
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::config::OutputConfig;
//! use chatlens::core::analysis::Analyzer;
//! use chatlens::core::filter::Selection;
//! use chatlens::core::output::{write_csv, write_json};
//! use chatlens::parser::TranscriptParser;
//!
//! let parsed = TranscriptParser::new().parse("chat.txt".as_ref())?;
//! write_csv(&parsed.messages, "messages.csv", &OutputConfig::new().with_time_parts())?;
//!
//! let report = Analyzer::new().report(&Selection::Overall, &parsed.messages);
//! write_json(&report, "report.json")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
