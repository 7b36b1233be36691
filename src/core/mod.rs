//! Aggregation engine and reporting.
//!
//! This module contains:
//! - [`filter`] - [`Selection`] of messages and the user list
//! - [`stopwords`] - stop-word lists (bundled or loaded from a file)
//! - [`extract`] - link and emoji detection
//! - [`words`] - the word filtering pipeline
//! - [`processor`] - counting and ranking helpers
//! - [`models`] - statistic result types
//! - [`analysis`] - the [`Analyzer`] running every statistic
//! - [`report`] - one [`Report`] bundle per selection
//! - [`output`] - format writers (CSV, JSON)
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{Analyzer, Selection, user_list};
//! use chatlens::parser::TranscriptParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let parsed = TranscriptParser::new().parse_str("1/1/24, 10:00 - Alice: pizza tonight?\n")?;
//! let analyzer = Analyzer::new();
//!
//! for name in user_list(&parsed.messages) {
//!     let selection = Selection::user(name);
//!     let stats = analyzer.fetch_stats(&selection, &parsed.messages);
//!     assert_eq!(stats.messages, 1);
//! }
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod extract;
pub mod filter;
pub mod models;
pub mod output;
pub mod processor;
pub mod report;
pub mod stopwords;
pub mod words;

pub use analysis::Analyzer;
pub use extract::LinkExtractor;
pub use filter::{Selection, user_list};
pub use models::{BusyUsers, ChatStats, DailyPoint, Heatmap, MonthlyPoint, UserShare};
pub use report::Report;
pub use stopwords::StopWords;

pub use crate::Message;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
