//! # Chatlens
//!
//! A Rust library for turning exported WhatsApp chat transcripts into
//! activity statistics.
//!
//! ## Overview
//!
//! Chatlens has two layers:
//! - **Parsing**: a plain-text export becomes an ordered table of
//!   [`Message`]s, with multi-line bodies reassembled and system
//!   notifications attributed to a sentinel sender
//! - **Analysis**: the [`Analyzer`](core::Analyzer) computes counts,
//!   rankings, timelines, an activity heatmap, word and emoji frequencies,
//!   either for the whole chat or for one participant
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parsed = TranscriptParser::new().parse("chat.txt".as_ref())?;
//!     let analyzer = Analyzer::new();
//!
//!     let stats = analyzer.fetch_stats(&Selection::Overall, &parsed.messages);
//!     println!("{} messages, {} words", stats.messages, stats.words);
//!
//!     for (user, count) in analyzer.most_busy_user(&Selection::Overall, &parsed.messages).top {
//!         println!("{user}: {count}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] - [`Message`] and its derived [`TimeParts`](message::TimeParts)
//! - [`parsing`] - timestamp prefix recognition and sender splitting
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser) and
//!   [`ParsedTranscript`](parser::ParsedTranscript)
//! - [`config`] - [`ParserConfig`](config::ParserConfig),
//!   [`AnalysisConfig`](config::AnalysisConfig), [`OutputConfig`](config::OutputConfig)
//! - [`core`] - selection, stop words, the analyzer, reports and writers
//! - [`cli`] - CLI types ([`Args`](cli::Args), [`ReportFormat`](cli::ReportFormat))
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod parser;
pub mod parsing;

pub use error::{ChatlensError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatlensError, Result};

    pub use crate::parser::{DroppedSegment, ParsedTranscript, TranscriptParser};

    pub use crate::config::{AnalysisConfig, DateOrder, OutputConfig, ParserConfig};

    pub use crate::core::{
        Analyzer, BusyUsers, ChatStats, Heatmap, LinkExtractor, Report, Selection, StopWords,
        user_list,
    };

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
}
