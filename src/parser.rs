//! Transcript parser.
//!
//! [`TranscriptParser`] turns the text of a chat export into an ordered list
//! of [`Message`] records.
//!
//! # How a transcript is cut into messages
//!
//! Every occurrence of the timestamp prefix (see
//! [`TIMESTAMP_PATTERN`](crate::parsing::TIMESTAMP_PATTERN)) starts a new
//! message. Everything up to the next prefix, embedded newlines included,
//! belongs to that message:
//!
//! ```text
//! 1/1/24, 10:00 - Alice: line one      <- message 1
//! line two                             <- still message 1
//! 1/1/24, 10:05 - Bob added Carol      <- message 2 (notification)
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::TranscriptParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let parser = TranscriptParser::new();
//! let parsed = parser.parse_str("1/1/24, 10:00 - Alice: line one\nline two\n")?;
//!
//! assert_eq!(parsed.messages.len(), 1);
//! assert_eq!(parsed.messages[0].text(), "line one\nline two");
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::Message;
use crate::config::ParserConfig;
use crate::error::ChatlensError;
use crate::parsing::{parse_timestamp, split_sender, strip_line_terminator, timestamp_regex};

/// A segment whose timestamp prefix matched the pattern but did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedSegment {
    /// 1-based line number of the prefix in the input
    pub line: usize,
    /// The raw `date, time` text of the prefix
    pub timestamp: String,
    /// Why it was rejected
    pub reason: String,
}

/// Result of parsing one transcript.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedTranscript {
    /// Messages in transcript order.
    pub messages: Vec<Message>,

    /// Segments dropped because their timestamp did not parse.
    pub dropped: Vec<DroppedSegment>,

    /// Number of timestamp prefixes found.
    ///
    /// Always equals `messages.len() + dropped.len()`.
    pub prefix_count: usize,

    /// Non-blank text before the first timestamp prefix, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,
}

impl ParsedTranscript {
    /// Number of segments dropped for timestamp failures.
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    /// Returns `true` if every prefix produced a message.
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Parser for exported chat transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let parsed = parser.parse("whatsapp_chat.txt".as_ref())?;
/// println!("{} messages", parsed.messages.len());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration (day-first dates).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file cannot be read and
    /// [`ChatlensError::UnrecognizedFormat`] (with the path attached) if it
    /// contains no timestamp prefix.
    pub fn parse(&self, path: &Path) -> Result<ParsedTranscript, ChatlensError> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content).map_err(|err| match err {
            ChatlensError::UnrecognizedFormat { path: None } => {
                ChatlensError::unrecognized(Some(path.to_path_buf()))
            }
            other => other,
        })
    }

    /// Parses transcript text.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::UnrecognizedFormat`] if the text contains no
    /// timestamp prefix at all.
    pub fn parse_str(&self, content: &str) -> Result<ParsedTranscript, ChatlensError> {
        let content = normalize_input(content);
        let regex = timestamp_regex();

        let prefixes: Vec<_> = regex.captures_iter(&content).collect();
        if prefixes.is_empty() {
            return Err(ChatlensError::unrecognized(None));
        }

        let mut parsed = ParsedTranscript {
            messages: Vec::with_capacity(prefixes.len()),
            prefix_count: prefixes.len(),
            ..ParsedTranscript::default()
        };

        // Prefixes are anchored at line start, so the preamble ends on a line break.
        let first_start = prefixes[0].get(0).map_or(0, |m| m.start());
        let preamble = content[..first_start].trim();
        if !preamble.is_empty() {
            debug!(bytes = preamble.len(), "ignoring text before the first timestamp");
            parsed.preamble = Some(preamble.to_string());
        }

        let mut line = 1 + content[..first_start].matches('\n').count();
        let mut line_offset = first_start;

        for (i, caps) in prefixes.iter().enumerate() {
            let Some(prefix) = caps.get(0) else { continue };
            line += content[line_offset..prefix.start()].matches('\n').count();
            line_offset = prefix.start();

            let segment_end = prefixes
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(content.len(), |m| m.start());
            let segment = strip_line_terminator(&content[prefix.end()..segment_end]);

            let date_str = caps.name("date").map_or("", |m| m.as_str());
            let time_str = caps.name("time").map_or("", |m| m.as_str());

            let Some(timestamp) = parse_timestamp(date_str, time_str, self.config.date_order)
            else {
                warn!(
                    line,
                    date = date_str,
                    time = time_str,
                    "dropping segment with unparseable timestamp"
                );
                parsed.dropped.push(DroppedSegment {
                    line,
                    timestamp: format!("{date_str}, {time_str}"),
                    reason: format!(
                        "not a valid {} date/time",
                        self.config.date_order
                    ),
                });
                continue;
            };

            let message = match split_sender(segment) {
                Some((user, text)) => Message::new(timestamp, user, text),
                None => Message::notification(timestamp, segment),
            };
            parsed.messages.push(message);
        }

        debug!(
            messages = parsed.messages.len(),
            dropped = parsed.dropped.len(),
            "parsed transcript"
        );

        Ok(parsed)
    }
}

/// Drops a leading byte-order mark and folds CRLF line endings to LF.
fn normalize_input(content: &str) -> Cow<'_, str> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(content)
    }
}
