//! Configuration types for parsing, analysis and output.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how timestamps are read
//! - [`AnalysisConfig`] - sizes of the ranked lists
//! - [`OutputConfig`] - columns of the message table export
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{DateOrder, ParserConfig};
//! use chatlens::parser::TranscriptParser;
//!
//! let config = ParserConfig::new().with_date_order(DateOrder::MonthFirst);
//! let parser = TranscriptParser::with_config(config);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;

/// How the numeric date of a timestamp prefix is read.
///
/// `1/2/24` is the 1st of February under [`DayFirst`](DateOrder::DayFirst)
/// and the 2nd of January under [`MonthFirst`](DateOrder::MonthFirst).
/// The order is never guessed from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrder {
    /// `DD/MM/YY` (default)
    #[default]
    #[serde(alias = "dmy")]
    DayFirst,
    /// `MM/DD/YY`
    #[serde(alias = "mdy")]
    MonthFirst,
}

impl DateOrder {
    /// chrono date formats to try, two-digit year first.
    pub fn date_formats(self) -> &'static [&'static str] {
        match self {
            DateOrder::DayFirst => &["%d/%m/%y", "%d/%m/%Y"],
            DateOrder::MonthFirst => &["%m/%d/%y", "%m/%d/%Y"],
        }
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrder::DayFirst => write!(f, "dmy"),
            DateOrder::MonthFirst => write!(f, "mdy"),
        }
    }
}

impl FromStr for DateOrder {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dmy" | "dayfirst" | "day-first" => Ok(DateOrder::DayFirst),
            "mdy" | "monthfirst" | "month-first" => Ok(DateOrder::MonthFirst),
            _ => Err(ChatlensError::invalid_format(
                "date order",
                format!("unknown value '{s}', expected dmy or mdy"),
            )),
        }
    }
}

/// Configuration for transcript parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Day/month order of timestamp prefixes (default: day first)
    pub date_order: DateOrder,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day/month order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }
}

/// Configuration for the aggregation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Length of the busiest-users list (default: 5)
    pub top_users: usize,

    /// Length of the most-common-words list (default: 20)
    pub top_words: usize,

    /// Length of the emoji list (default: 10)
    pub top_emojis: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_users: 5,
            top_words: 20,
            top_emojis: 10,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }
}

/// Controls which columns the message table export contains.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Append the derived time fields after `Timestamp;User;Message`
    pub include_time_parts: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_time_parts(mut self) -> Self {
        self.include_time_parts = true;
        self
    }
}
