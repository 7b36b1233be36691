//! Result types returned by the aggregation engine.

use chrono::NaiveDate;
use serde::Serialize;

use crate::message::{DAY_NAMES, period_label};

/// Headline counts for a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    /// Number of messages
    pub messages: usize,
    /// Whitespace-delimited tokens, media placeholders excluded
    pub words: usize,
    /// Messages that are exactly the media placeholder
    pub media: usize,
    /// URL-like substrings
    pub links: usize,
}

/// A user's share of all messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub name: String,
    /// Percent of all messages, rounded to two decimals
    pub percent: f64,
}

/// Output of `most_busy_user`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// The busiest users with their message counts
    pub top: Vec<(String, usize)>,
    /// Every user with their share, busiest first
    pub shares: Vec<UserShare>,
}

/// One month of the monthly timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_num: u32,
    pub month: &'static str,
    /// `"MonthName-Year"`, e.g. `"January-2024"`
    pub label: String,
    pub messages: usize,
}

/// One day of the daily timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Message counts per weekday and hour bucket.
///
/// Rows are weekdays (Monday first), columns the 24 period buckets in hour
/// order. Every cell exists; combinations without messages hold `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub rows: Vec<&'static str>,
    pub columns: Vec<String>,
    pub cells: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Creates an all-zero heatmap.
    pub fn empty() -> Self {
        Self {
            rows: DAY_NAMES.to_vec(),
            columns: (0..24).map(period_label).collect(),
            cells: vec![vec![0; 24]; DAY_NAMES.len()],
        }
    }

    /// Adds one message at `(weekday index from Monday, hour)`.
    pub(crate) fn record(&mut self, weekday: usize, hour: u32) {
        self.cells[weekday][hour as usize] += 1;
    }

    /// Count for a weekday name and period label, if both exist.
    pub fn get(&self, day_name: &str, period: &str) -> Option<usize> {
        let row = self.rows.iter().position(|r| *r == day_name)?;
        let col = self.columns.iter().position(|c| c == period)?;
        Some(self.cells[row][col])
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }
}

impl Default for Heatmap {
    fn default() -> Self {
        Self::empty()
    }
}
