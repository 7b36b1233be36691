//! The aggregation engine.
//!
//! [`Analyzer`] computes every statistic for a [`Selection`] over a parsed
//! message table. All operations are pure: they read the messages, never
//! modify them, and return the empty or zero form of their result when the
//! selection is empty.
//!
//! # Example
//!
//! ```
//! use chatlens::core::analysis::Analyzer;
//! use chatlens::core::filter::Selection;
//! use chatlens::core::models::ChatStats;
//! use chatlens::parser::TranscriptParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let parsed = TranscriptParser::new().parse_str(
//!     "1/1/24, 10:00 - Alice: hello\n1/1/24, 10:01 - Bob: hi\n1/1/24, 10:02 - Alice: <Media omitted>\n",
//! )?;
//!
//! let stats = Analyzer::new().fetch_stats(&Selection::Overall, &parsed.messages);
//! assert_eq!(stats, ChatStats { messages: 3, words: 2, media: 1, links: 0 });
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::Message;
use crate::config::AnalysisConfig;
use crate::core::extract::{LinkExtractor, emoji_chars};
use crate::core::filter::Selection;
use crate::core::models::{BusyUsers, ChatStats, DailyPoint, Heatmap, MonthlyPoint, UserShare};
use crate::core::processor::{percent, rank_counts};
use crate::core::report::Report;
use crate::core::stopwords::StopWords;
use crate::core::words::filtered_words;

/// Computes statistics over parsed messages.
///
/// Collaborators (stop words, link extractor) are owned by the analyzer and
/// injected through [`with_parts`](Self::with_parts); [`new`](Self::new)
/// uses the bundled stop words.
#[derive(Debug)]
pub struct Analyzer {
    stop_words: Arc<StopWords>,
    links: LinkExtractor,
    config: AnalysisConfig,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Creates an analyzer with the bundled stop words and default limits.
    pub fn new() -> Self {
        Self::with_parts(StopWords::bundled(), LinkExtractor::new(), AnalysisConfig::default())
    }

    /// Creates an analyzer from explicit collaborators.
    pub fn with_parts(
        stop_words: Arc<StopWords>,
        links: LinkExtractor,
        config: AnalysisConfig,
    ) -> Self {
        Self {
            stop_words,
            links,
            config,
        }
    }

    /// Replaces the analysis limits.
    #[must_use]
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Message, word, media and link counts.
    pub fn fetch_stats(&self, selection: &Selection, messages: &[Message]) -> ChatStats {
        let view = selection.apply(messages);
        let mut stats = ChatStats {
            messages: view.len(),
            ..ChatStats::default()
        };

        for message in &view {
            if message.is_media() {
                stats.media += 1;
            } else {
                stats.words += message.text().split_whitespace().count();
            }
            stats.links += self.links.count(message.text());
        }

        stats
    }

    /// The busiest users and every user's share of the messages.
    ///
    /// Meaningful for [`Selection::Overall`]; for a single user it reports
    /// that user at 100%.
    pub fn most_busy_user(&self, selection: &Selection, messages: &[Message]) -> BusyUsers {
        let view = selection.apply(messages);
        let ranked = rank_counts(view.iter().map(|m| m.user()), None);

        let shares = ranked
            .iter()
            .map(|(name, count)| UserShare {
                name: (*name).to_string(),
                percent: percent(*count, view.len()),
            })
            .collect();

        let top = ranked
            .into_iter()
            .take(self.config.top_users)
            .map(|(name, count)| (name.to_string(), count))
            .collect();

        BusyUsers { top, shares }
    }

    /// Messages per calendar month, oldest first.
    pub fn monthly_timeline(&self, selection: &Selection, messages: &[Message]) -> Vec<MonthlyPoint> {
        let mut months: BTreeMap<(i32, u32), (&'static str, usize)> = BTreeMap::new();
        for message in selection.apply(messages) {
            let time = message.time();
            months
                .entry((time.year, time.month_num))
                .or_insert((time.month, 0))
                .1 += 1;
        }

        months
            .into_iter()
            .map(|((year, month_num), (month, count))| MonthlyPoint {
                year,
                month_num,
                month,
                label: format!("{month}-{year}"),
                messages: count,
            })
            .collect()
    }

    /// Messages per calendar date, oldest first.
    pub fn daily_timeline(&self, selection: &Selection, messages: &[Message]) -> Vec<DailyPoint> {
        let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for message in selection.apply(messages) {
            *days.entry(message.time().date).or_insert(0) += 1;
        }

        days.into_iter()
            .map(|(date, count)| DailyPoint {
                date,
                messages: count,
            })
            .collect()
    }

    /// Messages per weekday name, busiest first.
    pub fn week_activity_map(&self, selection: &Selection, messages: &[Message]) -> Vec<(String, usize)> {
        let view = selection.apply(messages);
        rank_counts(view.iter().map(|m| m.time().day_name), None)
            .into_iter()
            .map(|(day, count)| (day.to_string(), count))
            .collect()
    }

    /// Messages per month name (all years together), busiest first.
    pub fn month_activity_map(&self, selection: &Selection, messages: &[Message]) -> Vec<(String, usize)> {
        let view = selection.apply(messages);
        rank_counts(view.iter().map(|m| m.time().month), None)
            .into_iter()
            .map(|(month, count)| (month.to_string(), count))
            .collect()
    }

    /// Weekday by hour-bucket message counts.
    pub fn activity_heatmap(&self, selection: &Selection, messages: &[Message]) -> Heatmap {
        let mut heatmap = Heatmap::empty();
        for message in selection.apply(messages) {
            let time = message.time();
            let weekday = time.date.weekday().num_days_from_monday() as usize;
            heatmap.record(weekday, time.hour);
        }
        heatmap
    }

    /// The most frequent words after filtering.
    pub fn most_common_words(&self, selection: &Selection, messages: &[Message]) -> Vec<(String, usize)> {
        let words = self.wordcloud_words(selection, messages);
        rank_counts(words, Some(self.config.top_words))
    }

    /// The most frequent emoji characters.
    pub fn emoji_helper(&self, selection: &Selection, messages: &[Message]) -> Vec<(String, usize)> {
        let view = selection.apply(messages);
        let emojis = view.iter().flat_map(|m| emoji_chars(m.text()));
        rank_counts(emojis, Some(self.config.top_emojis))
            .into_iter()
            .map(|(emoji, count)| (emoji.to_string(), count))
            .collect()
    }

    /// Filtered words feeding a word cloud, in transcript order.
    pub fn wordcloud_words(&self, selection: &Selection, messages: &[Message]) -> Vec<String> {
        let view = selection.apply(messages);
        filtered_words(&view, &self.stop_words)
    }

    /// [`wordcloud_words`](Self::wordcloud_words) joined by single spaces.
    pub fn wordcloud_text(&self, selection: &Selection, messages: &[Message]) -> String {
        self.wordcloud_words(selection, messages).join(" ")
    }

    /// Runs every statistic for `selection`.
    ///
    /// `busy_users` is only filled for [`Selection::Overall`].
    pub fn report(&self, selection: &Selection, messages: &[Message]) -> Report {
        Report {
            selection: selection.to_string(),
            stats: self.fetch_stats(selection, messages),
            busy_users: selection
                .is_overall()
                .then(|| self.most_busy_user(selection, messages)),
            monthly_timeline: self.monthly_timeline(selection, messages),
            daily_timeline: self.daily_timeline(selection, messages),
            week_activity: self.week_activity_map(selection, messages),
            month_activity: self.month_activity_map(selection, messages),
            heatmap: self.activity_heatmap(selection, messages),
            common_words: self.most_common_words(selection, messages),
            emojis: self.emoji_helper(selection, messages),
        }
    }
}
