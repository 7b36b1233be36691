//! One bundle of every statistic for a selection.

use std::fmt;

use serde::Serialize;

use crate::core::models::{BusyUsers, ChatStats, DailyPoint, Heatmap, MonthlyPoint};

/// All statistics computed for one [`Selection`](crate::core::filter::Selection).
///
/// Built by [`Analyzer::report`](crate::core::analysis::Analyzer::report).
/// `Display` renders a plain-text summary; with the `json-output` feature
/// the report serializes through [`to_json`](crate::core::output::to_json).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// `"Overall"` or the selected user's name
    pub selection: String,
    pub stats: ChatStats,
    /// Only present for the overall selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub week_activity: Vec<(String, usize)>,
    pub month_activity: Vec<(String, usize)>,
    pub heatmap: Heatmap,
    pub common_words: Vec<(String, usize)>,
    pub emojis: Vec<(String, usize)>,
}

fn write_ranked(f: &mut fmt::Formatter<'_>, title: &str, items: &[(String, usize)]) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}:")?;
    if items.is_empty() {
        return writeln!(f, "  (none)");
    }
    for (name, count) in items {
        writeln!(f, "  {name:<20} {count}")?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics for {}", self.selection)?;
        writeln!(f, "  Messages:     {}", self.stats.messages)?;
        writeln!(f, "  Words:        {}", self.stats.words)?;
        writeln!(f, "  Media shared: {}", self.stats.media)?;
        writeln!(f, "  Links shared: {}", self.stats.links)?;

        if let Some(busy) = &self.busy_users {
            write_ranked(f, "Most busy users", &busy.top)?;
            writeln!(f)?;
            writeln!(f, "Share of messages:")?;
            for share in &busy.shares {
                writeln!(f, "  {:<20} {:.2}%", share.name, share.percent)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Monthly timeline:")?;
        for point in &self.monthly_timeline {
            writeln!(f, "  {:<20} {}", point.label, point.messages)?;
        }

        write_ranked(f, "Busiest days", &self.week_activity)?;
        write_ranked(f, "Busiest months", &self.month_activity)?;
        write_ranked(f, "Most common words", &self.common_words)?;
        write_ranked(f, "Most used emojis", &self.emojis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::UserShare;

    fn report(busy_users: Option<BusyUsers>) -> Report {
        Report {
            selection: "Overall".into(),
            stats: ChatStats {
                messages: 3,
                words: 2,
                media: 1,
                links: 0,
            },
            busy_users,
            monthly_timeline: Vec::new(),
            daily_timeline: Vec::new(),
            week_activity: vec![("Monday".into(), 3)],
            month_activity: vec![("January".into(), 3)],
            heatmap: Heatmap::empty(),
            common_words: vec![("hello".into(), 1)],
            emojis: Vec::new(),
        }
    }

    #[test]
    fn test_display_summary() {
        let text = report(None).to_string();
        assert!(text.starts_with("Statistics for Overall"));
        assert!(text.contains("Messages:     3"));
        assert!(text.contains("Media shared: 1"));
        assert!(text.contains("Most used emojis:\n  (none)"));
        assert!(!text.contains("Most busy users"));
    }

    #[test]
    fn test_display_busy_users() {
        let busy = BusyUsers {
            top: vec![("Alice".into(), 2), ("Bob".into(), 1)],
            shares: vec![
                UserShare {
                    name: "Alice".into(),
                    percent: 66.67,
                },
                UserShare {
                    name: "Bob".into(),
                    percent: 33.33,
                },
            ],
        };
        let text = report(Some(busy)).to_string();
        assert!(text.contains("Most busy users:"));
        assert!(text.contains("66.67%"));
    }
}
