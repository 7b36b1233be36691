//! Integration tests: transcripts parsed from real files, then analyzed.

use std::fs;
use std::path::PathBuf;

use chatlens::core::models::ChatStats;
use chatlens::prelude::*;
use tempfile::{TempDir, tempdir};

const GROUP_CHAT: &str = "\u{FEFF}Messages and calls are end-to-end encrypted.
12/03/24, 09:00 - Rahul Sharma created group \"Weekend\"
12/03/24, 09:00 - Rahul Sharma added Priya
12/03/24, 09:05 - Rahul Sharma: Pizza tonight? 🍕
12/03/24, 09:06 - Priya: yes!! 😂😂
12/03/24, 09:06 - Priya: which place
we went last time
or the new one?
12/03/24, 21:40 - Rahul Sharma: <Media omitted>
13/03/24, 23:15 - Priya: check https://example.com/menu and www.pizza.in
14/04/24, 00:30 - Bob: pizza was great <This message was edited>
31/02/24, 10:00 - Bob: this date does not exist
14/04/24, 00:31 - Bob: @Priya pizza again 😂
";

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn parse_group_chat() -> ParsedTranscript {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "group.txt", GROUP_CHAT);
    TranscriptParser::new().parse(&path).unwrap()
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_parse_file() {
    let parsed = parse_group_chat();

    assert_eq!(parsed.prefix_count, 10);
    assert_eq!(parsed.dropped_count(), 1);
    assert_eq!(parsed.messages.len(), 9);
    assert_eq!(
        parsed.preamble.as_deref(),
        Some("Messages and calls are end-to-end encrypted.")
    );

    let dropped = &parsed.dropped[0];
    assert_eq!(dropped.line, 12);
    assert_eq!(dropped.timestamp, "31/02/24, 10:00");
}

#[test]
fn test_message_count_law() {
    let parsed = parse_group_chat();
    assert_eq!(
        parsed.messages.len(),
        parsed.prefix_count - parsed.dropped_count()
    );
}

#[test]
fn test_notifications_and_multiline() {
    let parsed = parse_group_chat();
    let messages = &parsed.messages;

    assert!(messages[0].is_notification());
    assert_eq!(messages[0].text(), "Rahul Sharma created group \"Weekend\"");
    assert!(messages[1].is_notification());

    assert_eq!(messages[4].user(), "Priya");
    assert_eq!(
        messages[4].text(),
        "which place\nwe went last time\nor the new one?"
    );
}

#[test]
fn test_derived_time_parts() {
    let parsed = parse_group_chat();
    let late = &parsed.messages[6];

    assert_eq!(late.user(), "Priya");
    let time = late.time();
    assert_eq!(time.year, 2024);
    assert_eq!(time.month, "March");
    assert_eq!(time.month_num, 3);
    assert_eq!(time.day, 13);
    assert_eq!(time.day_name, "Wednesday");
    assert_eq!(time.hour, 23);
    assert_eq!(time.minute, 15);
    assert_eq!(time.period, "23-00");

    assert_eq!(parsed.messages[7].time().period, "0-1");
}

#[test]
fn test_parse_missing_file() {
    let err = TranscriptParser::new()
        .parse("does/not/exist.txt".as_ref())
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_parse_unrecognized_file() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "notes.txt", "just some notes\nwithout timestamps\n");

    let err = TranscriptParser::new().parse(&path).unwrap_err();
    assert!(err.is_unrecognized());
    assert!(err.to_string().starts_with("unrecognized transcript format"));
    assert!(err.to_string().contains("notes.txt"));
}

#[test]
fn test_month_first_order() {
    let input = "12/25/23, 8:15 PM - Alice: merry christmas\n";

    let day_first = TranscriptParser::new().parse_str(input).unwrap();
    assert!(day_first.messages.is_empty());
    assert_eq!(day_first.dropped_count(), 1);

    let parser = TranscriptParser::with_config(ParserConfig::new().with_date_order(DateOrder::MonthFirst));
    let month_first = parser.parse_str(input).unwrap();
    assert_eq!(month_first.messages.len(), 1);
    assert_eq!(month_first.messages[0].time().month, "December");
    assert_eq!(month_first.messages[0].time().hour, 20);
}

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn test_fetch_stats_scenario() {
    let parsed = TranscriptParser::new()
        .parse_str("1/1/24, 10:00 - Alice: hello\n1/1/24, 10:01 - Bob: hi\n1/1/24, 10:02 - Alice: <Media omitted>\n")
        .unwrap();

    let stats = Analyzer::new().fetch_stats(&Selection::Overall, &parsed.messages);
    assert_eq!(
        stats,
        ChatStats {
            messages: 3,
            words: 2,
            media: 1,
            links: 0
        }
    );
}

#[test]
fn test_notification_only_scenario() {
    let parsed = TranscriptParser::new()
        .parse_str("1/1/24, 09:00 - Alice added Bob\n")
        .unwrap();

    assert_eq!(user_list(&parsed.messages), ["Overall"]);
    let stats = Analyzer::new().fetch_stats(&Selection::Overall, &parsed.messages);
    assert_eq!(stats.messages, 1);
}

#[test]
fn test_multiline_scenario() {
    let parsed = TranscriptParser::new()
        .parse_str("1/1/24, 10:00 - Alice: line one\nline two\n")
        .unwrap();

    assert_eq!(parsed.messages.len(), 1);
    assert_eq!(parsed.messages[0].text(), "line one\nline two");
}

#[test]
fn test_only_stop_words_and_names_scenario() {
    let parsed = TranscriptParser::new()
        .parse_str("1/1/24, 10:00 - Rahul Sharma: the rahul and sharma\n1/1/24, 10:01 - Rahul Sharma: hai was\n")
        .unwrap();

    let words = Analyzer::new().most_common_words(&Selection::Overall, &parsed.messages);
    assert!(words.is_empty());
}

// =========================================================================
// Analysis over the group chat
// =========================================================================

#[test]
fn test_user_list() {
    let parsed = parse_group_chat();
    assert_eq!(
        user_list(&parsed.messages),
        ["Overall", "Bob", "Priya", "Rahul Sharma"]
    );
}

#[test]
fn test_group_stats() {
    let parsed = parse_group_chat();
    let analyzer = Analyzer::new();

    let overall = analyzer.fetch_stats(&Selection::Overall, &parsed.messages);
    assert_eq!(overall.messages, 9);
    assert_eq!(overall.media, 1);
    assert_eq!(overall.links, 2);

    let priya = analyzer.fetch_stats(&Selection::user("Priya"), &parsed.messages);
    assert_eq!(priya.messages, 3);
    assert_eq!(priya.links, 2);
    assert_eq!(priya.media, 0);
}

#[test]
fn test_busy_users_shares_sum_to_hundred() {
    let parsed = parse_group_chat();
    let busy = Analyzer::new().most_busy_user(&Selection::Overall, &parsed.messages);

    assert_eq!(busy.top[0], ("Priya".to_string(), 3));
    let total: f64 = busy.shares.iter().map(|s| s.percent).sum();
    assert!((total - 100.0).abs() < 0.05, "shares sum to {total}");
}

#[test]
fn test_timelines() {
    let parsed = parse_group_chat();
    let analyzer = Analyzer::new();

    let monthly = analyzer.monthly_timeline(&Selection::Overall, &parsed.messages);
    let labels: Vec<_> = monthly.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["March-2024", "April-2024"]);
    assert_eq!(monthly[0].messages, 7);

    let daily = analyzer.daily_timeline(&Selection::Overall, &parsed.messages);
    assert_eq!(daily.len(), 3);
    assert!(daily.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn test_heatmap_covers_selection() {
    let parsed = parse_group_chat();
    let analyzer = Analyzer::new();

    for name in user_list(&parsed.messages) {
        let selection = Selection::user(name);
        let heatmap = analyzer.activity_heatmap(&selection, &parsed.messages);
        let stats = analyzer.fetch_stats(&selection, &parsed.messages);

        assert_eq!(heatmap.cells.len(), 7);
        assert!(heatmap.cells.iter().all(|row| row.len() == 24));
        assert_eq!(heatmap.total(), stats.messages);
    }
}

#[test]
fn test_common_words_and_emojis() {
    let parsed = parse_group_chat();
    let analyzer = Analyzer::new();

    let words = analyzer.most_common_words(&Selection::Overall, &parsed.messages);
    assert_eq!(words[0], ("pizza".to_string(), 3));
    assert!(words.iter().all(|(w, _)| w != "rahul" && w != "priya" && w != "edited"));

    let emojis = analyzer.emoji_helper(&Selection::Overall, &parsed.messages);
    assert_eq!(emojis[0], ("😂".to_string(), 3));
    assert!(emojis.iter().any(|(e, _)| e == "🍕"));
}

#[test]
fn test_custom_stop_words_file() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "stop.txt", "# custom\npizza\n\nagain\n");
    let stop_words = StopWords::from_file(&path).unwrap();

    let analyzer = Analyzer::with_parts(
        std::sync::Arc::new(stop_words),
        LinkExtractor::new(),
        AnalysisConfig::default(),
    );
    let parsed = parse_group_chat();
    let words = analyzer.wordcloud_words(&Selection::user("Bob"), &parsed.messages);
    assert_eq!(words, ["was", "great"]);
}

#[test]
fn test_report_json() {
    let parsed = parse_group_chat();
    let report = Analyzer::new().report(&Selection::Overall, &parsed.messages);

    let json = to_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["stats"]["messages"], 9);
    assert_eq!(value["monthly_timeline"][1]["label"], "April-2024");
    assert_eq!(value["heatmap"]["columns"][23], "23-00");
}

#[test]
fn test_messages_csv_roundtrip_through_file() {
    let dir = tempdir().unwrap();
    let parsed = parse_group_chat();
    let out = dir.path().join("messages.csv");
    write_csv(&parsed.messages, &out, &OutputConfig::new()).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(&out)
        .unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(std::result::Result::unwrap).collect();

    assert_eq!(rows.len(), parsed.messages.len());
    assert_eq!(&rows[4][1], "Priya");
    assert_eq!(&rows[4][2], "which place\nwe went last time\nor the new one?");
}
