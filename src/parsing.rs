//! Low-level transcript parsing utilities.
//!
//! This module contains the pieces [`TranscriptParser`](crate::parser::TranscriptParser)
//! is assembled from: the timestamp-prefix pattern, timestamp parsing under a
//! fixed [`DateOrder`], and the sender/text split.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::config::DateOrder;

/// Timestamp prefix that starts every message.
///
/// Matches at line start only:
/// - `1/15/24, 10:30 - ` (bracketless, 24-hour)
/// - `15/01/2024, 9:05 pm - ` (bracketless, 12-hour)
/// - `[1/15/24, 10:30:45 AM] ` (bracketed)
///
/// Capture groups: `date`, `time`.
pub const TIMESTAMP_PATTERN: &str = r"(?m)^\[?(?P<date>\d{1,2}/\d{1,2}/(?:\d{4}|\d{2})),[ \t](?P<time>\d{1,2}:\d{2}(?::\d{2})?(?:[ \t\x{202F}\x{A0}]?[AaPp]\.?[Mm]\.?)?)(?:\][ \t]|[ \t]-[ \t])";

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"));

/// Quote marks that never occur in a sender name.
const QUOTES: [char; 3] = ['"', '\u{201C}', '\u{201D}'];

/// Returns the compiled timestamp-prefix regex.
pub fn timestamp_regex() -> &'static Regex {
    &TIMESTAMP_RE
}

/// Uppercases an AM/PM marker, drops its dots and spacing, and puts back the
/// single space chrono's `%p` expects.
fn normalize_time(time: &str) -> (String, bool) {
    let mut out: String = time
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let meridiem = out.ends_with("AM") || out.ends_with("PM");
    if meridiem {
        out.insert(out.len() - 2, ' ');
    }
    (out, meridiem)
}

/// Parses the date and time captured from a timestamp prefix.
///
/// Returns `None` when no format of `order` accepts the value, e.g. for
/// `31/02/24` or `13:00 PM`.
pub fn parse_timestamp(date_str: &str, time_str: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let (time, meridiem) = normalize_time(time_str);
    let time_formats: &[&str] = if meridiem {
        &["%I:%M %p", "%I:%M:%S %p"]
    } else {
        &["%H:%M", "%H:%M:%S"]
    };

    let value = format!("{date_str} {time}");
    for date_format in order.date_formats() {
        for time_format in time_formats {
            let format = format!("{date_format} {time_format}");
            if let Ok(parsed) = NaiveDateTime::parse_from_str(&value, &format) {
                return Some(parsed);
            }
        }
    }

    None
}

/// Splits a segment into `(user, text)`.
///
/// The separator is the first `:` on the segment's first line that is
/// followed by whitespace (or ends the line) and preceded by a non-blank
/// name. A single space or tab after the colon is consumed; a line break
/// stays in the text. Returns `None` for notifications, which carry no such
/// separator or whose text before it quotes something.
///
/// ```
/// use chatlens::parsing::split_sender;
///
/// assert_eq!(split_sender("Alice: hi: there"), Some(("Alice", "hi: there")));
/// assert_eq!(split_sender("Alice added Bob"), None);
/// assert_eq!(split_sender("Alice changed the subject to \"Re: plans\""), None);
/// ```
pub fn split_sender(segment: &str) -> Option<(&str, &str)> {
    let line_end = segment.find('\n').unwrap_or(segment.len());
    let head = &segment[..line_end];

    for (idx, _) in head.match_indices(':') {
        let after = &segment[idx + 1..];
        let text = match after.chars().next() {
            None => "",
            Some(' ' | '\t') => &after[1..],
            Some(c) if c.is_whitespace() => after,
            Some(_) => continue,
        };

        let user = head[..idx].trim();
        if user.is_empty() || user.contains(QUOTES) {
            return None;
        }
        return Some((user, text));
    }

    None
}

/// Removes the line terminator that separates a segment from the next prefix.
pub fn strip_line_terminator(segment: &str) -> &str {
    segment.strip_suffix('\n').unwrap_or(segment)
}
