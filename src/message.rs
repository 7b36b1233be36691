//! The parsed message record.
//!
//! This module provides [`Message`], one logical message of a transcript, and
//! [`TimeParts`], the calendar fields derived from its timestamp.
//!
//! # Overview
//!
//! A message consists of:
//! - `timestamp`, `user` and `text` taken from the transcript
//! - derived time fields (`date`, `year`, `month`, `day_name`, `period`, ...)
//!   computed once in [`Message::new`]
//!
//! Fields are private so the derived values can never drift away from the
//! timestamp they were computed from.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(23, 15, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "hello");
//!
//! assert_eq!(msg.user(), "Alice");
//! assert_eq!(msg.time().day_name, "Monday");
//! assert_eq!(msg.time().period, "23-00");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Text the exporting client writes in place of an attachment.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Marker the exporting client appends to edited messages.
pub const EDITED_MARKER: &str = "<This message was edited>";

/// Sentinel user for system notifications (joins, leaves, subject changes).
pub const NOTIFICATION_USER: &str = "group_notification";

/// Selection label meaning "every user".
pub const OVERALL: &str = "Overall";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Returns the English name of a month number.
///
/// `month_num` must be in `1..=12`, as chrono's `Datelike::month` always is.
pub fn month_name(month_num: u32) -> &'static str {
    MONTH_NAMES[(month_num - 1) as usize]
}

/// Returns the hour-range bucket label for an hour of the day.
///
/// Hour 23 wraps to `"23-00"`; every other hour `h` maps to `"h-(h+1)"`.
///
/// ```
/// use chatlens::message::period_label;
///
/// assert_eq!(period_label(0), "0-1");
/// assert_eq!(period_label(22), "22-23");
/// assert_eq!(period_label(23), "23-00");
/// ```
pub fn period_label(hour: u32) -> String {
    if hour == 23 {
        "23-00".to_string()
    } else {
        format!("{}-{}", hour, hour + 1)
    }
}

/// Calendar fields derived from a message timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeParts {
    /// Calendar date.
    pub date: NaiveDate,
    pub year: i32,
    /// English month name, e.g. `"January"`.
    pub month: &'static str,
    /// Month number, 1-12.
    pub month_num: u32,
    /// Day of month.
    pub day: u32,
    /// English weekday name, e.g. `"Monday"`.
    pub day_name: &'static str,
    pub hour: u32,
    pub minute: u32,
    /// Hour bucket label, see [`period_label`].
    pub period: String,
}

impl TimeParts {
    /// Derives every field from `timestamp`.
    pub fn from_timestamp(timestamp: NaiveDateTime) -> Self {
        let date = timestamp.date();
        let hour = timestamp.hour();
        Self {
            date,
            year: date.year(),
            month: month_name(date.month()),
            month_num: date.month(),
            day: date.day(),
            day_name: DAY_NAMES[date.weekday().num_days_from_monday() as usize],
            hour,
            minute: timestamp.minute(),
            period: period_label(hour),
        }
    }
}

/// One logical message of a transcript.
///
/// Continuation lines are folded into `text`, joined by `\n`. Media
/// placeholders and edited markers are kept verbatim.
///
/// # Serialization
///
/// Serializes with every derived field flattened next to `timestamp`, `user`
/// and `text`, which makes the JSON form a ready-made table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    timestamp: NaiveDateTime,
    user: String,
    text: String,
    #[serde(flatten)]
    time: TimeParts,
}

impl Message {
    /// Creates a message and derives its time fields.
    pub fn new(timestamp: NaiveDateTime, user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            user: user.into(),
            text: text.into(),
            time: TimeParts::from_timestamp(timestamp),
        }
    }

    /// Creates a system notification message.
    pub fn notification(timestamp: NaiveDateTime, text: impl Into<String>) -> Self {
        Self::new(timestamp, NOTIFICATION_USER, text)
    }

    /// When the message was sent, as written in the export (no timezone).
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Sender display name, or [`NOTIFICATION_USER`].
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Derived calendar fields.
    pub fn time(&self) -> &TimeParts {
        &self.time
    }

    /// Returns `true` if the text is exactly the media placeholder.
    pub fn is_media(&self) -> bool {
        self.text == MEDIA_PLACEHOLDER
    }

    /// Returns `true` for system notifications.
    pub fn is_notification(&self) -> bool {
        self.user == NOTIFICATION_USER
    }

    /// Returns `true` if the text carries the edited marker.
    pub fn is_edited(&self) -> bool {
        self.text.contains(EDITED_MARKER)
    }
}
