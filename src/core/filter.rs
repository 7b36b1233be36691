//! User selection and filtered views.
//!
//! Every statistic is computed for a [`Selection`]: either the whole
//! conversation ([`Selection::Overall`]) or the messages of one user.
//! Filtering never copies or mutates messages; [`Selection::apply`] returns a
//! view of references into the original slice.
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::{Selection, user_list};
//! use chatlens::parser::TranscriptParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let parsed = TranscriptParser::new().parse_str(
//!     "1/1/24, 10:00 - Bob: hi\n1/1/24, 10:01 - Alice added Carol\n1/1/24, 10:02 - Alice: hey\n",
//! )?;
//!
//! assert_eq!(user_list(&parsed.messages), ["Overall", "Alice", "Bob"]);
//!
//! let alice: Selection = "Alice".parse()?;
//! assert_eq!(alice.apply(&parsed.messages).len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Matching is exact and case-sensitive
//! - The notification sentinel is never a selectable user

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::Message;
use crate::error::ChatlensError;
use crate::message::{NOTIFICATION_USER, OVERALL};

/// Which messages a statistic covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum Selection {
    /// Every message, notifications included.
    #[default]
    Overall,
    /// Messages whose sender is exactly this name.
    User(String),
}

impl Selection {
    /// Creates a single-user selection.
    ///
    /// The label `"Overall"` still means [`Selection::Overall`].
    pub fn user(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == OVERALL {
            Selection::Overall
        } else {
            Selection::User(name)
        }
    }

    /// Returns `true` for [`Selection::Overall`].
    pub fn is_overall(&self) -> bool {
        matches!(self, Selection::Overall)
    }

    /// Returns `true` if `message` belongs to this selection.
    pub fn matches(&self, message: &Message) -> bool {
        match self {
            Selection::Overall => true,
            Selection::User(name) => name != NOTIFICATION_USER && message.user() == name,
        }
    }

    /// Returns the messages of this selection, in transcript order.
    pub fn apply<'a>(&self, messages: &'a [Message]) -> Vec<&'a Message> {
        messages.iter().filter(|m| self.matches(m)).collect()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Overall => f.write_str(OVERALL),
            Selection::User(name) => f.write_str(name),
        }
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> String {
        selection.to_string()
    }
}

impl FromStr for Selection {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == NOTIFICATION_USER {
            return Err(ChatlensError::unknown_user(s));
        }
        Ok(Selection::user(s))
    }
}

/// Returns the selectable users: `"Overall"` followed by every distinct
/// sender in ascending order, without the notification sentinel.
pub fn user_list(messages: &[Message]) -> Vec<String> {
    let users: BTreeSet<&str> = messages
        .iter()
        .map(|m| m.user())
        .filter(|u| *u != NOTIFICATION_USER)
        .collect();

    std::iter::once(OVERALL.to_string())
        .chain(users.into_iter().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_msg(user: &str, text: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Message::new(ts, user, text)
    }

    #[test]
    fn test_overall_keeps_everything() {
        let messages = vec![
            make_msg("Alice", "Hello"),
            make_msg(NOTIFICATION_USER, "Bob joined"),
            make_msg("Bob", "Hi"),
        ];
        assert_eq!(Selection::Overall.apply(&messages).len(), 3);
    }

    #[test]
    fn test_user_filter_is_exact() {
        let messages = vec![
            make_msg("Alice", "Hello"),
            make_msg("alice", "lowercase twin"),
            make_msg("Bob", "Hi"),
        ];
        let view = Selection::user("Alice").apply(&messages);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].text(), "Hello");
    }

    #[test]
    fn test_view_preserves_order() {
        let messages = vec![
            make_msg("Alice", "1"),
            make_msg("Bob", "2"),
            make_msg("Alice", "3"),
        ];
        let texts: Vec<_> = Selection::user("Alice")
            .apply(&messages)
            .iter()
            .map(|m| m.text())
            .collect();
        assert_eq!(texts, ["1", "3"]);
    }

    #[test]
    fn test_sentinel_never_matches() {
        let messages = vec![make_msg(NOTIFICATION_USER, "Bob joined")];
        let sentinel = Selection::User(NOTIFICATION_USER.to_string());
        assert!(sentinel.apply(&messages).is_empty());
        assert!(NOTIFICATION_USER.parse::<Selection>().is_err());
    }

    #[test]
    fn test_unknown_user_yields_empty_view() {
        let messages = vec![make_msg("Alice", "Hello")];
        assert!(Selection::user("Mallory").apply(&messages).is_empty());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Overall".parse::<Selection>().unwrap(), Selection::Overall);
        assert_eq!(
            "Alice".parse::<Selection>().unwrap(),
            Selection::User("Alice".into())
        );
        assert!("".parse::<Selection>().is_err());
    }

    #[test]
    fn test_user_list_sorted_without_sentinel() {
        let messages = vec![
            make_msg("Charlie", "x"),
            make_msg(NOTIFICATION_USER, "Alice added Bob"),
            make_msg("Alice", "y"),
            make_msg("Charlie", "z"),
        ];
        assert_eq!(user_list(&messages), ["Overall", "Alice", "Charlie"]);
    }

    #[test]
    fn test_user_list_empty() {
        assert_eq!(user_list(&[]), ["Overall"]);
    }
}
