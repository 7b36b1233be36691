//! Word filtering pipeline shared by the word statistics.
//!
//! Both [`most_common_words`](crate::core::analysis::Analyzer::most_common_words)
//! and the word-cloud preparation run the same steps:
//!
//! 1. skip notifications and exact media placeholders
//! 2. remove the edited marker, skip messages that are blank afterwards
//! 3. lowercase, split on whitespace
//! 4. keep only letters, digits and `@` in each token
//! 5. drop empty tokens, mentions (`@...`), stop words and parts of user names

use std::collections::HashSet;

use crate::Message;
use crate::core::stopwords::StopWords;
use crate::message::EDITED_MARKER;

/// Keeps only alphanumeric characters and `@`.
fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '@')
        .collect()
}

/// Lowercased, cleaned parts of every user name present in `messages`.
fn name_parts(messages: &[&Message]) -> HashSet<String> {
    let users: HashSet<&str> = messages.iter().map(|m| m.user()).collect();
    users
        .into_iter()
        .flat_map(|user| {
            user.to_lowercase()
                .split_whitespace()
                .map(clean_token)
                .collect::<Vec<_>>()
        })
        .filter(|part| !part.is_empty())
        .collect()
}

/// Runs the pipeline over a filtered view and returns the surviving words in
/// transcript order.
pub fn filtered_words(messages: &[&Message], stop_words: &StopWords) -> Vec<String> {
    let names = name_parts(messages);
    let mut words = Vec::new();

    for message in messages {
        if message.is_notification() || message.is_media() {
            continue;
        }

        let text = message.text().replace(EDITED_MARKER, "");
        if text.trim().is_empty() {
            continue;
        }

        for token in text.to_lowercase().split_whitespace() {
            let word = clean_token(token);
            if word.is_empty()
                || word.starts_with('@')
                || stop_words.contains(&word)
                || names.contains(&word)
            {
                continue;
            }
            words.push(word);
        }
    }

    words
}
