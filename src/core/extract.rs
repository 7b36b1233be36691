//! Link and emoji detection.
//!
//! - [`LinkExtractor`] finds URL-like substrings, bare domains included
//!   (`example.com` counts as much as `https://example.com/page`). A link
//!   without a scheme or `www.` only counts when its host ends in a public
//!   suffix, so file names like `photo.jpg` are not links.
//! - [`is_emoji`] classifies a single character against the emoji table of
//!   the `emojis` crate, skin-tone modifiers included.

use std::fmt;

use linkify::{LinkFinder, LinkKind};

/// Heuristic URL finder used for link counts.
pub struct LinkExtractor {
    finder: LinkFinder,
}

impl LinkExtractor {
    /// Creates an extractor that accepts URLs without a scheme.
    pub fn new() -> Self {
        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url]);
        finder.url_must_have_scheme(false);
        Self { finder }
    }

    fn links<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.finder
            .links(text)
            .map(|link| link.as_str())
            .filter(|link| has_scheme(link) || is_www(link) || has_known_suffix(host(link)))
    }

    /// Returns every link found in `text`, in order.
    pub fn find_urls<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.links(text).collect()
    }

    /// Returns the number of links in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.links(text).count()
    }
}

fn has_scheme(link: &str) -> bool {
    link.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

fn is_www(link: &str) -> bool {
    link.get(..4).is_some_and(|head| head.eq_ignore_ascii_case("www."))
}

/// Host part of a schemeless link: everything before the path, query,
/// fragment or port.
fn host(link: &str) -> &str {
    link.split(['/', '?', '#', ':']).next().unwrap_or(link)
}

fn has_known_suffix(host: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    psl::suffix(host.as_bytes()).is_some_and(|suffix| suffix.is_known())
}

impl fmt::Debug for LinkExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkExtractor").finish_non_exhaustive()
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` if `c` on its own is an emoji.
///
/// Skin-tone modifiers (U+1F3FB..=U+1F3FF) count on their own. Zero-width
/// joiners and variation selectors only occur inside sequences and are not
/// emoji.
pub fn is_emoji(c: char) -> bool {
    if SKIN_TONES.contains(&c) {
        return true;
    }
    let mut buf = [0u8; 4];
    emojis::get(c.encode_utf8(&mut buf)).is_some()
}

const SKIN_TONES: std::ops::RangeInclusive<char> = '\u{1F3FB}'..='\u{1F3FF}';

/// Yields the emoji characters of `text`, in order.
pub fn emoji_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| is_emoji(*c))
}
