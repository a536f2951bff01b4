use regex::Regex;
use std::sync::OnceLock;

use super::skip_chars;

/// Unordered list lines (`* item`).
pub struct UnorderedItem;

impl UnorderedItem {
    fn marker_regex() -> &'static Regex {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        MARKER_REGEX.get_or_init(|| Regex::new(r"^\*\s").expect("Invalid unordered item regex"))
    }

    /// A line is an unordered item when it starts with `*` followed by
    /// whitespace. A bare `*word` is emphasis, not a list.
    pub fn matches(line: &str) -> bool {
        Self::marker_regex().is_match(line)
    }

    /// Wraps the item in its own `<ul>`. Consecutive items are not merged
    /// into one list: every line gets a complete `<ul>` of its own.
    pub fn transform(line: &str) -> String {
        let text = skip_chars(line, 2).trim();
        format!("<ul>\n<li>{text}</li>\n</ul>")
    }
}

/// Ordered list lines (`1. item`).
pub struct OrderedItem;

impl OrderedItem {
    fn marker_regex() -> &'static Regex {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        MARKER_REGEX.get_or_init(|| Regex::new(r"^\d+\.\s").expect("Invalid ordered item regex"))
    }

    /// A line is an ordered item when it starts with digits, a period, and
    /// whitespace.
    pub fn matches(line: &str) -> bool {
        Self::marker_regex().is_match(line)
    }

    /// Wraps the item in its own `<ol>`, without merging consecutive items.
    /// The text starts one character past the first period.
    pub fn transform(line: &str) -> String {
        let text = match line.find('.') {
            Some(i) => skip_chars(&line[i + 1..], 1).trim(),
            None => line,
        };
        format!("<ol>\n<li>{text}</li>\n</ol>")
    }
}
