use regex::Regex;
use std::sync::OnceLock;

/// Double-asterisk emphasis (`**strong**`).
pub struct Bold;

impl Bold {
    fn span_regex() -> &'static Regex {
        static SPAN_REGEX: OnceLock<Regex> = OnceLock::new();
        SPAN_REGEX.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold regex"))
    }

    pub fn matches(line: &str) -> bool {
        Self::span_regex().is_match(line)
    }

    /// Replaces every `**text**` span with `<strong>text</strong>`.
    pub fn transform(line: &str) -> String {
        Self::span_regex()
            .replace_all(line, "<strong>${1}</strong>")
            .into_owned()
    }
}

/// Single-asterisk emphasis (`*em*`).
pub struct Italic;

impl Italic {
    /// Recognizer only: any two asterisks with optional content between.
    /// Whether a span actually converts is decided by [`Italic::transform`],
    /// which requires delimiters not adjacent to another `*`.
    fn span_regex() -> &'static Regex {
        static SPAN_REGEX: OnceLock<Regex> = OnceLock::new();
        SPAN_REGEX.get_or_init(|| Regex::new(r"\*(.*?)\*").expect("Invalid italic regex"))
    }

    pub fn matches(line: &str) -> bool {
        Self::span_regex().is_match(line)
    }

    /// Replaces every `*text*` span with `<em>text</em>`.
    ///
    /// A `*` only counts as a delimiter when neither adjacent character is
    /// also `*`, so the two halves of a `**` bold marker are never consumed.
    /// Hand-rolled scan: the `regex` crate has no lookaround.
    pub fn transform(line: &str) -> String {
        let chars: Vec<char> = line.chars().collect();
        let mut out = String::with_capacity(line.len());
        let mut i = 0;
        while i < chars.len() {
            if Self::is_delimiter(&chars, i)
                && let Some(j) = Self::closing_delimiter(&chars, i)
            {
                out.push_str("<em>");
                out.extend(&chars[i + 1..j]);
                out.push_str("</em>");
                i = j + 1;
                continue;
            }
            out.push(chars[i]);
            i += 1;
        }
        out
    }

    /// A lone `*`: neither the previous nor the next character is `*`.
    fn is_delimiter(chars: &[char], i: usize) -> bool {
        chars[i] == '*'
            && (i == 0 || chars[i - 1] != '*')
            && (i + 1 >= chars.len() || chars[i + 1] != '*')
    }

    /// First closing delimiter after `i` that leaves non-empty content.
    fn closing_delimiter(chars: &[char], i: usize) -> Option<usize> {
        (i + 2..chars.len()).find(|&j| {
            chars[j] == '*' && chars[j - 1] != '*' && (j + 1 >= chars.len() || chars[j + 1] != '*')
        })
    }
}
