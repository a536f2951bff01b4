use super::skip_chars;

/// ATX-style heading lines (`#`, `##`, ...).
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// A line is a heading when it starts with at least one `#`.
    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Converts `#{N} text` into `<hN>text</hN>`.
    ///
    /// The level is the full run of leading `#` and is deliberately not
    /// clamped: ten hashes produce `<h10>`. The text starts one character
    /// after the hash run (normally the separating space) and is trimmed.
    pub fn transform(line: &str) -> String {
        let level = line.bytes().take_while(|&b| b == b'#').count();
        let text = skip_chars(&line[level..], 1).trim();
        format!("<h{level}>{text}</h{level}>")
    }
}
