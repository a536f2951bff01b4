use super::skip_chars;

/// Blockquote lines (`> text`).
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// A line is a blockquote when it starts with `>`.
    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Converts `> text` into `<blockquote>text</blockquote>`.
    ///
    /// The text always starts two characters in, so `>tight` drops the first
    /// content character. Quotes do not nest.
    pub fn transform(line: &str) -> String {
        let text = skip_chars(line, 2).trim();
        format!("<blockquote>{text}</blockquote>")
    }
}
