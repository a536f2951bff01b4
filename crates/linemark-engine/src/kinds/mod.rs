//! Syntax kind modules, each owning the delimiters, patterns, and transform
//! for one class of line.
//!
//! All syntax knowledge for a kind lives in its module rather than in
//! classifier code. Regexes are compiled once and cached behind `OnceLock`
//! accessors.

pub mod block_quote;
pub mod emphasis;
pub mod heading;
pub mod links;
pub mod list;
pub mod media;

/// Returns `s` with its first `n` characters removed, or `""` when `s` is
/// shorter than that.
pub(crate) fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}
