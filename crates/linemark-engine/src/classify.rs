use serde::Serialize;

use crate::kinds::{
    block_quote::BlockQuote,
    emphasis::{Bold, Italic},
    heading::Heading,
    links::{Image, Link},
    list::{OrderedItem, UnorderedItem},
    media::Video,
};

/// Classification assigned to a single line, determining which transformer
/// runs.
///
/// Exactly one kind is assigned per line by testing recognizers in a fixed
/// priority order (see [`classify`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SyntaxKind {
    Heading,
    UnorderedItem,
    OrderedItem,
    Blockquote,
    Bold,
    Italic,
    VideoDirect,
    VideoEmbedded,
    Image,
    Link,
    Plain,
}

/// Classifies one line by testing recognizers in priority order, stopping at
/// the first match.
///
/// The order is load-bearing: bold is tested before italic so `**` emphasis
/// is never split into two italics, and the video patterns are tested before
/// the generic image pattern so video markdown never renders as a broken
/// `<img>` tag. Lines matching nothing are [`SyntaxKind::Plain`].
pub fn classify(line: &str) -> SyntaxKind {
    if Heading::matches(line) {
        SyntaxKind::Heading
    } else if UnorderedItem::matches(line) {
        SyntaxKind::UnorderedItem
    } else if OrderedItem::matches(line) {
        SyntaxKind::OrderedItem
    } else if BlockQuote::matches(line) {
        SyntaxKind::Blockquote
    } else if Bold::matches(line) {
        SyntaxKind::Bold
    } else if Italic::matches(line) {
        SyntaxKind::Italic
    } else if Video::matches(line) {
        if Video::is_direct(line) {
            SyntaxKind::VideoDirect
        } else {
            SyntaxKind::VideoEmbedded
        }
    } else if Image::matches(line) {
        SyntaxKind::Image
    } else if Link::matches(line) {
        SyntaxKind::Link
    } else {
        SyntaxKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", SyntaxKind::Heading)]
    #[case("###### deep", SyntaxKind::Heading)]
    #[case("* item", SyntaxKind::UnorderedItem)]
    #[case("12. item", SyntaxKind::OrderedItem)]
    #[case("> quote", SyntaxKind::Blockquote)]
    #[case(">no space", SyntaxKind::Blockquote)]
    #[case("**bold**", SyntaxKind::Bold)]
    #[case("*italic*", SyntaxKind::Italic)]
    #[case("![video:demo](clip.mp4)", SyntaxKind::VideoDirect)]
    #[case(
        "![embed:yt](https://www.youtube.com/watch?v=abc)",
        SyntaxKind::VideoEmbedded
    )]
    #[case("![alt](pic.png)", SyntaxKind::Image)]
    #[case("[text](url)", SyntaxKind::Link)]
    #[case("just text", SyntaxKind::Plain)]
    #[case("", SyntaxKind::Plain)]
    fn classifies_by_priority(#[case] line: &str, #[case] expected: SyntaxKind) {
        assert_eq!(classify(line), expected);
    }

    #[test]
    fn bold_wins_over_italic() {
        assert_eq!(classify("**b** and *i*"), SyntaxKind::Bold);
    }

    #[test]
    fn heading_wins_over_emphasis() {
        assert_eq!(classify("# title with **bold**"), SyntaxKind::Heading);
    }

    #[test]
    fn video_line_is_never_an_image() {
        assert_eq!(classify("![video:x](a.mp4)"), SyntaxKind::VideoDirect);
        assert_eq!(
            classify("![embed:x](www.youtube.com/watch?v=id)"),
            SyntaxKind::VideoEmbedded
        );
    }

    #[test]
    fn adjacent_double_asterisks_still_classify_as_italic() {
        // The italic recognizer also matches the two halves of a lone `**`;
        // the transformer then leaves the line unchanged.
        assert_eq!(classify("a ** b"), SyntaxKind::Italic);
    }

    #[test]
    fn video_alt_prefix_excludes_image_rule() {
        // Fails both video URL patterns and the image rule's video-alt
        // exclusion, so the link recognizer claims it.
        assert_eq!(classify("![video:x](notes.txt)"), SyntaxKind::Link);
    }

    #[test]
    fn list_markers_require_trailing_whitespace() {
        assert_eq!(classify("*not a list*"), SyntaxKind::Italic);
        assert_eq!(classify("1.missing space"), SyntaxKind::Plain);
    }
}
