use crate::classify::{SyntaxKind, classify};
use crate::kinds::{
    block_quote::BlockQuote,
    emphasis::{Bold, Italic},
    heading::Heading,
    links::{Image, Link},
    list::{OrderedItem, UnorderedItem},
    media::Video,
};

/// Converts a Markdown document to HTML, one line at a time.
///
/// The input is split on `'\n'`, every segment is classified independently
/// and transformed, and each fragment is appended with a trailing newline.
/// The function is total: any input, including the empty string, produces
/// defined output, and unrecognized lines pass through unchanged.
pub fn convert(markdown: &str) -> String {
    let mut html = String::new();
    for line in markdown.split('\n') {
        html.push_str(&transform(classify(line), line));
        html.push('\n');
    }
    html
}

/// Produces the HTML fragment for one line of the given kind.
///
/// Both video kinds share one transformer; it applies whichever of the two
/// replacement rules matches.
pub fn transform(kind: SyntaxKind, line: &str) -> String {
    match kind {
        SyntaxKind::Heading => Heading::transform(line),
        SyntaxKind::UnorderedItem => UnorderedItem::transform(line),
        SyntaxKind::OrderedItem => OrderedItem::transform(line),
        SyntaxKind::Blockquote => BlockQuote::transform(line),
        SyntaxKind::Bold => Bold::transform(line),
        SyntaxKind::Italic => Italic::transform(line),
        SyntaxKind::VideoDirect | SyntaxKind::VideoEmbedded => Video::transform(line),
        SyntaxKind::Image => Image::transform(line),
        SyntaxKind::Link => Link::transform(line),
        SyntaxKind::Plain => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", "<h1>Title</h1>\n")]
    #[case("## Sub", "<h2>Sub</h2>\n")]
    #[case("* item one", "<ul>\n<li>item one</li>\n</ul>\n")]
    #[case("1. first", "<ol>\n<li>first</li>\n</ol>\n")]
    #[case("> quoted", "<blockquote>quoted</blockquote>\n")]
    #[case("**bold** and normal", "<strong>bold</strong> and normal\n")]
    #[case("*em* only", "<em>em</em> only\n")]
    #[case(
        "![video:demo](clip.mp4)",
        "<video controls><source src=\"clip.mp4\" type=\"video/mp4\">Your browser does not support the video tag.</video>\n"
    )]
    #[case(
        "![embed:yt](https://www.youtube.com/watch?v=abc123)",
        "<iframe src=\"https://www.youtube.com/embed/abc123\" frameborder=\"0\" allowfullscreen></iframe>\n"
    )]
    #[case("![logo](logo.png)", "<img src=\"logo.png\" alt=\"logo\">\n")]
    #[case("[home](index.html)", "<a href=\"index.html\">home</a>\n")]
    #[case("plain text", "plain text\n")]
    fn converts_single_lines(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(convert(markdown), expected);
    }

    #[test]
    fn bold_precedence_drops_unrelated_italic() {
        // Bold is tested first and claims the whole line; the separate
        // italic span stays literal.
        assert_eq!(
            convert("**bold** and *italic*"),
            "<strong>bold</strong> and *italic*\n"
        );
    }

    #[rstest]
    #[case("")]
    #[case("one")]
    #[case("a\nb\nc")]
    #[case("# h\n> q\nplain\n")]
    fn one_trailing_newline_per_input_segment(#[case] input: &str) {
        let segments = input.split('\n').count();
        let html = convert(input);
        assert!(html.ends_with('\n'));
        assert_eq!(html.matches('\n').count(), segments);
    }

    #[test]
    fn empty_input_yields_single_newline() {
        assert_eq!(convert(""), "\n");
    }

    #[test]
    fn reconverting_html_treats_it_as_plain() {
        let once = convert("just\nplain\nlines");
        let twice = convert(&once);
        // The trailing newline of the first pass becomes one extra empty
        // fragment; the HTML itself is untouched.
        assert_eq!(twice, format!("{once}\n"));
    }

    #[test]
    fn video_line_is_not_image_converted() {
        let html = convert("![video:x](a.mp4)");
        assert!(html.contains("<video controls>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn consecutive_list_items_are_not_merged() {
        assert_eq!(
            convert("* one\n* two"),
            "<ul>\n<li>one</li>\n</ul>\n<ul>\n<li>two</li>\n</ul>\n"
        );
    }

    #[test]
    fn carriage_returns_are_preserved() {
        // Splitting is on '\n' only; a CRLF document keeps its '\r' in the
        // fragment text.
        assert_eq!(convert("plain\r\nnext"), "plain\r\nnext\n");
    }
}
