use regex::Regex;
use std::sync::OnceLock;

/// Video lines: direct file embeds (`![video:caption](clip.mp4)`) and
/// YouTube embeds (`![embed:caption](https://www.youtube.com/watch?v=ID)`).
///
/// Both are recognized ahead of the generic image rule so that video
/// markdown never renders as a broken `<img>` tag. The `http://` or
/// `https://` prefix is optional in both patterns.
pub struct Video;

impl Video {
    /// Extensions accepted by the direct pattern: mp4, mov, avi, webm.
    fn direct_regex() -> &'static Regex {
        static DIRECT_REGEX: OnceLock<Regex> = OnceLock::new();
        DIRECT_REGEX.get_or_init(|| {
            Regex::new(r"!\[video:(.*?)\]\(((?:https?://)?[^)]+\.(mp4|mov|avi|webm))\)")
                .expect("Invalid direct video regex")
        })
    }

    fn embedded_regex() -> &'static Regex {
        static EMBEDDED_REGEX: OnceLock<Regex> = OnceLock::new();
        EMBEDDED_REGEX.get_or_init(|| {
            Regex::new(r"!\[embed:(.*?)\]\(((?:https?://)?www\.youtube\.com/watch\?v=([^)]+))\)")
                .expect("Invalid embedded video regex")
        })
    }

    /// True when either video pattern matches.
    pub fn matches(line: &str) -> bool {
        Self::direct_regex().is_match(line) || Self::embedded_regex().is_match(line)
    }

    /// True when the direct file pattern matches; checked before embedded.
    pub fn is_direct(line: &str) -> bool {
        Self::direct_regex().is_match(line)
    }

    /// Applies both replacement rules to the line. Each pattern is specific
    /// enough that only the matching one has any effect; the caption is
    /// dropped from the output.
    pub fn transform(line: &str) -> String {
        let line = Self::direct_regex().replace(
            line,
            "<video controls><source src=\"${2}\" type=\"video/${3}\">\
             Your browser does not support the video tag.</video>",
        );
        Self::embedded_regex()
            .replace(
                &line,
                "<iframe src=\"https://www.youtube.com/embed/${3}\" \
                 frameborder=\"0\" allowfullscreen></iframe>",
            )
            .into_owned()
    }
}
