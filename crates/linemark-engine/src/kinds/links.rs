use regex::Regex;
use std::sync::OnceLock;

/// Inline image lines (`![alt](url)`).
pub struct Image;

impl Image {
    fn image_regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX
            .get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
    }

    fn video_alt_regex() -> &'static Regex {
        static VIDEO_ALT_REGEX: OnceLock<Regex> = OnceLock::new();
        VIDEO_ALT_REGEX
            .get_or_init(|| Regex::new(r"!\[video:(.*?)\]").expect("Invalid video alt regex"))
    }

    /// The image rule passes on anything with a `video:` alt prefix, so a
    /// malformed video line falls through to later recognizers instead of
    /// rendering as an image.
    pub fn matches(line: &str) -> bool {
        Self::image_regex().is_match(line) && !Self::video_alt_regex().is_match(line)
    }

    /// Converts the first image occurrence only; any further images on the
    /// line stay as literal text.
    pub fn transform(line: &str) -> String {
        Self::image_regex()
            .replace(line, "<img src=\"${2}\" alt=\"${1}\">")
            .into_owned()
    }
}

/// Inline link lines (`[text](url)`).
pub struct Link;

impl Link {
    fn link_regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
    }

    pub fn matches(line: &str) -> bool {
        Self::link_regex().is_match(line)
    }

    /// Converts every link occurrence on the line, unlike the
    /// single-occurrence image rule.
    pub fn transform(line: &str) -> String {
        Self::link_regex()
            .replace_all(line, "<a href=\"${2}\">${1}</a>")
            .into_owned()
    }
}
