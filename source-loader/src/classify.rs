//! Source classification: video host vs generic web page.

use std::sync::LazyLock;

use regex::Regex;

/// What kind of source a URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A known video-hosting URL (transcript-based loading).
    Video,
    /// Anything else (rendered-page loading).
    Page,
}

/// Matches YouTube watch/short links, with optional scheme and `www.` prefix.
static VIDEO_HOST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+$").expect("valid video host regex")
});

/// Classify a URL as [`SourceKind::Video`] or [`SourceKind::Page`].
///
/// Total over arbitrary strings: malformed URLs are simply classified as
/// `Page` and left for the loader to reject. Classification itself never
/// fails.
pub fn classify(url: &str) -> SourceKind {
    if VIDEO_HOST_RE.is_match(url.trim()) {
        SourceKind::Video
    } else {
        SourceKind::Page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_hosts_match_with_and_without_prefixes() {
        for url in [
            "https://www.youtube.com/watch?v=abc123",
            "http://youtube.com/watch?v=abc123",
            "youtube.com/watch?v=abc123",
            "https://youtu.be/abc123",
            "www.youtu.be/abc123",
            "youtu.be/abc123",
        ] {
            assert_eq!(classify(url), SourceKind::Video, "url: {url}");
        }
    }

    #[test]
    fn everything_else_is_a_page() {
        for url in [
            "https://example.com/article",
            "https://vimeo.com/12345",
            "https://notyoutube.com/watch?v=abc",
            "ftp://youtube.example.org/clip",
            "",
            "not a url at all",
        ] {
            assert_eq!(classify(url), SourceKind::Page, "url: {url}");
        }
    }

    #[test]
    fn bare_host_without_path_is_a_page() {
        assert_eq!(classify("https://youtube.com"), SourceKind::Page);
        assert_eq!(classify("youtu.be/"), SourceKind::Page);
    }
}
