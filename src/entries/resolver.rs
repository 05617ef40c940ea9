//! Video identifier extraction from YouTube URLs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::youtube;

/// Matches watch pages, short links, embeds, `/v/`, `/e/`, `/shorts/`,
/// `/live/` and any youtube.com URL carrying a `v=` query parameter.
#[allow(clippy::expect_used)]
static VIDEO_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?|shorts|live)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .expect("valid video id pattern")
});

/// Canonical 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch-page URL for this video.
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("{}{}", youtube::WATCH_URL, self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video identifier from a source locator.
///
/// Returns `None` when no known URL shape matches.
#[must_use]
pub fn resolve_video_id(source: &str) -> Option<VideoId> {
    VIDEO_ID_PATTERN
        .captures(source)
        .and_then(|caps| caps.get(1))
        .filter(|m| m.as_str().len() == youtube::ID_LEN)
        .map(|m| VideoId(m.as_str().to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn test_all_known_shapes_resolve_to_same_id() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?si=abcdef",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ",
        ];

        for url in urls {
            let id = resolve_video_id(url);
            assert_eq!(id.as_ref().map(VideoId::as_str), Some(ID), "url: {url}");
        }
    }

    #[test]
    fn test_case_insensitive_host() {
        let id = resolve_video_id("https://WWW.YOUTUBE.COM/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(id.as_str(), ID);
    }

    #[test]
    fn test_unrelated_url_is_unresolved() {
        assert!(resolve_video_id("https://example.com/watch?v=dQw4w9WgXcQ").is_none());
        assert!(resolve_video_id("https://vimeo.com/123456789").is_none());
        assert!(resolve_video_id("not a url").is_none());
    }

    #[test]
    fn test_short_id_is_unresolved() {
        assert!(resolve_video_id("https://youtu.be/abc").is_none());
    }

    #[test]
    fn test_watch_url() {
        let id = resolve_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(id.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(id.to_string(), ID);
    }
}
