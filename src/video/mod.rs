use async_trait::async_trait;
use url::Url;

pub mod metadata;
pub mod transcript;

use crate::{Result, SummarizerError};

/// Trait for looking up video details
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetch the title for a video ID
    async fn video_title(&self, video_id: &str) -> Result<String>;
}

/// Trait for retrieving caption transcripts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the full transcript text for a video ID
    async fn transcript(&self, video_id: &str) -> Result<String>;
}

/// Extract the video ID from various forms of YouTube URLs.
///
/// Supported shapes: `youtu.be/<id>`, `youtube.com/watch?v=<id>`,
/// `youtube.com/embed/<id>`, and `youtube.com/v/<id>`.
pub fn extract_video_id(url: &str) -> Result<String> {
    let unsupported = || SummarizerError::UnsupportedUrl(url.to_string());

    let parsed = Url::parse(url).map_err(|_| unsupported())?;
    let host = parsed.host_str().ok_or_else(unsupported)?;

    if host.eq_ignore_ascii_case("youtu.be") {
        let id = parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|segment| !segment.is_empty())
            .ok_or_else(unsupported)?;
        return Ok(id.to_string());
    }

    if host.eq_ignore_ascii_case("www.youtube.com") || host.eq_ignore_ascii_case("youtube.com") {
        if parsed.path() == "/watch" {
            let id = parsed
                .query_pairs()
                .find(|(key, _)| key.as_ref() == "v")
                .map(|(_, value)| value.to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(unsupported)?;
            return Ok(id);
        }

        if parsed.path().starts_with("/embed/") || parsed.path().starts_with("/v/") {
            let id = parsed
                .path_segments()
                .and_then(|mut segments| segments.nth(1))
                .filter(|segment| !segment.is_empty())
                .ok_or_else(unsupported)?;
            return Ok(id.to_string());
        }
    }

    Err(unsupported().into())
}

/// Canonical watch URL for a video ID
pub fn canonical_watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}
