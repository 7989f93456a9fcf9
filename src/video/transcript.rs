use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use super::TranscriptFetcher;
use crate::{Result, SummarizerError};

/// Caption transcript retrieval backed by yt-transcript-rs
pub struct CaptionClient {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl CaptionClient {
    pub fn new(languages: Vec<String>) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| anyhow::anyhow!("Failed to initialize the transcript client: {e}"))?;

        Ok(Self { api, languages })
    }
}

#[async_trait]
impl TranscriptFetcher for CaptionClient {
    async fn transcript(&self, video_id: &str) -> Result<String> {
        tracing::info!("Fetching transcript for video ID: {}", video_id);

        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        // Disabled captions, unavailable videos, and rate limiting all collapse
        // into a single failure; the underlying error is kept for diagnostics.
        let fetched = match self.api.fetch_transcript(video_id, &languages, false).await {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::error!("An error occurred while fetching the transcript: {}", e);
                return Err(SummarizerError::TranscriptUnavailable {
                    video_id: video_id.to_string(),
                    reason: e.to_string(),
                }
                .into());
            }
        };

        let full_transcript = join_fragments(fetched.snippets.iter().map(|s| s.text.as_str()));
        if full_transcript.is_empty() {
            return Err(SummarizerError::TranscriptUnavailable {
                video_id: video_id.to_string(),
                reason: "transcript contained no caption fragments".to_string(),
            }
            .into());
        }

        tracing::info!(
            "Transcript fetched successfully. Length: {} characters",
            full_transcript.len()
        );
        Ok(full_transcript)
    }
}

/// Join caption fragments into one text blob, order preserved, timing discarded
pub fn join_fragments<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments.into_iter().collect::<Vec<_>>().join(" ")
}
