use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use super::{canonical_watch_url, MetadataFetcher};
use crate::{Result, SummarizerError};

/// Video details lookup using YouTube's oEmbed API
pub struct OembedClient {
    http: reqwest::Client,
}

impl OembedClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OembedResponse {
    title: String,
}

#[async_trait]
impl MetadataFetcher for OembedClient {
    async fn video_title(&self, video_id: &str) -> Result<String> {
        tracing::info!("Fetching details for video ID: {}", video_id);

        let oembed_url = format!(
            "https://www.youtube.com/oembed?url={}&format=json",
            urlencoding::encode(&canonical_watch_url(video_id))
        );
        tracing::debug!("oEmbed request URL: {}", oembed_url);

        let response = self
            .http
            .get(&oembed_url)
            .send()
            .await
            .context("Failed to reach the YouTube oEmbed API")?;

        if !response.status().is_success() {
            tracing::error!(
                "oEmbed lookup failed for {} with HTTP {}",
                video_id,
                response.status()
            );
            return Err(SummarizerError::MetadataUnavailable(video_id.to_string()).into());
        }

        let oembed: OembedResponse = response
            .json()
            .await
            .context("Failed to parse YouTube oEmbed response")?;

        if oembed.title.is_empty() {
            return Err(SummarizerError::MetadataUnavailable(video_id.to_string()).into());
        }

        tracing::info!("Video title: {}", oembed.title);
        Ok(oembed.title)
    }
}

impl Default for OembedClient {
    fn default() -> Self {
        Self::new()
    }
}
