use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{build_summary_prompt, SummaryGenerator};
use crate::config::ClaudeConfig;
use crate::{Result, SummarizerError};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the Anthropic Messages API
pub struct ClaudeClient {
    config: ClaudeConfig,
    http: reqwest::Client,
}

#[derive(Debug, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    pub text: String,
}

impl ClaudeClient {
    pub fn new(config: ClaudeConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn build_request(&self, prompt: String) -> MessagesRequest {
        MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt,
            }],
        }
    }

    /// Send a single prompt to the Messages API and return the generated text.
    /// One-shot request; any failure is terminal for the run.
    async fn request(&self, prompt: String) -> Result<String> {
        tracing::info!("Sending request to Claude API");

        let request = self.build_request(prompt);

        let response = self
            .http
            .post(&self.config.api_url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .context("Failed to reach the Claude API")?;

        let status = response.status();
        tracing::info!("Claude API response status code: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Error from Claude API: {}", body);
            return Err(SummarizerError::ApiError {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .context("Failed to parse Claude API response")?;

        let content = parsed
            .content
            .first()
            .map(|block| block.text.clone())
            .ok_or(SummarizerError::MalformedResponse)?;

        tracing::info!(
            "Claude API response received. Length: {} characters",
            content.len()
        );
        Ok(content)
    }
}

#[async_trait]
impl SummaryGenerator for ClaudeClient {
    async fn summarize(&self, transcript: &str) -> Result<String> {
        tracing::info!("Generating summary");

        let prompt = build_summary_prompt(transcript);
        let summary = self.request(prompt).await?;

        tracing::info!("Summary generated successfully");
        Ok(summary)
    }
}
