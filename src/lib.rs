//! ytsum - A Rust CLI tool for summarizing YouTube videos with Claude
//!
//! This library extracts a video ID from a YouTube URL, fetches the video title
//! and caption transcript, generates a summary via the Anthropic Messages API,
//! and saves the summary alongside the full transcript to a text file.

pub mod cli;
pub mod config;
pub mod output;
pub mod summarize;
pub mod video;

pub use cli::Cli;
pub use config::Config;
pub use summarize::{SummaryPipeline, SummaryRun};
pub use video::extract_video_id;

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to the summarizer
#[derive(thiserror::Error, Debug)]
pub enum SummarizerError {
    #[error("Unsupported URL format: {0}")]
    UnsupportedUrl(String),

    #[error("Video details not found for video ID: {0}")]
    MetadataUnavailable(String),

    #[error("Transcript unavailable for video ID {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[error("Claude API error (HTTP {status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("Claude API response did not contain any content")]
    MalformedResponse,

    #[error("File operation failed: {0}")]
    FileError(String),
}
