use anyhow::Result;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::config::Config;
use crate::output;
use crate::video::{self, metadata::OembedClient, transcript::CaptionClient};
use crate::video::{MetadataFetcher, TranscriptFetcher};

pub mod claude;

/// Trait for generating a summary from a transcript
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    /// Produce a summary of the given transcript text
    async fn summarize(&self, transcript: &str) -> Result<String>;
}

/// Result of a completed summarization run
#[derive(Debug, Clone)]
pub struct SummaryRun {
    /// Extracted video ID
    pub video_id: String,

    /// Video title
    pub title: String,

    /// Full caption transcript
    pub transcript: String,

    /// Generated summary text
    pub summary: String,

    /// Path of the written artifact
    pub output_path: PathBuf,
}

/// Build the fixed prompt instructing Claude to summarize a transcript
pub fn build_summary_prompt(transcript: &str) -> String {
    format!(
        "Please provide a comprehensive summary of the following YouTube video transcript. The summary should:

1. Capture the main topics and key points discussed in the video.
2. Highlight any important insights, data, or arguments presented.
3. Maintain the original tone and perspective of the speaker.
4. Be structured in a clear and coherent manner.
5. Be detailed enough to give a thorough understanding of the video content, but concise enough to be quickly digestible.

Here's the transcript:

{}

Summary:",
        transcript
    )
}

/// Main summarization pipeline
///
/// Runs the five steps strictly in order: parse URL, fetch title, fetch
/// transcript, generate summary, write artifact. The first failing step
/// aborts the run and no artifact is produced.
pub struct SummaryPipeline {
    metadata: Box<dyn MetadataFetcher>,
    transcripts: Box<dyn TranscriptFetcher>,
    generator: Box<dyn SummaryGenerator>,
    output_dir: PathBuf,
    quiet: bool,
}

impl SummaryPipeline {
    /// Create a pipeline with the production collaborators
    pub fn new(config: Config, quiet: bool) -> Result<Self> {
        let captions = CaptionClient::new(config.captions.languages.clone())?;
        let generator = claude::ClaudeClient::new(config.claude);
        let output_dir = std::env::current_dir()?;

        Ok(Self {
            metadata: Box::new(OembedClient::new()),
            transcripts: Box::new(captions),
            generator: Box::new(generator),
            output_dir,
            quiet,
        })
    }

    /// Summarize a video from its URL
    pub async fn run(&self, url: &str) -> Result<SummaryRun> {
        let video_id = video::extract_video_id(url)?;
        tracing::info!("Processing video ID: {}", video_id);

        let progress = self.create_progress_bar();

        progress.set_message("Fetching video details...");
        let title = self.metadata.video_title(&video_id).await?;
        progress.inc(1);

        progress.set_message("Fetching transcript...");
        let transcript = self.transcripts.transcript(&video_id).await?;
        progress.inc(1);

        progress.set_message("Generating summary...");
        let summary = self.generator.summarize(&transcript).await?;
        progress.inc(1);

        progress.set_message("Saving summary...");
        let output_path =
            output::save_summary(&self.output_dir, &video_id, &title, &summary, &transcript)?;
        progress.inc(1);

        progress.finish_with_message("Done");
        tracing::info!("Finished processing video");

        Ok(SummaryRun {
            video_id,
            title,
            transcript,
            summary,
            output_path,
        })
    }

    fn create_progress_bar(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new(4);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::{MockMetadataFetcher, MockTranscriptFetcher};
    use crate::SummarizerError;

    fn pipeline_with(
        metadata: MockMetadataFetcher,
        transcripts: MockTranscriptFetcher,
        generator: MockSummaryGenerator,
        output_dir: PathBuf,
    ) -> SummaryPipeline {
        SummaryPipeline {
            metadata: Box::new(metadata),
            transcripts: Box::new(transcripts),
            generator: Box::new(generator),
            output_dir,
            quiet: true,
        }
    }

    #[test]
    fn test_prompt_contains_transcript_verbatim() {
        let transcript = "so today we're going to talk about Rust ownership";
        let prompt = build_summary_prompt(transcript);
        assert!(prompt.contains(transcript));
    }

    #[test]
    fn test_prompt_has_fixed_instructions() {
        let prompt = build_summary_prompt("anything");
        assert!(prompt.starts_with("Please provide a comprehensive summary"));
        assert!(prompt.ends_with("Summary:"));
    }

    #[tokio::test]
    async fn test_successful_run_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();

        let mut metadata = MockMetadataFetcher::new();
        metadata
            .expect_video_title()
            .times(1)
            .returning(|_| Ok("A Video".to_string()));

        let mut transcripts = MockTranscriptFetcher::new();
        transcripts
            .expect_transcript()
            .times(1)
            .returning(|_| Ok("a b c".to_string()));

        let mut generator = MockSummaryGenerator::new();
        generator
            .expect_summarize()
            .times(1)
            .returning(|_| Ok("short summary".to_string()));

        let pipeline = pipeline_with(metadata, transcripts, generator, dir.path().to_path_buf());
        let run = pipeline
            .run("https://www.youtube.com/watch?v=ABC123")
            .await
            .unwrap();

        assert_eq!(run.video_id, "ABC123");
        assert_eq!(run.title, "A Video");
        assert!(run.output_path.ends_with("ABC123_summary.txt"));

        let content = fs_err::read_to_string(&run.output_path).unwrap();
        assert!(content.contains("A Video"));
        assert!(content.contains("short summary"));
    }

    #[tokio::test]
    async fn test_metadata_failure_stops_the_run() {
        let dir = tempfile::tempdir().unwrap();

        let mut metadata = MockMetadataFetcher::new();
        metadata
            .expect_video_title()
            .times(1)
            .returning(|id| Err(SummarizerError::MetadataUnavailable(id.to_string()).into()));

        let mut transcripts = MockTranscriptFetcher::new();
        transcripts.expect_transcript().times(0);

        let mut generator = MockSummaryGenerator::new();
        generator.expect_summarize().times(0);

        let pipeline = pipeline_with(metadata, transcripts, generator, dir.path().to_path_buf());
        let result = pipeline.run("https://youtu.be/ABC123").await;

        assert!(result.is_err());
        assert!(!dir.path().join("ABC123_summary.txt").exists());
    }

    #[tokio::test]
    async fn test_transcript_failure_prevents_summarization() {
        let dir = tempfile::tempdir().unwrap();

        let mut metadata = MockMetadataFetcher::new();
        metadata
            .expect_video_title()
            .times(1)
            .returning(|_| Ok("A Video".to_string()));

        let mut transcripts = MockTranscriptFetcher::new();
        transcripts.expect_transcript().times(1).returning(|id| {
            Err(SummarizerError::TranscriptUnavailable {
                video_id: id.to_string(),
                reason: "captions disabled".to_string(),
            }
            .into())
        });

        let mut generator = MockSummaryGenerator::new();
        generator.expect_summarize().times(0);

        let pipeline = pipeline_with(metadata, transcripts, generator, dir.path().to_path_buf());
        let result = pipeline.run("https://youtu.be/ABC123").await;

        assert!(result.is_err());
        assert!(!dir.path().join("ABC123_summary.txt").exists());
    }

    #[tokio::test]
    async fn test_api_failure_produces_no_artifact() {
        let dir = tempfile::tempdir().unwrap();

        let mut metadata = MockMetadataFetcher::new();
        metadata
            .expect_video_title()
            .times(1)
            .returning(|_| Ok("A Video".to_string()));

        let mut transcripts = MockTranscriptFetcher::new();
        transcripts
            .expect_transcript()
            .times(1)
            .returning(|_| Ok("a b c".to_string()));

        let mut generator = MockSummaryGenerator::new();
        generator.expect_summarize().times(1).returning(|_| {
            Err(SummarizerError::ApiError {
                status: 429,
                body: "rate limited".to_string(),
            }
            .into())
        });

        let pipeline = pipeline_with(metadata, transcripts, generator, dir.path().to_path_buf());
        let result = pipeline.run("https://youtu.be/ABC123").await;

        let err = result.unwrap_err();
        match err.downcast_ref::<SummarizerError>() {
            Some(SummarizerError::ApiError { status, .. }) => assert_eq!(*status, 429),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!dir.path().join("ABC123_summary.txt").exists());
    }

    #[tokio::test]
    async fn test_invalid_url_makes_no_collaborator_calls() {
        let dir = tempfile::tempdir().unwrap();

        let mut metadata = MockMetadataFetcher::new();
        metadata.expect_video_title().times(0);

        let mut transcripts = MockTranscriptFetcher::new();
        transcripts.expect_transcript().times(0);

        let mut generator = MockSummaryGenerator::new();
        generator.expect_summarize().times(0);

        let pipeline = pipeline_with(metadata, transcripts, generator, dir.path().to_path_buf());
        let result = pipeline.run("https://vimeo.com/123456").await;

        assert!(result.is_err());
    }
}
