use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::video::canonical_watch_url;

/// File name of the artifact for a video ID
pub fn summary_filename(video_id: &str) -> String {
    format!("{}_summary.txt", video_id)
}

/// Render the artifact content: title line, canonical URL line, summary, transcript
pub fn render_summary(video_id: &str, title: &str, summary: &str, transcript: &str) -> String {
    format!(
        "Video Title: {}\nVideo URL: {}\n\nSummary:\n{}\n\nFull Transcript:\n{}",
        title,
        canonical_watch_url(video_id),
        summary,
        transcript
    )
}

/// Write the summary and transcript to `<video_id>_summary.txt`
pub fn save_summary(
    dir: &Path,
    video_id: &str,
    title: &str,
    summary: &str,
    transcript: &str,
) -> Result<PathBuf> {
    let path = dir.join(summary_filename(video_id));
    let content = render_summary(video_id, title, summary, transcript);

    fs_err::write(&path, content).context("Failed to write summary file")?;

    tracing::info!("Summary and transcript saved to {}", path.display());
    Ok(path)
}
