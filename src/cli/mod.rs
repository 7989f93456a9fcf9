use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ytsum",
    about = "Summarize YouTube videos with Claude from their caption transcripts",
    version,
    long_about = "A CLI tool that extracts the caption transcript of a YouTube video, \
generates a structured summary using the Anthropic Messages API, and saves the summary \
together with the full transcript to <video_id>_summary.txt in the working directory."
)]
pub struct Cli {
    /// Full URL of the YouTube video to summarize
    #[arg(value_name = "URL")]
    pub url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long)]
    pub quiet: bool,
}
