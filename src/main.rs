use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ytsum::{Cli, Config, SummaryPipeline};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose { "ytsum=debug" } else { "ytsum=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    if cli.verbose {
        config.display();
    }

    let pipeline = SummaryPipeline::new(config, cli.quiet)?;

    tracing::info!("Starting summarization for URL: {}", cli.url);
    let run = pipeline.run(&cli.url).await?;

    println!("Summary saved to: {}", run.output_path.display());

    Ok(())
}
