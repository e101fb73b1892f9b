use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use moltbook_common::observability::{init_logging, LogConfig};
use moltbook_common::{CrawlConfig, OutputFormat};
use moltbook_config::MoltbookConfigLoader;
use moltbook_crawler::crawl::crawl;
use tracing::info;

mod render;

/// Crawl moltbook.com and print the extracted content cards.
#[derive(Debug, Parser)]
#[command(name = "moltbook", version, about)]
struct Cli {
    /// Path to a YAML config file; falls back to the per-user file when present.
    #[arg(long, env = "MOLTBOOK_CONFIG")]
    config: Option<PathBuf>,

    /// Run with a visible browser window.
    #[arg(long)]
    no_headless: bool,

    /// Output format for the extracted items.
    #[arg(long, value_enum)]
    output: Option<OutputArg>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputArg {
    Text,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Load config (flags win over env and file)
    let loader = match &cli.config {
        Some(path) => MoltbookConfigLoader::new().with_file(path),
        None => MoltbookConfigLoader::new().with_default_file(),
    };
    let mut config: CrawlConfig = loader.load()?;
    if cli.no_headless {
        config.headless = false;
    }
    if let Some(output) = cli.output {
        config.output_format = output.into();
    }

    // FIXME: surface the log directory and filter in moltbook.yaml.
    let log_path = init_logging(LogConfig {
        emit_stderr: false,
        ..LogConfig::default()
    })?;
    info!(log = %log_path.display(), headless = config.headless, "starting crawl");

    let items = crawl(&config).await;

    if items.is_empty() {
        eprintln!("No items found. The website structure might have changed.");
        return Ok(());
    }

    match config.output_format {
        OutputFormat::Text => print!("{}", render::render_text(&items)),
        OutputFormat::Json => println!("{}", render::render_json(&items)?),
    }
    Ok(())
}
