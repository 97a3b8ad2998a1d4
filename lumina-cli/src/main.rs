//! Lumina CLI
//!
//! Command-line front-end for the Lumina video-generation client.

mod commands;
mod config;
mod types;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lumina")]
#[command(about = "Generate videos from text prompts and reference images", long_about = None)]
struct Cli {
    /// Generation service URL
    #[arg(
        long,
        env = "LUMINA_API_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumina=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        base_url: cli.base_url,
    };

    handle_command(cli.command, &config).await
}
