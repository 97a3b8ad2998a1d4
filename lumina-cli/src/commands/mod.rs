//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod fetch;
mod generate;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use crate::config::Config;
use crate::types::{AspectRatioArg, ResolutionArg, TierArg};

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a video from a text prompt and/or a reference image
    Generate {
        /// Text prompt describing the video
        #[arg(short, long)]
        prompt: Option<String>,

        /// Reference image to condition the generation
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Output aspect ratio
        #[arg(long, value_enum, default_value = "16:9")]
        aspect_ratio: AspectRatioArg,

        /// Output resolution
        #[arg(long, value_enum, default_value = "720p")]
        resolution: ResolutionArg,

        /// Model tier trading speed against quality
        #[arg(long, value_enum, default_value = "fast")]
        tier: TierArg,

        /// Give up after this many seconds (default: wait until done)
        #[arg(long)]
        timeout: Option<u64>,

        /// Download the finished video to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Download a previously generated video by its locator
    Fetch {
        /// Video locator printed by a generate run
        uri: String,

        /// Destination file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Generate {
            prompt,
            image,
            aspect_ratio,
            resolution,
            tier,
            timeout,
            output,
        } => {
            generate::generate(
                config,
                prompt,
                image,
                aspect_ratio,
                resolution,
                tier,
                timeout,
                output,
            )
            .await
        }
        Commands::Fetch { uri, output } => fetch::fetch(config, uri, output).await,
    }
}
