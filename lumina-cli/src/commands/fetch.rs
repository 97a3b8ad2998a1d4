//! Fetch command handler

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

use lumina_client::{EnvCredentialProvider, GenerationClient};
use lumina_core::domain::VideoResult;

use crate::config::Config;

/// Download an already-generated video to a local file
pub async fn fetch(config: &Config, uri: String, output: PathBuf) -> Result<()> {
    let client = GenerationClient::new(
        config.base_url.clone(),
        Arc::new(EnvCredentialProvider::default()),
    );

    let video = VideoResult { uri, expiry: None };

    println!("Downloading {}...", video.uri);
    let bytes = client.fetch_video(&video).await?;

    std::fs::write(&output, &bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "{}",
        format!("Saved {} ({} bytes)", output.display(), bytes.len()).green()
    );

    Ok(())
}
