//! Generate command handler
//!
//! Drives one generation job end to end: build the request, run the job
//! with Ctrl-C cancellation, print the locator, and optionally download
//! the video.

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use lumina_client::{
    CancellationToken, ClientError, EnvCredentialProvider, GenerationClient, PollPolicy,
};
use lumina_core::domain::{GenerationRequest, ReferenceImage, VideoFormat};

use crate::config::Config;
use crate::types::{AspectRatioArg, ResolutionArg, TierArg, image_mime_type};

#[allow(clippy::too_many_arguments)]
pub async fn generate(
    config: &Config,
    prompt: Option<String>,
    image: Option<PathBuf>,
    aspect_ratio: AspectRatioArg,
    resolution: ResolutionArg,
    tier: TierArg,
    timeout: Option<u64>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut request = GenerationRequest {
        prompt,
        reference_image: None,
        format: VideoFormat {
            aspect_ratio: aspect_ratio.into(),
            resolution: resolution.into(),
            tier: tier.into(),
        },
    };

    if let Some(path) = image {
        let bytes = std::fs::read(&path)
            .with_context(|| format!("failed to read reference image {}", path.display()))?;
        request.reference_image = Some(ReferenceImage::new(bytes, image_mime_type(&path)));
    }

    if request.validate().is_err() {
        anyhow::bail!("provide a prompt (--prompt), a reference image (--image), or both");
    }

    let mut policy = PollPolicy::default();
    if let Some(secs) = timeout {
        policy = policy.with_max_wait(Duration::from_secs(secs));
    }

    let client = GenerationClient::new(
        config.base_url.clone(),
        Arc::new(EnvCredentialProvider::default()),
    )
    .with_policy(policy);

    // Ctrl-C stops the poll loop instead of killing the process mid-print
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });

    println!("{}", "Submitting generation job...".bold());
    println!("Generation typically takes 1-2 minutes; press Ctrl-C to cancel.");

    match client.run_with_cancel(&request, cancel).await {
        Ok(video) => {
            println!();
            println!("{}", "Video ready:".green().bold());
            println!("  {}", video.uri);
            if let Some(expiry) = video.expiry {
                println!("  {}", format!("locator expires {expiry}").dimmed());
            }

            if let Some(path) = output {
                println!("Downloading to {}...", path.display());
                let bytes = client.fetch_video(&video).await?;
                std::fs::write(&path, &bytes)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!(
                    "{}",
                    format!("Saved {} ({} bytes)", path.display(), bytes.len()).green()
                );
            }
            Ok(())
        }
        Err(err) if err.is_credential_invalid() => {
            eprintln!(
                "{}",
                "The selected API key was rejected by the service.".red()
            );
            eprintln!(
                "{}",
                "Select a new key (set LUMINA_API_KEY) and try again.".yellow()
            );
            Err(err.into())
        }
        Err(ClientError::Cancelled) => {
            eprintln!("{}", "Generation cancelled.".yellow());
            Err(ClientError::Cancelled.into())
        }
        Err(err) => Err(err.into()),
    }
}
