//! CLI-side argument types
//!
//! Thin clap wrappers over the core format enums, so the core crate stays
//! free of CLI concerns.

use clap::ValueEnum;
use lumina_core::domain::{AspectRatio, ModelTier, Resolution};
use std::path::Path;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AspectRatioArg {
    #[value(name = "16:9")]
    Widescreen,
    #[value(name = "9:16")]
    Portrait,
}

impl From<AspectRatioArg> for AspectRatio {
    fn from(arg: AspectRatioArg) -> Self {
        match arg {
            AspectRatioArg::Widescreen => AspectRatio::Widescreen,
            AspectRatioArg::Portrait => AspectRatio::Portrait,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ResolutionArg {
    #[value(name = "720p")]
    P720,
    #[value(name = "1080p")]
    P1080,
}

impl From<ResolutionArg> for Resolution {
    fn from(arg: ResolutionArg) -> Self {
        match arg {
            ResolutionArg::P720 => Resolution::P720,
            ResolutionArg::P1080 => Resolution::P1080,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TierArg {
    Fast,
    Quality,
}

impl From<TierArg> for ModelTier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Fast => ModelTier::Fast,
            TierArg::Quality => ModelTier::Quality,
        }
    }
}

/// Guess the mime type of a reference image from its file extension
pub fn image_mime_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_arg_enums_map_to_core() {
        assert_eq!(AspectRatio::from(AspectRatioArg::Portrait).as_str(), "9:16");
        assert_eq!(Resolution::from(ResolutionArg::P1080).as_str(), "1080p");
        assert_eq!(
            ModelTier::from(TierArg::Quality).model_id(),
            "veo-3.1-generate-preview"
        );
    }

    #[test]
    fn test_image_mime_type_from_extension() {
        assert_eq!(image_mime_type(&PathBuf::from("ref.PNG")), "image/png");
        assert_eq!(image_mime_type(&PathBuf::from("ref.jpeg")), "image/jpeg");
        assert_eq!(
            image_mime_type(&PathBuf::from("ref")),
            "application/octet-stream"
        );
    }
}
