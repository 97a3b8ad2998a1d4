//! Generation request domain types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a request cannot be submitted as constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    /// Neither a usable prompt nor a reference image was supplied
    #[error("a prompt or a reference image is required")]
    MissingInput,
}

/// Output aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Portrait => "9:16",
        }
    }
}

/// Output resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1080p")]
    P1080,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::P720 => "720p",
            Resolution::P1080 => "1080p",
        }
    }
}

/// Model tier trading speed against output quality
///
/// Each tier maps to a concrete model on the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Fast,
    Quality,
}

impl ModelTier {
    /// Model identifier sent to the service for this tier
    pub fn model_id(&self) -> &'static str {
        match self {
            ModelTier::Fast => "veo-3.1-fast-generate-preview",
            ModelTier::Quality => "veo-3.1-generate-preview",
        }
    }
}

/// Format options for the generated video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFormat {
    pub aspect_ratio: AspectRatio,
    pub resolution: Resolution,
    pub tier: ModelTier,
}

impl Default for VideoFormat {
    fn default() -> Self {
        Self {
            aspect_ratio: AspectRatio::Widescreen,
            resolution: Resolution::P720,
            tier: ModelTier::Fast,
        }
    }
}

/// Reference image used to condition the generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ReferenceImage {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// A single video-generation request
///
/// A request must carry a non-empty prompt, a reference image, or both.
/// It is consumed by exactly one submission; nothing is retained after the
/// resulting job reaches a terminal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: Option<String>,
    pub reference_image: Option<ReferenceImage>,
    pub format: VideoFormat,
}

impl GenerationRequest {
    /// Creates a text-only request with the default format
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            reference_image: None,
            format: VideoFormat::default(),
        }
    }

    /// Creates an image-conditioned request with the default format
    pub fn from_image(image: ReferenceImage) -> Self {
        Self {
            prompt: None,
            reference_image: Some(image),
            format: VideoFormat::default(),
        }
    }

    /// Sets or replaces the prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Sets or replaces the reference image
    pub fn with_reference_image(mut self, image: ReferenceImage) -> Self {
        self.reference_image = Some(image);
        self
    }

    /// Sets the output format
    pub fn with_format(mut self, format: VideoFormat) -> Self {
        self.format = format;
        self
    }

    /// Whether the request carries a usable (non-blank) prompt
    pub fn has_prompt(&self) -> bool {
        self.prompt
            .as_deref()
            .map(|p| !p.trim().is_empty())
            .unwrap_or(false)
    }

    /// Checks the prompt-or-image invariant
    ///
    /// A blank prompt counts as absent, so `validate` fails for a request
    /// that carries only whitespace and no image.
    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if self.has_prompt() || self.reference_image.is_some() {
            Ok(())
        } else {
            Err(InvalidRequest::MissingInput)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request_is_valid() {
        let request = GenerationRequest::text("a koi pond at dawn");
        assert!(request.validate().is_ok());
        assert!(request.has_prompt());
    }

    #[test]
    fn test_image_only_request_is_valid() {
        let request =
            GenerationRequest::from_image(ReferenceImage::new(vec![0xFF, 0xD8], "image/jpeg"));
        assert!(request.validate().is_ok());
        assert!(!request.has_prompt());
    }

    #[test]
    fn test_empty_request_is_rejected() {
        let request = GenerationRequest {
            prompt: None,
            reference_image: None,
            format: VideoFormat::default(),
        };
        assert_eq!(request.validate(), Err(InvalidRequest::MissingInput));
    }

    #[test]
    fn test_blank_prompt_without_image_is_rejected() {
        let request = GenerationRequest::text("   ");
        assert_eq!(request.validate(), Err(InvalidRequest::MissingInput));

        let request = GenerationRequest::text("");
        assert_eq!(request.validate(), Err(InvalidRequest::MissingInput));
    }

    #[test]
    fn test_blank_prompt_with_image_is_valid() {
        let request = GenerationRequest::text("")
            .with_reference_image(ReferenceImage::new(vec![1, 2, 3], "image/png"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_format_enums_serialize_to_wire_names() {
        assert_eq!(
            serde_json::to_value(AspectRatio::Widescreen).unwrap(),
            serde_json::json!("16:9")
        );
        assert_eq!(
            serde_json::to_value(AspectRatio::Portrait).unwrap(),
            serde_json::json!("9:16")
        );
        assert_eq!(
            serde_json::to_value(Resolution::P1080).unwrap(),
            serde_json::json!("1080p")
        );
        assert_eq!(AspectRatio::Portrait.as_str(), "9:16");
        assert_eq!(Resolution::P720.as_str(), "720p");
    }

    #[test]
    fn test_tier_maps_to_model_id() {
        assert_eq!(ModelTier::Fast.model_id(), "veo-3.1-fast-generate-preview");
        assert_eq!(ModelTier::Quality.model_id(), "veo-3.1-generate-preview");
    }
}
