//! Wire-level payloads exchanged with the generation service
//!
//! Field names follow the service's camelCase convention. Absent optional
//! fields are omitted rather than serialized as null.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::domain::request::{AspectRatio, GenerationRequest, ReferenceImage, Resolution};
use crate::domain::video::VideoArtifact;

/// Body of a job submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImagePayload>,
    pub config: GenerationConfig,
}

impl SubmitRequest {
    /// Builds the submission body for a validated request
    ///
    /// A blank prompt is omitted from the payload entirely; the image, when
    /// present, rides along base64-encoded.
    pub fn from_request(request: &GenerationRequest) -> Self {
        Self {
            prompt: request
                .prompt
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            image: request.reference_image.as_ref().map(ImagePayload::from),
            config: GenerationConfig {
                number_of_videos: 1,
                resolution: request.format.resolution,
                aspect_ratio: request.format.aspect_ratio,
            },
        }
    }
}

/// Generation options forwarded to the service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub number_of_videos: u32,
    pub resolution: Resolution,
    pub aspect_ratio: AspectRatio,
}

/// Reference image as transmitted on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    /// Base64-encoded image bytes
    pub image_bytes: String,
    pub mime_type: String,
}

impl From<&ReferenceImage> for ImagePayload {
    fn from(image: &ReferenceImage) -> Self {
        Self {
            image_bytes: BASE64.encode(&image.bytes),
            mime_type: image.mime_type.clone(),
        }
    }
}

/// One long-running operation as represented by the service
///
/// Returned by submission and refreshed by every poll. Fields the client
/// does not interpret are preserved in `extra` so the operation can be
/// echoed back verbatim; the service may stash private bookkeeping there
/// between polls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<OperationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<GenerationResponse>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Job-level failure reported by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    pub message: String,
}

/// Payload of a completed operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub results: Vec<VideoArtifact>,
}
