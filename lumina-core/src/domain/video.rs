//! Generated video types

use serde::{Deserialize, Serialize};

/// A video entry as reported by the service
///
/// The locator may be absent on malformed completions; callers that need a
/// guaranteed locator convert through [`VideoArtifact::into_result`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoArtifact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<chrono::DateTime<chrono::Utc>>,
}

impl VideoArtifact {
    /// Converts into a usable result, or `None` when the locator is missing
    /// or empty
    pub fn into_result(self) -> Option<VideoResult> {
        match self.uri {
            Some(uri) if !uri.is_empty() => Some(VideoResult {
                uri,
                expiry: self.expiry,
            }),
            _ => None,
        }
    }
}

/// A completed generation
///
/// The uri is an opaque, service-specific locator; dereferencing it may
/// require a credential-bearing query parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoResult {
    pub uri: String,
    pub expiry: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_with_uri_converts() {
        let artifact = VideoArtifact {
            uri: Some("https://x/video123".to_string()),
            expiry: None,
        };
        let result = artifact.into_result().unwrap();
        assert_eq!(result.uri, "https://x/video123");
    }

    #[test]
    fn test_artifact_without_uri_does_not_convert() {
        let artifact = VideoArtifact {
            uri: None,
            expiry: None,
        };
        assert!(artifact.into_result().is_none());

        let artifact = VideoArtifact {
            uri: Some(String::new()),
            expiry: None,
        };
        assert!(artifact.into_result().is_none());
    }

    #[test]
    fn test_artifact_deserializes_without_expiry() {
        let artifact: VideoArtifact = serde_json::from_str(r#"{"uri":"https://x/v"}"#).unwrap();
        assert_eq!(artifact.uri.as_deref(), Some("https://x/v"));
        assert!(artifact.expiry.is_none());
    }
}
