//! Error classification
//!
//! The service reports an expired or invalid credential with a plain
//! "Requested entity was not found" message rather than a distinct error
//! code, so detection is by substring match. The patterns live here as
//! configuration data: if the service changes its wording, only the pattern
//! list needs updating. An unmatched error keeps its original class, so a
//! wording change degrades to a generic transport/job failure instead of
//! misclassifying.

use crate::error::ClientError;

/// Substring the service currently uses for invalid-credential failures
pub const CREDENTIAL_NOT_FOUND_PATTERN: &str = "Requested entity was not found";

/// Maps raw service errors onto the client taxonomy
#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    patterns: Vec<String>,
}

impl ErrorClassifier {
    /// Classifier with an explicit pattern list
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Adds a credential-invalid pattern
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Whether a message indicates an invalid credential
    pub fn matches(&self, message: &str) -> bool {
        self.patterns.iter().any(|p| message.contains(p))
    }

    /// Re-signals transport- and job-level failures whose message matches a
    /// known credential pattern as [`ClientError::CredentialInvalid`];
    /// everything else passes through unchanged.
    pub fn apply(&self, error: ClientError) -> ClientError {
        let matched = error
            .service_message()
            .filter(|message| self.matches(message))
            .map(str::to_string);
        match matched {
            Some(message) => ClientError::CredentialInvalid(message),
            None => error,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new(vec![CREDENTIAL_NOT_FOUND_PATTERN.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern_matches_embedded_message() {
        let classifier = ErrorClassifier::default();
        assert!(classifier.matches("status 404: Requested entity was not found."));
        assert!(!classifier.matches("connection reset by peer"));
    }

    #[test]
    fn test_transport_error_is_reclassified() {
        let classifier = ErrorClassifier::default();
        let err = classifier.apply(ClientError::Transport(
            "Requested entity was not found".to_string(),
        ));
        assert!(matches!(err, ClientError::CredentialInvalid(_)));
    }

    #[test]
    fn test_job_error_is_reclassified() {
        let classifier = ErrorClassifier::default();
        let err = classifier.apply(ClientError::Job(
            "Requested entity was not found".to_string(),
        ));
        assert!(matches!(err, ClientError::CredentialInvalid(_)));
    }

    #[test]
    fn test_unmatched_errors_keep_their_class() {
        let classifier = ErrorClassifier::default();
        let err = classifier.apply(ClientError::Transport("connection reset".to_string()));
        assert!(matches!(err, ClientError::Transport(_)));

        let err = classifier.apply(ClientError::Job("quota exceeded".to_string()));
        assert!(matches!(err, ClientError::Job(_)));
    }

    #[test]
    fn test_non_service_errors_pass_through() {
        let classifier = ErrorClassifier::default();
        let err = classifier.apply(ClientError::Protocol(
            "Requested entity was not found".to_string(),
        ));
        assert!(matches!(err, ClientError::Protocol(_)));
    }

    #[test]
    fn test_extra_patterns() {
        let classifier = ErrorClassifier::default().with_pattern("API key expired");
        assert!(classifier.matches("API key expired, select a new one"));
    }
}
