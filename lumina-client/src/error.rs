//! Error types for the Lumina client

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while driving a generation job
///
/// Every failure path surfaces exactly one of these; nothing is swallowed
/// or retried internally.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request violates the prompt-or-image invariant
    #[error("invalid request: {0}")]
    Validation(String),

    /// No credential was available at call time
    #[error("no credential available: {0}")]
    Configuration(String),

    /// A network call failed
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service reported a job-level failure
    #[error("generation failed: {0}")]
    Job(String),

    /// The job reported completion but the result is unusable
    #[error("protocol violation: {0}")]
    Protocol(String),

    /// The service rejected the credential; the caller should prompt for
    /// re-authentication rather than retry blindly
    #[error("credential rejected by the service: {0}")]
    CredentialInvalid(String),

    /// The opt-in maximum wait elapsed while the job was still pending
    #[error("gave up waiting for the job after {waited:?}")]
    TimedOut { waited: Duration },

    /// The run was cancelled before the job reached a terminal state
    #[error("generation cancelled")]
    Cancelled,
}

impl ClientError {
    /// Check if this error should trigger a credential re-selection flow
    pub fn is_credential_invalid(&self) -> bool {
        matches!(self, Self::CredentialInvalid(_))
    }

    /// Check if retrying the whole run with the same inputs could help
    ///
    /// Validation, job, and protocol failures are deterministic for a given
    /// request; transport failures and timeouts are not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::TimedOut { .. })
    }

    /// Message carried by transport- and job-level failures
    ///
    /// Used by the classifier; other variants carry no service-originated
    /// text worth matching.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::Transport(message) | Self::Job(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_invalid_predicate() {
        let err = ClientError::CredentialInvalid("Requested entity was not found".to_string());
        assert!(err.is_credential_invalid());
        assert!(!ClientError::Cancelled.is_credential_invalid());
    }

    #[test]
    fn test_retryable_classes() {
        assert!(ClientError::Transport("connection reset".to_string()).is_retryable());
        assert!(
            ClientError::TimedOut {
                waited: Duration::from_secs(300)
            }
            .is_retryable()
        );
        assert!(!ClientError::Job("quota exceeded".to_string()).is_retryable());
        assert!(!ClientError::Validation("no input".to_string()).is_retryable());
    }

    #[test]
    fn test_service_message_only_for_service_errors() {
        assert_eq!(
            ClientError::Transport("boom".to_string()).service_message(),
            Some("boom")
        );
        assert_eq!(
            ClientError::Job("quota exceeded".to_string()).service_message(),
            Some("quota exceeded")
        );
        assert_eq!(
            ClientError::Protocol("empty result".to_string()).service_message(),
            None
        );
    }
}
