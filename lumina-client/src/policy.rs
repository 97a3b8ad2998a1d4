//! Polling policy
//!
//! Video generation runs for minutes, so the delay between status checks is
//! deliberately long; the service's guidance for long-running video jobs is
//! ten seconds. There is no maximum wait unless the caller opts into one,
//! which matches the service's own behaviour of never abandoning a job.

use std::time::Duration;

use crate::error::{ClientError, Result};

/// Default delay between status checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Controls the poll loop of a single run
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    /// Delay between consecutive status checks
    pub interval: Duration,

    /// Total time to wait for completion before giving up with
    /// [`ClientError::TimedOut`]; `None` waits indefinitely
    pub max_wait: Option<Duration>,
}

impl PollPolicy {
    /// Sets the delay between polls
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Bounds the total wait for completion
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    /// Validates the policy
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(ClientError::Validation(
                "poll interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_wait: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = PollPolicy::default();
        assert_eq!(policy.interval, Duration::from_secs(10));
        assert!(policy.max_wait.is_none());
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let policy = PollPolicy::default().with_interval(Duration::ZERO);
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let policy = PollPolicy::default()
            .with_interval(Duration::from_millis(5))
            .with_max_wait(Duration::from_secs(600));
        assert_eq!(policy.interval, Duration::from_millis(5));
        assert_eq!(policy.max_wait, Some(Duration::from_secs(600)));
    }
}
