//! Job handle and status types

use crate::domain::video::VideoArtifact;
use crate::dto::Operation;

/// Opaque handle for one in-flight generation job
///
/// Owned exclusively by the client driving the job. The service may return
/// a refreshed representation alongside each status check, so callers must
/// always poll with the handle most recently returned to them. Handles are
/// never persisted and never shared across concurrent polls.
#[derive(Debug, Clone, PartialEq)]
pub struct JobHandle {
    op: Operation,
}

impl JobHandle {
    /// Service-assigned name of the underlying operation
    pub fn name(&self) -> &str {
        &self.op.name
    }

    /// Current status as reported by the wrapped operation
    pub fn status(&self) -> JobStatus {
        JobStatus::from(&self.op)
    }

    /// Wire representation, echoed back to the service on each poll
    pub fn as_wire(&self) -> &Operation {
        &self.op
    }
}

impl From<Operation> for JobHandle {
    fn from(op: Operation) -> Self {
        Self { op }
    }
}

/// Status of a generation job; transitions only via polling
#[derive(Debug, Clone, PartialEq)]
pub enum JobStatus {
    Pending,
    Done(JobOutcome),
}

impl JobStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, JobStatus::Pending)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, JobStatus::Done(_))
    }
}

/// Terminal outcome of a generation job
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    /// The service reported a job-level failure
    Failed { message: String },
    /// The job completed; artifacts may still be empty on malformed
    /// completions
    Completed { artifacts: Vec<VideoArtifact> },
}

impl From<&Operation> for JobStatus {
    fn from(op: &Operation) -> Self {
        if !op.done {
            return JobStatus::Pending;
        }
        match &op.error {
            Some(error) => JobStatus::Done(JobOutcome::Failed {
                message: error.message.clone(),
            }),
            None => JobStatus::Done(JobOutcome::Completed {
                artifacts: op
                    .response
                    .as_ref()
                    .map(|r| r.results.clone())
                    .unwrap_or_default(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{GenerationResponse, OperationError};

    fn operation(name: &str) -> Operation {
        Operation {
            name: name.to_string(),
            done: false,
            error: None,
            response: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_pending_operation() {
        let handle = JobHandle::from(operation("operations/abc"));
        assert_eq!(handle.name(), "operations/abc");
        assert!(handle.status().is_pending());
    }

    #[test]
    fn test_failed_operation() {
        let mut op = operation("operations/abc");
        op.done = true;
        op.error = Some(OperationError {
            code: Some(8),
            message: "quota exceeded".to_string(),
        });

        let status = JobHandle::from(op).status();
        assert_eq!(
            status,
            JobStatus::Done(JobOutcome::Failed {
                message: "quota exceeded".to_string()
            })
        );
    }

    #[test]
    fn test_completed_operation_carries_artifacts() {
        let mut op = operation("operations/abc");
        op.done = true;
        op.response = Some(GenerationResponse {
            results: vec![VideoArtifact {
                uri: Some("https://x/v".to_string()),
                expiry: None,
            }],
        });

        match JobHandle::from(op).status() {
            JobStatus::Done(JobOutcome::Completed { artifacts }) => {
                assert_eq!(artifacts.len(), 1);
            }
            other => panic!("unexpected status: {other:?}"),
        }
    }

    #[test]
    fn test_done_without_response_is_completed_with_no_artifacts() {
        let mut op = operation("operations/abc");
        op.done = true;

        assert_eq!(
            JobHandle::from(op).status(),
            JobStatus::Done(JobOutcome::Completed { artifacts: vec![] })
        );
    }
}
