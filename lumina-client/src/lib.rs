//! Lumina Client
//!
//! A client for a remote video-generation service that exposes a
//! long-running-operation protocol: one submission returns an opaque job
//! handle, and the result is obtained by polling the handle until the job
//! reports completion or failure.
//!
//! The credential is re-read through a [`CredentialProvider`] on every
//! submission, so a key re-selected after an invalidation error takes
//! effect on the next request without rebuilding the client.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use lumina_client::{EnvCredentialProvider, GenerationClient};
//! use lumina_core::domain::GenerationRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GenerationClient::new(
//!         "https://generativelanguage.googleapis.com",
//!         Arc::new(EnvCredentialProvider::default()),
//!     );
//!
//!     let request = GenerationRequest::text("a koi pond at dawn, gentle ripples");
//!     let video = client.run(&request).await?;
//!
//!     println!("video ready at {}", video.uri);
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod classify;
pub mod credentials;
pub mod error;
pub mod policy;

// Re-export commonly used types
pub use backend::{HttpBackend, VideoBackend};
pub use classify::ErrorClassifier;
pub use credentials::{
    Credential, CredentialProvider, EnvCredentialProvider, StaticCredentialProvider,
};
pub use error::{ClientError, Result};
pub use policy::PollPolicy;
pub use tokio_util::sync::CancellationToken;

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time;
use tracing::{debug, info, warn};

use lumina_core::domain::{
    GenerationRequest, JobHandle, JobOutcome, JobStatus, VideoArtifact, VideoResult,
};
use lumina_core::dto::SubmitRequest;

/// Client driving generation jobs from submission to terminal result
///
/// The client keeps no per-run state: every [`run`](Self::run) is an
/// independent submit-then-poll sequence, so a single client may be shared
/// and calls may be issued concurrently if the caller wants to manage its
/// own concurrency limits. Within one run, the job handle is owned by that
/// run alone and replaced with the service's refreshed handle after every
/// poll.
pub struct GenerationClient {
    backend: Arc<dyn VideoBackend>,
    credentials: Arc<dyn CredentialProvider>,
    classifier: ErrorClassifier,
    policy: PollPolicy,
}

impl GenerationClient {
    /// Create a client for the given service base URL
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self::with_backend(Arc::new(HttpBackend::new(base_url)), credentials)
    }

    /// Create a client over a custom backend
    ///
    /// Used by tests and by callers that need a pre-configured
    /// [`HttpBackend`] (proxies, TLS settings, etc.).
    pub fn with_backend(
        backend: Arc<dyn VideoBackend>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            backend,
            credentials,
            classifier: ErrorClassifier::default(),
            policy: PollPolicy::default(),
        }
    }

    /// Replaces the polling policy
    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the error classifier
    pub fn with_classifier(mut self, classifier: ErrorClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Time left within the opt-in maximum wait
    ///
    /// Returns `None` when no maximum is configured; fails with
    /// [`ClientError::TimedOut`] once the maximum has elapsed.
    fn remaining_budget(&self, started: Instant) -> Result<Option<Duration>> {
        match self.policy.max_wait {
            Some(max_wait) => {
                let waited = started.elapsed();
                if waited >= max_wait {
                    warn!(?waited, "giving up on pending job");
                    Err(ClientError::TimedOut { waited })
                } else {
                    Ok(Some(max_wait - waited))
                }
            }
            None => Ok(None),
        }
    }

    /// Reads the credential fresh; absence is a configuration error
    fn current_credential(&self) -> Result<Credential> {
        self.credentials.current().ok_or_else(|| {
            ClientError::Configuration("no credential has been selected".to_string())
        })
    }

    /// Submits a generation job and returns its handle without waiting
    ///
    /// Fails with [`ClientError::Validation`] before any network call when
    /// the request carries neither a usable prompt nor a reference image,
    /// and with [`ClientError::Configuration`] when no credential is
    /// available at call time.
    pub async fn submit(&self, request: &GenerationRequest) -> Result<JobHandle> {
        request
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let credential = self.current_credential()?;

        let model_id = request.format.tier.model_id();
        let payload = SubmitRequest::from_request(request);
        debug!(model_id, "submitting generation job");

        let op = self
            .backend
            .submit(model_id, &payload, &credential)
            .await
            .map_err(|e| self.classifier.apply(e))?;

        info!(job = %op.name, model_id, "generation job submitted");
        Ok(JobHandle::from(op))
    }

    /// Issues one status check against the service
    ///
    /// Returns the refreshed handle alongside the status; the refreshed
    /// handle must be used for the next poll, since the service may update
    /// internal handle state between checks. Transport failures are not
    /// retried here; the caller decides.
    pub async fn poll(&self, handle: &JobHandle) -> Result<(JobHandle, JobStatus)> {
        let credential = self.current_credential()?;
        let op = self.backend.poll(handle, &credential).await?;
        let status = JobStatus::from(&op);
        Ok((JobHandle::from(op), status))
    }

    /// Drives one request from submission to terminal result
    ///
    /// Submits exactly once, then sleeps and polls until the job leaves the
    /// pending state. See [`run_with_cancel`](Self::run_with_cancel) for a
    /// cancellable variant.
    pub async fn run(&self, request: &GenerationRequest) -> Result<VideoResult> {
        self.run_with_cancel(request, CancellationToken::new()).await
    }

    /// Cancellable variant of [`run`](Self::run)
    ///
    /// When the token fires, the poll delay and any in-flight status check
    /// are abandoned and the run fails with [`ClientError::Cancelled`]
    /// promptly.
    pub async fn run_with_cancel(
        &self,
        request: &GenerationRequest,
        cancel: CancellationToken,
    ) -> Result<VideoResult> {
        self.policy.validate()?;
        let started = Instant::now();

        let mut handle = self.submit(request).await?;

        loop {
            match handle.status() {
                JobStatus::Done(JobOutcome::Failed { message }) => {
                    warn!(job = %handle.name(), %message, "generation job failed");
                    return Err(self.classifier.apply(ClientError::Job(message)));
                }
                JobStatus::Done(JobOutcome::Completed { artifacts }) => {
                    info!(job = %handle.name(), "generation job completed");
                    return artifacts
                        .into_iter()
                        .next()
                        .and_then(VideoArtifact::into_result)
                        .ok_or_else(|| {
                            ClientError::Protocol(
                                "operation completed without a usable result".to_string(),
                            )
                        });
                }
                JobStatus::Pending => {}
            }

            let delay = match self.remaining_budget(started)? {
                Some(remaining) => self.policy.interval.min(remaining),
                None => self.policy.interval,
            };

            tokio::select! {
                _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                _ = time::sleep(delay) => {}
            }

            // The budget may have lapsed during the sleep; never issue a
            // poll past the deadline.
            self.remaining_budget(started)?;

            debug!(job = %handle.name(), "polling job status");
            let polled = tokio::select! {
                _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                result = self.poll(&handle) => result,
            };

            let (refreshed, _) = polled.map_err(|e| self.classifier.apply(e))?;
            handle = refreshed;
        }
    }

    /// Downloads a finished video
    ///
    /// The locator requires the credential as a query parameter; it is read
    /// fresh from the provider, like every other credentialed call.
    pub async fn fetch_video(&self, result: &VideoResult) -> Result<Vec<u8>> {
        let credential = self.current_credential()?;

        let separator = if result.uri.contains('?') { '&' } else { '?' };
        let url = format!("{}{}key={}", result.uri, separator, credential.expose());

        self.backend
            .fetch(&url)
            .await
            .map_err(|e| self.classifier.apply(e))
    }
}
