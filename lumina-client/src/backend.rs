//! Generation service backend
//!
//! The [`VideoBackend`] trait is the seam between the job-driving logic and
//! the service's HTTP surface; tests substitute a scripted implementation.
//! [`HttpBackend`] is the production implementation over reqwest.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use lumina_core::domain::JobHandle;
use lumina_core::dto::{Operation, SubmitRequest};

use crate::credentials::Credential;
use crate::error::{ClientError, Result};

/// Network operations against the generation service
///
/// Both calls authenticate with the credential passed in; implementations
/// must not cache credentials across calls.
#[async_trait]
pub trait VideoBackend: Send + Sync {
    /// Submits a generation job and returns the service's operation
    async fn submit(
        &self,
        model_id: &str,
        payload: &SubmitRequest,
        credential: &Credential,
    ) -> Result<Operation>;

    /// Issues one status check, echoing the handle back verbatim
    async fn poll(&self, handle: &JobHandle, credential: &Credential) -> Result<Operation>;

    /// Dereferences a video locator and returns the raw bytes
    ///
    /// The url already carries any credential it needs.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// HTTP backend for the generation service
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    http: reqwest::Client,
}

const SUBMIT_TIMEOUT: Duration = Duration::from_secs(60);
const POLL_TIMEOUT: Duration = Duration::from_secs(30);

impl HttpBackend {
    /// Create a backend for the given service base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a backend with a custom HTTP client
    ///
    /// This allows configuring proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn submit_url(&self, model_id: &str) -> String {
        format!("{}/v1/models/{}:generateVideos", self.base_url, model_id)
    }

    fn poll_url(&self) -> String {
        format!("{}/v1/operations:poll", self.base_url)
    }

    /// Handle a service response and deserialize JSON
    ///
    /// Non-success statuses become [`ClientError::Transport`] carrying the
    /// response body, so the service's own error text stays available for
    /// classification.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Transport(format!(
                "service returned {status}: {error_text}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Protocol(format!("failed to parse service response: {e}")))
    }
}

#[async_trait]
impl VideoBackend for HttpBackend {
    async fn submit(
        &self,
        model_id: &str,
        payload: &SubmitRequest,
        credential: &Credential,
    ) -> Result<Operation> {
        let url = self.submit_url(model_id);
        debug!(%url, "submitting generation request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(credential.expose())
            .json(payload)
            .timeout(SUBMIT_TIMEOUT)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn poll(&self, handle: &JobHandle, credential: &Credential) -> Result<Operation> {
        let url = self.poll_url();
        debug!(%url, job = %handle.name(), "checking job status");

        let response = self
            .http
            .post(&url)
            .bearer_auth(credential.expose())
            .json(handle.as_wire())
            .timeout(POLL_TIMEOUT)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("downloading generated video");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Transport(format!(
                "video download returned {status}: {error_text}"
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("https://api.example.com/");
        assert_eq!(backend.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_submit_url_includes_model_id() {
        let backend = HttpBackend::new("https://api.example.com");
        assert_eq!(
            backend.submit_url("veo-3.1-fast-generate-preview"),
            "https://api.example.com/v1/models/veo-3.1-fast-generate-preview:generateVideos"
        );
    }

    #[test]
    fn test_poll_url() {
        let backend = HttpBackend::new("https://api.example.com");
        assert_eq!(
            backend.poll_url(),
            "https://api.example.com/v1/operations:poll"
        );
    }
}
