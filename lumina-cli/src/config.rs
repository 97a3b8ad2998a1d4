//! Configuration module
//!
//! Handles CLI configuration; the credential itself is read by the client
//! from the `LUMINA_API_KEY` environment variable at submit time.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the generation service
    pub base_url: String,
}
