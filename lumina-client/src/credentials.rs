//! Credential handling
//!
//! The credential is the only resource shared across runs, and it can be
//! replaced out-of-band (the user re-selects a key after an invalidation
//! error). The client therefore reads it through a [`CredentialProvider`]
//! at the start of every submission instead of caching it, so a change
//! takes effect on the next request without re-instantiating anything.

use std::fmt;

/// Default environment variable consulted by [`EnvCredentialProvider`]
pub const DEFAULT_CREDENTIAL_VAR: &str = "LUMINA_API_KEY";

/// Secret authorizing calls to the generation service
///
/// Debug output is redacted so the secret cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw secret, for placing into an authorization header or query
    /// parameter
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Source of the current credential
///
/// `current` is consulted fresh on every submission; implementations must
/// not require the caller to hold any state between calls. Returning `None`
/// is a configuration error, not a retryable condition.
pub trait CredentialProvider: Send + Sync {
    fn current(&self) -> Option<Credential>;
}

/// Reads the credential from an environment variable at call time
pub struct EnvCredentialProvider {
    var: String,
}

impl EnvCredentialProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIAL_VAR)
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn current(&self) -> Option<Credential> {
        std::env::var(&self.var)
            .ok()
            .filter(|value| !value.is_empty())
            .map(Credential::new)
    }
}

/// Fixed credential, or a deliberately absent one
///
/// Useful for tests and for callers that manage the secret themselves.
pub struct StaticCredentialProvider {
    credential: Option<Credential>,
}

impl StaticCredentialProvider {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential: Some(credential),
        }
    }

    /// A provider that never yields a credential
    pub fn absent() -> Self {
        Self { credential: None }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn current(&self) -> Option<Credential> {
        self.credential.clone()
    }
}
