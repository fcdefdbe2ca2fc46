//! Verifier configuration.
//!
//! [`VerifierConfig`] is an immutable value object: it is assembled once with
//! the `with_*` builder methods and then shared read-only by every
//! verification call.

use std::time::Duration;

use hookguard_core::{
    DEFAULT_MAX_AGE_SECS, HookGuardConfig, HookGuardError, HookGuardResult, SigningSecret,
};
use http::HeaderName;

use crate::canonical::ValueEncoding;

/// Signature scheme version prefixed to the base string and the signature.
pub const SIGNATURE_VERSION: &str = "v0";

/// How the request timestamp is checked against the local clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FreshnessPolicy {
    /// Reject only requests older than the max age. Timestamps in the future
    /// are accepted, which tolerates a sender clock running ahead.
    #[default]
    StaleOnly,
    /// Reject requests whose timestamp is more than the max age away from the
    /// local clock in either direction.
    Symmetric,
}

/// Names of the headers carrying the timestamp and the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeaders {
    /// Header carrying the request timestamp.
    pub timestamp: HeaderName,
    /// Header carrying the request signature.
    pub signature: HeaderName,
}

impl SignatureHeaders {
    /// Derive `X-<Sender>-Request-Timestamp` and `X-<Sender>-Signature`.
    ///
    /// # Errors
    ///
    /// Returns [`HookGuardError::Config`] if the sender name does not produce a
    /// valid header name.
    pub fn for_sender(sender: &str) -> HookGuardResult<Self> {
        let timestamp = header_name(&format!("X-{sender}-Request-Timestamp"))?;
        let signature = header_name(&format!("X-{sender}-Signature"))?;
        Ok(Self {
            timestamp,
            signature,
        })
    }
}

impl Default for SignatureHeaders {
    fn default() -> Self {
        Self {
            timestamp: HeaderName::from_static("x-slack-request-timestamp"),
            signature: HeaderName::from_static("x-slack-signature"),
        }
    }
}

fn header_name(name: &str) -> HookGuardResult<HeaderName> {
    HeaderName::try_from(name)
        .map_err(|_| HookGuardError::Config(format!("invalid header name: {name}")))
}

/// Immutable configuration for a [`RequestSignatureVerifier`](crate::RequestSignatureVerifier).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use hookguard_auth::{FreshnessPolicy, VerifierConfig};
/// use hookguard_core::SigningSecret;
///
/// let config = VerifierConfig::new(SigningSecret::new("s3cr3t").unwrap())
///     .with_max_age(Duration::from_secs(60))
///     .with_freshness(FreshnessPolicy::Symmetric);
/// assert_eq!(config.max_age(), Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    signing_secret: SigningSecret,
    max_age: Duration,
    freshness: FreshnessPolicy,
    encoding: ValueEncoding,
    headers: SignatureHeaders,
}

impl VerifierConfig {
    /// Create a configuration with the default 300 second replay window.
    #[must_use]
    pub fn new(signing_secret: SigningSecret) -> Self {
        Self {
            signing_secret,
            max_age: Duration::from_secs(DEFAULT_MAX_AGE_SECS),
            freshness: FreshnessPolicy::default(),
            encoding: ValueEncoding::default(),
            headers: SignatureHeaders::default(),
        }
    }

    /// Build a verifier configuration from the environment-driven core config.
    ///
    /// # Errors
    ///
    /// Returns [`HookGuardError::Config`] if no signing secret is configured or
    /// the sender name yields invalid header names.
    pub fn from_core(config: &HookGuardConfig) -> HookGuardResult<Self> {
        let secret = config.signing_secret.clone().ok_or_else(|| {
            HookGuardError::Config("HOOKGUARD_SIGNING_SECRET is not set".to_owned())
        })?;

        let freshness = if config.reject_future {
            FreshnessPolicy::Symmetric
        } else {
            FreshnessPolicy::StaleOnly
        };

        Ok(Self::new(secret)
            .with_max_age(Duration::from_secs(config.max_age_secs))
            .with_freshness(freshness)
            .with_headers(SignatureHeaders::for_sender(&config.sender)?))
    }

    /// Set the replay window.
    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Set the freshness policy.
    #[must_use]
    pub fn with_freshness(mut self, freshness: FreshnessPolicy) -> Self {
        self.freshness = freshness;
        self
    }

    /// Set the value encoding used for the canonical body.
    #[must_use]
    pub fn with_encoding(mut self, encoding: ValueEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the header names.
    #[must_use]
    pub fn with_headers(mut self, headers: SignatureHeaders) -> Self {
        self.headers = headers;
        self
    }

    /// The signing secret.
    #[must_use]
    pub fn signing_secret(&self) -> &SigningSecret {
        &self.signing_secret
    }

    /// The replay window.
    #[must_use]
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// The freshness policy.
    #[must_use]
    pub fn freshness(&self) -> FreshnessPolicy {
        self.freshness
    }

    /// The value encoding.
    #[must_use]
    pub fn encoding(&self) -> ValueEncoding {
        self.encoding
    }

    /// The header names.
    #[must_use]
    pub fn headers(&self) -> &SignatureHeaders {
        &self.headers
    }
}
