//! Webhook request signature verification.
//!
//! Verification runs these checks in order and stops at the first failure:
//!
//! 1. Both the timestamp and the signature header are present and non-empty.
//! 2. The timestamp parses as an integer number of seconds since the epoch.
//! 3. The timestamp lies inside the replay window (see [`FreshnessPolicy`]).
//! 4. `v0=hex(HMAC-SHA256(secret, "v0:<timestamp>:<canonical body>"))` equals
//!    the provided signature, compared in constant time.
//!
//! The public entry points return a plain `bool`. The reason for a rejection
//! is logged at `debug` level and never surfaces to the caller.

use tracing::debug;

use crate::canonical::{build_base_string, build_canonical_body};
use crate::clock::Clock;
use crate::config::{FreshnessPolicy, SIGNATURE_VERSION, VerifierConfig};
use crate::error::Rejection;
use crate::request::IncomingRequest;
use crate::signature::{compute_signature, signatures_match};

/// Verifies that inbound requests were signed by the holder of a shared secret.
///
/// The verifier owns an immutable [`VerifierConfig`] and holds no other state,
/// so a single instance can be shared across threads behind an `Arc`.
///
/// # Examples
///
/// ```
/// use hookguard_auth::{IncomingRequest, RequestSignatureVerifier, VerifierConfig};
/// use hookguard_core::SigningSecret;
///
/// let verifier = RequestSignatureVerifier::new(VerifierConfig::new(
///     SigningSecret::new("s3cr3t").unwrap(),
/// ));
///
/// let fields = vec![("a".to_owned(), "1".to_owned())];
/// let signature = verifier.sign("1700000000", &fields);
/// let request = IncomingRequest::new(Some("1700000000".to_owned()), Some(signature), fields);
///
/// assert!(verifier.verify(&request, 1_700_000_000));
/// assert!(!verifier.verify(&request, 1_700_000_301));
/// ```
#[derive(Debug, Clone)]
pub struct RequestSignatureVerifier {
    config: VerifierConfig,
}

impl RequestSignatureVerifier {
    /// Create a verifier bound to the given configuration.
    #[must_use]
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    /// The configuration this verifier was built with.
    #[must_use]
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Whether `request` is authentic at time `now` (seconds since the epoch).
    #[must_use]
    pub fn verify(&self, request: &IncomingRequest, now: i64) -> bool {
        verify(&self.config, request, now)
    }

    /// Whether `request` is authentic, reading the current time from `clock`.
    #[must_use]
    pub fn verify_with_clock(&self, request: &IncomingRequest, clock: &dyn Clock) -> bool {
        self.verify(request, clock.now_unix_secs())
    }

    /// Compute the signature a sender would attach for these inputs.
    #[must_use]
    pub fn sign(&self, timestamp: &str, form_fields: &[(String, String)]) -> String {
        sign_with(&self.config, timestamp, form_fields)
    }
}

/// Whether `request` is authentic under `config` at time `now`.
///
/// Same result as [`RequestSignatureVerifier::verify`] without building a
/// verifier.
#[must_use]
pub fn verify(config: &VerifierConfig, request: &IncomingRequest, now: i64) -> bool {
    match evaluate(config, request, now) {
        Ok(()) => {
            debug!("Webhook signature verification succeeded");
            true
        }
        Err(reason) => {
            debug!(%reason, "Webhook request rejected");
            false
        }
    }
}

fn sign_with(config: &VerifierConfig, timestamp: &str, form_fields: &[(String, String)]) -> String {
    let body = build_canonical_body(form_fields, config.encoding());
    let base_string = build_base_string(SIGNATURE_VERSION, timestamp, &body);
    compute_signature(config.signing_secret().expose(), SIGNATURE_VERSION, &base_string)
}

fn evaluate(config: &VerifierConfig, request: &IncomingRequest, now: i64) -> Result<(), Rejection> {
    let timestamp = non_empty(request.timestamp.as_deref()).ok_or(Rejection::MissingTimestamp)?;
    let provided = non_empty(request.signature.as_deref()).ok_or(Rejection::MissingSignature)?;

    let issued_at: i64 = timestamp.parse().map_err(|_| Rejection::InvalidTimestamp)?;

    check_freshness(issued_at, now, config.max_age().as_secs(), config.freshness())?;

    let expected = sign_with(config, timestamp, &request.form_fields);

    if signatures_match(provided, &expected) {
        Ok(())
    } else {
        Err(Rejection::SignatureMismatch)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Check the request age against the replay window.
///
/// Ages are computed in `i128` so no combination of `i64` inputs overflows.
fn check_freshness(
    issued_at: i64,
    now: i64,
    max_age_secs: u64,
    policy: FreshnessPolicy,
) -> Result<(), Rejection> {
    let age = i128::from(now) - i128::from(issued_at);
    let max_age = i128::from(max_age_secs);

    if age > max_age {
        return Err(Rejection::StaleTimestamp { age_secs: age });
    }
    if policy == FreshnessPolicy::Symmetric && -age > max_age {
        return Err(Rejection::FutureTimestamp { skew_secs: -age });
    }
    Ok(())
}
