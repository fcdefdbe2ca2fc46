//! Integration tests for HookGuard.
//!
//! These tests drive the verifier with complete `http::Request` values, the
//! way a host framework would hand them over.
//!
//! Run them with:
//! ```text
//! cargo test -p hookguard-integration
//! ```

use std::sync::Once;

use hookguard_auth::{IncomingRequest, RequestSignatureVerifier, VerifierConfig};
use hookguard_core::SigningSecret;

static INIT: Once = Once::new();

/// Secret shared by the fake sender and the verifier.
pub const TEST_SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a verifier with the test secret and default settings.
#[must_use]
pub fn test_verifier() -> RequestSignatureVerifier {
    init_tracing();
    RequestSignatureVerifier::new(VerifierConfig::new(
        SigningSecret::new(TEST_SECRET).expect("test secret is not empty"),
    ))
}

/// Build the request a sender would post: headers plus a form body.
///
/// The signature is computed over the decoded fields of `body`.
#[must_use]
pub fn signed_http_request(
    verifier: &RequestSignatureVerifier,
    timestamp: &str,
    body: &str,
) -> http::Request<Vec<u8>> {
    let fields = hookguard_auth::request::parse_form_body(body.as_bytes());
    let signature = verifier.sign(timestamp, &fields);

    http::Request::builder()
        .method("POST")
        .uri("/slack/events")
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header("X-Slack-Request-Timestamp", timestamp)
        .header("X-Slack-Signature", signature)
        .body(body.as_bytes().to_vec())
        .expect("valid test request")
}

/// Run a full `http::Request` through extraction and verification.
#[must_use]
pub fn verify_http(
    verifier: &RequestSignatureVerifier,
    request: http::Request<Vec<u8>>,
    now: i64,
) -> bool {
    let (parts, body) = request.into_parts();
    let incoming = IncomingRequest::from_parts(&parts, &body, verifier.config().headers());
    verifier.verify(&incoming, now)
}

mod test_concurrency;
mod test_http;
