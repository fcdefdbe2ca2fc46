//! Webhook request signature verification for HookGuard.
//!
//! This crate answers one question: was this inbound request signed by a
//! sender that knows our shared secret, recently enough to rule out a replay?
//!
//! # Overview
//!
//! The sender computes
//!
//! ```text
//! v0=hex(HMAC-SHA256(secret, "v0:" + timestamp + ":" + canonical_body))
//! ```
//!
//! and sends it in a signature header next to a timestamp header. The
//! verifier rebuilds the same base string from the request, recomputes the
//! MAC, and compares the two in constant time. Requests older than the
//! configured max age are rejected regardless of the signature.
//!
//! Verification is fail-closed: every failure collapses to `false`.
//!
//! # Usage
//!
//! ```rust
//! use hookguard_auth::{IncomingRequest, RequestSignatureVerifier, VerifierConfig};
//! use hookguard_core::SigningSecret;
//!
//! let verifier = RequestSignatureVerifier::new(VerifierConfig::new(
//!     SigningSecret::new("s3cr3t").unwrap(),
//! ));
//!
//! let request = IncomingRequest::new(Some("1700000000".to_owned()), None, Vec::new());
//! assert!(!verifier.verify(&request, 1_700_000_000));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical body and base string construction
//! - [`clock`] - Injectable time sources
//! - [`config`] - Immutable verifier configuration
//! - [`error`] - Rejection reasons used for diagnostics
//! - [`request`] - Verifier inputs and extraction from HTTP requests
//! - [`signature`] - HMAC-SHA256 signing and constant-time comparison
//! - [`verifier`] - The verification predicate

pub mod canonical;
pub mod clock;
pub mod config;
pub mod error;
pub mod request;
pub mod signature;
pub mod verifier;

pub use canonical::ValueEncoding;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{FreshnessPolicy, SignatureHeaders, VerifierConfig};
pub use error::Rejection;
pub use request::IncomingRequest;
pub use verifier::{RequestSignatureVerifier, verify};
