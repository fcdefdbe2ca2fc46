//! Rejection reasons for webhook signature verification.
//!
//! A [`Rejection`] describes why a request was not accepted. Reasons are used
//! for diagnostics only: the public verification entry points always collapse
//! them to `false`.

/// Why a request failed verification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The timestamp header is missing or empty.
    #[error("Missing request timestamp header")]
    MissingTimestamp,

    /// The signature header is missing or empty.
    #[error("Missing request signature header")]
    MissingSignature,

    /// The timestamp header is not an integer number of seconds.
    #[error("Invalid request timestamp")]
    InvalidTimestamp,

    /// The request is older than the configured replay window.
    #[error("Request timestamp is stale ({age_secs}s old)")]
    StaleTimestamp {
        /// How many seconds old the request is.
        age_secs: i128,
    },

    /// The request timestamp lies too far in the future.
    #[error("Request timestamp is {skew_secs}s in the future")]
    FutureTimestamp {
        /// How many seconds ahead of the local clock the request is.
        skew_secs: i128,
    },

    /// The computed signature does not match the provided signature.
    #[error("Signature does not match")]
    SignatureMismatch,
}
