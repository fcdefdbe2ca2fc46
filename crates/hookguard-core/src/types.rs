//! Value types shared across HookGuard crates.

use std::fmt;

use crate::{HookGuardError, HookGuardResult};

/// Shared secret used to key the request signature.
///
/// The secret is never empty. Its `Debug` and `Display` output are redacted so
/// the value cannot leak through logs or error messages.
///
/// # Examples
///
/// ```
/// use hookguard_core::SigningSecret;
///
/// let secret = SigningSecret::new("s3cr3t").unwrap();
/// assert_eq!(secret.expose(), b"s3cr3t");
/// assert_eq!(format!("{secret:?}"), "SigningSecret(<redacted>)");
/// assert!(SigningSecret::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    /// Create a new signing secret.
    ///
    /// # Errors
    /// Returns [`HookGuardError::EmptySecret`] if `secret` is empty.
    pub fn new(secret: impl Into<Vec<u8>>) -> HookGuardResult<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(HookGuardError::EmptySecret);
        }
        Ok(Self(secret))
    }

    /// Borrow the raw secret bytes.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

impl fmt::Display for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}
