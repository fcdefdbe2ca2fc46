//! HMAC-SHA256 request signatures.
//!
//! A signature has the form `<version>=<hex(HMAC-SHA256(secret, base_string))>`
//! with lowercase hex digits, for example `v0=5bdc...3843`.

use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Compute the signature a sender attaches for the given base string.
///
/// # Examples
///
/// ```
/// use hookguard_auth::signature::compute_signature;
///
/// let sig = compute_signature(b"Jefe", "v0", "what do ya want for nothing?");
/// assert_eq!(
///     sig,
///     "v0=5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
/// );
/// ```
#[must_use]
pub fn compute_signature(secret: &[u8], version: &str, base_string: &str) -> String {
    let mac = hmac_sha256(secret, base_string.as_bytes());
    format!("{version}={}", hex::encode(mac))
}

/// Compare a provided signature with the expected one in constant time.
///
/// The comparison is case-sensitive. Inputs of different lengths never match.
#[must_use]
pub fn signatures_match(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Compute HMAC-SHA256 and return the raw bytes.
fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
