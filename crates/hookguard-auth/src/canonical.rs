//! Canonical base string construction for webhook signatures.
//!
//! Both the sender and the verifier derive the same byte string before
//! hashing:
//!
//! ```text
//! <version>:<timestamp>:<key1>=<enc(value1)>&<key2>=<enc(value2)>...
//! ```
//!
//! Form fields keep their transmission order, duplicates included. Keys are
//! emitted verbatim and only values are percent-encoded.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unescaped in RFC 3986 value encoding.
///
/// Everything except the unreserved characters (A-Z, a-z, 0-9, `-`, `_`, `.`,
/// `~`) is encoded, so a space becomes `%20`.
const VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// How form values are percent-encoded when building the canonical body.
///
/// The encoding must match whatever the sending platform used when it signed
/// the request. Hex digits are uppercase in both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueEncoding {
    /// RFC 3986 unreserved set; space is encoded as `%20`.
    #[default]
    Rfc3986,
    /// WHATWG `application/x-www-form-urlencoded` byte serializer; space is
    /// encoded as `+` and only `*`, `-`, `.`, `_` are left as-is. Encoders
    /// that also keep `!`, `(`, `)` unescaped produce a different body.
    FormUrlencoded,
}

impl ValueEncoding {
    /// Percent-encode a single form value.
    ///
    /// # Examples
    ///
    /// ```
    /// use hookguard_auth::canonical::ValueEncoding;
    ///
    /// assert_eq!(ValueEncoding::Rfc3986.encode("hello world"), "hello%20world");
    /// assert_eq!(ValueEncoding::FormUrlencoded.encode("hello world"), "hello+world");
    /// ```
    #[must_use]
    pub fn encode(self, value: &str) -> String {
        match self {
            Self::Rfc3986 => utf8_percent_encode(value, VALUE_ENCODE_SET).to_string(),
            Self::FormUrlencoded => form_urlencoded::byte_serialize(value.as_bytes()).collect(),
        }
    }
}

/// Build the canonical body from ordered form fields.
///
/// Each pair becomes `key=encode(value)`; pairs are joined with `&`. An empty
/// field list yields an empty body.
///
/// # Examples
///
/// ```
/// use hookguard_auth::canonical::{ValueEncoding, build_canonical_body};
///
/// let fields = vec![
///     ("a".to_owned(), "1".to_owned()),
///     ("b".to_owned(), "hello world".to_owned()),
/// ];
/// assert_eq!(
///     build_canonical_body(&fields, ValueEncoding::Rfc3986),
///     "a=1&b=hello%20world"
/// );
/// ```
#[must_use]
pub fn build_canonical_body(fields: &[(String, String)], encoding: ValueEncoding) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{key}={}", encoding.encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the base string that is fed to the HMAC.
///
/// The timestamp is used exactly as received, so any leading zeros or other
/// formatting the sender chose are preserved.
///
/// # Examples
///
/// ```
/// use hookguard_auth::canonical::build_base_string;
///
/// assert_eq!(
///     build_base_string("v0", "1700000000", "a=1&b=hello%20world"),
///     "v0:1700000000:a=1&b=hello%20world"
/// );
/// ```
#[must_use]
pub fn build_base_string(version: &str, timestamp: &str, canonical_body: &str) -> String {
    format!("{version}:{timestamp}:{canonical_body}")
}
