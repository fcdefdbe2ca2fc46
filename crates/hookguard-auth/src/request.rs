//! The parts of an inbound request that the verifier consumes.

use crate::config::SignatureHeaders;

/// Timestamp, signature, and ordered form fields of an inbound webhook.
///
/// Form fields are kept exactly as transmitted: original order, duplicate
/// keys, and decoded (logical) values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingRequest {
    /// Raw value of the timestamp header.
    pub timestamp: Option<String>,
    /// Raw value of the signature header.
    pub signature: Option<String>,
    /// Decoded form fields in transmission order.
    pub form_fields: Vec<(String, String)>,
}

impl IncomingRequest {
    /// Create a request from already-extracted values.
    #[must_use]
    pub fn new(
        timestamp: Option<String>,
        signature: Option<String>,
        form_fields: Vec<(String, String)>,
    ) -> Self {
        Self {
            timestamp,
            signature,
            form_fields,
        }
    }

    /// Extract the verifier inputs from HTTP request parts and a form body.
    ///
    /// Header lookup is case-insensitive. A header whose value is not valid
    /// UTF-8 is treated as absent. The body is decoded as
    /// `application/x-www-form-urlencoded`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hookguard_auth::{IncomingRequest, SignatureHeaders};
    ///
    /// let (parts, ()) = http::Request::builder()
    ///     .method("POST")
    ///     .uri("/slack/events")
    ///     .header("X-Slack-Request-Timestamp", "1700000000")
    ///     .header("X-Slack-Signature", "v0=abc")
    ///     .body(())
    ///     .unwrap()
    ///     .into_parts();
    ///
    /// let request = IncomingRequest::from_parts(&parts, b"b=hello+world", &SignatureHeaders::default());
    /// assert_eq!(request.timestamp.as_deref(), Some("1700000000"));
    /// assert_eq!(request.form_fields, vec![("b".to_owned(), "hello world".to_owned())]);
    /// ```
    #[must_use]
    pub fn from_parts(
        parts: &http::request::Parts,
        body: &[u8],
        headers: &SignatureHeaders,
    ) -> Self {
        Self {
            timestamp: header_value(&parts.headers, &headers.timestamp),
            signature: header_value(&parts.headers, &headers.signature),
            form_fields: parse_form_body(body),
        }
    }
}

/// Decode an `application/x-www-form-urlencoded` body into ordered pairs.
#[must_use]
pub fn parse_form_body(body: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn header_value(headers: &http::HeaderMap, name: &http::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}
