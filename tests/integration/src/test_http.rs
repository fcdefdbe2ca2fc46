//! End-to-end verification of HTTP requests.

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use crate::{TEST_SECRET, signed_http_request, test_verifier, verify_http};

    const SLACK_TIMESTAMP: &str = "1531420618";
    const SLACK_BODY: &str = "token=xyzz0WbapA4vBCDEFasx0q6G&team_id=T1DC2JH3J\
        &team_domain=testteamnow&channel_id=G8PSS9T3V&channel_name=foobar\
        &user_id=U2CERLKJA&user_name=roadrunner&command=%2Fwebhook-collect&text=\
        &response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2FT1DC2JH3J%2F397700885554%2F96rGlfmibIGlgcZRskXaIFfN\
        &trigger_id=398738663015.47445629121.803a0bc887a14d10d2c447fce8b6703c";
    const SLACK_SIGNATURE: &str =
        "v0=a2114d57b48eac39b9ad189dd8316235a7b4a8d21a10bd27519666489c69b503";

    #[test]
    fn test_should_verify_published_slack_example() {
        let verifier = test_verifier();
        assert_eq!(TEST_SECRET, "8f742231b10e8888abcd99yyyzzz85a5");

        let request = http::Request::builder()
            .method("POST")
            .uri("/slack/commands")
            .header("x-slack-request-timestamp", SLACK_TIMESTAMP)
            .header("x-slack-signature", SLACK_SIGNATURE)
            .body(SLACK_BODY.as_bytes().to_vec())
            .unwrap();

        assert!(verify_http(&verifier, request, 1_531_420_618));
    }

    #[test]
    fn test_should_reject_published_slack_example_after_window() {
        let verifier = test_verifier();
        let request = http::Request::builder()
            .method("POST")
            .uri("/slack/commands")
            .header("x-slack-request-timestamp", SLACK_TIMESTAMP)
            .header("x-slack-signature", SLACK_SIGNATURE)
            .body(SLACK_BODY.as_bytes().to_vec())
            .unwrap();

        assert!(!verify_http(&verifier, request, 1_531_420_618 + 301));
    }

    #[test]
    fn test_should_accept_freshly_signed_request() {
        let verifier = test_verifier();
        let request = signed_http_request(&verifier, "1700000000", "a=1&b=hello+world");
        assert!(verify_http(&verifier, request, 1_700_000_120));
    }

    #[test]
    fn test_should_reject_tampered_body() {
        let verifier = test_verifier();
        let request = signed_http_request(&verifier, "1700000000", "amount=10&to=alice");
        let (parts, _) = request.into_parts();
        let tampered = http::Request::from_parts(parts, b"amount=1000&to=alice".to_vec());

        assert!(!verify_http(&verifier, tampered, 1_700_000_000));
    }

    #[test]
    fn test_should_reject_reordered_fields() {
        let verifier = test_verifier();
        let request = signed_http_request(&verifier, "1700000000", "a=1&b=2");
        let (parts, _) = request.into_parts();
        let reordered = http::Request::from_parts(parts, b"b=2&a=1".to_vec());

        assert!(!verify_http(&verifier, reordered, 1_700_000_000));
    }

    #[test]
    fn test_should_reject_replaced_timestamp() {
        let verifier = test_verifier();
        let mut request = signed_http_request(&verifier, "1700000000", "a=1");
        request.headers_mut().insert(
            "x-slack-request-timestamp",
            HeaderValue::from_static("1700000100"),
        );

        assert!(!verify_http(&verifier, request, 1_700_000_100));
    }

    #[test]
    fn test_should_reject_request_without_signature_headers() {
        let verifier = test_verifier();
        let mut request = signed_http_request(&verifier, "1700000000", "a=1");
        request.headers_mut().remove("x-slack-signature");
        assert!(!verify_http(&verifier, request, 1_700_000_000));

        let mut request = signed_http_request(&verifier, "1700000000", "a=1");
        request.headers_mut().remove("x-slack-request-timestamp");
        assert!(!verify_http(&verifier, request, 1_700_000_000));
    }

    #[test]
    fn test_should_reject_non_numeric_timestamp_header() {
        let verifier = test_verifier();
        let mut request = signed_http_request(&verifier, "1700000000", "a=1");
        request
            .headers_mut()
            .insert("x-slack-request-timestamp", HeaderValue::from_static("yesterday"));

        assert!(!verify_http(&verifier, request, 1_700_000_000));
    }

    #[test]
    fn test_should_verify_empty_body() {
        let verifier = test_verifier();
        let request = signed_http_request(&verifier, "1700000000", "");
        assert!(verify_http(&verifier, request, 1_700_000_000));
    }
}
