//! Sharing one verifier across threads.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use hookguard_auth::IncomingRequest;

    use crate::test_verifier;

    #[test]
    fn test_should_give_identical_results_across_threads() {
        let verifier = Arc::new(test_verifier());
        let fields = vec![("payload".to_owned(), "{\"type\":\"event_callback\"}".to_owned())];
        let good = IncomingRequest::new(
            Some("1700000000".to_owned()),
            Some(verifier.sign("1700000000", &fields)),
            fields.clone(),
        );
        let bad = IncomingRequest::new(
            Some("1700000000".to_owned()),
            Some("v0=deadbeef".to_owned()),
            fields,
        );

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let verifier = Arc::clone(&verifier);
                let good = good.clone();
                let bad = bad.clone();
                thread::spawn(move || {
                    (0..100).all(|i| {
                        verifier.verify(&good, 1_700_000_000 + i)
                            && !verifier.verify(&bad, 1_700_000_000 + i)
                    })
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
