//! Fuzz target for classification and validation.
//!
//! Tests that classify/validate never panic and agree with each other.

#![no_main]

use card_network::{classify, entry::inspect, validate, validate::check, NetworkIdentity};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let identity = classify(data);

    // The boolean and detailed forms must agree for every identity.
    for candidate in NetworkIdentity::ALL {
        assert_eq!(validate(candidate, data), check(candidate, data).is_ok());
    }

    // A valid number always fits its network's bounds.
    if validate(identity, data) {
        assert!(identity.accepts_length(data.chars().count()));
        assert!(data.bytes().all(|b| b.is_ascii_digit()));
    }

    let snapshot = inspect(data);
    assert_eq!(snapshot.identity(), identity);
});
