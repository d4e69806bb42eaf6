//! Fuzz target for the Luhn checksum.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use card_network::{is_luhn_valid, luhn};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    if digits.is_empty() {
        return;
    }

    // The string and slice entry points must agree.
    let text: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
    assert_eq!(luhn::validate(&digits), is_luhn_valid(&text));

    if digits.len() <= 18 {
        let check = luhn::generate_check_digit(&digits);
        assert!(check <= 9, "Check digit should be 0-9");

        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::validate(&with_check), "Adding check digit should make valid");
    }

    // Raw bytes as text must never panic.
    if let Ok(raw) = std::str::from_utf8(data) {
        let _ = is_luhn_valid(raw);
    }
});
