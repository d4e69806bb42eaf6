//! Basic card network classification example.
//!
//! Run with: `cargo run --example basic`

use card_network::{
    classify, grouped_display, masked_display, validate, validate::check, NetworkIdentity,
    ValidationError,
};

fn main() {
    println!("=== Basic Card Network Classification ===\n");

    // Example 1: Classify, validate and display a Visa card
    let visa_number = "4111111111111111";
    println!("Classifying: {}", visa_number);

    let identity = classify(visa_number);
    println!("  Network: {}", identity.name());
    println!("  Valid: {}", if validate(identity, visa_number) { "yes" } else { "no" });
    println!("  Grouped: {}", grouped_display(identity, visa_number));
    println!("  Masked: {}", masked_display("****", visa_number));
    println!("  CVV: {} digits", identity.cvv_length());
    println!();

    // Example 2: Quick checks across networks
    let test_cards = [
        ("4111111111111111", "Visa"),
        ("5500000000000004", "Mastercard"),
        ("378282246310005", "Amex"),
        ("6011111111111117", "Discover"),
        ("6759649826438453", "Maestro"),
        ("4111111111111112", "Invalid (bad checksum)"),
    ];

    println!("Quick validation checks:");
    for (number, description) in test_cards {
        let identity = classify(number);
        println!(
            "  {} - {}: {} ({})",
            grouped_display(identity, number),
            description,
            if validate(identity, number) { "VALID" } else { "INVALID" },
            identity
        );
    }
    println!();

    // Example 3: Why a number was rejected
    println!("Rejection reasons:");

    let error_cases = [
        ("", "Empty input"),
        ("411111111111111", "Too short for Visa"),
        ("378282246310005", "Amex number checked as Visa"),
        ("4111111111111112", "Invalid checksum"),
    ];

    for (number, description) in error_cases {
        match check(NetworkIdentity::Visa, number) {
            Ok(()) => println!("  {}: Unexpectedly valid", description),
            Err(e) => {
                let error_type = match e {
                    ValidationError::Empty => "Empty",
                    ValidationError::LengthOutOfRange { .. } => "LengthOutOfRange",
                    ValidationError::PatternMismatch { .. } => "PatternMismatch",
                    ValidationError::InvalidChecksum => "InvalidChecksum",
                };
                println!("  {}: {} - {}", description, error_type, e);
            }
        }
    }
    println!();

    // Example 4: Grouping while the number is typed
    println!("Typing an Amex number:");
    let amex = "378282246310005";
    for end in [3, 4, 7, 10, 15] {
        let grouped = grouped_display(NetworkIdentity::Amex, &amex[..end]);
        println!("  {:>2} digits: {:?}", end, grouped);
    }
    println!();

    // Example 5: All networks in registry order
    println!("Supported networks:");
    for identity in NetworkIdentity::ALL {
        println!(
            "  {:18} - Lengths: {:>2}-{:<2} CVV: {} digits",
            identity.name(),
            identity.min_length(),
            identity.max_length(),
            identity.cvv_length()
        );
    }
}
