//! Card number validation against a known network.
//!
//! Validation runs three stages in order and stops at the first failure:
//!
//! 1. Length within the network's inclusive bounds
//! 2. Full match of the network's pattern
//! 3. Luhn checksum
//!
//! The network is supplied by the caller, normally from
//! [`classify`](crate::classify()); validation never re-classifies.

use crate::classify::classify;
use crate::error::ValidationError;
use crate::luhn;
use crate::registry::PatternRegistry;
use crate::NetworkIdentity;

/// Checks a card number against `identity`, reporting the failing stage.
///
/// Length is measured in characters of the raw input, so separators count
/// and will normally fail the pattern stage.
///
/// # Example
///
/// ```
/// use card_network::{validate::check, NetworkIdentity, ValidationError};
///
/// assert!(check(NetworkIdentity::Visa, "4111111111111111").is_ok());
/// assert_eq!(
///     check(NetworkIdentity::Visa, "4111111111111112"),
///     Err(ValidationError::InvalidChecksum)
/// );
/// ```
pub fn check(identity: NetworkIdentity, digits: &str) -> Result<(), ValidationError> {
    if digits.is_empty() {
        return Err(ValidationError::Empty);
    }

    let rule = PatternRegistry::global().rule_for(identity);
    let length = digits.chars().count();

    if !rule.accepts_length(length) {
        return Err(ValidationError::LengthOutOfRange {
            identity,
            length,
            minimum: rule.min_length(),
            maximum: rule.max_length(),
        });
    }

    if !rule.matches(digits) {
        return Err(ValidationError::PatternMismatch { identity });
    }

    if !luhn::is_luhn_valid(digits) {
        return Err(ValidationError::InvalidChecksum);
    }

    Ok(())
}

/// Returns true if `digits` is a valid card number for `identity`.
///
/// # Example
///
/// ```
/// use card_network::{validate, NetworkIdentity};
///
/// assert!(validate(NetworkIdentity::Visa, "4111111111111111"));
/// // 15 digits is outside Visa's bounds.
/// assert!(!validate(NetworkIdentity::Visa, "411111111111111"));
/// ```
#[inline]
pub fn validate(identity: NetworkIdentity, digits: &str) -> bool {
    let result = check(identity, digits);
    if let Err(ref reason) = result {
        tracing::trace!(%identity, %reason, "card number rejected");
    }
    result.is_ok()
}

/// Like [`validate`], treating `None` as invalid.
#[inline]
pub fn validate_opt(identity: NetworkIdentity, digits: Option<&str>) -> bool {
    digits.is_some_and(|digits| validate(identity, digits))
}

/// Classifies `digits` and validates it against the result.
///
/// # Example
///
/// ```
/// use card_network::{validate::classify_and_check, NetworkIdentity};
///
/// assert_eq!(
///     classify_and_check("378282246310005"),
///     Ok(NetworkIdentity::Amex)
/// );
/// assert!(classify_and_check("378282246310006").is_err());
/// ```
pub fn classify_and_check(digits: &str) -> Result<NetworkIdentity, ValidationError> {
    let identity = classify(digits);
    check(identity, digits)?;
    Ok(identity)
}
