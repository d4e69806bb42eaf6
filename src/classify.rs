//! Card network classification.
//!
//! Classification walks the [`PatternRegistry`] in registration order and
//! returns the first network whose rule matches the entire input. Nothing is
//! stripped from the input first: callers holding a grouped string should run
//! it through [`strip_separators`](crate::format::strip_separators).

use crate::registry::PatternRegistry;
use crate::NetworkIdentity;

/// Classifies a raw digit string.
///
/// # Arguments
///
/// * `digits` - The card number, digits only.
///
/// # Returns
///
/// The first matching network, or `NetworkIdentity::Unknown` when the input
/// is empty or nothing matches.
///
/// # Example
///
/// ```
/// use card_network::{classify, NetworkIdentity};
///
/// assert_eq!(classify("4111111111111111"), NetworkIdentity::Visa);
/// assert_eq!(classify("378282246310005"), NetworkIdentity::Amex);
/// assert_eq!(classify(""), NetworkIdentity::Unknown);
/// ```
pub fn classify(digits: &str) -> NetworkIdentity {
    if digits.is_empty() {
        return NetworkIdentity::Unknown;
    }

    let identity = PatternRegistry::global()
        .first_match(digits)
        .unwrap_or(NetworkIdentity::Unknown);
    tracing::trace!(%identity, length = digits.len(), "classified card number");
    identity
}

/// Classifies an optional digit string; `None` is `Unknown`.
#[inline]
pub fn classify_opt(digits: Option<&str>) -> NetworkIdentity {
    digits.map_or(NetworkIdentity::Unknown, classify)
}

/// Classifies a card number held as an integer.
///
/// Leading zeros cannot be represented, which no supported network needs.
///
/// ```
/// use card_network::{classify::classify_number, NetworkIdentity};
///
/// assert_eq!(classify_number(5555555555554444), NetworkIdentity::Mastercard);
/// ```
pub fn classify_number(number: u64) -> NetworkIdentity {
    classify(&number.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_classification() {
        assert_eq!(classify("4111111111111111"), NetworkIdentity::Visa);
        assert_eq!(classify("4012888888881881"), NetworkIdentity::Visa);
        // Only the 16-digit form is registered; 13 digits is too short for
        // every rule including Unknown's.
        assert_eq!(classify("4222222222222"), NetworkIdentity::Unknown);
    }

    #[test]
    fn test_mastercard_classification() {
        assert_eq!(classify("5555555555554444"), NetworkIdentity::Mastercard);
        assert_eq!(classify("5105105105105100"), NetworkIdentity::Mastercard);
    }

    #[test]
    fn test_discover_classification() {
        assert_eq!(classify("6011111111111117"), NetworkIdentity::Discover);
        assert_eq!(classify("6500000000000002"), NetworkIdentity::Discover);
    }

    #[test]
    fn test_amex_classification() {
        assert_eq!(classify("378282246310005"), NetworkIdentity::Amex);
        assert_eq!(classify("340000000000009"), NetworkIdentity::Amex);
    }

    #[test]
    fn test_diners_club_classification() {
        assert_eq!(classify("30569309025904"), NetworkIdentity::DinersClub);
        assert_eq!(classify("38520000023237"), NetworkIdentity::DinersClub);
    }

    #[test]
    fn test_jcb_classification() {
        assert_eq!(classify("3530111333300000"), NetworkIdentity::Jcb);
        assert_eq!(classify("3566002020360505"), NetworkIdentity::Jcb);
        assert_eq!(classify("213100000000000"), NetworkIdentity::Jcb);
    }

    #[test]
    fn test_maestro_classification() {
        assert_eq!(classify("5018000000000009"), NetworkIdentity::Maestro);
        assert_eq!(classify("6759649826438453"), NetworkIdentity::Maestro);
        assert_eq!(classify("63040000000000000"), NetworkIdentity::Maestro);
    }

    #[test]
    fn test_unionpay_classification() {
        assert_eq!(classify("6200000000000005"), NetworkIdentity::UnionPay);
        assert_eq!(classify("6200000000000000000"), NetworkIdentity::UnionPay);
    }

    #[test]
    fn test_switch_classification() {
        assert_eq!(classify("6333000000000005"), NetworkIdentity::Switch);
        assert_eq!(classify("490300000000000000"), NetworkIdentity::Switch);
        assert_eq!(classify("633110000000000005"), NetworkIdentity::Switch);
    }

    #[test]
    fn test_overlaps_resolve_by_order() {
        // Switch prefixes shadowed by earlier rules.
        assert_eq!(classify("4903000000000000"), NetworkIdentity::Visa);
        assert_eq!(classify("5641820000000000"), NetworkIdentity::Maestro);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify(""), NetworkIdentity::Unknown);
        assert_eq!(classify("1234567890123452"), NetworkIdentity::Unknown);
        assert_eq!(classify("4111"), NetworkIdentity::Unknown);
    }

    #[test]
    fn test_no_stripping() {
        assert_eq!(classify("4111 1111 1111 1111"), NetworkIdentity::Unknown);
        assert_eq!(classify("4111-1111-1111-1111"), NetworkIdentity::Unknown);
    }

    #[test]
    fn test_classify_opt() {
        assert_eq!(classify_opt(None), NetworkIdentity::Unknown);
        assert_eq!(classify_opt(Some("")), NetworkIdentity::Unknown);
        assert_eq!(classify_opt(Some("4111111111111111")), NetworkIdentity::Visa);
    }

    #[test]
    fn test_classify_number() {
        assert_eq!(classify_number(4111111111111111), NetworkIdentity::Visa);
        assert_eq!(classify_number(0), NetworkIdentity::Unknown);
    }
}
