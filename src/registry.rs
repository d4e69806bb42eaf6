//! Ordered table of network matching rules.
//!
//! Every rule is a full-match regular expression over the raw digit string.
//! The table is compiled once, on first use, and is read-only afterwards.
//!
//! Order matters: classification walks the table front to back and the first
//! rule that matches wins. Some rules overlap for crafted inputs (a 16-digit
//! number starting `4903` satisfies both Visa and Switch); registration order
//! is the tie-break.

use crate::NetworkIdentity;
use once_cell::sync::Lazy;
use regex::Regex;

const VISA_PATTERN: &str = r"4[0-9]{12}(?:[0-9]{3})";
const MASTERCARD_PATTERN: &str = r"5[1-5][0-9]{14}";
const DISCOVER_PATTERN: &str = r"6(?:011|5[0-9]{2})[0-9]{12}";
const AMEX_PATTERN: &str = r"3[47][0-9]{13}";
const DINERS_CLUB_PATTERN: &str = r"3(?:0[0-5]|[68][0-9])[0-9]{11}";
const JCB_PATTERN: &str = r"(?:2131|1800|35[0-9]{3})[0-9]{11}";
const MAESTRO_PATTERN: &str = r"(?:5[0678][0-9]{2}|6304|6390|67[0-9]{2})[0-9]{12,15}";
const UNIONPAY_PATTERN: &str = r"62[0-9]{14,17}";
const SWITCH_PATTERN: &str = concat!(
    r"(?:4903|4905|4911|4936|6333|6759)(?:[0-9]{12}|[0-9]{14}|[0-9]{15})",
    r"|(?:564182|633110)(?:[0-9]{10}|[0-9]{12}|[0-9]{13})",
);
const UNKNOWN_PATTERN: &str = r"[0-9]{14,19}";

/// Registration order. More specific networks come before the length-only
/// `Unknown` rule.
const RULE_SOURCES: [(NetworkIdentity, &str); 10] = [
    (NetworkIdentity::Visa, VISA_PATTERN),
    (NetworkIdentity::Mastercard, MASTERCARD_PATTERN),
    (NetworkIdentity::Discover, DISCOVER_PATTERN),
    (NetworkIdentity::Amex, AMEX_PATTERN),
    (NetworkIdentity::DinersClub, DINERS_CLUB_PATTERN),
    (NetworkIdentity::Jcb, JCB_PATTERN),
    (NetworkIdentity::Maestro, MAESTRO_PATTERN),
    (NetworkIdentity::UnionPay, UNIONPAY_PATTERN),
    (NetworkIdentity::Switch, SWITCH_PATTERN),
    (NetworkIdentity::Unknown, UNKNOWN_PATTERN),
];

static GLOBAL_REGISTRY: Lazy<PatternRegistry> = Lazy::new(PatternRegistry::build);

/// A single network rule: identity, anchored pattern and length bounds.
#[derive(Debug, Clone)]
pub struct PatternRule {
    identity: NetworkIdentity,
    pattern: Regex,
    min_length: usize,
    max_length: usize,
}

impl PatternRule {
    fn compile(identity: NetworkIdentity, source: &str) -> Self {
        // Anchored on both ends so `is_match` behaves as a full match.
        let anchored = format!("^(?:{source})$");
        let pattern = Regex::new(&anchored).expect("built-in network pattern must compile");
        Self {
            identity,
            pattern,
            min_length: identity.min_length(),
            max_length: identity.max_length(),
        }
    }

    /// The network this rule identifies.
    #[inline]
    pub fn identity(&self) -> NetworkIdentity {
        self.identity
    }

    /// The anchored pattern source.
    #[inline]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Minimum number of digits, inclusive.
    #[inline]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Maximum number of digits, inclusive.
    #[inline]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns true if the whole of `digits` matches this rule.
    #[inline]
    pub fn matches(&self, digits: &str) -> bool {
        self.pattern.is_match(digits)
    }

    /// Returns true if `length` lies within this rule's bounds.
    #[inline]
    pub fn accepts_length(&self, length: usize) -> bool {
        length >= self.min_length && length <= self.max_length
    }
}

/// Immutable, ordered set of network rules.
///
/// Use [`PatternRegistry::global`] rather than building one per call; the
/// patterns are compiled once per process.
#[derive(Debug)]
pub struct PatternRegistry {
    rules: Vec<PatternRule>,
}

impl PatternRegistry {
    fn build() -> Self {
        let rules: Vec<PatternRule> = RULE_SOURCES
            .iter()
            .map(|&(identity, source)| PatternRule::compile(identity, source))
            .collect();
        tracing::debug!(rules = rules.len(), "compiled network pattern registry");
        Self { rules }
    }

    /// Returns the process-wide registry, compiling it on first access.
    #[inline]
    pub fn global() -> &'static PatternRegistry {
        &GLOBAL_REGISTRY
    }

    /// Rules in registration order.
    #[inline]
    pub fn entries(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Returns the rule registered for `identity`.
    ///
    /// Every identity, `Unknown` included, has exactly one rule.
    pub fn rule_for(&self, identity: NetworkIdentity) -> &PatternRule {
        // Rules are stored in the declaration order of NetworkIdentity.
        &self.rules[identity as usize]
    }

    /// Returns the first registered identity whose rule fully matches `digits`.
    pub fn first_match(&self, digits: &str) -> Option<NetworkIdentity> {
        self.rules
            .iter()
            .find(|rule| rule.matches(digits))
            .map(PatternRule::identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order() {
        let order: Vec<NetworkIdentity> = PatternRegistry::global()
            .entries()
            .iter()
            .map(PatternRule::identity)
            .collect();
        assert_eq!(order, NetworkIdentity::ALL.to_vec());
    }

    #[test]
    fn test_rule_for_every_identity() {
        let registry = PatternRegistry::global();
        for identity in NetworkIdentity::ALL {
            let rule = registry.rule_for(identity);
            assert_eq!(rule.identity(), identity);
            assert_eq!(rule.min_length(), identity.min_length());
            assert_eq!(rule.max_length(), identity.max_length());
        }
    }

    #[test]
    fn test_patterns_are_anchored() {
        let visa = PatternRegistry::global().rule_for(NetworkIdentity::Visa);
        assert!(visa.matches("4111111111111111"));
        // Substrings and extensions must not match.
        assert!(!visa.matches("x4111111111111111"));
        assert!(!visa.matches("41111111111111111"));
        assert!(!visa.matches("411111111111111"));
        assert!(visa.pattern().starts_with('^'));
        assert!(visa.pattern().ends_with('$'));
    }

    #[test]
    fn test_switch_alternatives() {
        let switch = PatternRegistry::global().rule_for(NetworkIdentity::Switch);
        assert!(switch.matches("6333000000000005"));
        assert!(switch.matches("490300000000000000"));
        assert!(switch.matches("4903000000000000000"));
        assert!(switch.matches("5641820000000000"));
        assert!(switch.matches("633110000000000005"));
        // 17 digits is not one of the listed lengths.
        assert!(!switch.matches("49030000000000000"));
    }

    #[test]
    fn test_unknown_rule_is_length_only() {
        let unknown = PatternRegistry::global().rule_for(NetworkIdentity::Unknown);
        assert!(unknown.matches("10000000000008"));
        assert!(unknown.matches("1234567890123456789"));
        assert!(!unknown.matches("1234567890123"));
        assert!(!unknown.matches("12345678901234567890"));
    }

    #[test]
    fn test_first_match_honors_order() {
        let registry = PatternRegistry::global();
        // Matches both Visa and Switch; Visa is registered first.
        assert_eq!(
            registry.first_match("4903000000000000"),
            Some(NetworkIdentity::Visa)
        );
        assert_eq!(registry.first_match("123"), None);
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternRegistry>();
        assert_send_sync::<PatternRule>();
    }
}
