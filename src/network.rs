//! Card network identities.
//!
//! This module provides the `NetworkIdentity` enum for identifying the issuing
//! network of a card number, along with the fixed per-network attributes a
//! presentation layer needs: length bounds, digit grouping, CVV length and an
//! opaque icon reference.

use std::fmt;

/// Separator positions used by American Express (4-6-5 layout).
const AMEX_GROUP_INDICES: &[usize] = &[4, 10];

/// Separator positions used by every other network (4-4-4-4 layout).
const DEFAULT_GROUP_INDICES: &[usize] = &[4, 8, 12];

/// Supported card networks.
///
/// `Unknown` is the fallback for any input no other network's rule matches.
/// Matching rules live in the [`PatternRegistry`](crate::PatternRegistry);
/// everything else about a network is a constant attribute of its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NetworkIdentity {
    /// Visa - Prefix 4, length 16
    Visa,
    /// Mastercard - Prefix 51-55, length 16
    Mastercard,
    /// Discover - Prefix 6011, 65, length 16
    Discover,
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Diners Club - Prefix 300-305, 36, 38, length 14
    DinersClub,
    /// JCB - Prefix 35, 2131, 1800, length 16
    Jcb,
    /// Maestro - Prefix 50, 56-58, 6304, 6390, 67, length 14-19
    Maestro,
    /// UnionPay - Prefix 62, length 16-19
    UnionPay,
    /// Switch - Prefix 4903, 4905, 4911, 4936, 564182, 633110, 6333, 6759, length 16-19
    Switch,
    /// Any 14-19 digit number not claimed by another network.
    Unknown,
}

/// Opaque reference to a display asset for a network.
///
/// The core never interprets it; presentation layers map it to an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IconRef(&'static str);

impl IconRef {
    /// Returns the asset name.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl NetworkIdentity {
    /// Every identity, in registry order.
    pub const ALL: [NetworkIdentity; 10] = [
        Self::Visa,
        Self::Mastercard,
        Self::Discover,
        Self::Amex,
        Self::DinersClub,
        Self::Jcb,
        Self::Maestro,
        Self::UnionPay,
        Self::Switch,
        Self::Unknown,
    ];

    /// Minimum number of digits, inclusive.
    #[inline]
    pub const fn min_length(&self) -> usize {
        match self {
            Self::Visa | Self::Mastercard | Self::Discover | Self::Jcb => 16,
            Self::UnionPay | Self::Switch => 16,
            Self::Amex => 15,
            Self::DinersClub | Self::Maestro | Self::Unknown => 14,
        }
    }

    /// Maximum number of digits, inclusive.
    ///
    /// Interactive callers use this as the input length cap.
    #[inline]
    pub const fn max_length(&self) -> usize {
        match self {
            Self::Visa | Self::Mastercard | Self::Discover | Self::Jcb => 16,
            Self::Amex => 15,
            Self::DinersClub => 14,
            Self::Maestro | Self::UnionPay | Self::Switch | Self::Unknown => 19,
        }
    }

    /// Returns true if `length` lies within this network's bounds.
    #[inline]
    pub const fn accepts_length(&self, length: usize) -> bool {
        length >= self.min_length() && length <= self.max_length()
    }

    /// 0-based positions after which a separator is drawn.
    #[inline]
    pub const fn group_indices(&self) -> &'static [usize] {
        match self {
            Self::Amex => AMEX_GROUP_INDICES,
            _ => DEFAULT_GROUP_INDICES,
        }
    }

    /// Number of digits in the security code printed on the card.
    #[inline]
    pub const fn cvv_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }

    /// Display asset for this network.
    #[inline]
    pub const fn icon(&self) -> IconRef {
        IconRef(match self {
            Self::Visa => "ic_card_visa",
            Self::Mastercard => "ic_card_mastercard",
            Self::Discover => "ic_card_discover",
            Self::Amex => "ic_card_amex",
            Self::DinersClub => "ic_card_diners",
            Self::Jcb => "ic_card_jcb",
            Self::Maestro => "ic_card_maestro",
            Self::UnionPay => "ic_card_unionpay",
            Self::Switch => "ic_card_switch",
            Self::Unknown => "ic_card_placeholder",
        })
    }

    /// Returns a human-readable name for the network.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Discover => "Discover",
            Self::Amex => "American Express",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::Maestro => "Maestro",
            Self::UnionPay => "UnionPay",
            Self::Switch => "Switch",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true for every identity except `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for NetworkIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds() {
        assert!(NetworkIdentity::Visa.accepts_length(16));
        assert!(!NetworkIdentity::Visa.accepts_length(15));
        assert!(!NetworkIdentity::Visa.accepts_length(19));

        assert!(NetworkIdentity::Amex.accepts_length(15));
        assert!(!NetworkIdentity::Amex.accepts_length(16));

        assert!(NetworkIdentity::DinersClub.accepts_length(14));
        assert!(NetworkIdentity::Maestro.accepts_length(14));
        assert!(NetworkIdentity::Maestro.accepts_length(19));
        assert!(!NetworkIdentity::Maestro.accepts_length(20));

        assert!(NetworkIdentity::Unknown.accepts_length(14));
        assert!(!NetworkIdentity::Unknown.accepts_length(13));
    }

    #[test]
    fn test_group_indices() {
        assert_eq!(NetworkIdentity::Amex.group_indices(), &[4, 10]);
        for identity in NetworkIdentity::ALL {
            if identity != NetworkIdentity::Amex {
                assert_eq!(identity.group_indices(), &[4, 8, 12], "{identity}");
            }
        }
    }

    #[test]
    fn test_cvv_length() {
        assert_eq!(NetworkIdentity::Amex.cvv_length(), 4);
        assert_eq!(NetworkIdentity::Visa.cvv_length(), 3);
        assert_eq!(NetworkIdentity::Unknown.cvv_length(), 3);
    }

    #[test]
    fn test_names_and_icons() {
        assert_eq!(NetworkIdentity::Amex.name(), "American Express");
        assert_eq!(NetworkIdentity::Mastercard.to_string(), "Mastercard");
        assert_eq!(NetworkIdentity::Visa.icon().as_str(), "ic_card_visa");
        assert_eq!(NetworkIdentity::Unknown.icon().to_string(), "ic_card_placeholder");
    }

    #[test]
    fn test_bounds_are_ordered() {
        for identity in NetworkIdentity::ALL {
            assert!(identity.min_length() <= identity.max_length(), "{identity}");
        }
    }

    #[test]
    fn test_is_known() {
        assert!(NetworkIdentity::Switch.is_known());
        assert!(!NetworkIdentity::Unknown.is_known());
    }

    #[test]
    fn test_identity_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NetworkIdentity>();
        assert_send_sync::<IconRef>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_types_are_serializable() {
        fn assert_serialize<T: serde::Serialize>() {}
        assert_serialize::<NetworkIdentity>();
        assert_serialize::<IconRef>();
    }
}
