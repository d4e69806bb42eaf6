//! Validation failure reasons.
//!
//! The boolean API never fails; [`check`](crate::validate::check) reports the
//! first stage a card number did not pass.

use crate::NetworkIdentity;
use std::fmt;

/// Why a card number was rejected for a given network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input string was empty.
    Empty,

    /// The digit count is outside the network's bounds.
    LengthOutOfRange {
        /// The network the number was checked against.
        identity: NetworkIdentity,
        /// The actual number of characters provided.
        length: usize,
        /// The network's minimum length.
        minimum: usize,
        /// The network's maximum length.
        maximum: usize,
    },

    /// The number does not match the network's pattern.
    PatternMismatch {
        /// The network the number was checked against.
        identity: NetworkIdentity,
    },

    /// The Luhn checksum validation failed.
    ///
    /// This usually indicates a typo in the card number.
    InvalidChecksum,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),

            Self::LengthOutOfRange {
                identity,
                length,
                minimum,
                maximum,
            } => {
                if minimum == maximum {
                    write!(
                        f,
                        "{} card numbers must have {} digits, got {}",
                        identity, minimum, length
                    )
                } else {
                    write!(
                        f,
                        "{} card numbers must have {} to {} digits, got {}",
                        identity, minimum, maximum, length
                    )
                }
            }

            Self::PatternMismatch { identity } => {
                write!(f, "card number does not match the {} numbering rules", identity)
            }

            Self::InvalidChecksum => {
                write!(f, "invalid checksum (Luhn check failed) - please verify the card number")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
