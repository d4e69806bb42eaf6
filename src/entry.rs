//! Per-keystroke card entry helpers.
//!
//! An input field typically runs classify, validate and format on every
//! change. [`inspect`] does all three in one call and returns an
//! [`Inspection`]; [`IdentityTracker`] reports only the changes in detected
//! network so a caller can swap icons or length caps when it matters.
//!
//! # Example
//!
//! ```
//! use card_network::{entry::{inspect, IdentityTracker}, NetworkIdentity};
//!
//! let snapshot = inspect("378282246310005");
//! assert_eq!(snapshot.identity(), NetworkIdentity::Amex);
//! assert!(snapshot.is_valid());
//! assert_eq!(snapshot.grouped(), "3782 822463 10005");
//! assert_eq!(snapshot.max_length(), 15);
//!
//! let mut tracker = IdentityTracker::new();
//! assert_eq!(tracker.observe("3"), Some(NetworkIdentity::Unknown));
//! assert_eq!(tracker.observe("37"), None);
//! assert_eq!(tracker.observe("378282246310005"), Some(NetworkIdentity::Amex));
//! ```

use crate::classify::classify;
use crate::format::grouped_display;
use crate::mask::masked_display_default;
use crate::network::IconRef;
use crate::validate::validate;
use crate::NetworkIdentity;
use std::fmt;
use zeroize::Zeroize;

/// Result of one classify / validate / format pass over an input.
///
/// # Security
///
/// The grouped display contains the full number. It is zeroed on drop, and
/// `Debug` prints the masked form instead.
#[derive(Clone)]
pub struct Inspection {
    identity: NetworkIdentity,
    valid: bool,
    grouped: String,
    masked: String,
}

impl Inspection {
    /// The detected network.
    #[inline]
    pub const fn identity(&self) -> NetworkIdentity {
        self.identity
    }

    /// Whether the input is a complete, valid number for the detected network.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// The input grouped for display.
    ///
    /// # Security Warning
    ///
    /// This is the full card number. Never log it; use [`masked`](Self::masked).
    #[inline]
    pub fn grouped(&self) -> &str {
        &self.grouped
    }

    /// The input masked to its last four digits, e.g. `****1111`.
    #[inline]
    pub fn masked(&self) -> &str {
        &self.masked
    }

    /// Input length cap for the detected network.
    #[inline]
    pub const fn max_length(&self) -> usize {
        self.identity.max_length()
    }

    /// Security code length for the detected network.
    #[inline]
    pub const fn cvv_length(&self) -> usize {
        self.identity.cvv_length()
    }

    /// Display asset for the detected network.
    #[inline]
    pub const fn icon(&self) -> IconRef {
        self.identity.icon()
    }
}

impl fmt::Debug for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspection")
            .field("identity", &self.identity)
            .field("valid", &self.valid)
            .field("number", &self.masked)
            .finish()
    }
}

impl Drop for Inspection {
    fn drop(&mut self) {
        self.grouped.zeroize();
    }
}

/// Classifies, validates and formats `digits` in one pass.
pub fn inspect(digits: &str) -> Inspection {
    let identity = classify(digits);
    Inspection {
        identity,
        valid: validate(identity, digits),
        grouped: grouped_display(identity, digits),
        masked: masked_display_default(digits),
    }
}

/// Remembers the last detected network and reports changes.
#[derive(Debug, Default, Clone)]
pub struct IdentityTracker {
    current: Option<NetworkIdentity>,
}

impl IdentityTracker {
    /// Creates a tracker that has not seen any input yet.
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Classifies `digits` and returns the identity if it differs from the
    /// previous observation. The first observation always reports.
    pub fn observe(&mut self, digits: &str) -> Option<NetworkIdentity> {
        let identity = classify(digits);
        if self.current == Some(identity) {
            return None;
        }
        tracing::debug!(from = ?self.current, to = %identity, "card network changed");
        self.current = Some(identity);
        Some(identity)
    }

    /// The most recently observed identity, if any.
    #[inline]
    pub const fn current(&self) -> Option<NetworkIdentity> {
        self.current
    }

    /// Forgets the last observation.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
