//! # card_network
//!
//! Payment card network classification, validation and display formatting.
//!
//! ## Features
//!
//! - Network classification from an ordered table of full-match rules
//! - Luhn checksum validation
//! - Per-network length and pattern validation
//! - Grouped display (`4111 1111 1111 1111`, `3782 822463 10005`)
//! - Masked display (`****1111`)
//! - Library and CLI interfaces
//!
//! ## Quick Start
//!
//! ```rust
//! use card_network::{classify, validate, grouped_display, masked_display, NetworkIdentity};
//!
//! let number = "4111111111111111";
//! let identity = classify(number);
//! assert_eq!(identity, NetworkIdentity::Visa);
//! assert!(validate(identity, number));
//! assert_eq!(grouped_display(identity, number), "4111 1111 1111 1111");
//! assert_eq!(masked_display("****", number), "****1111");
//! ```
//!
//! ## Luhn Only
//!
//! ```rust
//! use card_network::is_luhn_valid;
//!
//! assert!(is_luhn_valid("4111-1111-1111-1111"));
//! assert!(!is_luhn_valid("4111111111111112"));
//! ```
//!
//! ## Why a Number Was Rejected
//!
//! ```rust
//! use card_network::{validate::check, NetworkIdentity, ValidationError};
//!
//! let err = check(NetworkIdentity::Visa, "411111111111111").unwrap_err();
//! assert!(matches!(err, ValidationError::LengthOutOfRange { length: 15, .. }));
//! ```
//!
//! ## Supported Networks
//!
//! Rules are tried in this order; the first full match wins.
//!
//! | Network | Prefix | Length | Groups |
//! |---------|--------|--------|--------|
//! | Visa | 4 | 16 | 4-4-4-4 |
//! | Mastercard | 51-55 | 16 | 4-4-4-4 |
//! | Discover | 6011, 65 | 16 | 4-4-4-4 |
//! | American Express | 34, 37 | 15 | 4-6-5 |
//! | Diners Club | 300-305, 36, 38 | 14 | 4-4-4-2 |
//! | JCB | 35, 2131, 1800 | 16 | 4-4-4-4 |
//! | Maestro | 50, 56-58, 6304, 6390, 67 | 14-19 | 4-4-4-rest |
//! | UnionPay | 62 | 16-19 | 4-4-4-rest |
//! | Switch | 4903, 4905, 4911, 4936, 564182, 633110, 6333, 6759 | 16-19 | 4-4-4-rest |
//! | Unknown | any | 14-19 | 4-4-4-rest |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for `NetworkIdentity`, `Serialize` for `IconRef` |
//! | `cli` | `cardnet` command-line tool |
//!
//! ## Security
//!
//! - Nothing is stored; every function is pure
//! - `Inspection` zeroes its copy of the number on drop and masks `Debug`
//! - Log events carry identities and lengths, never digits
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod classify;
pub mod entry;
pub mod error;
pub mod format;
pub mod luhn;
pub mod mask;
pub mod network;
pub mod registry;
pub mod validate;

// Re-export main types at crate root
pub use classify::{classify, classify_opt};
pub use entry::{inspect, IdentityTracker, Inspection};
pub use error::ValidationError;
pub use format::{grouped_display, strip_separators};
pub use luhn::is_luhn_valid;
pub use mask::masked_display;
pub use network::{IconRef, NetworkIdentity};
pub use registry::{PatternRegistry, PatternRule};
pub use validate::validate;
