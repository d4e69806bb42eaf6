//! Grouped display of card numbers.
//!
//! Separators are placed after the positions a network lists in
//! [`NetworkIdentity::group_indices`]:
//!
//! - **American Express**: after 4 and 10, `XXXX XXXXXX XXXXX`
//! - **Everything else**: after 4, 8 and 12, `XXXX XXXX XXXX XXXX`
//!
//! Positions past the end of the input are skipped, so partial input formats
//! cleanly while it is being typed. A position equal to the input length
//! still gets its separator: `4111` displays as `4111 `, ready for the next
//! group.
//!
//! # Example
//!
//! ```
//! use card_network::{format::grouped_display, NetworkIdentity};
//!
//! assert_eq!(
//!     grouped_display(NetworkIdentity::Visa, "4111111111111111"),
//!     "4111 1111 1111 1111"
//! );
//! assert_eq!(
//!     grouped_display(NetworkIdentity::Amex, "378282246310005"),
//!     "3782 822463 10005"
//! );
//! assert_eq!(grouped_display(NetworkIdentity::Visa, "41111"), "4111 1");
//! assert_eq!(grouped_display(NetworkIdentity::Visa, "4111"), "4111 ");
//! ```

use crate::NetworkIdentity;

/// Separator used by [`grouped_display`].
pub const DEFAULT_SEPARATOR: char = ' ';

/// Groups `digits` for display using the network's separator positions.
pub fn grouped_display(identity: NetworkIdentity, digits: &str) -> String {
    grouped_display_with_separator(identity, digits, DEFAULT_SEPARATOR)
}

/// Groups `digits` for display with a custom separator.
///
/// # Example
///
/// ```
/// use card_network::{format::grouped_display_with_separator, NetworkIdentity};
///
/// assert_eq!(
///     grouped_display_with_separator(NetworkIdentity::Visa, "4111111111111111", '-'),
///     "4111-1111-1111-1111"
/// );
/// ```
pub fn grouped_display_with_separator(
    identity: NetworkIdentity,
    digits: &str,
    separator: char,
) -> String {
    let indices = identity.group_indices();
    let mut result = String::with_capacity(digits.len() + indices.len() * separator.len_utf8());

    for (position, c) in digits.chars().enumerate() {
        result.push(c);
        if indices.contains(&(position + 1)) {
            result.push(separator);
        }
    }

    result
}

/// Splits `digits` into the groups [`grouped_display`] would draw.
///
/// A group boundary at the end of the input does not open an empty group,
/// so `4111` splits into `["4111"]`.
///
/// ```
/// use card_network::{format::split_into_groups, NetworkIdentity};
///
/// assert_eq!(
///     split_into_groups(NetworkIdentity::Amex, "378282246310005"),
///     vec!["3782", "822463", "10005"]
/// );
/// ```
pub fn split_into_groups(identity: NetworkIdentity, digits: &str) -> Vec<String> {
    let mut groups = Vec::with_capacity(identity.group_indices().len() + 1);
    let mut current = String::new();

    for (position, c) in digits.chars().enumerate() {
        if identity.group_indices().contains(&position) {
            groups.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Removes whitespace and hyphens, the characters grouped display inserts.
///
/// ```
/// use card_network::format::strip_separators;
///
/// assert_eq!(strip_separators("4111 1111-1111 1111"), "4111111111111111");
/// ```
pub fn strip_separators(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}
