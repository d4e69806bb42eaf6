//! Masked display of card numbers.
//!
//! A masked display is a fixed label followed by the visible tail of the
//! number, e.g. `****1111`. Only the last four digits are ever shown.

/// Number of trailing digits left visible.
pub const VISIBLE_DIGIT_COUNT: usize = 4;

/// Label placed in front of the visible digits by default.
pub const DEFAULT_MASK_LABEL: &str = "****";

/// Character a pre-masked number uses in place of hidden digits.
pub const MASK_CHAR: char = '*';

/// Returns the visible tail of a card number.
///
/// - All-digit input yields its last four digits, or the whole input when it
///   is shorter than that. Any Unicode numeral counts as a digit, so
///   Arabic-Indic input is cut the same way.
/// - Input that is already masked (e.g. `************1111`) yields the input
///   with the mask characters removed.
///
/// # Example
///
/// ```
/// use card_network::mask::last_digits;
///
/// assert_eq!(last_digits("4111111111111234"), "1234");
/// assert_eq!(last_digits("************1234"), "1234");
/// assert_eq!(last_digits("12"), "12");
/// assert_eq!(last_digits(""), "");
/// ```
pub fn last_digits(digits: &str) -> String {
    if digits.chars().all(char::is_numeric) {
        let start = digits
            .char_indices()
            .rev()
            .nth(VISIBLE_DIGIT_COUNT - 1)
            .map_or(0, |(index, _)| index);
        digits[start..].to_string()
    } else {
        digits.chars().filter(|&c| c != MASK_CHAR).collect()
    }
}

/// Builds a masked display: `prefix_label` followed by [`last_digits`].
///
/// No minimum length is enforced; short input is shown as far as it goes.
///
/// # Example
///
/// ```
/// use card_network::masked_display;
///
/// assert_eq!(masked_display("****", "4111111111111111"), "****1111");
/// assert_eq!(masked_display("•••• ", "************0005"), "•••• 0005");
/// ```
pub fn masked_display(prefix_label: &str, digits: &str) -> String {
    let tail = last_digits(digits);
    let mut result = String::with_capacity(prefix_label.len() + tail.len());
    result.push_str(prefix_label);
    result.push_str(&tail);
    result
}

/// [`masked_display`] with [`DEFAULT_MASK_LABEL`].
#[inline]
pub fn masked_display_default(digits: &str) -> String {
    masked_display(DEFAULT_MASK_LABEL, digits)
}
