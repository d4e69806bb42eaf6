//! Luhn (mod 10) checksum.
//!
//! Two entry points: [`is_luhn_valid`] accepts a card number as typed, with
//! spaces or hyphens, and [`validate`] works on already-extracted digit
//! values.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a card number string against the Luhn checksum.
///
/// Whitespace and hyphens are stripped first. An input with no digits left,
/// or with any other character, is reported as invalid rather than
/// rejected with an error.
///
/// # Example
///
/// ```
/// use card_network::is_luhn_valid;
///
/// assert!(is_luhn_valid("4111111111111111"));
/// assert!(is_luhn_valid("4111-1111 1111-1111"));
/// assert!(!is_luhn_valid("4111111111111112"));
/// assert!(!is_luhn_valid(""));
/// assert!(!is_luhn_valid("4111x111111111111"));
/// ```
pub fn is_luhn_valid(input: &str) -> bool {
    let mut digits = Vec::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '0'..='9' => digits.push((c as u8) - b'0'),
            '-' => {}
            c if c.is_whitespace() => {}
            _ => return false,
        }
    }

    validate(&digits)
}

/// Validates a sequence of digit values using the Luhn algorithm.
///
/// # Arguments
///
/// * `digits` - A slice of digits (0-9), not ASCII.
///
/// # Returns
///
/// `true` if the checksum is valid, `false` otherwise. Empty input is invalid.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// # Example
///
/// ```
/// use card_network::luhn::validate;
///
/// assert!(validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
/// assert!(!validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a sequence of digits.
///
/// Values above 9 are not expected; they are folded into 0-9 so the function
/// stays total.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            let digit = digit % 10;
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Computes the check digit that makes `digits` followed by it pass Luhn.
///
/// # Example
///
/// ```
/// use card_network::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Appending a digit shifts every existing digit one position left, so the
    // doubling parity flips relative to compute_checksum.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            let digit = digit % 10;
            if i % 2 == 0 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}
