//! Phone number mask formatting.
//!
//! This module renders digit strings as display masks of the form
//! `(123) 456-7890`, with a `+prefix ` lead-in for numbers longer than ten
//! digits. The mask is built by slicing the digit string into fixed groups
//! and joining them with literal separators; offsets are always taken against
//! the unmodified digit string, never against a partially formatted one, so
//! no separator insertion can shift a later group boundary.

use super::extract_digits;

/// Maximum digits rendered as a single national group.
const NATIONAL_LEN: usize = 10;

/// Formats arbitrary user input as a phone-number display mask.
///
/// Non-digit characters are stripped first, so the function accepts partially
/// formatted or pasted input. Total over all strings. The mask round-trips:
/// stripping its punctuation always reproduces the digit string exactly.
///
/// Grouping for up to ten digits:
/// - `""` → `"("` (the empty group still receives the opening parenthesis;
///   long-standing display behavior, kept deliberately)
/// - `"123"` → `"(123"`
/// - `"123456"` → `"(123) 456"`
/// - `"1234567890"` → `"(123) 456-7890"`
///
/// More than ten digits: the final ten are masked as above and the remainder
/// becomes a `+`-prefixed country/carrier group.
///
/// # Examples
///
/// ```
/// use contactkit::domain::mask_phone;
///
/// assert_eq!(mask_phone("555-234-5678"), "(555) 234-5678");
/// assert_eq!(mask_phone("11234567890"), "+1 (123) 456-7890");
/// ```
pub fn mask_phone(input: &str) -> String {
    let digits = extract_digits(input);
    if digits.len() <= NATIONAL_LEN {
        mask_national(&digits)
    } else {
        let split = digits.len() - NATIONAL_LEN;
        let (prefix, last_ten) = digits.split_at(split);
        format!("+{} {}", prefix, mask_national(last_ten))
    }
}

/// Masks a digit string of at most ten digits.
///
/// Groups are fixed slices of the digit string: area `[0..3]`, exchange
/// `[3..6]`, subscriber `[6..10]`. Shorter input truncates the trailing
/// groups and their separators.
fn mask_national(digits: &str) -> String {
    debug_assert!(digits.len() <= NATIONAL_LEN);
    debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));

    match digits.len() {
        0..=3 => format!("({}", digits),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}
