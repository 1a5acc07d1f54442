//! Digit extraction.
//!
//! Phone numbers arrive from user input with arbitrary punctuation, spaces,
//! and country-code prefixes. Every masking and comparison step in this crate
//! works on the digit-only form produced here.

/// Removes every character outside `'0'..='9'` from the input.
///
/// Pure and total: never fails, preserves the relative order of digits, and
/// yields an empty string for digit-free input.
///
/// # Examples
///
/// ```
/// use contactkit::domain::extract_digits;
///
/// assert_eq!(extract_digits("(555) 234-5678"), "5552345678");
/// assert_eq!(extract_digits("+1 555.234.5678"), "15552345678");
/// assert_eq!(extract_digits("no digits here"), "");
/// ```
pub fn extract_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}
