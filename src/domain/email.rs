//! Email address plausibility checking.
//!
//! A syntactic check only: the pattern accepts addresses that look
//! deliverable without consulting DNS or a mailbox. Deliverability and
//! domain existence are explicitly out of scope.

use once_cell::sync::Lazy;
use regex::Regex;

/// Returns the cached, anchored email pattern.
///
/// Case-insensitive: local part from `[A-Z0-9._%+-]`, domain from
/// `[A-Z0-9.-]`, then a literal dot and a 2-4 letter TLD. Anchored at both
/// ends so the entire input must match.
fn email_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$").expect("Valid email regex")
    });
    &PATTERN
}

/// Tests whether the input is a syntactically plausible email address.
///
/// Empty input is rejected outright. Pure, total, no side effects.
///
/// # Examples
///
/// ```
/// use contactkit::domain::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// assert!(!is_valid_email(""));
/// ```
pub fn is_valid_email(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    email_pattern().is_match(input)
}
