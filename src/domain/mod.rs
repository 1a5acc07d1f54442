//! Core text transformations for contact fields.
//!
//! Everything here is a pure, stateless function: safe to call from any
//! thread, no locking, no shared state. Digit extraction is the helper the
//! mask formatter builds on; email validation stands alone.

pub mod digits;
pub mod email;
pub mod phone;

pub use digits::extract_digits;
pub use email::is_valid_email;
pub use phone::mask_phone;
