//! Contact-field formatting and validation.
//!
//! This library covers the text handling a signup or profile form needs:
//! digit extraction, phone-number mask formatting, email plausibility
//! checking, and an async address-verification client backed by a geocoding
//! service.
//!
//! # Features
//!
//! - **Digit Extraction**: strip formatting from user-entered numbers
//! - **Phone Masking**: render digits as `(123) 456-7890`, with `+prefix`
//!   grouping for international lengths
//! - **Email Validation**: anchored, case-insensitive plausibility check
//! - **Address Verification**: precondition-gated geocode lookup with an
//!   explicit timeout
//!
//! # Architecture
//!
//! - [`domain`]: pure text transformations (digits, phone mask, email)
//! - [`geocode`]: the async address-verification collaborator
//! - [`error`]: error types for the fallible surface
//!
//! # Quick Start
//!
//! ```
//! use contactkit::{extract_digits, is_valid_email, mask_phone};
//!
//! assert_eq!(extract_digits("(555) 234-5678"), "5552345678");
//! assert_eq!(mask_phone("5552345678"), "(555) 234-5678");
//! assert!(is_valid_email("user@example.com"));
//! ```
//!
//! # Address Verification
//!
//! ```no_run
//! use contactkit::geocode::{AddressQuery, GeocodeClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeocodeClient::new()?;
//! let query = AddressQuery::new("Boston", "MA", Some(21_340));
//! if let Some(coords) = client.verify(&query).await? {
//!     println!("{}, {}", coords.latitude, coords.longitude);
//! }
//! # Ok(())
//! # }
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod geocode;

// Re-exports for convenient access
pub use domain::{extract_digits, is_valid_email, mask_phone};
pub use error::{ContactError, ContactResult};
pub use geocode::{AddressQuery, Coordinates, GeocodeClient};
