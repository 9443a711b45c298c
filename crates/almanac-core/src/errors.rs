//! Error types for almanac-rs.
//!
//! The engine never logs and never panics on bad input; every fallible
//! operation returns one of the variants below.  The `ensure!` macro covers
//! the eager parameter checks performed at construction time.

use thiserror::Error;

/// The top-level error type used throughout almanac-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A construction or generation parameter outside its domain.
    ///
    /// `field` names the offending parameter.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// The parameter that failed validation.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// A query against a month table that holds no such entry, either
    /// because the calendar has not been generated yet or because the key
    /// cannot exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A platform weekday value outside the 0 (Sunday) – 6 (Saturday)
    /// domain handed to the boundary transformation.
    #[error("unknown platform weekday {0}, expected 0..=6")]
    InvalidWeekday(u8),
}

/// Shorthand `Result` type used throughout almanac-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a constructor parameter, returning `Error::Validation` naming
/// the offending field if `$cond` is false.
///
/// # Example
/// ```
/// use almanac_core::ensure;
/// fn checked(year: i32) -> almanac_core::errors::Result<i32> {
///     ensure!((1..=9999).contains(&year), "year", "{year} out of range [1, 9999]");
///     Ok(year)
/// }
/// assert!(checked(2024).is_ok());
/// assert!(checked(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $field:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Validation {
                field: $field,
                reason: format!($($msg)*),
            });
        }
    };
}
