//! Error types for brcal.
//!
//! Every fallible operation in the workspace returns [`Result`] with the
//! single [`Error`] enum defined here. The `ensure!` and `fail!` macros
//! cover the common "check then bail" pattern.

use thiserror::Error;

/// The top-level error type used throughout brcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The first date of a business-day count lies after the last one.
    #[error("invalid range: first date {first} is after last date {last}")]
    InvalidRange {
        /// The first date of the requested range.
        first: String,
        /// The last date of the requested range.
        last: String,
    },

    /// Date construction or arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument, typically from configuration input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build an [`Error::InvalidRange`] from anything printable.
    pub fn invalid_range(first: impl std::fmt::Display, last: impl std::fmt::Display) -> Self {
        Error::InvalidRange {
            first: first.to_string(),
            last: last.to_string(),
        }
    }
}

/// Shorthand `Result` type used throughout brcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use brcal_core::{ensure, errors::Error};
/// fn positive(n: i64) -> brcal_core::errors::Result<i64> {
///     ensure!(n > 0, "n must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use brcal_core::{fail, errors::Error};
/// fn parse_flag(s: &str) -> brcal_core::errors::Result<bool> {
///     match s {
///         "yes" => Ok(true),
///         "no" => Ok(false),
///         other => fail!("unknown flag {other:?}"),
///     }
/// }
/// assert!(parse_flag("yes").unwrap());
/// assert!(matches!(parse_flag("maybe"), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}
