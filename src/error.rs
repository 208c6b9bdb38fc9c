//! Error types for constructing optional values.
//!
//! This module contains the [`Error`] type, returned when a value that is
//! already absent is handed to a constructor that promises presence.
//!
//! # Example
//!
//! ```
//! use presence::{Error, Optional, Result};
//!
//! fn parse_port(raw: Option<u16>) -> Result<Optional<u16>> {
//!     match Optional::from_value(raw) {
//!         Ok(port) => Ok(port),
//!         Err(Error::InvalidConstruction { input }) => {
//!             println!("no port supplied ({input}), falling back to nullable");
//!             Ok(Optional::from_nullable(raw))
//!         }
//!     }
//! }
//!
//! assert!(parse_port(None).unwrap().is_absent());
//! assert!(parse_port(Some(8080)).unwrap().is_present());
//! ```

use std::fmt::{self, Display};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when constructing
/// an [`Optional`](crate::Optional).
///
/// # Variants
///
/// - [`InvalidConstruction`](Error::InvalidConstruction) - a present optional
///   was requested from a value that is itself absent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// A present optional was requested from an absent value.
    ///
    /// Returned by [`Optional::from_value`](crate::Optional::from_value) when
    /// its input is `None`, a null pointer or an empty optional. Callers that
    /// meant to allow absence should use
    /// [`Optional::from_nullable`](crate::Optional::from_nullable) instead.
    /// `input` is the type name of the rejected value.
    InvalidConstruction { input: &'static str },
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidConstruction { input } => write!(
                formatter,
                "cannot construct a present value from an absent `{input}`; use `from_nullable` instead"
            ),
        }
    }
}

impl std::error::Error for Error {}
