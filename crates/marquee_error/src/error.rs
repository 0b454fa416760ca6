//! Top-level error wrapper types.

use crate::{ServerError, ValidationError};
#[cfg(feature = "database")]
use crate::DatabaseError;

/// The foundation error enum for the Marquee workspace.
///
/// # Examples
///
/// ```
/// use marquee_error::{MarqueeError, ValidationError};
///
/// let mut validation = ValidationError::new();
/// validation.push("name", "is required");
/// let err: MarqueeError = validation.into();
/// assert!(format!("{}", err).contains("name: is required"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MarqueeErrorKind {
    /// Form validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Marquee error with kind discrimination.
///
/// # Examples
///
/// ```
/// use marquee_error::{MarqueeResult, ServerError, ServerErrorKind};
///
/// fn might_fail() -> MarqueeResult<()> {
///     Err(ServerError::new(ServerErrorKind::Configuration(
///         "PORT is not a number".to_string(),
///     )))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Marquee Error: {}", _0)]
pub struct MarqueeError(Box<MarqueeErrorKind>);

impl MarqueeError {
    /// Create a new error from a kind.
    pub fn new(kind: MarqueeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MarqueeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MarqueeErrorKind
impl<T> From<T> for MarqueeError
where
    T: Into<MarqueeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Marquee operations.
pub type MarqueeResult<T> = std::result::Result<T, MarqueeError>;
