//! Form validation error types.

use serde::Serialize;

/// A single field-level validation failure.
///
/// # Examples
///
/// ```
/// use marquee_error::FieldError;
///
/// let err = FieldError::new("phone", "must match NNN-NNN-NNNN");
/// assert_eq!(format!("{}", err), "phone: must match NNN-NNN-NNNN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::Display)]
#[display("{}: {}", field, message)]
pub struct FieldError {
    /// Name of the offending form field
    pub field: &'static str,
    /// Human-readable message, safe to surface inline next to the field
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Accumulated validation failures for a submitted form.
///
/// Validation errors are user-correctable and never reach the storage
/// layer: a form that fails validation is re-rendered with per-field
/// messages and nothing is persisted.
///
/// # Examples
///
/// ```
/// use marquee_error::ValidationError;
///
/// let mut err = ValidationError::new();
/// assert!(err.is_empty());
/// err.push("name", "is required");
/// err.push("phone", "must match NNN-NNN-NNNN");
/// assert_eq!(err.field_errors().len(), 2);
/// assert!(format!("{}", err).contains("name: is required"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create an empty error accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The accumulated field errors, in submission order.
    pub fn field_errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Ok when empty, otherwise Err(self).
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation Error: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
