//! Error to HTTP response mapping.

use crate::Flash;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use marquee_error::{MarqueeError, MarqueeErrorKind};
use serde_json::json;
use tracing::error;

/// Wrapper turning workspace errors into HTTP responses.
///
/// - missing records map to 404
/// - validation failures map to 422 (handlers usually build the richer
///   re-render payload themselves before this fallback applies)
/// - everything else maps to 500 with a failure flash; the cause is
///   logged, never sent to the client
pub struct ApiError {
    error: MarqueeError,
    failure_flash: Option<String>,
}

impl ApiError {
    /// Attach an operation-specific failure flash, shown instead of the
    /// generic notice when the error maps to 500.
    pub fn with_flash(error: impl Into<MarqueeError>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            failure_flash: Some(message.into()),
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<MarqueeError>,
{
    fn from(err: E) -> Self {
        Self {
            error: err.into(),
            failure_flash: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.error.kind() {
            MarqueeErrorKind::Database(db) if db.is_not_found() => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "not found" })),
            )
                .into_response(),
            MarqueeErrorKind::Validation(validation) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": validation.field_errors() })),
            )
                .into_response(),
            kind => {
                error!(%kind, "request failed");
                let message = self
                    .failure_flash
                    .unwrap_or_else(|| "An error occurred. Please try again later.".to_string());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "flash": Flash::error(message) })),
                )
                    .into_response()
            }
        }
    }
}

/// 422 payload re-rendering a rejected submission: the form values to
/// show again, the per-field messages, and a failure flash. Nothing was
/// persisted.
pub(crate) fn rejected_submission<T: serde::Serialize>(
    flash: Flash,
    form: &T,
    errors: marquee_error::ValidationError,
) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "flash": flash,
            "form": form,
            "errors": errors.field_errors(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_error::{DatabaseError, DatabaseErrorKind, ValidationError};

    #[test]
    fn missing_record_maps_to_not_found() {
        let err = ApiError::from(DatabaseError::new(DatabaseErrorKind::NotFound));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn missing_record_ignores_the_failure_flash() {
        let err = ApiError::with_flash(
            DatabaseError::new(DatabaseErrorKind::NotFound),
            "An error occurred. Venue could not be updated.",
        );
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_unprocessable() {
        let mut validation = ValidationError::new();
        validation.push("phone", "must match NNN-NNN-NNNN");
        let err = ApiError::from(validation);
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn persistence_failures_stay_generic() {
        let err = ApiError::from(DatabaseError::new(DatabaseErrorKind::Query(
            "duplicate key value violates unique constraint".to_string(),
        )));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
