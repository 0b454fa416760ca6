//! Show handlers.

use crate::error::rejected_submission;
use crate::{ApiError, AppState, Flash};
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use marquee_core::{ShowForm, ShowListing};
use marquee_database::{self as db, NewShow};
use serde_json::json;
use tracing::info;

/// List every show ordered by start time.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ShowListing>>, ApiError> {
    let shows = state.blocking(db::list_shows).await?;
    Ok(Json(shows))
}

/// Blank show form for the renderer.
pub async fn create_form() -> Json<ShowForm> {
    Json(ShowForm::default())
}

/// Validate a show submission and book the show.
///
/// A dangling venue or artist id passes validation and is rejected by the
/// storage layer's foreign keys, surfacing as the generic failure flash.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Result<Response, ApiError> {
    if let Err(errors) = form.validate() {
        let flash = Flash::error("An error occurred. Show could not be listed.");
        return Ok(rejected_submission(flash, &form, errors));
    }

    let new_show = NewShow::from(&form);
    let show = state
        .blocking(move |conn| db::create_show(conn, new_show))
        .await
        .map_err(|err| {
            ApiError::with_flash(err, "An error occurred. Show could not be listed.")
        })?;

    info!(show.id, "show listed");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "flash": Flash::success("Show was successfully listed!"),
            "show": show,
        })),
    )
        .into_response())
}
