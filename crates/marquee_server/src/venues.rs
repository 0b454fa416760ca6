//! Venue handlers.

use crate::error::rejected_submission;
use crate::{ApiError, AppState, Flash};
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use marquee_core::{CityGroup, SearchResults, VenueDetails, VenueForm, VenueSummary};
use marquee_database::{self as db, NewVenue, VenueChanges};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// Search form payload, shared by the venue and artist search routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Substring to match against names, case-insensitively
    #[serde(default)]
    pub search_term: String,
}

/// List all venues grouped by city.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CityGroup>>, ApiError> {
    let now = Utc::now();
    let groups = state.blocking(move |conn| db::venues_by_city(conn, now)).await?;
    Ok(Json(groups))
}

/// Search venue names for a case-insensitive substring.
pub async fn search(
    State(state): State<AppState>,
    Form(query): Form<SearchQuery>,
) -> Result<Json<SearchResults<VenueSummary>>, ApiError> {
    let now = Utc::now();
    let results = state
        .blocking(move |conn| db::search_venues(conn, &query.search_term, now))
        .await?;
    Ok(Json(results))
}

/// Venue detail page with shows split into past and upcoming.
pub async fn detail(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
) -> Result<Json<VenueDetails>, ApiError> {
    let now = Utc::now();
    let details = state
        .blocking(move |conn| db::venue_details(conn, venue_id, now))
        .await?;
    Ok(Json(details))
}

/// Blank venue form for the renderer.
pub async fn create_form() -> Json<VenueForm> {
    Json(VenueForm::default())
}

/// Validate a venue submission and persist the new listing.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Response, ApiError> {
    if let Err(errors) = form.validate() {
        let flash = Flash::error(format!(
            "An error occurred. Venue {} could not be listed.",
            form.name
        ));
        return Ok(rejected_submission(flash, &form, errors));
    }

    let new_venue = NewVenue::from(&form);
    let venue = state
        .blocking(move |conn| db::create_venue(conn, new_venue))
        .await
        .map_err(|err| {
            ApiError::with_flash(
                err,
                format!("An error occurred. Venue {} could not be listed.", form.name),
            )
        })?;

    info!(venue.id, "venue listed");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "flash": Flash::success(format!("Venue {} was successfully listed!", venue.name)),
            "venue": venue,
        })),
    )
        .into_response())
}

/// Delete a venue by id, taking its shows with it. Idempotent.
pub async fn delete(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
) -> Result<Response, ApiError> {
    state
        .blocking(move |conn| db::delete_venue(conn, venue_id))
        .await?;
    Ok((
        StatusCode::OK,
        Json(json!({ "flash": Flash::success("Venue was deleted.") })),
    )
        .into_response())
}

/// Current persisted values for prefilling the edit form.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
) -> Result<Response, ApiError> {
    let venue = state
        .blocking(move |conn| db::find_venue(conn, venue_id))
        .await?;
    Ok(Json(json!({ "id": venue.id, "form": VenueForm::from(&venue) })).into_response())
}

/// Apply an edit submission as a full replace of an existing venue.
pub async fn edit(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
    Form(form): Form<VenueForm>,
) -> Result<Response, ApiError> {
    if let Err(errors) = form.validate() {
        // Re-render with the persisted values, not the rejected submission.
        let current = state
            .blocking(move |conn| db::find_venue(conn, venue_id))
            .await?;
        let flash = Flash::error(format!(
            "An error occurred. Venue {} could not be updated.",
            current.name
        ));
        return Ok(rejected_submission(flash, &VenueForm::from(&current), errors));
    }

    let changes = VenueChanges::from(&form);
    let venue = state
        .blocking(move |conn| db::update_venue(conn, venue_id, changes))
        .await
        .map_err(|err| {
            ApiError::with_flash(
                err,
                format!(
                    "An error occurred. Venue {} could not be updated.",
                    form.name
                ),
            )
        })?;

    info!(venue.id, "venue updated");
    Ok(Json(json!({
        "flash": Flash::success(format!("Venue {} was successfully updated!", venue.name)),
        "venue": venue,
    }))
    .into_response())
}
