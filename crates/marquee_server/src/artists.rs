//! Artist handlers.

use crate::error::rejected_submission;
use crate::venues::SearchQuery;
use crate::{ApiError, AppState, Flash};
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use marquee_core::{ArtistDetails, ArtistForm, ArtistListing, ArtistSummary, SearchResults};
use marquee_database::{self as db, ArtistChanges, NewArtist};
use serde_json::json;
use tracing::info;

/// List every artist as a flat directory.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ArtistListing>>, ApiError> {
    let artists = state.blocking(db::list_artists).await?;
    Ok(Json(artists))
}

/// Search artist names for a case-insensitive substring.
pub async fn search(
    State(state): State<AppState>,
    Form(query): Form<SearchQuery>,
) -> Result<Json<SearchResults<ArtistSummary>>, ApiError> {
    let now = Utc::now();
    let results = state
        .blocking(move |conn| db::search_artists(conn, &query.search_term, now))
        .await?;
    Ok(Json(results))
}

/// Artist detail page with shows split into past and upcoming.
pub async fn detail(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
) -> Result<Json<ArtistDetails>, ApiError> {
    let now = Utc::now();
    let details = state
        .blocking(move |conn| db::artist_details(conn, artist_id, now))
        .await?;
    Ok(Json(details))
}

/// Blank artist form for the renderer.
pub async fn create_form() -> Json<ArtistForm> {
    Json(ArtistForm::default())
}

/// Validate an artist submission and persist the new listing.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<Response, ApiError> {
    if let Err(errors) = form.validate() {
        let flash = Flash::error(format!(
            "An error occurred. Artist {} could not be listed.",
            form.name
        ));
        return Ok(rejected_submission(flash, &form, errors));
    }

    let new_artist = NewArtist::from(&form);
    let artist = state
        .blocking(move |conn| db::create_artist(conn, new_artist))
        .await
        .map_err(|err| {
            ApiError::with_flash(
                err,
                format!(
                    "An error occurred. Artist {} could not be listed.",
                    form.name
                ),
            )
        })?;

    info!(artist.id, "artist listed");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "flash": Flash::success(format!("Artist {} was successfully listed!", artist.name)),
            "artist": artist,
        })),
    )
        .into_response())
}

/// Current persisted values for prefilling the edit form.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
) -> Result<Response, ApiError> {
    let artist = state
        .blocking(move |conn| db::find_artist(conn, artist_id))
        .await?;
    Ok(Json(json!({ "id": artist.id, "form": ArtistForm::from(&artist) })).into_response())
}

/// Apply an edit submission as a full replace of an existing artist.
pub async fn edit(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
    Form(form): Form<ArtistForm>,
) -> Result<Response, ApiError> {
    if let Err(errors) = form.validate() {
        // Re-render with the persisted values, not the rejected submission.
        let current = state
            .blocking(move |conn| db::find_artist(conn, artist_id))
            .await?;
        let flash = Flash::error(format!(
            "An error occurred. Artist {} could not be updated.",
            current.name
        ));
        return Ok(rejected_submission(flash, &ArtistForm::from(&current), errors));
    }

    let changes = ArtistChanges::from(&form);
    let artist = state
        .blocking(move |conn| db::update_artist(conn, artist_id, changes))
        .await
        .map_err(|err| {
            ApiError::with_flash(
                err,
                format!(
                    "An error occurred. Artist {} could not be updated.",
                    form.name
                ),
            )
        })?;

    info!(artist.id, "artist updated");
    Ok(Json(json!({
        "flash": Flash::success(format!("Artist {} was successfully updated!", artist.name)),
        "artist": artist,
    }))
    .into_response())
}
