//! Router assembly.

use crate::{AppState, artists, shows, venues};
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use serde_json::json;

/// Creates the directory router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/venues", get(venues::list))
        .route("/venues/search", post(venues::search))
        .route(
            "/venues/create",
            get(venues::create_form).post(venues::create),
        )
        .route(
            "/venues/:venue_id",
            get(venues::detail).delete(venues::delete),
        )
        .route(
            "/venues/:venue_id/edit",
            get(venues::edit_form).post(venues::edit),
        )
        .route("/artists", get(artists::list))
        .route("/artists/search", post(artists::search))
        .route(
            "/artists/create",
            get(artists::create_form).post(artists::create),
        )
        .route("/artists/:artist_id", get(artists::detail))
        .route(
            "/artists/:artist_id/edit",
            get(artists::edit_form).post(artists::edit),
        )
        .route("/shows", get(shows::list))
        .route("/shows/create", get(shows::create_form).post(shows::create))
        .fallback(not_found)
        .with_state(state)
}

/// Landing payload.
async fn index() -> impl IntoResponse {
    Json(json!({ "message": "Marquee booking directory" }))
}

/// Unmatched routes.
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
