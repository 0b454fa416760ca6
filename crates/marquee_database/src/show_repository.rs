//! Show queries and mutations.
//!
//! Shows are the join entity between venues and artists: created through
//! the booking form, never edited or deleted directly. Referential
//! integrity lives in the schema's foreign keys.

use crate::schema::{artists, shows, venues};
use crate::{DatabaseResult, NewShow, Show};
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use marquee_core::ShowListing;
use marquee_error::DatabaseError;
use tracing::instrument;

/// Every show ordered by start time, annotated with its venue's name and
/// its artist's name and image in one joined query.
#[instrument(skip(conn))]
pub fn list_shows(conn: &mut PgConnection) -> DatabaseResult<Vec<ShowListing>> {
    let rows: Vec<(i32, String, i32, String, Option<String>, DateTime<Utc>)> = shows::table
        .inner_join(venues::table)
        .inner_join(artists::table)
        .order(shows::time.asc())
        .select((
            shows::venue_id,
            venues::name,
            shows::artist_id,
            artists::name,
            artists::image_link,
            shows::time,
        ))
        .load(conn)
        .map_err(DatabaseError::from)?;

    Ok(rows
        .into_iter()
        .map(
            |(venue_id, venue_name, artist_id, artist_name, artist_image_link, start_time)| {
                ShowListing {
                    venue_id,
                    venue_name,
                    artist_id,
                    artist_name,
                    artist_image_link,
                    start_time,
                }
            },
        )
        .collect())
}

/// Book a show.
///
/// # Errors
///
/// A `venue_id` or `artist_id` that references nothing surfaces as
/// `DatabaseErrorKind::ForeignKey` from the constraint check.
#[instrument(skip(conn, show), fields(venue_id = show.venue_id, artist_id = show.artist_id))]
pub fn create_show(conn: &mut PgConnection, show: NewShow) -> DatabaseResult<Show> {
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::insert_into(shows::table)
            .values(&show)
            .returning(Show::as_returning())
            .get_result(conn)
    })
    .map_err(DatabaseError::from)
}
