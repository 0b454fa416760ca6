//! Artist queries and mutations.

use crate::schema::{artists, shows, venues};
use crate::{Artist, ArtistChanges, DatabaseResult, NewArtist};
use chrono::{DateTime, Utc};
use diesel::dsl::count_star;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use marquee_core::{
    ArtistDetails, ArtistListing, ArtistSummary, SearchResults, VenueAppearance, partition_shows,
};
use marquee_error::DatabaseError;
use std::collections::HashMap;
use tracing::instrument;

/// Flat directory listing of every artist.
#[instrument(skip(conn))]
pub fn list_artists(conn: &mut PgConnection) -> DatabaseResult<Vec<ArtistListing>> {
    let rows: Vec<(i32, String)> = artists::table
        .order(artists::name.asc())
        .select((artists::id, artists::name))
        .load(conn)
        .map_err(DatabaseError::from)?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| ArtistListing { id, name })
        .collect())
}

/// Case-insensitive substring search over artist names.
///
/// An empty term matches every artist. Counts use the upcoming direction
/// (`time > now`), consistent with the venue pages.
#[instrument(skip(conn))]
pub fn search_artists(
    conn: &mut PgConnection,
    term: &str,
    now: DateTime<Utc>,
) -> DatabaseResult<SearchResults<ArtistSummary>> {
    let pattern = format!("%{}%", term);
    let matches: Vec<(i32, String)> = artists::table
        .filter(artists::name.ilike(&pattern))
        .order(artists::name.asc())
        .select((artists::id, artists::name))
        .load(conn)
        .map_err(DatabaseError::from)?;

    let counts = upcoming_counts(conn, now)?;
    let data = matches
        .into_iter()
        .map(|(id, name)| ArtistSummary {
            id,
            name,
            num_upcoming_shows: counts.get(&id).copied().unwrap_or(0),
        })
        .collect();

    Ok(SearchResults::new(data))
}

/// Fetch an artist row by id.
///
/// # Errors
///
/// Returns `DatabaseErrorKind::NotFound` when no artist has the id.
pub fn find_artist(conn: &mut PgConnection, id: i32) -> DatabaseResult<Artist> {
    artists::table
        .find(id)
        .select(Artist::as_select())
        .first(conn)
        .map_err(DatabaseError::from)
}

/// Artist detail page: the artist plus their shows joined to the hosting
/// venues, partitioned into past and upcoming around `now`.
#[instrument(skip(conn))]
pub fn artist_details(
    conn: &mut PgConnection,
    id: i32,
    now: DateTime<Utc>,
) -> DatabaseResult<ArtistDetails> {
    let artist = find_artist(conn, id)?;

    let bookings: Vec<(i32, String, Option<String>, DateTime<Utc>)> = shows::table
        .inner_join(venues::table)
        .filter(shows::artist_id.eq(id))
        .order(shows::time.asc())
        .select((venues::id, venues::name, venues::image_link, shows::time))
        .load(conn)
        .map_err(DatabaseError::from)?;

    let appearances = bookings
        .into_iter()
        .map(
            |(venue_id, venue_name, venue_image_link, start_time)| VenueAppearance {
                venue_id,
                venue_name,
                venue_image_link,
                start_time,
            },
        )
        .collect();
    let (past_shows, upcoming_shows) = partition_shows(appearances, now);

    Ok(ArtistDetails {
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website_link,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.currently_seeking,
        seeking_description: artist.seeking_content,
        image_link: artist.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

/// Persist a new artist listing.
#[instrument(skip(conn, artist), fields(name = %artist.name))]
pub fn create_artist(conn: &mut PgConnection, artist: NewArtist) -> DatabaseResult<Artist> {
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::insert_into(artists::table)
            .values(&artist)
            .returning(Artist::as_returning())
            .get_result(conn)
    })
    .map_err(DatabaseError::from)
}

/// Replace every column of an existing artist.
///
/// # Errors
///
/// Returns `DatabaseErrorKind::NotFound` when no artist has the id;
/// nothing is written in that case.
#[instrument(skip(conn, changes))]
pub fn update_artist(
    conn: &mut PgConnection,
    id: i32,
    changes: ArtistChanges,
) -> DatabaseResult<Artist> {
    let _ = find_artist(conn, id)?;

    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::update(artists::table.find(id))
            .set(&changes)
            .returning(Artist::as_returning())
            .get_result(conn)
    })
    .map_err(DatabaseError::from)
}

/// Upcoming-show counts per artist, one grouped aggregate for the whole
/// table.
fn upcoming_counts(
    conn: &mut PgConnection,
    now: DateTime<Utc>,
) -> DatabaseResult<HashMap<i32, i64>> {
    let counts: Vec<(i32, i64)> = shows::table
        .filter(shows::time.gt(now))
        .group_by(shows::artist_id)
        .select((shows::artist_id, count_star()))
        .load(conn)
        .map_err(DatabaseError::from)?;
    Ok(counts.into_iter().collect())
}
