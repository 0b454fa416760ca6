//! Venue queries and mutations.
//!
//! Every function takes its connection explicitly; the caller owns the
//! checkout and its lifetime, so a request-scoped session is released on
//! every exit path.

use crate::schema::{artists, shows, venues};
use crate::{DatabaseResult, NewVenue, Venue, VenueChanges};
use chrono::{DateTime, Utc};
use diesel::dsl::count_star;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use marquee_core::{
    ArtistAppearance, CityGroup, SearchResults, VenueDetails, VenueInCity, VenueSummary,
    group_venues_by_city, partition_shows,
};
use marquee_error::DatabaseError;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// All venues grouped by city for the directory listing page.
///
/// Venues are ordered by `(city, name)` and coalesced into one group per
/// city; each venue carries its count of shows strictly after `now`.
#[instrument(skip(conn))]
pub fn venues_by_city(
    conn: &mut PgConnection,
    now: DateTime<Utc>,
) -> DatabaseResult<Vec<CityGroup>> {
    let rows: Vec<(i32, String, String, String)> = venues::table
        .order((venues::city.asc(), venues::name.asc()))
        .select((venues::id, venues::name, venues::city, venues::state))
        .load(conn)
        .map_err(DatabaseError::from)?;

    let counts = upcoming_counts(conn, now)?;
    let rows = rows
        .into_iter()
        .map(|(id, name, city, state)| VenueInCity {
            id,
            name,
            city,
            state,
            num_upcoming_shows: counts.get(&id).copied().unwrap_or(0),
        })
        .collect();

    Ok(group_venues_by_city(rows))
}

/// Case-insensitive substring search over venue names.
///
/// An empty term matches every venue. Counts use the same upcoming
/// direction (`time > now`) as the listing page.
#[instrument(skip(conn))]
pub fn search_venues(
    conn: &mut PgConnection,
    term: &str,
    now: DateTime<Utc>,
) -> DatabaseResult<SearchResults<VenueSummary>> {
    let pattern = format!("%{}%", term);
    let matches: Vec<(i32, String)> = venues::table
        .filter(venues::name.ilike(&pattern))
        .order(venues::name.asc())
        .select((venues::id, venues::name))
        .load(conn)
        .map_err(DatabaseError::from)?;

    let counts = upcoming_counts(conn, now)?;
    let data = matches
        .into_iter()
        .map(|(id, name)| VenueSummary {
            id,
            name,
            num_upcoming_shows: counts.get(&id).copied().unwrap_or(0),
        })
        .collect();

    Ok(SearchResults::new(data))
}

/// Fetch a venue row by id.
///
/// # Errors
///
/// Returns `DatabaseErrorKind::NotFound` when no venue has the id.
pub fn find_venue(conn: &mut PgConnection, id: i32) -> DatabaseResult<Venue> {
    venues::table
        .find(id)
        .select(Venue::as_select())
        .first(conn)
        .map_err(DatabaseError::from)
}

/// Venue detail page: the venue plus its shows joined to their artists,
/// partitioned into past and upcoming around `now`.
#[instrument(skip(conn))]
pub fn venue_details(
    conn: &mut PgConnection,
    id: i32,
    now: DateTime<Utc>,
) -> DatabaseResult<VenueDetails> {
    let venue = find_venue(conn, id)?;

    let bookings: Vec<(i32, String, Option<String>, DateTime<Utc>)> = shows::table
        .inner_join(artists::table)
        .filter(shows::venue_id.eq(id))
        .order(shows::time.asc())
        .select((artists::id, artists::name, artists::image_link, shows::time))
        .load(conn)
        .map_err(DatabaseError::from)?;

    let appearances = bookings
        .into_iter()
        .map(
            |(artist_id, artist_name, artist_image_link, start_time)| ArtistAppearance {
                artist_id,
                artist_name,
                artist_image_link,
                start_time,
            },
        )
        .collect();
    let (past_shows, upcoming_shows) = partition_shows(appearances, now);

    Ok(VenueDetails {
        id: venue.id,
        name: venue.name,
        genres: venue.genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website_link,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.currently_seeking,
        seeking_description: venue.seeking_content,
        image_link: venue.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

/// Persist a new venue listing.
#[instrument(skip(conn, venue), fields(name = %venue.name))]
pub fn create_venue(conn: &mut PgConnection, venue: NewVenue) -> DatabaseResult<Venue> {
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::insert_into(venues::table)
            .values(&venue)
            .returning(Venue::as_returning())
            .get_result(conn)
    })
    .map_err(DatabaseError::from)
}

/// Replace every column of an existing venue.
///
/// # Errors
///
/// Returns `DatabaseErrorKind::NotFound` when no venue has the id;
/// nothing is written in that case.
#[instrument(skip(conn, changes))]
pub fn update_venue(
    conn: &mut PgConnection,
    id: i32,
    changes: VenueChanges,
) -> DatabaseResult<Venue> {
    let _ = find_venue(conn, id)?;

    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::update(venues::table.find(id))
            .set(&changes)
            .returning(Venue::as_returning())
            .get_result(conn)
    })
    .map_err(DatabaseError::from)
}

/// Delete a venue by id.
///
/// Idempotent: deleting an id that never existed (or was already deleted)
/// succeeds. Dependent shows go with the venue via the schema's
/// ON DELETE CASCADE.
#[instrument(skip(conn))]
pub fn delete_venue(conn: &mut PgConnection, id: i32) -> DatabaseResult<()> {
    let deleted = diesel::delete(venues::table.find(id))
        .execute(conn)
        .map_err(DatabaseError::from)?;
    debug!(deleted, "venue delete finished");
    Ok(())
}

/// Upcoming-show counts per venue, one grouped aggregate for the whole
/// table.
fn upcoming_counts(
    conn: &mut PgConnection,
    now: DateTime<Utc>,
) -> DatabaseResult<HashMap<i32, i64>> {
    let counts: Vec<(i32, i64)> = shows::table
        .filter(shows::time.gt(now))
        .group_by(shows::venue_id)
        .select((shows::venue_id, count_star()))
        .load(conn)
        .map_err(DatabaseError::from)?;
    Ok(counts.into_iter().collect())
}
