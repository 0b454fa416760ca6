//! Diesel models for venues, artists, and shows.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use marquee_core::{ArtistForm, ShowForm, VenueForm};
use serde::Serialize;

/// Database row for the venues table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::venues)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub currently_seeking: bool,
    pub seeking_content: Option<String>,
}

/// Insertable struct for listing a new venue.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::venues)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub currently_seeking: bool,
    pub seeking_content: Option<String>,
}

/// Changeset applying an edit submission to a venue row.
///
/// Edits are a full replace: every column is written, and a cleared
/// optional field writes NULL rather than keeping the old value.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::venues)]
#[diesel(treat_none_as_null = true)]
pub struct VenueChanges {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub currently_seeking: bool,
    pub seeking_content: Option<String>,
}

impl From<&VenueForm> for NewVenue {
    fn from(form: &VenueForm) -> Self {
        Self {
            name: form.name.clone(),
            city: form.city.clone(),
            state: form.state.clone(),
            address: form.address.clone(),
            phone: form.phone.clone(),
            image_link: form.image_link.clone(),
            facebook_link: form.facebook_link.clone(),
            website_link: form.website_link.clone(),
            genres: form.genre_list(),
            currently_seeking: form.seeking_talent,
            seeking_content: form.seeking_description.clone(),
        }
    }
}

impl From<&VenueForm> for VenueChanges {
    fn from(form: &VenueForm) -> Self {
        Self {
            name: form.name.clone(),
            city: form.city.clone(),
            state: form.state.clone(),
            address: form.address.clone(),
            phone: form.phone.clone(),
            image_link: form.image_link.clone(),
            facebook_link: form.facebook_link.clone(),
            website_link: form.website_link.clone(),
            genres: form.genre_list(),
            currently_seeking: form.seeking_talent,
            seeking_content: form.seeking_description.clone(),
        }
    }
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: venue.genres.join(","),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            website_link: venue.website_link.clone(),
            seeking_talent: venue.currently_seeking,
            seeking_description: venue.seeking_content.clone(),
        }
    }
}

/// Database row for the artists table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::artists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub currently_seeking: bool,
    pub seeking_content: Option<String>,
}

/// Insertable struct for listing a new artist.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::artists)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub currently_seeking: bool,
    pub seeking_content: Option<String>,
}

/// Changeset applying an edit submission to an artist row.
///
/// Full replace, like [`VenueChanges`].
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::artists)]
#[diesel(treat_none_as_null = true)]
pub struct ArtistChanges {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub currently_seeking: bool,
    pub seeking_content: Option<String>,
}

impl From<&ArtistForm> for NewArtist {
    fn from(form: &ArtistForm) -> Self {
        Self {
            name: form.name.clone(),
            city: form.city.clone(),
            state: form.state.clone(),
            phone: form.phone.clone(),
            image_link: form.image_link.clone(),
            facebook_link: form.facebook_link.clone(),
            website_link: form.website_link.clone(),
            genres: form.genre_list(),
            currently_seeking: form.seeking_venue,
            seeking_content: form.seeking_description.clone(),
        }
    }
}

impl From<&ArtistForm> for ArtistChanges {
    fn from(form: &ArtistForm) -> Self {
        Self {
            name: form.name.clone(),
            city: form.city.clone(),
            state: form.state.clone(),
            phone: form.phone.clone(),
            image_link: form.image_link.clone(),
            facebook_link: form.facebook_link.clone(),
            website_link: form.website_link.clone(),
            genres: form.genre_list(),
            currently_seeking: form.seeking_venue,
            seeking_content: form.seeking_description.clone(),
        }
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.join(","),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website_link.clone(),
            seeking_venue: artist.currently_seeking,
            seeking_description: artist.seeking_content.clone(),
        }
    }
}

/// Database row for the shows table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Associations, Serialize)]
#[diesel(belongs_to(Venue))]
#[diesel(belongs_to(Artist))]
#[diesel(table_name = crate::schema::shows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Show {
    pub id: i32,
    pub venue_id: i32,
    pub artist_id: i32,
    pub time: DateTime<Utc>,
}

/// Insertable struct for booking a new show.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::shows)]
pub struct NewShow {
    pub venue_id: i32,
    pub artist_id: i32,
    pub time: DateTime<Utc>,
}

impl From<&ShowForm> for NewShow {
    fn from(form: &ShowForm) -> Self {
        Self {
            venue_id: form.venue_id,
            artist_id: form.artist_id,
            // Validation rejects a missing start_time before conversion.
            time: form.start_time.unwrap_or_default(),
        }
    }
}
