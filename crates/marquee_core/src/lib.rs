//! Core domain types for the Marquee booking directory.
//!
//! This crate holds everything about venues, artists, and shows that does
//! not touch storage or HTTP: form payloads and their validation rules,
//! the view models the rendering collaborator consumes, the pure grouping
//! and past/upcoming partition algorithms behind the listing pages, and
//! the legacy genre-string codec kept for imports from the old directory.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod forms;
mod genres;
mod views;

pub use forms::{ArtistForm, ShowForm, VenueForm};
pub use genres::{decode_legacy_genres, encode_legacy_genres};
pub use views::{
    ArtistAppearance, ArtistDetails, ArtistListing, ArtistSummary, CityGroup, Scheduled,
    SearchResults, ShowListing, VenueAppearance, VenueDetails, VenueInCity, VenueSummary,
    group_venues_by_city, partition_shows,
};
