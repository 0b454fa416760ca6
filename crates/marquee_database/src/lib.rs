//! PostgreSQL integration for the Marquee booking directory.
//!
//! This crate provides the Diesel schema, row models, connection pooling,
//! and the repository functions behind every directory operation: listing
//! and grouping, case-insensitive search, detail views, and the
//! create/update/delete mutations.
//!
//! Repository functions take a `&mut PgConnection` explicitly; the HTTP
//! layer checks one out of the pool per request and the checkout's scope
//! guarantees release on every exit path.
//!
//! # Example
//!
//! ```rust,ignore
//! use marquee_database::{build_pool, venues_by_city};
//!
//! let pool = build_pool(10)?;
//! let mut conn = pool.get()?;
//! let groups = venues_by_city(&mut conn, chrono::Utc::now())?;
//! ```

mod artist_repository;
mod connection;
mod models;
mod show_repository;
mod venue_repository;

// Public module for external access
pub mod schema;

// Re-export connection utilities
pub use connection::{MIGRATIONS, PgPool, build_pool, establish_connection, run_migrations};
pub use diesel::pg::PgConnection;

// Re-export model types
pub use models::{
    Artist, ArtistChanges, NewArtist, NewShow, NewVenue, Show, Venue, VenueChanges,
};

// Re-export repository functions
pub use artist_repository::{
    artist_details, create_artist, find_artist, list_artists, search_artists, update_artist,
};
pub use show_repository::{create_show, list_shows};
pub use venue_repository::{
    create_venue, delete_venue, find_venue, search_venues, update_venue, venue_details,
    venues_by_city,
};

use marquee_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
