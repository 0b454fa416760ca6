//! Tests for the directory repositories.
//!
//! Note: These tests require a running PostgreSQL database reachable via
//! `DATABASE_URL`; migrations are applied by the connection helper. They
//! are ignored by default so the unit suite stays self-contained.

use chrono::{Duration, Utc};
use diesel::prelude::*;
use marquee_database::{
    NewArtist, NewShow, NewVenue, PgConnection, create_artist, create_show, create_venue,
    delete_venue, establish_connection, find_venue, run_migrations, schema, search_venues,
    update_venue, venue_details, venues_by_city, VenueChanges,
};
use marquee_error::DatabaseErrorKind;

/// Create a test database connection with migrations applied.
fn create_test_connection() -> PgConnection {
    dotenvy::dotenv().ok();
    let mut conn =
        establish_connection().expect("Failed to establish test database connection");
    run_migrations(&mut conn).expect("Failed to apply migrations");
    conn
}

/// Helper to create a venue row with the given name and city.
fn test_venue(name: &str, city: &str) -> NewVenue {
    NewVenue {
        name: name.to_string(),
        city: city.to_string(),
        state: "CA".to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        image_link: None,
        facebook_link: None,
        website_link: Some("https://www.themusicalhop.com".to_string()),
        genres: vec!["Jazz".to_string(), "Folk".to_string()],
        currently_seeking: false,
        seeking_content: None,
    }
}

/// Helper to create an artist row with the given name.
fn test_artist(name: &str) -> NewArtist {
    NewArtist {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        image_link: None,
        facebook_link: None,
        website_link: None,
        genres: vec!["Rock n Roll".to_string()],
        currently_seeking: true,
        seeking_content: Some("Looking for shows in the Bay Area".to_string()),
    }
}

/// Helper to clean up rows created by a test, venues first so their shows
/// cascade away before the referenced artists go.
fn cleanup(conn: &mut PgConnection, venue_names: &[&str], artist_names: &[&str]) {
    for name in venue_names {
        diesel::delete(schema::venues::table.filter(schema::venues::name.eq(name)))
            .execute(conn)
            .unwrap();
    }
    for name in artist_names {
        diesel::delete(schema::artists::table.filter(schema::artists::name.eq(name)))
            .execute(conn)
            .unwrap();
    }
}

#[test]
#[ignore = "requires a running PostgreSQL database"]
fn venue_round_trip_preserves_genre_order() {
    let mut conn = create_test_connection();
    let name = "__test_round_trip_venue";
    cleanup(&mut conn, &[name], &[]);

    let created = create_venue(&mut conn, test_venue(name, "San Francisco")).unwrap();
    let fetched = find_venue(&mut conn, created.id).unwrap();
    assert_eq!(fetched.genres, vec!["Jazz", "Folk"]);

    cleanup(&mut conn, &[name], &[]);
}

#[test]
#[ignore = "requires a running PostgreSQL database"]
fn update_replaces_every_column() {
    let mut conn = create_test_connection();
    let name = "__test_update_venue";
    cleanup(&mut conn, &[name], &[]);

    let created = create_venue(&mut conn, test_venue(name, "San Francisco")).unwrap();
    let changes = VenueChanges {
        name: name.to_string(),
        city: "Oakland".to_string(),
        state: "CA".to_string(),
        address: "34 Whiskey Moore Ave".to_string(),
        phone: "415-000-1234".to_string(),
        image_link: None,
        facebook_link: None,
        // Full replace: clearing the link must write NULL
        website_link: None,
        genres: vec!["Classical".to_string()],
        currently_seeking: true,
        seeking_content: Some("Weekly residency slot open".to_string()),
    };
    let updated = update_venue(&mut conn, created.id, changes).unwrap();
    assert_eq!(updated.city, "Oakland");
    assert_eq!(updated.website_link, None);
    assert_eq!(updated.genres, vec!["Classical"]);

    cleanup(&mut conn, &[name], &[]);
}

#[test]
#[ignore = "requires a running PostgreSQL database"]
fn update_of_missing_id_is_not_found() {
    let mut conn = create_test_connection();
    let changes = VenueChanges::from(&marquee_core::VenueForm::default());
    let err = update_venue(&mut conn, i32::MAX, changes).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
#[ignore = "requires a running PostgreSQL database"]
fn delete_is_idempotent() {
    let mut conn = create_test_connection();
    let name = "__test_delete_venue";
    cleanup(&mut conn, &[name], &[]);

    let created = create_venue(&mut conn, test_venue(name, "San Francisco")).unwrap();
    delete_venue(&mut conn, created.id).unwrap();
    // Second delete of the same id is a no-op, not an error
    delete_venue(&mut conn, created.id).unwrap();
    assert!(find_venue(&mut conn, created.id).unwrap_err().is_not_found());
}

#[test]
#[ignore = "requires a running PostgreSQL database"]
fn listing_groups_venues_by_city() {
    let mut conn = create_test_connection();
    let names = [
        "__test_group_sf_a",
        "__test_group_sf_b",
        "__test_group_ny",
    ];
    cleanup(&mut conn, &names, &[]);

    create_venue(&mut conn, test_venue(names[0], "San Francisco")).unwrap();
    create_venue(&mut conn, test_venue(names[1], "San Francisco")).unwrap();
    let mut ny = test_venue(names[2], "New York");
    ny.state = "NY".to_string();
    create_venue(&mut conn, ny).unwrap();

    let groups = venues_by_city(&mut conn, Utc::now()).unwrap();
    let sf_groups: Vec<_> = groups
        .iter()
        .filter(|g| g.venues.iter().any(|v| v.name.starts_with("__test_group_sf")))
        .collect();
    assert_eq!(sf_groups.len(), 1, "one group per city");
    assert_eq!(sf_groups[0].city, "San Francisco");
    assert!(
        sf_groups[0]
            .venues
            .iter()
            .filter(|v| v.name.starts_with("__test_group_sf"))
            .count()
            == 2
    );
    assert!(
        groups
            .iter()
            .any(|g| g.city == "New York" && g.venues.iter().any(|v| v.name == names[2]))
    );

    cleanup(&mut conn, &names, &[]);
}

#[test]
#[ignore = "requires a running PostgreSQL database"]
fn search_is_case_insensitive_substring() {
    let mut conn = create_test_connection();
    let name = "__test_search_The Musical Hop";
    cleanup(&mut conn, &[name], &[]);
    create_venue(&mut conn, test_venue(name, "San Francisco")).unwrap();

    let results = search_venues(&mut conn, "musical hop", Utc::now()).unwrap();
    assert!(results.data.iter().any(|v| v.name == name));

    // Empty term matches everything
    let all = search_venues(&mut conn, "", Utc::now()).unwrap();
    assert!(all.count >= results.count);

    cleanup(&mut conn, &[name], &[]);
}

#[test]
#[ignore = "requires a running PostgreSQL database"]
fn details_partition_shows_and_count_upcoming() {
    let mut conn = create_test_connection();
    let venue_name = "__test_partition_venue";
    let artist_name = "__test_partition_artist";
    cleanup(&mut conn, &[venue_name], &[artist_name]);

    let venue = create_venue(&mut conn, test_venue(venue_name, "San Francisco")).unwrap();
    let artist = create_artist(&mut conn, test_artist(artist_name)).unwrap();
    let now = Utc::now();
    create_show(
        &mut conn,
        NewShow {
            venue_id: venue.id,
            artist_id: artist.id,
            time: now - Duration::days(7),
        },
    )
    .unwrap();
    create_show(
        &mut conn,
        NewShow {
            venue_id: venue.id,
            artist_id: artist.id,
            time: now + Duration::days(7),
        },
    )
    .unwrap();

    let details = venue_details(&mut conn, venue.id, now).unwrap();
    assert_eq!(details.past_shows_count, 1);
    assert_eq!(details.upcoming_shows_count, 1);
    assert_eq!(details.upcoming_shows[0].artist_name, artist_name);

    // Search counts agree with the strict time > now rule
    let results = search_venues(&mut conn, venue_name, now).unwrap();
    assert_eq!(results.data[0].num_upcoming_shows, 1);

    cleanup(&mut conn, &[venue_name], &[artist_name]);
}

#[test]
#[ignore = "requires a running PostgreSQL database"]
fn show_with_dangling_references_is_rejected() {
    let mut conn = create_test_connection();
    let err = create_show(
        &mut conn,
        NewShow {
            venue_id: i32::MAX,
            artist_id: i32::MAX,
            time: Utc::now(),
        },
    )
    .unwrap_err();
    assert!(matches!(err.kind, DatabaseErrorKind::ForeignKey(_)));
}

#[test]
#[ignore = "requires a running PostgreSQL database"]
fn deleting_a_venue_cascades_its_shows() {
    let mut conn = create_test_connection();
    let venue_name = "__test_cascade_venue";
    let artist_name = "__test_cascade_artist";
    cleanup(&mut conn, &[venue_name], &[artist_name]);

    let venue = create_venue(&mut conn, test_venue(venue_name, "San Francisco")).unwrap();
    let artist = create_artist(&mut conn, test_artist(artist_name)).unwrap();
    create_show(
        &mut conn,
        NewShow {
            venue_id: venue.id,
            artist_id: artist.id,
            time: Utc::now() + Duration::days(1),
        },
    )
    .unwrap();

    delete_venue(&mut conn, venue.id).unwrap();

    let orphaned: i64 = schema::shows::table
        .filter(schema::shows::venue_id.eq(venue.id))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(orphaned, 0);

    cleanup(&mut conn, &[venue_name], &[artist_name]);
}
