//! View models and the aggregation logic behind the listing pages.
//!
//! Everything here is plain data plus pure functions; the database crate
//! produces the inputs and the rendering collaborator consumes the
//! serialized outputs.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One venue entry in a listing or search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    /// Venue id
    pub id: i32,
    /// Venue display name
    pub name: String,
    /// Count of this venue's shows strictly after the evaluation instant
    pub num_upcoming_shows: i64,
}

/// One artist entry in a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    /// Artist id
    pub id: i32,
    /// Artist display name
    pub name: String,
    /// Count of this artist's shows strictly after the evaluation instant
    pub num_upcoming_shows: i64,
}

/// One artist entry in the flat directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistListing {
    /// Artist id
    pub id: i32,
    /// Artist display name
    pub name: String,
}

/// Venues sharing a city, as one listing-page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityGroup {
    /// City shared by every venue in the group
    pub city: String,
    /// State of the group's city
    pub state: String,
    /// The city's venues, ordered by name
    pub venues: Vec<VenueSummary>,
}

/// Input row for [`group_venues_by_city`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueInCity {
    /// Venue id
    pub id: i32,
    /// Venue display name
    pub name: String,
    /// City the venue is in
    pub city: String,
    /// State of the venue's city
    pub state: String,
    /// Count of the venue's upcoming shows
    pub num_upcoming_shows: i64,
}

/// Coalesce venues sorted by `(city, name)` into one group per city.
///
/// Single streaming pass over the sorted rows: a run of rows sharing a city
/// becomes one [`CityGroup`], and the final group is flushed explicitly
/// after the loop, so no sentinel row is ever involved. Rows must arrive
/// sorted by `(city, name)` for groups to be contiguous; the repository
/// query orders them that way.
///
/// # Examples
///
/// ```
/// use marquee_core::{group_venues_by_city, VenueInCity};
///
/// let rows = vec![
///     VenueInCity {
///         id: 2,
///         name: "The Dueling Pianos Bar".to_string(),
///         city: "New York".to_string(),
///         state: "NY".to_string(),
///         num_upcoming_shows: 0,
///     },
///     VenueInCity {
///         id: 1,
///         name: "The Musical Hop".to_string(),
///         city: "San Francisco".to_string(),
///         state: "CA".to_string(),
///         num_upcoming_shows: 1,
///     },
/// ];
/// let groups = group_venues_by_city(rows);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].city, "New York");
/// ```
pub fn group_venues_by_city(rows: Vec<VenueInCity>) -> Vec<CityGroup> {
    let mut groups: Vec<CityGroup> = Vec::new();
    let mut current: Option<CityGroup> = None;

    for row in rows {
        match current.as_mut() {
            Some(group) if group.city == row.city => {}
            _ => {
                if let Some(finished) = current.take() {
                    groups.push(finished);
                }
                current = Some(CityGroup {
                    city: row.city.clone(),
                    state: row.state.clone(),
                    venues: Vec::new(),
                });
            }
        }
        if let Some(group) = current.as_mut() {
            group.venues.push(VenueSummary {
                id: row.id,
                name: row.name,
                num_upcoming_shows: row.num_upcoming_shows,
            });
        }
    }

    // Explicit end-of-sequence flush for the final group.
    if let Some(finished) = current.take() {
        groups.push(finished);
    }
    groups
}

/// Search response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults<T> {
    /// Number of matches
    pub count: usize,
    /// The matching entries
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    /// Wrap matches in the response envelope.
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// An artist's booking as seen from a venue's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistAppearance {
    /// Booked artist's id
    pub artist_id: i32,
    /// Booked artist's display name
    pub artist_name: String,
    /// Booked artist's promotional image
    pub artist_image_link: Option<String>,
    /// When the show starts
    pub start_time: DateTime<Utc>,
}

/// A venue booking as seen from an artist's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueAppearance {
    /// Hosting venue's id
    pub venue_id: i32,
    /// Hosting venue's display name
    pub venue_name: String,
    /// Hosting venue's promotional image
    pub venue_image_link: Option<String>,
    /// When the show starts
    pub start_time: DateTime<Utc>,
}

/// Anything with a start time that can be split into past and upcoming.
pub trait Scheduled {
    /// When the event starts.
    fn start_time(&self) -> DateTime<Utc>;
}

impl Scheduled for ArtistAppearance {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for VenueAppearance {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// Split shows into `(past, upcoming)` around `now`.
///
/// A show starting exactly at `now` is past; only `start_time > now`
/// counts as upcoming. The classification is computed on every read and
/// never persisted.
pub fn partition_shows<T: Scheduled>(shows: Vec<T>, now: DateTime<Utc>) -> (Vec<T>, Vec<T>) {
    shows.into_iter().partition(|show| show.start_time() <= now)
}

/// Full venue detail page payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetails {
    /// Venue id
    pub id: i32,
    /// Venue display name
    pub name: String,
    /// Ordered genre list
    pub genres: Vec<String>,
    /// Street address
    pub address: String,
    /// City the venue is in
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Contact phone
    pub phone: String,
    /// Venue website URL
    pub website: Option<String>,
    /// Facebook page URL
    pub facebook_link: Option<String>,
    /// Whether the venue is currently seeking talent
    pub seeking_talent: bool,
    /// Free-text pitch shown when seeking talent
    pub seeking_description: Option<String>,
    /// Promotional image URL
    pub image_link: Option<String>,
    /// Shows at or before the evaluation instant
    pub past_shows: Vec<ArtistAppearance>,
    /// Shows strictly after the evaluation instant
    pub upcoming_shows: Vec<ArtistAppearance>,
    /// Length of `past_shows`
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`
    pub upcoming_shows_count: usize,
}

/// Full artist detail page payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetails {
    /// Artist id
    pub id: i32,
    /// Artist display name
    pub name: String,
    /// Ordered genre list
    pub genres: Vec<String>,
    /// Home city
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Contact phone
    pub phone: String,
    /// Artist website URL
    pub website: Option<String>,
    /// Facebook page URL
    pub facebook_link: Option<String>,
    /// Whether the artist is currently seeking venues
    pub seeking_venue: bool,
    /// Free-text pitch shown when seeking venues
    pub seeking_description: Option<String>,
    /// Promotional image URL
    pub image_link: Option<String>,
    /// Shows at or before the evaluation instant
    pub past_shows: Vec<VenueAppearance>,
    /// Shows strictly after the evaluation instant
    pub upcoming_shows: Vec<VenueAppearance>,
    /// Length of `past_shows`
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`
    pub upcoming_shows_count: usize,
}

/// One entry on the shows listing page, ordered by start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    /// Hosting venue's id
    pub venue_id: i32,
    /// Hosting venue's display name
    pub venue_name: String,
    /// Booked artist's id
    pub artist_id: i32,
    /// Booked artist's display name
    pub artist_name: String,
    /// Booked artist's promotional image
    pub artist_image_link: Option<String>,
    /// When the show starts
    pub start_time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn venue(id: i32, name: &str, city: &str, state: &str, upcoming: i64) -> VenueInCity {
        VenueInCity {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            num_upcoming_shows: upcoming,
        }
    }

    #[test]
    fn one_group_per_city() {
        let rows = vec![
            venue(2, "The Dueling Pianos Bar", "New York", "NY", 0),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA", 1),
            venue(1, "The Musical Hop", "San Francisco", "CA", 0),
        ];
        // Repository sorts by (city, name); mirror that here.
        let mut sorted = rows;
        sorted.sort_by(|a, b| (&a.city, &a.name).cmp(&(&b.city, &b.name)));

        let groups = group_venues_by_city(sorted);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].city, "New York");
        assert_eq!(groups[0].venues.len(), 1);
        assert_eq!(groups[1].city, "San Francisco");
        let names: Vec<_> = groups[1].venues.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Park Square Live Music & Coffee", "The Musical Hop"]
        );
    }

    #[test]
    fn final_group_is_flushed_without_a_sentinel() {
        let rows = vec![venue(1, "The Musical Hop", "San Francisco", "CA", 2)];
        let groups = group_venues_by_city(rows);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].venues[0].num_upcoming_shows, 2);
    }

    #[test]
    fn no_venues_means_no_groups() {
        assert!(group_venues_by_city(Vec::new()).is_empty());
    }

    #[test]
    fn partition_puts_boundary_show_in_the_past() {
        let now = Utc.with_ymd_and_hms(2026, 8, 4, 12, 0, 0).unwrap();
        let shows = vec![
            ArtistAppearance {
                artist_id: 4,
                artist_name: "Guns N Petals".to_string(),
                artist_image_link: None,
                start_time: now,
            },
            ArtistAppearance {
                artist_id: 6,
                artist_name: "The Wild Sax Band".to_string(),
                artist_image_link: None,
                start_time: now + chrono::Duration::hours(1),
            },
        ];
        let (past, upcoming) = partition_shows(shows, now);
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].artist_name, "Guns N Petals");
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].artist_name, "The Wild Sax Band");
    }

    #[test]
    fn venue_details_serialize_with_the_website_key() {
        // The renderer reads `website`, not `website_link`, on detail pages.
        let details = VenueDetails {
            id: 1,
            name: "The Musical Hop".to_string(),
            genres: vec!["Jazz".to_string(), "Folk".to_string()],
            address: "1015 Folsom Street".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "123-123-1234".to_string(),
            website: Some("https://www.themusicalhop.com".to_string()),
            facebook_link: None,
            seeking_talent: true,
            seeking_description: Some("Seeking a local artist".to_string()),
            image_link: None,
            past_shows: Vec::new(),
            upcoming_shows: Vec::new(),
            past_shows_count: 0,
            upcoming_shows_count: 0,
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["website"], "https://www.themusicalhop.com");
        assert_eq!(json["genres"][1], "Folk");
        assert_eq!(json["upcoming_shows_count"], 0);
    }

    #[test]
    fn search_results_carry_their_count() {
        let results = SearchResults::new(vec![ArtistSummary {
            id: 6,
            name: "The Wild Sax Band".to_string(),
            num_upcoming_shows: 3,
        }]);
        assert_eq!(results.count, 1);
    }
}
