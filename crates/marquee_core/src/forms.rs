//! Form payloads and field validation.
//!
//! These structs are the wire shape of the create/edit forms. The rendering
//! collaborator submits them form-encoded; every field is defaulted so a
//! missing field surfaces as a per-field "is required" message instead of a
//! deserialization failure. Multi-select genres travel as one
//! comma-separated field.
//!
//! Validation never touches storage: a form that fails [`validate`]
//! produces a [`ValidationError`] carrying every offending field, and the
//! submission is re-rendered without persisting anything.
//!
//! [`validate`]: VenueForm::validate

use chrono::{DateTime, Utc};
use marquee_error::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("phone regex is valid"));
static STATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("state regex is valid"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("link regex is valid"));

/// Submission payload for creating or editing a venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueForm {
    /// Venue display name
    pub name: String,
    /// City the venue is in
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Street address
    pub address: String,
    /// Contact phone, NNN-NNN-NNNN
    pub phone: String,
    /// Comma-separated genre selection
    pub genres: String,
    /// Promotional image URL
    pub image_link: Option<String>,
    /// Facebook page URL
    pub facebook_link: Option<String>,
    /// Venue website URL
    pub website_link: Option<String>,
    /// Whether the venue is currently seeking talent
    pub seeking_talent: bool,
    /// Free-text pitch shown when seeking talent
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// The submitted genres as an ordered list.
    pub fn genre_list(&self) -> Vec<String> {
        split_genres(&self.genres)
    }

    /// Check required fields and value formats.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every field that failed, in
    /// field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "city", &self.city);
        check_state(&mut errors, &self.state);
        require(&mut errors, "address", &self.address);
        check_phone(&mut errors, &self.phone);
        check_link(&mut errors, "image_link", self.image_link.as_deref());
        check_link(&mut errors, "facebook_link", self.facebook_link.as_deref());
        check_link(&mut errors, "website_link", self.website_link.as_deref());
        errors.into_result()
    }
}

/// Submission payload for creating or editing an artist.
///
/// Same shape as [`VenueForm`] minus the street address; artists seek
/// venues rather than talent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistForm {
    /// Artist display name
    pub name: String,
    /// Home city
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Contact phone, NNN-NNN-NNNN
    pub phone: String,
    /// Comma-separated genre selection
    pub genres: String,
    /// Promotional image URL
    pub image_link: Option<String>,
    /// Facebook page URL
    pub facebook_link: Option<String>,
    /// Artist website URL
    pub website_link: Option<String>,
    /// Whether the artist is currently seeking venues to play
    pub seeking_venue: bool,
    /// Free-text pitch shown when seeking venues
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    /// The submitted genres as an ordered list.
    pub fn genre_list(&self) -> Vec<String> {
        split_genres(&self.genres)
    }

    /// Check required fields and value formats.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every field that failed, in
    /// field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "city", &self.city);
        check_state(&mut errors, &self.state);
        check_phone(&mut errors, &self.phone);
        check_link(&mut errors, "image_link", self.image_link.as_deref());
        check_link(&mut errors, "facebook_link", self.facebook_link.as_deref());
        check_link(&mut errors, "website_link", self.website_link.as_deref());
        errors.into_result()
    }
}

/// Submission payload for booking a show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    /// Id of the hosting venue
    pub venue_id: i32,
    /// Id of the booked artist
    pub artist_id: i32,
    /// When the show starts
    pub start_time: Option<DateTime<Utc>>,
}

impl ShowForm {
    /// Check required fields.
    ///
    /// Whether the referenced venue and artist exist is the storage
    /// layer's call, surfaced as a foreign-key violation on insert.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every field that failed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if self.venue_id <= 0 {
            errors.push("venue_id", "must be a positive id");
        }
        if self.artist_id <= 0 {
            errors.push("artist_id", "must be a positive id");
        }
        if self.start_time.is_none() {
            errors.push("start_time", "is required");
        }
        errors.into_result()
    }
}

fn split_genres(genres: &str) -> Vec<String> {
    genres
        .split(',')
        .map(|genre| genre.trim().to_string())
        .filter(|genre| !genre.is_empty())
        .collect()
}

fn require(errors: &mut ValidationError, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, "is required");
    }
}

fn check_state(errors: &mut ValidationError, value: &str) {
    if value.trim().is_empty() {
        errors.push("state", "is required");
    } else if !STATE.is_match(value) {
        errors.push("state", "must be a two-letter state code");
    }
}

fn check_phone(errors: &mut ValidationError, value: &str) {
    if value.trim().is_empty() {
        errors.push("phone", "is required");
    } else if !PHONE.is_match(value) {
        errors.push("phone", "must match NNN-NNN-NNNN");
    }
}

fn check_link(errors: &mut ValidationError, field: &'static str, value: Option<&str>) {
    if let Some(link) = value
        && !link.is_empty()
        && !LINK.is_match(link)
    {
        errors.push(field, "must be an http(s) URL");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_venue() -> VenueForm {
        VenueForm {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            genres: "Jazz,Folk".to_string(),
            website_link: Some("https://www.themusicalhop.com".to_string()),
            ..VenueForm::default()
        }
    }

    #[test]
    fn valid_venue_form_passes() {
        assert!(valid_venue().validate().is_ok());
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let err = VenueForm::default().validate().unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "city", "state", "address", "phone"]);
    }

    #[test]
    fn malformed_phone_is_rejected() {
        let mut form = valid_venue();
        form.phone = "not-a-phone".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field_errors()[0].field, "phone");
    }

    #[test]
    fn lowercase_state_is_rejected() {
        let mut form = valid_venue();
        form.state = "ca".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field_errors()[0].field, "state");
    }

    #[test]
    fn non_http_link_is_rejected() {
        let mut form = valid_venue();
        form.facebook_link = Some("ftp://example.com".to_string());
        let err = form.validate().unwrap_err();
        assert_eq!(err.field_errors()[0].field, "facebook_link");
    }

    #[test]
    fn empty_link_is_not_an_error() {
        let mut form = valid_venue();
        form.image_link = Some(String::new());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn genre_list_splits_and_trims() {
        let form = VenueForm {
            genres: "Jazz, Rock n Roll,,Folk ".to_string(),
            ..valid_venue()
        };
        assert_eq!(form.genre_list(), vec!["Jazz", "Rock n Roll", "Folk"]);
    }

    #[test]
    fn artist_form_has_no_address_requirement() {
        let form = ArtistForm {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            ..ArtistForm::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn show_form_requires_ids_and_time() {
        let err = ShowForm::default().validate().unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["venue_id", "artist_id", "start_time"]);

        let form = ShowForm {
            venue_id: 1,
            artist_id: 4,
            start_time: Some(Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap()),
        };
        assert!(form.validate().is_ok());
    }
}
