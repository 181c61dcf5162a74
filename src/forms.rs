//! Form payloads and validation for venue, artist, and show submissions.
//!
//! Bodies arrive urlencoded with repeated `genres` keys, which the stock
//! urlencoded deserializer cannot collect into a Vec, so `AppForm` parses
//! through `serde_html_form` instead. Validation is enforced: a failed
//! check returns the full list of field messages and nothing is persisted.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::AppError;

/// Urlencoded form extractor backed by `serde_html_form`.
pub struct AppForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(vec![format!("Unreadable form body: {e}")]))?;

        let value = serde_html_form::from_bytes(&bytes)
            .map_err(|e| AppError::Validation(vec![format!("Malformed form submission: {e}")]))?;

        Ok(Self(value))
    }
}

/// Two-letter codes accepted by the state `<select>`.
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

fn checkbox_checked(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some("y" | "on" | "true"))
}

fn empty_to_none(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn validate_phone(phone: &str, errors: &mut Vec<String>) {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let well_formed = phone.chars().all(|c| c.is_ascii_digit() || c == '-');
    if !well_formed || digits != 10 {
        errors.push("Phone must look like 123-456-7890".to_string());
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub seeking_talent: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl VenueForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Name is required".to_string());
        }
        if self.city.trim().is_empty() {
            errors.push("City is required".to_string());
        }
        if !STATES.contains(&self.state.trim()) {
            errors.push("State must be a valid two-letter state code".to_string());
        }
        if self.address.trim().is_empty() {
            errors.push("Address is required".to_string());
        }
        if self.genres.iter().all(|g| g.trim().is_empty()) {
            errors.push("Pick at least one genre".to_string());
        }
        if !self.phone.trim().is_empty() {
            validate_phone(self.phone.trim(), &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn seeking_talent(&self) -> bool {
        checkbox_checked(&self.seeking_talent)
    }

    pub fn genres(&self) -> Vec<String> {
        self.genres
            .iter()
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .collect()
    }

    pub fn phone(&self) -> Option<String> {
        empty_to_none(self.phone.clone())
    }

    pub fn website(&self) -> Option<String> {
        empty_to_none(self.website_link.clone())
    }

    pub fn image_link(&self) -> Option<String> {
        empty_to_none(self.image_link.clone())
    }

    pub fn facebook_link(&self) -> Option<String> {
        empty_to_none(self.facebook_link.clone())
    }

    pub fn seeking_description(&self) -> Option<String> {
        empty_to_none(self.seeking_description.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub seeking_venue: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Name is required".to_string());
        }
        if self.city.trim().is_empty() {
            errors.push("City is required".to_string());
        }
        if !STATES.contains(&self.state.trim()) {
            errors.push("State must be a valid two-letter state code".to_string());
        }
        if self.genres.iter().all(|g| g.trim().is_empty()) {
            errors.push("Pick at least one genre".to_string());
        }
        if !self.phone.trim().is_empty() {
            validate_phone(self.phone.trim(), &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn seeking_venue(&self) -> bool {
        checkbox_checked(&self.seeking_venue)
    }

    pub fn genres(&self) -> Vec<String> {
        self.genres
            .iter()
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .collect()
    }

    pub fn phone(&self) -> Option<String> {
        empty_to_none(self.phone.clone())
    }

    pub fn website(&self) -> Option<String> {
        empty_to_none(self.website_link.clone())
    }

    pub fn image_link(&self) -> Option<String> {
        empty_to_none(self.image_link.clone())
    }

    pub fn facebook_link(&self) -> Option<String> {
        empty_to_none(self.facebook_link.clone())
    }

    pub fn seeking_description(&self) -> Option<String> {
        empty_to_none(self.seeking_description.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

/// A show submission after validation, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<FixedOffset>,
}

impl ShowForm {
    pub fn parsed(&self) -> Result<ParsedShow, Vec<String>> {
        let mut errors = Vec::new();

        let artist_id = match self.artist_id.trim().parse::<i32>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                errors.push("Artist ID must be a positive number".to_string());
                None
            }
        };

        let venue_id = match self.venue_id.trim().parse::<i32>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                errors.push("Venue ID must be a positive number".to_string());
                None
            }
        };

        let start_time = match parse_start_time(self.start_time.trim()) {
            Some(ts) => Some(ts),
            None => {
                errors.push("Start time must be a valid date and time".to_string());
                None
            }
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(ParsedShow {
                    artist_id,
                    venue_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Accepts the browser's `datetime-local` format plus the plain
/// `YYYY-MM-DD HH:MM:SS` spelling. Times are taken as UTC.
fn parse_start_time(raw: &str) -> Option<DateTime<FixedOffset>> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .ok()?;
    Some(naive.and_utc().fixed_offset())
}

impl From<Vec<String>> for AppError {
    fn from(errors: Vec<String>) -> Self {
        AppError::Validation(errors)
    }
}
