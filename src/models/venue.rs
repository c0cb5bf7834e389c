// src/models/venue.rs
// DOCUMENTATION: Core data structures for venues
// PURPOSE: Venue record, baby-friendly features, rating averages and venue DTOs

use chrono::{DateTime, Utc};
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Baby-friendly facilities a venue may offer
/// DOCUMENTATION: Flattened into the venue JSON, so each flag is a top-level field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BabyFeatures {
    #[serde(default)]
    pub changing_facilities: bool,
    #[serde(default)]
    pub high_chairs: bool,
    #[serde(default)]
    pub pram_access: bool,
    #[serde(default)]
    pub quiet_space: bool,
    #[serde(default)]
    pub breastfeeding_area: bool,
    #[serde(default)]
    pub bottle_warming: bool,
}

/// Name of a single baby-friendly feature, as used by the `features` filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BabyFeature {
    ChangingFacilities,
    HighChairs,
    PramAccess,
    QuietSpace,
    BreastfeedingArea,
    BottleWarming,
}

impl BabyFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            BabyFeature::ChangingFacilities => "changingFacilities",
            BabyFeature::HighChairs => "highChairs",
            BabyFeature::PramAccess => "pramAccess",
            BabyFeature::QuietSpace => "quietSpace",
            BabyFeature::BreastfeedingArea => "breastfeedingArea",
            BabyFeature::BottleWarming => "bottleWarming",
        }
    }

    /// Parse a comma separated list such as `highChairs,pram_access`
    pub fn parse_list(raw: &str) -> Result<Vec<BabyFeature>, String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for BabyFeature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept camelCase, snake_case and kebab-case spellings
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "changingfacilities" => Ok(BabyFeature::ChangingFacilities),
            "highchairs" => Ok(BabyFeature::HighChairs),
            "pramaccess" => Ok(BabyFeature::PramAccess),
            "quietspace" => Ok(BabyFeature::QuietSpace),
            "breastfeedingarea" => Ok(BabyFeature::BreastfeedingArea),
            "bottlewarming" => Ok(BabyFeature::BottleWarming),
            _ => Err(format!("Unknown feature: {}", s)),
        }
    }
}

impl fmt::Display for BabyFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BabyFeatures {
    pub fn has(&self, feature: BabyFeature) -> bool {
        match feature {
            BabyFeature::ChangingFacilities => self.changing_facilities,
            BabyFeature::HighChairs => self.high_chairs,
            BabyFeature::PramAccess => self.pram_access,
            BabyFeature::QuietSpace => self.quiet_space,
            BabyFeature::BreastfeedingArea => self.breastfeeding_area,
            BabyFeature::BottleWarming => self.bottle_warming,
        }
    }
}

/// Per-category average ratings of a venue (1-5 scale)
/// DOCUMENTATION: Recomputed from all reviews every time a review is added
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRatings {
    #[serde(default)]
    pub overall_rating: Option<f64>,
    #[serde(default)]
    pub changing_facilities_rating: Option<f64>,
    #[serde(default)]
    pub high_chairs_rating: Option<f64>,
    #[serde(default)]
    pub pram_access_rating: Option<f64>,
    #[serde(default)]
    pub staff_friendliness_rating: Option<f64>,
    #[serde(default)]
    pub noise_level_rating: Option<f64>,
}

/// Represents a complete venue record held in the store
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Store-assigned identifier
    pub id: i32,

    pub name: String,

    /// Venue type: Café, Restaurant, Play Area, etc.
    #[serde(rename = "type")]
    pub venue_type: String,

    pub address: String,

    pub latitude: f64,
    pub longitude: f64,

    pub phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub photos: Option<Vec<String>>,

    /// Operating hours as a JSON string (e.g. {"monday-friday": "8:00-18:00"})
    pub hours: Option<String>,

    #[serde(flatten)]
    pub features: BabyFeatures,

    #[serde(flatten)]
    pub ratings: VenueRatings,

    /// Number of reviews the averages were computed from
    pub review_count: i32,

    pub verified: bool,

    pub created_at: DateTime<Utc>,
}

impl Venue {
    /// Venue position as a geographic point (x = longitude, y = latitude)
    pub fn location(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Sort key used by every venue listing: best rated first, unrated as 0
    pub fn rating_key(&self) -> f64 {
        self.ratings.overall_rating.unwrap_or(0.0)
    }

    /// Apply a partial update; only provided fields change
    pub fn apply_update(&mut self, req: UpdateVenueRequest) {
        if let Some(name) = req.name {
            self.name = name;
        }
        if let Some(venue_type) = req.venue_type {
            self.venue_type = venue_type;
        }
        if let Some(address) = req.address {
            self.address = address;
        }
        if let Some(latitude) = req.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = req.longitude {
            self.longitude = longitude;
        }
        if req.phone.is_some() {
            self.phone = req.phone;
        }
        if req.website.is_some() {
            self.website = req.website;
        }
        if req.description.is_some() {
            self.description = req.description;
        }
        if req.photos.is_some() {
            self.photos = req.photos;
        }
        if req.hours.is_some() {
            self.hours = req.hours;
        }

        let features = &mut self.features;
        for (target, value) in [
            (&mut features.changing_facilities, req.changing_facilities),
            (&mut features.high_chairs, req.high_chairs),
            (&mut features.pram_access, req.pram_access),
            (&mut features.quiet_space, req.quiet_space),
            (&mut features.breastfeeding_area, req.breastfeeding_area),
            (&mut features.bottle_warming, req.bottle_warming),
        ] {
            if let Some(value) = value {
                *target = value;
            }
        }

        if let Some(verified) = req.verified {
            self.verified = verified;
        }
    }
}

/// Request DTO for creating a new venue
/// DOCUMENTATION: Used by POST /admin/venues and the bundled seed data.
/// Ratings may be pre-filled; they are replaced once the first review arrives.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVenueRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100))]
    pub venue_type: String,

    #[validate(length(min = 1))]
    pub address: String,

    pub latitude: f64,
    pub longitude: f64,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(url)]
    pub website: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub photos: Option<Vec<String>>,

    #[serde(default)]
    pub hours: Option<String>,

    #[serde(flatten)]
    pub features: BabyFeatures,

    #[serde(flatten)]
    pub ratings: VenueRatings,

    #[serde(default)]
    pub verified: bool,
}

/// Request DTO for updating an existing venue
/// DOCUMENTATION: PATCH /admin/venues/{id}. Ratings and review count are derived
/// from reviews and cannot be patched.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVenueRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100))]
    pub venue_type: Option<String>,

    #[validate(length(min = 1))]
    pub address: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub phone: Option<String>,

    #[validate(url)]
    pub website: Option<String>,

    pub description: Option<String>,
    pub photos: Option<Vec<String>>,
    pub hours: Option<String>,

    pub changing_facilities: Option<bool>,
    pub high_chairs: Option<bool>,
    pub pram_access: Option<bool>,
    pub quiet_space: Option<bool>,
    pub breastfeeding_area: Option<bool>,
    pub bottle_warming: Option<bool>,

    pub verified: Option<bool>,
}

/// Query parameters for GET /api/venues
#[derive(Debug, Default, Deserialize)]
pub struct VenueQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,

    /// Exact venue type; disables pagination
    #[serde(rename = "type")]
    pub venue_type: Option<String>,

    /// Case-insensitive text search over name, description and address
    pub q: Option<String>,

    /// Comma separated required features
    pub features: Option<String>,
}

/// Query parameters for GET /api/venues/nearby
/// DOCUMENTATION: Coordinates stay strings so bad input gets a single clear message
#[derive(Debug, Default, Deserialize)]
pub struct NearbyQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,

    /// Search radius in kilometers
    pub radius: Option<String>,
}

/// Filter applied to venue listings
#[derive(Debug, Clone, Default)]
pub struct VenueFilter {
    pub venue_type: Option<String>,
    pub text: Option<String>,
    pub features: Vec<BabyFeature>,
}

impl VenueFilter {
    pub fn by_type(venue_type: &str) -> Self {
        VenueFilter {
            venue_type: Some(venue_type.to_string()),
            ..Default::default()
        }
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        if let Some(ref venue_type) = self.venue_type {
            if &venue.venue_type != venue_type {
                return false;
            }
        }

        if let Some(ref text) = self.text {
            let needle = text.to_lowercase();
            let found = [
                Some(venue.name.as_str()),
                venue.description.as_deref(),
                Some(venue.address.as_str()),
            ]
            .into_iter()
            .flatten()
            .any(|haystack| haystack.to_lowercase().contains(&needle));

            if !found {
                return false;
            }
        }

        self.features.iter().all(|f| venue.features.has(*f))
    }
}

/// Venue returned by the nearby search, with a display distance
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyVenue {
    #[serde(flatten)]
    pub venue: Venue,

    /// Great-circle distance from the search point in kilometers
    pub distance_km: f64,
}
