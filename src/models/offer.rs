// src/models/offer.rs
// DOCUMENTATION: Promotional offers from baby/toddler providers
// PURPOSE: Offer record, creation DTO and listing query

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A time-bounded promotion tied to a provider
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub provider: String,

    /// Offer type: class, activity, product, meal, etc.
    #[serde(rename = "type")]
    pub offer_type: String,

    /// Age ranges the offer targets (e.g. "0-12 months")
    pub target_ages: Option<Vec<String>>,
    pub location: Option<String>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_to: Option<DateTime<Utc>>,
    pub terms: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl Offer {
    pub fn from_request(id: i32, req: CreateOfferRequest, created_at: DateTime<Utc>) -> Self {
        Offer {
            id,
            title: req.title,
            description: req.description,
            provider: req.provider,
            offer_type: req.offer_type,
            target_ages: req.target_ages,
            location: req.location,
            valid_from: req.valid_from,
            valid_to: req.valid_to,
            terms: req.terms,
            link: req.link,
            image_url: req.image_url,
            featured: req.featured,
            created_at,
        }
    }

    /// Whether `now` falls inside the validity window; a missing bound is open
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.valid_from.map_or(true, |from| from <= now) && self.valid_to.map_or(true, |to| now <= to)
    }
}

/// Request DTO for creating an offer
/// DOCUMENTATION: Used by POST /admin/offers and the bundled seed data
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(length(min = 1, max = 255))]
    pub provider: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100))]
    pub offer_type: String,

    #[serde(default)]
    pub target_ages: Option<Vec<String>>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,

    #[serde(default)]
    pub valid_to: Option<DateTime<Utc>>,

    #[serde(default)]
    pub terms: Option<String>,

    #[serde(default)]
    #[validate(url)]
    pub link: Option<String>,

    #[serde(default)]
    #[validate(url)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

/// Query parameters for GET /api/offers
#[derive(Debug, Default, Deserialize)]
pub struct OfferQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,

    /// Exact offer type; disables pagination
    #[serde(rename = "type")]
    pub offer_type: Option<String>,

    /// Only offers valid right now
    pub active: Option<bool>,
}
