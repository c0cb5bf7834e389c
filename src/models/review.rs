// src/models/review.rs
// DOCUMENTATION: Venue reviews written by parents
// PURPOSE: Review record, submission DTO and per-category rating access

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user-submitted review of a venue
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub venue_id: i32,
    pub user_id: i32,
    pub visit_date: Option<DateTime<Utc>>,

    /// Free-form age of the child at the visit (e.g. "6 months")
    pub child_age: Option<String>,

    /// Required overall score (1-5)
    pub overall_rating: i32,
    pub changing_facilities_rating: Option<i32>,
    pub high_chairs_rating: Option<i32>,
    pub pram_access_rating: Option<i32>,
    pub staff_friendliness_rating: Option<i32>,
    pub noise_level_rating: Option<i32>,

    pub content: String,
    pub photos: Option<Vec<String>>,
    pub helpful_votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new review
/// DOCUMENTATION: Body of POST /api/reviews
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub venue_id: i32,
    pub user_id: i32,

    #[serde(default)]
    pub visit_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub child_age: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub overall_rating: i32,

    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub changing_facilities_rating: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub high_chairs_rating: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub pram_access_rating: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub staff_friendliness_rating: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub noise_level_rating: Option<i32>,

    #[validate(length(min = 1, max = 5000))]
    pub content: String,

    #[serde(default)]
    pub photos: Option<Vec<String>>,
}

impl Review {
    /// Build a stored review from a submission
    pub fn from_request(id: i32, req: CreateReviewRequest, created_at: DateTime<Utc>) -> Self {
        Review {
            id,
            venue_id: req.venue_id,
            user_id: req.user_id,
            visit_date: req.visit_date,
            child_age: req.child_age,
            overall_rating: req.overall_rating,
            changing_facilities_rating: req.changing_facilities_rating,
            high_chairs_rating: req.high_chairs_rating,
            pram_access_rating: req.pram_access_rating,
            staff_friendliness_rating: req.staff_friendliness_rating,
            noise_level_rating: req.noise_level_rating,
            content: req.content,
            photos: req.photos,
            helpful_votes: 0,
            created_at,
        }
    }
}
