// src/models/favorite.rs
// DOCUMENTATION: Favorite records and request/response DTOs
// PURPOSE: Link users to the venues they saved

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Association between a user and a venue they saved
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub venue_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /api/favorites; `userId` defaults to the current user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteRequest {
    #[serde(default)]
    pub user_id: Option<i32>,
    pub venue_id: i32,
}

/// Response of GET /api/favorites/{venueId}
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatus {
    pub venue_id: i32,
    pub is_favorite: bool,
}
