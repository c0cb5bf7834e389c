// src/services/favorite_service.rs
// DOCUMENTATION: Business logic for favorites
// PURPOSE: Check venue existence and translate missing favorites into errors

use crate::db::{FavoriteRepository, Store, VenueRepository};
use crate::errors::ToddleError;
use crate::models::{Favorite, FavoriteStatus, Venue};

pub struct FavoriteService;

impl FavoriteService {
    pub async fn list(store: &Store, user_id: i32) -> Vec<Venue> {
        FavoriteRepository::get_favorites_by_user(store, user_id).await
    }

    pub async fn status(store: &Store, user_id: i32, venue_id: i32) -> FavoriteStatus {
        FavoriteStatus {
            venue_id,
            is_favorite: FavoriteRepository::get_favorite(store, user_id, venue_id)
                .await
                .is_some(),
        }
    }

    /// Save a venue for a user; saving twice returns the original favorite
    pub async fn add(store: &Store, user_id: i32, venue_id: i32) -> Result<Favorite, ToddleError> {
        if !VenueRepository::exists(store, venue_id).await {
            return Err(ToddleError::NotFound("Venue not found".to_string()));
        }

        Ok(FavoriteRepository::add_favorite(store, user_id, venue_id).await)
    }

    pub async fn remove(store: &Store, user_id: i32, venue_id: i32) -> Result<(), ToddleError> {
        if FavoriteRepository::remove_favorite(store, user_id, venue_id).await {
            Ok(())
        } else {
            Err(ToddleError::NotFound("Favorite not found".to_string()))
        }
    }
}
