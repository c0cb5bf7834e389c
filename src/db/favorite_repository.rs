// src/db/favorite_repository.rs
// DOCUMENTATION: Favorite data access over the in-memory store
// PURPOSE: Idempotent add, remove and per-user favorite venues

use crate::db::Store;
use crate::models::{Favorite, Venue};
use chrono::Utc;

pub struct FavoriteRepository;

impl FavoriteRepository {
    /// Favorite linking this user and venue, if any
    pub async fn get_favorite(store: &Store, user_id: i32, venue_id: i32) -> Option<Favorite> {
        store
            .read()
            .await
            .favorites
            .values()
            .find(|f| f.user_id == user_id && f.venue_id == venue_id)
            .cloned()
    }

    /// Favorited venues of a user in the order they were added.
    /// Favorites pointing at venues that no longer exist are skipped.
    pub async fn get_favorites_by_user(store: &Store, user_id: i32) -> Vec<Venue> {
        let state = store.read().await;
        state
            .favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .filter_map(|f| state.venues.get(&f.venue_id).cloned())
            .collect()
    }

    /// Add a favorite; returns the existing one when the pair is already saved
    pub async fn add_favorite(store: &Store, user_id: i32, venue_id: i32) -> Favorite {
        let mut state = store.write().await;

        if let Some(existing) = state
            .favorites
            .values()
            .find(|f| f.user_id == user_id && f.venue_id == venue_id)
        {
            return existing.clone();
        }

        let id = state.next_favorite_id();
        let favorite = Favorite {
            id,
            user_id,
            venue_id,
            created_at: Utc::now(),
        };
        state.favorites.insert(id, favorite.clone());
        log::debug!("User {} favorited venue {}", user_id, venue_id);
        favorite
    }

    /// Remove a favorite; false when there was nothing to remove
    pub async fn remove_favorite(store: &Store, user_id: i32, venue_id: i32) -> bool {
        let mut state = store.write().await;
        let id = state
            .favorites
            .values()
            .find(|f| f.user_id == user_id && f.venue_id == venue_id)
            .map(|f| f.id);

        match id {
            Some(id) => {
                state.favorites.remove(&id);
                log::debug!("User {} unfavorited venue {}", user_id, venue_id);
                true
            }
            None => false,
        }
    }
}
