// src/db/store.rs
// DOCUMENTATION: In-memory tables shared by all repositories
// PURPOSE: Memory-resident replacement for a database pool; data is lost on restart

use crate::models::{Favorite, Offer, Review, User, Venue};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Next id per table; ids start at 1 and are never reused
#[derive(Debug)]
struct IdSequences {
    user: i32,
    venue: i32,
    review: i32,
    offer: i32,
    favorite: i32,
}

impl Default for IdSequences {
    fn default() -> Self {
        IdSequences {
            user: 1,
            venue: 1,
            review: 1,
            offer: 1,
            favorite: 1,
        }
    }
}

fn take(seq: &mut i32) -> i32 {
    let id = *seq;
    *seq += 1;
    id
}

/// All tables, keyed by id. BTreeMap keeps iteration in insertion order.
#[derive(Debug, Default)]
pub struct StoreState {
    pub users: BTreeMap<i32, User>,
    pub venues: BTreeMap<i32, Venue>,
    pub reviews: BTreeMap<i32, Review>,
    pub offers: BTreeMap<i32, Offer>,
    pub favorites: BTreeMap<i32, Favorite>,
    ids: IdSequences,
}

impl StoreState {
    pub fn next_user_id(&mut self) -> i32 {
        take(&mut self.ids.user)
    }

    pub fn next_venue_id(&mut self) -> i32 {
        take(&mut self.ids.venue)
    }

    pub fn next_review_id(&mut self) -> i32 {
        take(&mut self.ids.review)
    }

    pub fn next_offer_id(&mut self) -> i32 {
        take(&mut self.ids.offer)
    }

    pub fn next_favorite_id(&mut self) -> i32 {
        take(&mut self.ids.favorite)
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.users.len(),
            venues: self.venues.len(),
            reviews: self.reviews.len(),
            offers: self.offers.len(),
            favorites: self.favorites.len(),
        }
    }
}

/// Row counts per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub users: usize,
    pub venues: usize,
    pub reviews: usize,
    pub offers: usize,
    pub favorites: usize,
}

/// Handle to the shared tables
/// DOCUMENTATION: Cheap to clone; every clone sees the same data.
/// Registered once as web::Data and passed to repositories as `&Store`.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<RwLock<StoreState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().await
    }

    pub async fn counts(&self) -> StoreCounts {
        self.read().await.counts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_sequential_per_table() {
        let store = Store::new();
        let mut state = store.write().await;

        assert_eq!(state.next_venue_id(), 1);
        assert_eq!(state.next_venue_id(), 2);
        assert_eq!(state.next_offer_id(), 1);
        assert_eq!(state.next_venue_id(), 3);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = Store::new();
        let other = store.clone();

        {
            let mut state = store.write().await;
            let id = state.next_user_id();
            assert_eq!(id, 1);
        }

        let mut state = other.write().await;
        assert_eq!(state.next_user_id(), 2);
    }

    #[test]
    fn test_empty_counts() {
        let store = Store::new();
        let counts = tokio_test::block_on(store.counts());
        assert_eq!(counts.venues, 0);
        assert_eq!(counts.favorites, 0);
    }
}
