// src/db/review_repository.rs
// DOCUMENTATION: Review data access over the in-memory store
// PURPOSE: Review reads/writes and venue rating recomputation on insert

use crate::db::Store;
use crate::errors::ToddleError;
use crate::models::{summarize, CreateReviewRequest, Review};
use chrono::Utc;

/// Newest first; reviews created in the same instant fall back to higher id first
fn sort_newest_first(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

pub struct ReviewRepository;

impl ReviewRepository {
    /// Get a review by id
    pub async fn get_by_id(store: &Store, id: i32) -> Result<Review, ToddleError> {
        store
            .read()
            .await
            .reviews
            .get(&id)
            .cloned()
            .ok_or_else(|| ToddleError::NotFound("Review not found".to_string()))
    }

    /// Reviews for a venue, newest first
    pub async fn get_reviews_by_venue(store: &Store, venue_id: i32) -> Vec<Review> {
        let mut reviews: Vec<Review> = store
            .read()
            .await
            .reviews
            .values()
            .filter(|r| r.venue_id == venue_id)
            .cloned()
            .collect();

        sort_newest_first(&mut reviews);
        reviews
    }

    /// Reviews written by a user, newest first
    pub async fn get_reviews_by_user(store: &Store, user_id: i32) -> Vec<Review> {
        let mut reviews: Vec<Review> = store
            .read()
            .await
            .reviews
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();

        sort_newest_first(&mut reviews);
        reviews
    }

    /// Create a new review and refresh the venue's averages
    /// DOCUMENTATION: Insert and recomputation share one write lock, so readers
    /// never see a review that is not yet reflected in the venue ratings.
    /// The recomputed averages replace whatever the venue carried before.
    pub async fn create_review(
        store: &Store,
        req: CreateReviewRequest,
    ) -> Result<Review, ToddleError> {
        let mut state = store.write().await;

        if !state.venues.contains_key(&req.venue_id) {
            return Err(ToddleError::NotFound("Venue not found".to_string()));
        }

        let id = state.next_review_id();
        let review = Review::from_request(id, req, Utc::now());
        state.reviews.insert(id, review.clone());

        let summary = summarize(
            state
                .reviews
                .values()
                .filter(|r| r.venue_id == review.venue_id),
        );

        if let Some(venue) = state.venues.get_mut(&review.venue_id) {
            venue.review_count = summary.review_count;
            venue.ratings = summary.ratings;
            log::debug!(
                "Venue {} now has {} reviews (overall {:?})",
                venue.id,
                venue.review_count,
                venue.ratings.overall_rating
            );
        }

        Ok(review)
    }

    /// Add `increment` to a review's helpful votes
    pub async fn update_helpful_votes(
        store: &Store,
        id: i32,
        increment: i32,
    ) -> Result<Review, ToddleError> {
        let mut state = store.write().await;
        let review = state
            .reviews
            .get_mut(&id)
            .ok_or_else(|| ToddleError::NotFound("Review not found".to_string()))?;

        review.helpful_votes = review.helpful_votes.saturating_add(increment).max(0);
        Ok(review.clone())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db::venue_repository::tests::venue_request;
    use crate::db::VenueRepository;

    pub(crate) fn review_request(venue_id: i32, user_id: i32, overall: i32) -> CreateReviewRequest {
        CreateReviewRequest {
            venue_id,
            user_id,
            visit_date: None,
            child_age: Some("9 months".to_string()),
            overall_rating: overall,
            changing_facilities_rating: None,
            high_chairs_rating: None,
            pram_access_rating: None,
            staff_friendliness_rating: None,
            noise_level_rating: None,
            content: "Plenty of room for the pram".to_string(),
            photos: None,
        }
    }

    async fn store_with_venue() -> Store {
        let store = Store::new();
        VenueRepository::create_venue(&store, venue_request("Cozy", "Café", 51.5, -0.1, Some(4.8)))
            .await;
        store
    }

    #[tokio::test]
    async fn test_first_review_replaces_seeded_rating() {
        let store = store_with_venue().await;
        let review = ReviewRepository::create_review(&store, review_request(1, 1, 2))
            .await
            .unwrap();

        assert_eq!(review.id, 1);
        assert_eq!(review.helpful_votes, 0);

        let venue = VenueRepository::get_by_id(&store, 1).await.unwrap();
        assert_eq!(venue.review_count, 1);
        assert_eq!(venue.ratings.overall_rating, Some(2.0));
    }

    #[tokio::test]
    async fn test_running_average_across_reviews() {
        let store = store_with_venue().await;

        let mut first = review_request(1, 1, 5);
        first.high_chairs_rating = Some(4);
        ReviewRepository::create_review(&store, first).await.unwrap();

        let mut second = review_request(1, 2, 3);
        second.high_chairs_rating = Some(2);
        second.noise_level_rating = Some(5);
        ReviewRepository::create_review(&store, second).await.unwrap();

        ReviewRepository::create_review(&store, review_request(1, 3, 4))
            .await
            .unwrap();

        let venue = VenueRepository::get_by_id(&store, 1).await.unwrap();
        assert_eq!(venue.review_count, 3);
        assert_eq!(venue.ratings.overall_rating, Some(4.0));
        // Unscored categories count as 0 against the full review count
        assert_eq!(venue.ratings.high_chairs_rating, Some(2.0));
        assert_eq!(venue.ratings.noise_level_rating, Some(5.0 / 3.0));
        assert_eq!(venue.ratings.pram_access_rating, Some(0.0));
    }

    #[tokio::test]
    async fn test_review_for_unknown_venue_is_rejected() {
        let store = store_with_venue().await;
        let result = ReviewRepository::create_review(&store, review_request(9, 1, 5)).await;

        assert!(matches!(result, Err(ToddleError::NotFound(_))));
        assert!(ReviewRepository::get_by_id(&store, 1).await.is_err());
    }

    #[tokio::test]
    async fn test_reviews_newest_first() {
        let store = store_with_venue().await;
        for user_id in 1..=3 {
            ReviewRepository::create_review(&store, review_request(1, user_id, 4))
                .await
                .unwrap();
        }

        let ids: Vec<i32> = ReviewRepository::get_reviews_by_venue(&store, 1)
            .await
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let by_user = ReviewRepository::get_reviews_by_user(&store, 2).await;
        assert_eq!(by_user.len(), 1);
        assert_eq!(by_user[0].user_id, 2);
    }

    #[tokio::test]
    async fn test_helpful_votes() {
        let store = store_with_venue().await;
        ReviewRepository::create_review(&store, review_request(1, 1, 4))
            .await
            .unwrap();

        ReviewRepository::update_helpful_votes(&store, 1, 1).await.unwrap();
        let review = ReviewRepository::update_helpful_votes(&store, 1, 1).await.unwrap();
        assert_eq!(review.helpful_votes, 2);

        assert!(ReviewRepository::update_helpful_votes(&store, 5, 1).await.is_err());
    }
}
