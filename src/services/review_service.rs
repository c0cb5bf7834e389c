// src/services/review_service.rs
// DOCUMENTATION: Business logic for reviews
// PURPOSE: Validate, throttle and store reviews; helpful votes

use crate::db::{ReviewRepository, Store, VenueRepository};
use crate::errors::ToddleError;
use crate::models::{CreateReviewRequest, Review};
use crate::services::ReviewRateLimiter;
use validator::Validate;

pub struct ReviewService;

impl ReviewService {
    /// Submit a review
    /// DOCUMENTATION: Invalid submissions and reviews of unknown venues are
    /// rejected before they count against the user's rate limit
    pub async fn create_review(
        store: &Store,
        limiter: &ReviewRateLimiter,
        req: CreateReviewRequest,
    ) -> Result<Review, ToddleError> {
        req.validate()?;
        if !VenueRepository::exists(store, req.venue_id).await {
            return Err(ToddleError::NotFound("Venue not found".to_string()));
        }
        limiter.check(req.user_id)?;

        let review = ReviewRepository::create_review(store, req).await?;
        log::info!(
            "Review {} added to venue {} by user {} (overall {})",
            review.id,
            review.venue_id,
            review.user_id,
            review.overall_rating
        );
        Ok(review)
    }

    pub async fn get_review(store: &Store, id: i32) -> Result<Review, ToddleError> {
        ReviewRepository::get_by_id(store, id).await
    }

    /// Register one "helpful" vote
    pub async fn mark_helpful(store: &Store, id: i32) -> Result<Review, ToddleError> {
        ReviewRepository::update_helpful_votes(store, id, 1).await
    }

    pub async fn reviews_by_user(store: &Store, user_id: i32) -> Vec<Review> {
        ReviewRepository::get_reviews_by_user(store, user_id).await
    }
}
