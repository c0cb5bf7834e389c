// src/handlers/reviews.rs
// DOCUMENTATION: HTTP handlers for review operations
// PURPOSE: Review submission, lookup and helpful votes

use crate::db::Store;
use crate::errors::ToddleError;
use crate::models::CreateReviewRequest;
use crate::services::{ReviewRateLimiter, ReviewService};
use actix_web::{web, HttpResponse, Responder};

/// POST /api/reviews
/// Submit a review; the venue's averages are recomputed
pub async fn create_review(
    store: web::Data<Store>,
    limiter: web::Data<ReviewRateLimiter>,
    req: web::Json<CreateReviewRequest>,
) -> Result<impl Responder, ToddleError> {
    let review = ReviewService::create_review(&store, &limiter, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(review))
}

/// GET /api/reviews/{id}
pub async fn get_review(
    store: web::Data<Store>,
    path: web::Path<i32>,
) -> Result<impl Responder, ToddleError> {
    let review = ReviewService::get_review(&store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(review))
}

/// POST /api/reviews/{id}/helpful
pub async fn mark_helpful(
    store: web::Data<Store>,
    path: web::Path<i32>,
) -> Result<impl Responder, ToddleError> {
    let review = ReviewService::mark_helpful(&store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(review))
}

/// Configuration for review routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/reviews")
            .route("", web::post().to(create_review))
            .route("/{id}", web::get().to(get_review))
            .route("/{id}/helpful", web::post().to(mark_helpful)),
    );
}
