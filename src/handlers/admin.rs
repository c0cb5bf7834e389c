// src/handlers/admin.rs
// DOCUMENTATION: Admin handlers for catalogue management
// PURPOSE: Create and patch venues, publish offers, expose store statistics

use crate::config::Config;
use crate::db::{Store, StoreCounts};
use crate::errors::ToddleError;
use crate::models::{CreateOfferRequest, CreateVenueRequest, UpdateVenueRequest};
use crate::services::{OfferService, VenueService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use std::collections::BTreeMap;

/// Response for the stats endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub counts: StoreCounts,
    /// Number of venues per venue type
    pub venues_by_type: BTreeMap<String, usize>,
    /// Mean overall rating over venues that have one
    pub average_rating: Option<f64>,
}

/// POST /admin/venues
/// Create a venue
///
/// DOCUMENTATION: Requires admin authentication via X-Admin-Token header
pub async fn create_venue(
    store: web::Data<Store>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Json<CreateVenueRequest>,
) -> Result<impl Responder, ToddleError> {
    verify_admin_token(&req, &config)?;

    let venue = VenueService::create_venue(&store, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(venue))
}

/// PATCH /admin/venues/{id}
/// Partial venue update
pub async fn update_venue(
    store: web::Data<Store>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<i32>,
    body: web::Json<UpdateVenueRequest>,
) -> Result<impl Responder, ToddleError> {
    verify_admin_token(&req, &config)?;

    let id = path.into_inner();
    let venue = VenueService::update_venue(&store, id, body.into_inner()).await?;
    log::info!("Admin updated venue {}", id);

    Ok(HttpResponse::Ok().json(venue))
}

/// POST /admin/offers
pub async fn create_offer(
    store: web::Data<Store>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Json<CreateOfferRequest>,
) -> Result<impl Responder, ToddleError> {
    verify_admin_token(&req, &config)?;

    let offer = OfferService::create_offer(&store, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(offer))
}

/// GET /admin/stats
/// Get store statistics
///
/// DOCUMENTATION: Table sizes, venues grouped by type and the mean overall rating
pub async fn store_stats(
    store: web::Data<Store>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, ToddleError> {
    verify_admin_token(&req, &config)?;

    // One guard so counts and groupings describe the same snapshot
    let state = store.read().await;
    let counts = state.counts();

    let mut venues_by_type = BTreeMap::new();
    for venue in state.venues.values() {
        *venues_by_type.entry(venue.venue_type.clone()).or_insert(0) += 1;
    }

    let rated: Vec<f64> = state
        .venues
        .values()
        .filter_map(|v| v.ratings.overall_rating)
        .collect();
    let average_rating = if rated.is_empty() {
        None
    } else {
        Some(rated.iter().sum::<f64>() / rated.len() as f64)
    };

    Ok(HttpResponse::Ok().json(AdminStats {
        counts,
        venues_by_type,
        average_rating,
    }))
}

/// Helper function to verify admin authentication
/// DOCUMENTATION: Checks X-Admin-Token header against configured admin token
fn verify_admin_token(req: &HttpRequest, config: &Config) -> Result<(), ToddleError> {
    let token = req
        .headers()
        .get("X-Admin-Token")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            log::warn!("Admin request without token");
            ToddleError::Unauthorized
        })?;

    if token != config.admin_token {
        log::warn!("Admin request with invalid token");
        return Err(ToddleError::Forbidden);
    }

    Ok(())
}

/// Configuration for admin routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/venues", web::post().to(create_venue))
            .route("/venues/{id}", web::patch().to(update_venue))
            .route("/offers", web::post().to(create_offer))
            .route("/stats", web::get().to(store_stats)),
    );
}
