// src/handlers/favorites.rs
// DOCUMENTATION: HTTP handlers for favorites
// PURPOSE: Saved venues of the current user

use crate::config::Config;
use crate::db::Store;
use crate::errors::ToddleError;
use crate::models::CreateFavoriteRequest;
use crate::services::FavoriteService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /api/favorites
/// Favorited venues in the order they were saved
pub async fn list_favorites(store: web::Data<Store>, config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(FavoriteService::list(&store, config.mock_user_id).await)
}

/// GET /api/favorites/{venueId}
pub async fn favorite_status(
    store: web::Data<Store>,
    config: web::Data<Config>,
    path: web::Path<i32>,
) -> impl Responder {
    let status = FavoriteService::status(&store, config.mock_user_id, path.into_inner()).await;
    HttpResponse::Ok().json(status)
}

/// POST /api/favorites
/// DOCUMENTATION: userId falls back to the current user
pub async fn add_favorite(
    store: web::Data<Store>,
    config: web::Data<Config>,
    req: web::Json<CreateFavoriteRequest>,
) -> Result<impl Responder, ToddleError> {
    let req = req.into_inner();
    let user_id = req.user_id.unwrap_or(config.mock_user_id);
    let favorite = FavoriteService::add(&store, user_id, req.venue_id).await?;
    Ok(HttpResponse::Created().json(favorite))
}

/// DELETE /api/favorites/{venueId}
pub async fn remove_favorite(
    store: web::Data<Store>,
    config: web::Data<Config>,
    path: web::Path<i32>,
) -> Result<impl Responder, ToddleError> {
    FavoriteService::remove(&store, config.mock_user_id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Favorite removed successfully" })))
}

/// Configuration for favorite routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/favorites")
            .route("", web::get().to(list_favorites))
            .route("", web::post().to(add_favorite))
            .route("/{venue_id}", web::get().to(favorite_status))
            .route("/{venue_id}", web::delete().to(remove_favorite)),
    );
}
