// src/handlers/users.rs
// DOCUMENTATION: HTTP handlers for users
// PURPOSE: Registration, login and the current user's profile

use crate::config::Config;
use crate::db::Store;
use crate::errors::ToddleError;
use crate::models::{LoginRequest, RegisterRequest, UpdateUserRequest};
use crate::services::{ReviewService, UserService};
use actix_web::{web, HttpResponse, Responder};

/// POST /api/register
pub async fn register(
    store: web::Data<Store>,
    req: web::Json<RegisterRequest>,
) -> Result<impl Responder, ToddleError> {
    let user = UserService::register(&store, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// POST /api/login
pub async fn login(
    store: web::Data<Store>,
    req: web::Json<LoginRequest>,
) -> Result<impl Responder, ToddleError> {
    let user = UserService::login(&store, req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// GET /api/user
pub async fn current_user(
    store: web::Data<Store>,
    config: web::Data<Config>,
) -> Result<impl Responder, ToddleError> {
    let user = UserService::current_user(&store, config.mock_user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// PATCH /api/user
pub async fn update_user(
    store: web::Data<Store>,
    config: web::Data<Config>,
    req: web::Json<UpdateUserRequest>,
) -> Result<impl Responder, ToddleError> {
    let user = UserService::update_profile(&store, config.mock_user_id, req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// GET /api/user/reviews
pub async fn user_reviews(store: web::Data<Store>, config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(ReviewService::reviews_by_user(&store, config.mock_user_id).await)
}

/// Configuration for user routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/register", web::post().to(register))
        .route("/api/login", web::post().to(login))
        .service(
            web::scope("/api/user")
                .route("", web::get().to(current_user))
                .route("", web::patch().to(update_user))
                .route("/reviews", web::get().to(user_reviews)),
        );
}
