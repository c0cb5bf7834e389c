// src/handlers/offers.rs
// DOCUMENTATION: HTTP handlers for offers
// PURPOSE: Offer listings, featured feed, single offer

use crate::config::Config;
use crate::db::Store;
use crate::errors::ToddleError;
use crate::models::OfferQuery;
use crate::services::OfferService;
use actix_web::{web, HttpResponse, Responder};

/// GET /api/offers
pub async fn list_offers(
    store: web::Data<Store>,
    config: web::Data<Config>,
    query: web::Query<OfferQuery>,
) -> impl Responder {
    let offers = OfferService::list_offers(&store, &config, query.into_inner()).await;
    HttpResponse::Ok().json(offers)
}

/// GET /api/offers/featured
pub async fn featured_offers(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(OfferService::featured_offers(&store).await)
}

/// GET /api/offers/{id}
pub async fn get_offer(
    store: web::Data<Store>,
    path: web::Path<i32>,
) -> Result<impl Responder, ToddleError> {
    let offer = OfferService::get_offer(&store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(offer))
}

/// Configuration for offer routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/offers")
            .route("", web::get().to(list_offers))
            .route("/featured", web::get().to(featured_offers))
            .route("/{id}", web::get().to(get_offer)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{test_app, test_state};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;

    #[actix_web::test]
    async fn test_offers_listing() {
        let state = test_state().await;
        let app = test_app!(state, config);

        let req = test::TestRequest::get().uri("/api/offers?limit=2&offset=1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["title"], "Parent & Baby Yoga - 20% Off");

        let req = test::TestRequest::get().uri("/api/offers?type=class").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["featured"], true);
    }

    #[actix_web::test]
    async fn test_featured_offers() {
        let state = test_state().await;
        let app = test_app!(state, config);

        let req = test::TestRequest::get().uri("/api/offers/featured").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["provider"], "Baby Sensory London");
        assert_eq!(body[0]["targetAges"][0], "0-12 months");
    }

    #[actix_web::test]
    async fn test_get_offer() {
        let state = test_state().await;
        let app = test_app!(state, config);

        let req = test::TestRequest::get().uri("/api/offers/4").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["type"], "activity");

        let req = test::TestRequest::get().uri("/api/offers/40").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
