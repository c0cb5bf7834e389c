// src/handlers/venues.rs
// DOCUMENTATION: HTTP handlers for venue operations
// PURPOSE: Parse requests, call services, return responses

use crate::config::Config;
use crate::db::Store;
use crate::errors::ToddleError;
use crate::models::{NearbyQuery, VenueQuery};
use crate::services::VenueService;
use actix_web::{web, HttpResponse, Responder};

/// GET /api/venues
/// List venues, best rated first
pub async fn list_venues(
    store: web::Data<Store>,
    config: web::Data<Config>,
    query: web::Query<VenueQuery>,
) -> Result<impl Responder, ToddleError> {
    let venues = VenueService::list_venues(&store, &config, query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(venues))
}

/// GET /api/venues/nearby
/// Venues within `radius` km of latitude/longitude
pub async fn nearby_venues(
    store: web::Data<Store>,
    config: web::Data<Config>,
    query: web::Query<NearbyQuery>,
) -> Result<impl Responder, ToddleError> {
    let venues = VenueService::nearby_venues(&store, &config, query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(venues))
}

/// GET /api/venues/map
/// GeoJSON FeatureCollection of all venues
pub async fn venue_map(store: web::Data<Store>) -> impl Responder {
    let collection = VenueService::venue_map(&store).await;
    HttpResponse::Ok()
        .content_type("application/geo+json")
        .json(collection)
}

/// GET /api/venues/{id}
pub async fn get_venue(
    store: web::Data<Store>,
    path: web::Path<i32>,
) -> Result<impl Responder, ToddleError> {
    let venue = VenueService::get_venue(&store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(venue))
}

/// GET /api/venues/{id}/reviews
pub async fn get_venue_reviews(store: web::Data<Store>, path: web::Path<i32>) -> impl Responder {
    let reviews = VenueService::get_venue_reviews(&store, path.into_inner()).await;
    HttpResponse::Ok().json(reviews)
}

/// Configuration for venue routes
/// Fixed segments are registered before `/{id}`
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/venues")
            .route("", web::get().to(list_venues))
            .route("/nearby", web::get().to(nearby_venues))
            .route("/map", web::get().to(venue_map))
            .route("/{id}", web::get().to(get_venue))
            .route("/{id}/reviews", web::get().to(get_venue_reviews)),
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
    async fn test_list_venues() {
        let state = test_state().await;
        let app = test_app!(state, config);

        let req = test::TestRequest::get().uri("/api/venues?limit=2").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let venues = body.as_array().unwrap();
        assert_eq!(venues.len(), 2);
        assert_eq!(venues[0]["name"], "Cozy Corner Café");
        assert_eq!(venues[0]["overallRating"], 4.8);
        assert_eq!(venues[0]["changingFacilities"], true);
    }

    #[actix_web::test]
    async fn test_list_venues_by_type() {
        let state = test_state().await;
        let app = test_app!(state, config);

        let req = test::TestRequest::get()
            .uri("/api/venues?type=Restaurant")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["type"], "Restaurant");
    }

    #[actix_web::test]
    async fn test_bad_limit_is_json_error() {
        let state = test_state().await;
        let app = test_app!(state, config);

        let req = test::TestRequest::get().uri("/api/venues?limit=lots").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[actix_web::test]
    async fn test_nearby() {
        let state = test_state().await;
        let app = test_app!(state, config);

        let req = test::TestRequest::get()
            .uri("/api/venues/nearby?latitude=51.5344&longitude=-0.05&radius=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Green Garden Restaurant");
        assert_eq!(body[0]["distanceKm"], 0.0);
    }

    #[actix_web::test]
    async fn test_nearby_requires_coordinates() {
        let state = test_state().await;
        let app = test_app!(state, config);

        let req = test::TestRequest::get()
            .uri("/api/venues/nearby?latitude=abc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"]["message"],
            "Valid latitude and longitude are required"
        );
    }

    #[actix_web::test]
    async fn test_map_is_geojson() {
        let state = test_state().await;
        let app = test_app!(state, config);

        let req = test::TestRequest::get().uri("/api/venues/map").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["type"], "FeatureCollection");
        assert_eq!(body["features"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_get_venue_and_missing() {
        let state = test_state().await;
        let app = test_app!(state, config);

        let req = test::TestRequest::get().uri("/api/venues/2").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "Little Paws Playcentre");

        let req = test::TestRequest::get().uri("/api/venues/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Venue not found");

        let req = test::TestRequest::get().uri("/api/venues/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_reviews_of_unreviewed_venue_is_empty() {
        let state = test_state().await;
        let app = test_app!(state, config);

        let req = test::TestRequest::get().uri("/api/venues/1/reviews").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!([]));
    }
}
