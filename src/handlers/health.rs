// src/handlers/health.rs
// DOCUMENTATION: Liveness endpoint
// PURPOSE: Report service identity and the size of the in-memory tables

use crate::config::Config;
use crate::db::Store;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /health
/// DOCUMENTATION: Table counts show at a glance whether seeding ran
pub async fn health_check(store: web::Data<Store>, config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "toddlespot",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": config.environment,
        "store": store.counts().await,
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{test_app, test_state};
    use actix_web::test;

    #[actix_web::test]
    async fn test_health_reports_seeded_store() {
        let state = test_state().await;
        let app = test_app!(state, config);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "toddlespot");
        assert_eq!(body["environment"], "development");
        assert_eq!(body["store"]["venues"], 3);
        assert_eq!(body["store"]["reviews"], 0);
    }
}
