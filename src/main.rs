// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, in-memory store, and start HTTP server

mod config;
mod db;
mod errors;
mod geo;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::{start_cleanup_task, ReviewRateLimiter};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize logging (config parsing below may already log)
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", config::env::log_filter_from_env());
    }
    env_logger::init();

    // 3. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting toddlespot...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize the in-memory store
    let store = match config::init_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to load seed data: {}", e);
            std::process::exit(1);
        }
    };
    let counts = store.counts().await;
    log::info!(
        "Store ready: {} venues, {} offers, {} users",
        counts.venues,
        counts.offers,
        counts.users
    );

    // 5. Review submission limiter
    let limiter = web::Data::new(ReviewRateLimiter::per_minute(
        config.review_rate_limit_per_minute,
    ));
    log::info!(
        "Review rate limit: {} per user per minute",
        config.review_rate_limit_per_minute
    );

    // Start background cleanup task (runs every 5 minutes)
    start_cleanup_task(limiter.clone().into_inner(), 300);

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let store = web::Data::new(store);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            // Application state (store, config, and limiter)
            .app_data(store.clone())
            .app_data(config.clone())
            .app_data(limiter.clone())
            .app_data(handlers::json_config())
            .app_data(handlers::query_config())
            .app_data(handlers::path_config())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::users_config)
            .configure(handlers::venues_config)
            .configure(handlers::reviews_config)
            .configure(handlers::offers_config)
            .configure(handlers::favorites_config)
            .configure(handlers::admin_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
