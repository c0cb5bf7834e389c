// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and shared extractor configuration

pub mod admin;
pub mod favorites;
pub mod health;
pub mod offers;
pub mod reviews;
pub mod users;
pub mod venues;

pub use admin::config as admin_config;
pub use favorites::config as favorites_config;
pub use health::config as health_config;
pub use offers::config as offers_config;
pub use reviews::config as reviews_config;
pub use users::config as users_config;
pub use venues::config as venues_config;

use crate::errors::ToddleError;
use actix_web::web;

/// Malformed JSON bodies get the standard error envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ToddleError::InvalidInput(err.to_string()).into())
}

/// Malformed query strings get the standard error envelope
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ToddleError::InvalidInput(err.to_string()).into())
}

/// Non-numeric ids in paths are treated as unknown resources
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| ToddleError::NotFound("Resource not found".to_string()).into())
}
