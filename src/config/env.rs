// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 5000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Admin authentication token (for venue/offer management)
    pub admin_token: String,

    /// Id of the user treated as logged in
    pub mock_user_id: i32,

    /// Load bundled demo venues and offers on startup
    pub seed_demo_data: bool,

    /// Default page size for listings
    pub default_page_size: usize,

    /// Upper bound for the `limit` query parameter
    pub max_page_size: usize,

    /// Radius used by /venues/nearby when none is given
    pub default_nearby_radius_km: f64,

    /// Review submissions allowed per user per minute
    pub review_rate_limit_per_minute: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 5000,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            admin_token: "admin-token-dev".to_string(),
            mock_user_id: 1,
            seed_demo_data: true,
            default_page_size: 20,
            max_page_size: 100,
            default_nearby_radius_km: 5.0,
            review_rate_limit_per_minute: 10,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        let defaults = Config::default();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or(defaults.server_address),

            server_port: parse_var("SERVER_PORT", defaults.server_port),

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),

            log_level: log_filter_from_env(),

            admin_token: env::var("ADMIN_TOKEN").unwrap_or(defaults.admin_token),

            mock_user_id: parse_var("MOCK_USER_ID", defaults.mock_user_id),

            seed_demo_data: parse_var("SEED_DEMO_DATA", defaults.seed_demo_data),

            default_page_size: parse_var("DEFAULT_PAGE_SIZE", defaults.default_page_size),

            max_page_size: parse_var("MAX_PAGE_SIZE", defaults.max_page_size),

            default_nearby_radius_km: parse_var(
                "DEFAULT_NEARBY_RADIUS_KM",
                defaults.default_nearby_radius_km,
            ),

            review_rate_limit_per_minute: parse_var(
                "REVIEW_RATE_LIMIT_PER_MINUTE",
                defaults.review_rate_limit_per_minute,
            ),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err("DEFAULT_PAGE_SIZE and MAX_PAGE_SIZE must be positive".to_string());
        }

        if self.default_page_size > self.max_page_size {
            return Err("DEFAULT_PAGE_SIZE must not exceed MAX_PAGE_SIZE".to_string());
        }

        if self.default_nearby_radius_km.is_nan() || self.default_nearby_radius_km < 0.0 {
            return Err("DEFAULT_NEARBY_RADIUS_KM must be a non-negative number".to_string());
        }

        if self.review_rate_limit_per_minute == 0 {
            return Err("REVIEW_RATE_LIMIT_PER_MINUTE must be positive".to_string());
        }

        if self.admin_token == "admin-token-dev" && self.environment == "production" {
            log::warn!("ADMIN_TOKEN is the development default in production");
        }

        Ok(())
    }

    /// Clamp a requested page size to the configured bounds
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
    }
}

/// env_logger filter: `LOG_LEVEL` when set and non-empty, otherwise "info"
/// DOCUMENTATION: main.rs uses this to start logging before the rest of the
/// configuration is parsed, so parse warnings are not lost
pub fn log_filter_from_env() -> String {
    env::var("LOG_LEVEL")
        .ok()
        .filter(|level| !level.trim().is_empty())
        .unwrap_or_else(|| Config::default().log_level)
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring unparsable {}={:?}", name, raw);
            default
        }),
        Err(_) => default,
    }
}
