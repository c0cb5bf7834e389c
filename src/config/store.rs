// src/config/store.rs
// DOCUMENTATION: In-memory store initialization
// PURPOSE: Create the shared store once at startup and optionally seed demo data

use crate::config::Config;
use crate::db::seed::{self, SeedData};
use crate::db::Store;

/// Initialize the in-memory store
/// DOCUMENTATION: Called once during application startup in main.rs.
/// Returns the store handle that every handler shares via web::Data.
pub async fn init_store(config: &Config) -> Result<Store, serde_json::Error> {
    let store = Store::new();

    if config.seed_demo_data {
        let (venues, offers) = seed::load(&store, SeedData::bundled()?).await;
        log::info!("Seeded demo data: {} venues, {} offers", venues, offers);
    } else {
        log::info!("Starting with an empty store (SEED_DEMO_DATA=false)");
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeding_can_be_disabled() {
        let config = Config {
            seed_demo_data: false,
            ..Config::default()
        };
        let store = init_store(&config).await.unwrap();
        assert_eq!(store.counts().await.venues, 0);
    }

    #[tokio::test]
    async fn test_default_store_is_seeded() {
        let store = init_store(&Config::default()).await.unwrap();
        let counts = store.counts().await;
        assert_eq!(counts.venues, 3);
        assert_eq!(counts.offers, 4);
        assert_eq!(counts.users, 0);
    }
}
