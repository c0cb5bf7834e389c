// src/db/seed.rs
// DOCUMENTATION: Bundled demo data
// PURPOSE: Parse data/seed.json and insert its venues and offers into a store

use crate::db::{OfferRepository, Store, VenueRepository};
use crate::models::{CreateOfferRequest, CreateVenueRequest};
use serde::Deserialize;

const SEED_JSON: &str = include_str!("../../data/seed.json");

/// Venues and offers to preload
#[derive(Debug, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub venues: Vec<CreateVenueRequest>,
    #[serde(default)]
    pub offers: Vec<CreateOfferRequest>,
}

impl SeedData {
    /// The demo data compiled into the binary
    pub fn bundled() -> Result<Self, serde_json::Error> {
        serde_json::from_str(SEED_JSON)
    }
}

/// Insert seed records in file order, so ids follow the file
pub async fn load(store: &Store, seed: SeedData) -> (usize, usize) {
    let venue_count = seed.venues.len();
    let offer_count = seed.offers.len();

    for venue in seed.venues {
        VenueRepository::create_venue(store, venue).await;
    }
    for offer in seed.offers {
        OfferRepository::create_offer(store, offer).await;
    }

    (venue_count, offer_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_bundled_seed_parses_and_validates() {
        let seed = SeedData::bundled().unwrap();
        assert_eq!(seed.venues.len(), 3);
        assert_eq!(seed.offers.len(), 4);

        for venue in &seed.venues {
            assert!(venue.validate().is_ok(), "invalid seed venue {}", venue.name);
        }
        for offer in &seed.offers {
            assert!(offer.validate().is_ok(), "invalid seed offer {}", offer.title);
        }
    }

    #[tokio::test]
    async fn test_load_seed() {
        let store = Store::new();
        let (venues, offers) = load(&store, SeedData::bundled().unwrap()).await;

        assert_eq!((venues, offers), (3, 4));

        let cozy = VenueRepository::get_by_id(&store, 1).await.unwrap();
        assert_eq!(cozy.name, "Cozy Corner Café");
        assert!(cozy.features.quiet_space);
        assert_eq!(cozy.ratings.overall_rating, Some(4.8));
        assert_eq!(cozy.review_count, 0);

        let featured = OfferRepository::get_featured_offers(&store).await;
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].provider, "Baby Sensory London");
    }
}
