// src/db/venue_repository.rs
// DOCUMENTATION: Venue data access over the in-memory store
// PURPOSE: Listing, type and proximity queries plus venue writes

use crate::db::Store;
use crate::errors::ToddleError;
use crate::geo;
use crate::models::{CreateVenueRequest, UpdateVenueRequest, Venue, VenueFilter};
use chrono::Utc;
use geo_types::Point;

/// Offset/limit window applied after sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            limit: 20,
            offset: 0,
        }
    }
}

/// Sort best rated first; equal ratings keep id order
pub(crate) fn sort_by_rating(venues: &mut [Venue]) {
    venues.sort_by(|a, b| b.rating_key().total_cmp(&a.rating_key()));
}

pub struct VenueRepository;

impl VenueRepository {
    /// Get a venue by id
    pub async fn get_by_id(store: &Store, id: i32) -> Result<Venue, ToddleError> {
        store
            .read()
            .await
            .venues
            .get(&id)
            .cloned()
            .ok_or_else(|| ToddleError::NotFound("Venue not found".to_string()))
    }

    /// Whether a venue with this id exists
    pub async fn exists(store: &Store, id: i32) -> bool {
        store.read().await.venues.contains_key(&id)
    }

    /// Filtered venues sorted by rating, optionally paginated
    pub async fn list(store: &Store, filter: &VenueFilter, page: Option<Page>) -> Vec<Venue> {
        let mut venues: Vec<Venue> = store
            .read()
            .await
            .venues
            .values()
            .filter(|v| filter.matches(v))
            .cloned()
            .collect();

        sort_by_rating(&mut venues);

        match page {
            Some(page) => venues.into_iter().skip(page.offset).take(page.limit).collect(),
            None => venues,
        }
    }

    /// All venues sorted by rating, paginated
    pub async fn get_venues(store: &Store, page: Page) -> Vec<Venue> {
        Self::list(store, &VenueFilter::default(), Some(page)).await
    }

    /// Venues of exactly this type sorted by rating (not paginated)
    pub async fn get_venues_by_type(store: &Store, venue_type: &str) -> Vec<Venue> {
        Self::list(store, &VenueFilter::by_type(venue_type), None).await
    }

    /// Venues within `radius_km` of `location` by planar approximation, sorted by rating
    pub async fn get_venues_by_location(
        store: &Store,
        location: Point<f64>,
        radius_km: f64,
    ) -> Vec<Venue> {
        let mut venues: Vec<Venue> = store
            .read()
            .await
            .venues
            .values()
            .filter(|v| geo::approx_distance_km(v.location(), location) <= radius_km)
            .cloned()
            .collect();

        sort_by_rating(&mut venues);
        venues
    }

    /// Every venue in id order
    pub async fn get_all(store: &Store) -> Vec<Venue> {
        store.read().await.venues.values().cloned().collect()
    }

    /// Create new venue
    /// DOCUMENTATION: Review count starts at 0 whatever ratings were supplied
    pub async fn create_venue(store: &Store, req: CreateVenueRequest) -> Venue {
        let mut state = store.write().await;
        let id = state.next_venue_id();

        let venue = Venue {
            id,
            name: req.name,
            venue_type: req.venue_type,
            address: req.address,
            latitude: req.latitude,
            longitude: req.longitude,
            phone: req.phone,
            website: req.website,
            description: req.description,
            photos: req.photos,
            hours: req.hours,
            features: req.features,
            ratings: req.ratings,
            review_count: 0,
            verified: req.verified,
            created_at: Utc::now(),
        };

        state.venues.insert(id, venue.clone());
        log::debug!("Created venue {} ({})", id, venue.name);
        venue
    }

    /// Merge provided fields into an existing venue
    pub async fn update_venue(
        store: &Store,
        id: i32,
        req: UpdateVenueRequest,
    ) -> Result<Venue, ToddleError> {
        let mut state = store.write().await;
        let venue = state
            .venues
            .get_mut(&id)
            .ok_or_else(|| ToddleError::NotFound("Venue not found".to_string()))?;

        venue.apply_update(req);
        log::debug!("Updated venue {}", id);
        Ok(venue.clone())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{BabyFeature, BabyFeatures, VenueRatings};

    pub(crate) fn venue_request(
        name: &str,
        venue_type: &str,
        latitude: f64,
        longitude: f64,
        rating: Option<f64>,
    ) -> CreateVenueRequest {
        CreateVenueRequest {
            name: name.to_string(),
            venue_type: venue_type.to_string(),
            address: format!("{} Street, London", name),
            latitude,
            longitude,
            phone: None,
            website: None,
            description: None,
            photos: None,
            hours: None,
            features: BabyFeatures::default(),
            ratings: VenueRatings {
                overall_rating: rating,
                ..Default::default()
            },
            verified: false,
        }
    }

    async fn store_with_venues() -> Store {
        let store = Store::new();
        VenueRepository::create_venue(&store, venue_request("A", "Café", 51.5362, -0.1033, Some(4.0))).await;
        VenueRepository::create_venue(&store, venue_request("B", "Restaurant", 51.5344, -0.0500, None)).await;
        VenueRepository::create_venue(&store, venue_request("C", "Café", 51.5322, -0.1230, Some(4.8))).await;
        VenueRepository::create_venue(&store, venue_request("D", "Café", 48.8566, 2.3522, Some(4.0))).await;
        store
    }

    fn names(venues: &[Venue]) -> Vec<&str> {
        venues.iter().map(|v| v.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_zero_review_count() {
        let store = store_with_venues().await;
        let venue = VenueRepository::get_by_id(&store, 3).await.unwrap();

        assert_eq!(venue.name, "C");
        assert_eq!(venue.review_count, 0);
        assert_eq!(venue.ratings.overall_rating, Some(4.8));
    }

    #[tokio::test]
    async fn test_missing_venue_is_not_found() {
        let store = store_with_venues().await;
        let err = VenueRepository::get_by_id(&store, 99).await.unwrap_err();
        assert!(matches!(err, ToddleError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_venues_sorted_by_rating_then_id() {
        let store = store_with_venues().await;
        let venues = VenueRepository::get_venues(&store, Page::default()).await;
        assert_eq!(names(&venues), vec!["C", "A", "D", "B"]);
    }

    #[tokio::test]
    async fn test_get_venues_pagination() {
        let store = store_with_venues().await;

        let page = VenueRepository::get_venues(&store, Page { limit: 2, offset: 1 }).await;
        assert_eq!(names(&page), vec!["A", "D"]);

        let past_end = VenueRepository::get_venues(&store, Page { limit: 2, offset: 10 }).await;
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_get_venues_by_type_is_exact_and_unpaginated() {
        let store = store_with_venues().await;
        let cafes = VenueRepository::get_venues_by_type(&store, "Café").await;
        assert_eq!(names(&cafes), vec!["C", "A", "D"]);

        assert!(VenueRepository::get_venues_by_type(&store, "café").await.is_empty());
    }

    #[tokio::test]
    async fn test_get_venues_by_location() {
        let store = store_with_venues().await;
        let islington = Point::new(-0.1033, 51.5362);

        // B is ~0.053° east, i.e. ~5.9 km by the planar rule
        let within_5 = VenueRepository::get_venues_by_location(&store, islington, 5.0).await;
        assert_eq!(names(&within_5), vec!["C", "A"]);

        let within_6 = VenueRepository::get_venues_by_location(&store, islington, 6.0).await;
        assert_eq!(names(&within_6), vec!["C", "A", "B"]);

        let zero = VenueRepository::get_venues_by_location(&store, islington, 0.0).await;
        assert_eq!(names(&zero), vec!["A"]);
    }

    #[tokio::test]
    async fn test_list_with_feature_filter() {
        let store = store_with_venues().await;
        let mut req = venue_request("E", "Play Area", 51.5, -0.1, Some(3.0));
        req.features.quiet_space = true;
        VenueRepository::create_venue(&store, req).await;

        let filter = VenueFilter {
            features: vec![BabyFeature::QuietSpace],
            ..Default::default()
        };
        let venues = VenueRepository::list(&store, &filter, Some(Page::default())).await;
        assert_eq!(names(&venues), vec!["E"]);
    }

    #[tokio::test]
    async fn test_update_venue() {
        let store = store_with_venues().await;
        let updated = VenueRepository::update_venue(
            &store,
            2,
            UpdateVenueRequest {
                verified: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert!(updated.verified);
        assert!(VenueRepository::get_by_id(&store, 2).await.unwrap().verified);

        let missing = VenueRepository::update_venue(&store, 42, UpdateVenueRequest::default()).await;
        assert!(missing.is_err());
    }
}
