// src/services/venue_service.rs
// DOCUMENTATION: Business logic for venues
// PURPOSE: Intermediary between handlers and repository: query parsing, proximity, map feed

use crate::config::Config;
use crate::db::{Page, ReviewRepository, Store, VenueRepository};
use crate::errors::ToddleError;
use crate::geo;
use crate::models::{
    BabyFeature, CreateVenueRequest, NearbyQuery, NearbyVenue, Review, UpdateVenueRequest, Venue,
    VenueFilter, VenueQuery,
};
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject};
use validator::Validate;

pub struct VenueService;

impl VenueService {
    /// List venues for GET /api/venues
    /// DOCUMENTATION: A `type` filter returns every match unpaginated; otherwise
    /// limit/offset apply after sorting by rating
    pub async fn list_venues(
        store: &Store,
        config: &Config,
        query: VenueQuery,
    ) -> Result<Vec<Venue>, ToddleError> {
        let features = match query.features.as_deref() {
            Some(raw) => BabyFeature::parse_list(raw).map_err(ToddleError::InvalidInput)?,
            None => Vec::new(),
        };

        let filter = VenueFilter {
            venue_type: query.venue_type.filter(|t| !t.is_empty()),
            text: query
                .q
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
            features,
        };

        let page = Page {
            limit: config.page_size(query.limit),
            offset: query.offset.unwrap_or(0),
        };

        let venues = if filter.text.is_none() && filter.features.is_empty() {
            match filter.venue_type {
                Some(ref venue_type) => VenueRepository::get_venues_by_type(store, venue_type).await,
                None => VenueRepository::get_venues(store, page).await,
            }
        } else {
            let page = filter.venue_type.is_none().then_some(page);
            VenueRepository::list(store, &filter, page).await
        };

        Ok(venues)
    }

    /// Venues near a point for GET /api/venues/nearby
    /// DOCUMENTATION: Filtering uses the planar approximation; the returned
    /// distance is the haversine distance for display
    pub async fn nearby_venues(
        store: &Store,
        config: &Config,
        query: NearbyQuery,
    ) -> Result<Vec<NearbyVenue>, ToddleError> {
        let latitude = parse_number(query.latitude.as_deref());
        let longitude = parse_number(query.longitude.as_deref());

        let origin = match (latitude, longitude) {
            (Some(lat), Some(lon)) => geo::checked_point(lat, lon),
            _ => None,
        }
        .ok_or_else(|| {
            ToddleError::InvalidInput("Valid latitude and longitude are required".to_string())
        })?;

        let radius_km = match query.radius.as_deref() {
            None | Some("") => config.default_nearby_radius_km,
            Some(raw) => parse_number(Some(raw))
                .filter(|r| *r >= 0.0)
                .ok_or_else(|| {
                    ToddleError::InvalidInput(
                        "Radius must be a non-negative number of kilometers".to_string(),
                    )
                })?,
        };

        let venues = VenueRepository::get_venues_by_location(store, origin, radius_km).await;

        Ok(venues
            .into_iter()
            .map(|venue| {
                let distance_km = geo::haversine_km(origin, venue.location());
                NearbyVenue { venue, distance_km }
            })
            .collect())
    }

    /// GeoJSON feed of every venue for the map view
    pub async fn venue_map(store: &Store) -> FeatureCollection {
        let features = VenueRepository::get_all(store)
            .await
            .iter()
            .map(venue_feature)
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    pub async fn get_venue(store: &Store, id: i32) -> Result<Venue, ToddleError> {
        VenueRepository::get_by_id(store, id).await
    }

    /// Reviews of a venue, newest first (empty for unknown venues)
    pub async fn get_venue_reviews(store: &Store, id: i32) -> Vec<Review> {
        ReviewRepository::get_reviews_by_venue(store, id).await
    }

    pub async fn create_venue(
        store: &Store,
        req: CreateVenueRequest,
    ) -> Result<Venue, ToddleError> {
        req.validate()?;
        ensure_coordinates(Some(req.latitude), Some(req.longitude))?;

        let venue = VenueRepository::create_venue(store, req).await;
        log::info!("Venue {} created: {}", venue.id, venue.name);
        Ok(venue)
    }

    pub async fn update_venue(
        store: &Store,
        id: i32,
        req: UpdateVenueRequest,
    ) -> Result<Venue, ToddleError> {
        req.validate()?;
        ensure_coordinates(req.latitude, req.longitude)?;

        VenueRepository::update_venue(store, id, req).await
    }
}

fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

fn ensure_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), ToddleError> {
    let lat_ok = latitude.map_or(true, |lat| geo::checked_point(lat, 0.0).is_some());
    let lon_ok = longitude.map_or(true, |lon| geo::checked_point(0.0, lon).is_some());

    if lat_ok && lon_ok {
        Ok(())
    } else {
        Err(ToddleError::ValidationError(
            "latitude must be within [-90, 90] and longitude within [-180, 180]".to_string(),
        ))
    }
}

fn venue_feature(venue: &Venue) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), venue.name.clone().into());
    properties.insert("type".to_string(), venue.venue_type.clone().into());
    properties.insert("address".to_string(), venue.address.clone().into());
    properties.insert(
        "overallRating".to_string(),
        serde_json::to_value(venue.ratings.overall_rating).unwrap_or_default(),
    );
    properties.insert("reviewCount".to_string(), venue.review_count.into());
    properties.insert("verified".to_string(), venue.verified.into());

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::from(&venue.location()))),
        id: Some(Id::Number(venue.id.into())),
        properties: Some(properties),
        foreign_members: None,
    }
}
