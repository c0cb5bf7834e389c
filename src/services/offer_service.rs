// src/services/offer_service.rs
// DOCUMENTATION: Business logic for offers
// PURPOSE: Offer listings with type/active filters, featured feed, creation

use crate::config::Config;
use crate::db::{OfferRepository, Page, Store};
use crate::errors::ToddleError;
use crate::models::{CreateOfferRequest, Offer, OfferQuery};
use chrono::Utc;
use validator::Validate;

pub struct OfferService;

impl OfferService {
    /// List offers for GET /api/offers
    /// DOCUMENTATION: Same paging rule as venues: a `type` filter disables limit/offset
    pub async fn list_offers(store: &Store, config: &Config, query: OfferQuery) -> Vec<Offer> {
        let page = Page {
            limit: config.page_size(query.limit),
            offset: query.offset.unwrap_or(0),
        };
        let offer_type = query.offer_type.filter(|t| !t.is_empty());

        if !query.active.unwrap_or(false) {
            return match offer_type {
                Some(ref offer_type) => OfferRepository::get_offers_by_type(store, offer_type).await,
                None => OfferRepository::get_offers(store, page).await,
            };
        }

        let now = Utc::now();
        let page = offer_type.is_none().then_some(page);
        OfferRepository::list(
            store,
            |offer| {
                offer_type
                    .as_deref()
                    .map_or(true, |t| offer.offer_type == t)
                    && offer.is_active_at(now)
            },
            page,
        )
        .await
    }

    pub async fn featured_offers(store: &Store) -> Vec<Offer> {
        OfferRepository::get_featured_offers(store).await
    }

    pub async fn get_offer(store: &Store, id: i32) -> Result<Offer, ToddleError> {
        OfferRepository::get_by_id(store, id).await
    }

    pub async fn create_offer(store: &Store, req: CreateOfferRequest) -> Result<Offer, ToddleError> {
        req.validate()?;

        if let (Some(from), Some(to)) = (req.valid_from, req.valid_to) {
            if to < from {
                return Err(ToddleError::ValidationError(
                    "validTo must not be before validFrom".to_string(),
                ));
            }
        }

        let offer = OfferRepository::create_offer(store, req).await;
        log::info!("Offer {} created: {}", offer.id, offer.title);
        Ok(offer)
    }
}
