// src/db/offer_repository.rs
// DOCUMENTATION: Offer data access over the in-memory store
// PURPOSE: Offer listings (featured first), featured feed and offer writes

use crate::db::{Page, Store};
use crate::errors::ToddleError;
use crate::models::{CreateOfferRequest, Offer};
use chrono::Utc;

/// Featured offers first; otherwise id order is kept
fn sort_featured_first(offers: &mut [Offer]) {
    offers.sort_by_key(|o| !o.featured);
}

pub struct OfferRepository;

impl OfferRepository {
    pub async fn get_by_id(store: &Store, id: i32) -> Result<Offer, ToddleError> {
        store
            .read()
            .await
            .offers
            .get(&id)
            .cloned()
            .ok_or_else(|| ToddleError::NotFound("Offer not found".to_string()))
    }

    /// Offers matching `keep`, featured first, optionally paginated
    pub async fn list<F>(store: &Store, keep: F, page: Option<Page>) -> Vec<Offer>
    where
        F: Fn(&Offer) -> bool,
    {
        let mut offers: Vec<Offer> = store
            .read()
            .await
            .offers
            .values()
            .filter(|o| keep(*o))
            .cloned()
            .collect();

        sort_featured_first(&mut offers);

        match page {
            Some(page) => offers.into_iter().skip(page.offset).take(page.limit).collect(),
            None => offers,
        }
    }

    /// All offers, featured first, paginated
    pub async fn get_offers(store: &Store, page: Page) -> Vec<Offer> {
        Self::list(store, |_| true, Some(page)).await
    }

    /// Offers of exactly this type, featured first (not paginated)
    pub async fn get_offers_by_type(store: &Store, offer_type: &str) -> Vec<Offer> {
        Self::list(store, |o| o.offer_type == offer_type, None).await
    }

    /// Featured offers, newest first
    pub async fn get_featured_offers(store: &Store) -> Vec<Offer> {
        let mut offers: Vec<Offer> = store
            .read()
            .await
            .offers
            .values()
            .filter(|o| o.featured)
            .cloned()
            .collect();

        offers.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        offers
    }

    pub async fn create_offer(store: &Store, req: CreateOfferRequest) -> Offer {
        let mut state = store.write().await;
        let id = state.next_offer_id();
        let offer = Offer::from_request(id, req, Utc::now());

        state.offers.insert(id, offer.clone());
        log::debug!("Created offer {} ({})", id, offer.title);
        offer
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn offer_request(title: &str, offer_type: &str, featured: bool) -> CreateOfferRequest {
        CreateOfferRequest {
            title: title.to_string(),
            description: format!("{} description", title),
            provider: "Splash Babies".to_string(),
            offer_type: offer_type.to_string(),
            target_ages: Some(vec!["3-18 months".to_string()]),
            location: None,
            valid_from: None,
            valid_to: None,
            terms: None,
            link: None,
            image_url: None,
            featured,
        }
    }

    async fn store_with_offers() -> Store {
        let store = Store::new();
        OfferRepository::create_offer(&store, offer_request("A", "class", false)).await;
        OfferRepository::create_offer(&store, offer_request("B", "meal", true)).await;
        OfferRepository::create_offer(&store, offer_request("C", "class", false)).await;
        OfferRepository::create_offer(&store, offer_request("D", "class", true)).await;
        store
    }

    fn titles(offers: &[Offer]) -> Vec<&str> {
        offers.iter().map(|o| o.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_featured_first_then_id_order() {
        let store = store_with_offers().await;
        let offers = OfferRepository::get_offers(&store, Page::default()).await;
        assert_eq!(titles(&offers), vec!["B", "D", "A", "C"]);

        let page = OfferRepository::get_offers(&store, Page { limit: 2, offset: 1 }).await;
        assert_eq!(titles(&page), vec!["D", "A"]);
    }

    #[tokio::test]
    async fn test_offers_by_type() {
        let store = store_with_offers().await;
        let classes = OfferRepository::get_offers_by_type(&store, "class").await;
        assert_eq!(titles(&classes), vec!["D", "A", "C"]);
    }

    #[tokio::test]
    async fn test_featured_offers_newest_first() {
        let store = store_with_offers().await;
        let featured = OfferRepository::get_featured_offers(&store).await;
        assert_eq!(titles(&featured), vec!["D", "B"]);
    }

    #[tokio::test]
    async fn test_get_offer() {
        let store = store_with_offers().await;
        assert_eq!(OfferRepository::get_by_id(&store, 3).await.unwrap().title, "C");
        assert!(OfferRepository::get_by_id(&store, 30).await.is_err());
    }
}
