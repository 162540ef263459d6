use serde::Serialize;

use crate::api::{ApiClient, ApiError};
use crate::models::offer::{Offer, OfferPayload};

#[derive(Debug, Serialize)]
struct AssignOffersBody<'a> {
    property: i64,
    offers: &'a [i64],
}

impl ApiClient {
    pub async fn fetch_offers(&self) -> Result<Vec<Offer>, ApiError> {
        self.get("offers/offers/").await
    }

    pub async fn fetch_offer(&self, offer_id: i64) -> Result<Offer, ApiError> {
        self.get(&format!("offers/offers/{}/", offer_id)).await
    }

    pub async fn create_offer(&self, payload: &OfferPayload) -> Result<Offer, ApiError> {
        self.post("offers/offers/", payload).await
    }

    pub async fn update_offer(
        &self,
        offer_id: i64,
        payload: &OfferPayload,
    ) -> Result<Offer, ApiError> {
        self.put(&format!("offers/offers/{}/", offer_id), payload)
            .await
    }

    pub async fn delete_offer(&self, offer_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("offers/offers/{}/", offer_id)).await
    }

    /// Attach a set of offers to a property (admin)
    pub async fn assign_offers(
        &self,
        property_id: i64,
        offer_ids: &[i64],
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post(
                "offers/assign/",
                &AssignOffersBody {
                    property: property_id,
                    offers: offer_ids,
                },
            )
            .await?;
        Ok(())
    }
}
