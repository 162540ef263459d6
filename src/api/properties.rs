use crate::api::{ApiClient, ApiError};
use crate::models::offer::Offer;
use crate::models::property::{Property, PropertyPayload, Room, RoomPayload};

impl ApiClient {
    /// Property and offer list in one round trip pair, as the booking page
    /// loads them
    pub async fn fetch_booking_context(
        &self,
        property_id: i64,
    ) -> Result<(Property, Vec<Offer>), ApiError> {
        futures::future::try_join(self.fetch_property(property_id), self.fetch_offers()).await
    }

    pub async fn fetch_properties(&self) -> Result<Vec<Property>, ApiError> {
        self.get("property/properties/").await
    }

    pub async fn fetch_property(&self, property_id: i64) -> Result<Property, ApiError> {
        self.get(&format!("property/properties/{}/", property_id))
            .await
    }

    /// Public location search used by the home page
    pub async fn search_properties(&self, location: &str) -> Result<Vec<Property>, ApiError> {
        self.get(&format!("property/search/{}/", location)).await
    }

    pub async fn create_property(&self, payload: &PropertyPayload) -> Result<Property, ApiError> {
        self.post("property/properties/", payload).await
    }

    pub async fn update_property(
        &self,
        property_id: i64,
        payload: &PropertyPayload,
    ) -> Result<Property, ApiError> {
        self.put(&format!("property/properties/{}/", property_id), payload)
            .await
    }

    pub async fn delete_property(&self, property_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("property/properties/{}/", property_id))
            .await
    }

    pub async fn create_room(&self, payload: &RoomPayload) -> Result<Room, ApiError> {
        self.post("property/rooms/", payload).await
    }

    pub async fn update_room(&self, room_id: i64, payload: &RoomPayload) -> Result<Room, ApiError> {
        self.put(&format!("property/rooms/{}/", room_id), payload)
            .await
    }

    pub async fn delete_room(&self, room_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("property/rooms/{}/", room_id)).await
    }
}
