use serde::Serialize;

use crate::api::{ApiClient, ApiError};
use crate::models::booking::{Booking, BookingPayload, BookingStatus};

#[derive(Debug, Serialize)]
struct StatusBody {
    status: BookingStatus,
}

impl ApiClient {
    pub async fn fetch_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get("booking/bookings/").await
    }

    pub async fn fetch_booking(&self, booking_id: i64) -> Result<Booking, ApiError> {
        self.get(&format!("booking/bookings/{}/", booking_id)).await
    }

    /// Bookings of the signed-in user
    pub async fn fetch_user_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get("booking/bookings/user/").await
    }

    /// Bookings of a specific user (admin)
    pub async fn fetch_bookings_for_user(&self, user_id: i64) -> Result<Vec<Booking>, ApiError> {
        self.get(&format!("booking/bookings/user/{}/", user_id))
            .await
    }

    /// Create a booking. The payload carries the price and discount the
    /// calculator produced.
    pub async fn book_property(&self, payload: &BookingPayload) -> Result<Booking, ApiError> {
        self.post("booking/bookings/", payload).await
    }

    pub async fn update_booking(
        &self,
        booking_id: i64,
        payload: &BookingPayload,
    ) -> Result<Booking, ApiError> {
        self.put(&format!("booking/bookings/{}/", booking_id), payload)
            .await
    }

    pub async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<Booking, ApiError> {
        self.patch(
            &format!("booking/bookings/{}/status/", booking_id),
            &StatusBody { status },
        )
        .await
    }
}
