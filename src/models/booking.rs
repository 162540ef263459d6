use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::property::Property;

/// Billing granularity of a booking. Hostels additionally offer monthly and
/// yearly stays; hotels are hourly or daily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingTime {
    Hourly,
    Daily,
    Monthly,
    Yearly,
}

impl Default for BookingTime {
    fn default() -> Self {
        BookingTime::Daily
    }
}

/// Channel the booking came in through (`booking_type` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingChannel {
    Walkin,
    Online,
    Makemytrip,
    Tripadvisor,
    Expedia,
    Agoda,
    Bookingcom,
    Airbnb,
    Other,
}

impl Default for BookingChannel {
    fn default() -> Self {
        BookingChannel::Walkin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    CheckedIn,
    CheckedOut,
    NoShow,
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Card,
    Cash,
    Upi,
}

impl Default for PaymentType {
    fn default() -> Self {
        PaymentType::Upi
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDocument {
    pub id: i64,
    #[serde(default)]
    pub doc_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A booking as returned by `GET booking/bookings/`.
///
/// `booking_room_types` is the multi-room shape: a list of one-entry maps
/// from room id (stringified) to selected quantity. Older bookings carry a
/// single `room` id plus `number_of_rooms` instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub user: Option<BookingUser>,
    #[serde(default)]
    pub property: Option<Property>,
    #[serde(default)]
    pub room: Option<i64>,
    #[serde(default)]
    pub booking_room_types: Vec<HashMap<String, u32>>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub booking_type: BookingChannel,
    #[serde(default)]
    pub booking_time: BookingTime,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub payment_type: PaymentType,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    #[serde(default)]
    pub room_no: Option<String>,
    #[serde(default = "default_one")]
    pub number_of_guests: u32,
    #[serde(default = "default_one")]
    pub number_of_rooms: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_one() -> u32 {
    1
}

/// Body for `POST/PUT booking/bookings/`. The price and discount are the
/// calculator's outputs; the backend stores what the client computed.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookingPayload {
    pub user: Option<i64>,
    pub property: Option<i64>,
    pub room: Option<i64>,
    pub booking_room_types: Option<Vec<HashMap<String, u32>>>,
    pub price: f64,
    pub discount: f64,
    pub booking_type: Option<BookingChannel>,
    pub booking_time: BookingTime,
    pub status: Option<BookingStatus>,
    pub payment_type: PaymentType,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub number_of_guests: u32,
    pub number_of_rooms: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_time_wire_format() {
        assert_eq!(
            serde_json::to_string(&BookingTime::Hourly).unwrap(),
            "\"hourly\""
        );
        let parsed: BookingTime = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(parsed, BookingTime::Monthly);
    }

    #[test]
    fn test_status_snake_case() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::CheckedIn).unwrap(),
            "\"checked_in\""
        );
    }

    #[test]
    fn test_payload_skips_absent_fields() {
        let payload = BookingPayload {
            property: Some(12),
            room: Some(3),
            price: 2124.0,
            discount: 10.0,
            booking_time: BookingTime::Daily,
            payment_type: PaymentType::Upi,
            checkin_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            checkout_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            number_of_guests: 2,
            number_of_rooms: 1,
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("user").is_none());
        assert!(json.get("status").is_none());
        assert_eq!(json["price"], 2124.0);
        assert_eq!(json["booking_time"], "daily");
    }
}
