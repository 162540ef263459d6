use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::booking::BookingTime;
use crate::models::offer::PropertyOffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Hotel,
    Hostel,
}

impl Default for PropertyType {
    fn default() -> Self {
        PropertyType::Hotel
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomImage {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A room type within a property. Rates come from the backend as decimal
/// strings ("1500.00"); anything unparseable counts as 0 so a broken record
/// degrades instead of failing the whole price calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub daily_rate: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<String>,
    #[serde(default)]
    pub monthly_rate: Option<String>,
    #[serde(default)]
    pub yearly_rate: Option<String>,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub bed_type: Option<String>,
    #[serde(default)]
    pub maxoccupancy: u32,
    #[serde(default)]
    pub number_of_rooms: u32,
    #[serde(default)]
    pub used_number_of_rooms: u32,
    #[serde(default)]
    pub left_number_of_rooms: u32,
    #[serde(default)]
    pub images: Vec<RoomImage>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Room {
    pub fn hourly(&self) -> f64 {
        parse_decimal(self.hourly_rate.as_deref())
    }

    pub fn daily(&self) -> f64 {
        parse_decimal(self.daily_rate.as_deref())
    }

    pub fn monthly(&self) -> f64 {
        parse_decimal(self.monthly_rate.as_deref())
    }

    pub fn yearly(&self) -> f64 {
        parse_decimal(self.yearly_rate.as_deref())
    }

    /// Per-room discount percentage (0 when absent or malformed)
    pub fn discount_pct(&self) -> f64 {
        parse_decimal(self.discount.as_deref())
    }

    /// Rate shown to the user for a billing mode, before any fallback logic
    pub fn rate_for(&self, booking_time: BookingTime) -> f64 {
        match booking_time {
            BookingTime::Hourly => self.hourly(),
            BookingTime::Daily => self.daily(),
            BookingTime::Monthly => self.monthly(),
            BookingTime::Yearly => self.yearly(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyImage {
    pub id: i64,
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub property_type: PropertyType,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub offers: Vec<PropertyOffer>,
    #[serde(default)]
    pub images: Vec<PropertyImage>,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Property {
    pub fn is_hostel(&self) -> bool {
        self.property_type == PropertyType::Hostel
    }

    /// Cheapest active room rate for a billing mode, used by search filtering.
    /// Returns 0 when no room carries a rate for that mode.
    pub fn lowest_rate(&self, booking_time: BookingTime) -> f64 {
        let min = self
            .rooms
            .iter()
            .filter(|room| room.is_active)
            .map(|room| room.rate_for(booking_time))
            .filter(|rate| *rate > 0.0)
            .fold(f64::INFINITY, f64::min);

        if min.is_finite() {
            min
        } else {
            0.0
        }
    }
}

/// Parse a backend decimal string, falling back to 0 on anything malformed
pub fn parse_decimal(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Payload for creating or updating a property (admin CRUD)
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct PropertyPayload {
    pub name: Option<String>,
    pub location: Option<String>,
    pub property_type: Option<PropertyType>,
    pub discount: Option<String>,
    pub amenities: Option<Vec<i64>>,
    pub is_active: Option<bool>,
}

/// Payload for room CRUD under a property
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoomPayload {
    pub property: Option<i64>,
    pub name: Option<String>,
    pub daily_rate: Option<String>,
    pub hourly_rate: Option<String>,
    pub monthly_rate: Option<String>,
    pub yearly_rate: Option<String>,
    pub discount: Option<String>,
    pub bed_type: Option<String>,
    pub maxoccupancy: Option<u32>,
    pub number_of_rooms: Option<u32>,
    pub is_active: Option<bool>,
}
