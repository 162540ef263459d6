use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::property::parse_decimal;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferImage {
    pub id: i64,
    #[serde(default)]
    pub image: Option<String>,
}

/// A promotional code. `discount_percentage` arrives as a decimal string and
/// is applied on top of per-room discounts, never instead of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub discount_percentage: Option<String>,
    #[serde(default)]
    pub offer_start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub offer_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub images: Vec<OfferImage>,
    #[serde(default)]
    pub is_active: bool,
}

impl Offer {
    pub fn discount_value(&self) -> f64 {
        parse_decimal(self.discount_percentage.as_deref())
    }

    /// Whether the offer can be applied at `now`: active and inside its
    /// validity window (open-ended when a bound is missing)
    pub fn is_valid_on(&self, now: DateTime<Utc>) -> bool {
        if !self.is_active {
            return false;
        }
        if let Some(start) = self.offer_start_date {
            if now < start {
                return false;
            }
        }
        if let Some(end) = self.offer_end_date {
            if now > end {
                return false;
            }
        }
        true
    }
}

/// Join row: an offer attached to a property, as nested in property payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyOffer {
    pub id: i64,
    pub offer: Offer,
}

/// Body for offer create/update (admin)
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct OfferPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub discount_percentage: Option<String>,
    pub offer_start_date: Option<DateTime<Utc>>,
    pub offer_end_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn offer(active: bool, start: Option<i64>, end: Option<i64>) -> Offer {
        Offer {
            is_active: active,
            offer_start_date: start.map(|s| Utc.timestamp_opt(s, 0).unwrap()),
            offer_end_date: end.map(|s| Utc.timestamp_opt(s, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validity_window() {
        let now = Utc.timestamp_opt(1_000, 0).unwrap();
        assert!(offer(true, Some(500), Some(2_000)).is_valid_on(now));
        assert!(!offer(true, Some(1_500), Some(2_000)).is_valid_on(now));
        assert!(!offer(true, Some(100), Some(900)).is_valid_on(now));
        assert!(!offer(false, Some(500), Some(2_000)).is_valid_on(now));
        // missing bounds are open-ended
        assert!(offer(true, None, None).is_valid_on(now));
    }

    #[test]
    fn test_discount_value_fallback() {
        let mut o = Offer::default();
        assert_eq!(o.discount_value(), 0.0);
        o.discount_percentage = Some("20.00".to_string());
        assert_eq!(o.discount_value(), 20.0);
        o.discount_percentage = Some("garbage".to_string());
        assert_eq!(o.discount_value(), 0.0);
    }
}
