use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::booking::BookingTime;
use crate::models::offer::Offer;
use crate::models::property::{Property, Room};

/// One room type picked by the user, with how many of it they want.
/// Quantity 0 means the room is listed but not selected.
#[derive(Debug, Clone)]
pub struct RoomSelection {
    pub room: Room,
    pub quantity: u32,
}

/// Everything the user has chosen in a booking form. Rebuilt by the UI on
/// every change and fed to [`PricingService::breakdown`].
#[derive(Debug, Clone)]
pub struct BookingSelection {
    pub property_id: i64,
    pub is_hostel: bool,
    pub booking_time: BookingTime,
    pub checkin_date: Option<NaiveDate>,
    pub checkout_date: Option<NaiveDate>,
    /// Hour of day (0-23), only meaningful for hourly bookings
    pub checkin_hour: Option<u32>,
    pub checkout_hour: Option<u32>,
    pub guests: u32,
    pub rooms: Vec<RoomSelection>,
}

impl BookingSelection {
    pub fn new(property: &Property, booking_time: BookingTime) -> Self {
        Self {
            property_id: property.id,
            is_hostel: property.is_hostel(),
            booking_time,
            checkin_date: None,
            checkout_date: None,
            checkin_hour: None,
            checkout_hour: None,
            guests: 1,
            rooms: property
                .rooms
                .iter()
                .map(|room| RoomSelection {
                    room: room.clone(),
                    quantity: 0,
                })
                .collect(),
        }
    }

    pub fn set_quantity(&mut self, room_id: i64, quantity: u32) {
        if let Some(selection) = self.rooms.iter_mut().find(|s| s.room.id == room_id) {
            selection.quantity = quantity;
        }
    }

    pub fn total_rooms(&self) -> u32 {
        self.rooms.iter().map(|s| s.quantity).sum()
    }

    /// Wire shape of the selection for the booking payload: a list of
    /// one-entry maps from room id to quantity, skipping unselected rooms
    pub fn room_types(&self) -> Vec<HashMap<String, u32>> {
        self.rooms
            .iter()
            .filter(|s| s.quantity > 0)
            .map(|s| {
                let mut entry = HashMap::new();
                entry.insert(s.room.id.to_string(), s.quantity);
                entry
            })
            .collect()
    }
}

/// Price of a booking split into its displayed line items. Derived data,
/// recomputed whenever any input changes; never persisted client-side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceBreakdown {
    pub base_price: f64,
    /// Quantity-weighted mean of the per-room discount percentages
    pub average_discount: f64,
    pub discounted_price: f64,
    pub offer_discount: f64,
    pub taxes: f64,
    pub final_price: f64,
}

impl PriceBreakdown {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale every line item by a constant factor. The consumer booking card
    /// multiplies monthly/yearly breakdowns by guests x stay length this way.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            base_price: self.base_price * factor,
            average_discount: self.average_discount,
            discounted_price: self.discounted_price * factor,
            offer_discount: self.offer_discount * factor,
            taxes: self.taxes * factor,
            final_price: self.final_price * factor,
        }
    }
}

pub struct PricingService;

impl PricingService {
    /// Whole hours between check-in and check-out on the same date.
    /// A checkout hour at or before the checkin hour spans into the next day.
    pub fn hourly_duration(checkin_hour: u32, checkout_hour: u32) -> i64 {
        let diff = checkout_hour as i64 - checkin_hour as i64;
        if diff <= 0 {
            diff + 24
        } else {
            diff
        }
    }

    /// Nights between two dates, floored at 1 so a same-day booking still
    /// charges one night
    pub fn daily_duration(checkin: NaiveDate, checkout: NaiveDate) -> i64 {
        (checkout - checkin).num_days().max(1)
    }

    /// Approximate month count of a stay (30-day months, rounded, at least 1)
    pub fn stay_months(checkin: NaiveDate, checkout: NaiveDate) -> i64 {
        let days = (checkout - checkin).num_days().abs() as f64;
        ((days / 30.0).round() as i64).max(1)
    }

    /// Approximate year count of a stay (365-day years, rounded, at least 1)
    pub fn stay_years(checkin: NaiveDate, checkout: NaiveDate) -> i64 {
        let days = (checkout - checkin).num_days().abs() as f64;
        ((days / 365.0).round() as i64).max(1)
    }

    fn duration_units(selection: &BookingSelection) -> f64 {
        match selection.booking_time {
            BookingTime::Hourly => match (selection.checkin_hour, selection.checkout_hour) {
                (Some(checkin), Some(checkout)) => Self::hourly_duration(checkin, checkout) as f64,
                _ => 1.0,
            },
            _ => match (selection.checkin_date, selection.checkout_date) {
                (Some(checkin), Some(checkout)) => Self::daily_duration(checkin, checkout) as f64,
                _ => 1.0,
            },
        }
    }

    fn months(selection: &BookingSelection) -> f64 {
        match (selection.checkin_date, selection.checkout_date) {
            (Some(checkin), Some(checkout)) => Self::stay_months(checkin, checkout) as f64,
            _ => 1.0,
        }
    }

    fn years(selection: &BookingSelection) -> f64 {
        match (selection.checkin_date, selection.checkout_date) {
            (Some(checkin), Some(checkout)) => Self::stay_years(checkin, checkout) as f64,
            _ => 1.0,
        }
    }

    /// Charge for one selected room type. Rate selection order:
    /// monthly rate when the booking is monthly or the property is a hostel
    /// with a positive monthly rate, then yearly, then hourly/daily.
    pub fn room_charge(selection: &BookingSelection, room: &Room, quantity: u32) -> f64 {
        if quantity == 0 {
            return 0.0;
        }
        let qty = quantity as f64;

        let monthly = room.monthly();
        if selection.booking_time == BookingTime::Monthly || (selection.is_hostel && monthly > 0.0)
        {
            return monthly * Self::months(selection) * qty;
        }

        if selection.booking_time == BookingTime::Yearly && room.yearly() > 0.0 {
            return room.yearly() * Self::years(selection) * qty;
        }

        let rate = match selection.booking_time {
            BookingTime::Hourly => room.hourly(),
            _ => room.daily(),
        };
        rate * Self::duration_units(selection) * qty
    }

    /// Sum of all selected room charges
    pub fn base_price(selection: &BookingSelection) -> f64 {
        selection
            .rooms
            .iter()
            .map(|s| Self::room_charge(selection, &s.room, s.quantity))
            .sum()
    }

    /// Quantity-weighted mean discount percentage across selected rooms.
    /// Two rooms at 10% (qty 1) and 30% (qty 3) average 25, not 20.
    pub fn average_discount(selection: &BookingSelection) -> f64 {
        let total_quantity = selection.total_rooms();
        if total_quantity == 0 {
            return 0.0;
        }
        let weighted: f64 = selection
            .rooms
            .iter()
            .map(|s| s.room.discount_pct() * s.quantity as f64)
            .sum();
        weighted / total_quantity as f64
    }

    /// Full price breakdown for a selection. Pure and lenient: broken rate
    /// fields contribute 0, zero rooms selected yields an all-zero breakdown.
    pub fn breakdown(
        selection: &BookingSelection,
        offer: Option<&Offer>,
        tax_rate: f64,
    ) -> PriceBreakdown {
        let base_price = Self::base_price(selection);
        let average_discount = Self::average_discount(selection);
        let discounted_price = base_price - base_price * average_discount / 100.0;
        let offer_discount = offer
            .map(|o| discounted_price * o.discount_value() / 100.0)
            .unwrap_or(0.0);
        let taxes = (discounted_price - offer_discount) * tax_rate;
        let final_price = discounted_price - offer_discount + taxes;

        PriceBreakdown {
            base_price,
            average_discount,
            discounted_price,
            offer_discount,
            taxes,
            final_price,
        }
    }

    /// Factor the consumer booking card applies to every monthly/yearly line
    /// item: guest count times stay length. Hourly/daily stays are unscaled.
    /// Guest scaling against a per-stay rate is kept as shipped; see DESIGN.md
    /// before changing it.
    pub fn stay_multiplier(selection: &BookingSelection) -> f64 {
        let guests = selection.guests.max(1) as f64;
        match selection.booking_time {
            BookingTime::Monthly => guests * Self::months(selection),
            BookingTime::Yearly => guests * Self::years(selection),
            _ => 1.0,
        }
    }
}
