use chrono::Utc;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingTime};
use crate::models::property::{parse_decimal, Room};
use crate::services::pricing_service::PricingService;

const LOWER_GST_RATE: f64 = 0.05;
const HIGHER_GST_RATE: f64 = 0.18;

/// One room row on the invoice
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLine {
    pub room_name: String,
    pub quantity: u32,
    pub rate: f64,
    pub discount_pct: f64,
    pub duration_label: String,
    pub amount: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
}

/// A fully computed invoice. Rendering (PDF or otherwise) is the caller's
/// concern; this carries every number and label the document needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub invoice_number: String,
    pub property_name: String,
    pub guest_name: Option<String>,
    pub lines: Vec<InvoiceLine>,
    pub subtotal: f64,
    /// GST split evenly into central and state halves
    pub cgst: f64,
    pub sgst: f64,
    pub grand_total: f64,
    /// Weighted average tax rate across lines, for display
    pub effective_tax_rate: f64,
}

pub struct InvoiceService;

impl InvoiceService {
    /// Build an invoice from a booking and its embedded property. Lenient
    /// like the price calculator: rooms that can no longer be resolved are
    /// skipped, a booking without a property yields an empty invoice.
    ///
    /// `gst_slab_threshold` is the per-unit room price at which GST moves
    /// from 5% to 18%.
    pub fn build(booking: &Booking, gst_slab_threshold: f64) -> Invoice {
        let (duration, duration_label) = Self::stay_duration(booking);
        let is_hostel = booking
            .property
            .as_ref()
            .map(|p| p.is_hostel())
            .unwrap_or(false);

        let mut lines = Vec::new();

        if !booking.booking_room_types.is_empty() {
            for entry in &booking.booking_room_types {
                for (room_id, quantity) in entry {
                    if let Some(room) = Self::find_room(booking, room_id) {
                        lines.push(Self::line(
                            booking,
                            room,
                            *quantity,
                            duration,
                            &duration_label,
                            is_hostel,
                            gst_slab_threshold,
                        ));
                    }
                }
            }
        } else if let Some(room_id) = booking.room {
            if let Some(room) = Self::find_room(booking, &room_id.to_string()) {
                lines.push(Self::line(
                    booking,
                    room,
                    booking.number_of_rooms.max(1),
                    duration,
                    &duration_label,
                    is_hostel,
                    gst_slab_threshold,
                ));
            }
        }

        let subtotal: f64 = lines.iter().map(|l| l.amount).sum();
        let taxes: f64 = lines.iter().map(|l| l.tax_amount).sum();
        let effective_tax_rate = if subtotal > 0.0 {
            taxes / subtotal * 100.0
        } else {
            0.0
        };

        Invoice {
            invoice_number: Self::invoice_number(booking),
            property_name: booking
                .property
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            guest_name: booking.user.as_ref().and_then(|u| u.name.clone()),
            lines,
            subtotal,
            cgst: taxes / 2.0,
            sgst: taxes / 2.0,
            grand_total: subtotal + taxes,
            effective_tax_rate,
        }
    }

    fn find_room<'a>(booking: &'a Booking, room_id: &str) -> Option<&'a Room> {
        booking
            .property
            .as_ref()?
            .rooms
            .iter()
            .find(|room| room.id.to_string() == room_id)
    }

    /// Stay length in the unit the booking bills by, with a display label
    fn stay_duration(booking: &Booking) -> (i64, String) {
        match booking.booking_time {
            BookingTime::Monthly => {
                let months = PricingService::stay_months(booking.checkin_date, booking.checkout_date);
                (months, format!("{} month{}", months, plural(months)))
            }
            BookingTime::Yearly => {
                let years = PricingService::stay_years(booking.checkin_date, booking.checkout_date);
                (years, format!("{} year{}", years, plural(years)))
            }
            _ => {
                let nights =
                    PricingService::daily_duration(booking.checkin_date, booking.checkout_date);
                (nights, format!("{} night{}", nights, plural(nights)))
            }
        }
    }

    /// Rate for a room on the invoice, same fallback chain as the booking
    /// card: the billed mode's rate when present, else the monthly rate,
    /// else the yearly rate for yearly stays
    fn invoice_rate(booking: &Booking, room: &Room) -> f64 {
        match booking.booking_time {
            BookingTime::Hourly if room.hourly() > 0.0 => room.hourly(),
            BookingTime::Daily if room.daily() > 0.0 => room.daily(),
            _ => {
                if room.monthly() > 0.0 {
                    room.monthly()
                } else if booking.booking_time == BookingTime::Yearly {
                    room.yearly()
                } else {
                    0.0
                }
            }
        }
    }

    fn line(
        booking: &Booking,
        room: &Room,
        quantity: u32,
        duration: i64,
        duration_label: &str,
        is_hostel: bool,
        gst_slab_threshold: f64,
    ) -> InvoiceLine {
        let rate = Self::invoice_rate(booking, room);
        let discount_pct = parse_decimal(room.discount.as_deref());
        let discounted = rate * (1.0 - discount_pct / 100.0);
        let qty = quantity as f64;

        let amount = match booking.booking_time {
            // hostel shared rooms bill per guest per month
            BookingTime::Monthly if is_hostel => {
                discounted * qty * duration as f64 * booking.number_of_guests.max(1) as f64
            }
            BookingTime::Yearly => discounted * qty * duration.max(1) as f64,
            _ => discounted * qty * duration as f64,
        };

        // GST slab is decided on the discounted per-unit price, not the line total
        let tax_rate = if discounted < gst_slab_threshold {
            LOWER_GST_RATE
        } else {
            HIGHER_GST_RATE
        };

        InvoiceLine {
            room_name: room.name.clone(),
            quantity,
            rate,
            discount_pct,
            duration_label: duration_label.to_string(),
            amount,
            tax_rate,
            tax_amount: amount * tax_rate,
        }
    }

    fn invoice_number(booking: &Booking) -> String {
        match &booking.booking_id {
            Some(booking_id) if !booking_id.is_empty() => format!("INV-{}", booking_id),
            _ => format!(
                "INV-{}-{}",
                Utc::now().format("%Y%m%d"),
                &Uuid::new_v4().simple().to_string()[..8]
            ),
        }
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::{BookingStatus, BookingUser};
    use crate::models::property::{Property, PropertyType};
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn hotel_booking() -> Booking {
        let property = Property {
            id: 5,
            name: "Seaview Hotel".to_string(),
            property_type: PropertyType::Hotel,
            rooms: vec![
                Room {
                    id: 1,
                    name: "Deluxe".to_string(),
                    daily_rate: Some("2000.00".to_string()),
                    discount: Some("10".to_string()),
                    is_active: true,
                    ..Default::default()
                },
                Room {
                    id: 2,
                    name: "Suite".to_string(),
                    daily_rate: Some("9000.00".to_string()),
                    is_active: true,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        Booking {
            id: 11,
            booking_id: Some("BK-2025-0042".to_string()),
            property: Some(property),
            user: Some(BookingUser {
                name: Some("Ravi".to_string()),
                ..Default::default()
            }),
            booking_time: BookingTime::Daily,
            status: BookingStatus::Confirmed,
            checkin_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            checkout_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            number_of_guests: 2,
            number_of_rooms: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_multi_room_invoice_with_split_gst_slabs() {
        let mut booking = hotel_booking();
        let mut first = HashMap::new();
        first.insert("1".to_string(), 2u32);
        let mut second = HashMap::new();
        second.insert("2".to_string(), 1u32);
        booking.booking_room_types = vec![first, second];

        let invoice = InvoiceService::build(&booking, 7500.0);
        assert_eq!(invoice.lines.len(), 2);

        // Deluxe: 2000 * 0.9 = 1800/night, 2 nights, qty 2 -> 7200, 5% slab
        let deluxe = &invoice.lines[0];
        assert_eq!(deluxe.amount, 7200.0);
        assert_eq!(deluxe.tax_rate, 0.05);
        assert_eq!(deluxe.duration_label, "2 nights");

        // Suite: 9000/night over the slab -> 18%
        let suite = &invoice.lines[1];
        assert_eq!(suite.amount, 18000.0);
        assert_eq!(suite.tax_rate, 0.18);

        assert_eq!(invoice.subtotal, 25200.0);
        let expected_tax = 7200.0 * 0.05 + 18000.0 * 0.18;
        assert!((invoice.cgst + invoice.sgst - expected_tax).abs() < 1e-9);
        assert!((invoice.grand_total - (25200.0 + expected_tax)).abs() < 1e-9);
        assert_eq!(invoice.invoice_number, "INV-BK-2025-0042");
        assert_eq!(invoice.guest_name.as_deref(), Some("Ravi"));
    }

    #[test]
    fn test_single_room_fallback_uses_number_of_rooms() {
        let mut booking = hotel_booking();
        booking.room = Some(1);
        booking.number_of_rooms = 3;

        let invoice = InvoiceService::build(&booking, 7500.0);
        assert_eq!(invoice.lines.len(), 1);
        // 1800/night * 2 nights * 3 rooms
        assert_eq!(invoice.lines[0].amount, 10800.0);
        assert_eq!(invoice.lines[0].quantity, 3);
    }

    #[test]
    fn test_hostel_monthly_line_multiplies_guests() {
        let mut booking = hotel_booking();
        if let Some(property) = booking.property.as_mut() {
            property.property_type = PropertyType::Hostel;
            property.rooms[0].monthly_rate = Some("6000.00".to_string());
        }
        booking.booking_time = BookingTime::Monthly;
        booking.checkout_date = NaiveDate::from_ymd_opt(2025, 5, 30).unwrap();
        booking.room = Some(1);
        booking.number_of_rooms = 1;
        booking.number_of_guests = 2;

        let invoice = InvoiceService::build(&booking, 7500.0);
        // 6000/month (no room discount on monthly rate path applies 10%):
        // 6000 * 0.9 = 5400, 3 months, 1 room, 2 guests
        assert_eq!(invoice.lines[0].amount, 5400.0 * 3.0 * 2.0);
        assert_eq!(invoice.lines[0].duration_label, "3 months");
    }

    #[test]
    fn test_booking_without_property_yields_empty_invoice() {
        let mut booking = hotel_booking();
        booking.property = None;
        booking.room = Some(1);

        let invoice = InvoiceService::build(&booking, 7500.0);
        assert!(invoice.lines.is_empty());
        assert_eq!(invoice.subtotal, 0.0);
        assert_eq!(invoice.grand_total, 0.0);
        assert_eq!(invoice.effective_tax_rate, 0.0);
    }

    #[test]
    fn test_generated_invoice_number_when_booking_id_missing() {
        let mut booking = hotel_booking();
        booking.booking_id = None;
        booking.room = Some(1);

        let invoice = InvoiceService::build(&booking, 7500.0);
        assert!(invoice.invoice_number.starts_with("INV-"));
        assert!(invoice.invoice_number.len() > 4);
    }
}
