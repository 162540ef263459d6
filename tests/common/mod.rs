use staybook_client::models::booking::Booking;
use staybook_client::models::property::Property;

/// A hotel payload the way `GET property/properties/{id}/` returns it,
/// decimal fields as strings and an offer attached
pub fn hotel_json() -> serde_json::Value {
    serde_json::json!({
        "id": 12,
        "name": "Seaview Hotel",
        "location": "Mumbai, Maharashtra, India",
        "property_type": "hotel",
        "amenities": ["WiFi", "Parking", "Restaurant"],
        "rooms": [
            {
                "id": 1,
                "name": "Deluxe Room",
                "daily_rate": "1000.00",
                "hourly_rate": "150.00",
                "discount": "10.00",
                "maxoccupancy": 2,
                "number_of_rooms": 10,
                "left_number_of_rooms": 6,
                "is_active": true
            },
            {
                "id": 2,
                "name": "Suite",
                "daily_rate": "9000.00",
                "hourly_rate": "1200.00",
                "maxoccupancy": 4,
                "number_of_rooms": 2,
                "left_number_of_rooms": 2,
                "is_active": true
            }
        ],
        "offers": [
            {
                "id": 31,
                "offer": {
                    "id": 7,
                    "title": "Summer Saver",
                    "description": "Twenty percent off",
                    "code": "SUMMER20",
                    "discount_percentage": "20.00",
                    "offer_start_date": "2025-01-01T00:00:00Z",
                    "offer_end_date": "2025-12-31T23:59:59Z",
                    "is_active": true
                }
            }
        ],
        "is_active": true
    })
}

pub fn hostel_json() -> serde_json::Value {
    serde_json::json!({
        "id": 13,
        "name": "Hilltop Hostel",
        "location": "Pune, Maharashtra, India",
        "property_type": "hostel",
        "amenities": ["WiFi", "Laundry"],
        "rooms": [
            {
                "id": 5,
                "name": "4-Bed Dorm",
                "daily_rate": "500.00",
                "monthly_rate": "6000.00",
                "discount": "5.00",
                "maxoccupancy": 4,
                "is_active": true
            }
        ],
        "is_active": true
    })
}

pub fn hotel() -> Property {
    serde_json::from_value(hotel_json()).expect("hotel fixture should deserialize")
}

pub fn hostel() -> Property {
    serde_json::from_value(hostel_json()).expect("hostel fixture should deserialize")
}

/// A booking the way the admin list endpoint returns it, property embedded
pub fn booking_json() -> serde_json::Value {
    serde_json::json!({
        "id": 101,
        "booking_id": "BK-2025-0101",
        "user": { "id": 4, "name": "Ravi", "email": "ravi@example.com", "mobile": "9800000000" },
        "property": hotel_json(),
        "booking_room_types": [ { "1": 2 }, { "2": 1 } ],
        "price": 2124.0,
        "discount": 10.0,
        "booking_type": "online",
        "booking_time": "daily",
        "status": "confirmed",
        "payment_type": "upi",
        "checkin_date": "2025-03-01",
        "checkout_date": "2025-03-03",
        "number_of_guests": 2,
        "number_of_rooms": 3
    })
}

pub fn booking() -> Booking {
    serde_json::from_value(booking_json()).expect("booking fixture should deserialize")
}
