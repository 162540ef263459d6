mod common;

use staybook_client::models::booking::BookingTime;
use staybook_client::models::property::PropertyType;
use staybook_client::services::search_service::{PageItem, SearchFilters, SearchService};

#[test]
fn test_filter_by_price_and_type_over_wire_payloads() {
    let properties = vec![common::hotel(), common::hostel()];

    let cheap_stays = SearchFilters {
        max_price: 800.0,
        booking_time: BookingTime::Daily,
        ..Default::default()
    };
    let result = SearchService::filter(&properties, &cheap_stays);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Hilltop Hostel");

    let hotels_only = SearchFilters {
        property_type: Some(PropertyType::Hotel),
        ..Default::default()
    };
    let result = SearchService::filter(&properties, &hotels_only);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Seaview Hotel");
}

#[test]
fn test_city_and_amenity_filters() {
    let properties = vec![common::hotel(), common::hostel()];

    let mumbai = SearchFilters {
        locations: vec!["Mumbai".to_string()],
        ..Default::default()
    };
    assert_eq!(SearchService::filter(&properties, &mumbai).len(), 1);

    let with_laundry = SearchFilters {
        amenities: vec!["WiFi".to_string(), "Laundry".to_string()],
        ..Default::default()
    };
    let result = SearchService::filter(&properties, &with_laundry);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Hilltop Hostel");
}

#[test]
fn test_pagination_strip_for_filtered_results() {
    let properties: Vec<_> = (0..23)
        .map(|i| {
            let mut p = common::hotel();
            p.id = i;
            p
        })
        .collect();

    let filters = SearchFilters::default();
    let filtered = SearchService::filter(&properties, &filters);
    assert_eq!(filtered.len(), 23);

    let per_page = 4;
    let total = SearchService::total_pages(filtered.len(), per_page);
    assert_eq!(total, 6);
    assert_eq!(SearchService::paginate(&filtered, 6, per_page).len(), 3);

    let strip = SearchService::page_numbers(1, total);
    assert_eq!(strip.first(), Some(&PageItem::Page(1)));
    assert_eq!(strip.last(), Some(&PageItem::Page(6)));
    assert!(strip.contains(&PageItem::Ellipsis));
}
