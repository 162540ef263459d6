use crate::models::booking::BookingTime;
use crate::models::property::{Property, PropertyType};

/// Filters the search page lets the user stack up. All of them must match
/// for a property to stay in the result list.
#[derive(Debug, Clone)]
pub struct SearchFilters {
    pub min_price: f64,
    pub max_price: f64,
    /// None means "all"
    pub property_type: Option<PropertyType>,
    /// Matches the city part of the property location (before the first comma)
    pub locations: Vec<String>,
    /// Every selected amenity must be present
    pub amenities: Vec<String>,
    /// Case-insensitive substring of name or location
    pub search_term: String,
    /// Billing mode whose cheapest room rate is compared against the price range
    pub booking_time: BookingTime,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_price: f64::MAX,
            property_type: None,
            locations: Vec::new(),
            amenities: Vec::new(),
            search_term: String::new(),
            booking_time: BookingTime::Daily,
        }
    }
}

/// One slot in the pagination strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

pub struct SearchService;

impl SearchService {
    pub fn filter<'a>(properties: &'a [Property], filters: &SearchFilters) -> Vec<&'a Property> {
        properties
            .iter()
            .filter(|property| Self::matches(property, filters))
            .collect()
    }

    fn matches(property: &Property, filters: &SearchFilters) -> bool {
        let lowest = property.lowest_rate(filters.booking_time);
        let price_in_range = lowest >= filters.min_price && lowest <= filters.max_price;

        let type_matches = filters
            .property_type
            .map(|t| property.property_type == t)
            .unwrap_or(true);

        let city = property
            .location
            .split(',')
            .next()
            .unwrap_or("")
            .trim()
            .to_string();
        let location_matches =
            filters.locations.is_empty() || filters.locations.iter().any(|l| l == &city);

        let amenity_matches = filters
            .amenities
            .iter()
            .all(|wanted| property.amenities.iter().any(|a| a == wanted));

        let term = filters.search_term.to_lowercase();
        let search_matches = term.is_empty()
            || property.name.to_lowercase().contains(&term)
            || property.location.to_lowercase().contains(&term);

        price_in_range && type_matches && location_matches && amenity_matches && search_matches
    }

    pub fn total_pages(result_count: usize, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        result_count.div_ceil(per_page)
    }

    /// Slice one page out of the filtered results (pages are 1-based)
    pub fn paginate<'a, T>(items: &'a [T], page: usize, per_page: usize) -> &'a [T] {
        if per_page == 0 || page == 0 {
            return &[];
        }
        let start = (page - 1) * per_page;
        if start >= items.len() {
            return &[];
        }
        let end = (start + per_page).min(items.len());
        &items[start..end]
    }

    /// Page-number strip with ellipses, at most five numbered slots around
    /// the current page
    pub fn page_numbers(current: usize, total: usize) -> Vec<PageItem> {
        const MAX_VISIBLE: usize = 5;
        let mut items = Vec::new();

        if total <= MAX_VISIBLE {
            for page in 1..=total {
                items.push(PageItem::Page(page));
            }
        } else if current <= 3 {
            for page in 1..=4 {
                items.push(PageItem::Page(page));
            }
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        } else if current >= total - 2 {
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            for page in (total - 3)..=total {
                items.push(PageItem::Page(page));
            }
        } else {
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            for page in (current - 1)..=(current + 1) {
                items.push(PageItem::Page(page));
            }
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        }

        items
    }
}
