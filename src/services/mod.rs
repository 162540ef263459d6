pub mod invoice_service;
pub mod pricing_service;
pub mod search_service;
