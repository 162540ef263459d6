pub mod booking;
pub mod offer;
pub mod property;
pub mod user;
