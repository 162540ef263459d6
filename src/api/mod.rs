pub mod auth;
pub mod bookings;
pub mod client;
pub mod documents;
pub mod offers;
pub mod properties;

pub use client::ApiClient;

/// Failures surfaced by the API client. 401s that survive the single
/// refresh-and-retry attempt become `SessionExpired`; everything else keeps
/// the server-provided message for display.
#[derive(Debug)]
pub enum ApiError {
    /// Access token rejected and refresh failed; the session has been cleared
    SessionExpired,
    /// Non-2xx response with the message the backend sent
    Status { status: u16, message: String },
    /// Transport-level failure before any response arrived
    Network(String),
    /// 2xx response whose body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::SessionExpired => write!(f, "Session expired. Please login again."),
            ApiError::Status { status, message } => {
                write!(f, "Request failed with status {}: {}", status, message)
            }
            ApiError::Network(message) => write!(f, "Network error: {}", message),
            ApiError::Decode(message) => write!(f, "Unexpected response: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}
