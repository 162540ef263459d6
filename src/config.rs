use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8000/api/";
const DEFAULT_TAX_RATE: f64 = 0.18;
// Backend charges 5% GST below this per-unit room price, 18% at or above it
const DEFAULT_GST_SLAB_THRESHOLD: f64 = 7500.0;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the booking backend, always with a trailing slash
    pub api_url: String,
    /// Tax rate applied to the discounted booking total
    pub tax_rate: f64,
    /// Per-unit room price at which the higher GST slab starts
    pub gst_slab_threshold: f64,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            tax_rate: DEFAULT_TAX_RATE,
            gst_slab_threshold: DEFAULT_GST_SLAB_THRESHOLD,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Create a config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_url: std::env::var("API_URL")
                .ok()
                .map(|url| normalize_api_url(&url))
                .unwrap_or(defaults.api_url),
            tax_rate: std::env::var("TAX_RATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.tax_rate),
            gst_slab_threshold: std::env::var("GST_SLAB_THRESHOLD")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.gst_slab_threshold),
            request_timeout: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }
}

fn normalize_api_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
