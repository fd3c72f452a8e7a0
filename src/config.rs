use std::env;

/// Application-level constants
pub const APP_NAME: &str = "Health Assistant Backend";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default port the front end expects in local development.
pub const DEFAULT_PORT: u16 = 3001;

/// Default generative model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Gemini REST API base (overridable via `GEMINI_BASE_URL` for tests).
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Places REST API base (overridable via `PLACES_BASE_URL` for tests).
pub const PLACES_API_BASE: &str = "https://maps.googleapis.com/maps/api/place";

/// Default outbound HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub places_api_key: String,
    pub places_base_url: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// Missing API keys do not abort startup — the health endpoints stay
    /// usable and the affected routes fail per-request instead.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| GEMINI_API_BASE.to_string()),
            places_api_key: env::var("GOOGLE_MAPS_API_KEY").unwrap_or_default(),
            places_base_url: env::var("PLACES_BASE_URL")
                .unwrap_or_else(|_| PLACES_API_BASE.to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}
