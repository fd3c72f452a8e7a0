//! Shared types for the API layer.

use std::sync::Arc;

use serde::Serialize;

use crate::analysis::SymptomAnalyzer;
use crate::places::PlacesClient;

/// Shared context for all API routes. Each request borrows the same
/// analyzer and places client; no per-request state is kept anywhere.
#[derive(Clone)]
pub struct ApiContext {
    pub analyzer: Arc<SymptomAnalyzer>,
    pub places: Arc<PlacesClient>,
}

impl ApiContext {
    pub fn new(analyzer: Arc<SymptomAnalyzer>, places: Arc<PlacesClient>) -> Self {
        Self { analyzer, places }
    }
}

/// Success envelope: `{ success: true, data, timestamp }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub timestamp: String,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            timestamp: now_rfc3339(),
        }
    }
}

/// RFC 3339 timestamp for response envelopes.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_success_and_data() {
        let envelope = Envelope::new(serde_json::json!({"k": "v"}));
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["k"], "v");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let ts = now_rfc3339();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
