//! Nearby-facilities lookup against the Google Places API.
//!
//! Keyed by the specialty suggested for the primary diagnosis. Provider
//! failure is recovered locally by substituting a fixed static facility
//! list, so the end user only ever sees reduced data freshness.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Search radius around the user's location, in meters.
pub const SEARCH_RADIUS_METERS: u32 = 5000;

/// Cap on returned facilities.
pub const MAX_RESULTS: usize = 8;

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Cannot reach the places service at {0}")]
    Connection(String),

    #[error("Places provider returned error (status {status}): {body}")]
    Provider { status: u16, body: String },

    #[error("Places provider rejected the request: {0}")]
    Rejected(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("No API key configured for places lookup")]
    MissingApiKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One nearby facility, shaped for the front end's hospital cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub id: String,
    pub name: String,
    pub location: Coordinates,
    pub address: String,
}

/// Static stand-in list served when the provider fails.
static FALLBACK_FACILITIES: LazyLock<Vec<FacilityRecord>> = LazyLock::new(|| {
    vec![
        FacilityRecord {
            id: "1".into(),
            name: "Kokilaben Dhirubhai Ambani Hospital".into(),
            location: Coordinates {
                lat: 19.131_050_0,
                lng: 72.825_052_8,
            },
            address: "Four Bungalows, Andheri West".into(),
        },
        FacilityRecord {
            id: "2".into(),
            name: "Lilavati Hospital and Research Centre".into(),
            location: Coordinates {
                lat: 19.050_995,
                lng: 72.829_25,
            },
            address: "Bandra West".into(),
        },
        FacilityRecord {
            id: "3".into(),
            name: "Nanavati Hospital".into(),
            location: Coordinates {
                lat: 19.095_786,
                lng: 72.839_986,
            },
            address: "Vile Parle West".into(),
        },
    ]
});

/// Clone of the static fallback list.
pub fn fallback_facilities() -> Vec<FacilityRecord> {
    FALLBACK_FACILITIES.clone()
}

/// Client for the Places Nearby Search REST API.
pub struct PlacesClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl PlacesClient {
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        }
    }

    /// Search hospitals/clinics near `location` matching the specialty
    /// keyword, capped at `MAX_RESULTS`.
    pub async fn nearby_facilities(
        &self,
        location: Coordinates,
        specialty: &str,
    ) -> Result<Vec<FacilityRecord>, PlacesError> {
        if self.api_key.is_empty() {
            return Err(PlacesError::MissingApiKey);
        }

        let url = format!("{}/nearbysearch/json", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("location", format!("{},{}", location.lat, location.lng)),
                ("radius", SEARCH_RADIUS_METERS.to_string()),
                ("keyword", format!("{specialty} hospital clinic")),
                ("type", "hospital".to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PlacesError::Connection(self.base_url.clone())
                } else {
                    PlacesError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PlacesError::HttpClient(e.to_string()))?;
        parse_nearby_response(&body)
    }
}

#[derive(Deserialize)]
struct NearbySearchResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    results: Vec<NearbyPlace>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct NearbyPlace {
    #[serde(default)]
    place_id: String,
    #[serde(default)]
    name: String,
    geometry: Option<PlaceGeometry>,
    #[serde(default)]
    vicinity: Option<String>,
}

#[derive(Deserialize)]
struct PlaceGeometry {
    location: Coordinates,
}

/// Parse a Nearby Search response body into facility records.
///
/// `ZERO_RESULTS` is a successful empty list; any other non-`OK` provider
/// status is an error. Results without geometry are skipped.
fn parse_nearby_response(body: &str) -> Result<Vec<FacilityRecord>, PlacesError> {
    let parsed: NearbySearchResponse =
        serde_json::from_str(body).map_err(|e| PlacesError::ResponseParsing(e.to_string()))?;

    match parsed.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Ok(vec![]),
        other => {
            let detail = parsed.error_message.unwrap_or_default();
            return Err(PlacesError::Rejected(format!("{other}: {detail}")));
        }
    }

    Ok(parsed
        .results
        .into_iter()
        .filter_map(|place| {
            let geometry = place.geometry?;
            Some(FacilityRecord {
                id: place.place_id,
                name: place.name,
                location: geometry.location,
                address: place.vicinity.unwrap_or_default(),
            })
        })
        .take(MAX_RESULTS)
        .collect())
}
