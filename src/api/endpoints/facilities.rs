//! Nearby-facilities proxy endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::{now_rfc3339, ApiContext};
use crate::places::{fallback_facilities, Coordinates, FacilityRecord};

#[derive(Deserialize)]
pub struct FacilitiesRequest {
    pub location: Coordinates,
    pub specialty: String,
}

#[derive(Serialize)]
pub struct FacilitiesResponse {
    pub success: bool,
    pub facilities: Vec<FacilityRecord>,
    /// True when the provider failed and the static list was substituted.
    pub fallback: bool,
    pub timestamp: String,
}

/// `POST /nearby-facilities` — facilities near the user matching the
/// suggested specialty. Provider failure degrades to the static fallback
/// list instead of an error response.
pub async fn nearby(
    State(ctx): State<ApiContext>,
    Json(req): Json<FacilitiesRequest>,
) -> Result<Json<FacilitiesResponse>, ApiError> {
    let (facilities, fallback) = match ctx
        .places
        .nearby_facilities(req.location, &req.specialty)
        .await
    {
        Ok(list) => (list, false),
        Err(e) => {
            tracing::warn!(error = %e, "Places lookup failed, substituting static fallback");
            (fallback_facilities(), true)
        }
    };

    Ok(Json(FacilitiesResponse {
        success: true,
        facilities,
        fallback,
        timestamp: now_rfc3339(),
    }))
}
