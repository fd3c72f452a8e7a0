//! Service banner and health check endpoints.

use axum::Json;
use serde::Serialize;

use crate::api::types::now_rfc3339;

#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
}

/// `GET /` — service banner.
pub async fn root() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Health Assistant API is running!",
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// `GET /health` — connection check for the front end.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: now_rfc3339(),
    })
}
