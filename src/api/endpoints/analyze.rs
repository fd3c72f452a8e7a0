//! Symptom analysis endpoints.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis::NormalizedAssessment;
use crate::api::error::ApiError;
use crate::api::types::{now_rfc3339, ApiContext, Envelope};

/// Fixed input for the `/test` smoke-test route.
const TEST_SYMPTOMS: &str = "I have overthinking problems, anxiety, and feel very low sometimes.";

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub symptoms: Option<String>,
}

/// `POST /analyze-symptoms` — run the full analysis pipeline.
///
/// Rejects missing or blank-after-trim symptom text with 400 before the
/// core runs. One inbound request triggers exactly one model call.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<Envelope<NormalizedAssessment>>, ApiError> {
    let symptoms = req
        .symptoms
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest("Please provide symptoms as a non-empty string".into())
        })?;

    tracing::info!(symptoms, "New analysis request");
    let assessment = ctx.analyzer.analyze(symptoms).await?;
    tracing::info!("Analysis completed successfully");

    Ok(Json(Envelope::new(assessment)))
}

#[derive(Serialize)]
pub struct TestResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(rename = "testInput")]
    pub test_input: &'static str,
    pub data: NormalizedAssessment,
    pub timestamp: String,
}

/// `POST /test` — run the pipeline on a fixed symptom sentence.
pub async fn smoke_test(
    State(ctx): State<ApiContext>,
) -> Result<Json<TestResponse>, ApiError> {
    let assessment = ctx.analyzer.analyze(TEST_SYMPTOMS).await?;

    Ok(Json(TestResponse {
        success: true,
        message: "Test completed successfully",
        test_input: TEST_SYMPTOMS,
        data: assessment,
        timestamp: now_rfc3339(),
    }))
}
