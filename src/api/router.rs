//! API router.
//!
//! Returns a composable `Router`. Layers (outermost → innermost):
//! request tracing → CORS → `Cache-Control: no-store` → handler. The
//! no-store header keeps browsers from caching analysis responses.

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router with the full middleware stack.
pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(endpoints::health::root))
        .route("/health", get(endpoints::health::check))
        .route("/analyze-symptoms", post(endpoints::analyze::analyze))
        .route("/test", post(endpoints::analyze::smoke_test))
        .route("/nearby-facilities", post(endpoints::facilities::nearby))
        .with_state(ctx)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::{MockLlmClient, SymptomAnalyzer};
    use crate::places::PlacesClient;

    const MODEL_REPLY: &str = r#"Sure, here is the analysis:
{"possible_diagnoses":[{"diagnosis":"Chronic Migraine","likelihood":"High","symptoms":["headache","nausea"],"notes":"Recurring one-sided headache."}],"disclaimer":"D"}"#;

    fn test_ctx_with_reply(reply: &str) -> ApiContext {
        let analyzer = Arc::new(SymptomAnalyzer::new(
            Box::new(MockLlmClient::new(reply)),
            "mock-model",
        ));
        // Unroutable places base: lookups fail fast and exercise the fallback
        let places = Arc::new(PlacesClient::new("http://127.0.0.1:1", "test-key", 1));
        ApiContext::new(analyzer, places)
    }

    fn test_ctx() -> ApiContext {
        test_ctx_with_reply(MODEL_REPLY)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn root_returns_banner() {
        let app = api_router(test_ctx());
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Health Assistant API is running!");
    }

    #[tokio::test]
    async fn health_returns_ok_with_timestamp() {
        let app = api_router(test_ctx());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "OK");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn responses_carry_no_store_header() {
        let app = api_router(test_ctx());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
    }

    #[tokio::test]
    async fn analyze_returns_success_envelope() {
        let app = api_router(test_ctx());
        let response = app
            .oneshot(post_json(
                "/analyze-symptoms",
                r#"{"symptoms": "throbbing headache with nausea"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["diagnosis"], "Chronic Migraine");
        assert_eq!(json["data"]["severity"], "medium");
        assert_eq!(json["data"]["suggestedSpecialty"], "Neurology");
        assert_eq!(
            json["data"]["originalSymptoms"],
            "throbbing headache with nausea"
        );
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn analyze_trims_input_before_analysis() {
        let app = api_router(test_ctx());
        let response = app
            .oneshot(post_json(
                "/analyze-symptoms",
                r#"{"symptoms": "  headache  "}"#,
            ))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["originalSymptoms"], "headache");
    }

    #[tokio::test]
    async fn blank_symptoms_rejected_with_400() {
        let app = api_router(test_ctx());
        let response = app
            .oneshot(post_json("/analyze-symptoms", r#"{"symptoms": "   "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid input");
        assert_eq!(
            json["message"],
            "Please provide symptoms as a non-empty string"
        );
    }

    #[tokio::test]
    async fn missing_symptoms_field_rejected_with_400() {
        let app = api_router(test_ctx());
        let response = app.oneshot(post_json("/analyze-symptoms", "{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_json_reply_surfaces_as_500_envelope() {
        let app = api_router(test_ctx_with_reply("no structured reply today"));
        let response = app
            .oneshot(post_json("/analyze-symptoms", r#"{"symptoms": "cough"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Analysis failed");
    }

    #[tokio::test]
    async fn empty_diagnosis_list_returns_fallback_record() {
        let app = api_router(test_ctx_with_reply(
            r#"Sure! {"possible_diagnoses":[],"disclaimer":"D"}"#,
        ));
        let response = app
            .oneshot(post_json("/analyze-symptoms", r#"{"symptoms": "unease"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["diagnosis"], "Unable to analyze symptoms");
        assert_eq!(json["data"]["severity"], "unknown");
    }

    #[tokio::test]
    async fn smoke_test_route_reports_test_input() {
        let app = api_router(test_ctx());
        let response = app.oneshot(post_json("/test", "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Test completed successfully");
        assert!(json["testInput"]
            .as_str()
            .unwrap()
            .contains("overthinking"));
    }

    #[tokio::test]
    async fn facilities_lookup_degrades_to_static_fallback() {
        let app = api_router(test_ctx());
        let response = app
            .oneshot(post_json(
                "/nearby-facilities",
                r#"{"location": {"lat": 19.0945, "lng": 72.8252}, "specialty": "Cardiology"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["fallback"], true);
        assert_eq!(json["facilities"].as_array().unwrap().len(), 3);
        assert_eq!(
            json["facilities"][0]["name"],
            "Kokilaben Dhirubhai Ambani Hospital"
        );
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = api_router(test_ctx());
        let response = app
            .oneshot(Request::get("/nonexistent").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
