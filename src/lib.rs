pub mod analysis; // Symptom analysis pipeline: prompt → model → parse → normalize
pub mod api; // HTTP layer (axum)
pub mod config;
pub mod places; // Nearby-facilities lookup (Google Places proxy)
