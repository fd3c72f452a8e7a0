//! HTTP layer for the symptom-checker front end.
//!
//! A thin axum surface over the analysis pipeline: input validation, the
//! success/failure JSON envelopes the React app consumes, and the
//! CORS/no-store/trace middleware the browser needs. The router is
//! composable — `api_router()` returns a `Router` that can be mounted on
//! any axum server.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_api_server, ApiServer, ApiSession};
pub use types::ApiContext;
