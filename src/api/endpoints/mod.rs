//! API endpoint handlers.
//!
//! Each module corresponds to one piece of the front end: health checks,
//! symptom analysis, and the nearby-facilities map.

pub mod analyze;
pub mod facilities;
pub mod health;
