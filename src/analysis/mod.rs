//! Symptom analysis pipeline: prompt → generative model → JSON extraction →
//! severity/specialty classification → UI-shaped assessment.
//!
//! The "diagnosis" itself is delegated entirely to the generative model; the
//! bespoke logic here is the fixed prompt template, best-effort JSON recovery
//! from free-form model text, and the keyword classifiers that reshape the
//! parsed report for the front end.

pub mod gemini;
pub mod normalize;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod severity;
pub mod specialty;
pub mod types;

pub use gemini::*;
pub use normalize::*;
pub use orchestrator::*;
pub use parser::*;
pub use prompt::*;
pub use severity::*;
pub use specialty::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Cannot reach the generative model service at {0}")]
    ModelConnection(String),

    #[error("Generative model returned error (status {status}): {body}")]
    ModelError { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("No JSON object found in model response")]
    NoJsonFound,

    #[error("Malformed JSON in model response: {0}")]
    MalformedJson(String),

    #[error("Response envelope parsing error: {0}")]
    ResponseParsing(String),
}
