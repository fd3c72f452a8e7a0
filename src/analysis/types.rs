use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::AnalysisError;

/// One candidate diagnosis as stated by the model.
///
/// Every field is lenient — the model may omit or garble fields, and a
/// missing field degrades to its empty default instead of failing the parse.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DiagnosisEntry {
    pub diagnosis: String,
    /// Model-assigned confidence tier: "High", "Moderate" or "Low".
    pub likelihood: String,
    pub symptoms: Vec<String>,
    pub notes: String,
}

/// The full parsed model reply, most-probable diagnosis first.
/// Order is as returned by the model — never re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DiagnosisReport {
    pub possible_diagnoses: Vec<DiagnosisEntry>,
    pub disclaimer: String,
}

/// UI-facing urgency tier derived from likelihood plus keyword heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    /// Only used by the fallback record when the model reply had no diagnoses.
    Unknown,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Flat assessment record shaped for the front end.
///
/// Field names on the wire match what the React app consumes, so the mixed
/// snake/camel casing is deliberate. Request-scoped, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedAssessment {
    pub diagnosis: String,
    pub severity: Severity,
    pub description: String,
    pub advice: String,
    pub symptoms_list: Vec<String>,
    #[serde(rename = "suggestedSpecialty")]
    pub suggested_specialty: String,
    #[serde(rename = "originalSymptoms")]
    pub original_symptoms: String,
    #[serde(rename = "allDiagnoses")]
    pub all_diagnoses: Vec<DiagnosisEntry>,
    pub disclaimer: String,
}

/// Generative model client boundary. Opaque and non-deterministic — may
/// return malformed or prose-wrapped JSON; downstream parsing must cope.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, AnalysisError>;
}
