//! Orchestrates one symptom analysis: prompt → model → parse → normalize.

use super::normalize::normalize_report;
use super::parser::parse_diagnosis_report;
use super::prompt::build_analysis_prompt;
use super::types::{LlmClient, NormalizedAssessment};
use super::AnalysisError;

/// Runs the analysis pipeline against a generative model client.
///
/// Each call is independent: one inbound request triggers exactly one
/// outbound model call, with no retries, caching or shared mutable state.
/// Failures surface immediately to the caller.
pub struct SymptomAnalyzer {
    llm: Box<dyn LlmClient>,
    model_name: String,
}

impl SymptomAnalyzer {
    pub fn new(llm: Box<dyn LlmClient>, model_name: &str) -> Self {
        Self {
            llm,
            model_name: model_name.to_string(),
        }
    }

    /// Analyze trimmed, non-empty symptom text into a UI assessment.
    ///
    /// Input validation (blank/missing text) is the HTTP layer's job; by the
    /// time text reaches here it is assumed non-empty.
    pub async fn analyze(&self, symptoms: &str) -> Result<NormalizedAssessment, AnalysisError> {
        let prompt = build_analysis_prompt(symptoms);

        tracing::info!(
            model = %self.model_name,
            input_chars = symptoms.len(),
            "Sending symptom analysis prompt to model"
        );
        let raw = self.llm.generate(&self.model_name, &prompt).await?;
        tracing::debug!(response_chars = raw.len(), "Model response received");

        let report = parse_diagnosis_report(&raw)?;
        Ok(normalize_report(report, symptoms))
    }
}
