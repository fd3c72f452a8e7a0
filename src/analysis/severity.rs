//! Severity tier heuristic for the primary diagnosis.

use super::types::{DiagnosisEntry, Severity};

/// Conditions whose mention upgrades a high-likelihood diagnosis to `high`
/// severity. Matched as lowercase substrings over the diagnosis name and
/// notes; compound words can over-trigger.
pub const SERIOUS_CONDITION_KEYWORDS: &[&str] = &[
    "heart",
    "cardiac",
    "stroke",
    "chest pain",
    "breathing",
    "emergency",
];

/// Derive a severity tier from the model's stated likelihood plus a keyword
/// scan. `Moderate` and `Low` likelihoods never exceed `low` severity
/// regardless of keyword content.
pub fn classify_severity(primary: &DiagnosisEntry) -> Severity {
    if primary.likelihood != "High" {
        return Severity::Low;
    }

    let diagnosis = primary.diagnosis.to_lowercase();
    let notes = primary.notes.to_lowercase();
    let serious = SERIOUS_CONDITION_KEYWORDS
        .iter()
        .any(|kw| diagnosis.contains(kw) || notes.contains(kw));

    if serious {
        Severity::High
    } else {
        Severity::Medium
    }
}
