//! Reshape a parsed `DiagnosisReport` into the flat record the UI renders.

use super::severity::classify_severity;
use super::specialty::{suggest_specialty, DEFAULT_SPECIALTY};
use super::types::{DiagnosisEntry, DiagnosisReport, NormalizedAssessment, Severity};

const FALLBACK_DIAGNOSIS: &str = "Unable to analyze symptoms";
const FALLBACK_DESCRIPTION: &str = "Please consult a healthcare professional";
const FALLBACK_ADVICE: &str = "Seek medical attention for proper diagnosis";

const GENERIC_ADVICE: &str =
    "Monitor symptoms and consult a healthcare professional if they persist or worsen.";

/// Derive the UI assessment from the parsed report and the original input.
///
/// An absent or empty diagnosis list yields a fixed fallback record with the
/// original input and raw report echoed back. The disclaimer is copied
/// through unmodified — no verification happens here.
pub fn normalize_report(report: DiagnosisReport, original_symptoms: &str) -> NormalizedAssessment {
    let Some(primary) = report.possible_diagnoses.first().cloned() else {
        return NormalizedAssessment {
            diagnosis: FALLBACK_DIAGNOSIS.to_string(),
            severity: Severity::Unknown,
            description: FALLBACK_DESCRIPTION.to_string(),
            advice: FALLBACK_ADVICE.to_string(),
            symptoms_list: vec![],
            suggested_specialty: DEFAULT_SPECIALTY.to_string(),
            original_symptoms: original_symptoms.to_string(),
            all_diagnoses: report.possible_diagnoses,
            disclaimer: report.disclaimer,
        };
    };

    let advice = build_advice(&report.possible_diagnoses);

    NormalizedAssessment {
        severity: classify_severity(&primary),
        suggested_specialty: suggest_specialty(&primary.diagnosis).to_string(),
        description: primary.notes.clone(),
        symptoms_list: primary.symptoms.clone(),
        diagnosis: primary.diagnosis,
        advice,
        original_symptoms: original_symptoms.to_string(),
        all_diagnoses: report.possible_diagnoses,
        disclaimer: report.disclaimer,
    }
}

/// Consolidated advice string. Only the first `High` entry (or, failing
/// that, the first `Moderate` entry) in list order contributes its notes.
fn build_advice(diagnoses: &[DiagnosisEntry]) -> String {
    if let Some(high) = diagnoses.iter().find(|d| d.likelihood == "High") {
        format!(
            "Primary concern: {} Consider consulting a healthcare professional for proper evaluation.",
            high.notes
        )
    } else if let Some(moderate) = diagnoses.iter().find(|d| d.likelihood == "Moderate") {
        format!(
            "Possible conditions to monitor: {} If symptoms persist or worsen, seek medical attention.",
            moderate.notes
        )
    } else {
        GENERIC_ADVICE.to_string()
    }
}
