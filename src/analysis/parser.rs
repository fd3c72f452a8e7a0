//! Best-effort JSON recovery from free-form model output.
//!
//! The model is told to emit nothing but a JSON object, but in practice
//! replies arrive wrapped in prose or markdown fences. The extractor walks
//! the text with a bracket-depth scan that is string- and escape-aware and
//! takes the first complete top-level object, so trailing prose or a second
//! object cannot corrupt the candidate span.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{DiagnosisEntry, DiagnosisReport};
use super::AnalysisError;

/// Parse a raw model reply into a `DiagnosisReport`.
///
/// Fails with `NoJsonFound` when the text contains no complete JSON object,
/// and `MalformedJson` when a candidate span exists but does not parse. The
/// raw text is logged at debug level for operator inspection; it is never
/// returned to the caller.
pub fn parse_diagnosis_report(raw: &str) -> Result<DiagnosisReport, AnalysisError> {
    let span = extract_first_json_object(raw).ok_or(AnalysisError::NoJsonFound)?;

    let value: Value = serde_json::from_str(span).map_err(|e| {
        tracing::debug!(raw, "Model response span failed JSON parsing");
        AnalysisError::MalformedJson(e.to_string())
    })?;

    Ok(report_from_value(&value))
}

/// Find the first complete top-level `{...}` object in the text.
///
/// Tracks string literals and backslash escapes so braces inside string
/// values do not affect the depth count. Returns `None` when no `{` exists
/// or no balancing `}` is ever reached.
pub fn extract_first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Reshape a parsed JSON value into a report, tolerating missing or
/// mistyped fields: entries that fail to deserialize are skipped, absent
/// fields degrade to empty defaults.
fn report_from_value(value: &Value) -> DiagnosisReport {
    let possible_diagnoses: Vec<DiagnosisEntry> = value
        .get("possible_diagnoses")
        .and_then(Value::as_array)
        .map(|arr| parse_array_lenient(arr))
        .unwrap_or_default();

    let disclaimer = value
        .get("disclaimer")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    DiagnosisReport {
        possible_diagnoses,
        disclaimer,
    }
}

/// Parse an array leniently — skip items that fail to deserialize.
fn parse_array_lenient<T: DeserializeOwned>(items: &[Value]) -> Vec<T> {
    items
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect()
}
