//! Ordered keyword lookup mapping diagnosis text to a medical specialty.

/// Keyword → specialty table, first match wins. Evaluated in order, so the
/// insertion order is a correctness-relevant tie-break; keep it an ordered
/// slice, never a hash map.
pub const SPECIALTY_TABLE: &[(&str, &str)] = &[
    ("heart", "Cardiology"),
    ("cardiac", "Cardiology"),
    ("chest", "Cardiology"),
    ("lung", "Pulmonology"),
    ("respiratory", "Pulmonology"),
    ("breathing", "Pulmonology"),
    ("bone", "Orthopedics"),
    ("joint", "Orthopedics"),
    ("muscle", "Orthopedics"),
    ("skin", "Dermatology"),
    ("eye", "Ophthalmology"),
    ("ear", "ENT"),
    ("throat", "ENT"),
    ("stomach", "Gastroenterology"),
    ("digestive", "Gastroenterology"),
    ("mental", "Psychiatry"),
    ("anxiety", "Psychiatry"),
    ("depression", "Psychiatry"),
    ("neurolog", "Neurology"),
    ("headache", "Neurology"),
    ("migraine", "Neurology"),
];

/// Specialty used when no keyword matches.
pub const DEFAULT_SPECIALTY: &str = "General Practice";

/// Map a diagnosis name to a specialty via lowercase substring lookup.
pub fn suggest_specialty(diagnosis: &str) -> &'static str {
    let lowered = diagnosis.to_lowercase();
    for &(keyword, specialty) in SPECIALTY_TABLE {
        if lowered.contains(keyword) {
            return specialty;
        }
    }
    DEFAULT_SPECIALTY
}
