//! Fixed prompt template for the symptom analysis request.
//!
//! The template names the exact JSON schema the model must emit, enumerates
//! the allowed likelihood tiers, and embeds the disclaimer the model must
//! echo verbatim. The symptom text is interpolated exactly once.

/// Disclaimer the model must echo word-for-word in every response.
pub const DISCLAIMER: &str = "This information is for general knowledge and informational purposes only, and does not constitute medical advice. It is essential to consult with a qualified healthcare professional for any health concerns or before making any decisions related to your health or treatment.";

/// The allowed likelihood enumeration, exactly as the prompt states it.
pub const ALLOWED_LIKELIHOODS: &str = r#""High", "Moderate", or "Low""#;

/// Build the instruction string sent unmodified to the generative model.
pub fn build_analysis_prompt(symptoms: &str) -> String {
    format!(
        r#"You are a medical diagnostic assistant. Given a set of symptoms, analyze and return a response strictly in the following JSON format:

Return only valid JSON with no extra comments, text, or markdown.
Follow this exact schema:

{{
  "possible_diagnoses": [
    {{
      "diagnosis": "Name of the condition",
      "likelihood": "High | Moderate | Low",
      "symptoms": [
        "Symptom 1",
        "Symptom 2",
        "Related symptom 3"
      ],
      "notes": "A short note summarizing distinguishing features, treatment, and when to seek care."
    }}
  ],
  "disclaimer": "{DISCLAIMER}"
}}

Instructions:

- Base all content strictly on the symptoms provided.
- Include the most probable diagnoses first, and less likely ones after.
- Each diagnosis object must include the four required fields exactly as above.
- The 'symptoms' field should include matching symptoms from the input and other related symptoms as typically seen with that diagnosis.
- Use only {ALLOWED_LIKELIHOODS} for the likelihood field.
- The disclaimer field must be included in every output, word-for-word as shown.
- Do not include any explanation, introduction, or text outside the JSON block.
- Replace each block's fields with appropriate details for each possible diagnosis.

Input Symptoms: {symptoms}

Generate your answer only in this JSON format."#
    )
}
