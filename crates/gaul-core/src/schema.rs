//! Response-schema contracts for the structured AI calls.
//!
//! The builders produce the schema handed to the model; the parse helpers
//! reject any reply that does not conform before it reaches callers.

use serde::Deserialize;
use serde_json::{Value, json};

use gaul_genai::GenAiError;
use gaul_types::Interpretation;

/// Schema of the seven-field interpretation object
pub fn interpretation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "termPhrase": {
                "type": "STRING",
                "description": "The entered term or phrase."
            },
            "platform": {
                "type": "STRING",
                "description": "The platform where the term is commonly used (e.g., Instagram, TikTok, WhatsApp)."
            },
            "meaning": {
                "type": "STRING",
                "description": "A brief description of the meaning of the term."
            },
            "linguisticCategory": {
                "type": "STRING",
                "description": "The linguistic category of the term (e.g., Emoji, Singkatan, Slang)."
            },
            "socialCategory": {
                "type": "STRING",
                "description": "The social category of the term (e.g., Komunikasi Sosial, Ekspresi Emosi)."
            },
            "explanation": {
                "type": "STRING",
                "description": "A detailed explanation of the term and its usage."
            },
            "references": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Links to references for further reading."
            }
        },
        "required": [
            "termPhrase",
            "platform",
            "meaning",
            "linguisticCategory",
            "socialCategory",
            "explanation"
        ]
    })
}

/// Schema of the related-terms suggestion object
pub fn related_terms_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "relatedTerms": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Other slang terms related to the query."
            }
        },
        "required": ["relatedTerms"]
    })
}

/// Wire shape of the related-terms reply
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTermsPayload {
    #[serde(default)]
    pub related_terms: Vec<String>,
}

/// Deserialize a structured reply, mapping mismatch to a schema violation
pub fn parse_interpretation(value: Value) -> Result<Interpretation, GenAiError> {
    serde_json::from_value(value).map_err(|e| GenAiError::Schema(e.to_string()))
}

pub fn parse_related_terms(value: Value) -> Result<Vec<String>, GenAiError> {
    let payload: RelatedTermsPayload =
        serde_json::from_value(value).map_err(|e| GenAiError::Schema(e.to_string()))?;

    Ok(payload.related_terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpretation_schema_requires_meaning_but_not_references() {
        let schema = interpretation_schema();
        let required = schema["required"].as_array().unwrap();

        assert!(required.iter().any(|f| f == "meaning"));
        assert!(!required.iter().any(|f| f == "references"));
        assert_eq!(schema["properties"]["references"]["type"], "ARRAY");
    }

    #[test]
    fn parses_a_conforming_interpretation() {
        let value = json!({
            "termPhrase": "rizz",
            "platform": "TikTok",
            "meaning": "charisma, especially in romantic contexts",
            "linguisticCategory": "Slang",
            "socialCategory": "Komunikasi Sosial",
            "explanation": "Shortened from charisma.",
            "references": ["https://en.wiktionary.org/wiki/rizz"]
        });

        let interpretation = parse_interpretation(value).unwrap();
        assert_eq!(interpretation.term_phrase, "rizz");
        assert_eq!(interpretation.references.len(), 1);
    }

    #[test]
    fn missing_meaning_is_a_schema_violation() {
        let value = json!({
            "termPhrase": "rizz",
            "platform": "TikTok",
            "linguisticCategory": "Slang",
            "socialCategory": "Komunikasi Sosial",
            "explanation": "Shortened from charisma."
        });

        let err = parse_interpretation(value).unwrap_err();
        assert!(matches!(err, GenAiError::Schema(_)));
    }

    #[test]
    fn related_terms_may_be_omitted_entirely() {
        assert!(parse_related_terms(json!({})).unwrap().is_empty());

        let terms = parse_related_terms(json!({ "relatedTerms": ["drip", "sigma"] })).unwrap();
        assert_eq!(terms, vec!["drip", "sigma"]);
    }

    #[test]
    fn non_object_reply_is_a_schema_violation() {
        let err = parse_related_terms(json!("drip")).unwrap_err();
        assert!(matches!(err, GenAiError::Schema(_)));
    }
}
