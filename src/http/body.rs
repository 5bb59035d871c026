//! Request body parsing for the insert operation.
//!
//! # Responsibilities
//! - Extract `word` and `definition` from a raw request body
//!
//! # Design Decisions
//! - Parser attempts run in a fixed order, first success wins:
//!   JSON object first, then form-encoded key/value pairs
//! - A JSON object with missing fields still parses; absent fields
//!   default to the empty string and fail validation downstream
//! - The form fallback only counts as a parse if it produced at least
//!   one expected key, so garbage and empty bodies map to `InvalidBody`
//!   instead of `InvalidWord`

use serde_json::Value;
use url::form_urlencoded;

use crate::http::response::ApiError;

/// Candidate fields extracted from a request body, untrimmed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DefinitionInput {
    pub word: String,
    pub definition: String,
}

/// Parse a raw body as JSON first, falling back to form-encoded pairs.
pub fn parse_payload(raw: &[u8]) -> Result<DefinitionInput, ApiError> {
    if let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(raw) {
        return Ok(DefinitionInput {
            word: string_field(&fields, "word"),
            definition: string_field(&fields, "definition"),
        });
    }

    // Fallback: x-www-form-urlencoded or plain "word=...&definition=..."
    let mut word = None;
    let mut definition = None;
    for (key, value) in form_urlencoded::parse(raw) {
        match key.as_ref() {
            "word" => word = Some(value.into_owned()),
            "definition" => definition = Some(value.into_owned()),
            _ => {}
        }
    }

    if word.is_none() && definition.is_none() {
        return Err(ApiError::InvalidBody);
    }

    Ok(DefinitionInput {
        word: word.unwrap_or_default(),
        definition: definition.unwrap_or_default(),
    })
}

fn string_field(fields: &serde_json::Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
