//! JSON response envelope and error mapping.
//!
//! # Responsibilities
//! - Build the response payload every branch shares (`requestNumber`,
//!   `entriesCount`, `message`)
//! - Map every failure in the taxonomy to its HTTP status and
//!   human-readable message
//!
//! # Design Decisions
//! - Bodies are pretty-printed JSON with an explicit charset, matching
//!   the service's wire contract
//! - Errors are terminal for their request; the catch-all path still
//!   emits a well-formed JSON body rather than dropping the connection

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::store::Entry;

const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Emergency body used if error serialization itself fails.
const FALLBACK_BODY: &str = "{\n  \"message\": \"Internal server error.\",\n  \"error\": true\n}";

/// Counter and collection size echoed in every response.
#[derive(Debug, Clone, Copy)]
pub struct ReplyMeta {
    pub request_number: u64,
    pub entries_count: usize,
}

/// One terminal failure per request; each maps 1:1 to an HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid 'word'. Use non-empty alphabetic text (letters/spaces/-, no numbers).")]
    InvalidWord,

    #[error("Invalid 'definition'. Provide a non-empty string (letters/punctuation allowed).")]
    InvalidDefinition,

    #[error("Invalid body. Send JSON or form-encoded 'word' and 'definition' fields.")]
    InvalidBody,

    #[error("Request body too large. Max ~1MB.")]
    BodyTooLarge,

    #[error("Request #{request_number}: word \"{word}\" not found!")]
    WordNotFound { word: String, request_number: u64 },

    #[error("Route not found.")]
    RouteNotFound,

    #[error("Warning! \"{word}\" already exists.")]
    AlreadyExists { word: String, existing: Entry },

    #[error("Method not allowed for this endpoint.")]
    MethodNotAllowed,

    #[error("Internal server error.")]
    Unexpected(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidWord | ApiError::InvalidDefinition | ApiError::InvalidBody => {
                StatusCode::BAD_REQUEST
            }
            ApiError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::WordNotFound { .. } | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::AlreadyExists { .. } => StatusCode::CONFLICT,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the JSON error response for this failure.
    pub fn into_reply(self, meta: ReplyMeta) -> Response {
        let mut payload = envelope(meta, self.to_string());
        payload.insert("error".into(), Value::Bool(true));
        match &self {
            ApiError::AlreadyExists { existing, .. } => {
                payload.insert("existing".into(), entry_value(existing));
            }
            ApiError::Unexpected(details) => {
                payload.insert("details".into(), Value::String(details.clone()));
            }
            _ => {}
        }

        let mut response = json_reply(self.status(), &payload);
        if matches!(self, ApiError::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("GET, POST, OPTIONS"));
        }
        response
    }
}

/// Fields every response carries.
pub fn envelope(meta: ReplyMeta, message: impl Into<String>) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("requestNumber".into(), json!(meta.request_number));
    payload.insert("entriesCount".into(), json!(meta.entries_count));
    payload.insert("message".into(), Value::String(message.into()));
    payload
}

pub fn entry_value(entry: &Entry) -> Value {
    serde_json::to_value(entry).unwrap_or(Value::Null)
}

/// Serialize `payload` as a pretty-printed JSON response.
pub fn json_reply(status: StatusCode, payload: &Map<String, Value>) -> Response {
    let content_type = [(
        header::CONTENT_TYPE,
        HeaderValue::from_static(CONTENT_TYPE_JSON),
    )];
    match serde_json::to_string_pretty(payload) {
        Ok(body) => (status, content_type, body).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to serialize response body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                content_type,
                FALLBACK_BODY,
            )
                .into_response()
        }
    }
}
