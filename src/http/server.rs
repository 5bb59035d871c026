//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, request counting, CORS headers)
//! - Map each (method, path) to the lookup/insert operations
//! - Serve with graceful shutdown

use std::sync::MutexGuard;

use axum::{
    extract::{RawQuery, Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use url::form_urlencoded;

use crate::config::ServerConfig;
use crate::http::body::parse_payload;
use crate::http::response::{entry_value, envelope, json_reply, ApiError, ReplyMeta};
use crate::http::state::{count_requests, AppState, RequestNumber, ServiceState};
use crate::store::Dictionary;
use crate::validate::{is_valid_definition, is_valid_word};

/// HTTP server for the dictionary API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with a fresh, empty dictionary.
    pub fn new(config: ServerConfig) -> Self {
        let state = ServiceState::new(&config);
        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The counter middleware sits inside the header layers so every
    /// request is counted, matched route or not, and every response
    /// (204 and errors included) carries the CORS headers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(service_info).fallback(unmatched_route))
            .route(
                "/api/definitions",
                get(lookup_definition)
                    .post(create_definition)
                    .options(preflight)
                    .fallback(method_not_allowed),
            )
            .fallback(unmatched_route)
            .layer(middleware::from_fn_with_state(
                state.clone(),
                count_requests,
            ))
            .with_state(state)
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("GET,POST,OPTIONS"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

}

fn dictionary(state: &ServiceState) -> Result<MutexGuard<'_, Dictionary>, ApiError> {
    state
        .dictionary
        .lock()
        .map_err(|err| ApiError::Unexpected(err.to_string()))
}

/// `GET /` — service metadata.
async fn service_info(
    State(state): State<AppState>,
    Extension(RequestNumber(request_number)): Extension<RequestNumber>,
) -> Response {
    let entries = match dictionary(&state) {
        Ok(guard) => guard,
        Err(err) => return internal_error(err, request_number),
    };
    let meta = ReplyMeta {
        request_number,
        entries_count: entries.len(),
    };

    let mut payload = envelope(meta, "Dictionary API is running.");
    payload.insert(
        "routes".into(),
        json!([
            { "method": "GET", "path": "/api/definitions?word=book" },
            { "method": "POST", "path": "/api/definitions" },
        ]),
    );
    json_reply(StatusCode::OK, &payload)
}

/// First `word` value in the query string, or empty if absent. Parsed
/// by hand so odd query strings (repeated parameters, stray keys) stay
/// inside the JSON envelope instead of tripping an extractor rejection.
fn lookup_word(query: &str) -> String {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "word")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

/// `GET /api/definitions?word=book` — the lookup operation.
async fn lookup_definition(
    State(state): State<AppState>,
    Extension(RequestNumber(request_number)): Extension<RequestNumber>,
    RawQuery(query): RawQuery,
) -> Response {
    let word = lookup_word(query.as_deref().unwrap_or_default());
    let word = word.trim().to_string();

    let entries = match dictionary(&state) {
        Ok(guard) => guard,
        Err(err) => return internal_error(err, request_number),
    };
    let meta = ReplyMeta {
        request_number,
        entries_count: entries.len(),
    };

    if !is_valid_word(&word) {
        tracing::debug!(request_number, word = %word, "Rejected lookup, invalid word");
        return ApiError::InvalidWord.into_reply(meta);
    }

    match entries.find_by_word(&word) {
        Some(entry) => {
            tracing::debug!(request_number, word = %word, "Definition found");
            let mut payload = envelope(meta, format!("Definition found for \"{word}\"."));
            payload.insert("result".into(), entry_value(entry));
            json_reply(StatusCode::OK, &payload)
        }
        None => {
            tracing::debug!(request_number, word = %word, "Word not found");
            ApiError::WordNotFound {
                word,
                request_number,
            }
            .into_reply(meta)
        }
    }
}

/// `POST /api/definitions` — the insert operation.
///
/// Accepts JSON, x-www-form-urlencoded, or plain text
/// "word=...&definition=...".
async fn create_definition(
    State(state): State<AppState>,
    Extension(RequestNumber(request_number)): Extension<RequestNumber>,
    request: Request,
) -> Response {
    // Read the body before taking the lock; the read may suspend while
    // bytes arrive and is capped to bound memory against slow senders.
    let body = axum::body::to_bytes(request.into_body(), state.max_body_bytes).await;

    let mut entries = match dictionary(&state) {
        Ok(guard) => guard,
        Err(err) => return internal_error(err, request_number),
    };
    let meta = ReplyMeta {
        request_number,
        entries_count: entries.len(),
    };

    let raw = match body {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(request_number, error = %err, "Rejected request body over size cap");
            return ApiError::BodyTooLarge.into_reply(meta);
        }
    };

    let input = match parse_payload(&raw) {
        Ok(input) => input,
        Err(err) => {
            tracing::debug!(request_number, "Rejected unparseable body");
            return err.into_reply(meta);
        }
    };

    let word = input.word.trim().to_string();
    let definition = input.definition.trim().to_string();

    if !is_valid_word(&word) {
        tracing::debug!(request_number, word = %word, "Rejected insert, invalid word");
        return ApiError::InvalidWord.into_reply(meta);
    }
    if !is_valid_definition(&definition) {
        tracing::debug!(request_number, word = %word, "Rejected insert, invalid definition");
        return ApiError::InvalidDefinition.into_reply(meta);
    }

    // Duplicate check and append run under the same guard.
    if let Some(existing) = entries.find_by_word(&word) {
        tracing::debug!(request_number, word = %word, "Rejected duplicate insert");
        return ApiError::AlreadyExists {
            word,
            existing: existing.clone(),
        }
        .into_reply(meta);
    }

    let entry = entries.insert(&word, &definition);
    let meta = ReplyMeta {
        request_number,
        entries_count: entries.len(),
    };

    tracing::info!(request_number, word = %entry.word, "New entry recorded");
    let mut payload = envelope(meta, format!("New entry recorded: \"{word}\""));
    payload.insert("result".into(), entry_value(&entry));
    json_reply(StatusCode::CREATED, &payload)
}

/// `OPTIONS /api/definitions` — CORS preflight.
async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Known path, unsupported method.
async fn method_not_allowed(
    State(state): State<AppState>,
    Extension(RequestNumber(request_number)): Extension<RequestNumber>,
) -> Response {
    let entries_count = match dictionary(&state) {
        Ok(guard) => guard.len(),
        Err(err) => return internal_error(err, request_number),
    };
    ApiError::MethodNotAllowed.into_reply(ReplyMeta {
        request_number,
        entries_count,
    })
}

/// Fallback for everything else: preflight still gets its 204, any
/// other request is a missing route.
async fn unmatched_route(
    State(state): State<AppState>,
    Extension(RequestNumber(request_number)): Extension<RequestNumber>,
    method: Method,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }

    let entries_count = match dictionary(&state) {
        Ok(guard) => guard.len(),
        Err(err) => return internal_error(err, request_number),
    };
    tracing::debug!(request_number, "No route matched");
    ApiError::RouteNotFound.into_reply(ReplyMeta {
        request_number,
        entries_count,
    })
}

/// Catch-all: the client still receives a well-formed JSON error body.
fn internal_error(err: ApiError, request_number: u64) -> Response {
    tracing::error!(request_number, error = %err, "Unexpected failure while handling request");
    err.into_reply(ReplyMeta {
        request_number,
        entries_count: 0,
    })
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
