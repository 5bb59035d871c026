//! Shared service state and request counting.
//!
//! # Responsibilities
//! - Own the dictionary and the monotonic request counter
//! - Count every inbound request (preflight and unmatched routes
//!   included) before routing runs
//!
//! # Design Decisions
//! - State is an instance owned by the server, never a process-wide
//!   singleton; tests construct a fresh one per server
//! - The dictionary sits behind a `Mutex` so the duplicate check and
//!   the append run as one critical section; the lock is never held
//!   across an await point

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::config::ServerConfig;
use crate::store::Dictionary;

/// State injected into handlers.
pub type AppState = Arc<ServiceState>;

/// Dictionary, request counter, and request limits for one server.
pub struct ServiceState {
    pub dictionary: Mutex<Dictionary>,
    counter: AtomicU64,
    pub max_body_bytes: usize,
}

impl ServiceState {
    pub fn new(config: &ServerConfig) -> AppState {
        Arc::new(Self {
            dictionary: Mutex::new(Dictionary::new()),
            counter: AtomicU64::new(0),
            max_body_bytes: config.max_body_bytes,
        })
    }

    /// Count one inbound request; returns the post-increment value.
    pub fn next_request_number(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Post-increment counter value for the current request, attached to
/// request extensions by [`count_requests`] before routing.
#[derive(Debug, Clone, Copy)]
pub struct RequestNumber(pub u64);

/// Middleware counting every request we handle (OPTIONS included).
pub async fn count_requests(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let number = state.next_request_number();
    req.extensions_mut().insert(RequestNumber(number));
    next.run(req).await
}
