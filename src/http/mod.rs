//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing, handlers)
//!     → state.rs (count request, attach request number)
//!     → body.rs (capped read, JSON-then-form parse) [POST only]
//!     → response.rs (JSON envelope, error mapping)
//!     → Send to client (CORS headers on every response)
//! ```

pub mod body;
pub mod response;
pub mod server;
pub mod state;

pub use server::HttpServer;
