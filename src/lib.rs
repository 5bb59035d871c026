//! Wordbook: an in-memory dictionary REST API.
//!
//! A small lookup/insert service built with Tokio and Axum. Definitions
//! live in a single in-memory collection for the process lifetime; the
//! service guards against duplicate words and malformed input, and every
//! response carries the running request count.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────┐
//!                      │                 WORDBOOK                  │
//!                      │                                           │
//!     Client Request   │  ┌─────────┐   ┌──────────┐   ┌────────┐ │
//!     ─────────────────┼─▶│ counter │──▶│  router  │──▶│handlers│ │
//!                      │  │ layer   │   │  (axum)  │   └───┬────┘ │
//!                      │  └─────────┘   └──────────┘       │      │
//!                      │                                   ▼      │
//!                      │  ┌──────────┐   ┌──────────┐  ┌────────┐ │
//!     Client Response  │  │   CORS   │◀──│ JSON     │◀─│ store  │ │
//!     ◀────────────────┼──│  headers │   │ envelope │  │validate│ │
//!                      │  └──────────┘   └──────────┘  └────────┘ │
//!                      └──────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod store;
pub mod validate;

pub use config::ServerConfig;
pub use http::HttpServer;
