//! HTTP surface of the diagnostic endpoint.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, peer address via ConnectInfo)
//!     → inspect handler (negotiate → capture → serialize)
//!     → response with Content-Type, Vary and trace headers
//!
//! GET /healthz bypasses all of it and returns 200 with no body.
//! ```

pub mod server;

pub use server::{AppState, HttpServer, X_TRACE};
