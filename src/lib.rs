//! Diagnostic HTTP endpoint.
//!
//! Reports, for any inbound request, the request line, the caller's source
//! address, the server's own identity, the server-local time, and a
//! normalized view of every received request header: the operational
//! answer to "what does this client, proxy, or load balancer actually
//! deliver?".
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │                HEADER PROBE                 │
//!                    │                                            │
//!   Client Request   │  ┌─────────┐   ┌───────────────────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│        inspect        │  │
//!                    │  │ router  │   │ negotiate → normalize │  │
//!                    │  └────┬────┘   │      → payload        │  │
//!                    │       │        └───────────┬───────────┘  │
//!                    │       │ /healthz           │              │
//!   Client Response  │       ▼                    ▼              │
//!   ◀────────────────┼── 200 empty        JSON body + headers    │
//!                    │                                            │
//!                    │  ┌──────────────────────────────────────┐ │
//!                    │  │        Cross-Cutting Concerns         │ │
//!                    │  │   ┌────────┐ ┌──────────┐ ┌───────┐  │ │
//!                    │  │   │ config │ │ identity │ │tracing│  │ │
//!                    │  │   └────────┘ └──────────┘ └───────┘  │ │
//!                    │  └──────────────────────────────────────┘ │
//!                    └────────────────────────────────────────────┘
//! ```
//!
//! The response representation is chosen from the `Accept` header between
//! `application/json` and `text/plain`; the body is the same JSON text
//! either way. See the `inspect::negotiate` module for the exact
//! (deliberately non-RFC-7231) rules.

// Core
pub mod inspect;

// HTTP surface
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod identity;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use identity::Identity;
pub use inspect::{ContentType, HeaderEntry, RequestReport};
