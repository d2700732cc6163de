//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → env overrides (LISTEN_HOST / LISTEN_PORT)
//!     → CLI flag overrides (parsed in main)
//!     → ServerConfig (immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - Config is fixed at startup; there is no reload
//! - Every field has a default so a bare invocation just works
//! - An unparseable port fails startup instead of being papered over

pub mod schema;

pub use schema::{ConfigError, ListenerConfig, ServerConfig};
pub use schema::{LISTEN_HOST_VAR, LISTEN_PORT_VAR};
