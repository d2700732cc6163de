//! Server identity, resolved once at startup.
//!
//! # Design Decisions
//! - Resolution is infallible: environment chain, then a literal fallback
//! - The resolved value is passed into the router state explicitly rather
//!   than living in mutable global state

pub mod hostname;

pub use hostname::{
    Identity, POSIX_HOSTNAME_VAR, UNKNOWN_HOSTNAME, WINDOWS_HOSTNAME_VAR,
};
