//! Request inspection core.
//!
//! # Data Flow
//! ```text
//! incoming request
//!     → negotiate.rs (Accept header → declared content type)
//!     → headers.rs   (multi-valued header map → canonical entries)
//!     → payload.rs   (assemble the serializable report)
//!     → http/server.rs writes status, headers and JSON body
//! ```
//!
//! # Design Decisions
//! - Negotiation and normalization are pure functions of the request; the
//!   only server-side input is the read-only identity
//! - The JSON body is identical for both representations; negotiation picks
//!   the declared `Content-Type` only

pub mod headers;
pub mod negotiate;
pub mod payload;

pub use headers::{normalize_headers, HeaderEntry};
pub use negotiate::{accepted_types, negotiate, ContentType};
pub use payload::RequestReport;
