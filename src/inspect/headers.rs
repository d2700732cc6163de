//! Canonical view of the received request headers.
//!
//! # Responsibilities
//! - Collapse the transport's multi-valued header map into one entry per name
//! - Keep single-valued headers as bare strings, repeated ones as ordered lists
//! - Never drop a received value
//!
//! # Design Decisions
//! - Names are reported as the transport delivers them; the http crate folds
//!   them to lowercase and merges case-variant duplicates upstream
//! - A sorted map keeps the serialized object deterministic; receipt order
//!   only matters within a repeated header's value list, where it is kept
//! - Values that are not valid UTF-8 are converted lossily instead of dropped

use std::collections::BTreeMap;

use axum::http::HeaderMap;
use serde::Serialize;

/// One request header after normalization.
///
/// Serializes untagged: a single value becomes a bare JSON string, a repeated
/// header becomes a JSON array in receipt order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeaderEntry {
    /// Exactly one value was received for this name.
    Single(String),
    /// The header appeared more than once; order of receipt is preserved.
    Multi(Vec<String>),
}

/// Normalize the request header map into one canonical entry per name.
pub fn normalize_headers(headers: &HeaderMap) -> BTreeMap<String, HeaderEntry> {
    let mut normalized = BTreeMap::new();

    for name in headers.keys() {
        let mut values: Vec<String> = headers
            .get_all(name)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect();

        // A name without values cannot come out of a well-formed HeaderMap;
        // tolerate it by omitting the key rather than failing.
        let entry = match values.len() {
            0 => continue,
            1 => HeaderEntry::Single(values.remove(0)),
            _ => HeaderEntry::Multi(values),
        };

        normalized.insert(name.as_str().to_string(), entry);
    }

    normalized
}
