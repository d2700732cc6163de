//! Content-type negotiation for the diagnostic response.
//!
//! # Responsibilities
//! - Parse the `Accept` header into media-type → quality pairs
//! - Choose between `application/json` and `text/plain`
//! - Default to plain text when no actionable preference exists
//!
//! # Design Decisions
//! - Deliberately simpler than RFC 7231: no `*/*` handling, wildcards only
//!   within the two families (`application/*`, `text/*`), and ties go to
//!   plain text (JSON needs a strictly higher quality)
//! - Only the first `;`-parameter of an entry is examined; entries whose
//!   first parameter is not a parseable `q=` value are discarded. Trailing
//!   separators with nothing after them count as no parameter at all
//! - A duplicated media token keeps the last quality seen

use std::collections::HashMap;

use axum::http::HeaderValue;

/// Media type of the JSON representation.
pub const APPLICATION_JSON: &str = "application/json";
/// Media type of the plain-text representation (and the negotiation default).
pub const TEXT_PLAIN: &str = "text/plain";

/// Wildcard matching any `application/` subtype.
const APPLICATION_ANY: &str = "application/*";
/// Wildcard matching any `text/` subtype.
const TEXT_ANY: &str = "text/*";

/// The representation declared in the response `Content-Type` header.
///
/// The body is the same JSON text either way; only the declared type differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Plain,
}

impl ContentType {
    /// Media type string for the `Content-Type` response header.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => APPLICATION_JSON,
            ContentType::Plain => TEXT_PLAIN,
        }
    }

    /// Ready-made header value for response assembly.
    pub fn header_value(&self) -> HeaderValue {
        HeaderValue::from_static(self.as_str())
    }
}

/// Parse a raw `Accept` value into media token → quality pairs.
///
/// Entries are comma-separated. Each entry is split on `;`: the token before
/// the first `;` is the media type (trimmed), the part after it must be a
/// `q=<float>` parameter or the entry is dropped. A missing parameter,
/// including a bare trailing `;` with nothing after it, means quality 1.0.
/// Later occurrences of the same token overwrite earlier ones.
pub fn accepted_types(raw: &str) -> HashMap<String, f32> {
    let mut accepted = HashMap::new();

    for entry in raw.split(',') {
        let mut parts: Vec<&str> = entry.split(';').collect();
        // Trailing separators leave empty segments behind; those do not
        // count as parameters, so `media;` keeps the default quality. An
        // empty segment with content after it is a real (empty) parameter.
        if parts.len() > 1 {
            while parts.last() == Some(&"") {
                parts.pop();
            }
        }

        let media = match parts.first() {
            Some(token) => token.trim(),
            None => continue,
        };

        let quality = match parts.get(1) {
            None => Some(1.0),
            Some(param) => param
                .trim()
                .strip_prefix("q=")
                .and_then(|value| value.trim().parse::<f32>().ok()),
        };

        if let Some(quality) = quality {
            accepted.insert(media.to_string(), quality);
        }
    }

    accepted
}

/// Choose the response representation for the given `Accept` header.
///
/// JSON is only a candidate when `application/json` or `application/*`
/// appears among the accepted types; it is chosen when its quality strictly
/// exceeds the plain-text quality. Everything else, including a missing
/// header and exact ties, yields plain text.
pub fn negotiate(accept: Option<&str>) -> ContentType {
    let raw = match accept {
        Some(raw) => raw,
        None => return ContentType::Plain,
    };

    let accepted = accepted_types(raw);
    if !accepted.contains_key(APPLICATION_JSON) && !accepted.contains_key(APPLICATION_ANY) {
        return ContentType::Plain;
    }

    let json_q = accepted
        .get(APPLICATION_JSON)
        .or_else(|| accepted.get(APPLICATION_ANY))
        .copied()
        .unwrap_or(0.0);
    let plain_q = accepted
        .get(TEXT_PLAIN)
        .or_else(|| accepted.get(TEXT_ANY))
        .copied()
        .unwrap_or(0.0);

    if json_q > plain_q {
        ContentType::Json
    } else {
        ContentType::Plain
    }
}
