//! Assembly of the diagnostic response payload.

use std::collections::BTreeMap;
use std::net::IpAddr;

use axum::http::Request;
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::identity::Identity;
use crate::inspect::headers::{normalize_headers, HeaderEntry};

/// Everything the endpoint reports about one request.
///
/// Serialized as the JSON body of every diagnostic response. Built fresh per
/// request; nothing in it is shared or cached.
#[derive(Debug, Serialize)]
pub struct RequestReport {
    /// The server's resolved identity.
    pub me: String,
    /// The caller's IP address, without port.
    pub you: String,
    /// Server-local time when the payload was assembled, RFC 3339 with offset.
    pub time: DateTime<Local>,
    /// Request line: `<METHOD> <PATH> <PROTOCOL>`. The query string is not
    /// part of it.
    pub request: String,
    /// Canonical view of all received request headers.
    pub headers: BTreeMap<String, HeaderEntry>,
}

impl RequestReport {
    /// Capture a report for the request being handled.
    ///
    /// `time` is taken here, so it reflects response assembly rather than
    /// request arrival.
    pub fn capture<B>(identity: &Identity, peer: IpAddr, request: &Request<B>) -> Self {
        Self {
            me: identity.hostname().to_string(),
            you: peer.to_string(),
            time: Local::now(),
            request: format!(
                "{} {} {:?}",
                request.method(),
                request.uri().path(),
                request.version()
            ),
            headers: normalize_headers(request.headers()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn test_identity() -> Identity {
        Identity::resolve(|name| match name {
            "HOSTNAME" => Some("probe-1".to_string()),
            _ => None,
        })
    }

    fn capture(request: &Request<()>) -> RequestReport {
        RequestReport::capture(&test_identity(), "192.0.2.7".parse().unwrap(), request)
    }

    #[test]
    fn test_request_line_format() {
        let request = Request::builder().uri("/foo").body(()).unwrap();
        assert_eq!(capture(&request).request, "GET /foo HTTP/1.1");
    }

    #[test]
    fn test_request_line_excludes_query() {
        let request = Request::builder().uri("/foo?debug=1").body(()).unwrap();
        assert_eq!(capture(&request).request, "GET /foo HTTP/1.1");
    }

    #[test]
    fn test_identity_and_peer_fields() {
        let request = Request::builder().uri("/").body(()).unwrap();
        let report = capture(&request);
        assert_eq!(report.me, "probe-1");
        assert_eq!(report.you, "192.0.2.7");
    }

    #[test]
    fn test_headers_are_included() {
        let request = Request::builder()
            .uri("/")
            .header("x-tag", HeaderValue::from_static("one"))
            .header("x-tag", HeaderValue::from_static("two"))
            .body(())
            .unwrap();

        let report = capture(&request);
        assert_eq!(
            report.headers.get("x-tag"),
            Some(&HeaderEntry::Multi(vec![
                "one".to_string(),
                "two".to_string()
            ]))
        );
    }

    #[test]
    fn test_serialized_field_names_and_time_format() {
        let request = Request::builder().uri("/").body(()).unwrap();
        let value = serde_json::to_value(capture(&request)).unwrap();

        let object = value.as_object().unwrap();
        for field in ["me", "you", "time", "request", "headers"] {
            assert!(object.contains_key(field), "missing field {}", field);
        }
        assert_eq!(object.len(), 5);

        let time = object["time"].as_str().unwrap();
        assert!(
            DateTime::parse_from_rfc3339(time).is_ok(),
            "time not RFC 3339: {}",
            time
        );
    }
}
