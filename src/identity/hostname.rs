//! Hostname resolution with a fixed fallback chain.

use axum::http::HeaderValue;

/// Environment variable consulted first (POSIX systems).
pub const POSIX_HOSTNAME_VAR: &str = "HOSTNAME";
/// Environment variable consulted second (Windows systems).
pub const WINDOWS_HOSTNAME_VAR: &str = "COMPUTERNAME";
/// Reported identity when neither variable yields a value.
pub const UNKNOWN_HOSTNAME: &str = "<unknown>";

/// The server's identity, resolved once at startup.
///
/// Immutable for the process lifetime and shared read-only with every
/// request handler. Carries both the reported hostname and the precomputed
/// value of the trace response header.
#[derive(Debug, Clone)]
pub struct Identity {
    hostname: String,
    trace_value: HeaderValue,
}

impl Identity {
    /// Resolve the identity from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolve the identity through the given variable lookup.
    ///
    /// An unset or empty variable falls through to the next step of the
    /// chain; the chain always produces a value, so no error is possible.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let hostname = lookup(POSIX_HOSTNAME_VAR)
            .filter(|value| !value.is_empty())
            .or_else(|| lookup(WINDOWS_HOSTNAME_VAR).filter(|value| !value.is_empty()))
            .unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string());

        // A hostname with bytes that are illegal in an HTTP header value
        // cannot be echoed verbatim; the trace header then falls back while
        // the payload keeps the resolved string.
        let trace_value = HeaderValue::from_str(&hostname)
            .unwrap_or_else(|_| HeaderValue::from_static(UNKNOWN_HOSTNAME));

        Self {
            hostname,
            trace_value,
        }
    }

    /// The hostname reported in the payload's `me` field.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// The precomputed value of the trace response header.
    pub fn trace_value(&self) -> &HeaderValue {
        &self.trace_value
    }
}
