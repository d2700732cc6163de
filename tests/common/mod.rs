//! Shared utilities for integration tests.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use header_probe::identity::POSIX_HOSTNAME_VAR;
use header_probe::{HttpServer, Identity};

/// Hostname reported by servers started through [`spawn_server`].
pub const TEST_HOSTNAME: &str = "test-host";

/// Start a server on an ephemeral port and return its address.
///
/// The server resolves its identity from a fixed lookup rather than the
/// process environment, so concurrent tests never race on env vars.
pub async fn spawn_server() -> SocketAddr {
    let identity =
        Identity::resolve(|name| (name == POSIX_HOSTNAME_VAR).then(|| TEST_HOSTNAME.to_string()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(identity);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Build a client that ignores any ambient proxy configuration.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
