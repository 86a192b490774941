//! Shared helpers for the stub-server integration tests.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use worksearch_client::{Client, Config};

/// Bind the router to an ephemeral port and serve it in the background.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

pub fn config_for(addr: SocketAddr) -> Config {
    Config::new(format!("http://{addr}/api/ws/v1"), "test-token")
}

pub fn client_for(addr: SocketAddr) -> Client {
    Client::new(config_for(addr)).unwrap()
}

/// Fallback handler that reflects the request back as JSON, letting tests
/// assert on exactly what reached the server.
pub async fn echo(
    method: axum::http::Method,
    uri: axum::http::Uri,
    body: String,
) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "body": body,
    }))
}

/// Router whose every route reflects the request back.
pub fn echo_router() -> Router {
    Router::new().fallback(echo)
}
