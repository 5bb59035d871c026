//! Shared utilities for integration tests.

use std::net::SocketAddr;
use tokio::net::TcpListener;
use wordbook::{HttpServer, ServerConfig};

/// Start a server with a fresh dictionary on an ephemeral loopback port.
pub async fn start_server() -> SocketAddr {
    start_server_with(ServerConfig::default()).await
}

pub async fn start_server_with(config: ServerConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

pub fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{addr}{path}")
}
