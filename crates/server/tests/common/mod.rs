//! # Common Test Utilities
//!
//! A full application harness that spawns the real server on a random port,
//! with both outbound APIs (the workspace REST API and the chat-completions
//! endpoint) pointed at a single `httpmock::MockServer`.

#![allow(unused)]

use anyhow::Result;
use httpmock::MockServer;
use lexibridge_server::{config::AppConfig, router::create_router, state::build_app_state};
use reqwest::Client;
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();
        let config = AppConfig {
            port: 0,
            notion_token: "test_notion_token".to_string(),
            deepseek_api_key: "test_api_key".to_string(),
            notion_api_url: Some(mock_server.base_url()),
            deepseek_api_url: Some(mock_server.url("/v1/chat/completions")),
        };
        let app_state = build_app_state(config)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {e}");
            }
        });

        // Give the server a moment to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }
}
