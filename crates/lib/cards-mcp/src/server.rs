//! MCP server runners for the Open Credit Cards dataset.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use cards_core::store::RecordStore;
use rmcp::serve_server;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig,
    StreamableHttpService,
    session::local::LocalSessionManager,
};
use serde::Serialize;
use tracing::info;

use crate::CardsMcp;

pub const MCP_ENDPOINT: &str = "/mcp";

/// Configuration for the MCP streamable HTTP server.
#[derive(Debug, Clone)]
pub struct McpHttpServerConfig {
    pub addr: SocketAddr,
    pub stateful_mode: bool,
    pub sse_keep_alive: Option<Duration>,
    pub sse_retry: Option<Duration>,
}

impl McpHttpServerConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            stateful_mode: false,
            sse_keep_alive: Some(Duration::from_secs(15)),
            sse_retry: Some(Duration::from_secs(3)),
        }
    }

    #[must_use]
    pub const fn with_stateful_mode(mut self, stateful_mode: bool) -> Self {
        self.stateful_mode = stateful_mode;
        self
    }

    #[must_use]
    pub const fn with_sse_keep_alive(mut self, sse_keep_alive: Option<Duration>) -> Self {
        self.sse_keep_alive = sse_keep_alive;
        self
    }
}

impl Default for McpHttpServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 4020)))
    }
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    mcp_endpoint: &'static str,
}

/// Serves the MCP server over stdio.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio(
    store: Arc<RecordStore>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service = CardsMcp::with_store(store);
    let (stdin, stdout) = stdio();
    info!("cards-mcp serving on stdio");
    let running = serve_server(service, (stdin, stdout)).await?;
    let _ = running.waiting().await?;
    Ok(())
}

/// Builds the HTTP router: the MCP service at `/mcp` plus health routes.
#[must_use]
pub fn build_router(store: Arc<RecordStore>, config: &McpHttpServerConfig) -> Router {
    let service: StreamableHttpService<CardsMcp, LocalSessionManager> =
        StreamableHttpService::new(
            move || Ok(CardsMcp::with_store(store.clone())),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                sse_keep_alive: config.sse_keep_alive,
                sse_retry: config.sse_retry,
                stateful_mode: config.stateful_mode,
                ..Default::default()
            },
        );

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .nest_service(MCP_ENDPOINT, service)
        .fallback(not_found)
}

/// Serves the MCP server using streamable HTTP transport.
///
/// # Errors
/// Returns any listener or server error.
pub async fn serve_streamable_http(
    store: Arc<RecordStore>,
    config: McpHttpServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = build_router(store, &config);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("cards-mcp listening on {}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        mcp_endpoint: MCP_ENDPOINT,
    })
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
