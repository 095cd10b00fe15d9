//! Daemon entry point for the Open Credit Cards MCP server.
//!
//! Loads configuration from the environment, loads the dataset once, and
//! serves the MCP protocol over stdio or streamable HTTP.

mod config;
mod logging;

use std::process::ExitCode;
use std::sync::Arc;

use cards_core::dispatch::ToolDispatcher;
use cards_core::store::{RecordStore, StoreResult};
use cards_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::info;

use crate::config::{CardsConfig, ToolInvocation};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<ExitCode, BoxError> {
    let config = CardsConfig::from_args()?;
    logging::init(config.log_filter.as_deref());

    let store = Arc::new(load_store(&config)?);

    if let Some(invocation) = &config.call {
        return run_call(store, invocation);
    }

    if config.enable_stdio {
        serve_stdio(Arc::clone(&store)).await?;
    }
    if config.mcp_serve {
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr)
            .with_stateful_mode(config.stateful_mode)
            .with_sse_keep_alive(config.sse_keep_alive);
        serve_streamable_http(store, http_config).await?;
    }
    Ok(ExitCode::SUCCESS)
}

fn load_store(config: &CardsConfig) -> StoreResult<RecordStore> {
    config
        .data_dir
        .as_deref()
        .map_or_else(RecordStore::from_embedded, |dir| {
            info!(dir = %dir.display(), "loading dataset from directory");
            RecordStore::from_dir(dir)
        })
}

fn run_call(store: Arc<RecordStore>, invocation: &ToolInvocation) -> Result<ExitCode, BoxError> {
    let dispatcher = ToolDispatcher::new(store);
    let envelope = dispatcher.invoke(&invocation.tool, Some(&invocation.arguments))?;
    let failed = envelope.is_error();
    for text in envelope.into_texts() {
        println!("{text}");
    }
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
