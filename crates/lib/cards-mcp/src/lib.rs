//! MCP server implementation for the Open Credit Cards dataset.
//!
//! This crate wires the tool dispatcher into rmcp tool handlers and exposes the
//! stdio and streamable HTTP runners.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use cards_core::dispatch::{Operation, ToolDispatcher};
use cards_core::store::RecordStore;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool_handler,
};
use rmcp::model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo};
use serde_json::Value;

pub use tools::cards::{GetCreditCardParams, SearchCreditCardsParams};

pub const SERVER_NAME: &str = "Open Credit Cards";

const SERVER_INSTRUCTIONS: &str = r"Open Credit Cards serves a read-only dataset of sample credit card products.

Tools:
- `list_credit_cards` returns a summary (id, issuer, name, network, type, credit_tier) for every card.
- `get_credit_card` returns the full record for one `card_id` (e.g. `midtier-cashback`).
- `search_credit_cards` filters by `issuer` (partial match), `card_type`, `network`, and `credit_tier`.
  All filters are optional, case-insensitive, and combined with AND. The result is `{count, cards}`.
- `get_schema` returns the JSON Schema that every card record follows.
- `get_all_data_files` returns every data file as `{path, content}` with parsed JSON content.

Missing summary fields are reported as `Unknown` (credit tier: `unknown`).";

/// MCP server wrapper around the shared record store.
#[derive(Clone)]
pub struct CardsMcp {
    tool_router: ToolRouter<Self>,
    dispatcher: ToolDispatcher,
}

impl CardsMcp {
    /// Creates a new server that owns the given store.
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self::with_store(Arc::new(store))
    }

    /// Creates a new server over a shared store handle.
    #[must_use]
    pub fn with_store(store: Arc<RecordStore>) -> Self {
        let tool_router = Self::tool_router_cards() + Self::tool_router_data();
        Self {
            tool_router,
            dispatcher: ToolDispatcher::new(store),
        }
    }

    #[must_use]
    pub const fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    /// Validates `arguments` for `operation` and runs it.
    ///
    /// Argument violations become a JSON-RPC `invalid_params` error; business
    /// failures stay in the result as `isError`.
    pub(crate) fn call(
        &self,
        operation: Operation,
        arguments: Option<&Value>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatcher
            .call(operation, arguments)
            .map(helpers::into_call_result)
            .map_err(|err| helpers::invalid_params(&err))
    }
}

#[tool_handler]
impl ServerHandler for CardsMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;
    use serde_json::json;

    fn server() -> CardsMcp {
        CardsMcp::new(RecordStore::from_embedded().expect("embedded snapshot should load"))
    }

    #[test]
    fn server_info_names_the_dataset() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert_eq!(info.server_info.version, "0.1.0");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }

    #[test]
    fn registers_the_five_tools() {
        let server = server();
        let tools = server.tool_router.list_all();
        let mut names: Vec<String> = tools.iter().map(|tool| tool.name.to_string()).collect();
        names.sort();
        assert_eq!(
            names,
            [
                "get_all_data_files",
                "get_credit_card",
                "get_schema",
                "list_credit_cards",
                "search_credit_cards",
            ]
        );
        for tool in &tools {
            assert!(
                tool.description.as_deref().is_some_and(|text| !text.is_empty()),
                "{} should have a description",
                tool.name
            );
            assert_eq!(
                tool.input_schema.get("type").and_then(serde_json::Value::as_str),
                Some("object")
            );
        }
    }

    #[test]
    fn bad_argument_types_are_invalid_params() {
        let server = server();
        let err = server
            .call(Operation::GetCreditCard, Some(&json!({ "card_id": 7 })))
            .expect_err("numeric card_id should be rejected");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("card_id"));

        let err = server
            .call(Operation::SearchCreditCards, Some(&json!({ "network": ["Visa"] })))
            .expect_err("array network should be rejected");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn missing_card_id_is_invalid_params_not_an_error_result() {
        let server = server();
        let err = server
            .call(Operation::GetCreditCard, Some(&json!({})))
            .expect_err("missing card_id should be rejected");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

        let result = server
            .call(Operation::GetCreditCard, Some(&json!({ "card_id": "nonexistent" })))
            .expect("unknown id is a well-formed call");
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn tool_names_match_dispatcher_operations() {
        let server = server();
        for tool in server.tool_router.list_all() {
            assert!(
                tool.name.parse::<cards_core::dispatch::Operation>().is_ok(),
                "{} has no dispatcher operation",
                tool.name
            );
        }
    }
}
