use std::borrow::Cow;

use cards_core::dispatch::{ResultEnvelope, ValidationError};
use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content, ErrorCode};
use serde::Serialize;
use serde_json::Value;

fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub fn invalid_params(err: &ValidationError) -> ErrorData {
    mcp_err(ErrorCode::INVALID_PARAMS, err.to_string())
}

/// Re-encodes typed tool parameters as the raw argument object the
/// dispatcher validates.
pub fn to_arguments<T: Serialize>(params: &T) -> Result<Value, ErrorData> {
    serde_json::to_value(params).map_err(|err| {
        mcp_err(
            ErrorCode::INTERNAL_ERROR,
            format!("failed to encode tool arguments: {err}"),
        )
    })
}

/// Converts a dispatcher envelope into an MCP tool result.
///
/// Business errors stay inside the result (`isError`), so the JSON-RPC call
/// itself still succeeds.
pub fn into_call_result(envelope: ResultEnvelope) -> CallToolResult {
    let is_error = envelope.is_error();
    let content: Vec<Content> = envelope
        .into_texts()
        .into_iter()
        .map(Content::text)
        .collect();
    if is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}
