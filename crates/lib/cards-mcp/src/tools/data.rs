use cards_core::dispatch::Operation;
use rmcp::{ErrorData, model::CallToolResult, tool, tool_router};

use crate::CardsMcp;

#[tool_router(router = tool_router_data, vis = "pub")]
impl CardsMcp {
    #[tool(description = "Get the JSON Schema that defines the credit card data structure.")]
    async fn get_schema(&self) -> Result<CallToolResult, ErrorData> {
        self.call(Operation::GetSchema, None)
    }

    #[tool(description = "Get every data file in the dataset (schema and card files) as {path, content} with content parsed as JSON.")]
    async fn get_all_data_files(&self) -> Result<CallToolResult, ErrorData> {
        self.call(Operation::GetAllDataFiles, None)
    }
}
