use cards_core::dispatch::Operation;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{CardsMcp, helpers};

/// Parameters for fetching a single card.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetCreditCardParams {
    /// The card ID (e.g. 'midtier-cashback').
    pub card_id: String,
}

/// Parameters for searching cards. Every filter is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchCreditCardsParams {
    /// Filter by issuer name (partial match).
    pub issuer: Option<String>,
    /// Filter by card type (e.g. consumer_rewards, consumer_secured).
    pub card_type: Option<String>,
    /// Filter by network (Visa, Mastercard, etc.).
    pub network: Option<String>,
    /// Filter by credit tier (excellent, good, fair, poor, etc.).
    pub credit_tier: Option<String>,
}

#[tool_router(router = tool_router_cards, vis = "pub")]
impl CardsMcp {
    #[tool(description = "List all credit cards in the dataset with summary info (id, issuer, name, network, type, credit tier).")]
    async fn list_credit_cards(&self) -> Result<CallToolResult, ErrorData> {
        self.call(Operation::ListCreditCards, None)
    }

    #[tool(description = "Get the full data for a single credit card by its ID.")]
    async fn get_credit_card(
        &self,
        Parameters(params): Parameters<GetCreditCardParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = helpers::to_arguments(&params)?;
        self.call(Operation::GetCreditCard, Some(&arguments))
    }

    #[tool(description = "Search credit cards by issuer, card type, network, or credit tier. All filters are optional and case-insensitive.")]
    async fn search_credit_cards(
        &self,
        Parameters(params): Parameters<SearchCreditCardsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = helpers::to_arguments(&params)?;
        self.call(Operation::SearchCreditCards, Some(&arguments))
    }
}
