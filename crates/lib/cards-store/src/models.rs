use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw `(path, content)` pair supplied to the record store at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

impl SourceFile {
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// JSON Schema document describing a valid card record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SchemaDocument(Value);

impl SchemaDocument {
    #[must_use]
    pub const fn new(document: Value) -> Self {
        Self(document)
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Returns the schema `title`, when present.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }
}

/// One credit card product definition.
///
/// The payload is kept as an untyped document; typed access to the fields the
/// server cares about goes through `cards_core::control::CardIdentity`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Record {
    pub id: String,
    pub payload: Value,
}

/// A loaded data file with its content parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataFile {
    pub path: String,
    pub content: Value,
}

/// Display-oriented projection of a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardSummary {
    pub id: String,
    pub issuer: String,
    pub name: String,
    pub network: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub credit_tier: String,
}

/// Search results returned by `search_credit_cards`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResults {
    pub count: usize,
    pub cards: Vec<CardSummary>,
}

impl SearchResults {
    #[must_use]
    pub const fn new(cards: Vec<CardSummary>) -> Self {
        Self {
            count: cards.len(),
            cards,
        }
    }
}

/// Optional search criteria; present criteria are combined with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_tier: Option<String>,
}

impl FilterSpec {
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    #[must_use]
    pub fn with_card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    #[must_use]
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    #[must_use]
    pub fn with_credit_tier(mut self, credit_tier: impl Into<String>) -> Self {
        self.credit_tier = Some(credit_tier.into());
        self
    }
}
