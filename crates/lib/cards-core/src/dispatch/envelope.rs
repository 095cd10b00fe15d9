use serde::{Deserialize, Serialize};

/// One content block of a result envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EnvelopeContent {
    Text { text: String },
}

/// Uniform tool result: `{ content: [{type: "text", text}], isError? }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultEnvelope {
    pub content: Vec<EnvelopeContent>,
    #[serde(rename = "isError", default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl ResultEnvelope {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![EnvelopeContent::Text { text: text.into() }],
            is_error: None,
        }
    }

    /// Business-level failure; the transport call itself still succeeds.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![EnvelopeContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }

    /// Pretty-prints `value` as a single text block.
    ///
    /// # Errors
    /// Returns the serializer error if `value` cannot be encoded as JSON.
    pub fn json<T>(value: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self::text(serde_json::to_string_pretty(value)?))
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.is_error, Some(true))
    }

    /// Text of the first content block.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|content| match content {
            EnvelopeContent::Text { text } => text.as_str(),
        })
    }

    #[must_use]
    pub fn into_texts(self) -> Vec<String> {
        self.content
            .into_iter()
            .map(|content| match content {
                EnvelopeContent::Text { text } => text,
            })
            .collect()
    }
}
