use std::{error::Error, fmt, str::FromStr};

use cards_store::models::FilterSpec;
use serde_json::{Map, Value};

/// Operations exposed as tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListCreditCards,
    GetCreditCard,
    GetSchema,
    SearchCreditCards,
    GetAllDataFiles,
}

impl Operation {
    pub const ALL: [Self; 5] = [
        Self::ListCreditCards,
        Self::GetCreditCard,
        Self::GetSchema,
        Self::SearchCreditCards,
        Self::GetAllDataFiles,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ListCreditCards => "list_credit_cards",
            Self::GetCreditCard => "get_credit_card",
            Self::GetSchema => "get_schema",
            Self::SearchCreditCards => "search_credit_cards",
            Self::GetAllDataFiles => "get_all_data_files",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown tool: {}", self.0)
    }
}

impl Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.name() == name)
            .ok_or_else(|| UnknownOperation(name.to_string()))
    }
}

/// Arguments that failed the per-operation checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub operation: Operation,
    pub field: Option<&'static str>,
    pub reason: String,
}

impl ValidationError {
    fn new(operation: Operation, field: Option<&'static str>, reason: impl Into<String>) -> Self {
        Self {
            operation,
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid arguments for {}: ", self.operation)?;
        if let Some(field) = self.field {
            write!(f, "`{field}` ")?;
        }
        f.write_str(&self.reason)
    }
}

impl Error for ValidationError {}

/// A validated tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    ListCreditCards,
    GetCreditCard { card_id: String },
    GetSchema,
    SearchCreditCards(FilterSpec),
    GetAllDataFiles,
}

impl ToolCall {
    /// Checks `arguments` against the operation's input contract.
    ///
    /// Missing or `null` arguments are treated as an empty object. Unknown keys
    /// are ignored, and `null` for an optional field means the field is absent.
    ///
    /// # Errors
    /// Returns `ValidationError` if the arguments are not an object, a required
    /// field is missing, or a field has the wrong type.
    pub fn parse(operation: Operation, arguments: Option<&Value>) -> Result<Self, ValidationError> {
        let empty = Map::new();
        let arguments = match arguments {
            None | Some(Value::Null) => &empty,
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(ValidationError::new(
                    operation,
                    None,
                    format!("expected an object, got {}", type_name(other)),
                ));
            }
        };

        let call = match operation {
            Operation::ListCreditCards => Self::ListCreditCards,
            Operation::GetCreditCard => Self::GetCreditCard {
                card_id: required_string(operation, arguments, "card_id")?,
            },
            Operation::GetSchema => Self::GetSchema,
            Operation::SearchCreditCards => Self::SearchCreditCards(FilterSpec {
                issuer: optional_string(operation, arguments, "issuer")?,
                card_type: optional_string(operation, arguments, "card_type")?,
                network: optional_string(operation, arguments, "network")?,
                credit_tier: optional_string(operation, arguments, "credit_tier")?,
            }),
            Operation::GetAllDataFiles => Self::GetAllDataFiles,
        };
        Ok(call)
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::ListCreditCards => Operation::ListCreditCards,
            Self::GetCreditCard { .. } => Operation::GetCreditCard,
            Self::GetSchema => Operation::GetSchema,
            Self::SearchCreditCards(_) => Operation::SearchCreditCards,
            Self::GetAllDataFiles => Operation::GetAllDataFiles,
        }
    }
}

fn required_string(
    operation: Operation,
    arguments: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    optional_string(operation, arguments, field)?
        .ok_or_else(|| ValidationError::new(operation, Some(field), "is required"))
}

fn optional_string(
    operation: Operation,
    arguments: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match arguments.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(ValidationError::new(
            operation,
            Some(field),
            format!("must be a string, got {}", type_name(other)),
        )),
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn operation_names_round_trip() {
        for operation in Operation::ALL {
            assert_eq!(operation.name().parse::<Operation>(), Ok(operation));
        }
        assert_eq!(
            "delete_card".parse::<Operation>(),
            Err(UnknownOperation("delete_card".to_string()))
        );
    }

    #[test]
    fn get_credit_card_requires_card_id() {
        let err = ToolCall::parse(Operation::GetCreditCard, Some(&json!({})))
            .expect_err("missing card_id should fail");
        assert_eq!(err.field, Some("card_id"));
        assert_eq!(err.operation, Operation::GetCreditCard);

        let err = ToolCall::parse(Operation::GetCreditCard, Some(&json!({ "card_id": 7 })))
            .expect_err("numeric card_id should fail");
        assert!(err.to_string().contains("must be a string, got number"));
    }

    #[test]
    fn get_credit_card_accepts_string_id() {
        let call = ToolCall::parse(
            Operation::GetCreditCard,
            Some(&json!({ "card_id": "premium-travel", "extra": true })),
        )
        .expect("valid arguments");
        assert_eq!(
            call,
            ToolCall::GetCreditCard {
                card_id: "premium-travel".to_string()
            }
        );
    }

    #[test]
    fn search_fields_are_optional_strings() {
        let call = ToolCall::parse(
            Operation::SearchCreditCards,
            Some(&json!({ "network": "Visa", "issuer": null })),
        )
        .expect("valid arguments");
        assert_eq!(
            call,
            ToolCall::SearchCreditCards(FilterSpec::default().with_network("Visa"))
        );

        let err = ToolCall::parse(
            Operation::SearchCreditCards,
            Some(&json!({ "credit_tier": ["excellent"] })),
        )
        .expect_err("array tier should fail");
        assert_eq!(err.field, Some("credit_tier"));
    }

    #[test]
    fn missing_arguments_mean_empty_object() {
        assert_eq!(
            ToolCall::parse(Operation::SearchCreditCards, None),
            Ok(ToolCall::SearchCreditCards(FilterSpec::default()))
        );
        assert_eq!(
            ToolCall::parse(Operation::ListCreditCards, Some(&Value::Null)),
            Ok(ToolCall::ListCreditCards)
        );
    }

    #[test]
    fn non_object_arguments_are_rejected() {
        let err = ToolCall::parse(Operation::GetSchema, Some(&json!("schema")))
            .expect_err("string arguments should fail");
        assert_eq!(err.field, None);
        assert!(err.reason.contains("expected an object"));
    }
}
