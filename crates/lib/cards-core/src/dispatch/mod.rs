//! Tool dispatch: operation lookup, argument validation, and result envelopes.
//!
//! Every call is independent. Business failures such as an unknown card id
//! come back as an `isError` envelope; malformed arguments come back as a
//! `ValidationError` before any handler runs.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::control::CardControlPlane;
use crate::store::RecordStore;

mod call;
mod envelope;

pub use call::{Operation, ToolCall, UnknownOperation, ValidationError};
pub use envelope::{EnvelopeContent, ResultEnvelope};

const SCHEMA_NOT_FOUND: &str = "Schema not found.";

/// Maps tool calls onto the control plane.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    control: CardControlPlane,
}

impl ToolDispatcher {
    #[must_use]
    pub const fn new(store: Arc<RecordStore>) -> Self {
        Self {
            control: CardControlPlane::new(store),
        }
    }

    #[must_use]
    pub const fn control(&self) -> &CardControlPlane {
        &self.control
    }

    /// Resolves `operation`, validates `arguments`, and runs the handler.
    ///
    /// An unknown operation name yields an `isError` envelope.
    ///
    /// # Errors
    /// Returns `ValidationError` if the arguments do not satisfy the
    /// operation's input contract.
    pub fn invoke(
        &self,
        operation: &str,
        arguments: Option<&Value>,
    ) -> Result<ResultEnvelope, ValidationError> {
        let operation = match operation.parse::<Operation>() {
            Ok(operation) => operation,
            Err(err) => {
                warn!(operation = %err.0, "unknown tool requested");
                return Ok(ResultEnvelope::error(err.to_string()));
            }
        };
        self.call(operation, arguments)
    }

    /// Validates `arguments` for a known operation and runs the handler.
    ///
    /// # Errors
    /// Returns `ValidationError` if the arguments do not satisfy the
    /// operation's input contract.
    pub fn call(
        &self,
        operation: Operation,
        arguments: Option<&Value>,
    ) -> Result<ResultEnvelope, ValidationError> {
        let call = ToolCall::parse(operation, arguments).inspect_err(|err| {
            warn!(operation = %operation, error = %err, "tool arguments rejected");
        })?;
        Ok(self.execute(call))
    }

    /// Runs a validated call. Handler faults are converted into an `isError`
    /// envelope with a generic message.
    #[must_use]
    pub fn execute(&self, call: ToolCall) -> ResultEnvelope {
        let operation = call.operation();
        debug!(operation = %operation, "running tool");
        guard(operation, || self.run(call))
    }

    fn run(&self, call: ToolCall) -> Result<ResultEnvelope, serde_json::Error> {
        match call {
            ToolCall::ListCreditCards => ResultEnvelope::json(&self.control.list_cards()),
            ToolCall::GetCreditCard { card_id } => self.control.get_card(&card_id).map_or_else(
                || {
                    info!(card_id = %card_id, "card not found");
                    Ok(ResultEnvelope::error(format!(
                        "Card not found: {card_id}. Use list_credit_cards to see available IDs."
                    )))
                },
                |record| ResultEnvelope::json(&record.payload),
            ),
            ToolCall::GetSchema => self
                .control
                .schema()
                .map_or_else(|| Ok(ResultEnvelope::text(SCHEMA_NOT_FOUND)), ResultEnvelope::json),
            ToolCall::SearchCreditCards(filter) => {
                let results = self.control.search(&filter);
                debug!(count = results.count, "search complete");
                ResultEnvelope::json(&results)
            }
            ToolCall::GetAllDataFiles => ResultEnvelope::json(self.control.data_files()),
        }
    }
}

fn guard<F>(operation: Operation, handler: F) -> ResultEnvelope
where
    F: FnOnce() -> Result<ResultEnvelope, serde_json::Error>,
{
    match panic::catch_unwind(AssertUnwindSafe(handler)) {
        Ok(Ok(envelope)) => envelope,
        Ok(Err(err)) => {
            error!(operation = %operation, error = %err, "failed to encode tool result");
            internal_error(operation)
        }
        Err(_) => {
            error!(operation = %operation, "tool handler panicked");
            internal_error(operation)
        }
    }
}

fn internal_error(operation: Operation) -> ResultEnvelope {
    ResultEnvelope::error(format!("Internal error while running {operation}."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cards_store::models::{FilterSpec, SourceFile};
    use serde_json::json;

    fn dispatcher() -> ToolDispatcher {
        let store = RecordStore::load(vec![
            SourceFile::new("schemas/card.schema.json", r#"{"title": "Card"}"#),
            SourceFile::new(
                "sample-credit-cards/alpha.json",
                r#"{"card_identity": {"issuer_name": "Alpha Bank", "network": "Visa"}}"#,
            ),
        ])
        .expect("fixture should load");
        ToolDispatcher::new(Arc::new(store))
    }

    #[test]
    fn unknown_operation_is_an_error_envelope() {
        let envelope = dispatcher()
            .invoke("drop_tables", None)
            .expect("unknown tool is not a validation failure");
        assert!(envelope.is_error());
        assert_eq!(envelope.first_text(), Some("Unknown tool: drop_tables"));
    }

    #[test]
    fn validation_failure_is_distinct_from_not_found() {
        let dispatcher = dispatcher();
        let err = dispatcher
            .invoke("get_credit_card", Some(&json!({})))
            .expect_err("missing card_id should fail validation");
        assert_eq!(err.field, Some("card_id"));

        let envelope = dispatcher
            .invoke("get_credit_card", Some(&json!({ "card_id": "beta" })))
            .expect("well-formed call");
        assert!(envelope.is_error());
        assert_eq!(
            envelope.first_text(),
            Some("Card not found: beta. Use list_credit_cards to see available IDs.")
        );
    }

    #[test]
    fn missing_schema_returns_sentinel_text() {
        let dispatcher = ToolDispatcher::new(Arc::new(RecordStore::default()));
        let envelope = dispatcher.execute(ToolCall::GetSchema);
        assert!(!envelope.is_error());
        assert_eq!(envelope.first_text(), Some(SCHEMA_NOT_FOUND));
    }

    #[test]
    fn panicking_handler_becomes_error_envelope() {
        let envelope = guard(Operation::GetSchema, || panic!("boom"));
        assert!(envelope.is_error());
        assert_eq!(
            envelope.first_text(),
            Some("Internal error while running get_schema.")
        );

        let after = dispatcher().execute(ToolCall::GetSchema);
        assert!(!after.is_error());
    }

    #[test]
    fn search_envelope_reports_count_and_cards() {
        let envelope = dispatcher().execute(ToolCall::SearchCreditCards(FilterSpec::default()));
        let value: Value =
            serde_json::from_str(envelope.first_text().expect("text content")).expect("json");
        assert_eq!(value["count"], json!(1));
        assert_eq!(value["cards"][0]["issuer"], json!("Alpha Bank"));
        assert_eq!(value["cards"][0]["name"], json!("Unknown"));
        assert_eq!(value["cards"][0]["credit_tier"], json!("unknown"));
    }
}
