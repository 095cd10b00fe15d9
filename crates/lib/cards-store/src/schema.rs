pub const SCHEMA_PREFIX: &str = "schemas/";
pub const RECORDS_PREFIX: &str = "sample-credit-cards/";
pub const RECORD_EXTENSION: &str = ".json";

pub const SCHEMA_FILE: &str = "schemas/credit-card.schema.json";

pub const FIELD_CARD_IDENTITY: &str = "card_identity";
pub const FIELD_ISSUER_NAME: &str = "issuer_name";
pub const FIELD_CARD_NAME: &str = "card_name";
pub const FIELD_NETWORK: &str = "network";
pub const FIELD_CARD_TYPE: &str = "card_type";
pub const FIELD_CREDIT_SCORE_REQUIRED: &str = "credit_score_required";
pub const FIELD_TIER: &str = "tier";

/// Default for a missing issuer, card name, network, or card type.
pub const UNKNOWN_VALUE: &str = "Unknown";
/// Default for a missing credit tier.
pub const UNKNOWN_TIER: &str = "unknown";

/// Role of a data file, derived from its path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Schema,
    Record,
    Other,
}

#[must_use]
pub fn classify_path(path: &str) -> FileRole {
    if path.starts_with(SCHEMA_PREFIX) {
        FileRole::Schema
    } else if path.starts_with(RECORDS_PREFIX) {
        FileRole::Record
    } else {
        FileRole::Other
    }
}

/// Strips the records prefix and the trailing extension from a record path.
///
/// Returns `None` when the path is not under the records prefix.
#[must_use]
pub fn record_id_from_path(path: &str) -> Option<&str> {
    let local = path.strip_prefix(RECORDS_PREFIX)?;
    Some(local.strip_suffix(RECORD_EXTENSION).unwrap_or(local))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_paths_by_prefix() {
        assert_eq!(classify_path(SCHEMA_FILE), FileRole::Schema);
        assert_eq!(
            classify_path("sample-credit-cards/premium-travel.json"),
            FileRole::Record
        );
        assert_eq!(classify_path("README.json"), FileRole::Other);
    }

    #[test]
    fn derives_record_ids() {
        assert_eq!(
            record_id_from_path("sample-credit-cards/midtier-cashback.json"),
            Some("midtier-cashback")
        );
        assert_eq!(
            record_id_from_path("sample-credit-cards/no-extension"),
            Some("no-extension")
        );
        assert_eq!(record_id_from_path("sample-credit-cards/.json"), Some(""));
        assert_eq!(record_id_from_path(SCHEMA_FILE), None);
    }
}
