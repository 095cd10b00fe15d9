use cards_store::models::{CardSummary, Record};
use cards_store::schema::{
    FIELD_CARD_IDENTITY,
    FIELD_CARD_NAME,
    FIELD_CARD_TYPE,
    FIELD_CREDIT_SCORE_REQUIRED,
    FIELD_ISSUER_NAME,
    FIELD_NETWORK,
    FIELD_TIER,
    UNKNOWN_TIER,
    UNKNOWN_VALUE,
};
use serde_json::{Map, Value};

/// Typed view over a record's `card_identity` object.
///
/// Each accessor returns `None` when the field, or any object on the way to
/// it, is missing or is not a string. The `*_or_default` accessors apply the
/// display defaults:
///
/// | field | default |
/// |---|---|
/// | `issuer_name` | `"Unknown"` |
/// | `card_name` | `"Unknown"` |
/// | `network` | `"Unknown"` |
/// | `card_type` | `"Unknown"` |
/// | `credit_score_required.tier` | `"unknown"` |
#[derive(Debug, Clone, Copy)]
pub struct CardIdentity<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> CardIdentity<'a> {
    #[must_use]
    pub fn of(record: &'a Record) -> Self {
        Self {
            fields: record
                .payload
                .get(FIELD_CARD_IDENTITY)
                .and_then(Value::as_object),
        }
    }

    fn text(self, key: &str) -> Option<&'a str> {
        self.fields?.get(key)?.as_str()
    }

    #[must_use]
    pub fn issuer_name(self) -> Option<&'a str> {
        self.text(FIELD_ISSUER_NAME)
    }

    #[must_use]
    pub fn card_name(self) -> Option<&'a str> {
        self.text(FIELD_CARD_NAME)
    }

    #[must_use]
    pub fn network(self) -> Option<&'a str> {
        self.text(FIELD_NETWORK)
    }

    #[must_use]
    pub fn card_type(self) -> Option<&'a str> {
        self.text(FIELD_CARD_TYPE)
    }

    #[must_use]
    pub fn credit_tier(self) -> Option<&'a str> {
        self.fields?
            .get(FIELD_CREDIT_SCORE_REQUIRED)?
            .get(FIELD_TIER)?
            .as_str()
    }

    #[must_use]
    pub fn issuer_name_or_default(self) -> &'a str {
        self.issuer_name().unwrap_or(UNKNOWN_VALUE)
    }

    #[must_use]
    pub fn card_name_or_default(self) -> &'a str {
        self.card_name().unwrap_or(UNKNOWN_VALUE)
    }

    #[must_use]
    pub fn network_or_default(self) -> &'a str {
        self.network().unwrap_or(UNKNOWN_VALUE)
    }

    #[must_use]
    pub fn card_type_or_default(self) -> &'a str {
        self.card_type().unwrap_or(UNKNOWN_VALUE)
    }

    #[must_use]
    pub fn credit_tier_or_default(self) -> &'a str {
        self.credit_tier().unwrap_or(UNKNOWN_TIER)
    }
}

/// Projects a record into its display summary.
#[must_use]
pub fn project(record: &Record) -> CardSummary {
    let identity = CardIdentity::of(record);
    CardSummary {
        id: record.id.clone(),
        issuer: identity.issuer_name_or_default().to_string(),
        name: identity.card_name_or_default().to_string(),
        network: identity.network_or_default().to_string(),
        card_type: identity.card_type_or_default().to_string(),
        credit_tier: identity.credit_tier_or_default().to_string(),
    }
}
