use cards_store::models::{FilterSpec, Record};

use super::summary::CardIdentity;

/// Returns the records matching every criterion in `filter`, in input order.
#[must_use]
pub fn search<'a>(records: &'a [Record], filter: &FilterSpec) -> Vec<&'a Record> {
    let criteria = Criteria::from_filter(filter);
    records
        .iter()
        .filter(|record| criteria.matches(CardIdentity::of(record)))
        .collect()
}

/// Lower-cased criteria; empty values are dropped.
#[derive(Debug, Default)]
struct Criteria {
    issuer: Option<String>,
    card_type: Option<String>,
    network: Option<String>,
    credit_tier: Option<String>,
}

impl Criteria {
    fn from_filter(filter: &FilterSpec) -> Self {
        Self {
            issuer: normalize(filter.issuer.as_deref()),
            card_type: normalize(filter.card_type.as_deref()),
            network: normalize(filter.network.as_deref()),
            credit_tier: normalize(filter.credit_tier.as_deref()),
        }
    }

    fn matches(&self, identity: CardIdentity<'_>) -> bool {
        contains(self.issuer.as_deref(), identity.issuer_name())
            && equals(self.card_type.as_deref(), identity.card_type())
            && equals(self.network.as_deref(), identity.network())
            && equals(self.credit_tier.as_deref(), identity.credit_tier())
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

fn contains(query: Option<&str>, field: Option<&str>) -> bool {
    query.is_none_or(|query| field.is_some_and(|field| field.to_lowercase().contains(query)))
}

fn equals(query: Option<&str>, field: Option<&str>) -> bool {
    query.is_none_or(|query| field.is_some_and(|field| field.to_lowercase() == query))
}
