use std::sync::Arc;

use cards_store::models::{CardSummary, DataFile, FilterSpec, Record, SchemaDocument, SearchResults};

use crate::store::RecordStore;

pub mod query;
pub mod summary;

pub use summary::CardIdentity;

/// Read-only query surface over a shared record store.
#[derive(Debug, Clone)]
pub struct CardControlPlane {
    store: Arc<RecordStore>,
}

impl CardControlPlane {
    #[must_use]
    pub const fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Summaries for every record, in store order.
    #[must_use]
    pub fn list_cards(&self) -> Vec<CardSummary> {
        self.store.all().iter().map(summary::project).collect()
    }

    #[must_use]
    pub fn get_card(&self, card_id: &str) -> Option<&Record> {
        self.store.get(card_id)
    }

    #[must_use]
    pub fn schema(&self) -> Option<&SchemaDocument> {
        self.store.schema()
    }

    /// Runs the filter over every record and projects the matches.
    #[must_use]
    pub fn search(&self, filter: &FilterSpec) -> SearchResults {
        let cards = query::search(self.store.all(), filter)
            .into_iter()
            .map(summary::project)
            .collect();
        SearchResults::new(cards)
    }

    #[must_use]
    pub fn data_files(&self) -> &[DataFile] {
        self.store.files()
    }
}
