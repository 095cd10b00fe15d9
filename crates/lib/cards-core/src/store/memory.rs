use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::{error::Error, fmt, io};

use cards_store::embedded;
use cards_store::models::{DataFile, Record, SchemaDocument, SourceFile};
use cards_store::schema::{FileRole, classify_path, record_id_from_path};
use serde_json::Value;
use tracing::{debug, info};

use super::source;

#[derive(Debug)]
pub enum StoreError {
    MalformedData {
        path: String,
        source: serde_json::Error,
    },
    DuplicateSchema {
        first: String,
        second: String,
    },
    DuplicateRecord(String),
    InvalidRecordPath(String),
    MissingDataDir(String),
    Io {
        path: String,
        source: io::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedData { path, source } => {
                write!(f, "malformed data in {path}: {source}")
            }
            Self::DuplicateSchema { first, second } => {
                write!(f, "more than one schema file: {first} and {second}")
            }
            Self::DuplicateRecord(id) => write!(f, "duplicate record id: {id}"),
            Self::InvalidRecordPath(path) => {
                write!(f, "record path does not yield an id: {path}")
            }
            Self::MissingDataDir(path) => write!(
                f,
                "no dataset at {path}: expected a directory holding schemas/ or sample-credit-cards/"
            ),
            Self::Io { path, source } => write!(f, "failed to read {path}: {source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedData { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::DuplicateSchema { .. }
            | Self::DuplicateRecord(_)
            | Self::InvalidRecordPath(_)
            | Self::MissingDataDir(_) => None,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Immutable in-memory dataset: schema, records, and every source file.
#[derive(Debug, Default)]
pub struct RecordStore {
    schema: Option<SchemaDocument>,
    records: Vec<Record>,
    index: HashMap<String, usize>,
    files: Vec<DataFile>,
}

impl RecordStore {
    /// Parses and indexes the given source files.
    ///
    /// Paths under `schemas/` fill the schema slot and paths under
    /// `sample-credit-cards/` become records. Every file is kept, parsed, in
    /// source order.
    ///
    /// # Errors
    /// Returns `StoreError` if any content is not valid JSON, if a second schema
    /// file appears, or if a record path yields an empty or repeated id.
    pub fn load<I>(sources: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let mut store = Self::default();
        let mut schema_path: Option<String> = None;

        for SourceFile { path, content } in sources {
            let document: Value =
                serde_json::from_str(&content).map_err(|source| StoreError::MalformedData {
                    path: path.clone(),
                    source,
                })?;

            match classify_path(&path) {
                FileRole::Schema => {
                    if let Some(first) = schema_path.take() {
                        return Err(StoreError::DuplicateSchema {
                            first,
                            second: path,
                        });
                    }
                    schema_path = Some(path.clone());
                    store.schema = Some(SchemaDocument::new(document.clone()));
                }
                FileRole::Record => {
                    let id = record_id_from_path(&path)
                        .filter(|id| !id.is_empty())
                        .ok_or_else(|| StoreError::InvalidRecordPath(path.clone()))?;
                    let position = store.records.len();
                    match store.index.entry(id.to_string()) {
                        Entry::Occupied(entry) => {
                            return Err(StoreError::DuplicateRecord(entry.key().clone()));
                        }
                        Entry::Vacant(entry) => {
                            store.records.push(Record {
                                id: entry.key().clone(),
                                payload: document.clone(),
                            });
                            entry.insert(position);
                        }
                    }
                }
                FileRole::Other => {
                    debug!(path = %path, "data file has neither schema nor record role");
                }
            }

            store.files.push(DataFile {
                path,
                content: document,
            });
        }

        info!(
            records = store.records.len(),
            files = store.files.len(),
            schema = store.schema.is_some(),
            "dataset loaded"
        );
        Ok(store)
    }

    /// Loads the snapshot compiled into the binary.
    ///
    /// # Errors
    /// Returns `StoreError` if the embedded snapshot is inconsistent.
    pub fn from_embedded() -> StoreResult<Self> {
        Self::load(embedded::sources())
    }

    /// Loads a dataset from a directory holding `schemas/` and
    /// `sample-credit-cards/`.
    ///
    /// # Errors
    /// Returns `StoreError` if `root` holds neither role directory, or if a
    /// file cannot be read or fails to load.
    pub fn from_dir(root: &Path) -> StoreResult<Self> {
        Self::load(source::read_dir(root)?)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// Records in source order.
    #[must_use]
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn schema(&self) -> Option<&SchemaDocument> {
        self.schema.as_ref()
    }

    /// Every loaded file, parsed, in source order.
    #[must_use]
    pub fn files(&self) -> &[DataFile] {
        &self.files
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
