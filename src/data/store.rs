//! Summary record persistence.
//!
//! Records live in a flat, ordered collection keyed by document name. The
//! file-backed [`JsonStore`] keeps them as a pretty-printed JSON array and
//! rewrites the whole file on every upsert.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    error::PersistenceError,
    nlp::{Language, SummaryResult},
};

/// Persisted summary of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub name: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub language: Language,
}

impl SummaryRecord {
    pub fn new(name: impl Into<String>, result: SummaryResult) -> Self {
        Self {
            name: name.into(),
            summary: result.summary,
            keywords: result.keywords,
            language: result.language,
        }
    }
}

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Updated,
}

impl Upsert {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inserted => "added",
            Self::Updated => "updated",
        }
    }
}

/// Key-value access to summary records.
pub trait RecordStore {
    /// Look up the record stored under `name`.
    fn get(&self, name: &str) -> Option<SummaryRecord>;

    /// Replace the record with the same name in place, or append it.
    fn upsert(&mut self, record: SummaryRecord) -> Result<Upsert, PersistenceError>;
}

fn upsert_into(records: &mut Vec<SummaryRecord>, record: SummaryRecord) -> Upsert {
    match records.iter_mut().find(|existing| existing.name == record.name) {
        Some(existing) => {
            *existing = record;
            Upsert::Updated
        }
        None => {
            records.push(record);
            Upsert::Inserted
        }
    }
}

/// Store backed by a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in stored order. A missing, unreadable or malformed file
    /// reads as an empty store.
    pub fn records(&self) -> Vec<SummaryRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file missing; starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "store unreadable; starting empty");
                return Vec::new();
            }
        };
        if content.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "store is not a record array; starting empty");
                Vec::new()
            }
        }
    }

    fn write(&self, records: &[SummaryRecord]) -> Result<(), PersistenceError> {
        let write_err = |source: std::io::Error| PersistenceError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json).map_err(write_err)?;
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn get(&self, name: &str) -> Option<SummaryRecord> {
        self.records().into_iter().find(|record| record.name == name)
    }

    fn upsert(&mut self, record: SummaryRecord) -> Result<Upsert, PersistenceError> {
        let mut records = self.records();
        let name = record.name.clone();
        let outcome = upsert_into(&mut records, record);
        self.write(&records)?;
        info!(
            path = %self.path.display(),
            %name,
            outcome = outcome.as_str(),
            total = records.len(),
            "saved summary record"
        );
        Ok(outcome)
    }
}

/// In-process store with the same upsert semantics.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<SummaryRecord>,
}

impl MemoryStore {
    pub fn records(&self) -> &[SummaryRecord] {
        &self.records
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, name: &str) -> Option<SummaryRecord> {
        self.records.iter().find(|record| record.name == name).cloned()
    }

    fn upsert(&mut self, record: SummaryRecord) -> Result<Upsert, PersistenceError> {
        Ok(upsert_into(&mut self.records, record))
    }
}
