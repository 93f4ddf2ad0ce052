use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{errors::Result, storage::KeyValueStore};

use super::record::FinancialRecord;

/// Key under which the record collection is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "financialData";

/// Whether an upsert added a new date or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

/// The per-date record collection, kept in insertion order. Display order is
/// computed at read time; the stored order only changes on append or removal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
    records: Vec<FinancialRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the collection stored under `key`. Absent, empty, unreadable or
    /// unparsable documents all yield an empty store.
    pub fn load(storage: &dyn KeyValueStore, key: &str) -> Self {
        let raw = match storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key, "no stored records, starting empty");
                return Self::new();
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "could not read stored records, starting empty");
                return Self::new();
            }
        };
        if raw.trim().is_empty() {
            return Self::new();
        }
        match Self::from_json(&raw) {
            Ok(store) => {
                tracing::info!(key, records = store.len(), "loaded stored records");
                store
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "stored records are unparsable, starting empty");
                Self::new()
            }
        }
    }

    /// Parses a stored document. Later duplicates of a date replace earlier ones
    /// so the one-record-per-date invariant holds for any input.
    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: Vec<FinancialRecord> = serde_json::from_str(raw)?;
        let mut store = Self::new();
        for record in parsed {
            store.upsert(record);
        }
        Ok(store)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Writes the whole collection under `key`, replacing whatever was there.
    pub fn persist(&self, storage: &dyn KeyValueStore, key: &str) -> Result<()> {
        let json = self.to_json()?;
        storage.put(key, &json)?;
        tracing::debug!(key, bytes = json.len(), records = self.len(), "persisted records");
        Ok(())
    }

    /// Replaces the record with the same date in place, or appends.
    pub fn upsert(&mut self, record: FinancialRecord) -> UpsertOutcome {
        match self.position(record.date) {
            Some(index) => {
                self.records[index] = record;
                UpsertOutcome::Replaced
            }
            None => {
                self.records.push(record);
                UpsertOutcome::Inserted
            }
        }
    }

    /// Removes the record for `date`; absent dates are a no-op.
    pub fn remove(&mut self, date: NaiveDate) -> Option<FinancialRecord> {
        self.position(date).map(|index| self.records.remove(index))
    }

    pub fn get(&self, date: NaiveDate) -> Option<&FinancialRecord> {
        self.records.iter().find(|record| record.date == date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.position(date).is_some()
    }

    /// Records in stored order.
    pub fn records(&self) -> &[FinancialRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, date: NaiveDate) -> Option<usize> {
        self.records.iter().position(|record| record.date == date)
    }
}
