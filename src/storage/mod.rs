//! Key-value document storage used to persist the record collection.

pub mod json_backend;
pub mod memory;

use crate::errors::Result;

/// Abstraction over a string-keyed document store. Each `put` replaces the
/// previous value wholesale.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Human-readable location, shown in the storage info line.
    fn describe(&self) -> String;
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
