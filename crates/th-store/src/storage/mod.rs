//! Key-value storage backends.
//!
//! The store only needs string keys mapped to string values, read and
//! written synchronously. [`MemoryStorage`] backs tests and ephemeral
//! sessions; [`FileStorage`] keeps one JSON file per key on disk.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StoreResult;

/// Synchronous string key-value storage.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}
