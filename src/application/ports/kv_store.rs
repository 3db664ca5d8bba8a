//! Key-value persistence port interface

use crate::domain::error::StorageError;

/// Port for the key-value backend holding persisted configuration.
///
/// Implementations provide no concurrent-write protection; concurrent
/// writers race last-writer-wins and callers requiring atomicity must
/// serialize access externally.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Deleting a missing key is not
    /// an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}
