//! Platform abstraction layer
//!
//! Storage backends behind the persistence adapter:
//! - `LocalStorage` on web (wasm32)
//! - `MemoryStorage` everywhere (native builds and tests)

mod memory;
#[cfg(target_arch = "wasm32")]
mod local_storage;

pub use memory::MemoryStorage;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

use crate::error::StorageError;

/// Synchronous string key-value store, shaped after the Web Storage API
pub trait KeyValueStorage {
    /// `Ok(None)` when the key is not present
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
