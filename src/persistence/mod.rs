//! Wallet record persistence
//!
//! One key, one JSON value. Reads hand back the decoded value untouched so the
//! migration step sees exactly what an older version wrote; writes always use
//! the current slot-object schema.

use serde_json::Value;

use crate::error::PersistError;
use crate::platform::KeyValueStorage;
use crate::settings::WalletSettings;
use crate::wallet::WalletState;

/// Persistence adapter bound to a storage backend and its key
pub struct WalletPersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> WalletPersistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn from_settings(storage: S, settings: &WalletSettings) -> Self {
        Self::new(storage, settings.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read and decode the stored record.
    ///
    /// A missing key or an empty string is `Ok(None)`.
    pub fn load(&self) -> Result<Option<Value>, PersistError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(PersistError::Decode)
    }

    /// Write the full state under the key
    pub fn save(&self, state: &WalletState) -> Result<(), PersistError> {
        let json = serde_json::to_string(state).map_err(PersistError::Encode)?;
        self.storage.set_item(&self.key, &json)?;
        log::debug!(
            "Wallet saved ({} photos, {} bytes)",
            state.photo_count(),
            json.len()
        );
        Ok(())
    }

    /// Delete the key outright (not an empty write)
    pub fn remove(&self) -> Result<(), PersistError> {
        self.storage.remove_item(&self.key)?;
        log::debug!("Wallet record '{}' removed", self.key);
        Ok(())
    }
}
