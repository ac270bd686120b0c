//! Wallet store
//!
//! Owns the canonical state. Every mutation is written through to storage in
//! the same call; storage failures are logged and recorded in `SyncStatus`,
//! never returned, so the in-memory state stays usable for the session.

use super::migrate::{Normalized, RecordSchema, normalize};
use super::slot::{PhotoRef, WalletSlot, WalletState, clean_photo};
use crate::consts::{SLOT_COUNT, SUB_PHOTO_COUNT};
use crate::error::{PersistError, SlotAxis, WalletError, WalletResult};
use crate::persistence::WalletPersistence;
use crate::platform::KeyValueStorage;
use crate::settings::WalletSettings;

/// Outcome of the most recent write to storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// Nothing written yet this session
    Pending,
    /// Last save succeeded
    Saved,
    /// Last clear removed the record
    Cleared,
    /// Last write failed; storage may not match what is on screen
    Failed { reason: String },
}

pub struct WalletStore<S> {
    state: WalletState,
    persistence: WalletPersistence<S>,
    loaded_from: RecordSchema,
    status: SyncStatus,
}

fn check_index(axis: SlotAxis, index: usize, bound: usize) -> WalletResult<()> {
    if index < bound {
        Ok(())
    } else {
        Err(WalletError::IndexOutOfRange { axis, index, bound })
    }
}

impl<S: KeyValueStorage> WalletStore<S> {
    /// Load and normalize the stored record. The store is ready once this
    /// returns; nothing else reads storage afterwards.
    pub fn open(persistence: WalletPersistence<S>, settings: &WalletSettings) -> Self {
        // After a read failure the stored record is unknown, so it is not overwritten
        let mut write_back = settings.write_back_on_load;
        let raw = match persistence.load() {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to load wallet from '{}': {}", persistence.key(), e);
                if matches!(e, PersistError::Storage(_)) {
                    write_back = false;
                }
                None
            }
        };

        let Normalized { state, schema } = normalize(raw.as_ref());
        match schema {
            RecordSchema::Absent => log::info!("No saved wallet found, starting fresh"),
            RecordSchema::Legacy => {
                log::info!("Migrated legacy wallet record ({} photos)", state.photo_count())
            }
            RecordSchema::Current => log::info!("Loaded wallet ({} photos)", state.photo_count()),
            RecordSchema::Unrecognized => {
                log::info!("Saved wallet has an unrecognized shape, starting fresh")
            }
        }

        let mut store = Self {
            state,
            persistence,
            loaded_from: schema,
            status: SyncStatus::Pending,
        };
        if write_back {
            store.persist();
        }
        store
    }

    /// Open against a storage backend using the key from settings
    pub fn with_storage(storage: S, settings: &WalletSettings) -> Self {
        Self::open(WalletPersistence::from_settings(storage, settings), settings)
    }

    /// Read-only view of the current state
    pub fn snapshot(&self) -> &WalletState {
        &self.state
    }

    /// Schema of the record found at startup
    pub fn loaded_from(&self) -> RecordSchema {
        self.loaded_from
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    /// True when the last write failed and a reload could lose changes
    pub fn changes_may_be_lost(&self) -> bool {
        matches!(self.status, SyncStatus::Failed { .. })
    }

    /// Replace the main photo of a slot. `None` or an empty string clears it.
    /// Sub-photos are left untouched.
    pub fn set_main(&mut self, index: usize, photo: Option<PhotoRef>) -> WalletResult<()> {
        check_index(SlotAxis::Main, index, SLOT_COUNT)?;
        let photo = clean_photo(photo);
        log::debug!(
            "Main photo {} {}",
            index,
            if photo.is_some() { "set" } else { "cleared" }
        );
        self.slot_mut(index).main = photo;
        self.persist();
        Ok(())
    }

    /// Replace one sub-photo of a slot
    pub fn set_sub(
        &mut self,
        main_index: usize,
        sub_index: usize,
        photo: Option<PhotoRef>,
    ) -> WalletResult<()> {
        check_index(SlotAxis::Main, main_index, SLOT_COUNT)?;
        check_index(SlotAxis::Sub, sub_index, SUB_PHOTO_COUNT)?;
        let photo = clean_photo(photo);
        log::debug!(
            "Sub photo {}.{} {}",
            main_index,
            sub_index,
            if photo.is_some() { "set" } else { "cleared" }
        );
        self.slot_mut(main_index).sub[sub_index] = photo;
        self.persist();
        Ok(())
    }

    /// Reset every slot and delete the stored record
    pub fn clear_all(&mut self) {
        self.state = WalletState::empty();
        self.status = match self.persistence.remove() {
            Ok(()) => {
                log::info!("Wallet cleared");
                SyncStatus::Cleared
            }
            Err(e) => {
                log::error!("Failed to remove saved wallet: {}", e);
                SyncStatus::Failed {
                    reason: e.to_string(),
                }
            }
        };
    }

    fn slot_mut(&mut self, index: usize) -> &mut WalletSlot {
        &mut self.state.slots_mut()[index]
    }

    fn persist(&mut self) {
        self.status = match self.persistence.save(&self.state) {
            Ok(()) => SyncStatus::Saved,
            Err(e) => {
                log::error!("Failed to save wallet: {}", e);
                SyncStatus::Failed {
                    reason: e.to_string(),
                }
            }
        };
    }
}
