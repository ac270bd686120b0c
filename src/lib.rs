//! Wallet Slots - photo wallet layout state
//!
//! Core modules:
//! - `wallet`: Slot model, record migration, and the mutable store
//! - `persistence`: Load/save/remove of the wallet record under one key
//! - `platform`: Browser/native storage backends
//! - `settings`: Construction-time configuration
//! - `web`: wasm-bindgen surface for the page (wasm32 only)

pub mod error;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod wallet;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{PersistError, StorageError, WalletError};
pub use persistence::WalletPersistence;
pub use platform::{KeyValueStorage, MemoryStorage};
pub use settings::{LogLevel, WalletSettings};
pub use wallet::{RecordSchema, SyncStatus, WalletSlot, WalletState, WalletStore, normalize};

/// Wallet layout constants
pub mod consts {
    /// Number of main slots (physical wallet pockets)
    pub const SLOT_COUNT: usize = 4;
    /// Sub-photos attached to each main slot
    pub const SUB_PHOTO_COUNT: usize = 3;
    /// LocalStorage key the wallet record lives under
    pub const DEFAULT_STORAGE_KEY: &str = "walletPhotos";
}
