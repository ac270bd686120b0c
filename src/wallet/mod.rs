//! Wallet slot state
//!
//! The model is a fixed array of four slots. Everything loaded from storage
//! passes through `migrate::normalize` before the store will hold it.

pub mod migrate;
pub mod slot;
pub mod store;

pub use migrate::{Normalized, RecordSchema, normalize};
pub use slot::{PhotoRef, WalletSlot, WalletState};
pub use store::{SyncStatus, WalletStore};
