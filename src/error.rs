//! Error types for storage, persistence, and store operations.

use thiserror::Error;

/// Failure reported by a key-value storage backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage medium (e.g. LocalStorage disabled or no window)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read key '{key}': {reason}")]
    Read { key: String, reason: String },

    /// Includes quota-exceeded rejections
    #[error("failed to write key '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("failed to remove key '{key}': {reason}")]
    Remove { key: String, reason: String },
}

/// Failure in the persistence adapter
#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("stored record is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode wallet state: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Which index of a mutation was out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAxis {
    Main,
    Sub,
}

impl SlotAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotAxis::Main => "main",
            SlotAxis::Sub => "sub",
        }
    }
}

/// Store operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("{} index {index} out of range (expected < {bound})", .axis.as_str())]
    IndexOutOfRange {
        axis: SlotAxis,
        index: usize,
        bound: usize,
    },
}

pub type WalletResult<T> = Result<T, WalletError>;
