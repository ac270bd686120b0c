//! Wallet slot model
//!
//! Serialized form matches the current LocalStorage schema:
//! `[{"main": "...", "sub": ["...", null, null]}, ...]`, always 4 slots.

use serde::{Deserialize, Serialize};

use crate::consts::{SLOT_COUNT, SUB_PHOTO_COUNT};

/// Opaque encoded image (usually a data URL). Never interpreted here.
pub type PhotoRef = String;

/// Drop empty strings so "no photo" has exactly one representation
pub(crate) fn clean_photo(photo: Option<PhotoRef>) -> Option<PhotoRef> {
    photo.filter(|p| !p.is_empty())
}

/// One wallet pocket: a primary photo and three sub-photos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSlot {
    pub main: Option<PhotoRef>,
    /// Fixed positions; a cleared sub-photo stays in place as `None`
    pub sub: [Option<PhotoRef>; SUB_PHOTO_COUNT],
}

impl WalletSlot {
    /// Slot with no main photo and no sub-photos
    pub fn empty() -> Self {
        Self {
            main: None,
            sub: std::array::from_fn(|_| None),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_none() && self.sub.iter().all(Option::is_none)
    }

    /// Number of photos held (main and sub)
    pub fn photo_count(&self) -> usize {
        usize::from(self.main.is_some()) + self.sub.iter().filter(|s| s.is_some()).count()
    }
}

impl Default for WalletSlot {
    fn default() -> Self {
        Self::empty()
    }
}

/// The whole wallet, index = physical position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletState {
    slots: [WalletSlot; SLOT_COUNT],
}

impl WalletState {
    /// All four slots empty. Fallback for anything that fails to normalize.
    pub fn empty() -> Self {
        Self {
            slots: std::array::from_fn(|_| WalletSlot::empty()),
        }
    }

    pub fn from_slots(slots: [WalletSlot; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[WalletSlot; SLOT_COUNT] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&WalletSlot> {
        self.slots.get(index)
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [WalletSlot; SLOT_COUNT] {
        &mut self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(WalletSlot::is_empty)
    }

    pub fn photo_count(&self) -> usize {
        self.slots.iter().map(WalletSlot::photo_count).sum()
    }
}

impl Default for WalletState {
    fn default() -> Self {
        Self::empty()
    }
}
