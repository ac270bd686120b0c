//! Page-facing bindings (wasm32 only)
//!
//! The page renders from `snapshotJson()` and calls the mutators from its
//! photo pickers and the "clear all" button.

use wasm_bindgen::prelude::*;

use crate::platform::LocalStorage;
use crate::settings::{LogLevel, WalletSettings};
use crate::wallet::WalletStore;

/// Runs at module instantiation, before any `WalletHandle` exists
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // Accept everything; the effective level is the max level set below
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::set_max_level(LogLevel::default().level().to_level_filter());
        log::info!("Wallet Slots starting...");
    }
}

#[wasm_bindgen]
pub struct WalletHandle {
    store: WalletStore<LocalStorage>,
    storage_available: bool,
}

#[wasm_bindgen]
impl WalletHandle {
    /// Open the wallet from LocalStorage. `settings` is optional JSON.
    #[wasm_bindgen(constructor)]
    pub fn new(settings: Option<String>) -> WalletHandle {
        let settings = settings
            .as_deref()
            .map(WalletSettings::from_json)
            .unwrap_or_default();
        log::set_max_level(settings.log_level.level().to_level_filter());

        let storage = LocalStorage::open();
        let storage_available = storage.is_available();
        WalletHandle {
            store: WalletStore::with_storage(storage, &settings),
            storage_available,
        }
    }

    /// Current state in the stored (current-schema) JSON form
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.store.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = setMain)]
    pub fn set_main(&mut self, index: usize, photo: Option<String>) -> Result<(), JsValue> {
        self.store
            .set_main(index, photo)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = setSub)]
    pub fn set_sub(
        &mut self,
        main_index: usize,
        sub_index: usize,
        photo: Option<String>,
    ) -> Result<(), JsValue> {
        self.store
            .set_sub(main_index, sub_index, photo)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) {
        self.store.clear_all();
    }

    /// For a "changes may not be saved" banner
    #[wasm_bindgen(js_name = changesMayBeLost)]
    pub fn changes_may_be_lost(&self) -> bool {
        self.store.changes_may_be_lost()
    }

    /// False when the browser refused LocalStorage for the whole session
    #[wasm_bindgen(js_name = storageAvailable)]
    pub fn storage_available(&self) -> bool {
        self.storage_available
    }

    /// "absent", "legacy", "current" or "unrecognized"
    #[wasm_bindgen(js_name = loadedFrom)]
    pub fn loaded_from(&self) -> String {
        self.store.loaded_from().as_str().to_string()
    }
}
