//! Wallet Slots record inspector
//!
//! Native only: reads a stored wallet record (the raw LocalStorage value) from
//! a file or stdin, runs it through migration, and prints the normalized
//! record. The web build's entry point lives in the library (`web` module).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = inspect(std::env::args().nth(1)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn inspect(path: Option<String>) -> Result<(), String> {
    use std::io::Read;
    use wallet_slots::{MemoryStorage, WalletPersistence, normalize};
    use wallet_slots::consts::DEFAULT_STORAGE_KEY;

    let raw = match path.as_deref() {
        Some("-") | None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("failed to read stdin: {}", e))?;
            buf
        }
        Some(path) => {
            std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))?
        }
    };

    // Same read path as the browser: empty means absent, bad JSON degrades
    let storage = MemoryStorage::new().with_item(DEFAULT_STORAGE_KEY, raw.trim());
    let persistence = WalletPersistence::new(storage, DEFAULT_STORAGE_KEY);
    let record = persistence.load().unwrap_or_else(|e| {
        log::warn!("{}", e);
        None
    });

    let normalized = normalize(record.as_ref());
    log::info!(
        "Record schema: {} ({} photos)",
        normalized.schema.as_str(),
        normalized.state.photo_count()
    );

    let json = serde_json::to_string_pretty(&normalized.state)
        .map_err(|e| format!("failed to encode wallet state: {}", e))?;
    println!("{}", json);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build starts from wallet_slots::web::wasm_start; this binary has nothing to do there
}
