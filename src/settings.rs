//! Store settings
//!
//! Fixed at construction. The page may pass them as a JSON string; any field
//! left out takes its default.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::consts::DEFAULT_STORAGE_KEY;

/// Log verbosity presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    pub fn level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
        }
    }
}

/// Wallet store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletSettings {
    /// LocalStorage key holding the wallet record
    pub storage_key: String,
    /// Console log verbosity (web only)
    #[serde(deserialize_with = "lenient_log_level")]
    pub log_level: LogLevel,
    /// Rewrite the record right after loading, so legacy data is stored in
    /// the current schema from the first session on
    pub write_back_on_load: bool,
}

/// Case-insensitive level; anything unreadable keeps the default level
/// without discarding the other fields
fn lenient_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(LogLevel::from_str).unwrap_or_else(|| {
        log::warn!("Unknown log level {}, using {}", value, LogLevel::default().as_str());
        LogLevel::default()
    }))
}

impl Default for WalletSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: LogLevel::Info,
            write_back_on_load: true,
        }
    }
}

impl WalletSettings {
    /// Parse settings JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed wallet settings ({}), using defaults", e);
                Self::default()
            }
        }
    }
}
