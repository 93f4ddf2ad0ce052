//! Persistent user preferences.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{LedgerError, Result},
    ledger::{form::parse_rate, LedgerSettings, DEFAULT_STORAGE_KEY, DEFAULT_ZAKAT_RATE},
    share::SHARE_MESSAGE,
    utils::{
        fs::write_atomic,
        paths::{self, ensure_dir},
    },
};

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: [&str; 7] = [
    "default_zakat_rate",
    "notification_seconds",
    "app_url",
    "share_message",
    "export_dir",
    "storage_key",
    "ui_color_enabled",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rate a blank form starts from.
    pub default_zakat_rate: f64,
    pub notification_seconds: u64,
    /// Address shared by the share links and copy-link command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
    pub share_message: String,
    /// Where exports land. Defaults to the working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    pub storage_key: String,
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_zakat_rate: DEFAULT_ZAKAT_RATE,
            notification_seconds: 3,
            app_url: None,
            share_message: SHARE_MESSAGE.into(),
            export_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.into(),
            ui_color_enabled: true,
        }
    }
}

impl Config {
    pub fn ledger_settings(&self) -> LedgerSettings {
        LedgerSettings {
            storage_key: self.storage_key.clone(),
            default_zakat_rate: self.default_zakat_rate,
            notification_dismiss: Duration::from_secs(self.notification_seconds),
        }
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Updates one key from its textual value. `none` clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let clears = value.is_empty() || value.eq_ignore_ascii_case("none");
        match key.to_lowercase().as_str() {
            "default_zakat_rate" => self.default_zakat_rate = parse_rate(value)?,
            "notification_seconds" => {
                let seconds: u64 = value.parse().map_err(|_| {
                    LedgerError::Config("notification_seconds must be a whole number".into())
                })?;
                if seconds == 0 {
                    return Err(LedgerError::Config(
                        "notification_seconds must be at least 1".into(),
                    ));
                }
                self.notification_seconds = seconds;
            }
            "app_url" => self.app_url = (!clears).then(|| value.to_string()),
            "share_message" => {
                self.share_message = if clears {
                    SHARE_MESSAGE.into()
                } else {
                    value.to_string()
                }
            }
            "export_dir" => self.export_dir = (!clears).then(|| PathBuf::from(value)),
            "storage_key" => {
                if clears {
                    return Err(LedgerError::Config("storage_key cannot be empty".into()));
                }
                self.storage_key = value.to_string();
            }
            "ui_color_enabled" => {
                self.ui_color_enabled = parse_bool(value).ok_or_else(|| {
                    LedgerError::Config("ui_color_enabled must be on/off".into())
                })?
            }
            other => {
                return Err(LedgerError::Config(format!(
                    "unknown config key `{}` (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Loads and saves [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        let path = paths::config_file_in(&base);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    /// Missing file yields defaults; a corrupt file is an error.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            LedgerError::Config(format!("{} is not valid: {err}", self.path.display()))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), "saved configuration");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
