use std::{env, fs, io, path::Path, path::PathBuf};

use dirs::home_dir;

pub const HOME_ENV: &str = "ZAKAT_LEDGER_HOME";

const DEFAULT_DIR_NAME: &str = ".zakat_ledger";
const STORE_DIR: &str = "store";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const CLIPBOARD_FILE: &str = "clipboard.txt";

/// Returns the application data directory, defaulting to `~/.zakat_ledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding one JSON document per storage key.
pub fn store_dir_in(base: &Path) -> PathBuf {
    base.join(STORE_DIR)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// File that receives copied links when no system clipboard is reachable.
pub fn clipboard_file_in(base: &Path) -> PathBuf {
    base.join(CLIPBOARD_FILE)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
