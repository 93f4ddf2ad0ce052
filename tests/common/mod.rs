#![allow(dead_code)]

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;
use zakat_ledger::{
    clock::FixedClock,
    ledger::{Ledger, LedgerSettings},
    storage::JsonFileStore,
    utils::paths,
};

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique data home for one test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Opens a file-backed ledger under `home` with "today" pinned.
pub fn open_ledger(home: &PathBuf, today: NaiveDate) -> Ledger {
    let storage = JsonFileStore::new(paths::store_dir_in(home)).expect("create json store");
    Ledger::open(
        Box::new(storage),
        Arc::new(FixedClock::on(today)),
        LedgerSettings::default(),
    )
}

/// Selects `on`, fills the form and saves.
pub fn save_entry(ledger: &mut Ledger, on: NaiveDate, profit: &str, rate: &str, sadaka: &str) {
    ledger.select_date(on);
    ledger.form_mut().set_profit(profit);
    ledger.form_mut().set_zakat_rate(rate).expect("valid rate");
    ledger.form_mut().set_sadaka(sadaka);
    let note = ledger.save();
    assert!(note.is_success(), "save failed: {}", note.message);
}
