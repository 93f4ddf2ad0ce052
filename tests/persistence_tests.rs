mod common;

use std::fs;

use common::{date, open_ledger, save_entry, temp_home};
use zakat_ledger::{
    ledger::DEFAULT_STORAGE_KEY,
    storage::{JsonFileStore, KeyValueStore},
    utils::paths,
};

#[test]
fn records_survive_reopening() {
    let home = temp_home();
    {
        let mut ledger = open_ledger(&home, date(2024, 3, 15));
        save_entry(&mut ledger, date(2024, 3, 1), "1000", "2.5", "5");
        save_entry(&mut ledger, date(2024, 3, 2), "400", "3", "0");
    }
    let reopened = open_ledger(&home, date(2024, 3, 16));
    assert_eq!(reopened.records().len(), 2);
    let record = reopened.record(date(2024, 3, 2)).expect("record");
    assert_eq!(record.zakat_rate, 3.0);
    assert_eq!(record.zakat, 12.0);
}

#[test]
fn stored_document_uses_camel_case_and_iso_dates() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 3, 15));
    save_entry(&mut ledger, date(2024, 3, 1), "1000", "2.5", "0");

    let store = JsonFileStore::new(paths::store_dir_in(&home)).unwrap();
    let raw = store.get(DEFAULT_STORAGE_KEY).unwrap().expect("document");
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["date"], "2024-03-01");
    assert_eq!(json[0]["zakatRate"], 2.5);
    assert_eq!(json[0]["net"], 975.0);
}

#[test]
fn corrupt_document_loads_as_empty() {
    let home = temp_home();
    let store = JsonFileStore::new(paths::store_dir_in(&home)).unwrap();
    fs::write(store.document_path(DEFAULT_STORAGE_KEY), "[{ broken").unwrap();

    let ledger = open_ledger(&home, date(2024, 3, 15));
    assert!(ledger.records().is_empty());
}

#[test]
fn legacy_documents_fill_missing_rate_and_sadaka() {
    let home = temp_home();
    let store = JsonFileStore::new(paths::store_dir_in(&home)).unwrap();
    store
        .put(
            DEFAULT_STORAGE_KEY,
            r#"[{"date":"2024-03-01T00:00:00.000Z","profit":1000,"zakat":25,"net":975}]"#,
        )
        .unwrap();

    let ledger = open_ledger(&home, date(2024, 3, 15));
    let record = ledger.record(date(2024, 3, 1)).expect("legacy record");
    assert_eq!(record.zakat_rate, 2.5);
    assert_eq!(record.sadaka, 0.0);
    assert_eq!(record.net, 975.0);
}

#[test]
fn failed_write_leaves_previous_document_intact() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 3, 15));
    save_entry(&mut ledger, date(2024, 3, 1), "1000", "2.5", "0");

    let store = JsonFileStore::new(paths::store_dir_in(&home)).unwrap();
    let path = store.document_path(DEFAULT_STORAGE_KEY);
    let original = fs::read_to_string(&path).unwrap();

    // A directory squatting on the temp file name makes the write fail.
    let mut tmp = path.clone();
    tmp.set_extension("json.tmp");
    fs::create_dir_all(&tmp).unwrap();

    ledger.select_date(date(2024, 3, 2));
    ledger.form_mut().set_profit("50");
    let note = ledger.save();
    assert!(!note.is_success());
    assert!(ledger.has_unsaved_changes());
    assert_eq!(ledger.records().len(), 2);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
