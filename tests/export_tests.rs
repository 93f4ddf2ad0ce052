mod common;

use assert_fs::prelude::*;
use assert_fs::TempDir;
use common::{date, open_ledger, save_entry, temp_home};
use insta::assert_snapshot;
use predicates::prelude::*;
use regex::Regex;
use zakat_ledger::export::{DirectorySink, ExportSink};
use zakat_ledger::ledger::notification::EXPORTED_MESSAGE;

#[test]
fn export_writes_header_and_rows_in_stored_order() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 3, 15));
    save_entry(&mut ledger, date(2024, 3, 5), "500", "2.5", "10");
    save_entry(&mut ledger, date(2024, 3, 1), "1000", "2.5", "0");

    let file = ledger.export_file().expect("export");
    assert_snapshot!(file.contents, @r###"
    Date,Profit (₹),Zakat Rate (%),Zakat (₹),Sadaka (₹),Net Profit (₹)
    2024-03-05,500,2.5,12.5,10,477.5
    2024-03-01,1000,2.5,25,0,975
    "###);
}

#[test]
fn export_file_is_named_after_today() {
    let home = temp_home();
    let ledger = open_ledger(&home, date(2024, 3, 15));
    let file = ledger.export_file().expect("export");

    let pattern = Regex::new(r"^profit-zakat-data-\d{4}-\d{2}-\d{2}\.csv$").unwrap();
    assert!(pattern.is_match(&file.file_name), "{}", file.file_name);
    assert_eq!(file.file_name, "profit-zakat-data-2024-03-15.csv");
}

#[test]
fn empty_export_still_has_header() {
    let home = temp_home();
    let ledger = open_ledger(&home, date(2024, 3, 15));
    let file = ledger.export_file().expect("export");
    assert_eq!(file.contents.lines().count(), 1);
    assert!(file.contents.starts_with("Date,Profit (₹)"));
}

#[test]
fn directory_sink_delivers_the_file() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 3, 15));
    save_entry(&mut ledger, date(2024, 3, 1), "1000", "2.5", "0");

    let out = TempDir::new().unwrap();
    let sink = DirectorySink::new(out.path().join("exports"));
    let path = ledger.export_to(&sink).expect("delivered");

    out.child("exports/profit-zakat-data-2024-03-15.csv")
        .assert(predicate::path::exists())
        .assert(predicate::str::contains("2024-03-01,1000,2.5,25,0,975"));
    assert_eq!(path, sink.dir().join("profit-zakat-data-2024-03-15.csv"));

    let (note, written) = ledger.export(&sink);
    assert!(note.is_success());
    assert_eq!(note.message, EXPORTED_MESSAGE);
    assert_eq!(written.as_ref(), Some(&path));
    assert_eq!(sink.deliver(&ledger.export_file().unwrap()).unwrap(), path);
}

#[test]
fn export_into_unwritable_directory_reports_failure() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 3, 15));
    save_entry(&mut ledger, date(2024, 3, 1), "1000", "2.5", "0");

    let out = TempDir::new().unwrap();
    out.child("occupied").write_str("not a directory").unwrap();
    let sink = DirectorySink::new(out.path().join("occupied"));

    let (note, written) = ledger.export(&sink);
    assert!(!note.is_success());
    assert!(note.message.starts_with("Export failed:"));
    assert!(written.is_none());
}
