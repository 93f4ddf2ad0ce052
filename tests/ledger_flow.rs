mod common;

use common::{date, open_ledger, save_entry, temp_home};
use zakat_ledger::ledger::{
    form::INVALID_PROFIT_MESSAGE,
    notification::{DELETED_MESSAGE, SAVED_MESSAGE},
    RecordStore, YearMonth, DEFAULT_ZAKAT_RATE,
};

#[test]
fn saving_computes_zakat_and_net() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 3, 15));
    ledger.select_date(date(2024, 3, 1));
    ledger.form_mut().set_profit("1000");
    let note = ledger.save();
    assert_eq!(note.message, SAVED_MESSAGE);

    let record = ledger.record(date(2024, 3, 1)).expect("record saved");
    assert_eq!(record.zakat_rate, DEFAULT_ZAKAT_RATE);
    assert!((record.zakat - 25.0).abs() < f64::EPSILON);
    assert!((record.net - 975.0).abs() < f64::EPSILON);
}

#[test]
fn totals_cover_every_record() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 3, 15));
    save_entry(&mut ledger, date(2024, 3, 1), "1000", "2.5", "0");
    save_entry(&mut ledger, date(2024, 3, 5), "500", "2.5", "10");

    let totals = ledger.totals();
    assert_eq!(totals.total_profit, 1500.0);
    assert_eq!(totals.total_zakat, 37.5);
    assert_eq!(totals.total_sadaka, 10.0);
    assert_eq!(totals.net_profit, 1452.5);
}

#[test]
fn resaving_a_date_replaces_its_record() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 3, 15));
    save_entry(&mut ledger, date(2024, 3, 1), "1000", "2.5", "0");
    save_entry(&mut ledger, date(2024, 3, 1), "2000", "5", "20");

    assert_eq!(ledger.records().len(), 1);
    let record = ledger.record(date(2024, 3, 1)).expect("record");
    assert_eq!(record.zakat, 100.0);
    assert_eq!(record.net, 1880.0);
}

#[test]
fn invalid_profit_leaves_store_untouched() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 3, 15));
    for raw in ["", "abc", "0", "-50"] {
        ledger.form_mut().set_profit(raw);
        let note = ledger.save();
        assert!(!note.is_success());
        assert_eq!(note.message, INVALID_PROFIT_MESSAGE);
    }
    assert!(ledger.records().is_empty());
}

#[test]
fn month_navigation_wraps_years() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 12, 10));
    assert_eq!(ledger.go_to_next_month(), YearMonth::new(2025, 1).unwrap());
    assert_eq!(ledger.go_to_previous_month(), YearMonth::new(2024, 12).unwrap());
    ledger.show_month(YearMonth::new(2024, 1).unwrap());
    assert_eq!(ledger.go_to_previous_month(), YearMonth::new(2023, 12).unwrap());
    assert_eq!(ledger.selected_date(), date(2024, 12, 10));
}

#[test]
fn calendar_marks_days_with_records() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 3, 15));
    save_entry(&mut ledger, date(2024, 3, 5), "100", "2.5", "0");
    let grid = ledger.calendar();
    let marked: Vec<u32> = grid
        .days()
        .filter(|cell| cell.has_data)
        .map(|cell| cell.day)
        .collect();
    assert_eq!(marked, vec![5]);
}

#[test]
fn delete_requires_confirmation() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 3, 15));
    save_entry(&mut ledger, date(2024, 3, 1), "1000", "2.5", "0");

    assert!(ledger.delete(date(2024, 3, 1), |_| false).is_none());
    assert_eq!(ledger.records().len(), 1);

    let note = ledger
        .delete(date(2024, 3, 1), |record| record.profit == 1000.0)
        .expect("confirmed delete");
    assert_eq!(note.message, DELETED_MESSAGE);
    assert!(ledger.records().is_empty());
}

#[test]
fn removing_an_absent_date_changes_nothing() {
    let mut store = RecordStore::new();
    store.upsert(zakat_ledger::ledger::FinancialRecord::compute(
        date(2024, 3, 5),
        500.0,
        2.5,
        0.0,
    ));
    let before = store.clone();
    assert!(store.remove(date(2024, 3, 1)).is_none());
    assert_eq!(store, before);
}

#[test]
fn ledger_table_lists_newest_first() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 3, 15));
    save_entry(&mut ledger, date(2024, 3, 5), "500", "2.5", "0");
    save_entry(&mut ledger, date(2024, 2, 20), "300", "2.5", "0");
    save_entry(&mut ledger, date(2024, 3, 10), "700", "2.5", "0");

    let dates: Vec<_> = ledger.table().iter().map(|record| record.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 3, 10), date(2024, 3, 5), date(2024, 2, 20)]
    );

    let series = ledger.chart_series();
    assert_eq!(series.labels, vec!["Feb 20", "Mar 5", "Mar 10"]);
    assert_eq!(series.cumulative_profit, vec![300.0, 800.0, 1500.0]);
}

#[test]
fn changing_default_rate_does_not_touch_saved_records() {
    let home = temp_home();
    let mut ledger = open_ledger(&home, date(2024, 3, 15));
    save_entry(&mut ledger, date(2024, 3, 1), "1000", "2.5", "0");
    ledger.set_default_zakat_rate(5.0);
    ledger.reset_form();

    assert_eq!(ledger.form().zakat_rate(), 5.0);
    assert_eq!(ledger.record(date(2024, 3, 1)).map(|r| r.zakat), Some(25.0));
}
