use std::{path::PathBuf, sync::Arc, time::Duration};

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    clock::Clock,
    errors::{LedgerError, Result},
    export::{ExportFile, ExportSink},
    storage::KeyValueStore,
};

use super::{
    aggregate::{self, ChartSeries, Totals},
    form::{EntryForm, AMOUNT_TOO_LARGE_MESSAGE},
    notification::{
        Notification, DEFAULT_DISMISS_SECONDS, DELETED_MESSAGE, EXPORTED_MESSAGE, SAVED_MESSAGE,
    },
    record::{FinancialRecord, DEFAULT_ZAKAT_RATE},
    selector::{CalendarGrid, DateSelector, YearMonth},
    store::{RecordStore, UpsertOutcome, DEFAULT_STORAGE_KEY},
};

/// Tunables the ledger reads from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSettings {
    pub storage_key: String,
    pub default_zakat_rate: f64,
    pub notification_dismiss: Duration,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            default_zakat_rate: DEFAULT_ZAKAT_RATE,
            notification_dismiss: Duration::from_secs(DEFAULT_DISMISS_SECONDS),
        }
    }
}

/// Owns the record store, the date selector and the input form, and runs the
/// save/edit/delete/reset/export operations against them. Every store
/// mutation is followed by a full write to the storage collaborator.
pub struct Ledger {
    store: RecordStore,
    selector: DateSelector,
    form: EntryForm,
    storage: Box<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    settings: LedgerSettings,
    unsaved_changes: bool,
}

impl Ledger {
    /// Loads the stored records (empty when nothing usable is stored) and
    /// selects today.
    pub fn open(
        storage: Box<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        settings: LedgerSettings,
    ) -> Self {
        let store = RecordStore::load(storage.as_ref(), &settings.storage_key);
        let today = clock.today();
        Self {
            store,
            selector: DateSelector::new(today),
            form: EntryForm::blank(settings.default_zakat_rate),
            storage,
            clock,
            settings,
            unsaved_changes: false,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn records(&self) -> &[FinancialRecord] {
        self.store.records()
    }

    pub fn record(&self, date: NaiveDate) -> Option<&FinancialRecord> {
        self.store.get(date)
    }

    pub fn selector(&self) -> &DateSelector {
        &self.selector
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selector.selected_date()
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    pub fn settings(&self) -> &LedgerSettings {
        &self.settings
    }

    /// Changes the rate future resets start from. Stored records keep the rate
    /// they were saved with.
    pub fn set_default_zakat_rate(&mut self, rate: f64) {
        self.settings.default_zakat_rate = rate;
    }

    pub fn set_notification_dismiss(&mut self, dismiss: Duration) {
        self.settings.notification_dismiss = dismiss;
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn storage_description(&self) -> String {
        self.storage.describe()
    }

    /// Binds the form to `date`, filling it from that date's record or
    /// resetting it to the default rate when there is none.
    pub fn select_date(&mut self, date: NaiveDate) -> Option<&FinancialRecord> {
        self.selector.select(date);
        match self.store.get(date) {
            Some(record) => {
                self.form = EntryForm::from_record(record);
                Some(record)
            }
            None => {
                self.form.reset(self.settings.default_zakat_rate);
                None
            }
        }
    }

    pub fn go_to_previous_month(&mut self) -> YearMonth {
        self.selector.go_to_previous_month();
        self.selector.viewed_month()
    }

    pub fn go_to_next_month(&mut self) -> YearMonth {
        self.selector.go_to_next_month();
        self.selector.viewed_month()
    }

    pub fn show_month(&mut self, month: YearMonth) {
        self.selector.show_month(month);
    }

    pub fn calendar(&self) -> CalendarGrid {
        self.selector
            .calendar_grid(self.today(), |date| self.store.contains(date))
    }

    /// Validates the form and upserts a record for the selected date with
    /// `zakat` and `net` computed from the form's current rate.
    pub fn save(&mut self) -> Notification {
        match self.try_save() {
            Ok(_) => self.notify(Notification::success(SAVED_MESSAGE)),
            Err(err @ LedgerError::Validation(_)) => {
                self.notify(Notification::failure(err.to_string()))
            }
            Err(err) => self.notify(Notification::failure(format!(
                "Saved in memory but could not write storage: {err}"
            ))),
        }
    }

    /// Like [`Ledger::save`] but reports the outcome as a `Result`. A storage
    /// failure still leaves the record in memory.
    pub fn try_save(&mut self) -> Result<UpsertOutcome> {
        let values = self.form.values()?;
        let record = FinancialRecord::compute(
            self.selector.selected_date(),
            values.profit,
            values.zakat_rate,
            values.sadaka,
        );
        if !record.is_finite() {
            return Err(LedgerError::Validation(AMOUNT_TOO_LARGE_MESSAGE.into()));
        }
        let date = record.date;
        let outcome = self.store.upsert(record);
        tracing::info!(%date, ?outcome, "saved record");
        self.persist()?;
        Ok(outcome)
    }

    /// Moves the calendar and form to an existing record without changing it.
    pub fn edit(&mut self, date: NaiveDate) -> Result<&FinancialRecord> {
        let record = self
            .store
            .get(date)
            .ok_or(LedgerError::RecordNotFound(date))?;
        self.form = EntryForm::from_record(record);
        self.selector.focus(date);
        Ok(record)
    }

    /// Removes the record for `date` once `confirm` agrees. Returns `None` when
    /// the user declines.
    pub fn delete<F>(&mut self, date: NaiveDate, confirm: F) -> Option<Notification>
    where
        F: FnOnce(&FinancialRecord) -> bool,
    {
        let Some(record) = self.store.get(date) else {
            return Some(self.notify(Notification::failure(
                LedgerError::RecordNotFound(date).to_string(),
            )));
        };
        if !confirm(record) {
            tracing::debug!(%date, "delete declined");
            return None;
        }
        self.store.remove(date);
        tracing::info!(%date, "deleted record");
        let note = match self.persist() {
            Ok(()) => Notification::success(DELETED_MESSAGE),
            Err(err) => Notification::failure(format!(
                "Deleted in memory but could not write storage: {err}"
            )),
        };
        Some(self.notify(note))
    }

    /// Clears the form; the selected date and the store are untouched.
    pub fn reset_form(&mut self) {
        self.form.reset(self.settings.default_zakat_rate);
    }

    /// Writes the collection to storage, retrying anything a previous failed
    /// write left behind.
    pub fn persist(&mut self) -> Result<()> {
        match self
            .store
            .persist(self.storage.as_ref(), &self.settings.storage_key)
        {
            Ok(()) => {
                self.unsaved_changes = false;
                Ok(())
            }
            Err(err) => {
                self.unsaved_changes = true;
                tracing::warn!(error = %err, "could not persist records");
                Err(err)
            }
        }
    }

    pub fn export_file(&self) -> Result<ExportFile> {
        ExportFile::build(self.store.records(), self.today())
    }

    /// Hands the CSV export to `sink` and returns where it was written.
    pub fn export_to(&self, sink: &dyn ExportSink) -> Result<PathBuf> {
        let file = self.export_file()?;
        let path = sink.deliver(&file)?;
        tracing::info!(file = %file.file_name, records = self.store.len(), "exported records");
        Ok(path)
    }

    /// Exports to `sink` and reports the outcome as a notification, along
    /// with the written path on success.
    pub fn export(&self, sink: &dyn ExportSink) -> (Notification, Option<PathBuf>) {
        match self.export_to(sink) {
            Ok(path) => (
                self.notify(Notification::success(EXPORTED_MESSAGE)),
                Some(path),
            ),
            Err(err) => (
                self.notify(Notification::failure(format!("Export failed: {err}"))),
                None,
            ),
        }
    }

    pub fn totals(&self) -> Totals {
        aggregate::totals(self.store.records())
    }

    pub fn chart_series(&self) -> ChartSeries {
        aggregate::chart_series(self.store.records())
    }

    /// Records newest first, as the ledger table shows them.
    pub fn table(&self) -> Vec<&FinancialRecord> {
        aggregate::sorted_descending(self.store.records())
    }

    pub fn notify(&self, note: Notification) -> Notification {
        note.dismissed_after(self.settings.notification_dismiss)
    }
}
