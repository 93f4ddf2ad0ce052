//! The per-date financial ledger: records, their store, aggregation, the
//! date selector and the input form.

pub mod aggregate;
pub mod form;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod notification;
pub mod record;
pub mod selector;
pub mod store;

pub use aggregate::{chart_series, sorted_ascending, sorted_descending, totals, ChartSeries, Totals};
pub use form::{EntryForm, EntryValues};
pub use ledger::{Ledger, LedgerSettings};
pub use notification::{Notification, NotificationKind};
pub use record::{FinancialRecord, DEFAULT_ZAKAT_RATE};
pub use selector::{CalendarCell, CalendarGrid, DateSelector, DayCell, YearMonth};
pub use store::{RecordStore, UpsertOutcome, DEFAULT_STORAGE_KEY};
