//! Text renderers for the shell: the ledger table, the month calendar and the
//! bar charts.

pub mod calendar;
pub mod chart;
pub mod table;
