//! CSV export of the record collection.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{Terminator, WriterBuilder};

use crate::{
    errors::{LedgerError, Result},
    ledger::FinancialRecord,
    utils::fs::write_atomic,
};

pub const CSV_HEADER: [&str; 6] = [
    "Date",
    "Profit (₹)",
    "Zakat Rate (%)",
    "Zakat (₹)",
    "Sadaka (₹)",
    "Net Profit (₹)",
];

const FILE_PREFIX: &str = "profit-zakat-data";

/// A finished export waiting to be handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

impl ExportFile {
    /// Renders `records` in the order given, named after `exported_on`.
    pub fn build(records: &[FinancialRecord], exported_on: NaiveDate) -> Result<Self> {
        Ok(Self {
            file_name: export_file_name(exported_on),
            contents: records_to_csv(records)?,
        })
    }
}

/// Receives finished exports; the terminal stand-in for a browser download.
pub trait ExportSink {
    /// Stores the file and returns where it ended up.
    fn deliver(&self, file: &ExportFile) -> Result<PathBuf>;
}

/// Writes exports into a directory, replacing same-day exports.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&self, file: &ExportFile) -> Result<PathBuf> {
        let path = self.dir.join(&file.file_name);
        write_atomic(&path, &file.contents)?;
        Ok(path)
    }
}

pub fn export_file_name(exported_on: NaiveDate) -> String {
    format!("{}-{}.csv", FILE_PREFIX, exported_on.format("%Y-%m-%d"))
}

/// Header row followed by one row per record; amounts are written unformatted.
pub fn records_to_csv(records: &[FinancialRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.date_key(),
            record.profit.to_string(),
            record.zakat_rate.to_string(),
            record.zakat.to_string(),
            record.sadaka.to_string(),
            record.net.to_string(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| LedgerError::Io(err.into_error()))?;
    String::from_utf8(bytes).map_err(|err| LedgerError::Storage(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_embeds_export_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_file_name(date), "profit-zakat-data-2024-03-09.csv");
    }

    #[test]
    fn empty_collection_exports_header_only() {
        let csv = records_to_csv(&[]).expect("csv");
        assert_eq!(
            csv,
            "Date,Profit (₹),Zakat Rate (%),Zakat (₹),Sadaka (₹),Net Profit (₹)\n"
        );
    }
}
