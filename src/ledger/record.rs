use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Rate applied when nothing else has been entered.
pub const DEFAULT_ZAKAT_RATE: f64 = 2.5;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// One day's figures. `zakat` and `net` are snapshots taken when the record
/// was saved and are never recomputed on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    #[serde(with = "record_date")]
    pub date: NaiveDate,
    pub profit: f64,
    #[serde(default = "default_zakat_rate")]
    pub zakat_rate: f64,
    pub zakat: f64,
    #[serde(default)]
    pub sadaka: f64,
    pub net: f64,
}

impl FinancialRecord {
    /// Builds a record and derives `zakat` and `net` from the inputs.
    pub fn compute(date: NaiveDate, profit: f64, zakat_rate: f64, sadaka: f64) -> Self {
        let zakat = zakat_for(profit, zakat_rate);
        Self {
            date,
            profit,
            zakat_rate,
            zakat,
            sadaka,
            net: profit - zakat - sadaka,
        }
    }

    /// Whether every amount can be stored. JSON has no encoding for
    /// infinities, so a record failing this must never reach storage.
    pub fn is_finite(&self) -> bool {
        [self.profit, self.zakat_rate, self.zakat, self.sadaka, self.net]
            .iter()
            .all(|value| value.is_finite())
    }

    /// Storage key, always ISO `YYYY-MM-DD`.
    pub fn date_key(&self) -> String {
        self.date.format(ISO_DATE_FORMAT).to_string()
    }
}

pub fn zakat_for(profit: f64, zakat_rate: f64) -> f64 {
    profit * zakat_rate / 100.0
}

fn default_zakat_rate() -> f64 {
    DEFAULT_ZAKAT_RATE
}

/// Parses the date spellings found in stored documents: ISO dates (padded or
/// not), slash-separated dates and full RFC 3339 timestamps.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y/%m/%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.date_naive());
    }
    None
}

pub(crate) mod record_date {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::{parse_record_date, ISO_DATE_FORMAT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(ISO_DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_record_date(&raw)
            .ok_or_else(|| D::Error::custom(format!("unrecognized record date `{raw}`")))
    }
}
