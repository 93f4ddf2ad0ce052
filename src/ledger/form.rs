use crate::errors::{LedgerError, Result};

use super::record::{FinancialRecord, DEFAULT_ZAKAT_RATE};

pub const INVALID_PROFIT_MESSAGE: &str = "Please enter a valid profit amount";
pub const AMOUNT_TOO_LARGE_MESSAGE: &str = "Amounts are too large to record";

/// The editable input fields. Profit and sadaka keep the raw text the user
/// typed; they are only parsed when the form is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub profit: String,
    zakat_rate: f64,
    pub sadaka: String,
}

/// Parsed, validated form values ready to become a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryValues {
    pub profit: f64,
    pub zakat_rate: f64,
    pub sadaka: f64,
}

impl EntryForm {
    pub fn blank(default_rate: f64) -> Self {
        Self {
            profit: String::new(),
            zakat_rate: default_rate,
            sadaka: "0".into(),
        }
    }

    pub fn from_record(record: &FinancialRecord) -> Self {
        Self {
            profit: record.profit.to_string(),
            zakat_rate: record.zakat_rate,
            sadaka: record.sadaka.to_string(),
        }
    }

    pub fn zakat_rate(&self) -> f64 {
        self.zakat_rate
    }

    pub fn set_profit(&mut self, raw: &str) {
        self.profit = raw.trim().to_string();
    }

    pub fn set_sadaka(&mut self, raw: &str) {
        self.sadaka = raw.trim().to_string();
    }

    /// Accepts a percentage between 0 and 100.
    pub fn set_zakat_rate(&mut self, raw: &str) -> Result<()> {
        self.zakat_rate = parse_rate(raw)?;
        Ok(())
    }

    pub fn reset(&mut self, default_rate: f64) {
        *self = Self::blank(default_rate);
    }

    /// Validates the fields: profit must parse and be positive, sadaka must be
    /// blank or a non-negative number.
    pub fn values(&self) -> Result<EntryValues> {
        let profit = parse_amount(&self.profit)
            .filter(|profit| *profit > 0.0)
            .ok_or_else(|| LedgerError::Validation(INVALID_PROFIT_MESSAGE.into()))?;
        let sadaka = if self.sadaka.trim().is_empty() {
            0.0
        } else {
            parse_amount(&self.sadaka)
                .filter(|sadaka| *sadaka >= 0.0)
                .ok_or_else(|| {
                    LedgerError::Validation("Please enter a valid sadaka amount".into())
                })?
        };
        Ok(EntryValues {
            profit,
            zakat_rate: self.zakat_rate,
            sadaka,
        })
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::blank(DEFAULT_ZAKAT_RATE)
    }
}

pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn parse_rate(raw: &str) -> Result<f64> {
    parse_amount(raw)
        .filter(|rate| (0.0..=100.0).contains(rate))
        .ok_or_else(|| {
            LedgerError::Validation(format!(
                "Zakat rate must be a percentage between 0 and 100, got `{}`",
                raw.trim()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_non_numeric_profit() {
        let mut form = EntryForm::default();
        for raw in ["", "0", "-10", "abc", "NaN"] {
            form.set_profit(raw);
            let err = form.values().expect_err("invalid profit");
            assert_eq!(err.to_string(), INVALID_PROFIT_MESSAGE);
        }
    }

    #[test]
    fn blank_sadaka_counts_as_zero() {
        let mut form = EntryForm::default();
        form.set_profit("1,250.50");
        form.set_sadaka("");
        let values = form.values().expect("valid form");
        assert_eq!(values.profit, 1250.5);
        assert_eq!(values.sadaka, 0.0);
        assert_eq!(values.zakat_rate, DEFAULT_ZAKAT_RATE);
    }

    #[test]
    fn negative_sadaka_is_rejected() {
        let mut form = EntryForm::default();
        form.set_profit("100");
        form.set_sadaka("-5");
        assert!(matches!(form.values(), Err(LedgerError::Validation(_))));
    }

    #[test]
    fn rate_outside_percentage_range_is_rejected() {
        let mut form = EntryForm::default();
        assert!(form.set_zakat_rate("101").is_err());
        assert!(form.set_zakat_rate("x").is_err());
        assert_eq!(form.zakat_rate(), DEFAULT_ZAKAT_RATE);
        form.set_zakat_rate("3").expect("valid rate");
        assert_eq!(form.zakat_rate(), 3.0);
    }

    #[test]
    fn reset_restores_default_rate() {
        let mut form = EntryForm::blank(2.5);
        form.set_profit("10");
        form.set_zakat_rate("7").expect("rate");
        form.reset(2.5);
        assert_eq!(form, EntryForm::blank(2.5));
    }
}
