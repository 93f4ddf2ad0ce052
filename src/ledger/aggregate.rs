//! Totals and chart series derived from a store snapshot. Everything here is
//! recomputed from scratch on each call.

use serde::Serialize;

use crate::currency::short_label;

use super::record::FinancialRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_profit: f64,
    pub total_zakat: f64,
    pub total_sadaka: f64,
    pub net_profit: f64,
}

/// Per-day and running-sum series in ascending date order, index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub profit: Vec<f64>,
    pub zakat: Vec<f64>,
    pub sadaka: Vec<f64>,
    pub cumulative_profit: Vec<f64>,
    pub cumulative_zakat: Vec<f64>,
    pub cumulative_sadaka: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Running zakat plus running sadaka at each index.
    pub fn cumulative_contributions(&self) -> Vec<f64> {
        self.cumulative_zakat
            .iter()
            .zip(&self.cumulative_sadaka)
            .map(|(zakat, sadaka)| zakat + sadaka)
            .collect()
    }
}

pub fn totals(records: &[FinancialRecord]) -> Totals {
    let total_profit: f64 = records.iter().map(|record| record.profit).sum();
    let total_zakat: f64 = records.iter().map(|record| record.zakat).sum();
    let total_sadaka: f64 = records.iter().map(|record| record.sadaka).sum();
    Totals {
        total_profit,
        total_zakat,
        total_sadaka,
        net_profit: total_profit - total_zakat - total_sadaka,
    }
}

pub fn chart_series(records: &[FinancialRecord]) -> ChartSeries {
    let sorted = sorted_ascending(records);
    let mut series = ChartSeries::default();
    let (mut profit_sum, mut zakat_sum, mut sadaka_sum) = (0.0, 0.0, 0.0);

    for record in sorted {
        profit_sum += record.profit;
        zakat_sum += record.zakat;
        sadaka_sum += record.sadaka;

        series.labels.push(short_label(record.date));
        series.profit.push(record.profit);
        series.zakat.push(record.zakat);
        series.sadaka.push(record.sadaka);
        series.cumulative_profit.push(profit_sum);
        series.cumulative_zakat.push(zakat_sum);
        series.cumulative_sadaka.push(sadaka_sum);
    }
    series
}

/// Oldest first, as the charts read them.
pub fn sorted_ascending(records: &[FinancialRecord]) -> Vec<&FinancialRecord> {
    let mut sorted: Vec<&FinancialRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.date);
    sorted
}

/// Newest first, as the ledger table lists them.
pub fn sorted_descending(records: &[FinancialRecord]) -> Vec<&FinancialRecord> {
    let mut sorted = sorted_ascending(records);
    sorted.reverse();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, profit: f64, sadaka: f64) -> FinancialRecord {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        FinancialRecord::compute(date, profit, 2.5, sadaka)
    }

    #[test]
    fn totals_of_empty_collection_are_zero() {
        assert_eq!(totals(&[]), Totals::default());
    }

    #[test]
    fn totals_sum_each_field() {
        let records = vec![record(1, 1000.0, 0.0), record(5, 500.0, 20.0)];
        let summary = totals(&records);
        assert_eq!(summary.total_profit, 1500.0);
        assert_eq!(summary.total_zakat, 37.5);
        assert_eq!(summary.total_sadaka, 20.0);
        assert_eq!(
            summary.net_profit,
            summary.total_profit - summary.total_zakat - summary.total_sadaka
        );
    }

    #[test]
    fn series_are_sorted_and_cumulative() {
        let records = vec![
            record(20, 200.0, 0.0),
            record(1, 1000.0, 10.0),
            record(5, 500.0, 5.0),
        ];
        let series = chart_series(&records);
        assert_eq!(series.labels, vec!["Mar 1", "Mar 5", "Mar 20"]);
        assert_eq!(series.profit, vec![1000.0, 500.0, 200.0]);
        assert_eq!(series.cumulative_profit, vec![1000.0, 1500.0, 1700.0]);
        assert_eq!(series.cumulative_sadaka, vec![10.0, 15.0, 15.0]);
        assert_eq!(series.cumulative_zakat, vec![25.0, 37.5, 42.5]);
        assert_eq!(series.cumulative_contributions(), vec![35.0, 52.5, 57.5]);
    }

    #[test]
    fn descending_order_puts_newest_first() {
        let records = vec![record(1, 1.0, 0.0), record(9, 1.0, 0.0), record(4, 1.0, 0.0)];
        let days: Vec<u32> = sorted_descending(&records)
            .iter()
            .map(|record| chrono::Datelike::day(&record.date))
            .collect();
        assert_eq!(days, vec![9, 4, 1]);
    }
}
