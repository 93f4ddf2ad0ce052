//! Declarative chart specifications built from [`ChartSeries`]. Renderers
//! consume these and never feed anything back into the ledger.

use serde::Serialize;

use crate::ledger::ChartSeries;

pub const EMPTY_CHART_MESSAGE: &str = "No data available for chart";
const AMOUNT_AXIS_TITLE: &str = "Amount (₹)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Bar,
    Line,
}

/// RGBA colour, alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub f32);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub kind: DatasetKind,
    pub values: Vec<f64>,
    pub color: Rgba,
}

impl Dataset {
    fn bar(label: &str, values: Vec<f64>, color: Rgba) -> Self {
        Self {
            label: label.into(),
            kind: DatasetKind::Bar,
            values,
            color,
        }
    }

    fn line(label: &str, values: Vec<f64>, color: Rgba) -> Self {
        Self {
            label: label.into(),
            kind: DatasetKind::Line,
            values,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    pub y_axis_title: String,
    pub begin_at_zero: bool,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    fn new(title: &str, labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self {
            title: title.into(),
            y_axis_title: AMOUNT_AXIS_TITLE.into(),
            begin_at_zero: true,
            labels,
            datasets,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest value across all datasets, the top of the y axis.
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Daily profit bars with a cumulative profit line.
pub fn profit_chart(series: &ChartSeries) -> ChartSpec {
    ChartSpec::new(
        "Daily and Cumulative Profit",
        series.labels.clone(),
        vec![
            Dataset::bar(
                "Daily Profit (₹)",
                series.profit.clone(),
                Rgba(52, 152, 219, 0.7),
            ),
            Dataset::line(
                "Cumulative Profit (₹)",
                series.cumulative_profit.clone(),
                Rgba(46, 204, 113, 1.0),
            ),
        ],
    )
}

/// Zakat and sadaka bars with a line of everything given so far.
pub fn contributions_chart(series: &ChartSeries) -> ChartSpec {
    ChartSpec::new(
        "Zakat, Sadaka and Cumulative Contributions",
        series.labels.clone(),
        vec![
            Dataset::bar("Zakat (₹)", series.zakat.clone(), Rgba(39, 174, 96, 0.7)),
            Dataset::bar("Sadaka (₹)", series.sadaka.clone(), Rgba(155, 89, 182, 0.7)),
            Dataset::line(
                "Cumulative Zakat & Sadaka (₹)",
                series.cumulative_contributions(),
                Rgba(231, 76, 60, 1.0),
            ),
        ],
    )
}

pub fn all_charts(series: &ChartSeries) -> Vec<ChartSpec> {
    vec![profit_chart(series), contributions_chart(series)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{chart_series, FinancialRecord};
    use chrono::NaiveDate;

    fn series() -> ChartSeries {
        let records = vec![
            FinancialRecord::compute(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), 500.0, 2.5, 5.0),
            FinancialRecord::compute(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 1000.0, 2.5, 10.0),
        ];
        chart_series(&records)
    }

    #[test]
    fn contributions_line_adds_zakat_and_sadaka() {
        let chart = contributions_chart(&series());
        let line = chart
            .datasets
            .iter()
            .find(|dataset| dataset.kind == DatasetKind::Line)
            .expect("line dataset");
        assert_eq!(line.values, vec![35.0, 57.5]);
        assert_eq!(chart.labels, vec!["Mar 1", "Mar 5"]);
    }

    #[test]
    fn profit_chart_serializes_declaratively() {
        let chart = profit_chart(&series());
        assert_eq!(chart.max_value(), 1500.0);
        let json = serde_json::to_value(&chart).expect("serialize");
        assert_eq!(json["yAxisTitle"], "Amount (₹)");
        assert_eq!(json["datasets"][0]["kind"], "bar");
        assert_eq!(json["datasets"][1]["values"][1], 1500.0);
    }
}
