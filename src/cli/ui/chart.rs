use crossterm::terminal;

use crate::{
    chart::{ChartSpec, DatasetKind, EMPTY_CHART_MESSAGE},
    currency::format_currency,
};

const FALLBACK_WIDTH: usize = 80;
const MIN_BAR_WIDTH: usize = 10;

/// Terminal columns, or 80 when stdout is not a terminal.
pub fn terminal_width() -> usize {
    terminal::size()
        .map(|(cols, _)| cols as usize)
        .ok()
        .filter(|cols| *cols > 0)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Horizontal bars grouped by label. Bars scale against the largest value in
/// the chart so the line datasets read as running totals beside the bars.
pub fn render(spec: &ChartSpec, width: usize) -> String {
    let mut lines = vec![spec.title.clone()];
    if spec.is_empty() {
        lines.push(format!("  {EMPTY_CHART_MESSAGE}"));
        return lines.join("\n");
    }

    let label_width = spec.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let name_width = spec
        .datasets
        .iter()
        .map(|d| d.label.chars().count())
        .max()
        .unwrap_or(0);
    let value_width = 16;
    let bar_width = width
        .saturating_sub(label_width + name_width + value_width + 6)
        .max(MIN_BAR_WIDTH);
    let max = spec.max_value();

    for (idx, label) in spec.labels.iter().enumerate() {
        for (row, dataset) in spec.datasets.iter().enumerate() {
            let value = dataset.values.get(idx).copied().unwrap_or(0.0);
            let glyph = match dataset.kind {
                DatasetKind::Bar => '█',
                DatasetKind::Line => '░',
            };
            let head = if row == 0 { label.as_str() } else { "" };
            lines.push(format!(
                "  {head:<label_width$}  {:<name_width$} {} {}",
                dataset.label,
                bar(value, max, bar_width, glyph),
                format_currency(value)
            ));
        }
    }
    lines.join("\n")
}

fn bar(value: f64, max: f64, width: usize, glyph: char) -> String {
    let filled = if max > 0.0 && value > 0.0 {
        ((value / max) * width as f64).round().max(1.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);
    format!("{}{}", glyph.to_string().repeat(filled), " ".repeat(width - filled))
}
