use colored::Colorize;

use crate::{
    cli::output::current_preferences,
    ledger::{CalendarCell, CalendarGrid, DayCell},
};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CELL_WIDTH: usize = 5;

pub const LEGEND: &str = "[ ] selected   ( ) today   * has data";

/// Renders the month grid, Sunday first, five columns per day.
pub fn render(grid: &CalendarGrid) -> String {
    let color = current_preferences().color_enabled;
    let mut lines = vec![
        format!("{:^width$}", grid.month.title(), width = CELL_WIDTH * 7),
        WEEKDAYS
            .iter()
            .map(|day| format!("{:^width$}", day, width = CELL_WIDTH))
            .collect::<String>()
            .trim_end()
            .to_string(),
    ];

    for week in grid.cells.chunks(7) {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                CalendarCell::Blank => " ".repeat(CELL_WIDTH),
                CalendarCell::Day(day) => day_cell(day, color),
            })
            .collect();
        lines.push(line.trim_end().to_string());
    }
    lines.push(LEGEND.to_string());
    lines.join("\n")
}

fn day_cell(day: &DayCell, color: bool) -> String {
    let (open, close) = if day.is_selected {
        ('[', ']')
    } else if day.is_today {
        ('(', ')')
    } else {
        (' ', ' ')
    };
    let marker = if day.has_data { '*' } else { ' ' };
    let text = format!("{open}{:>2}{close}{marker}", day.day);
    if !color {
        return text;
    }
    if day.is_selected {
        text.bold().to_string()
    } else if day.has_data {
        text.green().to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::{set_preferences, OutputPreferences};
    use crate::ledger::DateSelector;
    use chrono::NaiveDate;

    #[test]
    fn march_2024_layout_marks_days() {
        set_preferences(OutputPreferences {
            color_enabled: false,
        });
        let date = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
        let mut selector = DateSelector::new(date(15));
        selector.select(date(1));
        let grid = selector.calendar_grid(date(15), |d| d == date(5));
        let rendered = render(&grid);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0].trim(), "March 2024");
        assert!(lines[2].ends_with("[ 1]   2"));
        assert!(lines[3].contains("  5 *"));
        assert!(lines[4].contains("(15)"));
        assert_eq!(*lines.last().unwrap(), LEGEND);
    }
}
