use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::currency::month_title;

/// A calendar month, the unit the calendar view pages through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parses `YYYY-MM`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (year, month) = raw.trim().split_once('-')?;
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn previous(&self) -> Self {
        self.first_day()
            .checked_sub_months(Months::new(1))
            .map(Self::of)
            .unwrap_or(*self)
    }

    pub fn next(&self) -> Self {
        self.first_day()
            .checked_add_months(Months::new(1))
            .map(Self::of)
            .unwrap_or(*self)
    }

    pub fn days_in_month(&self) -> u32 {
        let first = self.first_day();
        first
            .checked_add_months(Months::new(1))
            .map(|next| next.signed_duration_since(first).num_days() as u32)
            .unwrap_or(31)
    }

    pub fn title(&self) -> String {
        month_title(self.year, self.month)
    }
}

/// One day of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub is_today: bool,
    pub has_data: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalendarCell {
    Blank,
    Day(DayCell),
}

/// Month grid starting on Sunday: leading blanks, then one cell per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    pub month: YearMonth,
    pub cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, CalendarCell::Blank))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(|cell| match cell {
            CalendarCell::Day(day) => Some(day),
            CalendarCell::Blank => None,
        })
    }
}

/// Which month is on screen and which date the input form is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelector {
    viewed_month: YearMonth,
    selected_date: NaiveDate,
}

impl DateSelector {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            viewed_month: YearMonth::of(today),
            selected_date: today,
        }
    }

    pub fn viewed_month(&self) -> YearMonth {
        self.viewed_month
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Binds the form to `date`; the viewed month is left alone.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Selects `date` and pages the calendar to its month.
    pub fn focus(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.viewed_month = YearMonth::of(date);
    }

    pub fn show_month(&mut self, month: YearMonth) {
        self.viewed_month = month;
    }

    pub fn go_to_previous_month(&mut self) {
        self.viewed_month = self.viewed_month.previous();
    }

    pub fn go_to_next_month(&mut self) {
        self.viewed_month = self.viewed_month.next();
    }

    pub fn calendar_grid<F>(&self, today: NaiveDate, has_data: F) -> CalendarGrid
    where
        F: Fn(NaiveDate) -> bool,
    {
        let month = self.viewed_month;
        let first = month.first_day();
        let blanks = first.weekday().num_days_from_sunday() as usize;

        let mut cells = vec![CalendarCell::Blank; blanks];
        for date in first.iter_days().take(month.days_in_month() as usize) {
            cells.push(CalendarCell::Day(DayCell {
                date,
                day: date.day(),
                is_today: date == today,
                has_data: has_data(date),
                is_selected: date == self.selected_date,
            }));
        }
        CalendarGrid { month, cells }
    }
}
