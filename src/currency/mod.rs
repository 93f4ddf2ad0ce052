//! Display formatting for amounts and dates.
//!
//! Amounts are shown in a single fixed format: a rupee glyph prefix, two
//! decimal places and Indian digit grouping (`₹12,34,567.50`).

use chrono::{NaiveDate, NaiveDateTime};

pub const CURRENCY_SYMBOL: &str = "₹";
const PRECISION: usize = 2;

/// How the integer digits of an amount are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Thousands, then every two digits: `12,34,567`.
    Indian,
    /// Every three digits: `1,234,567`.
    Western,
}

/// Formats `amount` the way every amount in the ledger is displayed.
pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, Grouping::Indian)
}

pub fn format_currency_with(amount: f64, grouping: Grouping) -> String {
    let body = format_number(amount.abs(), PRECISION, grouping);
    if amount < 0.0 && !is_zero_at_precision(amount) {
        format!("{}-{}", CURRENCY_SYMBOL, body)
    } else {
        format!("{}{}", CURRENCY_SYMBOL, body)
    }
}

/// Formats a non-negative number with `precision` decimals and digit grouping.
pub fn format_number(value: f64, precision: usize, grouping: Grouping) -> String {
    let body = format!("{:.*}", precision, value);
    match body.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_digits(int_part, grouping), frac),
        None => group_digits(&body, grouping),
    }
}

fn is_zero_at_precision(amount: f64) -> bool {
    format!("{:.*}", PRECISION, amount.abs())
        .chars()
        .all(|c| c == '0' || c == '.')
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        let boundary = match grouping {
            Grouping::Western => count != 0 && count % 3 == 0,
            Grouping::Indian => count == 3 || (count > 3 && (count - 3) % 2 == 0),
        };
        if boundary {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Percentage as entered, without trailing zeros: `2.5%`.
pub fn format_rate(rate: f64) -> String {
    format!("{}%", rate)
}

/// Short axis label such as `Mar 1`.
pub fn short_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Ledger table label such as `Fri, Mar 1, 2024`.
pub fn table_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Selected-date label such as `Friday, March 1, 2024`.
pub fn long_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Calendar heading such as `March 2024`.
pub fn month_title(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{year}-{month:02}"))
}

/// Wall-clock display such as `3/1/2024, 9:05:07 AM`.
pub fn clock_label(now: NaiveDateTime) -> String {
    now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_lakh_and_crore() {
        assert_eq!(format_currency(1234567.5), "₹12,34,567.50");
        assert_eq!(format_currency(100000.0), "₹1,00,000.00");
        assert_eq!(format_currency(999.0), "₹999.00");
        assert_eq!(format_currency(0.0), "₹0.00");
    }

    #[test]
    fn western_grouping_uses_thousands() {
        assert_eq!(format_currency_with(1234567.0, Grouping::Western), "₹1,234,567.00");
    }

    #[test]
    fn negatives_keep_sign_after_symbol() {
        assert_eq!(format_currency(-1500.0), "₹-1,500.00");
        assert_eq!(format_currency(-0.001), "₹0.00");
    }

    #[test]
    fn date_labels_follow_display_styles() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(short_label(date), "Mar 1");
        assert_eq!(table_label(date), "Fri, Mar 1, 2024");
        assert_eq!(long_label(date), "Friday, March 1, 2024");
        assert_eq!(month_title(2024, 3), "March 2024");
        assert_eq!(format_rate(2.5), "2.5%");
    }
}
