//! Display formatting for amounts, dates, and percentages.
//!
//! Amounts follow the en-IN convention the app renders everywhere: rupee
//! glyph prefix and Indian-system digit grouping (the last three digits
//! form one group, the rest pair off).

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Currency glyph used across the app.
pub const CURRENCY_GLYPH: &str = "₹";

/// Format an amount with the rupee glyph and Indian digit grouping.
/// e.g. `1234567` → `"₹12,34,567"`, `2500.5` → `"₹2,500.50"`.
/// The fractional part is kept only when non-zero, padded to two digits.
pub fn format_amount(amount: Decimal) -> String {
    let text = amount.abs().normalize().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let grouped = group_indian(int_part);
    let formatted = match frac_part {
        Some(frac) => format!("{CURRENCY_GLYPH}{grouped}.{frac:0<2}"),
        None => format!("{CURRENCY_GLYPH}{grouped}"),
    };

    if amount < Decimal::ZERO {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// Group an integer digit string Indian-style: last three digits, then
/// groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = head
        .as_bytes()
        .rchunks(2)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect();
    groups.push(tail);
    groups.join(",")
}

/// "day month-abbrev year", e.g. `5 Aug 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Short form for chart axis labels, e.g. `5 Aug`.
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

/// One-decimal percentage, e.g. `83.3%`.
pub fn format_percentage(value: Decimal) -> String {
    format!("{value:.1}%")
}
