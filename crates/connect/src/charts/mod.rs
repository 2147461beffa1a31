//! Chart specifications and the rendering seam.
//!
//! The controllers build plain-data chart specs from aggregates; an opaque
//! charting collaborator turns them into visuals. Handles are scoped
//! resources: a view's previous handle is dropped before its replacement
//! is rendered.

use rust_decimal::Decimal;
use std::collections::HashMap;

use expenseflow_core::constants::CATEGORIES;
use expenseflow_core::utils::format_utils::format_date_short;

/// Chart color palette, assigned to slices in order.
pub const PALETTE: [&str; 10] = [
    "#1E3A8A", "#3B82F6", "#60A5FA", "#93C5FD", "#DBEAFE", "#FB923C", "#FDBA74", "#FED7AA",
    "#FEF3E2", "#FFFBEB",
];

/// A labeled, colored portion of a doughnut or bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: Decimal,
    pub color: &'static str,
    /// Share of the chart total, unformatted (display rounds to one
    /// decimal).
    pub percentage: Decimal,
}

/// Category breakdown doughnut. An empty spec means "no expenses yet";
/// the renderer shows its empty state instead of a chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DoughnutSpec {
    pub slices: Vec<Slice>,
}

/// One point on the daily trend line.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub label: String,
    pub value: Decimal,
}

/// Daily spending trend line, points in ascending date order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineSpec {
    pub points: Vec<LinePoint>,
}

/// Category comparison bar chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarSpec {
    pub bars: Vec<Slice>,
}

/// An opaque, live chart owned by a view. Dropping the handle releases
/// the visual.
pub trait ChartHandle: Send {}

/// Rendering seam implemented by the charting collaborator.
pub trait ChartBackend: Send + Sync {
    fn render_doughnut(&self, spec: &DoughnutSpec) -> Box<dyn ChartHandle>;
    fn render_line(&self, spec: &LineSpec) -> Box<dyn ChartHandle>;
    fn render_bar(&self, spec: &BarSpec) -> Box<dyn ChartHandle>;
}

/// Build the category breakdown doughnut from per-category totals.
pub fn category_doughnut(category_totals: &HashMap<String, Decimal>) -> DoughnutSpec {
    DoughnutSpec {
        slices: category_slices(category_totals),
    }
}

/// Build the category comparison bars from per-category totals.
pub fn category_comparison(category_totals: &HashMap<String, Decimal>) -> BarSpec {
    BarSpec {
        bars: category_slices(category_totals),
    }
}

/// Build the daily trend line from per-day totals, oldest day first.
/// Keys are ISO date strings; anything unparseable keeps its raw label.
pub fn daily_trend(daily_spending: &HashMap<String, Decimal>) -> LineSpec {
    let mut dates: Vec<&String> = daily_spending.keys().collect();
    dates.sort();

    let points = dates
        .into_iter()
        .map(|date| LinePoint {
            label: date
                .parse()
                .map(format_date_short)
                .unwrap_or_else(|_| date.clone()),
            value: daily_spending[date],
        })
        .collect();

    LineSpec { points }
}

/// Categories in backend vocabulary order, unknown names last
/// alphabetically, each paired with a palette color and its share of the
/// total.
fn category_slices(category_totals: &HashMap<String, Decimal>) -> Vec<Slice> {
    let rank = |name: &str| {
        CATEGORIES
            .iter()
            .position(|category| *category == name)
            .unwrap_or(CATEGORIES.len())
    };

    let mut entries: Vec<(&String, &Decimal)> = category_totals.iter().collect();
    entries.sort_by(|(a, _), (b, _)| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));

    let total: Decimal = entries.iter().map(|(_, value)| **value).sum();

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (label, value))| Slice {
            label: label.clone(),
            value: *value,
            color: PALETTE[index % PALETTE.len()],
            percentage: if total > Decimal::ZERO {
                *value / total * Decimal::from(100)
            } else {
                Decimal::ZERO
            },
        })
        .collect()
}
