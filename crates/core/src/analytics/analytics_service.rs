//! Past-month analytics computation.
//!
//! Replicates the backend contract for `/api/analytics-summary`, so a
//! summary can be recomputed or cross-checked client-side from the raw
//! past-month expense list. Flagging thresholds are strict comparisons:
//! an expense at exactly the threshold is not flagged.

use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

use super::{AnalyticsSummary, SavingsRecommendation};
use crate::expenses::Expense;

/// An expense above these amounts counts as discretionary overspend.
const ENTERTAINMENT_FLAG_ABOVE: i64 = 500;
const SHOPPING_FLAG_ABOVE: i64 = 1000;
const FOOD_FLAG_ABOVE: i64 = 300;

/// Category totals above the threshold trigger a recommendation with the
/// paired suggested amount and tip. Emitted in this order.
const RECOMMENDATION_RULES: [(&str, i64, i64, &str); 3] = [
    (
        "Food & Dining",
        15000,
        12000,
        "Cook more meals at home and limit dining out to weekends",
    ),
    (
        "Entertainment",
        5000,
        3000,
        "Choose free entertainment options like parks, free events, or home activities",
    ),
    (
        "Shopping",
        8000,
        5000,
        "Create a shopping list and stick to it. Wait 24 hours before non-essential purchases",
    ),
];

/// Share of a flagged amount treated as recoverable.
fn savings_rate() -> Decimal {
    Decimal::new(3, 1)
}

/// Summarize a past-month expense list: daily and category totals,
/// flagged expenses with their savings potential, and recommendations.
pub fn summarize(expenses: &[Expense]) -> AnalyticsSummary {
    debug!("Summarizing {} past-month expenses", expenses.len());
    let mut summary = AnalyticsSummary::default();

    for expense in expenses {
        summary.add_expense(expense);
    }

    for expense in expenses {
        if is_unnecessary(expense) {
            summary.savings_potential += expense.amount * savings_rate();
            summary.unnecessary_expenses.push(expense.clone());
        }
    }

    summary.recommendations = build_recommendations(&summary.category_totals);
    summary
}

/// Whether a single record looks like discretionary overspend.
pub fn is_unnecessary(expense: &Expense) -> bool {
    let above = |threshold: i64| expense.amount > Decimal::from(threshold);
    match expense.category.as_str() {
        "Entertainment" => above(ENTERTAINMENT_FLAG_ABOVE),
        "Shopping" => above(SHOPPING_FLAG_ABOVE),
        "Food & Dining" => above(FOOD_FLAG_ABOVE),
        _ => false,
    }
}

/// Recoverable share of a flagged amount, rounded to whole units for the
/// per-row display figure.
pub fn potential_saving(amount: Decimal) -> Decimal {
    (amount * savings_rate()).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn build_recommendations(
    category_totals: &HashMap<String, Decimal>,
) -> Vec<SavingsRecommendation> {
    let mut recommendations = Vec::new();

    for (category, threshold, suggested, tip) in RECOMMENDATION_RULES {
        let current = category_totals
            .get(category)
            .copied()
            .unwrap_or(Decimal::ZERO);
        if current > Decimal::from(threshold) {
            let suggested = Decimal::from(suggested);
            recommendations.push(SavingsRecommendation {
                category: category.to_string(),
                current,
                suggested,
                savings: current - suggested,
                tip: tip.to_string(),
            });
        }
    }

    recommendations
}
