//! Analytics domain models.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::ANALYTICS_WINDOW_DAYS;
use crate::expenses::Expense;

/// Insights over the trailing month, as served by `/api/analytics-summary`.
///
/// `default()` is the all-zero dataset the analytics view falls back to
/// when the fetch fails, so dependent rendering never faults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_spent: Decimal,
    pub category_totals: HashMap<String, Decimal>,
    /// ISO date string (`"YYYY-MM-DD"`) to amount spent that day.
    pub daily_spending: HashMap<String, Decimal>,
    /// Flagged records, in input order.
    pub unnecessary_expenses: Vec<Expense>,
    pub savings_potential: Decimal,
    pub recommendations: Vec<SavingsRecommendation>,
    pub expense_count: usize,
}

/// A category-level suggestion to spend less.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsRecommendation {
    pub category: String,
    pub current: Decimal,
    pub suggested: Decimal,
    /// `current - suggested`.
    pub savings: Decimal,
    pub tip: String,
}

impl AnalyticsSummary {
    /// Fold one record into the daily, category, and overall totals.
    pub(crate) fn add_expense(&mut self, expense: &Expense) {
        *self
            .daily_spending
            .entry(expense.date.to_string())
            .or_insert(Decimal::ZERO) += expense.amount;

        *self
            .category_totals
            .entry(expense.category.clone())
            .or_insert(Decimal::ZERO) += expense.amount;

        self.total_spent += expense.amount;
        self.expense_count += 1;
    }

    /// Average daily outlay over the analytics window, rounded to whole
    /// units for the summary card.
    pub fn daily_average(&self) -> Decimal {
        (self.total_spent / Decimal::from(ANALYTICS_WINDOW_DAYS))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Savings-potential card figure, rounded to whole units.
    pub fn rounded_savings_potential(&self) -> Decimal {
        self.savings_potential
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}
