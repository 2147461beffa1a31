//! Statistics computation over a set of expense records.
//!
//! Pure aggregation. The backend serves the same figures from
//! `/api/stats`; the rules live here so both sides of the wire, and any
//! client-side recomputation, stay consistent.

use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::SpendingStats;
use crate::expenses::Expense;

/// Compute budget-relative statistics for a set of expense records.
///
/// Categories with no expenses are omitted from `category_totals`.
/// `remaining` is not floored at zero. `budget_used_percentage` is
/// zero-guarded when the budget is zero and stored unclamped.
pub fn calculate_stats(expenses: &[Expense], budget: Decimal) -> SpendingStats {
    debug!("Calculating statistics for {} expenses", expenses.len());
    let total = total_spent(expenses);

    let mut category_totals: HashMap<String, Decimal> = HashMap::new();
    for expense in expenses {
        *category_totals
            .entry(expense.category.clone())
            .or_insert(Decimal::ZERO) += expense.amount;
    }

    let budget_used_percentage = if budget > Decimal::ZERO {
        total / budget * Decimal::from(100)
    } else {
        Decimal::ZERO
    };

    SpendingStats {
        total_spent: total,
        budget,
        remaining: budget - total,
        budget_used_percentage,
        category_totals,
        expense_count: expenses.len(),
    }
}

/// Sum of amounts, as shown in the expense list footer.
pub fn total_spent(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Display ordering: newest first; records sharing a date keep their
/// arrival order (stable sort).
pub fn sort_for_display(expenses: &[Expense]) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
