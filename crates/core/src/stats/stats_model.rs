//! Spending statistics domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Budget-relative statistics for the current expense set.
///
/// Mirrors the backend `/api/stats` payload. `budget_used_percentage` is
/// stored unclamped (150% stays 150%); clamping happens only at display
/// time via [`SpendingStats::display_percentage`]. `default()` is the
/// all-zero dataset the dashboard falls back to before the first load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SpendingStats {
    pub total_spent: Decimal,
    pub budget: Decimal,
    pub remaining: Decimal,
    pub budget_used_percentage: Decimal,
    pub category_totals: HashMap<String, Decimal>,
    pub expense_count: usize,
}

/// Budget gauge coloring bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetBand {
    Normal,
    Warning,
    Critical,
}

impl SpendingStats {
    /// Percentage of budget used, clamped to `[0, 100]` for the gauge.
    pub fn display_percentage(&self) -> Decimal {
        self.budget_used_percentage
            .max(Decimal::ZERO)
            .min(Decimal::from(100))
    }

    /// Gauge band: critical above 90%, warning above 70%.
    pub fn usage_band(&self) -> BudgetBand {
        let percentage = self.display_percentage();
        if percentage > Decimal::from(90) {
            BudgetBand::Critical
        } else if percentage > Decimal::from(70) {
            BudgetBand::Warning
        } else {
            BudgetBand::Normal
        }
    }
}
