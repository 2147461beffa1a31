//! Controller owning the dashboard's client-side state.

use log::{debug, error};
use rust_decimal::Decimal;
use std::sync::Arc;

use expenseflow_core::expenses::{Expense, NewExpense};
use expenseflow_core::stats::{self, SpendingStats};

use crate::charts::{category_doughnut, ChartBackend, ChartHandle};
use crate::notify::{Notification, NotificationSink};
use crate::traits::ExpenseApi;

/// Client-side state behind the dashboard view.
///
/// Caches the last fetched expense list, category vocabulary, and
/// statistics; they are replaced wholesale on each reload, never merged.
/// Every operation runs to completion (including its follow-up stats
/// refresh) before the next is accepted, and a failed call leaves the
/// previously rendered state untouched.
pub struct DashboardController {
    api: Arc<dyn ExpenseApi>,
    charts: Arc<dyn ChartBackend>,
    notifier: Arc<dyn NotificationSink>,
    expenses: Vec<Expense>,
    categories: Vec<String>,
    stats: SpendingStats,
    category_chart: Option<Box<dyn ChartHandle>>,
}

impl DashboardController {
    pub fn new(
        api: Arc<dyn ExpenseApi>,
        charts: Arc<dyn ChartBackend>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        DashboardController {
            api,
            charts,
            notifier,
            expenses: Vec::new(),
            categories: Vec::new(),
            stats: SpendingStats::default(),
            category_chart: None,
        }
    }

    /// Load categories, expenses, and statistics, in that order. Each
    /// failure surfaces a notification and leaves the affected cache as
    /// it was.
    pub async fn initialize(&mut self) {
        self.load_categories().await;
        self.load_expenses().await;
        self.load_stats().await;
    }

    /// Refresh the category vocabulary for the expense form.
    pub async fn load_categories(&mut self) {
        match self.api.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(e) => {
                error!("Error loading categories: {e}");
                self.notifier
                    .notify(Notification::error("Failed to load categories"));
            }
        }
    }

    /// Refresh the cached expense list.
    pub async fn load_expenses(&mut self) {
        match self.api.list_expenses().await {
            Ok(expenses) => self.expenses = expenses,
            Err(e) => {
                error!("Error loading expenses: {e}");
                self.notifier
                    .notify(Notification::error("Failed to load expenses"));
            }
        }
    }

    /// Refresh statistics and rebuild the category chart from them.
    pub async fn load_stats(&mut self) {
        match self.api.get_stats().await {
            Ok(stats) => {
                self.stats = stats;
                self.rebuild_category_chart();
            }
            Err(e) => {
                error!("Error loading statistics: {e}");
                self.notifier
                    .notify(Notification::error("Failed to load statistics"));
            }
        }
    }

    /// Submit a new expense. On success the created record joins the
    /// cache and statistics are refreshed; on failure the cache is left
    /// untouched.
    pub async fn add_expense(&mut self, new_expense: NewExpense) {
        match self.api.create_expense(&new_expense).await {
            Ok(created) => {
                debug!("Created expense {}", created.id);
                self.expenses.push(created);
                self.load_stats().await;
                self.notifier
                    .notify(Notification::success("Expense added successfully!"));
            }
            Err(e) => {
                error!("Error adding expense: {e}");
                self.notifier
                    .notify(Notification::error("Failed to add expense"));
            }
        }
    }

    /// Delete an expense by id. On success exactly that record leaves
    /// the cache and statistics are refreshed.
    pub async fn delete_expense(&mut self, expense_id: &str) {
        match self.api.delete_expense(expense_id).await {
            Ok(()) => {
                self.expenses.retain(|expense| expense.id != expense_id);
                self.load_stats().await;
                self.notifier
                    .notify(Notification::success("Expense deleted successfully!"));
            }
            Err(e) => {
                error!("Error deleting expense {expense_id}: {e}");
                self.notifier
                    .notify(Notification::error("Failed to delete expense"));
            }
        }
    }

    /// Close the session. Returns whether the caller should navigate to
    /// the login view.
    pub async fn logout(&self) -> bool {
        match self.api.logout().await {
            Ok(()) => true,
            Err(e) => {
                error!("Logout failed: {e}");
                self.notifier.notify(Notification::error("Logout failed"));
                false
            }
        }
    }

    /// Expense list in display order: newest first, stable on ties.
    pub fn sorted_expenses(&self) -> Vec<Expense> {
        stats::sort_for_display(&self.expenses)
    }

    /// Footer figure: sum of the cached list.
    pub fn list_total(&self) -> Decimal {
        stats::total_spent(&self.expenses)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn stats(&self) -> &SpendingStats {
        &self.stats
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Drop the previous chart handle, then render a replacement when
    /// there is anything to show.
    fn rebuild_category_chart(&mut self) {
        self.category_chart.take();

        if !self.stats.category_totals.is_empty() {
            let spec = category_doughnut(&self.stats.category_totals);
            self.category_chart = Some(self.charts.render_doughnut(&spec));
        }
    }
}
