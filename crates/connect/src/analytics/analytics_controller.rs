//! Controller owning the analytics view's client-side state.

use log::error;
use rust_decimal::Decimal;
use std::sync::Arc;

use expenseflow_core::analytics::AnalyticsSummary;
use expenseflow_core::expenses::Expense;

use crate::charts::{category_comparison, category_doughnut, daily_trend, ChartBackend, ChartHandle};
use crate::notify::{Notification, NotificationSink};
use crate::traits::ExpenseApi;

/// Figures for the four summary cards at the top of the analytics view.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCards {
    pub past_month_total: Decimal,
    pub savings_potential: Decimal,
    pub daily_average: Decimal,
    pub transaction_count: usize,
}

/// Client-side state behind the analytics view.
///
/// A failed summary fetch falls back to the all-zero dataset and a failed
/// past-month fetch to an empty list, so dependent rendering never
/// faults. Chart handles are scoped: each is released before its
/// replacement is rendered.
pub struct AnalyticsController {
    api: Arc<dyn ExpenseApi>,
    charts: Arc<dyn ChartBackend>,
    notifier: Arc<dyn NotificationSink>,
    summary: AnalyticsSummary,
    past_month: Vec<Expense>,
    daily_trend_chart: Option<Box<dyn ChartHandle>>,
    category_chart: Option<Box<dyn ChartHandle>>,
    comparison_chart: Option<Box<dyn ChartHandle>>,
}

impl AnalyticsController {
    pub fn new(
        api: Arc<dyn ExpenseApi>,
        charts: Arc<dyn ChartBackend>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        AnalyticsController {
            api,
            charts,
            notifier,
            summary: AnalyticsSummary::default(),
            past_month: Vec::new(),
            daily_trend_chart: None,
            category_chart: None,
            comparison_chart: None,
        }
    }

    /// Load the summary and the past-month list, then rebuild all charts.
    pub async fn initialize(&mut self) {
        self.load_summary().await;
        self.load_past_month().await;
        self.rebuild_charts();
    }

    /// Refresh the analytics summary, substituting the zeroed default on
    /// failure.
    pub async fn load_summary(&mut self) {
        match self.api.get_analytics_summary().await {
            Ok(summary) => self.summary = summary,
            Err(e) => {
                error!("Error loading analytics data: {e}");
                self.notifier.notify(Notification::error(format!(
                    "Failed to load analytics data: {e}"
                )));
                self.summary = AnalyticsSummary::default();
            }
        }
    }

    /// Refresh the past-month expense list, substituting an empty list on
    /// failure.
    pub async fn load_past_month(&mut self) {
        match self.api.get_past_month_expenses().await {
            Ok(expenses) => self.past_month = expenses,
            Err(e) => {
                error!("Error loading past month data: {e}");
                self.notifier.notify(Notification::error(format!(
                    "Failed to load past month data: {e}"
                )));
                self.past_month = Vec::new();
            }
        }
    }

    /// Figures for the summary cards.
    pub fn summary_cards(&self) -> SummaryCards {
        SummaryCards {
            past_month_total: self.summary.total_spent,
            savings_potential: self.summary.rounded_savings_potential(),
            daily_average: self.summary.daily_average(),
            transaction_count: self.summary.expense_count,
        }
    }

    pub fn summary(&self) -> &AnalyticsSummary {
        &self.summary
    }

    pub fn past_month(&self) -> &[Expense] {
        &self.past_month
    }

    /// Rebuild the three charts from the current summary. The trend line
    /// and the comparison bars render even when empty; the doughnut is
    /// skipped so the renderer can show its empty state.
    fn rebuild_charts(&mut self) {
        self.daily_trend_chart.take();
        let trend = daily_trend(&self.summary.daily_spending);
        self.daily_trend_chart = Some(self.charts.render_line(&trend));

        self.category_chart.take();
        if !self.summary.category_totals.is_empty() {
            let doughnut = category_doughnut(&self.summary.category_totals);
            self.category_chart = Some(self.charts.render_doughnut(&doughnut));
        }

        self.comparison_chart.take();
        let comparison = category_comparison(&self.summary.category_totals);
        self.comparison_chart = Some(self.charts.render_bar(&comparison));
    }
}
