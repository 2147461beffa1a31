//! Plain-text rendering: chart backend, notification sink, and reports.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use expenseflow_connect::analytics::AnalyticsController;
use expenseflow_connect::charts::{BarSpec, ChartBackend, ChartHandle, DoughnutSpec, LineSpec};
use expenseflow_connect::dashboard::DashboardController;
use expenseflow_connect::notify::{Notification, NotificationSink, Severity};
use expenseflow_core::analytics::potential_saving;
use expenseflow_core::stats::BudgetBand;
use expenseflow_core::utils::format_utils::{format_amount, format_date, format_percentage};

const BAR_WIDTH: usize = 40;

/// Chart backend that prints specs as aligned text rows. The terminal
/// scrolls, so dropping a handle has nothing to release.
pub struct TextChartBackend;

struct TextChart;

impl ChartHandle for TextChart {}

impl ChartBackend for TextChartBackend {
    fn render_doughnut(&self, spec: &DoughnutSpec) -> Box<dyn ChartHandle> {
        println!("\nCategory Breakdown");
        if spec.slices.is_empty() {
            println!("  No expenses yet");
        }
        for slice in &spec.slices {
            println!(
                "  {:<18} {:>12}  ({})",
                slice.label,
                format_amount(slice.value),
                format_percentage(slice.percentage)
            );
        }
        Box::new(TextChart)
    }

    fn render_line(&self, spec: &LineSpec) -> Box<dyn ChartHandle> {
        println!("\nDaily Spending Trend");
        if spec.points.is_empty() {
            println!("  No data available");
        }
        let max = spec
            .points
            .iter()
            .map(|point| point.value)
            .max()
            .unwrap_or(Decimal::ZERO);
        for point in &spec.points {
            println!(
                "  {:<8} {} {:>12}",
                point.label,
                gauge(point.value, max),
                format_amount(point.value)
            );
        }
        Box::new(TextChart)
    }

    fn render_bar(&self, spec: &BarSpec) -> Box<dyn ChartHandle> {
        println!("\nCategory Comparison");
        if spec.bars.is_empty() {
            println!("  No data available");
        }
        let max = spec
            .bars
            .iter()
            .map(|bar| bar.value)
            .max()
            .unwrap_or(Decimal::ZERO);
        for bar in &spec.bars {
            println!(
                "  {:<18} {} {:>12}",
                bar.label,
                gauge(bar.value, max),
                format_amount(bar.value)
            );
        }
        Box::new(TextChart)
    }
}

fn gauge(value: Decimal, max: Decimal) -> String {
    let filled = if max > Decimal::ZERO {
        let ratio = (value / max).to_f64().unwrap_or(0.0);
        (ratio * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    format!("{:<width$}", "█".repeat(filled.min(BAR_WIDTH)), width = BAR_WIDTH)
}

/// Notification sink that forwards events to the log stream.
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => tracing::info!("{}", notification.message),
            Severity::Error => tracing::warn!("{}", notification.message),
        }
    }
}

/// Print the dashboard: budget gauge, then the expense list.
pub fn print_dashboard(dashboard: &DashboardController) {
    let stats = dashboard.stats();
    let band = match stats.usage_band() {
        BudgetBand::Normal => "on track",
        BudgetBand::Warning => "nearing budget",
        BudgetBand::Critical => "over 90% of budget",
    };

    println!("\n=== Dashboard ===");
    println!("Total spent:      {}", format_amount(stats.total_spent));
    println!("Budget remaining: {}", format_amount(stats.remaining));
    println!("Expenses:         {}", stats.expense_count);
    println!(
        "Budget used:      {} ({band})",
        format_percentage(stats.display_percentage())
    );

    println!("\nRecent Expenses");
    let sorted = dashboard.sorted_expenses();
    if sorted.is_empty() {
        println!("  No expenses recorded yet");
    }
    for expense in &sorted {
        let mut details = format!("{} · {}", expense.category, format_date(expense.date));
        if !expense.description.is_empty() {
            details.push_str(&format!(" · {}", expense.description));
        }
        println!(
            "  {:<24} {:>12}  {}",
            expense.title,
            format_amount(expense.amount),
            details
        );
    }
    println!("Total: {}", format_amount(dashboard.list_total()));
}

/// Print the analytics view: summary cards, recommendations, and flagged
/// expenses.
pub fn print_analytics(analytics: &AnalyticsController) {
    let cards = analytics.summary_cards();

    println!("\n=== Past Month Analytics ===");
    println!("Total spent:       {}", format_amount(cards.past_month_total));
    println!(
        "Savings potential: {}",
        format_amount(cards.savings_potential)
    );
    println!("Daily average:     {}", format_amount(cards.daily_average));
    println!("Transactions:      {}", cards.transaction_count);

    let summary = analytics.summary();

    println!("\nSavings Recommendations");
    if summary.recommendations.is_empty() {
        println!("  Great job! Your spending looks optimized.");
    }
    for recommendation in &summary.recommendations {
        println!(
            "  {}: {} now, {} suggested - save {}",
            recommendation.category,
            format_amount(recommendation.current),
            format_amount(recommendation.suggested),
            format_amount(recommendation.savings)
        );
        println!("    Tip: {}", recommendation.tip);
    }

    println!("\nExpenses You Could Avoid");
    if summary.unnecessary_expenses.is_empty() {
        println!("  No unnecessary expenses found!");
    }
    for expense in &summary.unnecessary_expenses {
        println!(
            "  {:<24} {:>12}  {} · {} · save {}",
            expense.title,
            format_amount(expense.amount),
            expense.category,
            format_date(expense.date),
            format_amount(potential_saving(expense.amount))
        );
    }
}
