//! Traits defining the contract between view controllers and the backend.

use async_trait::async_trait;

use expenseflow_core::analytics::AnalyticsSummary;
use expenseflow_core::errors::Result;
use expenseflow_core::expenses::{Expense, NewExpense};
use expenseflow_core::stats::SpendingStats;

use crate::client::{AuthResponse, HealthStatus, LoginRequest, RegisterRequest};

/// Trait for fetching and mutating expense data on the backend.
///
/// Controllers depend on this seam rather than on the HTTP client, so
/// view flows can be exercised against in-memory implementations.
#[async_trait]
pub trait ExpenseApi: Send + Sync {
    /// Fetch the category vocabulary, in backend order.
    async fn list_categories(&self) -> Result<Vec<String>>;

    /// Fetch the current expense list.
    async fn list_expenses(&self) -> Result<Vec<Expense>>;

    /// Create an expense; returns the stored record with its assigned id.
    async fn create_expense(&self, new_expense: &NewExpense) -> Result<Expense>;

    /// Delete an expense by id.
    async fn delete_expense(&self, expense_id: &str) -> Result<()>;

    /// Fetch budget-relative statistics for the current expense set.
    async fn get_stats(&self) -> Result<SpendingStats>;

    /// Fetch the trailing-month analytics summary.
    async fn get_analytics_summary(&self) -> Result<AnalyticsSummary>;

    /// Fetch the raw expense list for the trailing month.
    async fn get_past_month_expenses(&self) -> Result<Vec<Expense>>;

    /// Authenticate and open a session.
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse>;

    /// Create an account and open a session.
    async fn register(&self, registration: &RegisterRequest) -> Result<AuthResponse>;

    /// Close the session.
    async fn logout(&self) -> Result<()>;

    /// Backend liveness probe.
    async fn health(&self) -> Result<HealthStatus>;
}
