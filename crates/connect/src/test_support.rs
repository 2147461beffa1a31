//! In-memory collaborators for controller tests.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use expenseflow_core::analytics::{self, AnalyticsSummary};
use expenseflow_core::constants::CATEGORIES;
use expenseflow_core::errors::{Error, Result};
use expenseflow_core::expenses::{Expense, NewExpense};
use expenseflow_core::stats::{calculate_stats, SpendingStats};

use crate::charts::{BarSpec, ChartBackend, ChartHandle, DoughnutSpec, LineSpec};
use crate::client::{AuthResponse, HealthStatus, LoginRequest, RegisterRequest};
use crate::notify::{Notification, NotificationSink};
use crate::traits::ExpenseApi;

/// Backend double: serves data from in-memory state and recomputes
/// stats/analytics with the shared domain functions, the way the real
/// backend does. Endpoints listed in `fail` error with a transport
/// failure; `reject_auth` turns login/register into a 401 rejection.
pub(crate) struct MockExpenseApi {
    pub state: Mutex<MockState>,
}

pub(crate) struct MockState {
    pub categories: Vec<String>,
    pub expenses: Vec<Expense>,
    pub budget: Decimal,
    pub past_month: Vec<Expense>,
    pub fail: HashSet<&'static str>,
    pub reject_auth: bool,
    next_id: usize,
}

impl MockExpenseApi {
    pub fn new() -> Arc<Self> {
        Arc::new(MockExpenseApi {
            state: Mutex::new(MockState {
                categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
                expenses: Vec::new(),
                budget: Decimal::from(30000),
                past_month: Vec::new(),
                fail: HashSet::new(),
                reject_auth: false,
                next_id: 0,
            }),
        })
    }

    pub fn with_expenses(expenses: Vec<Expense>) -> Arc<Self> {
        let api = Self::new();
        api.state.lock().unwrap().expenses = expenses;
        api
    }

    pub fn fail(&self, endpoint: &'static str) {
        self.state.lock().unwrap().fail.insert(endpoint);
    }

    pub fn recover(&self, endpoint: &'static str) {
        self.state.lock().unwrap().fail.remove(endpoint);
    }

    fn check(&self, endpoint: &'static str) -> Result<()> {
        if self.state.lock().unwrap().fail.contains(endpoint) {
            Err(Error::Transport(format!("{endpoint}: connection refused")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ExpenseApi for MockExpenseApi {
    async fn list_categories(&self) -> Result<Vec<String>> {
        self.check("categories")?;
        Ok(self.state.lock().unwrap().categories.clone())
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.check("expenses")?;
        Ok(self.state.lock().unwrap().expenses.clone())
    }

    async fn create_expense(&self, new_expense: &NewExpense) -> Result<Expense> {
        self.check("create")?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let expense = Expense {
            id: format!("mock-{}", state.next_id),
            title: new_expense.title.clone(),
            amount: new_expense.amount,
            category: new_expense.category.clone(),
            date: new_expense.date,
            description: new_expense.description.clone(),
        };
        state.expenses.push(expense.clone());
        Ok(expense)
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<()> {
        self.check("delete")?;
        let mut state = self.state.lock().unwrap();
        state.expenses.retain(|expense| expense.id != expense_id);
        Ok(())
    }

    async fn get_stats(&self) -> Result<SpendingStats> {
        self.check("stats")?;
        let state = self.state.lock().unwrap();
        Ok(calculate_stats(&state.expenses, state.budget))
    }

    async fn get_analytics_summary(&self) -> Result<AnalyticsSummary> {
        self.check("analytics-summary")?;
        let state = self.state.lock().unwrap();
        Ok(analytics::summarize(&state.past_month))
    }

    async fn get_past_month_expenses(&self) -> Result<Vec<Expense>> {
        self.check("past-month")?;
        Ok(self.state.lock().unwrap().past_month.clone())
    }

    async fn login(&self, _credentials: &LoginRequest) -> Result<AuthResponse> {
        self.check("login")?;
        if self.state.lock().unwrap().reject_auth {
            return Err(Error::Status {
                status: 401,
                message: "Invalid credentials".to_string(),
            });
        }
        Ok(AuthResponse {
            success: true,
            message: Some("Login successful".to_string()),
        })
    }

    async fn register(&self, _registration: &RegisterRequest) -> Result<AuthResponse> {
        self.check("register")?;
        if self.state.lock().unwrap().reject_auth {
            return Err(Error::Status {
                status: 400,
                message: "Email already exists".to_string(),
            });
        }
        Ok(AuthResponse {
            success: true,
            message: Some("Registration successful".to_string()),
        })
    }

    async fn logout(&self) -> Result<()> {
        self.check("logout")
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.check("health")?;
        Ok(HealthStatus {
            status: "healthy".to_string(),
            message: Some("ExpenseFlow is running".to_string()),
        })
    }
}

/// Notification sink that records every event for assertions.
#[derive(Default)]
pub(crate) struct RecordingNotificationSink {
    pub notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// Chart backend that logs render and drop events, so tests can assert
/// that a view's previous handle is released before its replacement is
/// rendered.
pub(crate) struct TrackingChartBackend {
    pub events: Arc<Mutex<Vec<String>>>,
    counter: AtomicUsize,
}

impl TrackingChartBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(TrackingChartBackend {
            events: Arc::new(Mutex::new(Vec::new())),
            counter: AtomicUsize::new(0),
        })
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn track(&self, kind: &str) -> Box<dyn ChartHandle> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        self.events.lock().unwrap().push(format!("render:{kind}:{id}"));
        Box::new(TrackedHandle {
            kind: kind.to_string(),
            id,
            events: self.events.clone(),
        })
    }
}

impl ChartBackend for TrackingChartBackend {
    fn render_doughnut(&self, _spec: &DoughnutSpec) -> Box<dyn ChartHandle> {
        self.track("doughnut")
    }

    fn render_line(&self, _spec: &LineSpec) -> Box<dyn ChartHandle> {
        self.track("line")
    }

    fn render_bar(&self, _spec: &BarSpec) -> Box<dyn ChartHandle> {
        self.track("bar")
    }
}

struct TrackedHandle {
    kind: String,
    id: usize,
    events: Arc<Mutex<Vec<String>>>,
}

impl ChartHandle for TrackedHandle {}

impl Drop for TrackedHandle {
    fn drop(&mut self) {
        self.events
            .lock()
            .unwrap()
            .push(format!("drop:{}:{}", self.kind, self.id));
    }
}

/// Convenience builder shared by controller tests.
pub(crate) fn expense(id: &str, amount: Decimal, category: &str, date: &str) -> Expense {
    Expense {
        id: id.to_string(),
        title: format!("{category} purchase"),
        amount,
        category: category.to_string(),
        date: date.parse().unwrap(),
        description: String::new(),
    }
}
