//! HTTP client for the ExpenseFlow backend API.
//!
//! The backend is a JSON API with a cookie-based session (login opens it,
//! logout closes it), so the client keeps a cookie store and every call
//! goes through one shared response parser that maps transport failures,
//! non-success statuses, and error-flagged bodies to distinct error
//! variants.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use expenseflow_core::analytics::AnalyticsSummary;
use expenseflow_core::errors::{Error, Result};
use expenseflow_core::expenses::{Expense, NewExpense};
use expenseflow_core::stats::SpendingStats;

use crate::traits::ExpenseApi;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL for a locally served backend.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

// ─────────────────────────────────────────────────────────────────────────────
// Request/Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// Credentials for `POST /api/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /api/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub budget: i64,
}

/// Outcome of a login or registration attempt.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /health` payload.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Bodies like `{"success": true}` carry no data worth returning.
#[derive(Debug, serde::Deserialize)]
struct StatusOnly {
    #[allow(dead_code)]
    #[serde(default)]
    success: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Expense API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the ExpenseFlow backend.
///
/// # Example
///
/// ```ignore
/// let client = ExpenseApiClient::new("http://127.0.0.1:5000")?;
/// let expenses = client.list_expenses().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ExpenseApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ExpenseApiClient {
    /// Create a new client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .cookie_store(true)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[ExpenseApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {e}")))?;

        self.parse_response(response).await
    }

    /// Make a POST request with a JSON body and parse the response.
    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[ExpenseApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {e}")))?;

        self.parse_response(response).await
    }

    /// Make a DELETE request and parse the response.
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[ExpenseApi] DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {e}")))?;

        self.parse_response(response).await
    }

    /// Parse an HTTP response, handling each failure class appropriately.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response: {e}")))?;

        parse_body(status, &body)
    }
}

/// Map a status/body pair to a typed result: non-success statuses (with
/// `{error}`/`{message}` body mining for a better message), error-flagged
/// success bodies, and malformed payloads each get their own variant.
fn parse_body<T: DeserializeOwned>(status: reqwest::StatusCode, body: &str) -> Result<T> {
    if !status.is_success() {
        // Try to parse the error body for a better message
        if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
            if let Some(message) = err.message.or(err.error) {
                return Err(Error::Status {
                    status: status.as_u16(),
                    message,
                });
            }
        }
        return Err(Error::Status {
            status: status.as_u16(),
            message: body.chars().take(200).collect(),
        });
    }

    // Some endpoints flag failure in an otherwise successful response.
    if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
        if let Some(message) = err.error {
            return Err(Error::Payload(message));
        }
    }

    serde_json::from_str(body).map_err(|e| Error::Payload(format!("Failed to parse response: {e}")))
}

// ─────────────────────────────────────────────────────────────────────────────
// ExpenseApi Trait Implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ExpenseApi for ExpenseApiClient {
    async fn list_categories(&self) -> Result<Vec<String>> {
        self.get("/api/categories").await
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.get("/api/expenses").await
    }

    async fn create_expense(&self, new_expense: &NewExpense) -> Result<Expense> {
        self.post("/api/expenses", new_expense).await
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<()> {
        let _: StatusOnly = self
            .delete(&format!("/api/expenses/{expense_id}"))
            .await?;
        Ok(())
    }

    async fn get_stats(&self) -> Result<SpendingStats> {
        self.get("/api/stats").await
    }

    async fn get_analytics_summary(&self) -> Result<AnalyticsSummary> {
        self.get("/api/analytics-summary").await
    }

    async fn get_past_month_expenses(&self) -> Result<Vec<Expense>> {
        self.get("/api/past-month-data").await
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        self.post("/api/login", credentials).await
    }

    async fn register(&self, registration: &RegisterRequest) -> Result<AuthResponse> {
        self.post("/api/register", registration).await
    }

    async fn logout(&self) -> Result<()> {
        let _: StatusOnly = self.post("/api/logout", &serde_json::json!({})).await?;
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.get("/health").await
    }
}
