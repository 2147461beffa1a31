//! ExpenseFlow Connect - backend API client and view controllers.
//!
//! This crate talks to the ExpenseFlow backend over HTTP and owns the
//! client-side state behind each view: the dashboard, the past-month
//! analytics page, and the login/registration screen. Chart drawing and
//! notification toasts are opaque collaborators reached through the
//! [`charts`] and [`notify`] trait seams.

pub mod analytics;
pub mod auth;
pub mod charts;
pub mod client;
pub mod dashboard;
pub mod notify;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use analytics::AnalyticsController;
pub use auth::AuthController;
pub use client::{
    AuthResponse, ExpenseApiClient, HealthStatus, LoginRequest, RegisterRequest, DEFAULT_API_URL,
};
pub use dashboard::DashboardController;
pub use traits::ExpenseApi;
