//! Controller for the login/registration screen.

use log::error;
use std::sync::Arc;

use expenseflow_core::constants::DEFAULT_MONTHLY_BUDGET;
use expenseflow_core::errors::Error;

use crate::client::{LoginRequest, RegisterRequest};
use crate::notify::{Notification, NotificationSink};
use crate::traits::ExpenseApi;

/// Flows behind the auth screen. Each method returns whether the caller
/// should navigate to the dashboard. A rejected attempt surfaces the
/// backend's message; a transport failure surfaces generic copy.
pub struct AuthController {
    api: Arc<dyn ExpenseApi>,
    notifier: Arc<dyn NotificationSink>,
}

impl AuthController {
    pub fn new(api: Arc<dyn ExpenseApi>, notifier: Arc<dyn NotificationSink>) -> Self {
        AuthController { api, notifier }
    }

    /// Authenticate and open a session.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.api.login(&credentials).await {
            Ok(response) if response.success => {
                self.notifier
                    .notify(Notification::success("Login successful! Redirecting..."));
                true
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Invalid credentials".to_string());
                self.notifier.notify(Notification::error(message));
                false
            }
            Err(Error::Status { message, .. }) => {
                self.notifier.notify(Notification::error(message));
                false
            }
            Err(e) => {
                error!("Login failed: {e}");
                self.notifier
                    .notify(Notification::error("Login failed. Please try again."));
                false
            }
        }
    }

    /// Create an account and open a session. `budget` falls back to the
    /// default monthly budget when unset.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        budget: Option<i64>,
    ) -> bool {
        let registration = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            budget: budget.unwrap_or(DEFAULT_MONTHLY_BUDGET),
        };

        match self.api.register(&registration).await {
            Ok(response) if response.success => {
                self.notifier.notify(Notification::success(
                    "Registration successful! Redirecting...",
                ));
                true
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Registration failed".to_string());
                self.notifier.notify(Notification::error(message));
                false
            }
            Err(Error::Status { message, .. }) => {
                self.notifier.notify(Notification::error(message));
                false
            }
            Err(e) => {
                error!("Registration failed: {e}");
                self.notifier.notify(Notification::error(
                    "Registration failed. Please try again.",
                ));
                false
            }
        }
    }
}
