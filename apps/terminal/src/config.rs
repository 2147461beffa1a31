//! Environment-based configuration for the terminal front end.

use expenseflow_connect::DEFAULT_API_URL;

pub struct Config {
    pub api_url: String,
    pub email: String,
    pub password: String,
}

impl Config {
    /// Read configuration from the environment. The fallback credentials
    /// are the backend's seeded demo account.
    pub fn from_env() -> Self {
        Config {
            api_url: std::env::var("EXPENSEFLOW_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            email: std::env::var("EXPENSEFLOW_EMAIL")
                .unwrap_or_else(|_| "demo@example.com".to_string()),
            password: std::env::var("EXPENSEFLOW_PASSWORD")
                .unwrap_or_else(|_| "demo123".to_string()),
        }
    }
}
