//! Past-month analytics - trends, flagged expenses, and savings advice.

mod analytics_model;
mod analytics_service;

#[cfg(test)]
mod analytics_service_tests;

pub use analytics_model::{AnalyticsSummary, SavingsRecommendation};
pub use analytics_service::{is_unnecessary, potential_saving, summarize};
