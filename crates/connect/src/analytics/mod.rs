//! Analytics view - past-month trends, flagged expenses, savings advice.

mod analytics_controller;


pub use analytics_controller::{AnalyticsController, SummaryCards};
