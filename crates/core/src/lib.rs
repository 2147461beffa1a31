//! ExpenseFlow Core - domain models and summary computations.
//!
//! This crate contains the expense-tracking domain logic shared across the
//! client: expense records, budget-relative spending statistics, past-month
//! analytics, and display formatting. It performs no I/O; fetching and
//! mutation live in the `expenseflow-connect` crate.

pub mod analytics;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod stats;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
