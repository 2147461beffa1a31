//! Dashboard view - expense list, budget gauge, category chart.

mod dashboard_controller;


pub use dashboard_controller::DashboardController;
