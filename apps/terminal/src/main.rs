mod config;
mod render;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use config::Config;
use expenseflow_connect::{
    AnalyticsController, AuthController, DashboardController, ExpenseApi, ExpenseApiClient,
};
use render::{LogNotificationSink, TextChartBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();

    let client = Arc::new(ExpenseApiClient::new(&config.api_url)?);

    let health = client
        .health()
        .await
        .context("backend health probe failed")?;
    tracing::info!("Backend at {} is {}", config.api_url, health.status);

    let notifier = Arc::new(LogNotificationSink);
    let charts = Arc::new(TextChartBackend);

    let auth = AuthController::new(client.clone(), notifier.clone());
    if !auth.login(&config.email, &config.password).await {
        anyhow::bail!("login rejected for {}", config.email);
    }

    let mut dashboard =
        DashboardController::new(client.clone(), charts.clone(), notifier.clone());
    dashboard.initialize().await;
    render::print_dashboard(&dashboard);

    let mut analytics = AnalyticsController::new(client.clone(), charts, notifier);
    analytics.initialize().await;
    render::print_analytics(&analytics);

    dashboard.logout().await;
    Ok(())
}

fn init_tracing() {
    let log_format = std::env::var("EXPENSEFLOW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
