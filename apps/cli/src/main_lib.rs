use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use gastu_client::{ClientConfig, GastuApiClient};
use gastu_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    concepts::ConceptApiTrait,
    expenses::{ExpenseService, ExpenseServiceTrait},
    preferences::{PreferenceSyncService, PreferenceSyncServiceTrait},
    savings::{SavingsService, SavingsServiceTrait},
    users::{UserService, UserServiceTrait},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppContext {
    /// Shared client; also backs the notification feed and the badge poll.
    pub api: Arc<GastuApiClient>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub preference_service: Arc<dyn PreferenceSyncServiceTrait>,
    pub savings_service: Arc<dyn SavingsServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub concepts: Arc<dyn ConceptApiTrait>,
    pub poll_interval: Duration,
    pub ui_state_file: PathBuf,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_context(config: &Config) -> anyhow::Result<AppContext> {
    let client_config = ClientConfig::new(config.api_url.clone())
        .with_access_token(config.access_token.clone())
        .with_user_id(config.user_id)
        .with_timeout(config.request_timeout)
        .with_mark_read_route(config.mark_read_route);
    let api = Arc::new(GastuApiClient::new(client_config)?);
    tracing::debug!(
        "API client ready for {} (mark-read route: {})",
        api.base_url(),
        api.mark_read_route()
    );

    Ok(AppContext {
        user_service: Arc::new(UserService::new(api.clone())),
        preference_service: Arc::new(PreferenceSyncService::new(api.clone())),
        savings_service: Arc::new(SavingsService::new(api.clone(), api.clone())),
        expense_service: Arc::new(ExpenseService::new(api.clone())),
        budget_service: Arc::new(BudgetService::new(api.clone())),
        concepts: api.clone(),
        poll_interval: config.poll_interval,
        ui_state_file: config.ui_state_file.clone(),
        api,
    })
}
