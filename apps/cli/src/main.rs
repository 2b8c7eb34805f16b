//! gastu - terminal client for the Gastu personal finance backend.

mod cli;
mod commands;
mod config;
mod main_lib;
mod render;
mod ui_state;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::main_lib::{build_context, init_tracing, AppContext};
use crate::ui_state::UiState;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        tracing::error!("Command failed: {:#}", err);
        eprintln!("Error: {}", user_facing(&err));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_format);
    let ctx = build_context(&config)?;
    dispatch(cli, &ctx).await
}

async fn dispatch(cli: Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let mut state = UiState::load(&ctx.ui_state_file);
    let compact = cli.compact || state.compact;

    match cli.command {
        Commands::Profile(cmd) => commands::profile::run(cmd, ctx).await,
        Commands::Prefs(cmd) => commands::prefs::run(cmd, ctx).await,
        Commands::Notifications(cmd) => {
            commands::notifications::run(cmd, ctx, &mut state, compact).await
        }
        Commands::Goals(cmd) => commands::goals::run(cmd, ctx, compact).await,
        Commands::Expenses(cmd) => commands::expenses::run(cmd, ctx).await,
        Commands::Budgets(cmd) => commands::budgets::run(cmd, ctx, compact).await,
        Commands::Ui(cmd) => commands::ui::run(cmd, ctx, &mut state),
    }
}

/// Backend errors print their user message; everything else its context chain.
fn user_facing(err: &anyhow::Error) -> String {
    match err.downcast_ref::<gastu_core::Error>() {
        Some(e) => e.user_message(),
        None => format!("{:#}", err),
    }
}
