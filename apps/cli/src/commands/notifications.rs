use std::sync::Arc;
use std::time::Duration;

use gastu_core::notifications::{NotificationApiTrait, NotificationFeed, UnreadBadgePoller};

use crate::cli::NotificationsCommand;
use crate::main_lib::AppContext;
use crate::render;
use crate::ui_state::UiState;

pub async fn run(
    cmd: NotificationsCommand,
    ctx: &AppContext,
    state: &mut UiState,
    compact: bool,
) -> anyhow::Result<()> {
    let api: Arc<dyn NotificationApiTrait> = ctx.api.clone();
    match cmd {
        NotificationsCommand::List { tab } => {
            let tab = tab.unwrap_or(state.last_tab);
            let mut feed = NotificationFeed::new(api).with_tab(tab);
            let view = feed.refresh().await?;
            print!("{}", render::feed(&view, tab, compact));

            if state.last_tab != tab {
                state.last_tab = tab;
                if let Err(e) = state.save(&ctx.ui_state_file) {
                    tracing::warn!("Could not remember the notification tab: {:#}", e);
                }
            }
        }
        NotificationsCommand::Read { id } => {
            let mut feed = NotificationFeed::new(api);
            feed.refresh().await?;
            feed.find(id)?;
            let counts = feed.mark_read(id).await?;
            println!("Notificación {} marcada como leída", id);
            println!("{}", render::badge(counts.unread as u64));
        }
        NotificationsCommand::ReadAll => {
            let mut feed = NotificationFeed::new(api);
            feed.refresh().await?;
            let outcome = feed.mark_all_read().await;
            if outcome.attempted == 0 {
                println!("No hay notificaciones sin leer");
            } else {
                println!(
                    "{} de {} notificación(es) marcadas como leídas",
                    outcome.succeeded, outcome.attempted
                );
            }
            if !outcome.is_complete() {
                let ids: Vec<String> = outcome.failed.iter().map(i64::to_string).collect();
                println!("No se pudieron marcar: {}", ids.join(", "));
            }
            println!("{}", render::badge(feed.counts().unread as u64));
        }
        NotificationsCommand::Count => {
            let count = api.unread_count().await?;
            println!("{}", render::badge(count));
        }
        NotificationsCommand::Watch {
            interval_ms,
            changes,
            read_all,
        } => {
            let every = interval_ms
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(ctx.poll_interval);
            let local = if read_all {
                let mut feed = NotificationFeed::new(api.clone());
                feed.refresh().await?;
                let outcome = feed.mark_all_read().await;
                if !outcome.is_complete() {
                    tracing::warn!(
                        "{} notification(s) could not be marked read",
                        outcome.failed.len()
                    );
                }
                Some(feed.counts().unread as u64)
            } else {
                None
            };
            watch(api, every, changes, local).await?;
        }
    }
    Ok(())
}

/// Prints the badge whenever the count changes, until Ctrl-C or `limit` changes.
/// A `local` count is published before the first poll lands.
async fn watch(
    api: Arc<dyn NotificationApiTrait>,
    every: Duration,
    limit: Option<usize>,
    local: Option<u64>,
) -> anyhow::Result<()> {
    let poller = UnreadBadgePoller::spawn(api, every);
    let mut rx = poller.subscribe();
    if let Some(count) = local {
        poller.publish_local(count);
    }
    let mut shown: Option<u64> = None;
    let mut seen = 0usize;

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let latest = *rx.borrow_and_update();
                if let Some(count) = latest {
                    if shown != Some(count) {
                        shown = Some(count);
                        seen += 1;
                        println!("{}", render::badge(count));
                        if limit.is_some_and(|max| seen >= max) {
                            break;
                        }
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Stopping unread badge watch");
                break;
            }
        }
    }

    poller.stop();
    Ok(())
}
