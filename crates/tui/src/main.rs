//! Gateway TUI - Terminal admin console for an LLM API gateway.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, metrics and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Configuration persistence (see `crates/config`).
//! - Async API calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > profile config > defaults.
//! - Every effect queued by the app is dispatched right after the action that queued it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use futures_util::StreamExt;
use gateway_client::{MetricsCollector, MetricsExporter};
use gateway_config::PersistedState;
use gateway_config::constants::{
    AUTO_SAVE_INTERVAL_SECS, COUNTDOWN_TICK_MS, DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS,
};
use gateway_tui::action::{Action, RedactedAction};
use gateway_tui::app::App;
use gateway_tui::cli::Cli;
use gateway_tui::runtime::{
    client::create_client,
    config::{load_config, open_config_manager, save_and_quit},
    side_effects::{SharedClient, TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};
use gateway_tui::ui::ToastLevel;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::{Mutex, mpsc::channel};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "gateway-tui.log");
    // _guard must live for the entire main() so buffered logs are flushed.
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let _metrics_exporter = match cli.metrics_bind.as_deref() {
        Some(bind_addr) => match MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!("Metrics exporter started on http://{}/metrics", bind_addr);
                Some(exporter)
            }
            Err(e) => {
                tracing::error!("Failed to start metrics exporter: {}", e);
                None
            }
        },
        None => None,
    };
    let metrics = if _metrics_exporter.is_some() {
        MetricsCollector::new()
    } else {
        MetricsCollector::disabled()
    };

    let (config, connection) = load_config(&cli)?;
    let mut client: SharedClient = Arc::new(create_client(&config, Some(metrics.clone()))?);
    tracing::info!(base_url = %connection.base_url, "Gateway client ready");

    let config_manager = open_config_manager(&cli)?;
    let persisted = if cli.fresh {
        tracing::info!("--fresh flag set, starting with default state");
        PersistedState::default()
    } else {
        config_manager.load()
    };
    let config_manager = Arc::new(Mutex::new(config_manager));

    let mut app = App::new(Some(persisted), connection).with_metrics(metrics.clone());

    let task_tracker = TaskTracker::new();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Restores the terminal on every exit path, including panics.
    let _terminal_guard = TerminalGuard::new();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    let tx_input = tx.clone();
    task_tracker.spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let action = match event_result {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Action::Input(key),
                Ok(Event::Resize(width, height)) => Action::Resize(width, height),
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!(error = %e, "Terminal event stream failed");
                    break;
                }
            };
            if tx_input.send(action).await.is_err() {
                break;
            }
        }
    });

    app.mount();

    let mut tick_interval = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));
    let mut countdown_interval = tokio::time::interval(Duration::from_millis(COUNTDOWN_TICK_MS));
    let mut auto_save_interval =
        tokio::time::interval(Duration::from_secs(AUTO_SAVE_INTERVAL_SECS));

    loop {
        for effect in app.drain_effects() {
            handle_side_effects(
                effect,
                client.clone(),
                tx.clone(),
                config_manager.clone(),
                task_tracker.clone(),
            )
            .await;
        }

        let render_start = Instant::now();
        terminal.draw(|f| app.render(f))?;
        metrics.record_tui_frame_render_duration(render_start.elapsed());

        tokio::select! {
            Some(action) = rx.recv() => {
                metrics.record_tui_action_queue_depth(rx.len());
                tracing::debug!("Handling action: {:?}", RedactedAction(&action));

                match action {
                    Action::Input(key) => match app.handle_input(key) {
                        Some(Action::Quit) => {
                            if let Err(e) = save_and_quit(&app, &config_manager).await {
                                tracing::error!(error = %e, "Failed to save preferences");
                            }
                            break;
                        }
                        Some(Action::Reconnect) => {
                            match load_config(&cli).and_then(|(config, connection)| {
                                let rebuilt = create_client(&config, Some(metrics.clone()))?;
                                Ok((rebuilt, connection))
                            }) {
                                Ok((rebuilt, connection)) => {
                                    tracing::info!(base_url = %connection.base_url, "Reconnected");
                                    client = Arc::new(rebuilt);
                                    app.restore_session(connection);
                                }
                                Err(e) => {
                                    tracing::warn!(error = %e, "Reconnect failed");
                                    app.update(Action::Notify(
                                        ToastLevel::Error,
                                        format!("Reconnect failed: {e}"),
                                    ));
                                }
                            }
                        }
                        _ => {}
                    },
                    other => app.update(other),
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
            _ = countdown_interval.tick() => {
                app.update(Action::CountdownTick);
            }
            _ = auto_save_interval.tick() => {
                let state = app.get_persisted_state();
                let cm = config_manager.clone();
                task_tracker.spawn(async move {
                    let manager = cm.lock().await;
                    if let Err(e) = manager.save(&state) {
                        tracing::error!("Failed to auto-save state: {}", e);
                    } else {
                        tracing::debug!("State auto-saved successfully");
                    }
                });
            }
        }
    }

    // The input reader never finishes on its own, so the wait is bounded.
    task_tracker.close();
    if tokio::time::timeout(Duration::from_secs(2), task_tracker.wait())
        .await
        .is_err()
    {
        tracing::warn!("Timed out waiting for background tasks");
    }

    terminal.show_cursor()?;

    Ok(())
}
