use crate::cli::Cli;
use crate::config::Config;
use crate::dispatcher::Command;
use crate::queue::{QueueEvent, SharedQueueManager};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::task::JoinHandle;
use tracing::level_filters::LevelFilter;
use tracing::{info, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Pick the log level: `--log-level`, then `--debug`, then `logging.level`, then WARN
pub fn resolve_log_level(cli: &Cli, config: &Config) -> Level {
    if let Some(level) = cli.log_level {
        return level;
    }
    if cli.debug {
        return Level::DEBUG;
    }
    match config.logging.parsed_level() {
        Some(Ok(level)) => level,
        _ => Level::WARN,
    }
}

/// Initialize logging to stdout, or appended to `log_file` when given
pub fn init_logging(level: Level, log_file: Option<&Path>) -> Result<()> {
    let filter = LevelFilter::from_level(level);

    if let Some(log_file) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to initialize logging")?;
    }

    Ok(())
}

/// One audit line per queue mutation
pub fn describe_event(event: &QueueEvent) -> String {
    match event {
        QueueEvent::Enqueued { entry, position } => format!(
            "queued \"{}\" from {} at position {}",
            entry.content(),
            entry.submitted_by(),
            position
        ),
        QueueEvent::Dequeued { entry } => format!(
            "removed \"{}\" from {}",
            entry.content(),
            entry.submitted_by()
        ),
        QueueEvent::Cleared { removed } => format!("cleared {} entries", removed),
    }
}

/// Log queue mutations until the manager is dropped
pub fn spawn_audit_log(manager: &SharedQueueManager) -> JoinHandle<()> {
    let mut rx = manager.subscribe();
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            info!(target: "show_queue_bot::audit", "{}", describe_event(&event));
        }
    })
}

/// Render the effective configuration and command manifest for `show`
pub fn render_config(config: &Config, json: bool) -> Result<String> {
    let mut lines = vec![
        "Bot config:".to_string(),
        format!("  token_env: {}", config.bot.token_env),
        format!("  list_char_limit: {}", config.bot.list_char_limit),
        "\nQueue config:".to_string(),
        format!("  capacity: {}", config.queue.capacity),
        "\nServer config:".to_string(),
        format!("  host: {}", config.server.host),
        format!("  port: {}", config.server.port),
        "\nLogging config:".to_string(),
        format!(
            "  level: {}",
            config.logging.level.as_deref().unwrap_or("(default)")
        ),
        format!(
            "  file: {}",
            config
                .logging
                .file
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "(stdout)".to_string())
        ),
        "\nCommands:".to_string(),
    ];

    let definitions = Command::definitions();
    for definition in &definitions {
        lines.push(format!("  /{}: {}", definition.name, definition.description));
    }

    if json {
        lines.push(String::new());
        lines.push(
            serde_json::to_string_pretty(&definitions)
                .context("Failed to serialize command manifest")?,
        );
    }

    Ok(lines.join("\n"))
}
