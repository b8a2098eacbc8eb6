use anyhow::{Context, Result};
use clap::Parser;
use show_queue_bot::cli::{self, Cli, Commands};
use show_queue_bot::{create_shared_manager, Command, Config, Dispatcher, Presenter, WebServer};
use tokio::signal;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments first to find the config file
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;

    if let Some(Commands::Show(args)) = &cli.command {
        println!("{}", cli::render_config(&config, args.json)?);
        return Ok(());
    }

    let level = cli::resolve_log_level(&cli, &config);
    cli::init_logging(level, config.logging.file.as_deref())?;

    run_bot(config).await
}

/// Run the bot until Ctrl+C. The queue lives only as long as this call.
async fn run_bot(config: Config) -> Result<()> {
    let Some(token) = config.bot.read_token() else {
        warn!(
            "Environment variable {} is not set, not starting the bot",
            config.bot.token_env
        );
        return Ok(());
    };

    let manager =
        create_shared_manager(config.queue.capacity).context("Failed to create show queue")?;
    let audit_handle = cli::spawn_audit_log(&manager);
    let dispatcher = Dispatcher::new(manager, Presenter::new(config.bot.list_char_limit));

    let definitions = Command::definitions();
    for definition in &definitions {
        debug!("Command /{}: {}", definition.name, definition.description);
    }
    info!("Registered {} command(s)", definitions.len());

    println!("🎬 Show queue bot started");
    println!("📦 Queue capacity: {}", config.queue.capacity);
    println!(
        "🌐 Interactions endpoint: http://{}:{}/interactions",
        config.server.host, config.server.port
    );
    println!("🛑 Press Ctrl+C to stop");

    let server = WebServer::new(&config.server, dispatcher, &token);
    server.start(shutdown_signal()).await?;

    audit_handle.abort();
    println!("🧹 Shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for ctrl_c: {}", e);
        // Keep serving; the process can still be stopped externally
        std::future::pending::<()>().await;
    }
    println!("\n🛑 Received Ctrl+C, shutting down...");
}
