use crate::config::logging_config::parse_level;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config YAML file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging for internal details
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Log level (overrides --debug and logging.level)
    #[arg(long, value_parser = parse_level)]
    pub log_level: Option<Level>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective configuration and registered commands
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Also print the manifest as JSON
    #[arg(long)]
    pub json: bool,
}
