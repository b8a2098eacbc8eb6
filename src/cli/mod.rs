pub mod args;
pub mod helpers;

pub use args::{Cli, Commands, ShowArgs};
pub use helpers::{init_logging, render_config, resolve_log_level, spawn_audit_log};
