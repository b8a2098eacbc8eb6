use serde::Deserialize;
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    #[serde(default)]
    pub level: Option<String>,
    /// Append logs to this file instead of stdout
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Parsed level, if one is configured
    pub fn parsed_level(&self) -> Option<Result<Level, String>> {
        self.level.as_deref().map(parse_level)
    }
}

/// Parse a level name as accepted by `--log-level` and `logging.level`
pub fn parse_level(name: &str) -> Result<Level, String> {
    name.trim()
        .parse::<Level>()
        .map_err(|_| format!("Unknown log level: {}", name))
}
