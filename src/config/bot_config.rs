use serde::Deserialize;

// Bot section: how the platform token is found and how replies are sized
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    /// Environment variable holding the bot token
    #[serde(default = "default_token_env")]
    pub token_env: String,
    /// Character limit for the rendered show list (platform embed field limit)
    #[serde(default = "default_list_char_limit")]
    pub list_char_limit: usize,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token_env: default_token_env(),
            list_char_limit: default_list_char_limit(),
        }
    }
}

impl BotConfig {
    /// Read the token from the configured environment variable.
    /// Unset and blank values both count as missing.
    pub fn read_token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}

fn default_token_env() -> String {
    "DISCORD_QUEUE_BOT".to_string()
}

fn default_list_char_limit() -> usize {
    1024
}
