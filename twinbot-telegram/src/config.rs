//! Minimal Telegram config: token, API URL, log path.
//! Loaded from env vars BOT_TOKEN, TELEGRAM_API_URL, LOG_FILE.

use anyhow::Result;
use std::env;

/// Telegram connectivity and logging config.
pub struct TelegramConfig {
    pub bot_token: String,
    /// Optional Bot API base URL (e.g. a mock server in tests).
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Loads from env: BOT_TOKEN required, TELEGRAM_API_URL / TELOXIDE_API_URL
    /// and LOG_FILE optional.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Config with the given token; everything else unset.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
        }
    }
}
