//! Environment configuration.

use anyhow::{Context, Result};

/// Required secrets, read from the environment at startup.
///
/// Absence of either is fatal before any traffic is served.
#[derive(Debug, Clone)]
pub struct Secrets {
    /// Telegram bot access token.
    pub bot_token: String,

    /// Completion service API key.
    pub api_key: String,
}

impl Secrets {
    /// Read secrets from `BOT_TOKEN` and `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bot_token: std::env::var("BOT_TOKEN").context("BOT_TOKEN is not set")?,
            api_key: std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")?,
        })
    }
}
