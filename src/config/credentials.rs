use std::env;
use anyhow::{Context, Result};

/// Secrets and channel id pulled from the environment (or `.env`).
#[derive(Debug, Clone)]
pub struct Credentials {
    pub telegram_token: String,
    pub chat_id: String,
    pub news_api_key: String,
}

impl Credentials {
    /// All three variables are required; a missing one is a startup error.
    pub fn load() -> Result<Self> {
        Ok(Self {
            telegram_token: env::var("TELEGRAM_BOT_API_KEY")
                .context("TELEGRAM_BOT_API_KEY must be set")?,
            chat_id: env::var("CHAT_ID").context("CHAT_ID must be set")?,
            news_api_key: env::var("NEWS_API_KEY").context("NEWS_API_KEY must be set")?,
        })
    }
}
