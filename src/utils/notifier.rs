use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use anyhow::{anyhow, Result};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Long-poll window for getUpdates. The request deadline is kept above
/// this so the server side ends the poll, not the client.
const POLL_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

impl<T> ApiResponse<T> {
    fn into_result(self, method: &str) -> Result<T>
    where
        T: Default,
    {
        if self.ok {
            Ok(self.result.unwrap_or_default())
        } else {
            Err(anyhow!(
                "Telegram {} failed: {}",
                method,
                self.description.unwrap_or_else(|| "unknown error".to_string())
            ))
        }
    }
}

/// Thin client over the Telegram Bot API. All messages go to the single
/// configured chat as MarkdownV2 with link previews suppressed.
#[derive(Clone)]
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(client: Client, token: String, chat_id: String) -> Self {
        Self {
            client,
            api_base: TELEGRAM_API_BASE.to_string(),
            token,
            chat_id,
        }
    }

    /// Point the notifier at a different API host (used by tests).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    /// Send one message to the configured chat. The text must already be
    /// MarkdownV2-escaped; Telegram rejects unescaped reserved characters.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let body = json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "MarkdownV2",
            "disable_web_page_preview": true,
        });

        let resp: ApiResponse<serde_json::Value> = self
            .client
            .post(self.method_url("sendMessage"))
            .timeout(Duration::from_secs(10))
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        resp.into_result("sendMessage").map(|_| ())
    }

    /// Long-poll for updates with an id at or past `offset`.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>> {
        let resp: ApiResponse<Vec<Update>> = self
            .client
            .get(self.method_url("getUpdates"))
            .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 10))
            .query(&[
                ("offset", offset.to_string()),
                ("timeout", POLL_TIMEOUT_SECS.to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        resp.into_result("getUpdates")
    }
}
