use reqwest::Client;
use std::time::Duration;
use anyhow::Result;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Shared HTTP client for NewsAPI and the Telegram Bot API.
    /// No global timeout here: getUpdates long-polls for up to 30s,
    /// so each request sets its own deadline instead.
    pub fn create() -> Result<Client> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(30)))
            .build()?;
        Ok(client)
    }
}
