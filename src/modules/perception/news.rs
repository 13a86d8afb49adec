use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use reqwest::Client;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::structs::{Article, NewsApiResponse};

const NEWSAPI_BASE: &str = "https://newsapi.org";
const PAGE_SIZE: &str = "2";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Fixed pause after each successful call, to stay friendly with the
/// free-tier rate limits.
const COURTESY_DELAY: Duration = Duration::from_secs(1);

/// NewsAPI search client with a per-process result cache: a given query
/// string hits the network at most once for the lifetime of the fetcher.
pub struct NewsFetcher {
    client: Client,
    base_url: String,
    api_key: String,
    cache: HashMap<String, Vec<Article>>,
}

impl NewsFetcher {
    pub fn new(client: Client, api_key: String) -> Self {
        Self {
            client,
            base_url: NEWSAPI_BASE.to_string(),
            api_key,
            cache: HashMap::new(),
        }
    }

    /// Point the fetcher at a different API host (used by tests).
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = base.into();
        self
    }

    /// Search today's English-language news for `query`, capped at two
    /// results sorted by relevancy. A non-success status is logged and
    /// yields an empty list without poisoning the cache, so a later call
    /// with the same query retries the network.
    pub async fn fetch(&mut self, query: &str) -> Result<Vec<Article>> {
        if let Some(cached) = self.cache.get(query) {
            debug!(query, "News cache hit");
            return Ok(cached.clone());
        }

        let url = format!("{}/v2/everything", self.base_url);
        let today = Local::now().format("%d-%m-%Y").to_string();
        let params = [
            ("q", query),
            ("from", today.as_str()),
            ("sortBy", "relevancy"),
            ("language", "en"),
            ("apiKey", self.api_key.as_str()),
            ("pageSize", PAGE_SIZE),
        ];

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, query, "NewsAPI returned non-success status");
            return Ok(Vec::new());
        }

        let body: NewsApiResponse = resp.json().await?;
        self.cache.insert(query.to_string(), body.articles.clone());
        sleep(COURTESY_DELAY).await;
        Ok(body.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::http_client::HttpClientFactory;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher(base: &str) -> NewsFetcher {
        NewsFetcher::new(HttpClientFactory::create().unwrap(), "key".to_string())
            .with_base_url(base)
    }

    fn articles_body() -> serde_json::Value {
        json!({
            "status": "ok",
            "articles": [
                {
                    "title": "Gold rallies",
                    "description": "Bullion climbs on rate-cut bets",
                    "url": "https://example.com/gold"
                },
                {
                    "title": "Dollar slips",
                    "description": null,
                    "url": "https://example.com/dollar"
                }
            ]
        })
    }

    #[tokio::test]
    async fn second_fetch_is_served_from_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .and(query_param("q", "gold prices"))
            .and(query_param("sortBy", "relevancy"))
            .and(query_param("language", "en"))
            .and(query_param("pageSize", "2"))
            .and(query_param("apiKey", "key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(articles_body()))
            .expect(1)
            .mount(&server)
            .await;

        let mut fetcher = fetcher(&server.uri());
        let first = fetcher.fetch("gold prices").await.unwrap();
        let second = fetcher.fetch("gold prices").await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn non_success_status_yields_empty_and_is_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .expect(2)
            .mount(&server)
            .await;

        let mut fetcher = fetcher(&server.uri());
        assert!(fetcher.fetch("inflation").await.unwrap().is_empty());
        // Not cached: the same query goes back to the network.
        assert!(fetcher.fetch("inflation").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_articles_field_is_an_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })),
            )
            .mount(&server)
            .await;

        let mut fetcher = fetcher(&server.uri());
        assert!(fetcher.fetch("REITs").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn transport_error_propagates() {
        // Grab a port the OS just handed out and release it so nothing is
        // listening there; a dropped MockServer won't do, because wiremock
        // pools servers and keeps the socket open.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let uri = format!("http://127.0.0.1:{port}");

        let mut fetcher = fetcher(&uri);
        assert!(fetcher.fetch("treasury yields").await.is_err());
    }
}
