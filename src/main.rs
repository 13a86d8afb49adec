mod config;
mod modules;
mod utils;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;

use crate::config::credentials::Credentials;
use crate::config::watchlist::Watchlist;
use crate::modules::action::NewsDispatcher;
use crate::modules::listener::CommandListener;
use crate::modules::memory::SeenArticles;
use crate::modules::perception::NewsFetcher;
use crate::utils::http_client::HttpClientFactory;
use crate::utils::notifier::TelegramNotifier;

const SEEN_FILE: &str = "seen_articles.txt";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();
    info!("Starting ETF News Bot...");

    let credentials = Credentials::load()?;
    let watchlist = Watchlist::load()?;
    info!(tickers = watchlist.tickers.len(), "Watchlist loaded");

    let client = HttpClientFactory::create()?;
    let notifier = TelegramNotifier::new(
        client.clone(),
        credentials.telegram_token.clone(),
        credentials.chat_id.clone(),
    );
    let fetcher = NewsFetcher::new(client, credentials.news_api_key.clone());

    let seen = SeenArticles::load(SEEN_FILE);
    info!(known_urls = seen.len(), "Seen-articles store loaded");

    let dispatcher = NewsDispatcher::new(fetcher, notifier.clone(), watchlist, seen);

    CommandListener::new(notifier, dispatcher).run().await
}
