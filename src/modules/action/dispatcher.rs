use std::collections::HashSet;

use anyhow::Result;
use chrono::Local;
use tracing::{error, info};

use crate::config::watchlist::Watchlist;
use crate::modules::memory::SeenArticles;
use crate::modules::perception::NewsFetcher;
use crate::utils::markdown::{
    escape_markdown_v2, escape_url, split_message, strip_html_tags, MAX_MESSAGE_LEN,
};
use crate::utils::notifier::TelegramNotifier;

/// Runs one `/getNews` cycle: fetch per ticker, drop anything already
/// delivered, format, split, send, then persist the seen set.
pub struct NewsDispatcher {
    fetcher: NewsFetcher,
    notifier: TelegramNotifier,
    watchlist: Watchlist,
    seen: SeenArticles,
}

impl NewsDispatcher {
    pub fn new(
        fetcher: NewsFetcher,
        notifier: TelegramNotifier,
        watchlist: Watchlist,
        seen: SeenArticles,
    ) -> Self {
        Self {
            fetcher,
            notifier,
            watchlist,
            seen,
        }
    }

    pub async fn dispatch(&mut self) -> Result<()> {
        let date = escape_markdown_v2(&Local::now().format("%d-%m-%Y").to_string());
        self.notifier
            .send_message(&format!("*TODAY'S NEWS: {}*", date))
            .await?;

        for entry in &self.watchlist.tickers {
            // One ticker's failure must not kill the whole cycle.
            let articles = match self.fetcher.fetch(&entry.query).await {
                Ok(articles) => articles,
                Err(e) => {
                    error!(ticker = %entry.symbol, error = %e, "News fetch failed; skipping ticker");
                    continue;
                }
            };

            let mut message = format!("*{}*\n", escape_markdown_v2(&entry.symbol));
            let mut seen_for_ticker: HashSet<String> = HashSet::new();
            let mut has_articles = false;

            for article in &articles {
                let url = article.url.as_str();
                if self.seen.contains(url) || seen_for_ticker.contains(url) {
                    continue;
                }
                seen_for_ticker.insert(url.to_string());
                self.seen.insert(url);
                has_articles = true;

                let title = escape_markdown_v2(article.title());
                let desc = escape_markdown_v2(&strip_html_tags(article.description()));
                message.push_str(&format!(
                    "\n• *{}*\n  {}\n  [Read more]({})\n",
                    title,
                    desc,
                    escape_url(url)
                ));
            }

            if has_articles {
                for chunk in split_message(&message, MAX_MESSAGE_LEN) {
                    self.notifier.send_message(&chunk).await?;
                }
            }
        }

        self.seen.save()?;
        info!(known_urls = self.seen.len(), "✅ News cycle complete");
        Ok(())
    }
}
