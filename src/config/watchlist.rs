use serde::Deserialize;
use config::{Config, File};
use anyhow::Result;

#[derive(Debug, Deserialize, Clone)]
pub struct TickerQuery {
    pub symbol: String,
    pub query: String,
}

/// Ordered ticker -> search-query table. Fixed at startup, never mutated;
/// tickers are dispatched in file order.
#[derive(Debug, Deserialize, Clone)]
pub struct Watchlist {
    pub tickers: Vec<TickerQuery>,
}

impl Watchlist {
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name("watchlist"))
            .build()?;

        let watchlist: Watchlist = settings.try_deserialize()?;
        Ok(watchlist)
    }
}
