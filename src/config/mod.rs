pub mod credentials;
pub mod watchlist;
