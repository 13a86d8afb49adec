pub mod news;
pub mod structs;

pub use news::NewsFetcher;
pub use structs::Article;
