pub mod http_client;
pub mod markdown;
pub mod notifier;
