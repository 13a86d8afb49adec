use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::{error, info};

use crate::modules::action::NewsDispatcher;
use crate::utils::notifier::{TelegramNotifier, Update};

const USAGE_HINT: &str = "To interact with this bot use command: */getNews*";

/// Poll delay after a failed getUpdates call.
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Long-lived command loop. Updates are handled strictly in order and each
/// handler runs to completion before the next update is looked at.
pub struct CommandListener {
    notifier: TelegramNotifier,
    dispatcher: NewsDispatcher,
    offset: i64,
}

impl CommandListener {
    pub fn new(notifier: TelegramNotifier, dispatcher: NewsDispatcher) -> Self {
        Self {
            notifier,
            dispatcher,
            offset: 0,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        info!("🤖 Command listener started");
        loop {
            match self.notifier.get_updates(self.offset).await {
                Ok(updates) => self.process_updates(updates).await,
                Err(e) => {
                    error!(error = %e, "getUpdates failed; retrying");
                    sleep(RETRY_DELAY).await;
                }
            }
        }
    }

    /// Drain one getUpdates batch. The offset moves past every update,
    /// including non-command ones, so nothing is handled twice.
    async fn process_updates(&mut self, updates: Vec<Update>) {
        for update in updates {
            self.offset = self.offset.max(update.update_id + 1);
            let Some(text) = update.message.and_then(|m| m.text) else {
                continue;
            };
            self.handle_command(text.trim()).await;
        }
    }

    async fn handle_command(&mut self, command: &str) {
        match command {
            "/start" => {
                if let Err(e) = self.notifier.send_message(USAGE_HINT).await {
                    error!(error = %e, "Failed to send usage hint");
                }
            }
            "/getNews" => {
                info!("📰 Running news dispatch cycle");
                if let Err(e) = self.dispatcher.dispatch().await {
                    error!(error = %e, "News dispatch cycle failed");
                }
            }
            _ => {}
        }
    }
}
