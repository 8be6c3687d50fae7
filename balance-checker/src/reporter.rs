//! Telegram delivery of low-balance reminders.
//!
//! Uses teloxide `Bot` directly (send-only, no dispatcher).

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, warn};

/// Delivers a reminder text to its recipients.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `text` once to every recipient.
    async fn send(&self, text: &str) -> anyhow::Result<()>;
}

/// Telegram notifier sending to a fixed list of chats.
pub struct TelegramReporter {
    bot: Bot,
    chats: Vec<i64>,
}

impl TelegramReporter {
    /// Create a reporter for `chats` using `bot_token`.
    pub fn new(bot_token: &str, chats: Vec<i64>) -> Self {
        Self {
            bot: Bot::new(bot_token),
            chats,
        }
    }

    /// Configured recipient chat IDs.
    pub fn chats(&self) -> &[i64] {
        &self.chats
    }
}

#[async_trait]
impl Notifier for TelegramReporter {
    /// Send to every chat. Per-chat failures are logged; the call fails only
    /// when no chat received the message.
    async fn send(&self, text: &str) -> anyhow::Result<()> {
        if self.chats.is_empty() {
            debug!("no chats configured, skipping reminder");
            return Ok(());
        }
        let mut any_sent = false;
        for &chat_id in &self.chats {
            match self
                .bot
                .send_message(ChatId(chat_id), text)
                .parse_mode(ParseMode::Html)
                .await
            {
                Ok(_) => any_sent = true,
                Err(e) => warn!(chat_id, error = %e, "failed to send Telegram message"),
            }
        }
        if !any_sent {
            anyhow::bail!("failed to send Telegram message to any configured chat");
        }
        Ok(())
    }
}

/// Notifier that only logs, used for dry runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunNotifier;

#[async_trait]
impl Notifier for DryRunNotifier {
    async fn send(&self, text: &str) -> anyhow::Result<()> {
        tracing::info!(text, "dry run: reminder not sent");
        Ok(())
    }
}
