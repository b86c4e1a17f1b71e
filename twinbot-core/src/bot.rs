//! Bot abstraction for sending messages.
//!
//! [`Bot`] trait is transport-agnostic; [`TelegramBot`] implements it via teloxide.
//! Outbound text longer than the Telegram ceiling is split into sequential parts.

use crate::error::{Result, TwinError};
use crate::types::{Chat, Message};
use async_trait::async_trait;
use teloxide::{prelude::*, types::ChatId};

/// Telegram rejects messages longer than this many characters.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Abstraction for outbound delivery. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat, splitting it if it exceeds the
    /// transport length ceiling.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
}

/// Splits `text` into parts of at most `max_chars` characters, preferring to cut
/// at the last newline inside the window so paragraphs stay together.
/// Returns the text unchanged (single part) when it fits.
pub fn split_message(text: &str, max_chars: usize) -> Vec<String> {
    if max_chars == 0 || text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut parts = Vec::new();
    let mut rest: &str = text;
    while !rest.is_empty() {
        let window_end = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if window_end == rest.len() {
            parts.push(rest.to_string());
            break;
        }
        // Cut at the last newline in the window when there is one.
        let cut = match rest[..window_end].rfind('\n') {
            Some(i) if i > 0 => i + 1,
            _ => window_end,
        };
        parts.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }
    parts
}

/// Teloxide-based implementation of [`Bot`].
pub struct TelegramBot {
    bot: teloxide::Bot,
}

impl TelegramBot {
    /// Creates a bot using the given Telegram bot token.
    pub fn new(token: String) -> Self {
        Self {
            bot: teloxide::Bot::new(token),
        }
    }

    /// Wraps an existing teloxide bot (shared with the update listener).
    pub fn from_bot(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Bot for TelegramBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        for part in split_message(text, TELEGRAM_MESSAGE_LIMIT) {
            self.bot
                .send_message(ChatId(chat.id), part)
                .await
                .map_err(|e| TwinError::Delivery(e.to_string()))?;
        }
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
