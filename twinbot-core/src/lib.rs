//! # twinbot-core
//!
//! Core types and traits for the digital-twin bot: [`Bot`], message and user types,
//! the per-turn outcome types, the error taxonomy, and tracing initialization.
//! Transport-agnostic; used by twinbot-telegram and twinbot-agent.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{split_message, Bot, TelegramBot, TELEGRAM_MESSAGE_LIMIT};
pub use error::{Result, TwinError};
pub use logger::init_tracing;
pub use types::{
    Chat, Message, MessageDirection, ToCoreMessage, ToCoreUser, TopicVerdict, TurnOutcome,
    TurnPath, User,
};
