//! # twinbot-telegram
//!
//! Telegram layer: teloxide-to-core adapters, command replies, minimal config,
//! and the REPL runner that drives the response policy. Handles only Telegram
//! connectivity; all answer logic lives in twinbot-agent.

mod adapters;
mod commands;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use commands::{about_text, help_text, parse_command, start_text, Command};
pub use config::TelegramConfig;
pub use runner::run_repl;
