//! REPL runner: converts teloxide messages to core messages and drives the
//! response policy. Each message is handled in its own task; the bot keeps no
//! cross-turn state, so concurrent chats may complete in any order.

use anyhow::Result;
use std::sync::Arc;
use teloxide::{prelude::*, types::ChatAction};
use tracing::{error, info, instrument};
use twinbot_agent::{CvProfile, ResponsePolicy};
use twinbot_core::{Bot as CoreBot, TelegramBot, ToCoreMessage};

use crate::adapters::TelegramMessageWrapper;
use crate::commands::{about_text, help_text, parse_command, start_text, Command};

/// Runs the Telegram REPL with the given policy and profile.
/// Commands are answered from the profile; all other text goes through
/// [`ResponsePolicy::handle_incoming_message`], exactly one reply per message.
#[instrument(skip(bot, policy, profile))]
pub async fn run_repl(
    bot: teloxide::Bot,
    policy: Arc<ResponsePolicy>,
    profile: Arc<CvProfile>,
) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Bot identity confirmed before repl");
    }

    teloxide::repl(bot, move |bot: Bot, msg: teloxide::types::Message| {
        let policy = policy.clone();
        let profile = profile.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            let text = match msg.text() {
                Some(t) => t.to_string(),
                None => {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Received non-text message; ignoring"
                    );
                    return Ok(());
                }
            };

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %text,
                "Received message"
            );

            tokio::spawn(async move {
                let sender = TelegramBot::from_bot(bot.clone());

                if let Err(e) = bot
                    .send_chat_action(ChatId(core_msg.chat.id), ChatAction::Typing)
                    .await
                {
                    info!(error = %e, "Failed to send typing action");
                }

                let reply = match parse_command(&text) {
                    Some(Command::Start) => start_text(&profile),
                    Some(Command::Help) => help_text(),
                    Some(Command::About) => about_text(&profile),
                    None => {
                        let outcome = policy.handle_incoming_message(&text).await;
                        info!(
                            user_id = core_msg.user.id,
                            path = ?outcome.path,
                            reply_len = outcome.text.len(),
                            "step: turn answered"
                        );
                        outcome.text
                    }
                };

                if let Err(e) = sender.send_message(&core_msg.chat, &reply).await {
                    error!(error = %e, chat_id = core_msg.chat.id, "Failed to deliver reply");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
