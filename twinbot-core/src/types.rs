//! Core types: user, chat, message, topic verdict, and per-turn outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound or outbound message. The bot keeps no cross-turn state,
/// so there is no reply/thread context here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub direction: MessageDirection,
    pub created_at: DateTime<Utc>,
}

/// Direction of the message (from user or from bot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

/// Verdict of the topic classifier for one conversational turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicVerdict {
    pub off_topic: bool,
    pub reason: Option<String>,
}

impl TopicVerdict {
    pub fn on_topic() -> Self {
        Self {
            off_topic: false,
            reason: None,
        }
    }

    pub fn off_topic(reason: impl Into<String>) -> Self {
        Self {
            off_topic: true,
            reason: Some(reason.into()),
        }
    }
}

/// Which path produced the outbound text for a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPath {
    /// The model-backed responder answered.
    Llm,
    /// The fixed off-topic refusal was returned.
    Refusal,
    /// The rule-based fallback responder answered.
    Fallback,
}

/// The single outbound text produced for one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub text: String,
    pub path: TurnPath,
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}
