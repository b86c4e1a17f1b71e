//! The main CV-grounded responder: one completion call with the assembled
//! system prompt and the user message.

use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs, OpenAIClient,
};
use tracing::instrument;
use twinbot_core::{Result, TwinError};

/// Produces the model-backed answer for an on-topic message.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, system_prompt: &str, user_message: &str) -> Result<String>;
}

/// Responder backed by an OpenAI-compatible completion call.
#[derive(Clone)]
pub struct OpenAiResponder {
    client: OpenAIClient,
    model: String,
}

impl OpenAiResponder {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl Responder for OpenAiResponder {
    #[instrument(skip(self, system_prompt, user_message))]
    async fn respond(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        let messages: Vec<openai_client::ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system_prompt.to_string())
                .build()
                .map_err(|e| TwinError::Generation(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user_message.to_string())
                .build()
                .map_err(|e| TwinError::Generation(e.to_string()))?
                .into(),
        ];

        self.client
            .chat_completion(&self.model, messages)
            .await
            .map_err(|e| TwinError::Generation(e.to_string()))
    }
}
