//! The response policy: classifier → responder → fallback.
//!
//! Per inbound message the gate produces exactly one outbound text. The
//! classifier verdict chooses between the fixed refusal and the model-backed
//! answer; any error on either external call takes the fallback edge. When AI
//! is not configured the policy is built in a permanent fallback bypass,
//! decided once at startup.

use std::sync::Arc;

use tracing::{info, instrument, warn};
use twinbot_core::{TurnOutcome, TurnPath};

use crate::classifier::Classifier;
use crate::fallback::FallbackResponder;
use crate::responder::Responder;

/// The constant off-topic reply. The same literal every time: no model call is
/// spent on a rejected turn and tests can compare verbatim.
pub const OFF_TOPIC_REFUSAL: &str =
    "Sorry, I can only talk about the professional background of the person I represent. 🤖🚀";

/// Decides, for each incoming message, whether to answer via the model,
/// refuse, or fall back. Stateless across turns; all dependencies are
/// immutable after construction and safe for concurrent reads.
pub struct ResponsePolicy {
    classifier: Option<Arc<dyn Classifier>>,
    responder: Option<Arc<dyn Responder>>,
    system_prompt: String,
    fallback: FallbackResponder,
}

impl ResponsePolicy {
    /// Policy with the full LLM path. Pass `classifier: None` to bypass topic
    /// gating and send every message to the responder.
    pub fn new(
        classifier: Option<Arc<dyn Classifier>>,
        responder: Arc<dyn Responder>,
        system_prompt: impl Into<String>,
        fallback: FallbackResponder,
    ) -> Self {
        Self {
            classifier,
            responder: Some(responder),
            system_prompt: system_prompt.into(),
            fallback,
        }
    }

    /// Policy with AI disabled (no credentials): every turn goes straight to
    /// the fallback responder.
    pub fn ai_disabled(fallback: FallbackResponder) -> Self {
        Self {
            classifier: None,
            responder: None,
            system_prompt: String::new(),
            fallback,
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.responder.is_some()
    }

    /// Handles one inbound message and returns the single outbound text.
    ///
    /// Never fails and never returns an empty reply: the fallback responder is
    /// total and absorbs every per-message error.
    #[instrument(skip(self, user_message))]
    pub async fn handle_incoming_message(&self, user_message: &str) -> TurnOutcome {
        let responder = match &self.responder {
            Some(r) => r,
            None => {
                info!("step: AI disabled, permanent fallback bypass");
                return self.fallback_outcome(user_message);
            }
        };

        if let Some(classifier) = &self.classifier {
            info!("step: classifying");
            match classifier.classify(&[user_message.to_string()]).await {
                Ok(verdict) if verdict.off_topic => {
                    info!(reason = ?verdict.reason, "step: off-topic, refusing");
                    return TurnOutcome {
                        text: OFF_TOPIC_REFUSAL.to_string(),
                        path: TurnPath::Refusal,
                    };
                }
                Ok(_) => {
                    info!("step: on-topic");
                }
                Err(e) => {
                    warn!(error = %e, "step: classifier failed, falling back");
                    return self.fallback_outcome(user_message);
                }
            }
        } else {
            info!("step: classifier bypassed");
        }

        info!("step: responding");
        match responder.respond(&self.system_prompt, user_message).await {
            Ok(text) => TurnOutcome {
                text,
                path: TurnPath::Llm,
            },
            Err(e) => {
                warn!(error = %e, "step: responder failed, falling back");
                self.fallback_outcome(user_message)
            }
        }
    }

    fn fallback_outcome(&self, user_message: &str) -> TurnOutcome {
        TurnOutcome {
            text: self.fallback.respond(user_message),
            path: TurnPath::Fallback,
        }
    }
}
