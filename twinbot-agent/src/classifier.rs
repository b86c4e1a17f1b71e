//! Topic classifier: labels an incoming turn as on-topic or off-topic with
//! respect to the CV subject, via a narrow second completion call.
//!
//! Two verdict protocols exist across the system's history and both are
//! supported: a free-text `OK`/`OFF` token (fail-open on anything that is not
//! exactly `OFF`) and a structured JSON verdict where the boolean is
//! authoritative. Call failures always propagate; the gate decides to fall
//! back, never this layer.

use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs, OpenAIClient,
};
use serde::Deserialize;
use tracing::{debug, instrument};
use twinbot_core::{Result, TopicVerdict, TwinError};

/// Shape of the classifier's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictProtocol {
    /// The model emits `OK` or `OFF`; anything else counts as on-topic.
    FreeText,
    /// The model emits `{"off_topic": bool, "reason": "..."}`.
    Structured,
}

/// Classifies one conversational turn. A slice input is multiple independent
/// utterances classified jointly as a single turn.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, utterances: &[String]) -> Result<TopicVerdict>;
}

/// Parses the free-text protocol. Fail-open: only a reply that is exactly
/// `OFF` after trimming and upper-casing is off-topic, so a malformed reply
/// never blocks a legitimate user.
pub fn parse_free_text_verdict(raw: &str) -> TopicVerdict {
    if raw.trim().to_uppercase() == "OFF" {
        TopicVerdict::off_topic("classifier replied OFF")
    } else {
        TopicVerdict::on_topic()
    }
}

#[derive(Deserialize)]
struct VerdictPayload {
    off_topic: bool,
    #[serde(default)]
    reason: Option<String>,
}

/// Parses the structured protocol. The `off_topic` boolean is authoritative;
/// unparseable output is a classification error (the gate will fall back).
pub fn parse_structured_verdict(raw: &str) -> Result<TopicVerdict> {
    let payload: VerdictPayload = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| TwinError::Classification(format!("bad verdict JSON: {}", e)))?;
    Ok(TopicVerdict {
        off_topic: payload.off_topic,
        reason: payload.reason,
    })
}

/// Models often wrap JSON in a Markdown code fence; strip one if present.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

/// Classifier backed by an OpenAI-compatible completion call.
#[derive(Clone)]
pub struct OpenAiClassifier {
    client: OpenAIClient,
    model: String,
    instructions: String,
    protocol: VerdictProtocol,
}

impl OpenAiClassifier {
    pub fn new(
        client: OpenAIClient,
        model: impl Into<String>,
        instructions: impl Into<String>,
        protocol: VerdictProtocol,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            instructions: instructions.into(),
            protocol,
        }
    }

    /// Appends the JSON output contract when the structured protocol is used.
    fn effective_instructions(&self) -> String {
        match self.protocol {
            VerdictProtocol::FreeText => self.instructions.clone(),
            VerdictProtocol::Structured => format!(
                "{}\nAnswer only with JSON: {{\"off_topic\": true|false, \"reason\": \"...\"}}",
                self.instructions
            ),
        }
    }
}

#[async_trait]
impl Classifier for OpenAiClassifier {
    #[instrument(skip(self, utterances))]
    async fn classify(&self, utterances: &[String]) -> Result<TopicVerdict> {
        let input = utterances.join("\n");
        let messages: Vec<openai_client::ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.effective_instructions())
                .build()
                .map_err(|e| TwinError::Classification(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(input)
                .build()
                .map_err(|e| TwinError::Classification(e.to_string()))?
                .into(),
        ];

        let raw = self
            .client
            .chat_completion(&self.model, messages)
            .await
            .map_err(|e| TwinError::Classification(e.to_string()))?;

        debug!(raw = %raw, protocol = ?self.protocol, "classifier reply");

        match self.protocol {
            VerdictProtocol::FreeText => Ok(parse_free_text_verdict(&raw)),
            VerdictProtocol::Structured => parse_structured_verdict(&raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: Only an exact OFF (after trim/uppercase) is off-topic; the
    /// protocol fails open on everything else.**
    #[test]
    fn test_free_text_fail_open() {
        assert!(parse_free_text_verdict("OFF").off_topic);
        assert!(parse_free_text_verdict("  off \n").off_topic);
        assert!(parse_free_text_verdict("Off").off_topic);

        assert!(!parse_free_text_verdict("OK").off_topic);
        assert!(!parse_free_text_verdict("OFF-TOPIC").off_topic);
        assert!(!parse_free_text_verdict("The message is OFF").off_topic);
        assert!(!parse_free_text_verdict("").off_topic);
        assert!(!parse_free_text_verdict("no sé").off_topic);
    }

    /// **Test: Structured verdict boolean is authoritative, reason optional.**
    #[test]
    fn test_structured_verdict_parsing() {
        let v = parse_structured_verdict(r#"{"off_topic": true, "reason": "weather"}"#).unwrap();
        assert!(v.off_topic);
        assert_eq!(v.reason.as_deref(), Some("weather"));

        let v = parse_structured_verdict(r#"{"off_topic": false}"#).unwrap();
        assert!(!v.off_topic);
        assert!(v.reason.is_none());
    }

    /// **Test: A code-fenced JSON verdict still parses.**
    #[test]
    fn test_structured_verdict_code_fence() {
        let raw = "```json\n{\"off_topic\": true}\n```";
        assert!(parse_structured_verdict(raw).unwrap().off_topic);
    }

    /// **Test: Structured-mode instructions carry the JSON contract and never
    /// mention the OK/OFF tokens.**
    #[test]
    fn test_structured_instructions_carry_json_contract() {
        let client = openai_client::OpenAIClient::new("sk-test".to_string());
        let base = "Decide whether the input relates to the professional background of Jane Doe.";
        let classifier = OpenAiClassifier::new(
            client,
            "deepseek-chat",
            base,
            VerdictProtocol::Structured,
        );

        let instructions = classifier.effective_instructions();
        assert!(instructions.starts_with(base));
        assert!(instructions.contains("\"off_topic\""));
        assert!(!instructions.contains("'OK'"));
        assert!(!instructions.contains("'OFF'"));
    }

    /// **Test: Malformed structured output is a Classification error, not a verdict.**
    #[test]
    fn test_structured_verdict_malformed_is_error() {
        assert!(matches!(
            parse_structured_verdict("OFF"),
            Err(TwinError::Classification(_))
        ));
        assert!(matches!(
            parse_structured_verdict("{\"off\": 1}"),
            Err(TwinError::Classification(_))
        ));
    }
}
