//! # twinbot-agent
//!
//! The topic-gated response pipeline: persona and profile data, the system
//! prompt assembler, the topic classifier, the model-backed responder, the
//! rule-based fallback responder, and the [`ResponsePolicy`] gate that turns
//! one inbound message into exactly one outbound text.

pub mod classifier;
pub mod fallback;
pub mod policy;
pub mod profile;
pub mod prompt;
pub mod responder;

pub use classifier::{Classifier, OpenAiClassifier, VerdictProtocol};
pub use fallback::FallbackResponder;
pub use policy::{ResponsePolicy, OFF_TOPIC_REFUSAL};
pub use profile::{CvProfile, ExperienceEntry, ProjectEntry};
pub use prompt::{
    build_classifier_prompt, build_system_prompt, search_cv, PersonaConfig, CV_BLOCK_END,
    CV_BLOCK_START, SEARCH_NOT_FOUND,
};
pub use responder::{OpenAiResponder, Responder};
