//! System prompt assembly and the CV search capability.
//!
//! The system prompt embeds the whole CV verbatim between explicit delimiter
//! markers so the responder can be instructed to use only the text between
//! them. No truncation: completeness is favored over token economy.

use crate::classifier::VerdictProtocol;

/// Start marker for the embedded CV block.
pub const CV_BLOCK_START: &str = "===CV_START===";
/// End marker for the embedded CV block.
pub const CV_BLOCK_END: &str = "===CV_END===";

/// Returned by [`search_cv`] when no line of the CV matches the query.
pub const SEARCH_NOT_FOUND: &str = "No matching information found in the CV.";

/// Maximum number of matching lines returned by [`search_cv`].
pub const SEARCH_MAX_LINES: usize = 20;

/// Persona the responder is instructed to adopt. Immutable after construction;
/// `cv_text` is denormalized from the loaded CV document.
#[derive(Debug, Clone)]
pub struct PersonaConfig {
    pub display_name: String,
    pub tone_description: String,
    pub cv_text: String,
}

impl PersonaConfig {
    pub fn new(
        display_name: impl Into<String>,
        tone_description: impl Into<String>,
        cv_text: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            tone_description: tone_description.into(),
            cv_text: cv_text.into(),
        }
    }
}

/// Builds the system prompt for the main responder. Pure function: the same
/// persona always yields the same prompt text.
pub fn build_system_prompt(persona: &PersonaConfig) -> String {
    format!(
        "You are the digital twin of {name}, answering questions about their \
         professional background. Reply in a {tone} manner.\n\
         Use only the information between the {start} and {end} markers below; \
         if the answer is not there, say so instead of inventing it.\n\
         {start}\n{cv}\n{end}",
        name = persona.display_name,
        tone = persona.tone_description,
        start = CV_BLOCK_START,
        end = CV_BLOCK_END,
        cv = persona.cv_text,
    )
}

/// Builds the instructions for the topic classifier.
///
/// The free-text variant mandates the exact OK/OFF token. The structured
/// variant states only the decision to make; the JSON output contract is
/// appended by the classifier itself, so the two never contradict.
pub fn build_classifier_prompt(persona: &PersonaConfig, protocol: VerdictProtocol) -> String {
    match protocol {
        VerdictProtocol::FreeText => format!(
            "Reply with exactly 'OK' if the input relates to the professional \
             background of {name}.\n\
             Reply with exactly 'OFF' if it does not.",
            name = persona.display_name,
        ),
        VerdictProtocol::Structured => format!(
            "Decide whether the input relates to the professional background \
             of {name}.",
            name = persona.display_name,
        ),
    }
}

/// Case-insensitive substring search over the CV, line by line.
///
/// Returns at most [`SEARCH_MAX_LINES`] matching lines joined by newlines, in
/// original line order, or [`SEARCH_NOT_FOUND`] when nothing matches.
pub fn search_cv(cv_text: &str, query: &str) -> String {
    let needle = query.to_lowercase();
    let hits: Vec<&str> = cv_text
        .lines()
        .filter(|line| line.to_lowercase().contains(&needle))
        .take(SEARCH_MAX_LINES)
        .collect();
    if hits.is_empty() {
        SEARCH_NOT_FOUND.to_string()
    } else {
        hits.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona() -> PersonaConfig {
        PersonaConfig::new(
            "Jane Doe",
            "brief, honest and professional",
            "Name: Jane Doe\nSkills: Go, Rust",
        )
    }

    /// **Test: System prompt is deterministic and embeds the full CV between markers.**
    #[test]
    fn test_system_prompt_deterministic_and_delimited() {
        let p = persona();
        let prompt = build_system_prompt(&p);
        assert_eq!(prompt, build_system_prompt(&p));
        let start = prompt.find(CV_BLOCK_START).unwrap();
        let end = prompt.rfind(CV_BLOCK_END).unwrap();
        assert!(start < end);
        assert!(prompt[start..end].contains("Skills: Go, Rust"));
    }

    /// **Test: The classifier prompt matches its protocol — tokens for
    /// free-text, no OK/OFF mandate for structured.**
    #[test]
    fn test_classifier_prompt_per_protocol() {
        let p = persona();
        let free = build_classifier_prompt(&p, VerdictProtocol::FreeText);
        assert!(free.contains("'OK'"));
        assert!(free.contains("'OFF'"));

        let structured = build_classifier_prompt(&p, VerdictProtocol::Structured);
        assert!(structured.contains("Jane Doe"));
        assert!(!structured.contains("'OK'"));
        assert!(!structured.contains("'OFF'"));
    }

    /// **Test: search_cv is case-insensitive substring matching in line order.**
    #[test]
    fn test_search_cv_case_insensitive_order() {
        let cv = "Name: Jane Doe\nSkills: Go, Rust\nRust projects: twinbot";
        assert_eq!(
            search_cv(cv, "rust"),
            "Skills: Go, Rust\nRust projects: twinbot"
        );
        assert_eq!(search_cv(cv, "RUST"), search_cv(cv, "rust"));
    }

    /// **Test: search_cv caps results at 20 lines.**
    #[test]
    fn test_search_cv_caps_at_twenty() {
        let cv: String = (0..50)
            .map(|i| format!("rust line {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let result = search_cv(&cv, "rust");
        assert_eq!(result.lines().count(), SEARCH_MAX_LINES);
        assert!(result.starts_with("rust line 0"));
    }

    /// **Test: search_cv returns the fixed sentinel on zero matches.**
    #[test]
    fn test_search_cv_not_found_sentinel() {
        assert_eq!(search_cv("Name: Jane Doe", "kubernetes"), SEARCH_NOT_FOUND);
        assert_eq!(search_cv("", "anything"), SEARCH_NOT_FOUND);
    }
}
