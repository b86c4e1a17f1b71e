//! Rule-based fallback responder: deterministic keyword-to-template mapping
//! used when the LLM path is unavailable or fails.
//!
//! Total function: always returns a non-empty string, never fails. The rule
//! list is ordered and the first match wins; keywords are matched by
//! case-insensitive substring containment, keeping the original bilingual
//! (Spanish/English) vocabulary.

use crate::profile::CvProfile;

/// A keyword-set to template rule. Matching is substring containment over the
/// lower-cased message.
struct Rule {
    keywords: &'static [&'static str],
    template: fn(&CvProfile) -> String,
}

const RULES: &[Rule] = &[
    Rule {
        keywords: &["hola", "hello", "hi", "hey"],
        template: intro_template,
    },
    Rule {
        keywords: &["experiencia", "experience", "skills", "tecnología", "trabajo"],
        template: experience_template,
    },
    Rule {
        keywords: &["proyecto", "project", "portfolio", "casos"],
        template: projects_template,
    },
    Rule {
        keywords: &["disponible", "available", "contratar", "hire", "colaborar"],
        template: availability_template,
    },
    Rule {
        keywords: &["contacto", "contact"],
        template: contact_template,
    },
    Rule {
        keywords: &["precio", "coste", "tarifa", "presupuesto", "price", "budget"],
        template: pricing_template,
    },
    Rule {
        keywords: &[
            "inteligencia artificial",
            "artificial intelligence",
            "machine learning",
            "crewai",
            "langgraph",
        ],
        template: ai_topic_template,
    },
    Rule {
        keywords: &["deepseek"],
        template: deepseek_template,
    },
];

/// Deterministic responder over the loaded profile. Stateless with respect to
/// the message; safe for unsynchronized concurrent use.
#[derive(Clone)]
pub struct FallbackResponder {
    profile: CvProfile,
}

impl FallbackResponder {
    pub fn new(profile: CvProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &CvProfile {
        &self.profile
    }

    /// Returns the canned answer for `message`. First matching rule wins;
    /// with no match, the generic default template.
    pub fn respond(&self, message: &str) -> String {
        let lower = message.to_lowercase();
        for rule in RULES {
            if rule.keywords.iter().any(|kw| lower.contains(kw)) {
                return (rule.template)(&self.profile);
            }
        }
        default_template(&self.profile)
    }
}

fn intro_template(p: &CvProfile) -> String {
    format!(
        "Hi! I'm {name} — {bio}.\n\n\
         Title: {title}\n\
         Location: {location}\n\
         Tech stack: {skills}\n\
         {availability}\n\n\
         What would you like to know?",
        name = p.name,
        bio = p.bio,
        title = p.title,
        location = p.location,
        skills = p.skills_joined(),
        availability = p.availability,
    )
}

fn experience_template(p: &CvProfile) -> String {
    let mut text = format!("Professional experience of {}:\n", p.name);
    if let Some(current) = p.current_experience() {
        text.push_str(&format!(
            "\nCurrent: {role} at {company} ({years})\nHighlights: {highlights}\n",
            role = current.role,
            company = current.company,
            years = current.years,
            highlights = current.highlights,
        ));
    }
    if let Some(previous) = p.previous_experience() {
        text.push_str(&format!(
            "\nPrevious: {role} at {company} ({years})\n{highlights}\n",
            role = previous.role,
            company = previous.company,
            years = previous.years,
            highlights = previous.highlights,
        ));
    }
    text.push_str(&format!(
        "\nTech stack: {}\n\nAny specific technology you want to hear about?",
        p.skills_joined()
    ));
    text
}

fn projects_template(p: &CvProfile) -> String {
    let mut text = String::from("Selected projects:\n");
    for (i, project) in p.projects.iter().enumerate() {
        text.push_str(&format!(
            "\n{n}. {name}\n   Tech: {tech}\n   {description}\n",
            n = i + 1,
            name = project.name,
            tech = project.tech,
            description = project.description,
        ));
    }
    text.push_str("\nInterested in the technical details of any of them?");
    text
}

fn availability_template(p: &CvProfile) -> String {
    format!(
        "Availability of {name}: {availability}\n\n\
         To start a collaboration, share your contact email, the company or \
         project, a short description of the technical challenge, and the \
         expected timeline.",
        name = p.name,
        availability = p.availability,
    )
}

fn contact_template(p: &CvProfile) -> String {
    format!(
        "To get in touch with {name} ({title}), leave your contact email and a \
         short description of what you need; you will get an answer as soon as \
         possible.",
        name = p.name,
        title = p.title,
    )
}

fn pricing_template(p: &CvProfile) -> String {
    format!(
        "As {title}, {name} scopes every engagement individually: describe the \
         project, the timeline and the technologies involved, and you will get \
         a tailored proposal rather than a generic rate.",
        title = p.title,
        name = p.name,
    )
}

fn ai_topic_template(p: &CvProfile) -> String {
    let mut text = format!(
        "AI experience of {name} ({title}):\n\nTech stack: {skills}\n",
        name = p.name,
        title = p.title,
        skills = p.skills_joined(),
    );
    if let Some(project) = p.projects.first() {
        text.push_str(&format!(
            "\nHighlighted project: {} ({})\n{}\n",
            project.name, project.tech, project.description
        ));
    }
    if let Some(current) = p.current_experience() {
        text.push_str(&format!(
            "\nCurrent role: {} at {}\n{}\n",
            current.role, current.company, current.highlights
        ));
    }
    text.push_str("\nAnything specific about AI you want to dig into?");
    text
}

fn deepseek_template(p: &CvProfile) -> String {
    format!(
        "DeepSeek experience of {name} ({title}):\n\n\
         API integration through OpenAI-compatible endpoints, prompt \
         optimization, multi-model configuration, and cost-aware model \
         selection.\n\n\
         DeepSeek stands out for its price/quality ratio and competitive \
         performance on code tasks.\n\n\
         Interested in adding DeepSeek to your own project?",
        name = p.name,
        title = p.title,
    )
}

fn default_template(p: &CvProfile) -> String {
    format!(
        "I'm {name}, {title}.\n\n\
         You can ask me about my experience and skills, my projects, or my \
         availability for collaborations.\n\n\
         What would you like to know more precisely?",
        name = p.name,
        title = p.title,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ExperienceEntry, ProjectEntry};

    fn jane() -> CvProfile {
        CvProfile {
            name: "Jane Doe".to_string(),
            title: "Staff Engineer".to_string(),
            location: "Madrid".to_string(),
            bio: "Systems and AI".to_string(),
            skills: vec!["Go".to_string(), "Rust".to_string()],
            availability: "Open to consulting".to_string(),
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                years: "2020-2024".to_string(),
                highlights: "Shipped things".to_string(),
            }],
            projects: vec![ProjectEntry {
                name: "Twinbot".to_string(),
                tech: "Rust".to_string(),
                description: "A CV chatbot".to_string(),
            }],
        }
    }

    /// **Test: Greeting rule matches "hola" and the reply carries the name.**
    #[test]
    fn test_greeting_contains_name() {
        let responder = FallbackResponder::new(jane());
        let reply = responder.respond("hola");
        assert!(reply.contains("Jane Doe"));
    }

    /// **Test: First matching rule wins; experience keyword picks the
    /// experience template even with a Spanish question.**
    #[test]
    fn test_experience_keyword_spanish() {
        let responder = FallbackResponder::new(jane());
        let reply = responder.respond("¿Cuál es tu experiencia?");
        assert!(reply.contains("Professional experience"));
        assert!(reply.contains("Acme"));
    }

    /// **Test: No keyword match returns the generic default template.**
    #[test]
    fn test_default_template_on_no_match() {
        let responder = FallbackResponder::new(jane());
        let reply = responder.respond("zzz qqq");
        assert!(reply.contains("Jane Doe"));
        assert!(reply.contains("Staff Engineer"));
    }

    /// **Test: A "deepseek" mention gets the dedicated DeepSeek template, not
    /// the generic default.**
    #[test]
    fn test_deepseek_keyword_gets_dedicated_template() {
        let responder = FallbackResponder::new(jane());
        let reply = responder.respond("cuéntame de DeepSeek");
        assert!(reply.contains("DeepSeek experience"));
        assert!(reply.contains("Jane Doe"));
        assert!(!reply.contains("What would you like to know more precisely?"));
    }

    /// **Test: A profile with a single experience entry never panics.**
    #[test]
    fn test_single_experience_entry_ok() {
        let responder = FallbackResponder::new(jane());
        let reply = responder.respond("tell me about your experience");
        assert!(!reply.is_empty());
    }
}
