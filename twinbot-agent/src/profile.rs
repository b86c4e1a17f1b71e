//! Structured CV profile used by the fallback templates and command replies.
//!
//! Loaded from CV_* environment variables with built-in defaults so the bot can
//! run without a fully configured environment. Immutable after construction.

use std::env;

/// One professional experience entry.
#[derive(Debug, Clone)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub years: String,
    pub highlights: String,
}

/// One portfolio project entry.
#[derive(Debug, Clone)]
pub struct ProjectEntry {
    pub name: String,
    pub tech: String,
    pub description: String,
}

/// The represented individual's profile data for deterministic responses.
#[derive(Debug, Clone)]
pub struct CvProfile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub availability: String,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl CvProfile {
    /// Loads the profile from CV_NAME, CV_TITLE, CV_LOCATION, CV_BIO, CV_SKILLS,
    /// CV_AVAILABILITY and the CV_EXP{1,2}_* / CV_PROJ{1,2}_* variables.
    pub fn from_env() -> Self {
        Self {
            name: env_or("CV_NAME", "Norbert Rodríguez Sagarra"),
            title: env_or("CV_TITLE", "Senior AI Engineer & Project Manager"),
            location: env_or("CV_LOCATION", "Barcelona, España"),
            bio: env_or(
                "CV_BIO",
                "Experto en IA, datos y desarrollo de soluciones innovadoras",
            ),
            skills: env_or("CV_SKILLS", "Python,AI,LangGraph,CrewAI,FastAPI,AWS")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            availability: env_or(
                "CV_AVAILABILITY",
                "Disponible para proyectos de IA y consultoría",
            ),
            experience: vec![
                ExperienceEntry {
                    company: env_or("CV_EXP1_COMPANY", "VEOLIA-AGBAR-SYNECTIC"),
                    role: env_or("CV_EXP1_ROLE", "Senior AI Engineer"),
                    years: env_or("CV_EXP1_YEARS", "2021-2024"),
                    highlights: env_or(
                        "CV_EXP1_HIGHLIGHTS",
                        "Sistemas IA empresariales para 50k+ usuarios",
                    ),
                },
                ExperienceEntry {
                    company: env_or("CV_EXP2_COMPANY", "IBM Collaborative Projects"),
                    role: env_or("CV_EXP2_ROLE", "AI Solutions Architect"),
                    years: env_or("CV_EXP2_YEARS", "2017-2022"),
                    highlights: env_or("CV_EXP2_HIGHLIGHTS", "Liderazgo de proyectos IA con Watson"),
                },
            ],
            projects: vec![
                ProjectEntry {
                    name: env_or("CV_PROJ1_NAME", "Enterprise AI Assistant Ecosystem"),
                    tech: env_or("CV_PROJ1_TECH", "LangGraph + CrewAI + Multiple LLMs"),
                    description: env_or(
                        "CV_PROJ1_DESC",
                        "Sistema completo de asistentes IA empresariales",
                    ),
                },
                ProjectEntry {
                    name: env_or("CV_PROJ2_NAME", "AI-Powered Hydroelectric Platform"),
                    tech: env_or("CV_PROJ2_TECH", "Python + TensorFlow + BigQuery"),
                    description: env_or("CV_PROJ2_DESC", "Plataforma ML para predicción energía"),
                },
            ],
        }
    }

    /// Skills as one comma-joined string for interpolation.
    pub fn skills_joined(&self) -> String {
        self.skills.join(", ")
    }

    /// Current (first) experience entry, if any.
    pub fn current_experience(&self) -> Option<&ExperienceEntry> {
        self.experience.first()
    }

    /// Previous (second) experience entry, if any.
    pub fn previous_experience(&self) -> Option<&ExperienceEntry> {
        self.experience.get(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: Profile defaults are complete enough for every template.**
    #[test]
    fn test_defaults_are_complete() {
        let profile = CvProfile::from_env();
        assert!(!profile.name.is_empty());
        assert!(!profile.skills.is_empty());
        assert!(profile.current_experience().is_some());
        assert!(profile.previous_experience().is_some());
        assert_eq!(profile.projects.len(), 2);
    }
}
