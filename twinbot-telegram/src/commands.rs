//! Bot commands and their canned replies, built from the loaded profile.

use twinbot_agent::CvProfile;

/// Commands the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    About,
}

/// Parses a command from message text. Accepts the `/cmd@botname` form;
/// returns None for non-commands and unknown commands.
pub fn parse_command(text: &str) -> Option<Command> {
    let first = text.trim().split_whitespace().next()?;
    if !first.starts_with('/') {
        return None;
    }
    let name = first.split('@').next().unwrap_or(first);
    match name {
        "/start" => Some(Command::Start),
        "/help" => Some(Command::Help),
        "/about" => Some(Command::About),
        _ => None,
    }
}

/// Welcome text for /start.
pub fn start_text(profile: &CvProfile) -> String {
    format!(
        "Welcome! I'm the digital twin of {name}.\n\n\
         {bio}\n\n\
         Location: {location}\n\
         Current role: {title}\n\
         {availability}\n\n\
         Commands: /help for options, /about for detailed experience.\n\
         Ask me anything about my professional background!",
        name = profile.name,
        bio = profile.bio,
        location = profile.location,
        title = profile.title,
        availability = profile.availability,
    )
}

/// Usage text for /help.
pub fn help_text() -> String {
    "You can ask about:\n\
     - Technical experience: skills, projects, technologies\n\
     - Availability and collaborations\n\
     - Specific solutions to your technical challenge\n\n\
     Examples:\n\
     - \"What experience do you have with AI?\"\n\
     - \"Tell me about your projects\"\n\
     - \"Are you available for consulting?\"\n\n\
     Just write your question in natural language."
        .to_string()
}

/// Detailed experience text for /about.
pub fn about_text(profile: &CvProfile) -> String {
    let mut text = format!("{name}\n{title}\n", name = profile.name, title = profile.title);
    if let Some(current) = profile.current_experience() {
        text.push_str(&format!(
            "\nCurrent: {role} at {company} ({years})\n{highlights}\n",
            role = current.role,
            company = current.company,
            years = current.years,
            highlights = current.highlights,
        ));
    }
    if let Some(previous) = profile.previous_experience() {
        text.push_str(&format!(
            "\nPrevious: {role} at {company} ({years})\n{highlights}\n",
            role = previous.role,
            company = previous.company,
            years = previous.years,
            highlights = previous.highlights,
        ));
    }
    text.push_str(&format!(
        "\nTech stack: {}\n\nWant to know about any specific area?",
        profile.skills_joined()
    ));
    text
}
