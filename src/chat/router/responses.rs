//! Canned answers and formatters used by the query router.

use crate::profile::{ExperienceRecord, ProfileDocument};

const FRONTEND_SKILL_LIMIT: usize = 5;
const SKILL_TOOL_LIMIT: usize = 3;

pub const PROJECTS_UNAVAILABLE: &str = "Check back soon for project details.";
pub const SKILLS_UNAVAILABLE: &str = "Unable to load skills data.";
pub const EXPERIENCE_UNAVAILABLE: &str = "No experience data available.";
pub const EDUCATION_UNAVAILABLE: &str = "Education details not available.";
pub const TOOLS_UNAVAILABLE: &str = "No tools data available.";
pub const YEARS_OF_EXPERIENCE: &str = "Ankur has 11+ years of professional experience in frontend development, UI systems, and digital architecture.";
pub const FALLBACK: &str = "I'm Ankur's digital AI assistant. I can answer questions about his experience, skills, projects, tools, and education. Try asking me something specific!";

pub fn projects(profile: &ProfileDocument) -> String {
    match profile.projects() {
        Some(projects) => format!(
            "Here are the projects Ankur has worked on:\n{}",
            projects.join(", ")
        ),
        None => PROJECTS_UNAVAILABLE.into(),
    }
}

pub fn skills(profile: &ProfileDocument) -> String {
    let Some(skills) = profile.skills() else {
        return SKILLS_UNAVAILABLE.into();
    };
    let tools = profile
        .tools()
        .map(|tools| leading(tools, SKILL_TOOL_LIMIT))
        .unwrap_or_else(|| "N/A".into());
    format!(
        "Frontend: {}\nTools: {tools}",
        leading(skills, FRONTEND_SKILL_LIMIT)
    )
}

pub fn experience(profile: &ProfileDocument) -> String {
    let Some(records) = profile.experience() else {
        return EXPERIENCE_UNAVAILABLE.into();
    };
    let mut message = String::from("Ankur's Professional Background:\n\n");
    for record in records {
        message.push_str(&experience_block(record));
    }
    message
}

/// `"{company} ({years})\n{details}\n\n"` for a single record.
pub fn experience_block(record: &ExperienceRecord) -> String {
    format!(
        "{} ({})\n{}\n\n",
        record.company,
        record.years,
        record.details.join(", ")
    )
}

pub fn years(_profile: &ProfileDocument) -> String {
    YEARS_OF_EXPERIENCE.into()
}

pub fn education(profile: &ProfileDocument) -> String {
    match profile.education() {
        Some(entries) => format!("Education:\n{}", entries.join("\n")),
        None => EDUCATION_UNAVAILABLE.into(),
    }
}

pub fn tools(profile: &ProfileDocument) -> String {
    match profile.tools() {
        Some(tools) => format!("Design & Development Tools:\n{}", tools.join(", ")),
        None => TOOLS_UNAVAILABLE.into(),
    }
}

pub fn fallback(_profile: &ProfileDocument) -> String {
    FALLBACK.into()
}

fn leading(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
