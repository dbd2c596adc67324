use portfolio_assistant::chat::router::responses;
use portfolio_assistant::chat::{QueryRouter, RuleKind};
use portfolio_assistant::profile::ProfileDocument;

use crate::support::profile_fixture::{experience, sample_profile};

const CATEGORY_QUERIES: &[(&str, &str)] = &[
    ("Show me your projects", responses::PROJECTS_UNAVAILABLE),
    ("What skills do you have?", responses::SKILLS_UNAVAILABLE),
    ("Tell me about your experience", responses::EXPERIENCE_UNAVAILABLE),
    ("What is your education?", responses::EDUCATION_UNAVAILABLE),
    ("Which tools do you use?", responses::TOOLS_UNAVAILABLE),
];

#[test]
fn project_queries_join_every_project() {
    let answer = QueryRouter::new().answer("Any PROJECT highlights?", &sample_profile());
    assert_eq!(
        answer,
        "Here are the projects Ankur has worked on:\nE-commerce Redesign, Design System, Analytics Dashboard"
    );
}

#[test]
fn skill_queries_list_at_most_five_skills_and_three_tools() {
    let router = QueryRouter::new();
    let profile = sample_profile();
    for query in ["skills?", "Which technology stack?", "What do you specialize in"] {
        let answer = router.answer(query, &profile);
        let (frontend, tools) = answer
            .split_once('\n')
            .unwrap_or_else(|| panic!("expected two lines for {query:?}: {answer}"));
        assert_eq!(frontend, "Frontend: HTML5, CSS3, JavaScript, React, Sass");
        assert_eq!(tools, "Tools: Figma, Photoshop, VS Code");
    }
}

#[test]
fn short_lists_are_not_padded() {
    let profile = ProfileDocument {
        skills: Some(vec!["Rust".into()]),
        tools: Some(vec!["Git".into()]),
        ..ProfileDocument::default()
    };
    assert_eq!(
        QueryRouter::new().answer("skill", &profile),
        "Frontend: Rust\nTools: Git"
    );
}

#[test]
fn experience_blocks_follow_document_order() {
    let answer = QueryRouter::new().answer("experience", &sample_profile());
    let pixel = answer
        .find("Pixel Labs (2018 - Present)\nFrontend architecture, Design systems, Team leadership\n\n")
        .expect("first record missing");
    let webworks = answer
        .find("WebWorks (2013 - 2018)\nResponsive sites, UI prototyping\n\n")
        .expect("second record missing");
    assert!(pixel < webworks, "records out of order: {answer}");
    assert!(answer.starts_with("Ankur's Professional Background:\n\n"));
}

#[test]
fn record_without_details_renders_empty_detail_line() {
    let profile = ProfileDocument {
        experience: Some(vec![experience("Solo", "2020", &[])]),
        ..ProfileDocument::default()
    };
    assert_eq!(
        QueryRouter::new().answer("architecture", &profile),
        "Ankur's Professional Background:\n\nSolo (2020)\n\n\n"
    );
}

#[test]
fn architecture_plus_experience_hits_experience_rule() {
    let router = QueryRouter::new();
    let query = "What architecture experience do you have?";
    assert_eq!(router.classify(query), RuleKind::Experience);
    assert_ne!(router.answer(query, &sample_profile()), responses::YEARS_OF_EXPERIENCE);
}

#[test]
fn year_alone_returns_years_sentence() {
    let router = QueryRouter::new();
    assert_eq!(
        router.answer("How long, in years?", &sample_profile()),
        responses::YEARS_OF_EXPERIENCE
    );
    assert_eq!(
        router.answer("years", &ProfileDocument::default()),
        "Ankur has 11+ years of professional experience in frontend development, UI systems, and digital architecture."
    );
}

#[test]
fn unmatched_query_returns_fallback_verbatim() {
    assert_eq!(
        QueryRouter::new().answer("hello there", &sample_profile()),
        "I'm Ankur's digital AI assistant. I can answer questions about his experience, skills, projects, tools, and education. Try asking me something specific!"
    );
}

#[test]
fn repeated_queries_are_idempotent() {
    let router = QueryRouter::new();
    let profile = sample_profile();
    for query in ["projects", "skills", "experience", "year", "education", "tools", "hi"] {
        assert_eq!(router.answer(query, &profile), router.answer(query, &profile));
    }
}

#[test]
fn empty_profile_degrades_every_category() {
    let router = QueryRouter::new();
    let empty = ProfileDocument::default();
    for (query, expected) in CATEGORY_QUERIES {
        assert_eq!(router.answer(query, &empty), *expected, "query {query:?}");
    }
}

#[test]
fn missing_tools_only_affects_tool_segments() {
    let mut profile = sample_profile();
    profile.tools = None;
    let router = QueryRouter::new();
    assert!(router.answer("skills", &profile).ends_with("Tools: N/A"));
    assert_eq!(router.answer("tools", &profile), responses::TOOLS_UNAVAILABLE);
    assert!(router.answer("projects", &profile).contains("Design System"));
}
