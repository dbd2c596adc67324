//! Deterministic keyword router that maps a chat query to a canned answer.
//!
//! Rules are evaluated in order and the first match wins. The keyword sets
//! overlap, so the order below is part of the observable behavior: any query
//! containing "experience" is answered by [`RuleKind::Experience`] before
//! [`RuleKind::Years`] is consulted, which leaves the years rule reachable
//! only through "year".

pub mod responses;

use crate::profile::ProfileDocument;

/// Identifies the rule that produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Projects,
    Skills,
    Experience,
    Years,
    Education,
    Tools,
    Fallback,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Years => "years",
            Self::Education => "education",
            Self::Tools => "tools",
            Self::Fallback => "fallback",
        }
    }
}

struct Rule {
    kind: RuleKind,
    matches: fn(&str) -> bool,
    respond: fn(&ProfileDocument) -> String,
}

const RULES: &[Rule] = &[
    Rule {
        kind: RuleKind::Projects,
        matches: |q| q.contains("project"),
        respond: responses::projects,
    },
    Rule {
        kind: RuleKind::Skills,
        matches: |q| q.contains("technology") || q.contains("specialize") || q.contains("skill"),
        respond: responses::skills,
    },
    Rule {
        kind: RuleKind::Experience,
        matches: |q| q.contains("architecture") || q.contains("experience"),
        respond: responses::experience,
    },
    Rule {
        kind: RuleKind::Years,
        matches: |q| q.contains("year") || (q.contains("experience") && q.contains("many")),
        respond: responses::years,
    },
    Rule {
        kind: RuleKind::Education,
        matches: |q| q.contains("education"),
        respond: responses::education,
    },
    Rule {
        kind: RuleKind::Tools,
        matches: |q| q.contains("tool"),
        respond: responses::tools,
    },
];

/// Stateless router; every call is a pure function of query and profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryRouter;

impl QueryRouter {
    pub fn new() -> Self {
        Self
    }

    /// Returns the rule a query would be routed to.
    pub fn classify(&self, query: &str) -> RuleKind {
        let normalized = query.to_lowercase();
        RULES
            .iter()
            .find(|rule| (rule.matches)(&normalized))
            .map(|rule| rule.kind)
            .unwrap_or(RuleKind::Fallback)
    }

    /// Answers `query` from `profile`. Never fails; missing data yields a
    /// field-specific "unavailable" message.
    pub fn answer(&self, query: &str, profile: &ProfileDocument) -> String {
        let normalized = query.to_lowercase();
        match RULES.iter().find(|rule| (rule.matches)(&normalized)) {
            Some(rule) => (rule.respond)(profile),
            None => responses::fallback(profile),
        }
    }
}
