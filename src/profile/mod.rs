//! Portfolio profile document and the store that serves snapshots of it.
//!
//! The document is read once from a static JSON (or YAML) file and never
//! mutated afterwards. Every field is optional; consumers must treat a
//! missing field and an empty list the same way.

pub mod loader;
pub mod store;

pub use loader::{ProfileLoader, ProfileSource};
pub use store::{ProfileSnapshot, ProfileStore};

use serde::{Deserialize, Serialize};

/// Structured record of the portfolio owner's facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<String>>,
}

/// One employment entry, rendered as `company (years)` plus its details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub details: Vec<String>,
}

impl ProfileDocument {
    /// Skills, or `None` when absent or empty.
    pub fn skills(&self) -> Option<&[String]> {
        non_empty(&self.skills)
    }

    pub fn tools(&self) -> Option<&[String]> {
        non_empty(&self.tools)
    }

    pub fn projects(&self) -> Option<&[String]> {
        non_empty(&self.projects)
    }

    pub fn experience(&self) -> Option<&[ExperienceRecord]> {
        non_empty(&self.experience)
    }

    pub fn education(&self) -> Option<&[String]> {
        non_empty(&self.education)
    }

    /// True when no field carries any data.
    pub fn is_empty(&self) -> bool {
        self.skills().is_none()
            && self.tools().is_none()
            && self.projects().is_none()
            && self.experience().is_none()
            && self.education().is_none()
    }
}

fn non_empty<T>(field: &Option<Vec<T>>) -> Option<&[T]> {
    field
        .as_deref()
        .filter(|items| !items.is_empty())
}
