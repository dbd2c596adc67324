//! Extension point for a future hosted language-model backend.

mod placeholder;

pub use placeholder::{PlaceholderAssistant, PLACEHOLDER_REPLY};

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteReply {
    pub text: String,
}

pub trait RemoteAssistant: Send + Sync {
    fn name(&self) -> &str;
    fn complete(&self, prompt: &str) -> Result<RemoteReply>;
}
