//! Stub assistant used until a real endpoint is configured.

use super::{RemoteAssistant, RemoteReply};
use anyhow::Result;
use log::debug;

pub const PLACEHOLDER_REPLY: &str = "OpenAI integration ready. Configure API endpoint when needed.";

/// Returns a canned reply and never performs a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAssistant;

impl RemoteAssistant for PlaceholderAssistant {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn complete(&self, prompt: &str) -> Result<RemoteReply> {
        debug!("event=remote_complete provider=placeholder prompt_chars={}", prompt.chars().count());
        Ok(RemoteReply {
            text: PLACEHOLDER_REPLY.into(),
        })
    }
}
