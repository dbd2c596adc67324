pub mod answer;
pub mod pacing;
pub mod quick_questions;
pub mod router;

pub use answer::AnswerView;
pub use pacing::Pacing;
pub use quick_questions::QuickQuestions;
pub use router::{QueryRouter, RuleKind};

use crate::assistant::{RemoteAssistant, RemoteReply};
use crate::config::AppConfig;
use crate::profile::ProfileStore;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}

/// Display side of a chat session.
pub trait ChatView {
    fn show_message(&mut self, message: &ChatMessage);
    fn show_thinking(&mut self);
    fn clear_thinking(&mut self);
}

/// Drives one conversation: pacing, routing against the current profile
/// snapshot, and the transcript.
pub struct ChatSession {
    store: Arc<ProfileStore>,
    router: QueryRouter,
    pacing: Pacing,
    quick_questions: QuickQuestions,
    remote: Box<dyn RemoteAssistant>,
    remote_allowed: bool,
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(store: Arc<ProfileStore>, pacing: Pacing, remote: Box<dyn RemoteAssistant>) -> Self {
        Self {
            store,
            router: QueryRouter::new(),
            pacing,
            quick_questions: QuickQuestions::default(),
            remote,
            remote_allowed: false,
            transcript: Vec::new(),
        }
    }

    pub fn from_config(
        config: &AppConfig,
        store: Arc<ProfileStore>,
        remote: Box<dyn RemoteAssistant>,
    ) -> Self {
        Self::new(store, Pacing::from_settings(&config.pacing), remote)
            .with_quick_questions(QuickQuestions::new(config.chat.quick_questions.clone()))
            .with_remote_allowed(config.remote.remote_allowed)
    }

    pub fn with_quick_questions(mut self, quick_questions: QuickQuestions) -> Self {
        self.quick_questions = quick_questions;
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_remote_allowed(mut self, remote_allowed: bool) -> Self {
        self.remote_allowed = remote_allowed;
        self
    }

    pub fn quick_questions(&self) -> &QuickQuestions {
        &self.quick_questions
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Answers one user query. Blank input is ignored and yields `None`.
    pub fn submit<V: ChatView + ?Sized>(&mut self, input: &str, view: &mut V) -> Option<String> {
        let query = input.trim();
        if query.is_empty() {
            return None;
        }
        Some(self.process(query, view))
    }

    /// Asks the quick question at the 1-based `position`.
    pub fn ask_quick<V: ChatView + ?Sized>(&mut self, position: usize, view: &mut V) -> Result<String> {
        let query = self
            .quick_questions
            .get(position)
            .map(str::to_string)
            .with_context(|| {
                format!(
                    "No quick question #{position}; choose 1-{}.",
                    self.quick_questions.len()
                )
            })?;
        Ok(self.process(&query, view))
    }

    /// Forwards a prompt to the remote assistant extension point.
    pub fn remote_preview(&self, prompt: &str) -> Result<RemoteReply> {
        if !self.remote_allowed {
            bail!(
                "Remote assistant is disabled. Set `remote.remote_allowed = true` in config.toml to enable `{}`.",
                self.remote.name()
            );
        }
        self.remote.complete(prompt)
    }

    fn process<V: ChatView + ?Sized>(&mut self, query: &str, view: &mut V) -> String {
        let user_message = ChatMessage::new(ChatRole::User, query);
        view.show_message(&user_message);
        self.transcript.push(user_message);

        view.show_thinking();
        self.pacing.pause();
        view.clear_thinking();

        let snapshot = self.store.snapshot();
        let rule = self.router.classify(query);
        let answer = self.router.answer(query, &snapshot.document);
        debug!(
            "event=chat_answer rule={} fingerprint={}",
            rule.as_str(),
            snapshot.fingerprint.as_deref().unwrap_or("-")
        );

        let reply = ChatMessage::new(ChatRole::Assistant, answer.clone());
        view.show_message(&reply);
        self.transcript.push(reply);
        answer
    }
}
