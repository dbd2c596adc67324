//! Canned questions offered as one-click prompts.

pub const DEFAULT_QUICK_QUESTIONS: &[&str] = &[
    "What projects has Ankur worked on?",
    "What technologies does he specialize in?",
    "Tell me about his experience",
    "How many years has he been working?",
    "What is his education?",
];

pub fn default_quick_questions() -> Vec<String> {
    DEFAULT_QUICK_QUESTIONS
        .iter()
        .map(|question| question.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickQuestions {
    questions: Vec<String>,
}

impl QuickQuestions {
    pub fn new(questions: Vec<String>) -> Self {
        Self { questions }
    }

    /// Looks up a question by its 1-based position, as shown to the user.
    pub fn get(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.questions.get(index))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| (index + 1, question.as_str()))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuickQuestions {
    fn default() -> Self {
        Self::new(default_quick_questions())
    }
}
