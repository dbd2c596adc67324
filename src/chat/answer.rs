/// Display form of an answer: a summary line plus an optional collapsible
/// remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerView {
    pub summary: String,
    pub detail: Option<String>,
}

impl AnswerView {
    /// Splits at the first line break. Text without a break has no detail.
    pub fn from_text(text: &str) -> Self {
        match text.split_once('\n') {
            Some((summary, rest)) => Self {
                summary: summary.to_string(),
                detail: Some(rest.to_string()),
            },
            None => Self {
                summary: text.to_string(),
                detail: None,
            },
        }
    }

    pub fn is_expandable(&self) -> bool {
        self.detail.is_some()
    }
}
