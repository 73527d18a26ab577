use physix_core::grading::percentage;

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    /// Zero-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub is_complete: bool,
}

impl QuizProgress {
    /// `"Question i of n"`, one-based.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.position + 1, self.total)
    }

    /// `round(100 * (position + 1) / total)`; zero for an empty quiz.
    #[must_use]
    pub fn percent(&self) -> u8 {
        percentage(self.position + 1, self.total).unwrap_or(0)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.position + 1 >= self.total
    }

    #[must_use]
    pub fn all_answered(&self) -> bool {
        self.answered == self.total
    }
}

/// Marker in the question dot strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionDot {
    Current,
    Answered,
    Unanswered,
}
