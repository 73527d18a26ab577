use services::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The requested topic or lesson does not exist.
    NotFound,
    /// The topic exists but has no questions yet.
    EmptyQuiz,
    /// The quiz refused the action, e.g. Next on an unanswered question.
    Rejected,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::NotFound => "This lesson is not available yet.",
            ViewError::EmptyQuiz => "Practice questions for this topic are coming soon!",
            ViewError::Rejected => "That action is not available right now.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<QuizError> for ViewError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Empty => ViewError::EmptyQuiz,
            QuizError::Completed
            | QuizError::Unanswered { .. }
            | QuizError::Incomplete { .. }
            | QuizError::AtStart
            | QuizError::AtEnd
            | QuizError::OutOfRange { .. }
            | QuizError::Answer(_) => ViewError::Rejected,
            _ => ViewError::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_errors_map_to_view_errors() {
        assert_eq!(ViewError::from(QuizError::Empty), ViewError::EmptyQuiz);
        assert_eq!(
            ViewError::from(QuizError::Unanswered { position: 0 }),
            ViewError::Rejected
        );
        assert!(ViewError::EmptyQuiz.message().contains("coming soon"));
    }
}
