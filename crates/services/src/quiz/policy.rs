/// How an attempt is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStyle {
    /// A separate Submit action, allowed once every question is answered.
    Explicit,
    /// Advancing past the last question completes the attempt.
    OnLastAdvance,
}

/// Navigation and completion rules for one quiz screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizPolicy {
    /// Forward navigation requires the current question to be answered.
    pub gate_advance: bool,
    pub submit: SubmitStyle,
}

impl QuizPolicy {
    /// Topic practice sets and the practice slide embedded in a lesson.
    #[must_use]
    pub const fn practice() -> Self {
        Self {
            gate_advance: true,
            submit: SubmitStyle::Explicit,
        }
    }

    /// The standalone wave properties quiz: the last Next finishes the attempt.
    #[must_use]
    pub const fn guided() -> Self {
        Self {
            gate_advance: true,
            submit: SubmitStyle::OnLastAdvance,
        }
    }

    #[must_use]
    pub fn submits_on_advance(&self) -> bool {
        self.submit == SubmitStyle::OnLastAdvance
    }
}

impl Default for QuizPolicy {
    fn default() -> Self {
        Self::practice()
    }
}
