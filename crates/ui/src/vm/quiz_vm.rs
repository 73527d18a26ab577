use physix_core::grading::Score;
use physix_core::model::{Answer, QuestionBody, TopicId};
use services::quiz::{QuestionDot, SubmitStyle};
use services::{Advance, QuizLoopService, QuizService};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Choose(usize),
    Fill(String),
    Previous,
    Next,
    Submit,
    Retry,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed(Score),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerInputVm {
    Choices(Vec<OptionVm>),
    Fill { value: String },
}

/// The forward button: Next, Submit or Finish depending on policy and position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForwardActionVm {
    pub label: &'static str,
    pub enabled: bool,
    pub intent: QuizIntent,
    pub is_submit: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionScreenVm {
    pub header: String,
    pub progress_label: String,
    pub progress_percent: u8,
    pub counter: String,
    pub prompt: String,
    pub input: AnswerInputVm,
    pub previous_label: &'static str,
    pub can_previous: bool,
    pub forward: ForwardActionVm,
    pub dots: Vec<&'static str>,
}

pub struct QuizVm {
    quiz: QuizService,
}

impl QuizVm {
    #[must_use]
    pub fn new(quiz: QuizService) -> Self {
        Self { quiz }
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizService {
        &self.quiz
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.quiz.is_complete()
    }

    #[must_use]
    pub fn is_guided(&self) -> bool {
        self.quiz.policy().submits_on_advance()
    }

    /// Everything the question card renders. `None` once the quiz is complete.
    #[must_use]
    pub fn screen(&self) -> Option<QuestionScreenVm> {
        if self.quiz.is_complete() {
            return None;
        }
        let question = self.quiz.current_question()?;
        let position = self.quiz.current_position();
        let progress = self.quiz.progress();

        let input = match question.body() {
            QuestionBody::MultipleChoice { options, .. } => {
                let selected = self.quiz.answer(position).and_then(Answer::as_index);
                AnswerInputVm::Choices(
                    options
                        .iter()
                        .enumerate()
                        .map(|(index, text)| OptionVm {
                            index,
                            letter: option_letter(index),
                            text: text.clone(),
                            selected: selected == Some(index),
                        })
                        .collect(),
                )
            }
            QuestionBody::FillBlank { .. } => AnswerInputVm::Fill {
                value: self
                    .quiz
                    .answer(position)
                    .and_then(Answer::as_text)
                    .unwrap_or_default()
                    .to_string(),
            },
        };

        Some(QuestionScreenVm {
            header: progress.label(),
            progress_label: format!("Progress: {}%", progress.percent()),
            progress_percent: progress.percent(),
            counter: format!("{} / {}", position + 1, progress.total),
            prompt: question.prompt().to_string(),
            input,
            previous_label: if self.is_guided() {
                "Previous"
            } else {
                "Previous Question"
            },
            can_previous: self.quiz.can_retreat(),
            forward: self.forward_action(),
            dots: self.quiz.dots().into_iter().map(dot_class).collect(),
        })
    }

    fn forward_action(&self) -> ForwardActionVm {
        let is_last = self.quiz.progress().is_last();
        match self.quiz.policy().submit {
            SubmitStyle::Explicit if is_last => ForwardActionVm {
                label: "Submit Quiz",
                enabled: self.quiz.can_submit(),
                intent: QuizIntent::Submit,
                is_submit: true,
            },
            SubmitStyle::Explicit => ForwardActionVm {
                label: "Next Question",
                enabled: self.quiz.can_advance(),
                intent: QuizIntent::Next,
                is_submit: false,
            },
            SubmitStyle::OnLastAdvance => ForwardActionVm {
                label: if is_last { "Finish Quiz" } else { "Next" },
                enabled: self.quiz.can_advance(),
                intent: QuizIntent::Next,
                is_submit: is_last,
            },
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Rejected` when the quiz refuses the action.
    pub fn apply(
        &mut self,
        quiz_loop: &QuizLoopService,
        intent: QuizIntent,
    ) -> Result<QuizOutcome, ViewError> {
        match intent {
            QuizIntent::Choose(index) => self.quiz.select_current(Answer::Index(index))?,
            QuizIntent::Fill(text) => self.quiz.select_current(Answer::Text(text))?,
            QuizIntent::Previous => {
                self.quiz.retreat()?;
            }
            QuizIntent::Next => {
                if let Advance::Completed(score) = quiz_loop.advance(&mut self.quiz)? {
                    return Ok(QuizOutcome::Completed(score));
                }
            }
            QuizIntent::Submit => {
                let score = quiz_loop.submit(&mut self.quiz)?;
                return Ok(QuizOutcome::Completed(score));
            }
            QuizIntent::Retry => quiz_loop.restart(&mut self.quiz),
        }
        Ok(QuizOutcome::Continue)
    }
}

#[must_use]
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| char::from(b'A' + i))
}

#[must_use]
pub fn dot_class(dot: QuestionDot) -> &'static str {
    match dot {
        QuestionDot::Current => "dot dot-current",
        QuestionDot::Answered => "dot dot-answered",
        QuestionDot::Unanswered => "dot",
    }
}

/// # Errors
///
/// Returns `ViewError::EmptyQuiz` when the topic has no questions.
pub fn start_practice(quiz_loop: &QuizLoopService, topic: &TopicId) -> Result<QuizVm, ViewError> {
    Ok(QuizVm::new(quiz_loop.start_practice(topic)?))
}

/// # Errors
///
/// Returns `ViewError::EmptyQuiz` when no wave quiz is bundled.
pub fn start_wave_quiz(quiz_loop: &QuizLoopService) -> Result<QuizVm, ViewError> {
    Ok(QuizVm::new(quiz_loop.start_wave_quiz()?))
}
