use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("multiple-choice question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct answer index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },

    #[error("fill-blank answer cannot be empty")]
    EmptyCanonicalAnswer,

    #[error("{kind} question expects a {expected} answer")]
    AnswerKindMismatch {
        kind: QuestionKind,
        expected: &'static str,
    },
}

//
// ─── KIND & ANSWER ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    FillBlank,
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionKind::MultipleChoice => f.write_str("multiple-choice"),
            QuestionKind::FillBlank => f.write_str("fill-blank"),
        }
    }
}

/// A submitted answer: an option index or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Index(usize),
    Text(String),
}

impl Answer {
    /// Text answers that are blank after trimming count as "no answer".
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Answer::Index(_) => false,
            Answer::Text(text) => text.trim().is_empty(),
        }
    }

    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Answer::Index(index) => Some(*index),
            Answer::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Index(_) => None,
            Answer::Text(text) => Some(text),
        }
    }
}

/// Canonical form used for fill-blank comparison.
#[must_use]
pub fn normalize_text_answer(input: &str) -> String {
    input.trim().to_lowercase()
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBody {
    MultipleChoice { options: Vec<String>, correct: usize },
    FillBlank { correct: String },
}

/// A validated quiz item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    body: QuestionBody,
    explanation: String,
}

impl Question {
    /// Creates a multiple-choice question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or an option is blank, fewer than two
    /// options are given, or `correct` is not a valid option index.
    pub fn multiple_choice(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = validate_prompt(prompt.into())?;
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        if let Some(index) = options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        if correct >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct,
                len: options.len(),
            });
        }

        Ok(Self {
            id,
            prompt,
            body: QuestionBody::MultipleChoice { options, correct },
            explanation: explanation.into(),
        })
    }

    /// Creates a fill-in-the-blank question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or the canonical answer is blank.
    pub fn fill_blank(
        id: QuestionId,
        prompt: impl Into<String>,
        correct: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = validate_prompt(prompt.into())?;
        let correct = correct.into();
        if correct.trim().is_empty() {
            return Err(QuestionError::EmptyCanonicalAnswer);
        }

        Ok(Self {
            id,
            prompt,
            body: QuestionBody::FillBlank { correct },
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn body(&self) -> &QuestionBody {
        &self.body
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self.body {
            QuestionBody::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            QuestionBody::FillBlank { .. } => QuestionKind::FillBlank,
        }
    }

    /// Options of a multiple-choice question; empty for fill-blank.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match &self.body {
            QuestionBody::MultipleChoice { options, .. } => options,
            QuestionBody::FillBlank { .. } => &[],
        }
    }

    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        match self.body {
            QuestionBody::MultipleChoice { correct, .. } => Some(correct),
            QuestionBody::FillBlank { .. } => None,
        }
    }

    /// Human-readable correct answer (option text or canonical string).
    #[must_use]
    pub fn correct_answer_text(&self) -> &str {
        match &self.body {
            QuestionBody::MultipleChoice { options, correct } => &options[*correct],
            QuestionBody::FillBlank { correct } => correct,
        }
    }

    /// Checks that `answer` has the shape this question accepts.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::AnswerKindMismatch` for a text answer to a
    /// multiple-choice question (or the reverse), and
    /// `QuestionError::CorrectIndexOutOfRange` for an index past the last option.
    pub fn check_answer_shape(&self, answer: &Answer) -> Result<(), QuestionError> {
        match (&self.body, answer) {
            (QuestionBody::MultipleChoice { options, .. }, Answer::Index(index)) => {
                if *index < options.len() {
                    Ok(())
                } else {
                    Err(QuestionError::CorrectIndexOutOfRange {
                        index: *index,
                        len: options.len(),
                    })
                }
            }
            (QuestionBody::FillBlank { .. }, Answer::Text(_)) => Ok(()),
            (QuestionBody::MultipleChoice { .. }, Answer::Text(_)) => {
                Err(QuestionError::AnswerKindMismatch {
                    kind: QuestionKind::MultipleChoice,
                    expected: "option index",
                })
            }
            (QuestionBody::FillBlank { .. }, Answer::Index(_)) => {
                Err(QuestionError::AnswerKindMismatch {
                    kind: QuestionKind::FillBlank,
                    expected: "text",
                })
            }
        }
    }

    /// Grades a (possibly missing) answer. Missing or mismatched answers are wrong.
    #[must_use]
    pub fn is_correct(&self, answer: Option<&Answer>) -> bool {
        match (&self.body, answer) {
            (QuestionBody::MultipleChoice { correct, .. }, Some(Answer::Index(index))) => {
                index == correct
            }
            (QuestionBody::FillBlank { correct }, Some(Answer::Text(text))) => {
                normalize_text_answer(text) == normalize_text_answer(correct)
            }
            _ => false,
        }
    }
}

fn validate_prompt(prompt: String) -> Result<String, QuestionError> {
    if prompt.trim().is_empty() {
        return Err(QuestionError::EmptyPrompt);
    }
    Ok(prompt)
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in bundled content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub id: u64,
    #[serde(default = "default_kind", rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: Answer,
    pub explanation: String,
}

fn default_kind() -> QuestionKind {
    QuestionKind::MultipleChoice
}

impl QuestionDraft {
    /// Validates this draft into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the draft violates a question invariant or the
    /// correct answer does not match the declared kind.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let id = QuestionId::new(self.id);
        match (self.kind, self.correct_answer) {
            (QuestionKind::MultipleChoice, Answer::Index(correct)) => Question::multiple_choice(
                id,
                self.question,
                self.options,
                correct,
                self.explanation,
            ),
            (QuestionKind::FillBlank, Answer::Text(correct)) => {
                Question::fill_blank(id, self.question, correct, self.explanation)
            }
            (QuestionKind::MultipleChoice, Answer::Text(_)) => {
                Err(QuestionError::AnswerKindMismatch {
                    kind: QuestionKind::MultipleChoice,
                    expected: "option index",
                })
            }
            (QuestionKind::FillBlank, Answer::Index(_)) => Err(QuestionError::AnswerKindMismatch {
                kind: QuestionKind::FillBlank,
                expected: "text",
            }),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn capital() -> Question {
        Question::fill_blank(QuestionId::new(1), "Capital of France?", "Paris", "").unwrap()
    }

    #[test]
    fn multiple_choice_rejects_out_of_range_correct_index() {
        let err = Question::multiple_choice(
            QuestionId::new(1),
            "Pick",
            options(&["a", "b"]),
            2,
            "",
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::CorrectIndexOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn multiple_choice_rejects_blank_prompt_and_options() {
        let err =
            Question::multiple_choice(QuestionId::new(1), "  ", options(&["a", "b"]), 0, "")
                .unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);

        let err = Question::multiple_choice(QuestionId::new(1), "Q", options(&["a", " "]), 0, "")
            .unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption { index: 1 });
    }

    #[test]
    fn fill_blank_rejects_blank_canonical_answer() {
        let err = Question::fill_blank(QuestionId::new(1), "Q", "   ", "").unwrap_err();
        assert_eq!(err, QuestionError::EmptyCanonicalAnswer);
    }

    #[test]
    fn fill_blank_grading_ignores_case_and_whitespace() {
        let q = capital();
        assert!(q.is_correct(Some(&Answer::Text("Paris ".into()))));
        assert!(q.is_correct(Some(&Answer::Text("paris".into()))));
        assert!(q.is_correct(Some(&Answer::Text("  PARIS".into()))));
        assert!(!q.is_correct(Some(&Answer::Text("Lyon".into()))));
        assert!(!q.is_correct(None));
    }

    #[test]
    fn multiple_choice_grading_uses_index_equality() {
        let q = Question::multiple_choice(
            QuestionId::new(2),
            "Pick b",
            options(&["a", "b", "c"]),
            1,
            "",
        )
        .unwrap();
        assert!(q.is_correct(Some(&Answer::Index(1))));
        assert!(!q.is_correct(Some(&Answer::Index(0))));
        assert!(!q.is_correct(Some(&Answer::Text("b".into()))));
        assert_eq!(q.correct_answer_text(), "b");
    }

    #[test]
    fn answer_shape_checks_kind_and_range() {
        let q = Question::multiple_choice(QuestionId::new(3), "Q", options(&["a", "b"]), 0, "")
            .unwrap();
        assert!(q.check_answer_shape(&Answer::Index(1)).is_ok());
        assert!(q.check_answer_shape(&Answer::Index(2)).is_err());
        assert!(matches!(
            q.check_answer_shape(&Answer::Text("a".into())),
            Err(QuestionError::AnswerKindMismatch { .. })
        ));
        assert!(matches!(
            capital().check_answer_shape(&Answer::Index(0)),
            Err(QuestionError::AnswerKindMismatch { .. })
        ));
    }

    #[test]
    fn blank_text_answer_is_blank() {
        assert!(Answer::Text("   ".into()).is_blank());
        assert!(!Answer::Text("7".into()).is_blank());
        assert!(!Answer::Index(0).is_blank());
    }

    #[test]
    fn draft_defaults_to_multiple_choice_and_validates() {
        let draft = QuestionDraft {
            id: 4,
            kind: default_kind(),
            question: "SI unit of velocity?".into(),
            options: options(&["m/s", "m/s²"]),
            correct_answer: Answer::Index(0),
            explanation: "metres per second".into(),
        };
        let q = draft.validate().unwrap();
        assert_eq!(q.kind(), QuestionKind::MultipleChoice);
        assert_eq!(q.id(), QuestionId::new(4));
    }

    #[test]
    fn draft_with_mismatched_answer_is_rejected() {
        let draft = QuestionDraft {
            id: 5,
            kind: QuestionKind::FillBlank,
            question: "Net force?".into(),
            options: Vec::new(),
            correct_answer: Answer::Index(0),
            explanation: String::new(),
        };
        assert!(matches!(
            draft.validate(),
            Err(QuestionError::AnswerKindMismatch { .. })
        ));
    }
}
