use chrono::{DateTime, Utc};
use std::fmt;

use physix_core::grading::{self, Answers, Score};
use physix_core::model::{Answer, Question, QuestionSet, QuizSummary};

use super::policy::{QuizPolicy, SubmitStyle};
use super::progress::{QuestionDot, QuizProgress};
use super::review::{QuestionReview, review_answers};
use crate::error::QuizError;

/// Outcome of moving forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this position.
    Moved(usize),
    /// Advanced past the last question of a guided quiz.
    Completed(Score),
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// In-memory state of one quiz attempt.
///
/// The question set is fixed for the lifetime of the attempt; `reset` starts a new
/// attempt over the same set.
pub struct QuizService {
    set: QuestionSet,
    policy: QuizPolicy,
    current: usize,
    answers: Answers,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizService {
    /// Start an attempt at the first question.
    ///
    /// `started_at` should come from the services layer clock to keep time deterministic.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the set has no questions.
    pub fn new(
        set: QuestionSet,
        policy: QuizPolicy,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        if set.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self {
            set,
            policy,
            current: 0,
            answers: Answers::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn question_set(&self) -> &QuestionSet {
        &self.set
    }

    #[must_use]
    pub fn policy(&self) -> QuizPolicy {
        self.policy
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Always false; empty sets are rejected by `new`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    #[must_use]
    pub fn current_position(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.set.get(self.current)
    }

    #[must_use]
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, position: usize) -> Option<&Answer> {
        self.answers.get(&position)
    }

    /// True when `position` holds a non-blank answer.
    #[must_use]
    pub fn is_answered(&self, position: usize) -> bool {
        self.answers.get(&position).is_some_and(|a| !a.is_blank())
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.values().filter(|a| !a.is_blank()).count()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: self.current,
            total: self.set.len(),
            answered: self.answered_count(),
            is_complete: self.is_complete(),
        }
    }

    /// One marker per question for the dot strip.
    #[must_use]
    pub fn dots(&self) -> Vec<QuestionDot> {
        (0..self.set.len())
            .map(|position| {
                if position == self.current {
                    QuestionDot::Current
                } else if self.is_answered(position) {
                    QuestionDot::Answered
                } else {
                    QuestionDot::Unanswered
                }
            })
            .collect()
    }

    //
    // ─── ANSWERING ─────────────────────────────────────────────────────────────
    //

    /// Record the answer at `position`. A later answer replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after completion, `QuizError::OutOfRange` for a
    /// position past the end, and `QuizError::Answer` when the answer does not fit the
    /// question kind.
    pub fn select_answer(&mut self, position: usize, answer: Answer) -> Result<(), QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        let question = self.set.get(position).ok_or(QuizError::OutOfRange {
            position,
            len: self.set.len(),
        })?;
        question.check_answer_shape(&answer)?;
        self.answers.insert(position, answer);
        Ok(())
    }

    /// Record the answer for the question currently shown.
    ///
    /// # Errors
    ///
    /// See [`QuizService::select_answer`].
    pub fn select_current(&mut self, answer: Answer) -> Result<(), QuizError> {
        self.select_answer(self.current, answer)
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        !self.is_complete() && self.current > 0
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        if self.is_complete() {
            return false;
        }
        let has_next = self.current + 1 < self.set.len() || self.policy.submits_on_advance();
        has_next && (!self.policy.gate_advance || self.is_answered(self.current))
    }

    /// Explicit submit: every question answered and not yet complete.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_complete()
            && self.policy.submit == SubmitStyle::Explicit
            && self.answered_count() == self.set.len()
    }

    /// Move to the next question, or finish a guided quiz from its last question.
    ///
    /// `now` is recorded as the completion time when the move finishes the quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after completion, `QuizError::Unanswered` when the
    /// policy gates on the current answer, and `QuizError::AtEnd` on the last question
    /// of a practice quiz.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Advance, QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        if self.policy.gate_advance && !self.is_answered(self.current) {
            return Err(QuizError::Unanswered {
                position: self.current,
            });
        }
        if self.current + 1 < self.set.len() {
            self.current += 1;
            return Ok(Advance::Moved(self.current));
        }
        if self.policy.submits_on_advance() {
            return Ok(Advance::Completed(self.complete(now)));
        }
        Err(QuizError::AtEnd)
    }

    /// Move back one question. Never gated by answers.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after completion and `QuizError::AtStart` on the
    /// first question.
    pub fn retreat(&mut self) -> Result<usize, QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        if self.current == 0 {
            return Err(QuizError::AtStart);
        }
        self.current -= 1;
        Ok(self.current)
    }

    /// Finish the attempt. Calling it again returns the same score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Incomplete` while any question is unanswered.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<Score, QuizError> {
        if self.is_complete() {
            return Ok(self.score());
        }
        let missing = self.set.len() - self.answered_count();
        if missing > 0 {
            return Err(QuizError::Incomplete { missing });
        }
        Ok(self.complete(now))
    }

    fn complete(&mut self, now: DateTime<Utc>) -> Score {
        self.completed_at = Some(now.max(self.started_at));
        self.score()
    }

    /// Clear answers and return to the first question.
    pub fn reset(&mut self, started_at: DateTime<Utc>) {
        self.current = 0;
        self.answers.clear();
        self.started_at = started_at;
        self.completed_at = None;
    }

    //
    // ─── RESULTS ───────────────────────────────────────────────────────────────
    //

    /// Grades the answers given so far; unanswered questions count as wrong.
    #[must_use]
    pub fn score(&self) -> Score {
        grading::score(&self.set, &self.answers)
    }

    /// Per-question feedback. Available at any time; screens show it after completion.
    #[must_use]
    pub fn review(&self) -> Vec<QuestionReview> {
        review_answers(&self.set, &self.answers)
    }

    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        self.completed_at.map(|completed_at| {
            QuizSummary::new(
                self.set.topic().clone(),
                self.score(),
                self.started_at,
                completed_at,
            )
        })
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("topic", self.set.topic())
            .field("questions_len", &self.set.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("policy", &self.policy)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
