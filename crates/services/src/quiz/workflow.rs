use std::sync::Arc;

use physix_core::grading::Score;
use physix_core::model::TopicId;

use super::policy::QuizPolicy;
use super::service::{Advance, QuizService};
use crate::Clock;
use crate::catalog::{QuestionBank, WAVE_QUIZ_TOPIC};
use crate::error::QuizError;

/// Orchestrates quiz start and the clock-stamped transitions of an attempt.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    bank: Arc<dyn QuestionBank>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<dyn QuestionBank>) -> Self {
        Self { clock, bank }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Start an attempt over the question set of `topic`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the topic has no questions.
    pub fn start(&self, topic: &TopicId, policy: QuizPolicy) -> Result<QuizService, QuizError> {
        let set = self.bank.question_set(topic);
        log::debug!(
            "starting quiz for {topic}: {} questions, {:?}",
            set.len(),
            policy.submit
        );
        QuizService::new(set, policy, self.clock.now())
    }

    /// Start a practice attempt with an explicit submit button.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the topic has no questions.
    pub fn start_practice(&self, topic: &TopicId) -> Result<QuizService, QuizError> {
        self.start(topic, QuizPolicy::practice())
    }

    /// Start the guided wave properties quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no wave quiz is bundled.
    pub fn start_wave_quiz(&self) -> Result<QuizService, QuizError> {
        let topic: TopicId = WAVE_QUIZ_TOPIC.parse().map_err(|_| QuizError::Empty)?;
        self.start(&topic, QuizPolicy::guided())
    }

    /// Move forward, completing a guided quiz past its last question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the attempt cannot move forward.
    pub fn advance(&self, quiz: &mut QuizService) -> Result<Advance, QuizError> {
        let advance = quiz.advance(self.clock.now())?;
        if let Advance::Completed(score) = advance {
            log::debug!(
                "quiz {} completed: {}/{}",
                quiz.question_set().topic(),
                score.correct,
                score.total
            );
        }
        Ok(advance)
    }

    /// # Errors
    ///
    /// Returns `QuizError::Incomplete` while questions are unanswered.
    pub fn submit(&self, quiz: &mut QuizService) -> Result<Score, QuizError> {
        let score = quiz.submit(self.clock.now())?;
        log::debug!(
            "quiz {} submitted: {}/{}",
            quiz.question_set().topic(),
            score.correct,
            score.total
        );
        Ok(score)
    }

    /// Start a fresh attempt over the same questions.
    pub fn restart(&self, quiz: &mut QuizService) {
        log::debug!("restarting quiz {}", quiz.question_set().topic());
        quiz.reset(self.clock.now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use physix_core::model::{Answer, Question, QuestionId, QuestionSet};
    use physix_core::time::{fixed_clock, fixed_now};

    struct OneTopic(QuestionSet);

    impl QuestionBank for OneTopic {
        fn question_set(&self, topic: &TopicId) -> QuestionSet {
            if self.0.topic() == topic {
                self.0.clone()
            } else {
                QuestionSet::empty(topic.clone())
            }
        }
    }

    fn topic(id: &str) -> TopicId {
        TopicId::new(id).unwrap()
    }

    fn bank(id: &str) -> Arc<dyn QuestionBank> {
        let questions = (1..=2)
            .map(|n| {
                Question::multiple_choice(
                    QuestionId::new(n),
                    format!("Q{n}"),
                    vec!["a".into(), "b".into()],
                    0,
                    "",
                )
                .unwrap()
            })
            .collect();
        Arc::new(OneTopic(QuestionSet::new(topic(id), questions).unwrap()))
    }

    #[test]
    fn empty_topic_does_not_start() {
        let service = QuizLoopService::new(fixed_clock(), bank("optics"));
        let err = service.start_practice(&topic("waves")).unwrap_err();
        assert_eq!(err, QuizError::Empty);
    }

    #[test]
    fn wave_quiz_is_guided_and_stamped_by_clock() {
        let mut clock = fixed_clock();
        let service = QuizLoopService::new(clock, bank(WAVE_QUIZ_TOPIC));
        let mut quiz = service.start_wave_quiz().unwrap();
        assert_eq!(quiz.policy(), QuizPolicy::guided());
        assert_eq!(quiz.started_at(), fixed_now());

        quiz.select_current(Answer::Index(0)).unwrap();
        assert_eq!(service.advance(&mut quiz).unwrap(), Advance::Moved(1));
        quiz.select_current(Answer::Index(1)).unwrap();

        clock.advance(Duration::seconds(30));
        let later = QuizLoopService::new(clock, bank(WAVE_QUIZ_TOPIC));
        let Advance::Completed(score) = later.advance(&mut quiz).unwrap() else {
            panic!("guided quiz should complete on last advance");
        };
        assert_eq!((score.correct, score.total), (1, 2));
        assert_eq!(quiz.completed_at(), Some(fixed_now() + Duration::seconds(30)));
    }

    #[test]
    fn practice_submit_then_restart() {
        let service = QuizLoopService::new(fixed_clock(), bank("optics"));
        let mut quiz = service.start_practice(&topic("optics")).unwrap();
        assert_eq!(
            service.submit(&mut quiz).unwrap_err(),
            QuizError::Incomplete { missing: 2 }
        );
        quiz.select_answer(0, Answer::Index(0)).unwrap();
        quiz.select_answer(1, Answer::Index(0)).unwrap();
        let score = service.submit(&mut quiz).unwrap();
        assert!(score.is_perfect());
        assert!(quiz.is_complete());

        service.restart(&mut quiz);
        assert!(!quiz.is_complete());
        assert_eq!(quiz.answered_count(), 0);
        assert_eq!(quiz.current_position(), 0);
    }
}
