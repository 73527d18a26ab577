//! Shared error types for the services crate.

use thiserror::Error;

use physix_core::model::{LessonError, QuestionError, QuestionSetError, TopicId};
use physix_core::sim::ParamError;

/// Errors emitted by `QuizService` and `QuizLoopService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for this quiz")]
    Empty,
    #[error("quiz already completed")]
    Completed,
    #[error("question position {position} is out of range for {len} questions")]
    OutOfRange { position: usize, len: usize },
    #[error("question {position} has not been answered")]
    Unanswered { position: usize },
    #[error("{missing} question(s) still unanswered")]
    Incomplete { missing: usize },
    #[error("already at the first question")]
    AtStart,
    #[error("already at the last question")]
    AtEnd,
    #[error(transparent)]
    Answer(#[from] QuestionError),
}

/// Errors emitted while loading bundled content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("invalid {what} content")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("question {id} of {topic} is invalid")]
    Question {
        topic: TopicId,
        id: u64,
        #[source]
        source: QuestionError,
    },
    #[error("lesson for {topic} is invalid")]
    Lesson {
        topic: TopicId,
        #[source]
        source: LessonError,
    },
    #[error(transparent)]
    Topic(#[from] LessonError),
    #[error(transparent)]
    QuestionSet(#[from] QuestionSetError),
    #[error("content refers to unknown topic {topic}")]
    UnknownTopic { topic: TopicId },
    #[error("topic {topic} appears more than once")]
    DuplicateTopic { topic: TopicId },
    #[error("topic {topic} has no lesson")]
    MissingLesson { topic: TopicId },
    #[error("lesson {topic} ends with a practice slide but has no questions")]
    PracticeWithoutQuestions { topic: TopicId },
}

/// Errors emitted by the frame driver and playback controls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DriverError {
    #[error("frame driver is already running")]
    AlreadyRunning,
    #[error("scene has no play control")]
    NoPlayControl,
    #[error(transparent)]
    Param(#[from] ParamError),
}
