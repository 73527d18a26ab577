use thiserror::Error;

use crate::model::{LessonError, ParseIdError, QuestionError, QuestionSetError};
use crate::sim::ParamError;

/// Aggregate error for content and simulation validation.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    QuestionSet(#[from] QuestionSetError),
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
}
