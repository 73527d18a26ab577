mod ids;
mod lesson;
mod question;
mod question_set;
mod summary;

pub use ids::{ParseIdError, QuestionId, TopicId};

pub use lesson::{Lesson, LessonDraft, LessonError, Slide, SlideContent, SlideDraft, Topic};
pub use question::{
    Answer, Question, QuestionBody, QuestionDraft, QuestionError, QuestionKind,
    normalize_text_answer,
};
pub use question_set::{QuestionSet, QuestionSetError};
pub use summary::{GuidedBadge, PracticeBand, QuizSummary};
