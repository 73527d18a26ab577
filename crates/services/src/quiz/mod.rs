mod policy;
mod progress;
mod review;
mod service;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use policy::{QuizPolicy, SubmitStyle};
pub use progress::{QuestionDot, QuizProgress};
pub use review::{OptionMark, OptionReview, QuestionReview, ReviewBody, review_answers};
pub use service::{Advance, QuizService};
pub use workflow::QuizLoopService;
