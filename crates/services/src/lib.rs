#![forbid(unsafe_code)]

pub mod animation;
pub mod catalog;
pub mod error;
pub mod lesson;
pub mod quiz;

pub use physix_core::Clock;

pub use animation::{DriverHandle, FrameDriver, FrameRequest, FrameScheduler, Playback};
pub use catalog::{Catalog, QuestionBank, WAVE_QUIZ_TOPIC};
pub use error::{CatalogError, DriverError, QuizError};
pub use lesson::{LessonNavigator, SlideChange, SlideDot};
pub use quiz::{Advance, QuizLoopService, QuizPolicy, QuizService};
