mod navigator;

// Public API of the lesson subsystem.
pub use navigator::{LessonNavigator, SlideChange, SlideDot};
