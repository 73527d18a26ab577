mod canvas;
mod controls;
mod scripts;
mod view;

pub use view::LessonView;
