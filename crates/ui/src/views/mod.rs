mod home;
mod lesson;
mod practice;
mod quiz;
mod state;
mod wave_quiz;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use lesson::LessonView;
pub use practice::PracticeView;
pub use state::ViewError;
pub use wave_quiz::WaveQuizView;
