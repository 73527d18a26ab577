mod controls_vm;
mod frame_vm;
mod lesson_vm;
mod markdown_vm;
mod quiz_vm;
mod review_vm;
mod time_fmt;

pub use controls_vm::{
    ChoiceOptionVm, ControlVm, PlaybackVm, PresetVm, interference_presets, map_control,
    map_controls, map_playback,
};
pub use frame_vm::{FrameVm, ReadoutVm, StrokeVm, SvgNodeVm, map_frame, map_readouts};
pub use lesson_vm::{LessonScreenVm, ScenePanelVm, SlideDotVm, SlidePanelVm, map_lesson_screen};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_vm::{
    AnswerInputVm, ForwardActionVm, OptionVm, QuestionScreenVm, QuizIntent, QuizOutcome, QuizVm,
    option_letter, start_practice, start_wave_quiz,
};
pub use review_vm::{ResultsVm, ReviewCardVm, ReviewRowVm, map_results, map_review_card};
pub use time_fmt::format_elapsed;
