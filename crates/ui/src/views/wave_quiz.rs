use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::views::quiz::QuizPanel;
use crate::vm::start_wave_quiz;

#[component]
pub fn WaveQuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();

    let vm = use_signal(move || match start_wave_quiz(&quiz_loop) {
        Ok(vm) => Some(vm),
        Err(err) => {
            log::warn!("wave quiz unavailable: {}", err.message());
            None
        }
    });
    let available = vm.read().is_some();
    let empty_message = ViewError::EmptyQuiz.message();

    let on_complete = use_callback(move |()| {
        log::info!("wave properties module completed");
        let _ = navigator.push(Route::Lesson {
            topic: "waves".to_string(),
        });
    });

    rsx! {
        div { class: "page wave-quiz",
            header { class: "wave-quiz__header",
                h2 { "Wave Properties Quiz" }
            }
            if available {
                QuizPanel { vm, exit_label: "Complete Module", on_exit: on_complete }
            } else {
                p { class: "wave-quiz__error", "{empty_message}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "Back to Lessons"
                }
            }
        }
    }
}
