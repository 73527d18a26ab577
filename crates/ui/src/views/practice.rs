use dioxus::prelude::*;
use dioxus_router::use_navigator;

use physix_core::model::TopicId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::quiz::QuizPanel;
use crate::vm::{QuizVm, start_practice};

#[component]
pub fn PracticeView(topic: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();
    let topic_id = TopicId::new(topic.clone()).ok();
    let title = topic_id
        .as_ref()
        .and_then(|id| catalog.topic(id))
        .map_or_else(|| topic.clone(), |t| t.title().to_string());

    let lesson_topic = topic.clone();
    let on_back = use_callback(move |()| {
        let _ = navigator.push(Route::Lesson {
            topic: lesson_topic.clone(),
        });
    });

    rsx! {
        div { class: "page practice",
            header { class: "practice__header",
                h2 { "Practice Questions" }
                p { class: "practice__topic", "{title}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "Back to Lesson"
                }
            }
            PracticeQuiz { topic: topic_id, title: title.clone(), on_back }
        }
    }
}

/// Practice quiz for one topic, or the "coming soon" note when it has no questions.
#[component]
pub(super) fn PracticeQuiz(
    topic: Option<TopicId>,
    title: String,
    on_back: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let vm = use_signal(move || {
        let topic = topic?;
        match start_practice(&quiz_loop, &topic) {
            Ok(vm) => Some(vm),
            Err(err) => {
                log::debug!("no practice for {topic}: {}", err.message());
                None
            }
        }
    });
    let has_quiz = vm.read().as_ref().is_some_and(|q: &QuizVm| !q.quiz().is_empty());

    rsx! {
        if has_quiz {
            QuizPanel { vm, exit_label: "Back to Lesson", on_exit: on_back }
        } else {
            p { class: "practice__empty", "Practice questions for {title} coming soon!" }
        }
    }
}
