use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{AppContext, LaunchTarget};
use crate::routes::Route;

fn launch_route(target: LaunchTarget) -> Option<Route> {
    match target {
        LaunchTarget::Dashboard => None,
        LaunchTarget::Lesson(topic) => Some(Route::Lesson {
            topic: topic.to_string(),
        }),
        LaunchTarget::Practice(topic) => Some(Route::Practice {
            topic: topic.to_string(),
        }),
        LaunchTarget::WaveQuiz => Some(Route::WaveQuiz {}),
    }
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();

    let launch_ctx = ctx.clone();
    use_effect(move || {
        if let Some(route) = launch_ctx.take_launch_target().and_then(launch_route) {
            log::debug!("opening launch screen");
            let _ = navigator.replace(route);
        }
    });

    rsx! {
        div { class: "page dashboard",
            section { class: "hero",
                h1 { class: "hero__brand", "PHYSIX" }
                h2 { class: "hero__title", "Interactive Physics Concepts" }
                p { class: "hero__subtitle",
                    "Explore fundamental physics concepts through interactive simulations and animations"
                }
            }
            section { class: "lessons",
                h3 { class: "lessons__title", "Class Lessons" }
                div { class: "topic-grid",
                    for topic in catalog.topics().iter() {
                        TopicCard {
                            key: "{topic.id()}",
                            id: topic.id().to_string(),
                            title: topic.title().to_string(),
                            description: topic.description().to_string(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TopicCard(id: String, title: String, description: String) -> Element {
    let navigator = use_navigator();
    let lesson_topic = id.clone();
    let practice_topic = id;

    rsx! {
        article { class: "topic-card",
            h4 { class: "topic-card__title", "{title}" }
            p { class: "topic-card__description", "{description}" }
            div { class: "topic-card__actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Lesson { topic: lesson_topic.clone() });
                    },
                    "View Content"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Practice { topic: practice_topic.clone() });
                    },
                    "Practice Questions"
                }
            }
        }
    }
}
