use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, LessonView, PracticeView, WaveQuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/lesson/:topic", LessonView)] Lesson { topic: String },
        #[route("/practice/:topic", PracticeView)] Practice { topic: String },
        #[route("/wave-quiz", WaveQuizView)] WaveQuiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "brand", to: Route::Home {}, "PHYSIX" }
                nav { class: "topbar__nav",
                    Link { to: Route::Home {}, "Lessons" }
                    Link { to: Route::WaveQuiz {}, "Wave Quiz" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
