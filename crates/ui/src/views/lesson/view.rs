use dioxus::prelude::*;
use dioxus_router::use_navigator;

use physix_core::model::{Lesson, Slide, TopicId};
use physix_core::sim::{AnimationParameters, SceneKind};
use services::{DriverHandle, LessonNavigator, Playback, SlideChange};

use super::canvas::SceneCanvas;
use super::controls::{ControlEdit, ControlsPanel, SimulatorToolbar, apply_edit};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::views::practice::PracticeQuiz;
use crate::vm::{SlidePanelVm, map_lesson_screen};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlideStep {
    Previous,
    Next,
    Jump(usize),
}

/// Playback for the simulator on `slide`, if it has one.
fn playback_for(slide: Option<&Slide>) -> Option<Playback> {
    slide?
        .content()
        .scenes()
        .iter()
        .copied()
        .find(|kind| kind.play_control().is_some())
        .map(Playback::for_scene)
}

#[component]
pub fn LessonView(topic: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();
    let topic_id = TopicId::new(topic.clone()).ok();
    let lesson = topic_id.as_ref().and_then(|id| catalog.lesson(id)).cloned();
    let title = topic_id
        .as_ref()
        .and_then(|id| catalog.topic(id))
        .map_or_else(|| topic.clone(), |t| t.title().to_string());

    let Some(lesson) = lesson else {
        log::debug!("no lesson for {topic}");
        let message = ViewError::NotFound.message();
        return rsx! {
            div { class: "page lesson lesson--missing",
                p { "{message}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "Back to Lessons"
                }
            }
        };
    };

    rsx! {
        LessonDeck { key: "{topic}", lesson, title }
    }
}

#[component]
fn LessonDeck(lesson: Lesson, title: String) -> Element {
    let navigator = use_navigator();
    let controls = lesson.controls();
    let topic = lesson.topic().clone();
    let nav = use_signal(move || LessonNavigator::new(lesson));
    let params = use_signal(move || AnimationParameters::new(controls));
    let playback = use_signal(|| playback_for(nav.peek().current_slide()));
    let handles = use_signal(Vec::<(SceneKind, DriverHandle)>::new);

    let change_slide = use_callback(move |step: SlideStep| {
        let mut nav = nav;
        let mut params = params;
        let mut playback = playback;
        let mut handles = handles;

        let change: Option<SlideChange> = {
            let mut nav = nav.write();
            match step {
                SlideStep::Previous => nav.previous(),
                SlideStep::Next => nav.next(),
                SlideStep::Jump(index) => nav.jump(index),
            }
        };
        let Some(change) = change else {
            return;
        };

        for (kind, handle) in handles.write().drain(..) {
            log::trace!("tearing down {kind:?}");
            handle.cancel();
        }
        if let Some(mut previous) = *playback.peek() {
            if previous.is_playing(&params.peek()) {
                if let Err(err) = previous.pause(&mut params.write()) {
                    log::warn!("could not pause simulator: {err}");
                }
            }
        }
        playback.set(playback_for(nav.read().current_slide()));
        log::debug!("slide {} -> {}", change.from, change.to);
    });

    let on_edit = use_callback(move |edit: ControlEdit| {
        let mut params = params;
        let mut playback = playback;
        let mut guard = playback.write();
        apply_edit(&mut params.write(), guard.as_mut(), &edit);
    });

    let on_simulator_done = use_callback(move |()| {
        if nav.read().can_next() {
            change_slide.call(SlideStep::Next);
        } else {
            let _ = navigator.push(Route::Home {});
        }
    });

    let Some(screen) = map_lesson_screen(&nav.read()) else {
        return rsx! {};
    };
    let body_class = if screen.is_full_width() {
        "lesson__body lesson__body--full"
    } else {
        "lesson__body"
    };
    let gated_scene = screen
        .scenes()
        .into_iter()
        .find(|kind| kind.play_control().is_some());
    let slide_index = screen.slide_index;

    rsx! {
        div { class: "page lesson",
            header { class: "lesson__header",
                button {
                    class: "lesson__close",
                    r#type: "button",
                    aria_label: "Close lesson",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "✕"
                }
                div { class: "lesson__heading",
                    p { class: "lesson__topic", "{title}" }
                    h2 { class: "lesson__title", "{screen.title}" }
                }
                div { class: "slide-dots",
                    for dot in screen.dots.iter().cloned() {
                        button {
                            key: "{dot.index}",
                            class: "{dot.class}",
                            r#type: "button",
                            aria_label: "{dot.label}",
                            onclick: move |_| change_slide.call(SlideStep::Jump(dot.index)),
                        }
                    }
                }
                span { class: "lesson__position", "{screen.position}" }
            }

            div { class: "{body_class}",
                match screen.panel.clone() {
                    SlidePanelVm::Practice => rsx! {
                        PracticeQuiz {
                            topic: Some(topic.clone()),
                            title: title.clone(),
                            on_back: move |()| change_slide.call(SlideStep::Jump(0)),
                        }
                    },
                    SlidePanelVm::Empty => rsx! {
                        article { class: "slide__text", dangerous_inner_html: "{screen.body_html}" }
                    },
                    SlidePanelVm::Scenes { scenes, show_controls } => {
                        let kinds: Vec<SceneKind> = scenes.iter().map(|s| s.kind).collect();
                        rsx! {
                            article { class: "slide__text", dangerous_inner_html: "{screen.body_html}" }
                            aside { class: "slide__panel",
                                for scene in scenes {
                                    SceneCanvas {
                                        key: "{slide_index}-{scene.title}",
                                        scene: scene.kind,
                                        params,
                                        handles,
                                    }
                                }
                                if let Some(kind) = gated_scene {
                                    SimulatorToolbar {
                                        scene: kind,
                                        params,
                                        playback,
                                        handles,
                                        on_complete: on_simulator_done,
                                    }
                                }
                                if show_controls {
                                    ControlsPanel { scenes: kinds, params, on_edit }
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "lesson__footer",
                button {
                    class: "slide-arrow",
                    r#type: "button",
                    aria_label: "Previous slide",
                    disabled: !screen.can_previous,
                    onclick: move |_| change_slide.call(SlideStep::Previous),
                    "‹"
                }
                if screen.can_next {
                    button {
                        class: "slide-arrow",
                        r#type: "button",
                        aria_label: "Next slide",
                        onclick: move |_| change_slide.call(SlideStep::Next),
                        "›"
                    }
                } else {
                    button {
                        class: "btn btn-success",
                        r#type: "button",
                        disabled: !screen.can_complete,
                        onclick: move |_| {
                            log::info!("lesson completed");
                            let _ = navigator.push(Route::Home {});
                        },
                        "Complete Lesson"
                    }
                }
            }
        }
    }
}
