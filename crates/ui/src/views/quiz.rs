use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{
    AnswerInputVm, QuestionScreenVm, QuizIntent, QuizOutcome, QuizVm, ResultsVm, ReviewCardVm,
    map_results,
};

/// Question card or results for a running quiz. Shared by the practice screen, the
/// lesson practice slide and the wave quiz.
#[component]
pub(super) fn QuizPanel(
    vm: Signal<Option<QuizVm>>,
    exit_label: &'static str,
    on_exit: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let error = use_signal(|| None::<ViewError>);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut error = error;
        let mut guard = vm.write();
        let Some(quiz) = guard.as_mut() else {
            error.set(Some(ViewError::Unknown));
            return;
        };
        match quiz.apply(&quiz_loop, intent) {
            Ok(QuizOutcome::Continue) => error.set(None),
            Ok(QuizOutcome::Completed(score)) => {
                log::info!("quiz finished with {}/{}", score.correct, score.total);
                error.set(None);
            }
            Err(err) => error.set(Some(err)),
        }
    });

    let guard = vm.read();
    let Some(quiz) = guard.as_ref() else {
        return rsx! {};
    };
    let guided = quiz.is_guided();
    let results = map_results(quiz.quiz());
    let screen = quiz.screen();

    rsx! {
        div { class: if guided { "quiz quiz--guided" } else { "quiz" },
            if let Some(err) = *error.read() {
                p { class: "quiz__error", "{err.message()}" }
            }
            if let Some(results) = results {
                ResultsPanel {
                    results,
                    guided,
                    exit_label,
                    on_retry: move |()| dispatch_intent.call(QuizIntent::Retry),
                    on_exit,
                }
            } else if let Some(screen) = screen {
                QuestionCard { screen, guided, on_intent: dispatch_intent }
            }
        }
    }
}

#[component]
fn QuestionCard(
    screen: QuestionScreenVm,
    guided: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let forward = screen.forward.clone();
    let forward_intent = forward.intent.clone();
    let forward_class = if forward.is_submit {
        "btn btn-primary quiz__submit"
    } else {
        "btn btn-primary"
    };

    rsx! {
        div { class: "quiz__card",
            if guided {
                div { class: "quiz__progress",
                    span { class: "quiz__progress-label", "Question Progress" }
                    span { class: "quiz__counter", "{screen.counter}" }
                }
                div { class: "quiz__dots",
                    for (i, class) in screen.dots.iter().enumerate() {
                        span { key: "{i}", class: "{class}" }
                    }
                }
            } else {
                div { class: "quiz__header",
                    h3 { class: "quiz__position", "{screen.header}" }
                    span { class: "quiz__percent", "{screen.progress_label}" }
                }
                div { class: "progress-bar",
                    div {
                        class: "progress-bar__fill",
                        style: "width: {screen.progress_percent}%",
                    }
                }
            }

            p { class: "quiz__prompt", "{screen.prompt}" }

            match screen.input.clone() {
                AnswerInputVm::Choices(options) => rsx! {
                    div { class: "quiz__options",
                        for option in options {
                            button {
                                key: "{option.index}",
                                class: if option.selected { "quiz__option quiz__option--selected" } else { "quiz__option" },
                                r#type: "button",
                                onclick: move |_| on_intent.call(QuizIntent::Choose(option.index)),
                                span { class: "quiz__letter", "{option.letter}." }
                                span { "{option.text}" }
                            }
                        }
                    }
                },
                AnswerInputVm::Fill { value } => rsx! {
                    input {
                        class: "quiz__fill",
                        r#type: "text",
                        placeholder: "Enter your answer...",
                        value: "{value}",
                        oninput: move |evt: FormEvent| on_intent.call(QuizIntent::Fill(evt.value())),
                    }
                },
            }

            div { class: "quiz__nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !screen.can_previous,
                    onclick: move |_| on_intent.call(QuizIntent::Previous),
                    "{screen.previous_label}"
                }
                button {
                    class: "{forward_class}",
                    r#type: "button",
                    disabled: !forward.enabled,
                    onclick: move |_| on_intent.call(forward_intent.clone()),
                    "{forward.label}"
                }
            }
        }
    }
}

#[component]
fn ResultsPanel(
    results: ResultsVm,
    guided: bool,
    exit_label: &'static str,
    on_retry: EventHandler<()>,
    on_exit: EventHandler<()>,
) -> Element {
    let retry_label = if guided { "Retake Quiz" } else { "Try Again" };

    rsx! {
        div { class: "results",
            h3 { class: "results__title", "Quiz Complete!" }
            if guided {
                p { class: "results__ratio {results.score_class}", "{results.ratio}" }
                if let Some(badge) = results.badge {
                    span { class: "badge {results.badge_class}", "{badge}" }
                }
            } else {
                p { class: "results__percent {results.score_class}", "{results.percent}" }
            }
            p { class: "results__detail", "{results.detail}" }
            p { class: "results__elapsed", "{results.elapsed}" }
            div { class: "results__actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_retry.call(()),
                    "{retry_label}"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_exit.call(()),
                    "{exit_label}"
                }
            }
            if guided {
                h4 { class: "results__section", "Detailed Results" }
            }
            div { class: "results__reviews",
                for (i, card) in results.reviews.iter().enumerate() {
                    ReviewCard { key: "{i}", card: card.clone() }
                }
            }
        }
    }
}

#[component]
fn ReviewCard(card: ReviewCardVm) -> Element {
    rsx! {
        div { class: if card.is_correct { "review review--correct" } else { "review review--wrong" },
            p { class: "review__heading", "{card.heading}" }
            for (i, row) in card.rows.iter().enumerate() {
                div { key: "{i}", class: "{row.class}",
                    if let Some(letter) = row.letter {
                        span { class: "review__letter", "{letter}. " }
                    }
                    if let Some(lead) = row.lead {
                        strong { "{lead}" }
                    }
                    span { "{row.text}" }
                    if let Some(suffix) = row.suffix {
                        span { class: "review__suffix", " {suffix}" }
                    }
                }
            }
            if !card.explanation.is_empty() {
                p { class: "review__explanation",
                    strong { "Explanation: " }
                    "{card.explanation}"
                }
            }
        }
    }
}
