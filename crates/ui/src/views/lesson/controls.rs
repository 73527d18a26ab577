use dioxus::prelude::*;

use physix_core::sim::scenes::interference::InterferencePreset;
use physix_core::sim::{AnimationParameters, SceneKind};
use services::{DriverError, DriverHandle, Playback};

use crate::vm::{ControlVm, interference_presets, map_controls, map_playback};

/// A parameter write from the controls panel.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum ControlEdit {
    Number { key: &'static str, value: f64 },
    Toggle { key: &'static str },
    Choice { key: &'static str, value: &'static str },
    Preset(InterferencePreset),
}

/// Applies an edit, counting it as interaction when the slide has a simulator.
pub(super) fn apply_edit(
    params: &mut AnimationParameters,
    playback: Option<&mut Playback>,
    edit: &ControlEdit,
) {
    let result: Result<(), DriverError> = match (edit, playback) {
        (ControlEdit::Number { key, value }, Some(playback)) => {
            playback.set_number(params, key, *value).map(|_| ())
        }
        (ControlEdit::Toggle { key }, Some(playback)) => {
            playback.toggle_flag(params, key).map(|_| ())
        }
        (ControlEdit::Choice { key, value }, Some(playback)) => {
            playback.set_choice(params, key, value)
        }
        (ControlEdit::Preset(preset), playback) => preset.apply(params).map(|()| {
            if let Some(playback) = playback {
                playback.mark_interacted();
            }
        }).map_err(Into::into),
        (ControlEdit::Number { key, value }, None) => {
            params.set_number(key, *value).map(|_| ()).map_err(Into::into)
        }
        (ControlEdit::Toggle { key }, None) => params.toggle(key).map(|_| ()).map_err(Into::into),
        (ControlEdit::Choice { key, value }, None) => {
            params.set_choice(key, value).map_err(Into::into)
        }
    };
    if let Err(err) = result {
        log::warn!("ignored control edit {edit:?}: {err}");
    }
}

#[component]
pub(super) fn ControlsPanel(
    scenes: Vec<SceneKind>,
    params: Signal<AnimationParameters>,
    on_edit: EventHandler<ControlEdit>,
) -> Element {
    let controls = map_controls(&scenes, &params.read());
    let show_presets = scenes.contains(&SceneKind::Interference);

    rsx! {
        div { class: "controls",
            if show_presets {
                div { class: "controls__presets",
                    for preset in interference_presets() {
                        button {
                            key: "{preset.label}",
                            class: "preset",
                            r#type: "button",
                            onclick: move |_| on_edit.call(ControlEdit::Preset(preset.preset)),
                            span { class: "preset__label", "{preset.label}" }
                            span { class: "preset__hint", "{preset.hint}" }
                        }
                    }
                }
            }
            for control in controls {
                ControlRow { key: "{control.key()}", control: control.clone(), on_edit }
            }
        }
    }
}

#[component]
fn ControlRow(control: ControlVm, on_edit: EventHandler<ControlEdit>) -> Element {
    match control {
        ControlVm::Slider {
            key,
            label,
            min,
            max,
            step,
            value,
        } => rsx! {
            label { class: "control control--slider",
                span { class: "control__label", "{label}" }
                input {
                    r#type: "range",
                    min: "{min}",
                    max: "{max}",
                    step: "{step}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| {
                        match evt.value().parse::<f64>() {
                            Ok(value) => on_edit.call(ControlEdit::Number { key, value }),
                            Err(_) => log::debug!("unparsable slider value for {key}"),
                        }
                    },
                }
            }
        },
        ControlVm::Toggle { key, on, button } => rsx! {
            button {
                class: if on { "control control--toggle control--on" } else { "control control--toggle" },
                r#type: "button",
                onclick: move |_| on_edit.call(ControlEdit::Toggle { key }),
                "{button}"
            }
        },
        ControlVm::Choice {
            key,
            label,
            options,
        } => rsx! {
            div { class: "control control--choice",
                span { class: "control__label", "{label}" }
                div { class: "control__options",
                    for option in options {
                        button {
                            key: "{option.value}",
                            class: if option.selected { "choice choice--selected" } else { "choice" },
                            r#type: "button",
                            onclick: move |_| on_edit.call(ControlEdit::Choice { key, value: option.value }),
                            "{option.label}"
                        }
                    }
                }
            }
        },
    }
}

/// Play, pause and reset for a simulator scene, plus its completion button.
#[component]
pub(super) fn SimulatorToolbar(
    scene: SceneKind,
    params: Signal<AnimationParameters>,
    playback: Signal<Option<Playback>>,
    handles: Signal<Vec<(SceneKind, DriverHandle)>>,
    on_complete: EventHandler<()>,
) -> Element {
    let toolbar = {
        let playback = playback.read();
        playback
            .as_ref()
            .and_then(|p| map_playback(scene, p, &params.read()))
    };
    let Some(toolbar) = toolbar else {
        return rsx! {};
    };

    let on_toggle = move |_: MouseEvent| {
        let mut playback = playback;
        let mut params = params;
        let mut guard = playback.write();
        let Some(playback) = guard.as_mut() else {
            return;
        };
        if let Err(err) = playback.toggle(&mut params.write()) {
            log::warn!("play toggle failed: {err}");
        }
    };
    let on_reset = move |_: MouseEvent| {
        let mut playback = playback;
        let mut params = params;
        let handle = handles
            .read()
            .iter()
            .find(|(kind, _)| *kind == scene)
            .map(|(_, handle)| handle.clone());
        let Some(handle) = handle else {
            log::debug!("reset before {scene:?} started");
            return;
        };
        let mut guard = playback.write();
        let Some(playback) = guard.as_mut() else {
            return;
        };
        if let Err(err) = playback.reset(&mut params.write(), &handle) {
            log::warn!("reset failed: {err}");
        }
    };

    rsx! {
        div { class: "simulator-toolbar",
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: on_toggle,
                "{toolbar.play_label}"
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: on_reset,
                "Reset"
            }
            if let Some(label) = toolbar.completion_label {
                if toolbar.can_complete {
                    button {
                        class: "btn btn-success",
                        r#type: "button",
                        onclick: move |_| on_complete.call(()),
                        "{label}"
                    }
                }
            }
        }
    }
}
