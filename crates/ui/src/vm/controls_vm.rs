use physix_core::sim::scenes::interference::InterferencePreset;
use physix_core::sim::{AnimationParameters, ControlKind, ControlSpec, SceneKind};
use services::Playback;

#[derive(Clone, Debug, PartialEq)]
pub struct ChoiceOptionVm {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ControlVm {
    Slider {
        key: &'static str,
        /// Label with the current value, e.g. `Magnitude: 4.0 units`.
        label: String,
        min: f64,
        max: f64,
        step: f64,
        value: f64,
    },
    Toggle {
        key: &'static str,
        on: bool,
        /// Button text, e.g. `Hide Individual Waves`.
        button: String,
    },
    Choice {
        key: &'static str,
        label: &'static str,
        options: Vec<ChoiceOptionVm>,
    },
}

impl ControlVm {
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            ControlVm::Slider { key, .. }
            | ControlVm::Toggle { key, .. }
            | ControlVm::Choice { key, .. } => key,
        }
    }
}

/// Simulator toolbar for scenes with a play toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackVm {
    pub play_label: &'static str,
    pub is_playing: bool,
    pub completion_label: Option<&'static str>,
    pub can_complete: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetVm {
    pub preset: InterferencePreset,
    pub label: &'static str,
    pub hint: &'static str,
}

/// Controls of the given scenes in first-seen order, without their play toggles.
#[must_use]
pub fn map_controls(scenes: &[SceneKind], params: &AnimationParameters) -> Vec<ControlVm> {
    let mut specs: Vec<ControlSpec> = Vec::new();
    for kind in scenes {
        let gate = kind.play_control().map(|g| g.key);
        for spec in kind.controls() {
            if Some(spec.key) == gate || specs.iter().any(|s| s.key == spec.key) {
                continue;
            }
            specs.push(spec);
        }
    }
    specs.iter().map(|spec| map_control(spec, params)).collect()
}

#[must_use]
pub fn map_control(spec: &ControlSpec, params: &AnimationParameters) -> ControlVm {
    match spec.kind {
        ControlKind::Slider { min, max, step, .. } => {
            let value = params.number(spec);
            ControlVm::Slider {
                key: spec.key,
                label: slider_label(spec, value),
                min,
                max,
                step,
                value,
            }
        }
        ControlKind::Toggle { .. } => {
            let on = params.flag(spec);
            let verb = if on { "Hide" } else { "Show" };
            ControlVm::Toggle {
                key: spec.key,
                on,
                button: format!("{verb} {}", spec.label),
            }
        }
        ControlKind::Choice { options, .. } => {
            let current = params.choice(spec);
            ControlVm::Choice {
                key: spec.key,
                label: spec.label,
                options: options
                    .iter()
                    .map(|o| ChoiceOptionVm {
                        value: o.value,
                        label: o.label,
                        selected: o.value == current,
                    })
                    .collect(),
            }
        }
    }
}

fn slider_label(spec: &ControlSpec, value: f64) -> String {
    let number = spec.format_number(value);
    match spec.unit {
        "" => format!("{}: {number}", spec.label),
        "°" | "%" => format!("{}: {number}{}", spec.label, spec.unit),
        unit => format!("{}: {number} {unit}", spec.label),
    }
}

#[must_use]
pub fn map_playback(
    kind: SceneKind,
    playback: &Playback,
    params: &AnimationParameters,
) -> Option<PlaybackVm> {
    if !playback.has_controls() {
        return None;
    }
    let is_playing = playback.is_playing(params);
    Some(PlaybackVm {
        play_label: if is_playing { "Pause" } else { "Play" },
        is_playing,
        completion_label: completion_label(kind),
        can_complete: playback.can_continue(),
    })
}

fn completion_label(kind: SceneKind) -> Option<&'static str> {
    match kind {
        SceneKind::WaveSimulator => Some("Complete Wave Simulator"),
        SceneKind::Interference => Some("Complete Interference Demo"),
        _ => None,
    }
}

#[must_use]
pub fn interference_presets() -> Vec<PresetVm> {
    InterferencePreset::ALL
        .iter()
        .map(|&preset| PresetVm {
            preset,
            label: preset.label(),
            hint: preset.hint(),
        })
        .collect()
}
