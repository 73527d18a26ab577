use std::f64::consts::{PI, TAU};

use crate::sim::clock::ClockPolicy;
use crate::sim::draw::{Frame, Stroke};
use crate::sim::geom::{Color, Surface, Vec2};
use crate::sim::params::{AnimationParameters, ControlSpec, ParamError};
use crate::sim::scene::{Readout, Scene};

use super::CYAN;

pub const AMPLITUDE_1: ControlSpec =
    ControlSpec::slider("amplitude_1", "Wave 1 Amplitude", "px", 10.0, 80.0, 5.0, 40.0);
pub const AMPLITUDE_2: ControlSpec =
    ControlSpec::slider("amplitude_2", "Wave 2 Amplitude", "px", 10.0, 80.0, 5.0, 40.0);
pub const FREQUENCY_1: ControlSpec =
    ControlSpec::slider("frequency_1", "Wave 1 Frequency", "", 0.01, 0.08, 0.005, 0.03);
pub const FREQUENCY_2: ControlSpec =
    ControlSpec::slider("frequency_2", "Wave 2 Frequency", "", 0.01, 0.08, 0.005, 0.03);
pub const PHASE_SHIFT: ControlSpec =
    ControlSpec::slider("phase_shift", "Phase Shift", "rad", 0.0, TAU, PI / 8.0, 0.0);
pub const SHOW_INDIVIDUAL: ControlSpec =
    ControlSpec::toggle("show_individual", "Individual Waves", true);
pub const PLAYING: ControlSpec = ControlSpec::toggle("interference_playing", "Play", false);

const TIME_SCALE: f64 = 0.05;
// one frequency step, less float slack so neighbouring grid values never compare equal
const FREQUENCY_TOLERANCE: f64 = 0.005 - 1e-9;
const PHASE_TOLERANCE: f64 = 0.5;

const WAVE_1: Color = Color::rgba(239, 68, 68, 179);
const WAVE_2: Color = Color::rgba(59, 130, 246, 179);
const GRID: Color = Color::rgba(255, 255, 255, 26);
const EQUILIBRIUM: Color = Color::rgba(156, 163, 175, 204);
const LEGEND_BG: Color = Color::rgba(0, 0, 0, 179);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterferenceKind {
    Constructive,
    Destructive,
    Complex,
}

impl InterferenceKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InterferenceKind::Constructive => "Constructive",
            InterferenceKind::Destructive => "Destructive",
            InterferenceKind::Complex => "Complex",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            InterferenceKind::Constructive => "Waves add together",
            InterferenceKind::Destructive => "Waves cancel out",
            InterferenceKind::Complex => "Mixed interference pattern",
        }
    }
}

/// Classifies the pattern from the two frequencies and the phase shift.
#[must_use]
pub fn classify(frequency_1: f64, frequency_2: f64, phase: f64) -> InterferenceKind {
    let same_frequency = (frequency_1 - frequency_2).abs() < FREQUENCY_TOLERANCE;
    let phase = phase.abs();
    if same_frequency && phase < PHASE_TOLERANCE {
        InterferenceKind::Constructive
    } else if same_frequency && (phase - PI).abs() < PHASE_TOLERANCE {
        InterferenceKind::Destructive
    } else {
        InterferenceKind::Complex
    }
}

/// Both component displacements and their sum at sample `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Superposition {
    pub y1: f64,
    pub y2: f64,
    pub resultant: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavePair {
    pub amplitude_1: f64,
    pub frequency_1: f64,
    pub amplitude_2: f64,
    pub frequency_2: f64,
    pub phase: f64,
}

impl WavePair {
    fn from_params(params: &AnimationParameters) -> Self {
        Self {
            amplitude_1: params.number(&AMPLITUDE_1),
            frequency_1: params.number(&FREQUENCY_1),
            amplitude_2: params.number(&AMPLITUDE_2),
            frequency_2: params.number(&FREQUENCY_2),
            phase: params.number(&PHASE_SHIFT),
        }
    }

    /// `y1 = A1 sin(f1 x − 0.05 t)`, `y2 = A2 sin(f2 x − 0.05 t + φ)`.
    #[must_use]
    pub fn at(&self, x: f64, t: f64) -> Superposition {
        let drift = TIME_SCALE * t;
        let y1 = self.amplitude_1 * (self.frequency_1 * x - drift).sin();
        let y2 = self.amplitude_2 * (self.frequency_2 * x - drift + self.phase).sin();
        Superposition {
            y1,
            y2,
            resultant: y1 + y2,
        }
    }

    #[must_use]
    pub fn kind(&self) -> InterferenceKind {
        classify(self.frequency_1, self.frequency_2, self.phase)
    }
}

/// Quick settings offered next to the interference sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterferencePreset {
    Constructive,
    Destructive,
    Complex,
}

impl InterferencePreset {
    pub const ALL: [InterferencePreset; 3] = [
        InterferencePreset::Constructive,
        InterferencePreset::Destructive,
        InterferencePreset::Complex,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InterferencePreset::Constructive => "Constructive",
            InterferencePreset::Destructive => "Destructive",
            InterferencePreset::Complex => "Beat Pattern",
        }
    }

    #[must_use]
    pub fn hint(self) -> &'static str {
        match self {
            InterferencePreset::Constructive => "Same phase",
            InterferencePreset::Destructive => "Opposite phase",
            InterferencePreset::Complex => "Different frequencies",
        }
    }

    /// Pattern the preset produces.
    #[must_use]
    pub fn kind(self) -> InterferenceKind {
        match self {
            InterferencePreset::Constructive => InterferenceKind::Constructive,
            InterferencePreset::Destructive => InterferenceKind::Destructive,
            InterferencePreset::Complex => InterferenceKind::Complex,
        }
    }

    #[must_use]
    pub fn waves(self) -> WavePair {
        let (amplitude_2, frequency_2, phase) = match self {
            InterferencePreset::Constructive => (40.0, 0.03, 0.0),
            InterferencePreset::Destructive => (40.0, 0.03, PI),
            InterferencePreset::Complex => (30.0, 0.04, PI / 4.0),
        };
        WavePair {
            amplitude_1: 40.0,
            frequency_1: 0.03,
            amplitude_2,
            frequency_2,
            phase,
        }
    }

    /// Writes the preset into `params`, leaving toggles untouched.
    ///
    /// # Errors
    ///
    /// Returns `ParamError` if `params` lacks the interference sliders.
    pub fn apply(self, params: &mut AnimationParameters) -> Result<(), ParamError> {
        let waves = self.waves();
        params.set_number(AMPLITUDE_1.key, waves.amplitude_1)?;
        params.set_number(FREQUENCY_1.key, waves.frequency_1)?;
        params.set_number(AMPLITUDE_2.key, waves.amplitude_2)?;
        params.set_number(FREQUENCY_2.key, waves.frequency_2)?;
        params.set_number(PHASE_SHIFT.key, waves.phase)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InterferenceScene;

impl Scene for InterferenceScene {
    fn surface(&self) -> Surface {
        Surface::new(800.0, 400.0)
    }

    fn controls(&self) -> Vec<ControlSpec> {
        vec![
            AMPLITUDE_1,
            AMPLITUDE_2,
            FREQUENCY_1,
            FREQUENCY_2,
            PHASE_SHIFT,
            SHOW_INDIVIDUAL,
            PLAYING,
        ]
    }

    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(1.0).gated_by(PLAYING)
    }

    fn render(&self, params: &AnimationParameters, t: f64) -> Frame {
        let surface = self.surface();
        let mid = surface.height / 2.0;
        let pair = WavePair::from_params(params);
        let show_individual = params.flag(&SHOW_INDIVIDUAL);
        let mut frame = Frame::new(surface);

        frame.grid(40.0, 30.0, &Stroke::solid(GRID, 1.0));
        frame.line(
            Vec2::new(0.0, mid),
            Vec2::new(surface.width, mid),
            Stroke::dashed(EQUILIBRIUM, 2.0, 5.0, 5.0),
        );

        let samples: Vec<(f64, Superposition)> = (0..surface.width as usize)
            .map(|x| {
                let x = x as f64;
                (x, pair.at(x, t))
            })
            .collect();

        if show_individual {
            let wave_1 = samples.iter().map(|(x, s)| Vec2::new(*x, mid + s.y1)).collect();
            frame.polyline(wave_1, Stroke::solid(WAVE_1, 2.0));
            let wave_2 = samples.iter().map(|(x, s)| Vec2::new(*x, mid + s.y2)).collect();
            frame.polyline(wave_2, Stroke::solid(WAVE_2, 2.0));
        }
        let resultant = samples
            .iter()
            .map(|(x, s)| Vec2::new(*x, mid + s.resultant))
            .collect();
        frame.polyline(resultant, Stroke::solid(CYAN, 3.0));

        let legend_height = if show_individual { 90.0 } else { 50.0 };
        frame.fill_rect(Vec2::new(10.0, 10.0), Vec2::new(200.0, legend_height), LEGEND_BG);
        if show_individual {
            frame.text(Vec2::new(20.0, 30.0), "— Wave 1", WAVE_1.with_alpha(1.0), 14.0);
            frame.text(Vec2::new(20.0, 50.0), "— Wave 2", WAVE_2.with_alpha(1.0), 14.0);
        }
        let y = if show_individual { 70.0 } else { 30.0 };
        frame.text(Vec2::new(20.0, y), "— Resultant Wave", CYAN, 14.0);
        frame
    }

    fn readouts(&self, params: &AnimationParameters, _t: f64) -> Vec<Readout> {
        let kind = WavePair::from_params(params).kind();
        vec![
            Readout::new("Interference Type", kind.label()),
            Readout::new("Pattern", kind.description()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_frequencies_in_phase_are_constructive() {
        assert_eq!(classify(0.03, 0.03, 0.0), InterferenceKind::Constructive);
        assert_eq!(classify(0.03, 0.032, 0.4), InterferenceKind::Constructive);
    }

    #[test]
    fn half_cycle_shift_is_destructive() {
        assert_eq!(classify(0.03, 0.03, PI), InterferenceKind::Destructive);
        assert_eq!(classify(0.03, 0.03, PI - 0.4), InterferenceKind::Destructive);
        assert_eq!(classify(0.03, 0.03, -PI), InterferenceKind::Destructive);
    }

    #[test]
    fn one_frequency_step_apart_is_never_the_same_frequency() {
        let mut p = AnimationParameters::new([FREQUENCY_1, FREQUENCY_2]);
        for low in [0.01, 0.03, 0.035, 0.06] {
            let f1 = p.set_number(FREQUENCY_1.key, low).unwrap();
            let f2 = p.set_number(FREQUENCY_2.key, low + 0.005).unwrap();
            assert_eq!(classify(f1, f2, 0.0), InterferenceKind::Complex, "{f1} vs {f2}");
        }
    }

    #[test]
    fn anything_else_is_complex() {
        assert_eq!(classify(0.03, 0.05, 0.0), InterferenceKind::Complex);
        assert_eq!(classify(0.03, 0.03, PI / 2.0), InterferenceKind::Complex);
        assert_eq!(classify(0.03, 0.03, 3.0 * PI / 2.0), InterferenceKind::Complex);
    }

    #[test]
    fn resultant_is_sum_of_components() {
        let pair = WavePair {
            amplitude_1: 40.0,
            frequency_1: 0.03,
            amplitude_2: 20.0,
            frequency_2: 0.05,
            phase: 1.0,
        };
        let s = pair.at(17.0, 8.0);
        assert!((s.y1 - 40.0 * (0.03 * 17.0 - 0.4f64).sin()).abs() < 1e-12);
        assert!((s.y2 - 20.0 * (0.05 * 17.0 - 0.4 + 1.0f64).sin()).abs() < 1e-12);
        assert!((s.resultant - (s.y1 + s.y2)).abs() < 1e-12);
    }

    #[test]
    fn opposite_phase_cancels_at_every_sample() {
        let mut params = AnimationParameters::new(InterferenceScene.controls());
        params.set_number("phase_shift", PI).unwrap();
        let pair = WavePair::from_params(&params);
        for x in [0.0, 10.0, 333.0] {
            assert!(pair.at(x, 5.0).resultant.abs() < 1e-9);
        }
        assert_eq!(
            InterferenceScene.readouts(&params, 0.0)[0].value,
            "Destructive"
        );
    }

    #[test]
    fn hiding_individual_waves_leaves_one_polyline() {
        let mut params = AnimationParameters::new(InterferenceScene.controls());
        params.set_flag("show_individual", false).unwrap();
        let frame = InterferenceScene.render(&params, 0.0);
        let polylines = frame
            .cmds()
            .iter()
            .filter(|c| matches!(c, crate::sim::DrawCmd::Polyline { .. }))
            .count();
        assert_eq!(polylines, 1);
        assert_eq!(frame.texts().collect::<Vec<_>>(), vec!["— Resultant Wave"]);
    }

    #[test]
    fn presets_classify_as_named() {
        for preset in InterferencePreset::ALL {
            assert_eq!(preset.waves().kind(), preset.kind());
        }
    }

    #[test]
    fn applying_preset_keeps_toggles() {
        let mut params = AnimationParameters::new(InterferenceScene.controls());
        params.set_flag(SHOW_INDIVIDUAL.key, false).unwrap();
        InterferencePreset::Complex.apply(&mut params).unwrap();
        assert_eq!(params.number(&AMPLITUDE_2), 30.0);
        assert_eq!(params.number(&FREQUENCY_2), 0.04);
        assert!(!params.flag(&SHOW_INDIVIDUAL));

        InterferencePreset::Destructive.apply(&mut params).unwrap();
        assert!((params.number(&PHASE_SHIFT) - PI).abs() < 1e-6);
    }
}
