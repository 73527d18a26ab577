use std::f64::consts::TAU;

use crate::sim::clock::ClockPolicy;
use crate::sim::draw::{Frame, Stroke};
use crate::sim::geom::{Color, Surface, Vec2};
use crate::sim::params::{AnimationParameters, ChoiceOption, ControlSpec};
use crate::sim::scene::{Readout, Scene, UNDEFINED_READOUT};

use super::{BLUE, CYAN, SLATE_DARK};

//
// ─── WAVE FORMS ────────────────────────────────────────────────────────────────
//

/// Normalised wave form in `[-1, 1]` as a function of phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveForm {
    Sine,
    Cosine,
    Square,
    Triangular,
}

impl WaveForm {
    fn from_choice(value: &str) -> Self {
        match value {
            "cosine" => WaveForm::Cosine,
            "square" => WaveForm::Square,
            "triangular" => WaveForm::Triangular,
            _ => WaveForm::Sine,
        }
    }

    #[must_use]
    pub fn sample(self, phase: f64) -> f64 {
        match self {
            WaveForm::Sine => phase.sin(),
            WaveForm::Cosine => phase.cos(),
            WaveForm::Square => sign(phase.sin()),
            WaveForm::Triangular => {
                let p = phase.rem_euclid(TAU) / TAU;
                if p < 0.5 { 4.0 * p - 1.0 } else { 3.0 - 4.0 * p }
            }
        }
    }
}

/// Like `f64::signum` but zero maps to zero.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Wavelength `2π / f` in pixels; undefined for zero frequency.
#[must_use]
pub fn wavelength(frequency: f64) -> Option<f64> {
    (frequency.abs() > f64::EPSILON).then(|| TAU / frequency)
}

/// Period `2π / (f * speed)`; undefined when either is zero.
#[must_use]
pub fn period(frequency: f64, speed: f64) -> Option<f64> {
    let denom = frequency * speed;
    (denom.abs() > f64::EPSILON).then(|| TAU / denom)
}

fn fmt_or_undefined(value: Option<f64>, decimals: usize, unit: &str) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.decimals$}{unit}"),
        _ => UNDEFINED_READOUT.to_string(),
    }
}

//
// ─── WAVE SHAPES (lesson) ──────────────────────────────────────────────────────
//

const WAVE_TYPES: &[ChoiceOption] = &[
    ChoiceOption {
        value: "transverse",
        label: "Transverse",
    },
    ChoiceOption {
        value: "longitudinal",
        label: "Longitudinal",
    },
];

const SHAPES: &[ChoiceOption] = &[
    ChoiceOption {
        value: "sine",
        label: "Sine Wave",
    },
    ChoiceOption {
        value: "square",
        label: "Square Wave",
    },
    ChoiceOption {
        value: "triangular",
        label: "Triangular Wave",
    },
];

pub const AMPLITUDE: ControlSpec =
    ControlSpec::slider("amplitude", "Amplitude", "px", 10.0, 60.0, 5.0, 30.0);
pub const FREQUENCY: ControlSpec =
    ControlSpec::slider("frequency", "Frequency", "Hz", 0.5, 3.0, 0.1, 1.0);
pub const WAVE_TYPE: ControlSpec =
    ControlSpec::choice("wave_type", "Wave Type", WAVE_TYPES, "transverse");
pub const SHAPE: ControlSpec = ControlSpec::choice("wave_shape", "Wave Shape", SHAPES, "sine");

const PARTICLES: usize = 50;

/// Phase at column `x`: `x * 0.02 + t * f * 0.1`.
#[must_use]
pub fn lesson_phase(x: f64, t: f64, frequency: f64) -> f64 {
    x * 0.02 + t * frequency * 0.1
}

/// Horizontal displacement of particle `i` in the longitudinal view.
#[must_use]
pub fn particle_displacement(i: usize, amplitude: f64, frequency: f64, t: f64) -> f64 {
    amplitude * 0.3 * (i as f64 * 0.3 + t * frequency * 0.1).sin()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WaveShapesScene;

impl Scene for WaveShapesScene {
    fn surface(&self) -> Surface {
        Surface::new(400.0, 300.0)
    }

    fn controls(&self) -> Vec<ControlSpec> {
        vec![AMPLITUDE, FREQUENCY, WAVE_TYPE, SHAPE]
    }

    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(1.0)
    }

    fn render(&self, params: &AnimationParameters, t: f64) -> Frame {
        let surface = self.surface();
        let mid = surface.height / 2.0;
        let amplitude = params.number(&AMPLITUDE);
        let frequency = params.number(&FREQUENCY);
        let mut frame = Frame::new(surface);

        if params.choice(&WAVE_TYPE) == "longitudinal" {
            let spacing = surface.width / PARTICLES as f64;
            for i in 0..PARTICLES {
                let d = particle_displacement(i, amplitude, frequency, t);
                let color = Color::hsl(220.0 + d * 2.0, 0.7, 0.6);
                frame.fill_circle(Vec2::new(i as f64 * spacing + d, mid), 4.0, color);
            }
            return frame;
        }

        let form = WaveForm::from_choice(params.choice(&SHAPE));
        let points = (0..surface.width as usize)
            .map(|x| {
                let x = x as f64;
                Vec2::new(x, mid + amplitude * form.sample(lesson_phase(x, t, frequency)))
            })
            .collect();
        frame.polyline(points, Stroke::solid(BLUE, 3.0));
        frame.line(
            Vec2::new(0.0, mid),
            Vec2::new(surface.width, mid),
            Stroke::dashed(SLATE_DARK, 1.0, 5.0, 5.0),
        );
        frame
    }

    fn readouts(&self, params: &AnimationParameters, _t: f64) -> Vec<Readout> {
        let f = params.number(&FREQUENCY);
        let defined = f.abs() > f64::EPSILON;
        vec![
            Readout::new(
                "Period (T)",
                fmt_or_undefined(defined.then(|| 1.0 / f), 2, " seconds"),
            ),
            Readout::new(
                "Wavelength (λ)",
                fmt_or_undefined(defined.then(|| 400.0 / (f * 10.0)), 1, " pixels"),
            ),
            Readout::new("Wave Speed (v)", format!("{:.1} pixels/second", f * 40.0)),
        ]
    }
}

//
// ─── WAVE SIMULATOR ────────────────────────────────────────────────────────────
//

const SIM_TYPES: &[ChoiceOption] = &[
    ChoiceOption {
        value: "sine",
        label: "Sine",
    },
    ChoiceOption {
        value: "cosine",
        label: "Cosine",
    },
    ChoiceOption {
        value: "square",
        label: "Square",
    },
];

pub const SIM_AMPLITUDE: ControlSpec =
    ControlSpec::slider("sim_amplitude", "Amplitude", "px", 10.0, 100.0, 5.0, 50.0);
pub const SIM_FREQUENCY: ControlSpec =
    ControlSpec::slider("sim_frequency", "Frequency", "", 0.005, 0.1, 0.005, 0.02);
pub const SIM_SPEED: ControlSpec = ControlSpec::slider("sim_speed", "Speed", "", 0.5, 5.0, 0.5, 2.0);
pub const SIM_TYPE: ControlSpec = ControlSpec::choice("sim_type", "Wave Type", SIM_TYPES, "sine");
pub const PLAYING: ControlSpec = ControlSpec::toggle("sim_playing", "Play", false);

const GRID: Color = Color::rgba(255, 255, 255, 26);
const EQUILIBRIUM: Color = Color::rgba(156, 163, 175, 204);
const MARKER: Color = Color::hex(0x4ade80);

#[derive(Debug, Clone, Copy, Default)]
pub struct WaveSimulatorScene;

impl Scene for WaveSimulatorScene {
    fn surface(&self) -> Surface {
        Surface::new(800.0, 300.0)
    }

    fn controls(&self) -> Vec<ControlSpec> {
        vec![SIM_AMPLITUDE, SIM_FREQUENCY, SIM_SPEED, SIM_TYPE, PLAYING]
    }

    /// +0.1 per frame while playing.
    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(0.1).gated_by(PLAYING)
    }

    fn render(&self, params: &AnimationParameters, t: f64) -> Frame {
        let surface = self.surface();
        let mid = surface.height / 2.0;
        let amplitude = params.number(&SIM_AMPLITUDE);
        let frequency = params.number(&SIM_FREQUENCY);
        let speed = params.number(&SIM_SPEED);
        let form = WaveForm::from_choice(params.choice(&SIM_TYPE));
        let mut frame = Frame::new(surface);

        frame.grid(40.0, 30.0, &Stroke::solid(GRID, 1.0));
        frame.line(
            Vec2::new(0.0, mid),
            Vec2::new(surface.width, mid),
            Stroke::dashed(EQUILIBRIUM, 2.0, 5.0, 5.0),
        );

        let points = (0..surface.width as usize)
            .map(|x| {
                let x = x as f64;
                Vec2::new(x, mid + amplitude * form.sample(frequency * x - speed * t))
            })
            .collect();
        frame.polyline(points, Stroke::solid(CYAN, 3.0));

        for y in [mid - amplitude, mid + amplitude] {
            frame.line(
                Vec2::new(0.0, y),
                Vec2::new(surface.width, y),
                Stroke::dashed(MARKER, 2.0, 3.0, 3.0),
            );
        }
        frame.text(
            Vec2::new(10.0, mid - amplitude - 10.0),
            format!("+A ({amplitude}px)"),
            MARKER,
            14.0,
        );
        frame.text(
            Vec2::new(10.0, mid + amplitude + 25.0),
            format!("-A (-{amplitude}px)"),
            MARKER,
            14.0,
        );
        frame
    }

    fn readouts(&self, params: &AnimationParameters, _t: f64) -> Vec<Readout> {
        let f = params.number(&SIM_FREQUENCY);
        let speed = params.number(&SIM_SPEED);
        let lambda = wavelength(f);
        vec![
            Readout::new("Wavelength (λ)", fmt_or_undefined(lambda, 1, "px")),
            Readout::new("Period (T)", fmt_or_undefined(period(f, speed), 2, "s")),
            Readout::new(
                "Wave Speed (v)",
                fmt_or_undefined(lambda.map(|l| f * l * speed), 1, " px/s"),
            ),
        ]
    }
}
