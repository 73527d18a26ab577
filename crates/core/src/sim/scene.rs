use serde::{Deserialize, Serialize};

use super::clock::ClockPolicy;
use super::draw::Frame;
use super::geom::Surface;
use super::params::{AnimationParameters, ControlSpec};
use super::scenes::{atom, fluids, interference, kinematics, optics, vectors, waves};

/// Derived value shown next to a drawing, e.g. a computed wavelength.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub label: &'static str,
    pub value: String,
}

impl Readout {
    #[must_use]
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Placeholder for values that are undefined for the current parameters.
pub const UNDEFINED_READOUT: &str = "—";

/// A lesson drawing: a pure function from `(parameters, time)` to a frame.
///
/// Implementations hold no mutable state. Simulation time is owned by the
/// driver and passed in; nothing here reads a wall clock.
pub trait Scene: Send + Sync {
    fn surface(&self) -> Surface;

    /// Controls this scene reads. Values come from the lesson's parameter set.
    fn controls(&self) -> Vec<ControlSpec>;

    fn clock_policy(&self) -> ClockPolicy;

    fn render(&self, params: &AnimationParameters, t: f64) -> Frame;

    fn readouts(&self, _params: &AnimationParameters, _t: f64) -> Vec<Readout> {
        Vec::new()
    }
}

/// Every drawing a slide can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    Atom,
    WaveShapes,
    WaveSimulator,
    Interference,
    Reflection,
    Refraction,
    Lenses,
    FluidPressure,
    Buoyancy,
    Bernoulli,
    LinearMotion,
    CircularMotion,
    MotionGraphs,
    VectorArrow,
    RelativeMotion,
}

impl SceneKind {
    pub const ALL: [SceneKind; 15] = [
        SceneKind::Atom,
        SceneKind::WaveShapes,
        SceneKind::WaveSimulator,
        SceneKind::Interference,
        SceneKind::Reflection,
        SceneKind::Refraction,
        SceneKind::Lenses,
        SceneKind::FluidPressure,
        SceneKind::Buoyancy,
        SceneKind::Bernoulli,
        SceneKind::LinearMotion,
        SceneKind::CircularMotion,
        SceneKind::MotionGraphs,
        SceneKind::VectorArrow,
        SceneKind::RelativeMotion,
    ];

    #[must_use]
    pub fn scene(self) -> &'static dyn Scene {
        match self {
            SceneKind::Atom => &atom::AtomScene,
            SceneKind::WaveShapes => &waves::WaveShapesScene,
            SceneKind::WaveSimulator => &waves::WaveSimulatorScene,
            SceneKind::Interference => &interference::InterferenceScene,
            SceneKind::Reflection => &optics::ReflectionScene,
            SceneKind::Refraction => &optics::RefractionScene,
            SceneKind::Lenses => &optics::LensScene,
            SceneKind::FluidPressure => &fluids::PressureScene,
            SceneKind::Buoyancy => &fluids::BuoyancyScene,
            SceneKind::Bernoulli => &fluids::BernoulliScene,
            SceneKind::LinearMotion => &kinematics::LinearMotionScene,
            SceneKind::CircularMotion => &kinematics::CircularMotionScene,
            SceneKind::MotionGraphs => &kinematics::MotionGraphScene,
            SceneKind::VectorArrow => &vectors::VectorArrowScene,
            SceneKind::RelativeMotion => &vectors::RelativeMotionScene,
        }
    }

    #[must_use]
    pub fn controls(self) -> Vec<ControlSpec> {
        self.scene().controls()
    }

    #[must_use]
    pub fn surface(self) -> Surface {
        self.scene().surface()
    }

    /// Panel heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SceneKind::Atom => "Atom Visualization",
            SceneKind::WaveShapes => "Wave Motion Visualization",
            SceneKind::WaveSimulator => "Wave Simulator",
            SceneKind::Interference => "Wave Interference",
            SceneKind::Reflection => "Reflection",
            SceneKind::Refraction => "Refraction",
            SceneKind::Lenses => "Lenses",
            SceneKind::FluidPressure => "Pressure in Fluids",
            SceneKind::Buoyancy => "Buoyancy",
            SceneKind::Bernoulli => "Pipe Flow",
            SceneKind::LinearMotion => "Linear Motion",
            SceneKind::CircularMotion => "Circular Motion",
            SceneKind::MotionGraphs => "Motion Graphs",
            SceneKind::VectorArrow => "Vector Visualization",
            SceneKind::RelativeMotion => "Relative Motion",
        }
    }

    /// Scenes with a play toggle expose play, pause and reset buttons.
    #[must_use]
    pub fn play_control(self) -> Option<ControlSpec> {
        self.scene().clock_policy().gate
    }
}
