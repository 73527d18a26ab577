//! Frame-driven lesson drawings.

mod clock;
mod draw;
mod geom;
mod params;
mod scene;
pub mod scenes;

pub use clock::{ClockPolicy, ClockStep, SimulationClock};
pub use draw::{DrawCmd, Frame, Stroke, TextAnchor};
pub use geom::{Color, Surface, Vec2};
pub use params::{
    AnimationParameters, ChoiceOption, ControlKind, ControlSpec, ParamError, ParamValue,
};
pub use scene::{Readout, Scene, SceneKind, UNDEFINED_READOUT};
