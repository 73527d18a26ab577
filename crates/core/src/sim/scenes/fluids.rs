use crate::sim::clock::ClockPolicy;
use crate::sim::draw::{Frame, Stroke};
use crate::sim::geom::{Color, Surface, Vec2};
use crate::sim::params::{AnimationParameters, ControlSpec};
use crate::sim::scene::{Readout, Scene};

use super::{BLUE, GREEN, RED, SLATE, WHITE};

pub const PRESSURE_LEVELS: ControlSpec =
    ControlSpec::slider("pressure_levels", "Depth Levels", "", 1.0, 5.0, 1.0, 1.0);
pub const OBJECT_DENSITY: ControlSpec =
    ControlSpec::slider("object_density", "Object Density", "g/cm³", 0.2, 2.0, 0.1, 0.8);
pub const FLUID_DENSITY: ControlSpec =
    ControlSpec::slider("fluid_density", "Fluid Density", "g/cm³", 0.5, 1.5, 0.1, 1.0);

const SURFACE: Surface = Surface::new(400.0, 300.0);
const AMBER: Color = Color::hex(0xf59e0b);
const WATER: Color = Color::rgba(59, 130, 246, 77);

//
// ─── PRESSURE ──────────────────────────────────────────────────────────────────
//

const CONTAINER_WIDTH: f64 = 150.0;
const CONTAINER_HEIGHT: f64 = 200.0;
const CONTAINER_TOP: f64 = 50.0;

/// One horizontal band of the pressure column, counted from the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureBand {
    /// Offset of the band's top edge below the container rim.
    pub top: f64,
    pub height: f64,
    pub alpha: f64,
    pub arrow_length: f64,
}

/// Bands for `levels` depth levels; band `i` is drawn `0.3 + 0.4 i / levels` opaque
/// with a pressure arrow `20 + 10 i` pixels long.
#[must_use]
pub fn pressure_bands(levels: usize) -> Vec<PressureBand> {
    if levels == 0 {
        return Vec::new();
    }
    let n = levels as f64;
    let height = CONTAINER_HEIGHT / n;
    (0..levels)
        .map(|i| {
            let i = i as f64;
            PressureBand {
                top: CONTAINER_HEIGHT - (i + 1.0) * height,
                height,
                alpha: 0.3 + i * 0.4 / n,
                arrow_length: 20.0 + i * 10.0,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PressureScene;

impl Scene for PressureScene {
    fn surface(&self) -> Surface {
        SURFACE
    }

    fn controls(&self) -> Vec<ControlSpec> {
        vec![PRESSURE_LEVELS]
    }

    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(1.0)
    }

    fn render(&self, params: &AnimationParameters, _t: f64) -> Frame {
        let mut frame = Frame::new(SURFACE);
        let left = (SURFACE.width - CONTAINER_WIDTH) / 2.0;
        let right = left + CONTAINER_WIDTH;
        let bottom = CONTAINER_TOP + CONTAINER_HEIGHT;

        frame.polyline(
            vec![
                Vec2::new(left, CONTAINER_TOP),
                Vec2::new(left, bottom),
                Vec2::new(right, bottom),
                Vec2::new(right, CONTAINER_TOP),
            ],
            Stroke::solid(SLATE, 3.0),
        );

        let levels = params.number(&PRESSURE_LEVELS).max(0.0) as usize;
        for band in pressure_bands(levels) {
            frame.fill_rect(
                Vec2::new(left + 2.0, CONTAINER_TOP + band.top),
                Vec2::new(CONTAINER_WIDTH - 4.0, band.height - 2.0),
                BLUE.with_alpha(band.alpha),
            );
            let y = CONTAINER_TOP + band.top + band.height / 2.0;
            frame.line(
                Vec2::new(right + 10.0, y),
                Vec2::new(right + 10.0 + band.arrow_length, y),
                Stroke::solid(RED, 2.0),
            );
        }
        frame
    }

    fn readouts(&self, params: &AnimationParameters, _t: f64) -> Vec<Readout> {
        let levels = params.number(&PRESSURE_LEVELS);
        vec![Readout::new(
            "Depth Levels",
            PRESSURE_LEVELS.format_number(levels),
        )]
    }
}

//
// ─── BUOYANCY ──────────────────────────────────────────────────────────────────
//

const FLUID_LEVEL: f64 = 200.0;
const OBJECT_SIZE: f64 = 40.0;
const FORCE_ARROW: f64 = 40.0;
const DENSITY_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buoyancy {
    Floats,
    Neutral,
    Sinks,
}

impl Buoyancy {
    /// Three-way comparison of the densities; equal within `1e-9` is neutral.
    #[must_use]
    pub fn classify(object_density: f64, fluid_density: f64) -> Self {
        let diff = object_density - fluid_density;
        if diff.abs() <= DENSITY_EPSILON {
            Buoyancy::Neutral
        } else if diff < 0.0 {
            Buoyancy::Floats
        } else {
            Buoyancy::Sinks
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Buoyancy::Floats => "Floats",
            Buoyancy::Neutral => "Neutral buoyancy",
            Buoyancy::Sinks => "Sinks",
        }
    }

    fn color(self) -> Color {
        match self {
            Buoyancy::Floats => GREEN,
            Buoyancy::Neutral => AMBER,
            Buoyancy::Sinks => RED,
        }
    }
}

/// Y of the object's top edge for a fluid surface at `level`.
///
/// Floating objects ride `size * ρo / ρf` above the surface, neutral ones sit
/// half-submerged and sinking ones rest 20 px below it.
#[must_use]
pub fn object_top(object_density: f64, fluid_density: f64, level: f64, size: f64) -> f64 {
    match Buoyancy::classify(object_density, fluid_density) {
        Buoyancy::Floats => level - size * (object_density / fluid_density),
        Buoyancy::Neutral => level - size / 2.0,
        Buoyancy::Sinks => level + 20.0,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuoyancyScene;

impl Scene for BuoyancyScene {
    fn surface(&self) -> Surface {
        SURFACE
    }

    fn controls(&self) -> Vec<ControlSpec> {
        vec![OBJECT_DENSITY, FLUID_DENSITY]
    }

    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(1.0)
    }

    fn render(&self, params: &AnimationParameters, _t: f64) -> Frame {
        let object = params.number(&OBJECT_DENSITY);
        let fluid = params.number(&FLUID_DENSITY);
        let state = Buoyancy::classify(object, fluid);
        let x = SURFACE.width / 2.0 - OBJECT_SIZE / 2.0;
        let y = object_top(object, fluid, FLUID_LEVEL, OBJECT_SIZE);
        let mut frame = Frame::new(SURFACE);

        frame.fill_rect(
            Vec2::new(0.0, FLUID_LEVEL),
            Vec2::new(SURFACE.width, SURFACE.height - FLUID_LEVEL),
            WATER,
        );
        frame.line(
            Vec2::new(0.0, FLUID_LEVEL),
            Vec2::new(SURFACE.width, FLUID_LEVEL),
            Stroke::solid(BLUE, 2.0),
        );
        frame.fill_rect(
            Vec2::new(x, y),
            Vec2::new(OBJECT_SIZE, OBJECT_SIZE),
            state.color(),
        );

        if y < FLUID_LEVEL + 50.0 {
            let mid = x + OBJECT_SIZE / 2.0;
            // buoyant force below, weight above
            frame.line(
                Vec2::new(mid, y + OBJECT_SIZE),
                Vec2::new(mid, y + OBJECT_SIZE + FORCE_ARROW),
                Stroke::solid(GREEN, 3.0),
            );
            frame.line(
                Vec2::new(mid, y),
                Vec2::new(mid, y - FORCE_ARROW),
                Stroke::solid(RED, 3.0),
            );
        }

        frame.text(
            Vec2::new(20.0, 30.0),
            format!("Object: {} g/cm³", OBJECT_DENSITY.format_number(object)),
            WHITE,
            12.0,
        );
        frame.text(
            Vec2::new(20.0, 50.0),
            format!("Fluid: {} g/cm³", FLUID_DENSITY.format_number(fluid)),
            WHITE,
            12.0,
        );
        frame
    }

    fn readouts(&self, params: &AnimationParameters, _t: f64) -> Vec<Readout> {
        let state = Buoyancy::classify(
            params.number(&OBJECT_DENSITY),
            params.number(&FLUID_DENSITY),
        );
        vec![Readout::new("Object", state.label())]
    }
}

//
// ─── BERNOULLI ─────────────────────────────────────────────────────────────────
//

const PIPE_HEIGHT: f64 = 40.0;
const FLOW_LINES: usize = 5;

/// Offset of the flow streaks, repeating every 100 px.
#[must_use]
pub fn flow_offset(t: f64) -> f64 {
    (t * 0.1).rem_euclid(100.0)
}

/// Start x of the streaks in the wide, narrow and wide sections.
///
/// The narrow section moves 1.5 times faster.
#[must_use]
pub fn streak_starts(offset: f64) -> [f64; 3] {
    [60.0 + offset, 160.0 + offset * 1.5, 260.0 + offset]
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BernoulliScene;

impl Scene for BernoulliScene {
    fn surface(&self) -> Surface {
        SURFACE
    }

    fn controls(&self) -> Vec<ControlSpec> {
        Vec::new()
    }

    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(1.0)
    }

    fn render(&self, _params: &AnimationParameters, t: f64) -> Frame {
        let pipe_y = SURFACE.height / 2.0;
        let half = PIPE_HEIGHT / 2.0;
        let mut frame = Frame::new(SURFACE);

        frame.fill_polygon(
            vec![
                Vec2::new(50.0, pipe_y - PIPE_HEIGHT),
                Vec2::new(150.0, pipe_y - half),
                Vec2::new(250.0, pipe_y - half),
                Vec2::new(350.0, pipe_y - PIPE_HEIGHT),
                Vec2::new(350.0, pipe_y + PIPE_HEIGHT),
                Vec2::new(250.0, pipe_y + half),
                Vec2::new(150.0, pipe_y + half),
                Vec2::new(50.0, pipe_y + PIPE_HEIGHT),
            ],
            SLATE,
        );

        let [x1, x2, x3] = streak_starts(flow_offset(t));
        for i in 0..FLOW_LINES {
            let y = pipe_y - half + i as f64 * PIPE_HEIGHT / 4.0;
            for (x, len) in [(x1, 20.0), (x2, 30.0), (x3, 20.0)] {
                frame.line(Vec2::new(x, y), Vec2::new(x + len, y), Stroke::solid(BLUE, 2.0));
            }
        }

        frame.text(Vec2::new(70.0, pipe_y - 60.0), "High P", RED, 12.0);
        frame.text(Vec2::new(170.0, pipe_y - 30.0), "Low P", RED, 12.0);
        frame.text(Vec2::new(270.0, pipe_y - 60.0), "High P", RED, 12.0);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::DrawCmd;

    #[test]
    fn buoyancy_branches_on_density_order() {
        assert_eq!(Buoyancy::classify(0.8, 1.0), Buoyancy::Floats);
        assert_eq!(Buoyancy::classify(1.0, 1.0), Buoyancy::Neutral);
        assert_eq!(Buoyancy::classify(1.2, 1.0), Buoyancy::Sinks);
    }

    #[test]
    fn object_position_per_branch() {
        assert!((object_top(0.5, 1.0, 200.0, 40.0) - 180.0).abs() < 1e-12);
        assert!((object_top(1.0, 1.0, 200.0, 40.0) - 180.0).abs() < 1e-12);
        assert!((object_top(0.8, 1.0, 200.0, 40.0) - 168.0).abs() < 1e-12);
        assert!((object_top(1.5, 1.0, 200.0, 40.0) - 220.0).abs() < 1e-12);
    }

    #[test]
    fn snapped_slider_values_compare_equal() {
        let mut params = AnimationParameters::new(BuoyancyScene.controls());
        params.set_number("object_density", 1.0).unwrap();
        params.set_number("fluid_density", 1.0).unwrap();
        assert_eq!(BuoyancyScene.readouts(&params, 0.0)[0].value, "Neutral buoyancy");
    }

    #[test]
    fn pressure_bands_deepen_and_darken() {
        let bands = pressure_bands(4);
        assert_eq!(bands.len(), 4);
        assert!((bands[0].top - 150.0).abs() < 1e-12);
        assert!((bands[3].top).abs() < 1e-12);
        assert!((bands[0].alpha - 0.3).abs() < 1e-12);
        assert!((bands[3].alpha - 0.6).abs() < 1e-12);
        assert!((bands[3].arrow_length - 50.0).abs() < 1e-12);
        assert!(pressure_bands(0).is_empty());
    }

    #[test]
    fn flow_offset_wraps_every_hundred_pixels() {
        assert!((flow_offset(0.0)).abs() < 1e-12);
        assert!((flow_offset(250.0) - 25.0).abs() < 1e-9);
        assert!((flow_offset(1_250.0) - 25.0).abs() < 1e-9);
        assert_eq!(streak_starts(10.0), [70.0, 175.0, 270.0]);
    }

    #[test]
    fn bernoulli_draws_fifteen_streaks_and_labels() {
        let params = AnimationParameters::new(BernoulliScene.controls());
        let frame = BernoulliScene.render(&params, 40.0);
        let streaks = frame
            .cmds()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
            .count();
        assert_eq!(streaks, 15);
        assert_eq!(frame.texts().collect::<Vec<_>>(), vec!["High P", "Low P", "High P"]);
    }
}
