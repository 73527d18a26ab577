use std::f64::consts::TAU;

use crate::sim::clock::ClockPolicy;
use crate::sim::draw::{Frame, Stroke};
use crate::sim::geom::{Surface, Vec2};
use crate::sim::params::{AnimationParameters, ControlSpec};
use crate::sim::scene::{Readout, Scene};

use super::{BLUE, GREEN, PURPLE, SLATE_DARK};

pub const VELOCITY: ControlSpec =
    ControlSpec::slider("velocity", "Motion Speed", "units/s", 1.0, 15.0, 1.0, 5.0);
pub const SHOW_VECTORS: ControlSpec =
    ControlSpec::toggle("show_vectors", "Velocity Vectors", false);

const DOT_RADIUS: f64 = 8.0;

/// Position along a track of length `length` for a body that has covered
/// `distance` while bouncing between both ends.
///
/// Returns the offset from the left end and the direction of travel (+1 or -1).
#[must_use]
pub fn bounce(distance: f64, length: f64) -> (f64, f64) {
    if !(length > 0.0) || !distance.is_finite() {
        return (0.0, 1.0);
    }
    let phase = distance.abs().rem_euclid(2.0 * length);
    if phase <= length {
        (phase, 1.0)
    } else {
        (2.0 * length - phase, -1.0)
    }
}

//
// ─── LINEAR ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default)]
pub struct LinearMotionScene;

const TRACK_MARGIN: f64 = 20.0;

impl LinearMotionScene {
    fn track_length(self) -> f64 {
        self.surface().width - 2.0 * TRACK_MARGIN
    }
}

impl Scene for LinearMotionScene {
    fn surface(&self) -> Surface {
        Surface::new(350.0, 80.0)
    }

    fn controls(&self) -> Vec<ControlSpec> {
        vec![VELOCITY, SHOW_VECTORS]
    }

    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(1.0)
    }

    fn render(&self, params: &AnimationParameters, t: f64) -> Frame {
        let surface = self.surface();
        let mid = surface.height / 2.0;
        let speed = params.number(&VELOCITY);
        let (offset, direction) = bounce(speed * t, self.track_length());
        let body = Vec2::new(TRACK_MARGIN + offset, mid);
        let mut frame = Frame::new(surface);

        frame.line(
            Vec2::new(TRACK_MARGIN, mid),
            Vec2::new(surface.width - TRACK_MARGIN, mid),
            Stroke::solid(SLATE_DARK, 2.0),
        );
        frame.fill_circle(body, DOT_RADIUS, BLUE);

        if params.flag(&SHOW_VECTORS) {
            let tip = Vec2::new(body.x + direction * speed * 4.0, body.y - 16.0);
            frame.line(Vec2::new(body.x, body.y - 16.0), tip, Stroke::solid(GREEN, 2.0));
            frame.fill_polygon(
                vec![
                    tip,
                    Vec2::new(tip.x - direction * 6.0, tip.y - 4.0),
                    Vec2::new(tip.x - direction * 6.0, tip.y + 4.0),
                ],
                GREEN,
            );
        }
        frame
    }

    fn readouts(&self, params: &AnimationParameters, _t: f64) -> Vec<Readout> {
        let speed = params.number(&VELOCITY);
        vec![Readout::new(
            "Speed",
            format!("{} units/s", VELOCITY.format_number(speed)),
        )]
    }
}

//
// ─── CIRCULAR ──────────────────────────────────────────────────────────────────
//

const ORBIT_RADIUS: f64 = 60.0;

/// The clock counts radians directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularMotionScene;

impl Scene for CircularMotionScene {
    fn surface(&self) -> Surface {
        Surface::new(200.0, 200.0)
    }

    fn controls(&self) -> Vec<ControlSpec> {
        Vec::new()
    }

    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(0.03)
    }

    fn render(&self, _params: &AnimationParameters, t: f64) -> Frame {
        let surface = self.surface();
        let center = surface.center();
        let mut frame = Frame::new(surface);
        frame.stroke_circle(center, ORBIT_RADIUS, Stroke::solid(SLATE_DARK, 2.0));
        let angle = t.rem_euclid(TAU);
        frame.fill_circle(center + Vec2::from_polar(ORBIT_RADIUS, angle), DOT_RADIUS, PURPLE);
        frame
    }
}

//
// ─── GRAPHS ────────────────────────────────────────────────────────────────────
//

/// Frames per second the position samples assume.
const SAMPLE_RATE: f64 = 60.0;
const GRAPH_SCALE: f64 = 5.0;
const SAMPLE_SPACING: f64 = 10.0;
const GRAPH_LEFT: f64 = 20.0;

/// Rolling window of position samples ending at frame `frame`.
///
/// Sample `k` is `v * k / 60`; at most `window` samples are kept.
#[must_use]
pub fn position_samples(velocity: f64, frame: u64, window: usize) -> Vec<f64> {
    let first = frame.saturating_sub(window as u64).saturating_add(1).max(1);
    (first..=frame)
        .map(|k| velocity * k as f64 / SAMPLE_RATE)
        .collect()
}

/// Graph line starting at the axis origin, one point per sample.
fn plot(baseline: f64, values: impl Iterator<Item = f64>) -> Vec<Vec2> {
    std::iter::once(Vec2::new(GRAPH_LEFT, baseline))
        .chain(values.enumerate().map(|(j, v)| {
            Vec2::new(GRAPH_LEFT + j as f64 * SAMPLE_SPACING, baseline - v * GRAPH_SCALE)
        }))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MotionGraphScene;

impl MotionGraphScene {
    fn window(self) -> usize {
        (self.surface().width / SAMPLE_SPACING) as usize - 2
    }
}

impl Scene for MotionGraphScene {
    fn surface(&self) -> Surface {
        Surface::new(400.0, 300.0)
    }

    fn controls(&self) -> Vec<ControlSpec> {
        vec![VELOCITY]
    }

    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(1.0)
    }

    fn render(&self, params: &AnimationParameters, t: f64) -> Frame {
        let surface = self.surface();
        let mid = surface.height / 2.0;
        let velocity = params.number(&VELOCITY);
        let frame_index = t.max(0.0).floor() as u64;
        let samples = position_samples(velocity, frame_index, self.window());
        let mut frame = Frame::new(surface);

        let position = plot(mid, samples.iter().copied());
        frame.polyline(position, Stroke::solid(BLUE, 2.0));
        let speed = plot(mid + 50.0, samples.iter().map(|_| velocity));
        frame.polyline(speed, Stroke::solid(PURPLE, 2.0));

        frame.text(Vec2::new(GRAPH_LEFT, 20.0), "Position vs Time", BLUE, 12.0);
        frame.text(Vec2::new(GRAPH_LEFT, surface.height - 20.0), "Velocity vs Time", PURPLE, 12.0);
        frame
    }
}
