use std::f64::consts::PI;

use crate::sim::clock::ClockPolicy;
use crate::sim::draw::{Frame, Stroke};
use crate::sim::geom::{Color, Surface, Vec2};
use crate::sim::params::{AnimationParameters, ControlSpec};
use crate::sim::scene::{Readout, Scene};

use super::{BLUE, GREEN, PURPLE};

pub const MAGNITUDE: ControlSpec =
    ControlSpec::slider("magnitude", "Magnitude", "units", 1.0, 8.0, 0.5, 4.0);
pub const ANGLE: ControlSpec = ControlSpec::slider("angle", "Direction", "°", 0.0, 360.0, 5.0, 45.0);
pub const CAR_A_SPEED: ControlSpec =
    ControlSpec::slider("car_a_speed", "Car A Speed", "km/hr", 10.0, 100.0, 5.0, 60.0);
pub const CAR_B_SPEED: ControlSpec =
    ControlSpec::slider("car_b_speed", "Car B Speed", "km/hr", 10.0, 100.0, 5.0, 35.0);

const PINK: Color = Color::hex(0xec4899);
const GRID: Color = Color::hex(0x374151);
const AXIS: Color = Color::hex(0x6b7280);

//
// ─── VECTOR ────────────────────────────────────────────────────────────────────
//

const PIXELS_PER_UNIT: f64 = 15.0;
const ARROW_HEAD: f64 = 10.0;
const ARROW_SPREAD: f64 = PI / 6.0;

/// Screen offset of a vector drawn `magnitude` units long at `degrees`
/// counter-clockwise from +x.
#[must_use]
pub fn vector_offset(magnitude: f64, degrees: f64) -> Vec2 {
    let r = degrees.to_radians();
    Vec2::new(
        magnitude * PIXELS_PER_UNIT * r.cos(),
        -magnitude * PIXELS_PER_UNIT * r.sin(),
    )
}

/// The two barb endpoints of an arrowhead at `tip` pointing along `radians`.
#[must_use]
pub fn arrow_barbs(tip: Vec2, radians: f64) -> [Vec2; 2] {
    [radians - ARROW_SPREAD, radians + ARROW_SPREAD].map(|a| {
        Vec2::new(tip.x - ARROW_HEAD * a.cos(), tip.y + ARROW_HEAD * a.sin())
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VectorArrowScene;

impl Scene for VectorArrowScene {
    fn surface(&self) -> Surface {
        Surface::new(300.0, 200.0)
    }

    fn controls(&self) -> Vec<ControlSpec> {
        vec![MAGNITUDE, ANGLE]
    }

    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(1.0)
    }

    fn render(&self, params: &AnimationParameters, _t: f64) -> Frame {
        let surface = self.surface();
        let origin = surface.center();
        let magnitude = params.number(&MAGNITUDE);
        let degrees = params.number(&ANGLE);
        let tip = origin + vector_offset(magnitude, degrees);
        let mut frame = Frame::new(surface);

        frame.grid(20.0, 20.0, &Stroke::solid(GRID, 1.0));
        let axis = Stroke::solid(AXIS, 2.0);
        frame.line(Vec2::new(0.0, origin.y), Vec2::new(surface.width, origin.y), axis.clone());
        frame.line(Vec2::new(origin.x, 0.0), Vec2::new(origin.x, surface.height), axis);

        let shaft = Stroke::solid(PINK, 3.0);
        frame.line(origin, tip, shaft.clone());
        for barb in arrow_barbs(tip, degrees.to_radians()) {
            frame.line(tip, barb, shaft.clone());
        }
        frame.fill_circle(origin, 4.0, GREEN);
        frame.fill_circle(tip, 4.0, PINK);
        frame
    }

    fn readouts(&self, params: &AnimationParameters, _t: f64) -> Vec<Readout> {
        let magnitude = params.number(&MAGNITUDE);
        let r = params.number(&ANGLE).to_radians();
        vec![
            Readout::new(
                "Vector",
                format!(
                    "{} units at {}°",
                    MAGNITUDE.format_number(magnitude),
                    ANGLE.format_number(params.number(&ANGLE))
                ),
            ),
            Readout::new(
                "Components",
                format!(
                    "x = {:.1}, y = {:.1}",
                    magnitude * r.cos() + 0.0,
                    magnitude * r.sin() + 0.0
                ),
            ),
        ]
    }
}

//
// ─── RELATIVE MOTION ───────────────────────────────────────────────────────────
//

const CAR_START: f64 = 50.0;
const CAR_RESTART: f64 = -30.0;
const CAR_LENGTH: f64 = 30.0;

/// X of a car after `t` frames at `speed` km/hr, wrapping to -30 past the right edge.
#[must_use]
pub fn car_position(speed: f64, t: f64, road_width: f64) -> f64 {
    let lap = road_width - CAR_RESTART;
    CAR_RESTART + (CAR_START - CAR_RESTART + speed / 20.0 * t).rem_euclid(lap)
}

#[must_use]
pub fn relative_velocity_explanation(car_a: f64, car_b: f64) -> String {
    let diff = car_a - car_b;
    if diff > 0.0 {
        format!("Car A is moving {diff} km/hr faster than Car B")
    } else if diff < 0.0 {
        format!("Car A is moving {} km/hr slower than Car B", diff.abs())
    } else {
        "Both cars are moving at the same speed".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeMotionScene;

impl Scene for RelativeMotionScene {
    fn surface(&self) -> Surface {
        Surface::new(350.0, 120.0)
    }

    fn controls(&self) -> Vec<ControlSpec> {
        vec![CAR_A_SPEED, CAR_B_SPEED]
    }

    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(1.0)
    }

    fn render(&self, params: &AnimationParameters, t: f64) -> Frame {
        let surface = self.surface();
        let road = surface.height / 2.0;
        let a = car_position(params.number(&CAR_A_SPEED), t, surface.width);
        let b = car_position(params.number(&CAR_B_SPEED), t, surface.width);
        let mut frame = Frame::new(surface);

        frame.line(
            Vec2::new(0.0, road),
            Vec2::new(surface.width, road),
            Stroke::solid(GRID, 4.0),
        );
        frame.fill_rect(Vec2::new(a, road - 15.0), Vec2::new(CAR_LENGTH, 15.0), BLUE);
        frame.fill_rect(Vec2::new(a + 5.0, road - 25.0), Vec2::new(20.0, 10.0), Color::hex(0x1e40af));
        frame.fill_rect(Vec2::new(b, road + 5.0), Vec2::new(CAR_LENGTH, 15.0), PURPLE);
        frame.fill_rect(Vec2::new(b + 5.0, road + 20.0), Vec2::new(20.0, 10.0), Color::hex(0x7c3aed));
        frame
    }

    fn readouts(&self, params: &AnimationParameters, _t: f64) -> Vec<Readout> {
        let a = params.number(&CAR_A_SPEED);
        let b = params.number(&CAR_B_SPEED);
        vec![
            Readout::new("Relative velocity", format!("{a} - {b} = {} km/hr", a - b)),
            Readout::new("Meaning", relative_velocity_explanation(a, b)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::DrawCmd;

    #[test]
    fn vector_points_up_and_right_at_45_degrees() {
        let v = vector_offset(4.0, 45.0);
        assert!(v.x > 0.0 && v.y < 0.0);
        assert!((v.length() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn barbs_trail_the_tip_symmetrically() {
        let tip = Vec2::new(100.0, 50.0);
        let [left, right] = arrow_barbs(tip, 0.0);
        assert!(left.x < tip.x && right.x < tip.x);
        assert!((left.y + right.y - 2.0 * tip.y).abs() < 1e-9);
        assert!(((left - tip).length() - ARROW_HEAD).abs() < 1e-9);
    }

    #[test]
    fn vector_frame_has_shaft_and_two_barbs() {
        let params = AnimationParameters::new(VectorArrowScene.controls());
        let frame = VectorArrowScene.render(&params, 0.0);
        let shaft = frame
            .cmds()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { stroke, .. } if stroke.color == PINK))
            .count();
        assert_eq!(shaft, 3);
    }

    #[test]
    fn components_readout() {
        let mut params = AnimationParameters::new(VectorArrowScene.controls());
        params.set_number("angle", 90.0).unwrap();
        let readouts = VectorArrowScene.readouts(&params, 0.0);
        assert_eq!(readouts[0].value, "4.0 units at 90°");
        assert_eq!(readouts[1].value, "x = 0.0, y = 4.0");
    }

    #[test]
    fn cars_start_at_fifty_and_wrap() {
        assert!((car_position(60.0, 0.0, 350.0) - 50.0).abs() < 1e-12);
        assert!((car_position(60.0, 10.0, 350.0) - 80.0).abs() < 1e-12);
        // 50 + 3 * 101 = 353 is past the edge: 353 - 380 = -27
        assert!((car_position(60.0, 101.0, 350.0) + 27.0).abs() < 1e-9);
        for t in [0.0, 1e3, 1e6] {
            let x = car_position(100.0, t, 350.0);
            assert!((-30.0..350.0).contains(&x));
        }
    }

    #[test]
    fn relative_velocity_wording() {
        assert_eq!(
            relative_velocity_explanation(60.0, 35.0),
            "Car A is moving 25 km/hr faster than Car B"
        );
        assert_eq!(
            relative_velocity_explanation(20.0, 35.0),
            "Car A is moving 15 km/hr slower than Car B"
        );
        assert_eq!(
            relative_velocity_explanation(50.0, 50.0),
            "Both cars are moving at the same speed"
        );
    }
}
