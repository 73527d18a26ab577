use std::f64::consts::TAU;

use crate::sim::clock::ClockPolicy;
use crate::sim::draw::{Frame, Stroke};
use crate::sim::geom::{Surface, Vec2};
use crate::sim::params::{AnimationParameters, ControlSpec};
use crate::sim::scene::{Readout, Scene};

use super::{BLUE, RED, SLATE_DARK, WHITE};

pub const ELECTRONS: ControlSpec =
    ControlSpec::slider("electrons", "Number of Electrons", "", 1.0, 18.0, 1.0, 2.0);
pub const SPEED: ControlSpec =
    ControlSpec::slider("speed", "Animation Speed", "%", 10.0, 100.0, 10.0, 50.0);
pub const SHOW_ORBITS: ControlSpec = ControlSpec::toggle("show_orbits", "Orbits", true);
pub const SHOW_LABELS: ControlSpec = ControlSpec::toggle("show_labels", "Labels", true);

/// Electrons per shell, innermost first.
pub const SHELL_CAPACITY: [usize; 3] = [2, 8, 8];
pub const SHELL_RADII: [f64; 3] = [60.0, 100.0, 140.0];

const NUCLEUS_RADIUS: f64 = 15.0;
const ELECTRON_RADIUS: f64 = 6.0;
const SHELL_PHASE: f64 = 0.5;

/// Fills shells in order up to their capacity. Extra electrons are dropped.
#[must_use]
pub fn shell_occupancy(electrons: usize) -> [usize; 3] {
    let mut remaining = electrons;
    let mut out = [0; 3];
    for (slot, cap) in out.iter_mut().zip(SHELL_CAPACITY) {
        *slot = remaining.min(cap);
        remaining -= *slot;
    }
    out
}

/// Electron offsets from the nucleus for the given orbital angle.
///
/// Electron `j` of shell `i` sits at `angle + j * 2π / count + i * 0.5`.
/// Empty shells contribute nothing.
#[must_use]
pub fn electron_offsets(electrons: usize, angle: f64) -> Vec<(usize, Vec2)> {
    let mut out = Vec::with_capacity(electrons.min(18));
    for (shell, count) in shell_occupancy(electrons).into_iter().enumerate() {
        if count == 0 {
            continue;
        }
        let radius = SHELL_RADII[shell];
        for j in 0..count {
            let theta = angle + j as f64 * (TAU / count as f64) + shell as f64 * SHELL_PHASE;
            out.push((shell, Vec2::from_polar(radius, theta)));
        }
    }
    out
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AtomScene;

impl Scene for AtomScene {
    fn surface(&self) -> Surface {
        Surface::new(400.0, 400.0)
    }

    fn controls(&self) -> Vec<ControlSpec> {
        vec![ELECTRONS, SPEED, SHOW_ORBITS, SHOW_LABELS]
    }

    /// The orbital angle advances by `speed / 1000` each frame.
    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::scaled(SPEED, 1.0 / 1000.0)
    }

    fn render(&self, params: &AnimationParameters, t: f64) -> Frame {
        let surface = self.surface();
        let center = surface.center();
        let electrons = params.number(&ELECTRONS).max(0.0) as usize;
        let mut frame = Frame::new(surface);

        frame.fill_circle(center, NUCLEUS_RADIUS, RED);
        if params.flag(&SHOW_LABELS) {
            frame.text_centered(center + Vec2::new(0.0, 35.0), "Nucleus", WHITE, 12.0);
        }

        if params.flag(&SHOW_ORBITS) {
            for (shell, count) in shell_occupancy(electrons).into_iter().enumerate() {
                if count > 0 {
                    frame.stroke_circle(center, SHELL_RADII[shell], Stroke::solid(SLATE_DARK, 1.0));
                }
            }
        }

        for (_, offset) in electron_offsets(electrons, t) {
            frame.fill_circle(center + offset, ELECTRON_RADIUS, BLUE);
        }
        frame
    }

    fn readouts(&self, params: &AnimationParameters, _t: f64) -> Vec<Readout> {
        let electrons = params.number(&ELECTRONS).max(0.0) as usize;
        let [k, l, m] = shell_occupancy(electrons);
        vec![Readout::new("Configuration", format!("{k}, {l}, {m}"))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::draw::DrawCmd;

    fn electron_count(frame: &Frame) -> usize {
        frame
            .cmds()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Circle { radius, fill: Some(_), .. } if *radius == ELECTRON_RADIUS))
            .count()
    }

    #[test]
    fn shells_fill_two_eight_eight() {
        assert_eq!(shell_occupancy(1), [1, 0, 0]);
        assert_eq!(shell_occupancy(2), [2, 0, 0]);
        assert_eq!(shell_occupancy(11), [2, 8, 1]);
        assert_eq!(shell_occupancy(18), [2, 8, 8]);
        assert_eq!(shell_occupancy(30), [2, 8, 8]);
    }

    #[test]
    fn electron_angles_follow_layout_formula() {
        let offsets = electron_offsets(3, 0.25);
        assert_eq!(offsets.len(), 3);

        // shell 0, electron 1: 0.25 + π
        let (shell, p) = offsets[1];
        assert_eq!(shell, 0);
        let expected = Vec2::from_polar(60.0, 0.25 + std::f64::consts::PI);
        assert!((p - expected).length() < 1e-9);

        // shell 1, single electron: 0.25 + 0.5
        let (shell, p) = offsets[2];
        assert_eq!(shell, 1);
        let expected = Vec2::from_polar(100.0, 0.75);
        assert!((p - expected).length() < 1e-9);
    }

    #[test]
    fn empty_shells_draw_no_orbit() {
        let mut params = AnimationParameters::new(AtomScene.controls());
        params.set_number("electrons", 2.0).unwrap();
        let frame = AtomScene.render(&params, 0.0);
        let orbits = frame
            .cmds()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Circle { fill: None, .. }))
            .count();
        assert_eq!(orbits, 1);
        assert_eq!(electron_count(&frame), 2);
    }

    #[test]
    fn toggles_hide_orbits_and_labels() {
        let mut params = AnimationParameters::new(AtomScene.controls());
        params.set_number("electrons", 18.0).unwrap();
        params.set_flag("show_orbits", false).unwrap();
        params.set_flag("show_labels", false).unwrap();
        let frame = AtomScene.render(&params, 1.0);
        assert_eq!(frame.texts().count(), 0);
        assert_eq!(electron_count(&frame), 18);
        // nucleus + electrons only
        assert_eq!(frame.len(), 19);
    }

    #[test]
    fn clock_step_is_speed_over_thousand() {
        let params = AnimationParameters::new(AtomScene.controls());
        let step = AtomScene.clock_policy().increment(&params);
        assert!((step - 0.05).abs() < 1e-12);
    }
}
