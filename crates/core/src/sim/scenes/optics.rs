use std::f64::consts::PI;

use crate::sim::clock::ClockPolicy;
use crate::sim::draw::{Frame, Stroke};
use crate::sim::geom::{Color, Surface, Vec2};
use crate::sim::params::{AnimationParameters, ChoiceOption, ControlSpec};
use crate::sim::scene::{Readout, Scene, UNDEFINED_READOUT};

use super::{BLUE, RED, SLATE, SLATE_DARK};

pub const RAY_ANGLE: ControlSpec =
    ControlSpec::slider("ray_angle", "Angle of Incidence", "°", 10.0, 80.0, 5.0, 30.0);
pub const REFRACTIVE_INDEX: ControlSpec =
    ControlSpec::slider("refractive_index", "Refractive Index", "", 1.0, 2.5, 0.1, 1.5);

const LENS_TYPES: &[ChoiceOption] = &[
    ChoiceOption {
        value: "convex",
        label: "Convex",
    },
    ChoiceOption {
        value: "concave",
        label: "Concave",
    },
];

pub const LENS_TYPE: ControlSpec = ControlSpec::choice("lens_type", "Lens Type", LENS_TYPES, "convex");

const SURFACE: Surface = Surface::new(400.0, 300.0);
const RAY_LENGTH: f64 = 80.0;
const REFRACTED_LENGTH: f64 = 100.0;
const AIR: Color = Color::rgba(186, 230, 253, 77);
const GLASS: Color = Color::rgba(59, 130, 246, 51);
const NORMAL: Color = Color::rgba(100, 116, 139, 204);

/// Angle of the transmitted ray by Snell's law, in radians.
///
/// `relative_index` is `n2 / n1`. Returns `None` for total internal reflection
/// (`|sin i / n| > 1`) and for a non-positive index.
#[must_use]
pub fn refraction_angle(incidence: f64, relative_index: f64) -> Option<f64> {
    if !(relative_index > 0.0) || !incidence.is_finite() {
        return None;
    }
    let sine = incidence.sin() / relative_index;
    (sine.abs() <= 1.0).then(|| sine.asin())
}

fn normal_stroke() -> Stroke {
    Stroke::dashed(NORMAL, 1.0, 5.0, 5.0)
}

fn degrees(radians: f64) -> String {
    format!("{:.1}°", radians.to_degrees())
}

//
// ─── REFLECTION ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default)]
pub struct ReflectionScene;

impl Scene for ReflectionScene {
    fn surface(&self) -> Surface {
        SURFACE
    }

    fn controls(&self) -> Vec<ControlSpec> {
        vec![RAY_ANGLE]
    }

    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(1.0)
    }

    fn render(&self, params: &AnimationParameters, _t: f64) -> Frame {
        let center = SURFACE.center();
        let angle = params.number(&RAY_ANGLE).to_radians();
        let mut frame = Frame::new(SURFACE);

        // mirror
        frame.line(
            Vec2::new(50.0, center.y),
            Vec2::new(SURFACE.width - 50.0, center.y),
            Stroke::solid(SLATE_DARK, 4.0),
        );
        frame.line(
            Vec2::new(center.x, center.y - 100.0),
            Vec2::new(center.x, center.y),
            normal_stroke(),
        );

        let incident = Vec2::new(
            center.x - RAY_LENGTH * angle.sin(),
            center.y - RAY_LENGTH * angle.cos(),
        );
        let reflected = Vec2::new(
            center.x + RAY_LENGTH * angle.sin(),
            center.y - RAY_LENGTH * angle.cos(),
        );
        frame.line(incident, center, Stroke::solid(RED, 3.0));
        frame.line(center, reflected, Stroke::solid(BLUE, 3.0));

        frame.text(Vec2::new(20.0, 30.0), "Incident Ray", RED, 12.0);
        frame.text(Vec2::new(20.0, 50.0), "Reflected Ray", BLUE, 12.0);
        frame.text_centered(
            Vec2::new(center.x, center.y + 25.0),
            "Mirror",
            SLATE_DARK,
            12.0,
        );
        frame
    }

    fn readouts(&self, params: &AnimationParameters, _t: f64) -> Vec<Readout> {
        let angle = params.number(&RAY_ANGLE).to_radians();
        vec![
            Readout::new("Angle of Incidence", degrees(angle)),
            Readout::new("Angle of Reflection", degrees(angle)),
        ]
    }
}

//
// ─── REFRACTION ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default)]
pub struct RefractionScene;

impl Scene for RefractionScene {
    fn surface(&self) -> Surface {
        SURFACE
    }

    fn controls(&self) -> Vec<ControlSpec> {
        vec![RAY_ANGLE, REFRACTIVE_INDEX]
    }

    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(1.0)
    }

    fn render(&self, params: &AnimationParameters, _t: f64) -> Frame {
        let center = SURFACE.center();
        let incidence = params.number(&RAY_ANGLE).to_radians();
        let index = params.number(&REFRACTIVE_INDEX);
        let mut frame = Frame::new(SURFACE);

        frame.fill_rect(Vec2::ZERO, Vec2::new(SURFACE.width, center.y), AIR);
        frame.fill_rect(
            Vec2::new(0.0, center.y),
            Vec2::new(SURFACE.width, SURFACE.height - center.y),
            GLASS,
        );
        frame.line(
            Vec2::new(0.0, center.y),
            Vec2::new(SURFACE.width, center.y),
            Stroke::solid(SLATE, 2.0),
        );
        frame.line(
            Vec2::new(center.x, center.y - 120.0),
            Vec2::new(center.x, center.y + 120.0),
            normal_stroke(),
        );

        let incident = Vec2::new(
            center.x - REFRACTED_LENGTH * incidence.sin(),
            center.y - REFRACTED_LENGTH * incidence.cos(),
        );
        frame.line(incident, center, Stroke::solid(RED, 3.0));

        match refraction_angle(incidence, index) {
            Some(refracted) => {
                let end = Vec2::new(
                    center.x + REFRACTED_LENGTH * refracted.sin(),
                    center.y + REFRACTED_LENGTH * refracted.cos(),
                );
                frame.line(center, end, Stroke::solid(BLUE, 3.0));
            }
            None => frame.text_centered(
                Vec2::new(center.x, center.y + 40.0),
                "Total internal reflection",
                RED,
                12.0,
            ),
        }

        frame.text(Vec2::new(20.0, 30.0), "Air (n=1.0)", SLATE_DARK, 12.0);
        frame.text(
            Vec2::new(20.0, SURFACE.height - 20.0),
            format!("Glass (n={})", REFRACTIVE_INDEX.format_number(index)),
            SLATE_DARK,
            12.0,
        );
        frame
    }

    fn readouts(&self, params: &AnimationParameters, _t: f64) -> Vec<Readout> {
        let incidence = params.number(&RAY_ANGLE).to_radians();
        let index = params.number(&REFRACTIVE_INDEX);
        let refracted = refraction_angle(incidence, index)
            .map_or_else(|| UNDEFINED_READOUT.to_string(), degrees);
        vec![
            Readout::new("Angle of Incidence", degrees(incidence)),
            Readout::new("Angle of Refraction", refracted),
        ]
    }
}

//
// ─── LENSES ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LensKind {
    Convex,
    Concave,
}

impl LensKind {
    fn from_choice(value: &str) -> Self {
        if value == "concave" {
            LensKind::Concave
        } else {
            LensKind::Convex
        }
    }

    #[must_use]
    pub fn behaviour(self) -> &'static str {
        match self {
            LensKind::Convex => "Converging: parallel rays meet at the focal point",
            LensKind::Concave => "Diverging: parallel rays spread apart",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LensScene;

const LENS_ARC_RADIUS: f64 = 80.0;
const RAY_OFFSETS: [f64; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];

impl LensScene {
    fn draw_convex(frame: &mut Frame, center: Vec2) {
        let outline = Stroke::solid(SLATE_DARK, 3.0);
        frame.arc(
            Vec2::new(center.x - 30.0, center.y),
            LENS_ARC_RADIUS,
            -PI / 3.0,
            PI / 3.0,
            outline.clone(),
        );
        frame.arc(
            Vec2::new(center.x + 30.0, center.y),
            LENS_ARC_RADIUS,
            2.0 * PI / 3.0,
            4.0 * PI / 3.0,
            outline,
        );

        let focus = Vec2::new(center.x + 100.0, center.y);
        for i in RAY_OFFSETS {
            let start = Vec2::new(50.0, center.y + 20.0 * i);
            let hit = Vec2::new(center.x, center.y + 20.0 * i);
            frame.polyline(vec![start, hit, focus], Stroke::solid(BLUE, 2.0));
        }
        frame.fill_circle(focus, 4.0, RED);
        frame.text_centered(Vec2::new(focus.x, focus.y + 20.0), "F", RED, 12.0);
    }

    fn draw_concave(frame: &mut Frame, center: Vec2) {
        let outline = Stroke::solid(SLATE_DARK, 3.0);
        frame.arc(
            Vec2::new(center.x + 90.0, center.y),
            LENS_ARC_RADIUS,
            2.0 * PI / 3.0,
            4.0 * PI / 3.0,
            outline.clone(),
        );
        frame.arc(
            Vec2::new(center.x - 90.0, center.y),
            LENS_ARC_RADIUS,
            -PI / 3.0,
            PI / 3.0,
            outline.clone(),
        );
        let half_chord = LENS_ARC_RADIUS * (PI / 3.0).sin();
        let inner = 90.0 - LENS_ARC_RADIUS * (PI / 3.0).cos();
        for sign in [-1.0, 1.0] {
            frame.line(
                Vec2::new(center.x - inner, center.y + sign * half_chord),
                Vec2::new(center.x + inner, center.y + sign * half_chord),
                outline.clone(),
            );
        }

        for i in RAY_OFFSETS {
            let start = Vec2::new(50.0, center.y + 20.0 * i);
            let hit = Vec2::new(center.x, center.y + 10.0 * i);
            let end = Vec2::new(center.x + 80.0, center.y + 30.0 * i);
            frame.polyline(vec![start, hit, end], Stroke::solid(RED, 2.0));
        }
    }
}

impl Scene for LensScene {
    fn surface(&self) -> Surface {
        SURFACE
    }

    fn controls(&self) -> Vec<ControlSpec> {
        vec![LENS_TYPE]
    }

    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::fixed(1.0)
    }

    fn render(&self, params: &AnimationParameters, _t: f64) -> Frame {
        let center = SURFACE.center();
        let mut frame = Frame::new(SURFACE);
        frame.line(
            Vec2::new(20.0, center.y),
            Vec2::new(SURFACE.width - 20.0, center.y),
            normal_stroke(),
        );
        match LensKind::from_choice(params.choice(&LENS_TYPE)) {
            LensKind::Convex => Self::draw_convex(&mut frame, center),
            LensKind::Concave => Self::draw_concave(&mut frame, center),
        }
        frame
    }

    fn readouts(&self, params: &AnimationParameters, _t: f64) -> Vec<Readout> {
        let kind = LensKind::from_choice(params.choice(&LENS_TYPE));
        vec![Readout::new("Behaviour", kind.behaviour())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::DrawCmd;

    #[test]
    fn refraction_follows_snell() {
        let r = refraction_angle(30f64.to_radians(), 1.5).unwrap();
        assert!((r.sin() - 0.5 / 1.5).abs() < 1e-12);
    }

    #[test]
    fn steep_ray_into_equal_medium_passes_straight() {
        let incidence = 80f64.to_radians();
        let r = refraction_angle(incidence, 1.0).unwrap();
        assert!((r - incidence).abs() < 1e-12);
    }

    #[test]
    fn total_internal_reflection_has_no_transmitted_ray() {
        assert_eq!(refraction_angle(80f64.to_radians(), 1.0 / 1.5), None);
        assert_eq!(refraction_angle(0.3, 0.0), None);
        assert_eq!(refraction_angle(0.3, f64::NAN), None);
    }

    #[test]
    fn reflected_ray_mirrors_incident_about_normal() {
        let params = AnimationParameters::new(ReflectionScene.controls());
        let frame = ReflectionScene.render(&params, 0.0);
        let center = SURFACE.center();
        let rays: Vec<(Vec2, Vec2)> = frame
            .cmds()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Line { from, to, stroke } if stroke.width == 3.0 => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(rays.len(), 2);
        let (incident, _) = rays[0];
        let (_, reflected) = rays[1];
        assert!((incident.x + reflected.x - 2.0 * center.x).abs() < 1e-9);
        assert!((incident.y - reflected.y).abs() < 1e-9);
    }

    #[test]
    fn refraction_scene_labels_media_and_angle() {
        let mut params = AnimationParameters::new(RefractionScene.controls());
        params.set_number("refractive_index", 2.0).unwrap();
        let frame = RefractionScene.render(&params, 0.0);
        let texts: Vec<&str> = frame.texts().collect();
        assert!(texts.contains(&"Air (n=1.0)"));
        assert!(texts.contains(&"Glass (n=2.0)"));
        let readouts = RefractionScene.readouts(&params, 0.0);
        assert_eq!(readouts[1].value, "14.5°");
    }

    #[test]
    fn lens_choice_switches_ray_colour() {
        let mut params = AnimationParameters::new(LensScene.controls());
        let ray_colour = |frame: &Frame| {
            frame.cmds().iter().find_map(|c| match c {
                DrawCmd::Polyline { stroke, .. } => Some(stroke.color),
                _ => None,
            })
        };
        assert_eq!(ray_colour(&LensScene.render(&params, 0.0)), Some(BLUE));
        params.set_choice("lens_type", "concave").unwrap();
        assert_eq!(ray_colour(&LensScene.render(&params, 0.0)), Some(RED));
    }
}
