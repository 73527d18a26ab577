use std::f64::consts::TAU;

use physix_core::sim::{Color, DrawCmd, Frame, Readout, Stroke, TextAnchor, Vec2};

/// One SVG element, ready for `rsx!` without further arithmetic.
#[derive(Clone, Debug, PartialEq)]
pub enum SvgNodeVm {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: StrokeVm,
    },
    Polyline {
        points: String,
        stroke: StrokeVm,
    },
    Polygon {
        points: String,
        fill: String,
        stroke: Option<StrokeVm>,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        stroke: Option<StrokeVm>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
        stroke: Option<StrokeVm>,
    },
    Path {
        d: String,
        stroke: StrokeVm,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        fill: String,
        size: f64,
        anchor: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeVm {
    pub color: String,
    pub width: f64,
    /// `stroke-dasharray` value; empty for solid strokes.
    pub dash: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameVm {
    pub width: f64,
    pub height: f64,
    pub view_box: String,
    pub nodes: Vec<SvgNodeVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadoutVm {
    pub label: &'static str,
    pub value: String,
}

const NO_FILL: &str = "none";

#[must_use]
pub fn map_frame(frame: &Frame) -> FrameVm {
    let surface = frame.surface();
    FrameVm {
        width: surface.width,
        height: surface.height,
        view_box: format!("0 0 {} {}", surface.width, surface.height),
        nodes: frame.cmds().iter().map(map_cmd).collect(),
    }
}

#[must_use]
pub fn map_readouts(readouts: &[Readout]) -> Vec<ReadoutVm> {
    readouts
        .iter()
        .map(|r| ReadoutVm {
            label: r.label,
            value: r.value.clone(),
        })
        .collect()
}

fn map_cmd(cmd: &DrawCmd) -> SvgNodeVm {
    match cmd {
        DrawCmd::Line { from, to, stroke } => SvgNodeVm::Line {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            stroke: map_stroke(stroke),
        },
        DrawCmd::Polyline { points, stroke } => SvgNodeVm::Polyline {
            points: points_attr(points),
            stroke: map_stroke(stroke),
        },
        DrawCmd::Polygon {
            points,
            fill,
            stroke,
        } => SvgNodeVm::Polygon {
            points: points_attr(points),
            fill: fill_attr(*fill),
            stroke: stroke.as_ref().map(map_stroke),
        },
        DrawCmd::Circle {
            center,
            radius,
            fill,
            stroke,
        } => SvgNodeVm::Circle {
            cx: center.x,
            cy: center.y,
            r: radius.max(0.0),
            fill: fill_attr(*fill),
            stroke: stroke.as_ref().map(map_stroke),
        },
        DrawCmd::Rect {
            origin,
            size,
            fill,
            stroke,
        } => {
            // SVG rejects negative sizes; normalise to the top-left corner.
            let (x, width) = span(origin.x, size.x);
            let (y, height) = span(origin.y, size.y);
            SvgNodeVm::Rect {
                x,
                y,
                width,
                height,
                fill: fill_attr(*fill),
                stroke: stroke.as_ref().map(map_stroke),
            }
        }
        DrawCmd::Arc {
            center,
            radius,
            start,
            end,
            stroke,
        } => SvgNodeVm::Path {
            d: arc_path(*center, *radius, *start, *end),
            stroke: map_stroke(stroke),
        },
        DrawCmd::Text {
            position,
            text,
            color,
            size,
            anchor,
        } => SvgNodeVm::Text {
            x: position.x,
            y: position.y,
            text: text.clone(),
            fill: color.to_css(),
            size: *size,
            anchor: anchor_attr(*anchor),
        },
    }
}

fn map_stroke(stroke: &Stroke) -> StrokeVm {
    StrokeVm {
        color: stroke.color.to_css(),
        width: stroke.width,
        dash: stroke
            .dash
            .iter()
            .map(|d| fmt_num(*d))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn fill_attr(fill: Option<Color>) -> String {
    fill.map_or_else(|| NO_FILL.to_string(), Color::to_css)
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn span(origin: f64, size: f64) -> (f64, f64) {
    if size < 0.0 {
        (origin + size, -size)
    } else {
        (origin, size)
    }
}

fn points_attr(points: &[Vec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG path for a clockwise arc. A sweep of a full turn or more becomes two
/// half arcs, since a single arc command cannot close on itself.
fn arc_path(center: Vec2, radius: f64, start: f64, end: f64) -> String {
    let radius = radius.max(0.0);
    let sweep = end - start;
    let point = |angle: f64| Vec2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());
    let p0 = point(start);

    if sweep.abs() >= TAU {
        let mid = point(start + TAU / 2.0);
        let r = fmt_num(radius);
        return format!(
            "M {} {} A {r} {r} 0 1 1 {} {} A {r} {r} 0 1 1 {} {}",
            fmt_num(p0.x),
            fmt_num(p0.y),
            fmt_num(mid.x),
            fmt_num(mid.y),
            fmt_num(p0.x),
            fmt_num(p0.y),
        );
    }

    let p1 = point(end);
    let large = u8::from(sweep.abs() > TAU / 2.0);
    let clockwise = u8::from(sweep >= 0.0);
    let r = fmt_num(radius);
    format!(
        "M {} {} A {r} {r} 0 {large} {clockwise} {} {}",
        fmt_num(p0.x),
        fmt_num(p0.y),
        fmt_num(p1.x),
        fmt_num(p1.y),
    )
}

/// Two decimals, trailing zeros dropped.
fn fmt_num(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
