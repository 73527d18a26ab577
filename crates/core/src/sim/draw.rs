use super::geom::{Color, Surface, Vec2};

/// Outline style for lines and shape borders.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// Dash pattern in pixels; empty means solid.
    pub dash: Vec<f64>,
}

impl Stroke {
    #[must_use]
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: Vec::new(),
        }
    }

    #[must_use]
    pub fn dashed(color: Color, width: f64, on: f64, off: f64) -> Self {
        Self {
            color,
            width,
            dash: vec![on, off],
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Renderer-agnostic drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<Vec2>,
        stroke: Stroke,
    },
    Circle {
        center: Vec2,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    /// Arc from `start` to `end` radians, clockwise on screen.
    Arc {
        center: Vec2,
        radius: f64,
        start: f64,
        end: f64,
        stroke: Stroke,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    /// Closed outline.
    Polygon {
        points: Vec<Vec2>,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Text {
        position: Vec2,
        text: String,
        color: Color,
        size: f64,
        anchor: TextAnchor,
    },
}

impl DrawCmd {
    /// True when no coordinate of this command is NaN or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            DrawCmd::Line { from, to, .. } => from.is_finite() && to.is_finite(),
            DrawCmd::Polyline { points, .. } | DrawCmd::Polygon { points, .. } => {
                points.iter().all(|p| p.is_finite())
            }
            DrawCmd::Circle { center, radius, .. } => center.is_finite() && radius.is_finite(),
            DrawCmd::Arc {
                center,
                radius,
                start,
                end,
                ..
            } => center.is_finite() && radius.is_finite() && start.is_finite() && end.is_finite(),
            DrawCmd::Rect { origin, size, .. } => origin.is_finite() && size.is_finite(),
            DrawCmd::Text { position, .. } => position.is_finite(),
        }
    }
}

/// Draw commands for one rendered frame, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    surface: Surface,
    cmds: Vec<DrawCmd>,
}

impl Frame {
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            cmds: Vec::new(),
        }
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[must_use]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.cmds.iter().all(DrawCmd::is_finite)
    }

    /// Text items in paint order, handy for asserting on labels.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.push(DrawCmd::Line { from, to, stroke });
    }

    pub fn polyline(&mut self, points: Vec<Vec2>, stroke: Stroke) {
        if points.len() >= 2 {
            self.push(DrawCmd::Polyline { points, stroke });
        }
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color) {
        self.push(DrawCmd::Circle {
            center,
            radius,
            fill: Some(color),
            stroke: None,
        });
    }

    pub fn stroke_circle(&mut self, center: Vec2, radius: f64, stroke: Stroke) {
        self.push(DrawCmd::Circle {
            center,
            radius,
            fill: None,
            stroke: Some(stroke),
        });
    }

    pub fn arc(&mut self, center: Vec2, radius: f64, start: f64, end: f64, stroke: Stroke) {
        self.push(DrawCmd::Arc {
            center,
            radius,
            start,
            end,
            stroke,
        });
    }

    pub fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.push(DrawCmd::Rect {
            origin,
            size,
            fill: Some(color),
            stroke: None,
        });
    }

    pub fn fill_polygon(&mut self, points: Vec<Vec2>, color: Color) {
        self.push(DrawCmd::Polygon {
            points,
            fill: Some(color),
            stroke: None,
        });
    }

    pub fn text(&mut self, position: Vec2, text: impl Into<String>, color: Color, size: f64) {
        self.push(DrawCmd::Text {
            position,
            text: text.into(),
            color,
            size,
            anchor: TextAnchor::Start,
        });
    }

    pub fn text_centered(
        &mut self,
        position: Vec2,
        text: impl Into<String>,
        color: Color,
        size: f64,
    ) {
        self.push(DrawCmd::Text {
            position,
            text: text.into(),
            color,
            size,
            anchor: TextAnchor::Middle,
        });
    }

    /// Evenly spaced grid lines every `dx` / `dy` pixels starting at 0.
    pub fn grid(&mut self, dx: f64, dy: f64, stroke: &Stroke) {
        let Surface { width, height } = self.surface;
        let mut x = 0.0;
        while x <= width {
            self.line(Vec2::new(x, 0.0), Vec2::new(x, height), stroke.clone());
            x += dx;
        }
        let mut y = 0.0;
        while y <= height {
            self.line(Vec2::new(0.0, y), Vec2::new(width, y), stroke.clone());
            y += dy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_helpers_record_in_order() {
        let mut frame = Frame::new(Surface::new(100.0, 50.0));
        frame.fill_circle(Vec2::new(10.0, 10.0), 3.0, Color::hex(0xef4444));
        frame.text(Vec2::new(0.0, 0.0), "label", Color::hex(0xffffff), 12.0);
        assert_eq!(frame.len(), 2);
        assert!(matches!(frame.cmds()[0], DrawCmd::Circle { .. }));
        assert_eq!(frame.texts().collect::<Vec<_>>(), vec!["label"]);
    }

    #[test]
    fn polyline_with_one_point_is_dropped() {
        let mut frame = Frame::new(Surface::new(10.0, 10.0));
        frame.polyline(vec![Vec2::ZERO], Stroke::solid(Color::hex(0), 1.0));
        assert!(frame.is_empty());
    }

    #[test]
    fn nan_coordinates_are_detected() {
        let mut frame = Frame::new(Surface::new(10.0, 10.0));
        frame.line(
            Vec2::ZERO,
            Vec2::new(f64::NAN, 1.0),
            Stroke::solid(Color::hex(0), 1.0),
        );
        assert!(!frame.is_finite());
    }

    #[test]
    fn grid_covers_both_axes() {
        let mut frame = Frame::new(Surface::new(40.0, 30.0));
        frame.grid(20.0, 30.0, &Stroke::solid(Color::hex(0x374151), 1.0));
        // x = 0, 20, 40 and y = 0, 30
        assert_eq!(frame.len(), 5);
    }
}
