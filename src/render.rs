//! Drawing primitives for the two layers.
//!
//! The renderers only talk to a [`Surface`], so the same code paints the
//! browser canvas and the recording surface used by the tests.

use web_sys::CanvasRenderingContext2d;

use crate::error::Result;
use crate::model::{
    DEFAULT_CIRCLE_RADIUS, DEFAULT_PALETTE, DEFAULT_STROKE_WIDTH, LineJoin, Point, Rgba, TouchPoint,
};
use crate::util::cyclic;

pub trait Surface {
    /// Wipes the whole surface to transparent.
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<()>;
    /// Strokes one connected polyline through `points` in order.
    fn stroke_polyline(
        &mut self,
        points: &[Point],
        width: f64,
        join: LineJoin,
        color: Rgba,
    ) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct CircleStyle {
    pub radius: f64,
    /// Never empty; `DemoConfig` rejects empty palettes.
    pub palette: Vec<Rgba>,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            radius: DEFAULT_CIRCLE_RADIUS,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl CircleStyle {
    /// Colour for a touch slot; slots beyond the palette wrap around.
    pub fn color_for(&self, slot: usize) -> Rgba {
        cyclic(&self.palette, slot).copied().unwrap_or(Rgba::BLACK)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathStyle {
    pub width: f64,
    pub color: Rgba,
    pub join: LineJoin,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_STROKE_WIDTH,
            color: Rgba::BLACK,
            join: LineJoin::Round,
        }
    }
}

pub fn draw_circles<S: Surface + ?Sized>(
    surface: &mut S,
    touches: &[TouchPoint],
    style: &CircleStyle,
) -> Result<()> {
    for t in touches {
        surface.fill_circle(t.pos, style.radius, style.color_for(t.slot))?;
    }
    Ok(())
}

pub fn draw_path<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    style: &PathStyle,
) -> Result<()> {
    if points.is_empty() {
        return Ok(());
    }
    surface.stroke_polyline(points, style.width, style.join, style.color)
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<()> {
        self.set_fill_style_str(&color.to_css());
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)?;
        self.fill();
        Ok(())
    }

    fn stroke_polyline(
        &mut self,
        points: &[Point],
        width: f64,
        join: LineJoin,
        color: Rgba,
    ) -> Result<()> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.set_stroke_style_str(&color.to_css());
        self.set_line_width(width);
        self.set_line_join(join.as_css());
        self.begin_path();
        self.move_to(first.x, first.y);
        for p in rest {
            self.line_to(p.x, p.y);
        }
        self.stroke();
        Ok(())
    }
}

/// Surface that records calls instead of painting. Used by tests and handy
/// for inspecting what a frame would draw.
#[derive(Default, Debug, Clone)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear { width: f64, height: f64 },
    Circle { center: Point, radius: f64, color: Rgba },
    Polyline { points: Vec<Point>, width: f64, join: LineJoin, color: Rgba },
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<()> {
        self.calls.push(DrawCall::Circle { center, radius, color });
        Ok(())
    }

    fn stroke_polyline(
        &mut self,
        points: &[Point],
        width: f64,
        join: LineJoin,
        color: Rgba,
    ) -> Result<()> {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            width,
            join,
            color,
        });
        Ok(())
    }
}
