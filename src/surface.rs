//! Rendering surface: the 2D drawing primitives the renderer's output needs.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`; the
//! top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::geometry::{CubicSegment, Point};
use crate::render::DrawCommand;

/// A 2D drawing target addressed in surface-local pixels.
pub trait Surface {
    type Error;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;
    fn begin_path(&mut self) -> Result<(), Self::Error>;
    fn move_to(&mut self, pt: Point) -> Result<(), Self::Error>;
    fn line_to(&mut self, pt: Point) -> Result<(), Self::Error>;
    fn cubic_to(&mut self, segment: CubicSegment) -> Result<(), Self::Error>;
    fn set_stroke_color(&mut self, color: &str) -> Result<(), Self::Error>;
    fn set_line_width(&mut self, width: f64) -> Result<(), Self::Error>;
    fn set_line_dash(&mut self, pattern: &[f64]) -> Result<(), Self::Error>;
    fn stroke(&mut self) -> Result<(), Self::Error>;
    fn set_fill_color(&mut self, color: &str) -> Result<(), Self::Error>;
    fn fill_circle(&mut self, center: Point, radius: f64) -> Result<(), Self::Error>;
}

/// Push `commands` onto `surface` in order, stopping at the first failure.
///
/// # Errors
///
/// Whatever the surface reports for the failing command.
pub fn replay<S: Surface>(surface: &mut S, commands: &[DrawCommand]) -> Result<(), S::Error> {
    for command in commands {
        match command {
            DrawCommand::Clear { width, height } => surface.clear(*width, *height)?,
            DrawCommand::BeginPath => surface.begin_path()?,
            DrawCommand::MoveTo(pt) => surface.move_to(*pt)?,
            DrawCommand::LineTo(pt) => surface.line_to(*pt)?,
            DrawCommand::CubicTo(segment) => surface.cubic_to(*segment)?,
            DrawCommand::SetStrokeColor(color) => surface.set_stroke_color(color)?,
            DrawCommand::SetLineWidth(width) => surface.set_line_width(*width)?,
            DrawCommand::SetLineDash(pattern) => surface.set_line_dash(pattern)?,
            DrawCommand::Stroke => surface.stroke()?,
            DrawCommand::SetFillColor(color) => surface.set_fill_color(color)?,
            DrawCommand::FillCircle { center, radius } => surface.fill_circle(*center, *radius)?,
        }
    }
    Ok(())
}

// =============================================================
// Browser canvas
// =============================================================

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn begin_path(&mut self) -> Result<(), JsValue> {
        CanvasRenderingContext2d::begin_path(self);
        Ok(())
    }

    fn move_to(&mut self, pt: Point) -> Result<(), JsValue> {
        CanvasRenderingContext2d::move_to(self, pt.x, pt.y);
        Ok(())
    }

    fn line_to(&mut self, pt: Point) -> Result<(), JsValue> {
        CanvasRenderingContext2d::line_to(self, pt.x, pt.y);
        Ok(())
    }

    fn cubic_to(&mut self, seg: CubicSegment) -> Result<(), JsValue> {
        self.bezier_curve_to(seg.cp1.x, seg.cp1.y, seg.cp2.x, seg.cp2.y, seg.to.x, seg.to.y);
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &str) -> Result<(), JsValue> {
        self.set_stroke_style_str(color);
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::set_line_width(self, width);
        Ok(())
    }

    fn set_line_dash(&mut self, pattern: &[f64]) -> Result<(), JsValue> {
        let dash_array = pattern
            .iter()
            .map(|v| JsValue::from_f64(*v))
            .collect::<js_sys::Array>();
        CanvasRenderingContext2d::set_line_dash(self, &dash_array)
    }

    fn stroke(&mut self) -> Result<(), JsValue> {
        CanvasRenderingContext2d::stroke(self);
        Ok(())
    }

    fn set_fill_color(&mut self, color: &str) -> Result<(), JsValue> {
        self.set_fill_style_str(color);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::begin_path(self);
        self.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
        self.fill();
        Ok(())
    }
}

// =============================================================
// Recording surface
// =============================================================

/// A surface that records commands instead of painting them.
///
/// Useful for hosts that batch frames and for asserting on output.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `Stroke` commands recorded so far.
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke))
            .count()
    }
}

impl Surface for Recorder {
    type Error = std::convert::Infallible;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Clear { width, height });
        Ok(())
    }

    fn begin_path(&mut self) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, pt: Point) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::MoveTo(pt));
        Ok(())
    }

    fn line_to(&mut self, pt: Point) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::LineTo(pt));
        Ok(())
    }

    fn cubic_to(&mut self, segment: CubicSegment) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::CubicTo(segment));
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &str) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::SetStrokeColor(color.to_owned()));
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::SetLineWidth(width));
        Ok(())
    }

    fn set_line_dash(&mut self, pattern: &[f64]) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::SetLineDash(pattern.to_vec()));
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Stroke);
        Ok(())
    }

    fn set_fill_color(&mut self, color: &str) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::SetFillColor(color.to_owned()));
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillCircle { center, radius });
        Ok(())
    }
}
