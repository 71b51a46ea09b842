//! Rendering: turns the current editor state into a flat list of draw commands.
//!
//! [`draw`] is a pure function of the scene. It never mutates state and never
//! touches the browser; [`crate::surface::replay`] is what pushes the commands
//! onto a real 2D context. Each call describes the whole frame: a full clear
//! followed by every visible curve, the selection markers, the anchor of a
//! single placed point, and the rubber-band preview.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::config::EditorConfig;
use crate::geometry::{CubicSegment, Curve, Point, spline};
use crate::input::Mode;
use crate::store::CurveStore;
use crate::style::StyleParams;

/// One primitive operation on a 2D rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the rectangle `(0, 0, width, height)`.
    Clear { width: f64, height: f64 },
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    /// Append a cubic Bézier from the current path position.
    CubicTo(CubicSegment),
    SetStrokeColor(String),
    SetLineWidth(f64),
    /// Set the dash pattern; an empty list means a continuous line.
    SetLineDash(Vec<f64>),
    Stroke,
    SetFillColor(String),
    FillCircle { center: Point, radius: f64 },
}

/// Read-only view of everything the renderer needs.
pub struct Scene<'a> {
    pub store: &'a CurveStore,
    pub mode: Mode,
    /// Last known pointer position, for the rubber-band preview.
    pub pointer: Option<Point>,
    pub style: &'a StyleParams,
    pub config: &'a EditorConfig,
    /// Surface size in CSS pixels.
    pub width: f64,
    pub height: f64,
}

/// Describe the full frame for `scene`.
#[must_use]
pub fn draw(scene: &Scene<'_>) -> Vec<DrawCommand> {
    let mut out = vec![DrawCommand::Clear { width: scene.width, height: scene.height }];

    // Committed curves in store order (bottom first).
    let selected = scene.mode.selected_curve();
    for (index, curve) in scene.store.committed().iter().enumerate() {
        stroke_curve(&mut out, curve, scene.style);
        if selected == Some(index) {
            draw_markers(&mut out, curve, scene.style, scene.config.marker_radius);
        }
    }

    if !scene.mode.is_drawing() {
        return out;
    }
    let Some(active) = scene.store.active() else {
        return out;
    };

    stroke_curve(&mut out, active, scene.style);
    if let [anchor] = active.points() {
        draw_anchor(&mut out, *anchor, scene.style, scene.config.anchor_radius);
    }

    if let (Some(last), Some(pointer)) = (active.last(), scene.pointer) {
        draw_preview(&mut out, last, pointer, scene.config);
    }

    out
}

// =============================================================
// Curves
// =============================================================

fn stroke_curve(out: &mut Vec<DrawCommand>, curve: &Curve, style: &StyleParams) {
    let Some(path) = spline(curve.points()) else {
        return;
    };

    out.push(DrawCommand::BeginPath);
    out.push(DrawCommand::MoveTo(path.start));
    out.extend(path.segments.into_iter().map(DrawCommand::CubicTo));

    out.push(DrawCommand::SetStrokeColor(style.color.clone()));
    out.push(DrawCommand::SetLineWidth(style.line_width()));
    out.push(DrawCommand::SetLineDash(style.dash_pattern()));
    out.push(DrawCommand::Stroke);
    out.push(DrawCommand::SetLineDash(Vec::new()));
}

fn draw_markers(out: &mut Vec<DrawCommand>, curve: &Curve, style: &StyleParams, radius: f64) {
    out.push(DrawCommand::SetFillColor(style.color.clone()));
    out.extend(
        curve
            .points()
            .iter()
            .map(|&center| DrawCommand::FillCircle { center, radius }),
    );
}

/// A lone placed point has no stroke yet; show where it landed.
fn draw_anchor(out: &mut Vec<DrawCommand>, center: Point, style: &StyleParams, radius: f64) {
    out.push(DrawCommand::SetFillColor(style.color.clone()));
    out.push(DrawCommand::FillCircle { center, radius });
}

// =============================================================
// Rubber-band preview
// =============================================================

fn draw_preview(out: &mut Vec<DrawCommand>, from: Point, to: Point, config: &EditorConfig) {
    out.push(DrawCommand::BeginPath);
    out.push(DrawCommand::MoveTo(from));
    out.push(DrawCommand::LineTo(to));
    out.push(DrawCommand::SetStrokeColor(config.preview_color.clone()));
    out.push(DrawCommand::SetLineWidth(config.preview_line_width));
    out.push(DrawCommand::SetLineDash(config.preview_dash.clone()));
    out.push(DrawCommand::Stroke);
    out.push(DrawCommand::SetLineDash(Vec::new()));
}
