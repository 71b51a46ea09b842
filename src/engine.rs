use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::EditorConfig;
use crate::geometry::{Curve, Point};
use crate::hit::{hit_curve, hit_point};
use crate::input::{Button, Key, Mode};
use crate::render::{self, DrawCommand, Scene};
use crate::store::CurveStore;
use crate::style::{StrokeStyle, StyleParams};
use crate::surface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// State changed in a way the next frame must show.
    RenderNeeded,
    /// Curve drawing ended; the host should clear its active tool.
    ToolReleased,
    /// A curve was committed. Carries exactly the stored points.
    CurveFinished(Curve),
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub store: CurveStore,
    pub mode: Mode,
    /// Last known pointer position, kept for the rubber-band preview.
    pub pointer: Option<Point>,
    pub style: StyleParams,
    pub config: EditorConfig,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            store: CurveStore::new(),
            mode: Mode::Idle,
            pointer: None,
            style: StyleParams::default(),
            config,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    // --- Host inputs ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    /// Sync the host's "curve tool is active" signal.
    ///
    /// Arming enters drawing with an empty curve and drops any selection;
    /// disarming abandons the uncommitted curve. Both are no-ops when the
    /// engine is already in the requested state.
    pub fn set_armed(&mut self, armed: bool) -> Vec<Action> {
        match (armed, self.mode.is_drawing()) {
            (true, false) => {
                self.store.begin_active();
                self.mode = Mode::Drawing;
                log::debug!("curve tool armed");
                vec![Action::RenderNeeded]
            }
            (false, true) => {
                let dropped = self.store.abandon_active().map_or(0, |c| c.len());
                self.mode = Mode::Idle;
                log::debug!("curve tool disarmed; abandoned {dropped} uncommitted point(s)");
                vec![Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    /// Set the stroke color used for every curve.
    pub fn set_color(&mut self, color: String) -> Vec<Action> {
        if self.style.color == color {
            return Vec::new();
        }
        self.style.color = color;
        vec![Action::RenderNeeded]
    }

    /// Set the brush size. Non-positive or non-finite sizes are ignored.
    pub fn set_brush_size(&mut self, size: f64) -> Vec<Action> {
        match self.style.set_brush_size(size) {
            Ok(()) => vec![Action::RenderNeeded],
            Err(err) => {
                log::warn!("{err}");
                Vec::new()
            }
        }
    }

    /// Set the stroke pattern.
    pub fn set_stroke_style(&mut self, stroke_style: StrokeStyle) -> Vec<Action> {
        if self.style.stroke_style == stroke_style {
            return Vec::new();
        }
        self.style.stroke_style = stroke_style;
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    /// Pointer pressed at `pt` (surface-local).
    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || !pt.is_finite() {
            return Vec::new();
        }

        if self.mode.is_drawing() {
            return self.append_point(pt);
        }

        if let Some((curve, point)) = self.hit_selected_point(pt) {
            self.mode = Mode::Dragging { curve, point };
            log::debug!("dragging point {point} of curve {curve}");
            return vec![Action::RenderNeeded];
        }

        if let Some(curve) = hit_curve(pt, self.store.committed(), self.config.curve_hit_radius) {
            self.mode = Mode::Selected { curve };
            log::debug!("selected curve {curve}");
            return vec![Action::RenderNeeded];
        }

        self.store.begin_active();
        self.mode = Mode::Drawing;
        log::debug!("started curve at ({}, {})", pt.x, pt.y);
        self.append_point(pt)
    }

    /// Pointer moved to `pt` (surface-local).
    ///
    /// `primary_held` is whether the primary button is down for this event.
    /// A drag whose release was never delivered ends here instead of
    /// following a hovering pointer.
    pub fn on_pointer_move(&mut self, pt: Point, primary_held: bool) -> Vec<Action> {
        if !pt.is_finite() {
            return Vec::new();
        }
        self.pointer = Some(pt);

        match self.mode {
            Mode::Drawing => vec![Action::RenderNeeded],
            Mode::Dragging { curve, .. } if !primary_held => {
                log::debug!("drag ended without release");
                self.mode = Mode::Selected { curve };
                vec![Action::RenderNeeded]
            }
            Mode::Dragging { curve, point } => {
                if let Err(err) = self.store.replace_point_in_committed(curve, point, pt) {
                    log::debug!("drag skipped: {err}");
                    self.mode = Mode::Idle;
                }
                vec![Action::RenderNeeded]
            }
            Mode::Idle | Mode::Selected { .. } => Vec::new(),
        }
    }

    /// Pointer released. Ends a drag but keeps the selection.
    pub fn on_pointer_up(&mut self, _pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.end_drag()
    }

    /// Pointer stream cancelled by the browser (touch cancel, lost capture).
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    /// Key pressed. Only the configured commit key is acted on.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.0 != self.config.commit_key || !self.mode.is_drawing() {
            return Vec::new();
        }
        match self.store.commit_active() {
            Ok(curve) => {
                self.mode = Mode::Idle;
                log::debug!("committed curve {} with {} point(s)", self.store.len() - 1, curve.len());
                vec![Action::ToolReleased, Action::CurveFinished(curve), Action::RenderNeeded]
            }
            Err(err) => {
                log::debug!("commit refused: {err}");
                Vec::new()
            }
        }
    }

    // --- Render ---

    /// Describe the current frame.
    #[must_use]
    pub fn render_commands(&self) -> Vec<DrawCommand> {
        render::draw(&Scene {
            store: &self.store,
            mode: self.mode,
            pointer: self.pointer,
            style: &self.style,
            config: &self.config,
            width: self.viewport_width,
            height: self.viewport_height,
        })
    }

    // --- Queries ---

    /// Committed curves in paint order.
    #[must_use]
    pub fn curves(&self) -> &[Curve] {
        self.store.committed()
    }

    /// The curve being drawn, if any.
    #[must_use]
    pub fn active_curve(&self) -> Option<&Curve> {
        self.store.active()
    }

    /// Index of the selected curve. Stale indices read as no selection.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.mode
            .selected_curve()
            .filter(|&curve| curve < self.store.len())
    }

    /// `(curve, point)` being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<(usize, usize)> {
        match self.mode {
            Mode::Dragging { curve, point } => Some((curve, point)),
            _ => None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    // --- Helpers ---

    fn append_point(&mut self, pt: Point) -> Vec<Action> {
        match self.store.append_point_to_active(pt) {
            Ok(()) => vec![Action::RenderNeeded],
            Err(err) => {
                log::warn!("point dropped: {err}");
                Vec::new()
            }
        }
    }

    fn end_drag(&mut self) -> Vec<Action> {
        match self.mode {
            Mode::Dragging { curve, .. } => {
                self.mode = Mode::Selected { curve };
                vec![Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    fn hit_selected_point(&self, pt: Point) -> Option<(usize, usize)> {
        let curve = self.selection()?;
        let point = hit_point(pt, self.store.get(curve)?, self.config.point_hit_radius)?;
        Some((curve, point))
    }
}

/// The full curve engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// A canvas without a 2D context still accepts input; rendering is then a no-op.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: EditorConfig) -> Self {
        let ctx = context_2d(&canvas);
        Self { canvas, ctx, core: EngineCore::with_config(config) }
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    // --- Viewport ---

    /// Resize the backing store for `dpr` and scale the context to CSS pixels.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the context rejects the transform.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width(backing_px(width_css, dpr));
        self.canvas.set_height(backing_px(height_css, dpr));
        match &self.ctx {
            Some(ctx) => ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0),
            None => Ok(()),
        }
    }

    // --- Delegated host inputs ---

    pub fn set_armed(&mut self, armed: bool) -> Vec<Action> {
        self.core.set_armed(armed)
    }

    pub fn set_color(&mut self, color: String) -> Vec<Action> {
        self.core.set_color(color)
    }

    pub fn set_brush_size(&mut self, size: f64) -> Vec<Action> {
        self.core.set_brush_size(size)
    }

    pub fn set_stroke_style(&mut self, stroke_style: StrokeStyle) -> Vec<Action> {
        self.core.set_stroke_style(stroke_style)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(pt, button)
    }

    pub fn on_pointer_move(&mut self, pt: Point, primary_held: bool) -> Vec<Action> {
        self.core.on_pointer_move(pt, primary_held)
    }

    pub fn on_pointer_up(&mut self, pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(pt, button)
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_pointer_cancel()
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_down(key)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        let Some(ctx) = self.ctx.as_mut() else {
            log::debug!("render skipped: no 2d context");
            return Ok(());
        };
        let commands = self.core.render_commands();
        surface::replay(ctx, &commands)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn curves(&self) -> &[Curve] {
        self.core.curves()
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.core.selection()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.core.mode()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn backing_px(css: f64, dpr: f64) -> u32 {
    (css * dpr).max(0.0) as u32
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    let object = match canvas.get_context("2d") {
        Ok(Some(object)) => object,
        Ok(None) => {
            log::warn!("canvas has no 2d context; rendering disabled");
            return None;
        }
        Err(err) => {
            log::warn!("failed to acquire 2d context: {err:?}");
            return None;
        }
    };
    match object.dyn_into::<CanvasRenderingContext2d>() {
        Ok(ctx) => Some(ctx),
        Err(other) => {
            log::warn!("2d context has unexpected type: {other:?}");
            None
        }
    }
}
