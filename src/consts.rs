//! Shared numeric constants for the curves crate.

// ── Spline ──────────────────────────────────────────────────────

/// Control handles sit at 1/6 of the neighbour chord (cardinal tension).
pub const SPLINE_TENSION_DIVISOR: f64 = 6.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Pick radius in pixels when selecting a committed curve by any of its points.
pub const CURVE_HIT_RADIUS_PX: f64 = 8.0;

/// Pick radius in pixels when grabbing a control point of the selected curve.
pub const POINT_HIT_RADIUS_PX: f64 = 10.0;

// ── Rendering ───────────────────────────────────────────────────

/// Radius of the filled markers painted on the selected curve's points.
pub const MARKER_RADIUS_PX: f64 = 5.0;

/// Radius of the dot marking a lone placed point before it has a stroke.
pub const ANCHOR_RADIUS_PX: f64 = 3.0;

/// Stroke color of the rubber-band guide segment.
pub const PREVIEW_COLOR: &str = "#999999";

/// Dash pattern of the rubber-band guide segment, in pixels.
pub const PREVIEW_DASH_PX: [f64; 2] = [5.0, 5.0];

/// Line width of the rubber-band guide segment.
pub const PREVIEW_LINE_WIDTH_PX: f64 = 1.0;

// ── Input ───────────────────────────────────────────────────────

/// Key name (as reported by the browser) that commits the active curve.
pub const COMMIT_KEY: &str = "Enter";

// ── Style defaults ──────────────────────────────────────────────

/// Stroke color used until the host supplies one.
pub const DEFAULT_COLOR: &str = "#1F1A17";

/// Brush size used until the host supplies one.
pub const DEFAULT_BRUSH_SIZE_PX: f64 = 2.0;
