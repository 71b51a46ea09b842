//! Error types for the curve core.
//!
//! None of these reach the host as failures: the engine logs them and skips
//! the intended effect, so the next redraw simply shows nothing changed.

/// Refused curve-store mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("curve has {len} point(s); at least 2 are required to commit")]
    DegenerateCurve { len: usize },
    #[error("no active curve")]
    NotDrawing,
    #[error("curve not found: {0}")]
    CurveNotFound(usize),
    #[error("point {point} not found in curve {curve}")]
    PointNotFound { curve: usize, point: usize },
}

/// Invalid editor configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Rejected style parameter from the host pickers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    #[error("unknown stroke style: {0}")]
    UnknownStrokeStyle(String),
    #[error("brush size must be a positive finite number, got {0}")]
    InvalidBrushSize(f64),
}
