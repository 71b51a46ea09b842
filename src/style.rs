//! Stroke style parameters supplied by the host's pickers.
//!
//! The core never owns these values; the host pushes the current color, brush
//! size, and stroke style and the renderer applies them to every curve.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BRUSH_SIZE_PX, DEFAULT_COLOR};
use crate::error::StyleError;

/// How a curve's stroke is patterned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
}

impl StrokeStyle {
    /// Dash pattern (dash, gap) for the given brush size, or empty for a
    /// continuous line.
    #[must_use]
    pub fn dash_pattern(self, brush_size: f64) -> Vec<f64> {
        match self {
            Self::Solid | Self::Double => Vec::new(),
            Self::Dashed => vec![brush_size * 3.0, brush_size * 2.0],
            Self::Dotted => vec![brush_size, brush_size],
        }
    }

    /// Multiplier applied to the brush size to get the line width.
    #[must_use]
    pub fn width_factor(self) -> f64 {
        match self {
            Self::Double => 0.5,
            Self::Solid | Self::Dashed | Self::Dotted => 1.0,
        }
    }
}

impl FromStr for StrokeStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "double" => Ok(Self::Double),
            _ => Err(StyleError::UnknownStrokeStyle(s.to_owned())),
        }
    }
}

/// Current picker values, read-only to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleParams {
    /// CSS color string.
    pub color: String,
    /// Positive line width in pixels.
    pub brush_size: f64,
    pub stroke_style: StrokeStyle,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_owned(),
            brush_size: DEFAULT_BRUSH_SIZE_PX,
            stroke_style: StrokeStyle::Solid,
        }
    }
}

impl StyleParams {
    /// Set the brush size, keeping the previous value if `size` is unusable.
    ///
    /// # Errors
    ///
    /// [`StyleError::InvalidBrushSize`] for non-finite or non-positive sizes.
    pub fn set_brush_size(&mut self, size: f64) -> Result<(), StyleError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(StyleError::InvalidBrushSize(size));
        }
        self.brush_size = size;
        Ok(())
    }

    /// Effective line width after the stroke style's width factor.
    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.brush_size * self.stroke_style.width_factor()
    }

    /// Dash pattern for the current style and brush size.
    #[must_use]
    pub fn dash_pattern(&self) -> Vec<f64> {
        self.stroke_style.dash_pattern(self.brush_size)
    }
}
