//! Editor configuration: hit radii, marker size, commit key, preview look.
//!
//! The host may pass a JSON object when constructing the tool; any missing
//! field falls back to the defaults in [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ANCHOR_RADIUS_PX, COMMIT_KEY, CURVE_HIT_RADIUS_PX, MARKER_RADIUS_PX, POINT_HIT_RADIUS_PX, PREVIEW_COLOR,
    PREVIEW_DASH_PX, PREVIEW_LINE_WIDTH_PX,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Curve-level pick radius in pixels.
    pub curve_hit_radius: f64,
    /// Point-level pick radius in pixels.
    pub point_hit_radius: f64,
    /// Radius of the selection markers.
    pub marker_radius: f64,
    /// Radius of the anchor dot for a single placed point.
    pub anchor_radius: f64,
    /// Key name that commits the active curve.
    pub commit_key: String,
    pub preview_color: String,
    pub preview_dash: Vec<f64>,
    pub preview_line_width: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            curve_hit_radius: CURVE_HIT_RADIUS_PX,
            point_hit_radius: POINT_HIT_RADIUS_PX,
            marker_radius: MARKER_RADIUS_PX,
            anchor_radius: ANCHOR_RADIUS_PX,
            commit_key: COMMIT_KEY.to_owned(),
            preview_color: PREVIEW_COLOR.to_owned(),
            preview_dash: PREVIEW_DASH_PX.to_vec(),
            preview_line_width: PREVIEW_LINE_WIDTH_PX,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a config from a JSON object.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every radius and width is positive and the commit key is set.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("curve_hit_radius", self.curve_hit_radius),
            ("point_hit_radius", self.point_hit_radius),
            ("marker_radius", self.marker_radius),
            ("anchor_radius", self.anchor_radius),
            ("preview_line_width", self.preview_line_width),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.preview_dash.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::Invalid("preview_dash entries must be non-negative".into()));
        }
        if self.commit_key.trim().is_empty() {
            return Err(ConfigError::Invalid("commit_key must not be empty".into()));
        }
        Ok(())
    }
}
