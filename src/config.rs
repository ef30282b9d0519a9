//! Engine configuration.
//!
//! Every field has a default matching the garment preview the engine was built
//! for (a 300x300 logical surface). Hosts may override any subset from JSON;
//! missing keys fall back to [`EngineConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{LARGE_FOOTPRINT, MAX_SCALE, MIN_SCALE, MOVE_MAX, MOVE_MIN, NUDGE_STEP, SMALL_FOOTPRINT, ZOOM_STEP};
use crate::element::PositionClass;
use crate::geometry::{Point, Size};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid engine config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scale range [{min}, {max}] is empty or non-positive")]
    InvalidScaleRange { min: f64, max: f64 },
    #[error("move bounds [{min}, {max}] are empty")]
    InvalidBounds { min: f64, max: f64 },
    #[error("{which} footprint must have positive width and height")]
    NonPositiveFootprint { which: &'static str },
    #[error("{which} step must be positive")]
    NonPositiveStep { which: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Lower bound of the move-drag interior, applied to both axes.
    pub move_min: f64,
    /// Upper bound of the move-drag interior, applied to both axes.
    pub move_max: f64,
    /// Position reported for elements that have never been written.
    pub default_position: Point,
    pub nudge_step: f64,
    pub zoom_step: f64,
    /// Unscaled footprint of chest, center and back placements.
    pub large_footprint: Size,
    /// Unscaled footprint of sleeve and pants placements.
    pub small_footprint: Size,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            move_min: MOVE_MIN,
            move_max: MOVE_MAX,
            default_position: Point::new((MOVE_MIN + MOVE_MAX) / 2.0, (MOVE_MIN + MOVE_MAX) / 2.0),
            nudge_step: NUDGE_STEP,
            zoom_step: ZOOM_STEP,
            large_footprint: Size::new(LARGE_FOOTPRINT, LARGE_FOOTPRINT),
            small_footprint: Size::new(SMALL_FOOTPRINT, SMALL_FOOTPRINT),
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON object and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the other
    /// variants when [`EngineConfig::validate`] rejects the values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that every range is non-empty and every size positive.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale && self.max_scale.is_finite()) {
            return Err(ConfigError::InvalidScaleRange { min: self.min_scale, max: self.max_scale });
        }
        if !(self.move_min.is_finite() && self.move_max.is_finite() && self.move_min <= self.move_max) {
            return Err(ConfigError::InvalidBounds { min: self.move_min, max: self.move_max });
        }
        if self.large_footprint.is_degenerate() {
            return Err(ConfigError::NonPositiveFootprint { which: "large" });
        }
        if self.small_footprint.is_degenerate() {
            return Err(ConfigError::NonPositiveFootprint { which: "small" });
        }
        if !(self.nudge_step > 0.0 && self.nudge_step.is_finite()) {
            return Err(ConfigError::NonPositiveStep { which: "nudge" });
        }
        if !(self.zoom_step > 0.0 && self.zoom_step.is_finite()) {
            return Err(ConfigError::NonPositiveStep { which: "zoom" });
        }
        Ok(())
    }

    /// This config if it validates, otherwise the defaults.
    ///
    /// Engine constructors go through here so a bad host config degrades to
    /// the stock layout instead of reaching the clamp helpers.
    #[must_use]
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                tracing::warn!(%err, "rejected engine config; using defaults");
                Self::default()
            }
        }
    }

    /// Unscaled footprint for a placement category.
    #[must_use]
    pub fn footprint(&self, class: PositionClass) -> Size {
        if class.is_small() {
            self.small_footprint
        } else {
            self.large_footprint
        }
    }

    /// Clamp a scale into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Clamp one axis of a position into the move interior.
    #[must_use]
    pub fn clamp_axis(&self, value: f64) -> f64 {
        value.clamp(self.move_min, self.move_max)
    }
}
