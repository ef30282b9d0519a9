//! The placement store: authoritative `{x, y, scale}` per element.
//!
//! Reads never fail. An id that has never been written reports the store's
//! default placement, and the first write materializes an entry from that
//! default. `set_position` and `set_scale` are the only mutation paths besides
//! hydration and removal, and every path keeps `scale` inside the configured
//! range.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::consts::{MAX_SCALE, MIN_SCALE};
use crate::element::ElementId;

/// Position (center, logical units) and uniform scale of one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, scale: 1.0 }
    }
}

/// Keyed map from element id to placement.
#[derive(Debug, Clone)]
pub struct PlacementStore {
    placements: HashMap<ElementId, Placement>,
    default: Placement,
    min_scale: f64,
    max_scale: f64,
}

impl PlacementStore {
    /// Empty store with a `{0, 0, 1.0}` default and the standard scale range.
    #[must_use]
    pub fn new() -> Self {
        Self { placements: HashMap::new(), default: Placement::default(), min_scale: MIN_SCALE, max_scale: MAX_SCALE }
    }

    /// Empty store whose default position and scale range come from `config`.
    /// An invalid config yields the stock defaults.
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        let config = &config.clone().or_default();
        let default = Placement {
            x: config.default_position.x,
            y: config.default_position.y,
            scale: config.clamp_scale(1.0),
        };
        Self { placements: HashMap::new(), default, min_scale: config.min_scale, max_scale: config.max_scale }
    }

    /// The placement of `id`, or the default when it has never been written.
    #[must_use]
    pub fn get(&self, id: &str) -> Placement {
        self.placements.get(id).copied().unwrap_or(self.default)
    }

    /// Move `id` to `(x, y)`, keeping its scale. Non-finite coordinates are
    /// ignored. Returns the placement after the call.
    pub fn set_position(&mut self, id: &str, x: f64, y: f64) -> Placement {
        if !(x.is_finite() && y.is_finite()) {
            tracing::warn!(%id, x, y, "ignoring non-finite position");
            return self.get(id);
        }
        let entry = self.entry(id);
        entry.x = x;
        entry.y = y;
        *entry
    }

    /// Set the scale of `id`, clamped into range. `NaN` is ignored.
    /// Returns the placement after the call.
    pub fn set_scale(&mut self, id: &str, scale: f64) -> Placement {
        if scale.is_nan() {
            tracing::warn!(%id, "ignoring NaN scale");
            return self.get(id);
        }
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        let entry = self.entry(id);
        entry.scale = clamped;
        *entry
    }

    /// Seed placements from persisted values, replacing any existing entries
    /// with the same id.
    pub fn load<I>(&mut self, placements: I)
    where
        I: IntoIterator<Item = (ElementId, Placement)>,
    {
        for (id, p) in placements {
            self.set_position(&id, p.x, p.y);
            self.set_scale(&id, p.scale);
        }
    }

    /// Drop the entry for `id`, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<Placement> {
        self.placements.remove(id)
    }

    /// Whether `id` has a materialized entry.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.placements.contains_key(id)
    }

    fn entry(&mut self, id: &str) -> &mut Placement {
        let default = self.default;
        self.placements.entry(id.to_owned()).or_insert(default)
    }
}

impl Default for PlacementStore {
    fn default() -> Self {
        Self::new()
    }
}
