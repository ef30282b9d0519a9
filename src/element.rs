//! Decoration elements as handed to the engine by the surrounding application.
//!
//! The engine does not own these: the host passes the current list (in draw
//! order) and the engine only reads each element's id and placement category.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};

/// Stable identifier of a decoration element, unique among placed elements.
pub type ElementId = String;

/// Where on the garment a decoration sits.
///
/// Only used to pick the unscaled footprint for hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionClass {
    ChestLeft,
    ChestRight,
    ChestCenter,
    Back,
    SleeveLeft,
    SleeveRight,
    Pants,
}

impl PositionClass {
    /// Sleeve and pants placements use the small footprint.
    #[must_use]
    pub fn is_small(self) -> bool {
        matches!(self, Self::SleeveLeft | Self::SleeveRight | Self::Pants)
    }
}

/// A logo (or other asset) placed on the garment preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationElement {
    pub id: ElementId,
    #[serde(rename = "positionClass", alias = "position_class")]
    pub position_class: PositionClass,
}

impl DecorationElement {
    #[must_use]
    pub fn new(id: impl Into<ElementId>, position_class: PositionClass) -> Self {
        Self { id: id.into(), position_class }
    }
}
