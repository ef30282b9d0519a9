//! Interaction state: current selection and the active drag gesture.
//!
//! `UiState` is view state the renderer reads. `DragState` is the gesture
//! tracked between pointer-down and pointer-up, carrying the anchor snapshot
//! every motion event is measured against.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::element::ElementId;
use crate::geometry::{Point, Size};
use crate::hit::Corner;
use crate::store::Placement;

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// The id of the currently selected element, if any.
    pub selected_id: Option<ElementId>,
    /// Cursor most recently requested from the host.
    pub cursor: &'static str,
}

impl Default for UiState {
    fn default() -> Self {
        Self { selected_id: None, cursor: "default" }
    }
}

/// Gesture state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Dragging an element's body.
    Moving {
        id: ElementId,
        /// Placement at pointer-down.
        anchor: Placement,
        /// Logical pointer position at pointer-down.
        start: Point,
    },
    /// Dragging one of the four corner handles.
    Resizing {
        id: ElementId,
        corner: Corner,
        /// Placement at pointer-down.
        anchor: Placement,
        /// Unscaled footprint of the element.
        footprint: Size,
        /// Logical pointer position at pointer-down.
        start: Point,
    },
}

impl DragState {
    /// A move or resize is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Id of the element being dragged.
    #[must_use]
    pub fn dragged_id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Moving { id, .. } | Self::Resizing { id, .. } => Some(id.as_str()),
        }
    }
}
