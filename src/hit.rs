//! Hit-testing against placed elements and the selected element's affordances.
//!
//! Affordance geometry is never retained: [`compute_affordance_regions`] derives
//! every region from the element's current placement and footprint, and callers
//! recompute it on each pointer event.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::config::EngineConfig;
use crate::consts::{
    CORNER_HANDLE_SIZE, NUDGE_BUTTON_RADIUS, NUDGE_BUTTON_SPACING, NUDGE_MARGIN, TOOLBAR_BUTTON_OFFSET,
    TOOLBAR_BUTTON_RADIUS, TOOLBAR_HEIGHT, TOOLBAR_MARGIN, TOOLBAR_WIDTH, ZOOM_BUTTON_RADIUS, ZOOM_BUTTON_SPACING,
    ZOOM_MARGIN,
};
use crate::element::{DecorationElement, ElementId};
use crate::geometry::{Circle, Point, Rect, Size};
use crate::store::{Placement, PlacementStore};

/// Which part of an element (or its chrome) was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Delete,
    Rotate,
    Resize(Corner),
    Body,
    Nudge(NudgeDirection),
    Zoom(ZoomDirection),
}

/// Corner of the scaled bounding box carrying a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Nw,
    Ne,
    Sw,
    Se,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::Nw, Corner::Ne, Corner::Sw, Corner::Se];

    /// Per-axis sign with which a pointer delta grows the box when this corner
    /// is dragged.
    #[must_use]
    pub fn growth_signs(self) -> (f64, f64) {
        match self {
            Self::Nw => (-1.0, -1.0),
            Self::Ne => (1.0, -1.0),
            Self::Sw => (-1.0, 1.0),
            Self::Se => (1.0, 1.0),
        }
    }

    /// Browser cursor name shown while hovering this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Nw | Self::Se => "nwse-resize",
            Self::Ne | Self::Sw => "nesw-resize",
        }
    }
}

/// Direction of a nudge-pad target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl NudgeDirection {
    /// Left-to-right order of the targets on the pad.
    pub const ALL: [NudgeDirection; 4] =
        [NudgeDirection::Left, NudgeDirection::Right, NudgeDirection::Up, NudgeDirection::Down];

    /// Unit offset in surface coordinates (y grows downward).
    #[must_use]
    pub fn unit(self) -> (f64, f64) {
        match self {
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
        }
    }
}

/// Zoom-pad target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub id: ElementId,
    pub part: HitPart,
}

/// Delete/rotate strip above the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toolbar {
    pub strip: Rect,
    pub delete: Circle,
    pub rotate: Circle,
}

/// Directional nudge strip below the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NudgePad {
    pub strip: Rect,
    pub buttons: [(NudgeDirection, Circle); 4],
}

/// Zoom column above-right of the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPad {
    pub strip: Rect,
    pub zoom_in: Circle,
    pub zoom_out: Circle,
}

/// Every interactive region of one selected element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffordanceRegions {
    pub body: Rect,
    pub corners: [(Corner, Rect); 4],
    pub toolbar: Toolbar,
    pub nudge_pad: NudgePad,
    pub zoom_pad: ZoomPad,
}

impl AffordanceRegions {
    /// First region containing `pt`, in priority order: toolbar, corners,
    /// body, nudge pad, zoom pad.
    #[must_use]
    pub fn hit(&self, pt: Point) -> Option<HitPart> {
        if self.toolbar.delete.contains(pt) {
            return Some(HitPart::Delete);
        }
        if self.toolbar.rotate.contains(pt) {
            return Some(HitPart::Rotate);
        }
        if let Some((corner, _)) = self.corners.iter().find(|(_, r)| r.contains(pt)) {
            return Some(HitPart::Resize(*corner));
        }
        if self.body.contains(pt) {
            return Some(HitPart::Body);
        }
        if let Some((dir, _)) = self.nudge_pad.buttons.iter().find(|(_, c)| c.contains(pt)) {
            return Some(HitPart::Nudge(*dir));
        }
        if self.zoom_pad.zoom_in.contains(pt) {
            return Some(HitPart::Zoom(ZoomDirection::In));
        }
        if self.zoom_pad.zoom_out.contains(pt) {
            return Some(HitPart::Zoom(ZoomDirection::Out));
        }
        None
    }
}

/// Scaled bounding box of an element, centered on its position.
#[must_use]
pub fn body_rect(placement: Placement, footprint: Size) -> Rect {
    Rect::centered(Point::new(placement.x, placement.y), footprint.scaled(placement.scale))
}

/// Derive all affordance regions from a placement and unscaled footprint.
#[must_use]
pub fn compute_affordance_regions(placement: Placement, footprint: Size) -> AffordanceRegions {
    let body = body_rect(placement, footprint);
    let (left, right, top, bottom) = (body.left(), body.right(), body.top(), body.bottom());
    let cx = body.center.x;

    let corners = Corner::ALL.map(|c| {
        let center = match c {
            Corner::Nw => Point::new(left, top),
            Corner::Ne => Point::new(right, top),
            Corner::Sw => Point::new(left, bottom),
            Corner::Se => Point::new(right, bottom),
        };
        (c, Rect::square(center, CORNER_HANDLE_SIZE))
    });

    let toolbar_y = top - TOOLBAR_MARGIN - TOOLBAR_HEIGHT / 2.0;
    let toolbar = Toolbar {
        strip: Rect::centered(Point::new(cx, toolbar_y), Size::new(TOOLBAR_WIDTH, TOOLBAR_HEIGHT)),
        delete: Circle::new(Point::new(cx - TOOLBAR_BUTTON_OFFSET, toolbar_y), TOOLBAR_BUTTON_RADIUS),
        rotate: Circle::new(Point::new(cx + TOOLBAR_BUTTON_OFFSET, toolbar_y), TOOLBAR_BUTTON_RADIUS),
    };

    let nudge_y = bottom + NUDGE_MARGIN + NUDGE_BUTTON_RADIUS;
    let mut slot = -1.5;
    let buttons = NudgeDirection::ALL.map(|dir| {
        let center = Point::new(NUDGE_BUTTON_SPACING.mul_add(slot, cx), nudge_y);
        slot += 1.0;
        (dir, Circle::new(center, NUDGE_BUTTON_RADIUS))
    });
    let nudge_pad = NudgePad {
        strip: Rect::centered(
            Point::new(cx, nudge_y),
            Size::new(NUDGE_BUTTON_SPACING * 4.0, NUDGE_BUTTON_RADIUS * 2.0),
        ),
        buttons,
    };

    let zoom_x = right + ZOOM_MARGIN + ZOOM_BUTTON_RADIUS;
    let zoom_pad = ZoomPad {
        strip: Rect::centered(
            Point::new(zoom_x, top - ZOOM_BUTTON_SPACING / 2.0),
            Size::new(ZOOM_BUTTON_RADIUS * 2.0, ZOOM_BUTTON_SPACING + ZOOM_BUTTON_RADIUS * 2.0),
        ),
        zoom_in: Circle::new(Point::new(zoom_x, top - ZOOM_BUTTON_SPACING), ZOOM_BUTTON_RADIUS),
        zoom_out: Circle::new(Point::new(zoom_x, top), ZOOM_BUTTON_RADIUS),
    };

    AffordanceRegions { body, corners, toolbar, nudge_pad, zoom_pad }
}

/// Test what is under `pt`.
///
/// The selected element's affordances are checked first, then every element's
/// body from topmost (last in `elements`) to bottommost.
#[must_use]
pub fn hit_test(
    pt: Point,
    elements: &[DecorationElement],
    store: &PlacementStore,
    config: &EngineConfig,
    selected: Option<&str>,
) -> Option<Hit> {
    if let Some(sel) = selected.and_then(|id| elements.iter().find(|e| e.id == id)) {
        let regions = compute_affordance_regions(store.get(&sel.id), config.footprint(sel.position_class));
        if let Some(part) = regions.hit(pt) {
            return Some(Hit { id: sel.id.clone(), part });
        }
    }

    elements
        .iter()
        .rev()
        .find(|e| {
            let footprint = config.footprint(e.position_class);
            !footprint.is_degenerate() && body_rect(store.get(&e.id), footprint).contains(pt)
        })
        .map(|e| Hit { id: e.id.clone(), part: HitPart::Body })
}

/// Cursor to show when hovering over `part` (or nothing).
#[must_use]
pub fn cursor_for(part: Option<HitPart>) -> &'static str {
    match part {
        None => "default",
        Some(HitPart::Body) => "move",
        Some(HitPart::Resize(corner)) => corner.cursor(),
        Some(HitPart::Delete | HitPart::Rotate | HitPart::Nudge(_) | HitPart::Zoom(_)) => "pointer",
    }
}
