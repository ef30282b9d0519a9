//! Shared numeric constants for the placement engine.

// ── Placement limits ────────────────────────────────────────────

/// Smallest scale any placement may hold.
pub const MIN_SCALE: f64 = 0.5;

/// Largest scale any placement may hold.
pub const MAX_SCALE: f64 = 2.0;

/// Lower edge of the safe interior region a move drag may reach, per axis.
pub const MOVE_MIN: f64 = 20.0;

/// Upper edge of the safe interior region a move drag may reach, per axis.
pub const MOVE_MAX: f64 = 280.0;

/// Distance a single nudge moves an element, in logical units.
pub const NUDGE_STEP: f64 = 5.0;

/// Scale delta applied by a single zoom-pad press.
pub const ZOOM_STEP: f64 = 0.1;

// ── Footprints ──────────────────────────────────────────────────

/// Unscaled footprint side for chest and center placements.
pub const LARGE_FOOTPRINT: f64 = 60.0;

/// Unscaled footprint side for sleeve and pants placements.
pub const SMALL_FOOTPRINT: f64 = 40.0;

// ── Affordance layout ───────────────────────────────────────────

/// Side of the square resize handle centered on each corner.
pub const CORNER_HANDLE_SIZE: f64 = 8.0;

/// Radius of the delete and rotate targets.
pub const TOOLBAR_BUTTON_RADIUS: f64 = 12.0;

/// Toolbar strip width.
pub const TOOLBAR_WIDTH: f64 = 60.0;

/// Toolbar strip height.
pub const TOOLBAR_HEIGHT: f64 = 28.0;

/// Gap between the element's top edge and the toolbar strip.
pub const TOOLBAR_MARGIN: f64 = 10.0;

/// Horizontal distance of each toolbar target from the strip center.
pub const TOOLBAR_BUTTON_OFFSET: f64 = 15.0;

/// Radius of the four nudge targets.
pub const NUDGE_BUTTON_RADIUS: f64 = 10.0;

/// Center-to-center spacing of the nudge targets.
pub const NUDGE_BUTTON_SPACING: f64 = 24.0;

/// Gap between the element's bottom edge and the nudge strip.
pub const NUDGE_MARGIN: f64 = 16.0;

/// Radius of the zoom-in and zoom-out targets.
pub const ZOOM_BUTTON_RADIUS: f64 = 10.0;

/// Gap between the element's right edge and the zoom pad column.
pub const ZOOM_MARGIN: f64 = 8.0;

/// Vertical center-to-center spacing of the zoom targets.
pub const ZOOM_BUTTON_SPACING: f64 = 22.0;
