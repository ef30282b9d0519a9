//! Viewport-to-logical coordinate mapping.
//!
//! The drawing surface's backing buffer is sized at `css_size * dpr`, and the
//! element may additionally be stretched by CSS. Pointer events arrive in
//! viewport (client) pixels. [`to_logical_coordinates`] nets out both effects
//! so hit-testing runs in the same unit system the drawing code uses.
//!
//! Geometry is read fresh on every event; nothing here is cached.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use web_sys::HtmlCanvasElement;

use crate::geometry::Point;

/// Snapshot of the drawing surface's geometry at the moment of an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    /// On-screen left edge of the surface, in client pixels.
    pub rect_left: f64,
    /// On-screen top edge of the surface, in client pixels.
    pub rect_top: f64,
    /// On-screen width of the surface, in client pixels.
    pub rect_width: f64,
    /// On-screen height of the surface, in client pixels.
    pub rect_height: f64,
    /// Backing buffer width in device pixels.
    pub buffer_width: f64,
    /// Backing buffer height in device pixels.
    pub buffer_height: f64,
    /// Device pixel ratio the buffer was sized with.
    pub pixel_ratio: f64,
}

impl SurfaceMetrics {
    /// Read the canvas's client rect and buffer size.
    #[must_use]
    pub fn from_canvas(canvas: &HtmlCanvasElement, pixel_ratio: f64) -> Self {
        let rect = canvas.get_bounding_client_rect();
        Self {
            rect_left: rect.left(),
            rect_top: rect.top(),
            rect_width: rect.width(),
            rect_height: rect.height(),
            buffer_width: f64::from(canvas.width()),
            buffer_height: f64::from(canvas.height()),
            pixel_ratio,
        }
    }

    /// Surfaces with no visible area (or a nonsensical ratio) cannot map points.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.rect_width > 0.0 && self.rect_height > 0.0 && self.pixel_ratio > 0.0)
    }
}

/// The device pixel ratio the engine sizes buffers and maps points with.
///
/// Ratios below 1 (a zoomed-out page) are kept; non-finite or non-positive
/// values fall back to 1.
#[must_use]
pub fn effective_pixel_ratio(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 { raw } else { 1.0 }
}

/// Convert a pointer's client coordinates into logical surface coordinates.
///
/// Returns `None` for a degenerate surface or non-finite input, in which case
/// the event should be ignored.
#[must_use]
pub fn to_logical_coordinates(client: Point, surface: &SurfaceMetrics) -> Option<Point> {
    if surface.is_degenerate() || !client.is_finite() {
        tracing::debug!(?surface, ?client, "pointer event on unmappable surface ignored");
        return None;
    }
    let sx = surface.buffer_width / surface.rect_width / surface.pixel_ratio;
    let sy = surface.buffer_height / surface.rect_height / surface.pixel_ratio;
    let logical = Point {
        x: (client.x - surface.rect_left) * sx,
        y: (client.y - surface.rect_top) * sy,
    };
    logical.is_finite().then_some(logical)
}
