//! Rendering: draws decoration elements and the selection chrome to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Garment and logo artwork belong to the host; each element is drawn through an
//! [`ElementPainter`] with the context already translated to the element's
//! center and scaled by its placement. The chrome is drawn from the same
//! [`AffordanceRegions`] the hit-tester uses, so what is visible is what is
//! clickable.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::element::DecorationElement;
use crate::engine::EngineCore;
use crate::geometry::{Circle, Rect, Size};
use crate::hit::{AffordanceRegions, NudgeDirection};

/// Selection dash segment length in logical units.
const SELECTION_DASH: f64 = 4.0;

const ACCENT: &str = "#1E90FF";
const DANGER: &str = "#D94B4B";
const PANEL: &str = "rgba(255, 255, 255, 0.85)";

/// Draw callback for one element.
pub trait ElementPainter {
    /// Draw `element` centered on the origin at its unscaled `footprint`.
    ///
    /// # Errors
    ///
    /// Propagates any `Canvas2D` or callback failure.
    fn paint(
        &self,
        ctx: &CanvasRenderingContext2d,
        element: &DecorationElement,
        footprint: Size,
    ) -> Result<(), JsValue>;
}

/// A JavaScript function called as `f(ctx, id, width, height)`.
impl ElementPainter for js_sys::Function {
    fn paint(
        &self,
        ctx: &CanvasRenderingContext2d,
        element: &DecorationElement,
        footprint: Size,
    ) -> Result<(), JsValue> {
        let args = js_sys::Array::new();
        let ctx_value: &JsValue = ctx.as_ref();
        args.push(ctx_value);
        args.push(&JsValue::from_str(&element.id));
        args.push(&JsValue::from_f64(footprint.width));
        args.push(&JsValue::from_f64(footprint.height));
        self.apply(&JsValue::NULL, &args)?;
        Ok(())
    }
}

/// Draw the full scene: elements in list order, then the selected element's chrome.
///
/// `surface` is the logical surface size; `pixel_ratio` the buffer density.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call or painter fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    core: &EngineCore,
    painter: &dyn ElementPainter,
    surface: Size,
    pixel_ratio: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, surface.width, surface.height);

    for element in core.elements() {
        let placement = core.placement(&element.id);
        let footprint = core.config().footprint(element.position_class);
        ctx.save();
        ctx.translate(placement.x, placement.y)?;
        ctx.scale(placement.scale, placement.scale)?;
        let painted = painter.paint(ctx, element, footprint);
        ctx.restore();
        painted?;
    }

    if let Some(regions) = core.selected_regions() {
        draw_selection(ctx, &regions)?;
    }
    Ok(())
}

// =============================================================
// Selection chrome
// =============================================================

fn draw_selection(ctx: &CanvasRenderingContext2d, regions: &AffordanceRegions) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_stroke_style_str(ACCENT);
    ctx.set_line_width(1.0);

    // Dashed bounding box.
    let dash = js_sys::Array::new();
    dash.push(&SELECTION_DASH.into());
    dash.push(&SELECTION_DASH.into());
    ctx.set_line_dash(&dash)?;
    outline(ctx, &regions.body, false);
    ctx.set_line_dash(&js_sys::Array::new())?;

    // Corner handles.
    ctx.set_fill_style_str("#fff");
    for (_, handle) in &regions.corners {
        outline(ctx, handle, true);
    }

    // Panels behind the button rows.
    ctx.set_fill_style_str(PANEL);
    for strip in [&regions.toolbar.strip, &regions.nudge_pad.strip, &regions.zoom_pad.strip] {
        ctx.fill_rect(strip.left(), strip.top(), strip.size.width, strip.size.height);
    }

    button(ctx, &regions.toolbar.delete, "\u{00d7}", DANGER)?;
    button(ctx, &regions.toolbar.rotate, "\u{21bb}", ACCENT)?;

    for (dir, target) in &regions.nudge_pad.buttons {
        let glyph = match dir {
            NudgeDirection::Left => "\u{2190}",
            NudgeDirection::Right => "\u{2192}",
            NudgeDirection::Up => "\u{2191}",
            NudgeDirection::Down => "\u{2193}",
        };
        button(ctx, target, glyph, ACCENT)?;
    }

    button(ctx, &regions.zoom_pad.zoom_in, "+", ACCENT)?;
    button(ctx, &regions.zoom_pad.zoom_out, "\u{2212}", ACCENT)?;

    ctx.restore();
    Ok(())
}

fn button(ctx: &CanvasRenderingContext2d, target: &Circle, glyph: &str, color: &str) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(target.center.x, target.center.y, target.radius, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str("#fff");
    ctx.fill();
    ctx.set_stroke_style_str(color);
    ctx.stroke();

    ctx.set_fill_style_str(color);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font(&format!("{:.0}px sans-serif", target.radius * 1.4));
    ctx.fill_text(glyph, target.center.x, target.center.y)?;
    ctx.set_stroke_style_str(ACCENT);
    Ok(())
}

fn outline(ctx: &CanvasRenderingContext2d, r: &Rect, filled: bool) {
    if filled {
        ctx.fill_rect(r.left(), r.top(), r.size.width, r.size.height);
    }
    ctx.stroke_rect(r.left(), r.top(), r.size.width, r.size.height);
}
