use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};

use crate::config::EngineConfig;
use crate::coords::{SurfaceMetrics, effective_pixel_ratio, to_logical_coordinates};
use crate::element::{DecorationElement, ElementId};
use crate::geometry::{Point, Size};
use crate::hit::{self, AffordanceRegions, Corner, Hit, HitPart, NudgeDirection, ZoomDirection};
use crate::input::{DragState, UiState};
use crate::render::{self, ElementPainter};
use crate::store::{Placement, PlacementStore};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Selection moved to a different element, or was cleared.
    SelectionChanged(Option<ElementId>),
    /// The store was written; `placement` is the value after the write.
    PlacementChanged { id: ElementId, placement: Placement },
    /// A move or resize ended. Hosts that persist on drop listen for this.
    PlacementCommitted { id: ElementId, placement: Placement },
    /// The delete target was pressed. Removing the element is up to the host.
    DeleteRequested { id: ElementId },
    /// The rotate target was pressed. Rotation is not implemented yet.
    RotateRequested { id: ElementId },
    /// A nudge target was pressed and the element moved by `(dx, dy)` requested units.
    Nudged { id: ElementId, dx: f64, dy: f64 },
    /// A zoom target was pressed; `factor` is the signed scale step.
    Zoomed { id: ElementId, factor: f64 },
    SetCursor(String),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// The store is only reachable read-only from outside; pointer handlers are
/// its only writers besides hydration and element removal.
pub struct EngineCore {
    config: EngineConfig,
    store: PlacementStore,
    elements: Vec<DecorationElement>,
    ui: UiState,
    input: DragState,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with `config`, or the defaults when it fails validation.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let config = config.or_default();
        Self {
            store: PlacementStore::with_config(&config),
            config,
            elements: Vec::new(),
            ui: UiState::default(),
            input: DragState::Idle,
        }
    }

    // --- Data inputs ---

    /// Replace the element list. Order is draw order: the last element is topmost.
    ///
    /// A selection whose element is no longer listed is cleared. An in-flight
    /// drag on a vanished element is abandoned on the next pointer event.
    pub fn set_elements(&mut self, elements: Vec<DecorationElement>) -> Vec<Action> {
        self.elements = elements;
        let mut actions = Vec::new();
        if let Some(sel) = self.ui.selected_id.as_deref()
            && !self.is_known(sel)
        {
            self.set_selection(None, &mut actions);
        }
        actions
    }

    /// The host removed an element: forget its placement, selection and drag.
    pub fn remove_element(&mut self, id: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        self.elements.retain(|e| e.id != id);
        self.store.remove(id);
        if self.input.dragged_id() == Some(id) {
            self.input = DragState::Idle;
        }
        if self.ui.selected_id.as_deref() == Some(id) {
            self.set_selection(None, &mut actions);
        }
        actions
    }

    /// Seed placements from the host's persisted values.
    pub fn load_placements<I>(&mut self, placements: I)
    where
        I: IntoIterator<Item = (ElementId, Placement)>,
    {
        self.store.load(placements);
    }

    // --- Pointer events (logical coordinates) ---

    /// Press: hit-test and either run a one-shot action, start a drag, or
    /// clear the selection.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.input.is_active() {
            // Release was never delivered.
            self.end_drag(&mut actions);
        }
        if !pt.is_finite() {
            tracing::warn!(?pt, "ignoring pointer-down at non-finite point");
            return actions;
        }

        let hit = hit::hit_test(pt, &self.elements, &self.store, &self.config, self.ui.selected_id.as_deref());
        let Some(Hit { id, part }) = hit else {
            self.set_selection(None, &mut actions);
            return actions;
        };

        match part {
            HitPart::Delete => {
                self.set_selection(None, &mut actions);
                actions.push(Action::DeleteRequested { id });
            }
            HitPart::Rotate => actions.push(Action::RotateRequested { id }),
            HitPart::Nudge(dir) => self.nudge(id, dir, &mut actions),
            HitPart::Zoom(dir) => self.zoom(id, dir, &mut actions),
            HitPart::Resize(corner) => self.begin_resize(id, corner, pt),
            HitPart::Body => {
                self.set_selection(Some(id.clone()), &mut actions);
                let anchor = self.store.get(&id);
                tracing::debug!(%id, "move started");
                self.input = DragState::Moving { id, anchor, start: pt };
            }
        }
        actions
    }

    /// Motion: update the dragged placement, or refresh the hover cursor when idle.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        if !pt.is_finite() {
            return actions;
        }
        if let Some(id) = self.input.dragged_id()
            && !self.is_known(id)
        {
            tracing::debug!(%id, "dragged element vanished; drag abandoned");
            self.input = DragState::Idle;
            return actions;
        }

        match self.input.clone() {
            DragState::Idle => self.update_cursor(pt, &mut actions),
            DragState::Moving { id, anchor, start } => {
                let delta = pt.delta_from(start);
                let x = self.config.clamp_axis(anchor.x + delta.x);
                let y = self.config.clamp_axis(anchor.y + delta.y);
                let placement = self.store.set_position(&id, x, y);
                actions.push(Action::PlacementChanged { id, placement });
                actions.push(Action::RenderNeeded);
            }
            DragState::Resizing { id, corner, anchor, footprint, start } => {
                let Some(scale) = resize_scale(anchor, footprint, corner, pt.delta_from(start)) else {
                    return actions;
                };
                let placement = self.store.set_scale(&id, scale);
                actions.push(Action::PlacementChanged { id, placement });
                actions.push(Action::RenderNeeded);
            }
        }
        actions
    }

    /// Release, wherever it happens: end any drag, keep the selection.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.end_drag(&mut actions);
        actions
    }

    /// Pointer left the surface. Treated exactly like a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    // --- Queries ---

    /// The currently selected element, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.ui.selected_id.as_deref()
    }

    /// Placement of `id` for draw-time positioning.
    #[must_use]
    pub fn placement(&self, id: &str) -> Placement {
        self.store.get(id)
    }

    #[must_use]
    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.input
    }

    #[must_use]
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    #[must_use]
    pub fn elements(&self) -> &[DecorationElement] {
        &self.elements
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Unscaled footprint of a listed element.
    #[must_use]
    pub fn footprint(&self, id: &str) -> Option<Size> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .map(|e| self.config.footprint(e.position_class))
    }

    /// Affordance regions of the selected element, as the hit-tester sees them.
    #[must_use]
    pub fn selected_regions(&self) -> Option<AffordanceRegions> {
        let id = self.ui.selected_id.as_deref()?;
        let footprint = self.footprint(id)?;
        Some(hit::compute_affordance_regions(self.store.get(id), footprint))
    }

    // --- Internals ---

    fn is_known(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e.id == id)
    }

    fn set_selection(&mut self, next: Option<ElementId>, actions: &mut Vec<Action>) {
        if self.ui.selected_id == next {
            return;
        }
        self.ui.selected_id.clone_from(&next);
        actions.push(Action::SelectionChanged(next));
        actions.push(Action::RenderNeeded);
    }

    fn begin_resize(&mut self, id: ElementId, corner: Corner, start: Point) {
        let Some(footprint) = self.footprint(&id) else {
            tracing::warn!(%id, ?corner, "resize on unknown element ignored");
            return;
        };
        let anchor = self.store.get(&id);
        if footprint.scaled(anchor.scale).is_degenerate() {
            tracing::warn!(%id, ?footprint, "resize on zero-sized element ignored");
            return;
        }
        tracing::debug!(%id, ?corner, "resize started");
        self.input = DragState::Resizing { id, corner, anchor, footprint, start };
    }

    fn nudge(&mut self, id: ElementId, dir: NudgeDirection, actions: &mut Vec<Action>) {
        let (ux, uy) = dir.unit();
        let (dx, dy) = (ux * self.config.nudge_step, uy * self.config.nudge_step);
        let current = self.store.get(&id);
        // Only the nudged axis is clamped; the other keeps its stored value.
        let (x, y) = match dir {
            NudgeDirection::Left | NudgeDirection::Right => (self.config.clamp_axis(current.x + dx), current.y),
            NudgeDirection::Up | NudgeDirection::Down => (current.x, self.config.clamp_axis(current.y + dy)),
        };
        let placement = self.store.set_position(&id, x, y);
        actions.push(Action::PlacementChanged { id: id.clone(), placement });
        actions.push(Action::Nudged { id, dx, dy });
        actions.push(Action::RenderNeeded);
    }

    fn zoom(&mut self, id: ElementId, dir: ZoomDirection, actions: &mut Vec<Action>) {
        let factor = dir.sign() * self.config.zoom_step;
        let current = self.store.get(&id);
        let placement = self.store.set_scale(&id, current.scale + factor);
        actions.push(Action::PlacementChanged { id: id.clone(), placement });
        actions.push(Action::Zoomed { id, factor });
        actions.push(Action::RenderNeeded);
    }

    fn end_drag(&mut self, actions: &mut Vec<Action>) {
        match std::mem::take(&mut self.input) {
            DragState::Idle => {}
            DragState::Moving { id, .. } | DragState::Resizing { id, .. } => {
                if self.is_known(&id) {
                    tracing::debug!(%id, "drag ended");
                    let placement = self.store.get(&id);
                    actions.push(Action::PlacementCommitted { id, placement });
                } else {
                    tracing::debug!(%id, "drag on vanished element dropped without commit");
                }
            }
        }
    }

    fn update_cursor(&mut self, pt: Point, actions: &mut Vec<Action>) {
        let part = hit::hit_test(pt, &self.elements, &self.store, &self.config, self.ui.selected_id.as_deref())
            .map(|h| h.part);
        let cursor = hit::cursor_for(part);
        if cursor != self.ui.cursor {
            self.ui.cursor = cursor;
            actions.push(Action::SetCursor(cursor.to_owned()));
        }
    }
}

/// Uniform scale for a corner drag.
///
/// The anchor's scaled box grows (or shrinks) by twice the pointer delta along
/// the axes the corner implies, since the element stays centered. The larger of
/// the width and height ratios drives both axes. Returns `None` for a
/// zero-sized anchor. The result is not clamped.
#[must_use]
pub fn resize_scale(anchor: Placement, footprint: Size, corner: Corner, delta: Point) -> Option<f64> {
    let box_size = footprint.scaled(anchor.scale);
    if box_size.is_degenerate() || !delta.is_finite() {
        return None;
    }
    let (sx, sy) = corner.growth_signs();
    let width = 2.0f64.mul_add(sx * delta.x, box_size.width);
    let height = 2.0f64.mul_add(sy * delta.y, box_size.height);
    let ratio = (width / box_size.width).max(height / box_size.height);
    Some(anchor.scale * ratio)
}

/// The full engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pixel_ratio: f64,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to `canvas`.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: EngineConfig) -> Self {
        let pixel_ratio = effective_pixel_ratio(web_sys::window().map_or(1.0, |w| w.device_pixel_ratio()));
        Self { canvas, pixel_ratio, core: EngineCore::with_config(config) }
    }

    /// Size the backing buffer for a logical surface at the given pixel ratio.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn size_surface(&mut self, logical_width: f64, logical_height: f64, pixel_ratio: f64) {
        self.pixel_ratio = effective_pixel_ratio(pixel_ratio);
        self.canvas.set_width((logical_width * self.pixel_ratio).round().max(1.0) as u32);
        self.canvas.set_height((logical_height * self.pixel_ratio).round().max(1.0) as u32);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, ev: &PointerEvent) -> Vec<Action> {
        match self.logical_point(ev) {
            Some(pt) => self.core.on_pointer_down(pt),
            None => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, ev: &PointerEvent) -> Vec<Action> {
        match self.logical_point(ev) {
            Some(pt) => self.core.on_pointer_move(pt),
            None => Vec::new(),
        }
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    // --- Render ---

    /// Draw elements through `painter`, then the selection chrome.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self, painter: &dyn ElementPainter) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let width = f64::from(self.canvas.width()) / self.pixel_ratio;
        let height = f64::from(self.canvas.height()) / self.pixel_ratio;
        render::draw(&ctx, &self.core, painter, Size::new(width, height), self.pixel_ratio)
    }

    /// Surface geometry is re-read for every event; the canvas may have been
    /// resized since the last one.
    fn logical_point(&self, ev: &PointerEvent) -> Option<Point> {
        let metrics = SurfaceMetrics::from_canvas(&self.canvas, self.pixel_ratio);
        to_logical_coordinates(Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())), &metrics)
    }
}
