//! Routes intent actions to host callbacks.
//!
//! The engine only reports intents; what "delete" or "persist" means is the
//! host's business. Implement [`IntentHandler`] and feed every batch of
//! actions from a pointer handler through [`dispatch`].

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use js_sys::Function;
use wasm_bindgen::JsValue;

use crate::engine::Action;
use crate::store::Placement;

/// Host-side reactions to one-shot and drop intents.
pub trait IntentHandler {
    /// The delete target was pressed. The engine has already cleared selection.
    fn on_delete(&mut self, id: &str);

    /// The element was nudged by `(dx, dy)` logical units.
    fn on_nudge(&mut self, id: &str, dx: f64, dy: f64);

    /// The element's scale changed by the signed step `factor`.
    fn on_zoom(&mut self, id: &str, factor: f64);

    /// The rotate target was pressed. Rotation has no behavior yet.
    fn on_rotate(&mut self, _id: &str) {}

    /// A move or resize ended with `placement` in the store.
    fn on_commit(&mut self, _id: &str, _placement: Placement) {}
}

/// Invoke `handler` for every intent in `actions`, in order.
///
/// Returns how many callbacks ran. View-only actions (selection, cursor,
/// render requests, per-event placement changes) are skipped.
pub fn dispatch<H>(actions: &[Action], handler: &mut H) -> usize
where
    H: IntentHandler + ?Sized,
{
    let mut count = 0;
    for action in actions {
        match action {
            Action::DeleteRequested { id } => handler.on_delete(id),
            Action::Nudged { id, dx, dy } => handler.on_nudge(id, *dx, *dy),
            Action::Zoomed { id, factor } => handler.on_zoom(id, *factor),
            Action::RotateRequested { id } => handler.on_rotate(id),
            Action::PlacementCommitted { id, placement } => handler.on_commit(id, *placement),
            Action::SelectionChanged(_)
            | Action::PlacementChanged { .. }
            | Action::SetCursor(_)
            | Action::RenderNeeded => continue,
        }
        count += 1;
    }
    count
}

/// [`IntentHandler`] backed by JavaScript callbacks. Missing callbacks are skipped.
#[derive(Debug, Clone, Default)]
pub struct JsIntentHandler {
    pub on_delete: Option<Function>,
    pub on_nudge: Option<Function>,
    pub on_zoom: Option<Function>,
    pub on_rotate: Option<Function>,
    /// Called with `(id, x, y, scale)`.
    pub on_commit: Option<Function>,
}

fn call_js(callback: Option<&Function>, name: &str, args: &[JsValue]) {
    let Some(f) = callback else {
        return;
    };
    let array = js_sys::Array::new();
    for arg in args {
        array.push(arg);
    }
    if let Err(err) = f.apply(&JsValue::NULL, &array) {
        tracing::warn!(callback = name, ?err, "intent callback threw");
    }
}

impl IntentHandler for JsIntentHandler {
    fn on_delete(&mut self, id: &str) {
        call_js(self.on_delete.as_ref(), "on_delete", &[id.into()]);
    }

    fn on_nudge(&mut self, id: &str, dx: f64, dy: f64) {
        call_js(self.on_nudge.as_ref(), "on_nudge", &[id.into(), dx.into(), dy.into()]);
    }

    fn on_zoom(&mut self, id: &str, factor: f64) {
        call_js(self.on_zoom.as_ref(), "on_zoom", &[id.into(), factor.into()]);
    }

    fn on_rotate(&mut self, id: &str) {
        call_js(self.on_rotate.as_ref(), "on_rotate", &[id.into()]);
    }

    fn on_commit(&mut self, id: &str, placement: Placement) {
        call_js(
            self.on_commit.as_ref(),
            "on_commit",
            &[id.into(), placement.x.into(), placement.y.into(), placement.scale.into()],
        );
    }
}
