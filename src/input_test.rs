use super::*;

fn moving() -> DragState {
    DragState::Moving { id: "A".into(), anchor: Placement::default(), start: Point::new(1.0, 2.0) }
}

#[test]
fn default_drag_state_is_idle() {
    assert_eq!(DragState::default(), DragState::Idle);
    assert!(!DragState::Idle.is_active());
    assert_eq!(DragState::Idle.dragged_id(), None);
}

#[test]
fn moving_is_active_and_names_element() {
    let s = moving();
    assert!(s.is_active());
    assert_eq!(s.dragged_id(), Some("A"));
}

#[test]
fn resizing_is_active_and_names_element() {
    let s = DragState::Resizing {
        id: "B".into(),
        corner: Corner::Ne,
        anchor: Placement::default(),
        footprint: Size::new(60.0, 60.0),
        start: Point::default(),
    };
    assert!(s.is_active());
    assert_eq!(s.dragged_id(), Some("B"));
}

#[test]
fn default_ui_state() {
    let ui = UiState::default();
    assert!(ui.selected_id.is_none());
    assert_eq!(ui.cursor, "default");
}
