#![allow(clippy::float_cmp)]

use super::*;

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl IntentHandler for Recorder {
    fn on_delete(&mut self, id: &str) {
        self.calls.push(format!("delete {id}"));
    }

    fn on_nudge(&mut self, id: &str, dx: f64, dy: f64) {
        self.calls.push(format!("nudge {id} {dx} {dy}"));
    }

    fn on_zoom(&mut self, id: &str, factor: f64) {
        self.calls.push(format!("zoom {id} {factor}"));
    }
}

#[derive(Default)]
struct CommitRecorder {
    commits: Vec<(String, Placement)>,
}

impl IntentHandler for CommitRecorder {
    fn on_delete(&mut self, _id: &str) {}
    fn on_nudge(&mut self, _id: &str, _dx: f64, _dy: f64) {}
    fn on_zoom(&mut self, _id: &str, _factor: f64) {}

    fn on_commit(&mut self, id: &str, placement: Placement) {
        self.commits.push((id.to_owned(), placement));
    }
}

#[test]
fn routes_intents_in_order() {
    let actions = vec![
        Action::SelectionChanged(None),
        Action::DeleteRequested { id: "a".into() },
        Action::Nudged { id: "b".into(), dx: -5.0, dy: 0.0 },
        Action::RenderNeeded,
        Action::Zoomed { id: "c".into(), factor: 0.1 },
    ];
    let mut rec = Recorder::default();
    let n = dispatch(&actions, &mut rec);
    assert_eq!(n, 3);
    assert_eq!(rec.calls, vec!["delete a", "nudge b -5 0", "zoom c 0.1"]);
}

#[test]
fn rotate_and_commit_default_to_noop_but_count() {
    let actions = vec![
        Action::RotateRequested { id: "a".into() },
        Action::PlacementCommitted { id: "a".into(), placement: Placement::default() },
    ];
    let mut rec = Recorder::default();
    assert_eq!(dispatch(&actions, &mut rec), 2);
    assert!(rec.calls.is_empty());
}

#[test]
fn view_actions_are_skipped() {
    let actions = vec![
        Action::SetCursor("move".into()),
        Action::PlacementChanged { id: "a".into(), placement: Placement::default() },
        Action::RenderNeeded,
    ];
    let mut rec = Recorder::default();
    assert_eq!(dispatch(&actions, &mut rec), 0);
}

#[test]
fn commit_reaches_overriding_handler() {
    let placement = Placement { x: 160.0, y: 140.0, scale: 1.0 };
    let actions = vec![Action::PlacementCommitted { id: "A".into(), placement }];
    let mut rec = CommitRecorder::default();
    dispatch(&actions, &mut rec);
    assert_eq!(rec.commits, vec![("A".to_owned(), placement)]);
}

#[test]
fn works_through_trait_object() {
    let mut rec = Recorder::default();
    let handler: &mut dyn IntentHandler = &mut rec;
    let n = dispatch(&[Action::DeleteRequested { id: "x".into() }], handler);
    assert_eq!(n, 1);
    assert_eq!(rec.calls, vec!["delete x"]);
}
