mod common;

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use proptest::prelude::*;

use cropview_core::geometry::{Position, Size};
use cropview_core::state::{StatePatch, StateSnapshot, StateStore};

use common::{assert_invariants, loaded_widget};

fn loaded_store(image: Size, viewport: Size) -> StateStore {
    let mut store = StateStore::new(viewport);
    store.set_state(StatePatch::image_size(image));
    store
}

#[test]
fn test_initial_state() {
    let store = StateStore::new(Size::new(200.0, 100.0));
    let state = store.get_state();
    assert_eq!(state.position, Position::ORIGIN);
    assert_eq!(state.zoom, 1.0);
    assert_eq!(state.image_size, Size::ZERO);
    assert_eq!(state.viewport_size, Size::new(200.0, 100.0));
    assert!(state.loading);
    assert!(state.min_zoom.is_none());
    assert!(state.min_x().is_none());
}

#[test]
fn test_mutations_pass_through_while_loading() {
    let mut store = StateStore::new(Size::new(200.0, 100.0));
    store.set_state(StatePatch::zoom(0.1).with_position(Position::new(-999.0, 999.0)));
    let state = store.get_state();
    assert_eq!(state.zoom, 0.1);
    assert_eq!(state.position, Position::new(-999.0, 999.0));
}

#[test]
fn test_pending_values_revalidated_when_image_arrives() {
    let mut store = StateStore::new(Size::new(200.0, 100.0));
    store.set_state(StatePatch::zoom(0.1).with_position(Position::new(-999.0, 999.0)));
    store.set_state(StatePatch::image_size(Size::new(400.0, 100.0)));

    let state = store.get_state();
    assert!(!state.loading);
    assert_relative_eq!(state.zoom, 1.0);
    assert_relative_eq!(state.position.x, -200.0);
    assert_eq!(state.position.y, 0.0);
    assert_invariants(&state);
}

#[test]
fn test_zoom_normalized_before_position() {
    let mut store = loaded_store(Size::new(400.0, 100.0), Size::new(200.0, 100.0));
    // Only reachable at zoom 2; at zoom 1 x would clamp to -200.
    store.set_state(StatePatch::zoom(2.0).with_position(Position::new(-600.0, -100.0)));
    let state = store.get_state();
    assert_relative_eq!(state.zoom, 2.0);
    assert_relative_eq!(state.position.x, -600.0);
    assert_relative_eq!(state.position.y, -100.0);
}

#[test]
fn test_zoom_out_reclamps_existing_position() {
    let mut store = loaded_store(Size::new(400.0, 100.0), Size::new(200.0, 100.0));
    store.set_state(StatePatch::zoom(2.0).with_position(Position::new(-600.0, -100.0)));
    store.set_state(StatePatch::zoom(1.0));
    let state = store.get_state();
    assert_relative_eq!(state.position.x, -200.0);
    assert_eq!(state.position.y, 0.0);
}

#[test]
fn test_viewport_change_reclamps_zoom_and_position() {
    let mut store = loaded_store(Size::new(400.0, 100.0), Size::new(200.0, 100.0));
    store.set_state(StatePatch::position(Position::new(-200.0, 0.0)));

    store.set_state(StatePatch::viewport_size(Size::new(400.0, 200.0)));
    let state = store.get_state();
    // min_zoom = max(400/400, 200/100)
    assert_relative_eq!(state.zoom, 2.0);
    assert_relative_eq!(state.position.x, -200.0);
    assert_eq!(state.position.y, 0.0);
    assert_invariants(&state);
}

#[test]
fn test_exact_fit_has_zero_bounds() {
    let store = loaded_store(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    let state = store.get_state();
    assert_eq!(state.min_x(), Some(0.0));
    assert_eq!(state.max_x(), Some(0.0));
    assert_eq!(state.min_y(), Some(0.0));
    assert_eq!(state.max_y(), Some(0.0));
    assert_eq!(state.min_zoom, Some(1.0));
}

#[test]
fn test_clearing_image_size_suspends_invariants() {
    let mut store = loaded_store(Size::new(400.0, 100.0), Size::new(200.0, 100.0));
    store.set_state(StatePatch::image_size(Size::ZERO));
    assert!(store.loading());
    store.set_state(StatePatch::zoom(0.01));
    assert_eq!(store.get_state().zoom, 0.01);
}

#[test]
fn test_repaint_hook_receives_every_snapshot() {
    let seen: Rc<RefCell<Vec<StateSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
    let mut store = StateStore::new(Size::new(200.0, 100.0));
    let sink = Rc::clone(&seen);
    store.on_repaint(Box::new(move |state: &StateSnapshot| sink.borrow_mut().push(*state)));

    store.set_state(StatePatch::image_size(Size::new(400.0, 100.0)));
    store.set_state(StatePatch::position(Position::new(-50.0, 0.0)));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(!seen[0].loading);
    assert_eq!(seen[1].position, Position::new(-50.0, 0.0));
    assert_eq!(seen[1], store.get_state());
}

#[test]
fn test_nan_passes_through() {
    let mut widget = loaded_widget(Size::new(200.0, 100.0), 400, 100);

    widget.set_state(StatePatch::position(Position::new(f64::NAN, 0.0)));
    let state = widget.get_state();
    assert!(state.position.x.is_nan());
    assert_eq!(state.position.y, 0.0);

    widget.set_state(StatePatch::zoom(f64::NAN));
    assert!(widget.get_state().zoom.is_nan());

    assert!(widget.crop_image().is_ok());
}

fn patch_strategy() -> impl Strategy<Value = StatePatch> {
    prop_oneof![
        (-1.0f64..5.0).prop_map(StatePatch::zoom),
        (-3000.0f64..3000.0, -3000.0f64..3000.0)
            .prop_map(|(x, y)| StatePatch::position(Position::new(x, y))),
        (10.0f64..800.0, 10.0f64..800.0)
            .prop_map(|(w, h)| StatePatch::viewport_size(Size::new(w, h))),
        (0.0f64..3.0, -500.0f64..500.0, -500.0f64..500.0)
            .prop_map(|(z, x, y)| StatePatch::zoom(z).with_position(Position::new(x, y))),
    ]
}

proptest! {
    #[test]
    fn test_invariants_hold_after_arbitrary_mutations(
        image_w in 1.0f64..4000.0,
        image_h in 1.0f64..4000.0,
        viewport_w in 1.0f64..2000.0,
        viewport_h in 1.0f64..2000.0,
        patches in prop::collection::vec(patch_strategy(), 1..64),
    ) {
        let mut store = loaded_store(Size::new(image_w, image_h), Size::new(viewport_w, viewport_h));
        assert_invariants(&store.get_state());
        for patch in patches {
            store.set_state(patch);
            assert_invariants(&store.get_state());
        }
    }
}

#[test]
fn test_snapshot_serializes() {
    let store = loaded_store(Size::new(400.0, 100.0), Size::new(200.0, 100.0));
    let json = serde_json::to_value(store.get_state()).unwrap();
    assert_eq!(json["loading"], false);
    assert_eq!(json["image_size"]["width"], 400.0);
    assert_eq!(json["x_bounds"]["min"], -200.0);
}
