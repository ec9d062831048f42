//! Property tests for gesture clamping: however far the pointer travels,
//! the live and committed placements stay inside the canvas bounds.

use proptest::prelude::*;

use remix_gesture_control::{
    ContainerSize, GestureController, GestureKind, GestureTarget, PointerEvent,
};
use remix_session_model::overlay::{SCALE_MAX, SCALE_MIN, Y_MAX_PERCENT};
use remix_session_model::{ChromaKey, EditSession, OverlayInstance};

fn session_with_instance(x: f64, y: f64, scale: f64) -> EditSession {
    let mut session = EditSession::new();
    session.push_overlay(OverlayInstance {
        asset_id: "asset".to_string(),
        x,
        y,
        scale,
        chroma: ChromaKey::None,
    });
    session
}

fn in_drag_bounds(x: f64, y: f64, scale: f64) {
    let max_x = 100.0 - scale * 100.0;
    assert!(
        (0.0..=max_x + 1e-9).contains(&x),
        "x={x} outside [0, {max_x}]"
    );
    assert!(
        (0.0..=Y_MAX_PERCENT + 1e-9).contains(&y),
        "y={y} outside [0, {Y_MAX_PERCENT}]"
    );
}

proptest! {
    #[test]
    fn drag_stays_in_bounds_for_any_move_sequence(
        start_x in 0.0..75.0f64,
        start_y in 0.0..85.0f64,
        scale in 0.1..0.25f64,
        moves in prop::collection::vec((-5000.0..5000.0f64, -5000.0..5000.0f64), 0..40),
        release in (-5000.0..5000.0f64, -5000.0..5000.0f64),
    ) {
        let mut session = session_with_instance(start_x, start_y, scale);
        let mut gesture = GestureController::new();
        gesture.set_container(ContainerSize::new(320.0, 560.0));

        prop_assert!(gesture.press(
            &session,
            GestureTarget::Committed(0),
            GestureKind::Move,
            PointerEvent::down(160.0, 280.0),
        ));

        for (mx, my) in moves {
            if let Some(live) = gesture.motion(PointerEvent::moved(mx, my)) {
                in_drag_bounds(live.x, live.y, live.scale);
            }
        }

        let committed = gesture
            .release(&mut session, PointerEvent::up(release.0, release.1))
            .expect("active capture must commit");
        in_drag_bounds(committed.x, committed.y, committed.scale);

        let stored = &session.settings().overlays[0];
        in_drag_bounds(stored.x, stored.y, stored.scale);
    }

    #[test]
    fn resize_scale_stays_in_bounds_for_any_excursion(
        start_scale in 0.1..0.6f64,
        moves in prop::collection::vec(-10_000.0..10_000.0f64, 0..40),
        release_x in -10_000.0..10_000.0f64,
    ) {
        let mut session = session_with_instance(10.0, 10.0, start_scale);
        let mut gesture = GestureController::new();
        gesture.set_container(ContainerSize::new(320.0, 560.0));

        prop_assert!(gesture.press(
            &session,
            GestureTarget::Committed(0),
            GestureKind::Resize,
            PointerEvent::down(160.0, 280.0),
        ));

        for mx in moves {
            if let Some(live) = gesture.motion(PointerEvent::moved(mx, 280.0)) {
                prop_assert!(live.scale >= SCALE_MIN - 1e-9);
                prop_assert!(live.scale <= SCALE_MAX + 1e-9);
            }
        }

        let committed = gesture
            .release(&mut session, PointerEvent::up(release_x, 280.0))
            .expect("active capture must commit");
        prop_assert!(committed.scale >= SCALE_MIN - 1e-9);
        prop_assert!(committed.scale <= SCALE_MAX + 1e-9);
        prop_assert!(committed.x <= 100.0 - committed.scale * 100.0 + 1e-9);
    }
}
