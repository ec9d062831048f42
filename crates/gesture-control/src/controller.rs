//! Gesture capture state machine.
//!
//! Converts a pointer event stream into clamped placement updates for
//! exactly one captured overlay at a time. Every move recomputes from the
//! anchor captured at press time — never from the previous frame — so
//! dropped or out-of-order move events cannot accumulate drift; only the
//! final event before release determines the committed value.

use remix_session_model::overlay::{SCALE_MAX, SCALE_MIN, Y_MAX_PERCENT};
use remix_session_model::{EditSession, SettingsPatch};

use crate::pointer::{ContainerSize, PointerEvent};

/// Which overlay a gesture manipulates: the staged (pre-commit) selection
/// or an index into the committed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureTarget {
    Staging,
    Committed(usize),
}

/// The interaction kind decided by what was hit at press time: the overlay
/// body starts a move, the resize handle starts a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Move,
    Resize,
}

/// A position/scale snapshot, in the session's percent coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Left edge, percent of canvas width.
    pub x: f64,
    /// Top edge, percent of canvas height.
    pub y: f64,
    /// Width as a fraction of canvas width.
    pub scale: f64,
}

#[derive(Debug, Clone, Copy)]
struct DragAnchor {
    pointer_x: f64,
    pointer_y: f64,
    start: Placement,
}

#[derive(Debug, Clone, Copy)]
struct ResizeAnchor {
    pointer_x: f64,
    start: Placement,
}

#[derive(Debug, Clone, Copy)]
enum Capture {
    Idle,
    Dragging {
        target: GestureTarget,
        anchor: DragAnchor,
        live: Placement,
    },
    Resizing {
        target: GestureTarget,
        anchor: ResizeAnchor,
        live: Placement,
    },
}

/// Tracks one pointer-down → pointer-up interaction against the session.
///
/// Only one capture may be active at a time; a press while captured is
/// ignored until release, so multi-touch ambiguity cannot corrupt the
/// anchor. Clamping happens on every move, not only at commit, so the live
/// value is always valid and visual feedback never shows an out-of-range
/// state.
#[derive(Debug)]
pub struct GestureController {
    capture: Capture,
    container: Option<ContainerSize>,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureController {
    pub fn new() -> Self {
        Self {
            capture: Capture::Idle,
            container: None,
        }
    }

    /// Record the latest container measurement. `None` means the layout
    /// cannot be measured; subsequent moves are no-ops until it can.
    pub fn set_container(&mut self, container: Option<ContainerSize>) {
        self.container = container;
    }

    pub fn is_captured(&self) -> bool {
        !matches!(self.capture, Capture::Idle)
    }

    /// The live placement for `target` while it is captured, for gesture
    /// feedback in the preview. `None` when `target` is not captured.
    pub fn live_placement(&self, target: GestureTarget) -> Option<Placement> {
        match self.capture {
            Capture::Dragging {
                target: captured,
                live,
                ..
            }
            | Capture::Resizing {
                target: captured,
                live,
                ..
            } if captured == target => Some(live),
            _ => None,
        }
    }

    /// Begin a capture from a press on an overlay body or resize handle.
    ///
    /// Returns `false` (and changes nothing) when a capture is already
    /// active or when `target` does not resolve to a placement in the
    /// session.
    pub fn press(
        &mut self,
        session: &EditSession,
        target: GestureTarget,
        kind: GestureKind,
        event: PointerEvent,
    ) -> bool {
        if self.is_captured() {
            tracing::debug!(?target, "press ignored: capture already active");
            return false;
        }
        let Some(start) = target_placement(session, target) else {
            tracing::debug!(?target, "press ignored: no such overlay");
            return false;
        };

        self.capture = match kind {
            GestureKind::Move => Capture::Dragging {
                target,
                anchor: DragAnchor {
                    pointer_x: event.x,
                    pointer_y: event.y,
                    start,
                },
                live: start,
            },
            GestureKind::Resize => Capture::Resizing {
                target,
                anchor: ResizeAnchor {
                    pointer_x: event.x,
                    start,
                },
                live: start,
            },
        };
        true
    }

    /// Process a pointer move. Returns the recomputed live placement, or
    /// `None` when idle or the container is unmeasured (the last valid
    /// value is retained).
    pub fn motion(&mut self, event: PointerEvent) -> Option<Placement> {
        let container = self.container?;
        match &mut self.capture {
            Capture::Idle => None,
            Capture::Dragging { anchor, live, .. } => {
                *live = drag_placement(*anchor, event, container);
                Some(*live)
            }
            Capture::Resizing { anchor, live, .. } => {
                *live = resize_placement(*anchor, event, container);
                Some(*live)
            }
        }
    }

    /// End the capture and commit the last computed placement into the
    /// store. A release while idle is a no-op, which makes commit
    /// idempotent against duplicate terminal events.
    pub fn release(&mut self, session: &mut EditSession, event: PointerEvent) -> Option<Placement> {
        // Fold the release position in as a final move so a release that
        // arrives without a preceding move still lands where the pointer is.
        self.motion(event);

        let (target, committed) = match self.capture {
            Capture::Idle => return None,
            Capture::Dragging { target, live, .. } | Capture::Resizing { target, live, .. } => {
                (target, live)
            }
        };
        self.capture = Capture::Idle;

        commit_placement(session, target, committed);
        tracing::debug!(?target, x = committed.x, y = committed.y, scale = committed.scale, "gesture committed");
        Some(committed)
    }
}

fn target_placement(session: &EditSession, target: GestureTarget) -> Option<Placement> {
    let settings = session.settings();
    match target {
        GestureTarget::Staging => settings.staged_instance().map(|staged| Placement {
            x: staged.x,
            y: staged.y,
            scale: staged.scale,
        }),
        GestureTarget::Committed(index) => settings.overlays.get(index).map(|o| Placement {
            x: o.x,
            y: o.y,
            scale: o.scale,
        }),
    }
}

fn drag_placement(anchor: DragAnchor, event: PointerEvent, container: ContainerSize) -> Placement {
    let dx = (event.x - anchor.pointer_x) / container.width * 100.0;
    let dy = (event.y - anchor.pointer_y) / container.height * 100.0;

    let max_x = 100.0 - anchor.start.scale * 100.0;
    Placement {
        x: (anchor.start.x + dx).clamp(0.0, max_x),
        y: (anchor.start.y + dy).clamp(0.0, Y_MAX_PERCENT),
        scale: anchor.start.scale,
    }
}

fn resize_placement(
    anchor: ResizeAnchor,
    event: PointerEvent,
    container: ContainerSize,
) -> Placement {
    // Resize reacts to horizontal delta only.
    let dx = (event.x - anchor.pointer_x) / container.width * 100.0;
    let scale =
        (anchor.start.scale * 100.0 + dx).clamp(SCALE_MIN * 100.0, SCALE_MAX * 100.0) / 100.0;

    // Growing the overlay can shrink the valid x range; pull x back in so
    // the placement invariant holds at every intermediate scale.
    Placement {
        x: anchor.start.x.min(100.0 - scale * 100.0),
        y: anchor.start.y,
        scale,
    }
}

fn commit_placement(session: &mut EditSession, target: GestureTarget, placement: Placement) {
    match target {
        GestureTarget::Staging => {
            session.apply(SettingsPatch {
                overlay_x: Some(placement.x),
                overlay_y: Some(placement.y),
                overlay_scale: Some(placement.scale),
                ..Default::default()
            });
        }
        GestureTarget::Committed(index) => {
            let mut overlays = session.settings().overlays.clone();
            let Some(instance) = overlays.get_mut(index) else {
                // The sequence shrank mid-gesture; nothing to commit.
                return;
            };
            instance.x = placement.x;
            instance.y = placement.y;
            instance.scale = placement.scale;
            // The sequence field is always replaced whole, never merged
            // element-wise.
            session.apply(SettingsPatch {
                overlays: Some(overlays),
                ..Default::default()
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remix_session_model::{ChromaKey, OverlayInstance};

    fn session_with_staged() -> EditSession {
        let mut session = EditSession::new();
        session.stage_overlay("dino");
        session
    }

    fn session_with_committed(x: f64, y: f64, scale: f64) -> EditSession {
        let mut session = EditSession::new();
        session.push_overlay(OverlayInstance {
            asset_id: "dino".to_string(),
            x,
            y,
            scale,
            chroma: ChromaKey::Green,
        });
        session
    }

    fn controller(width: f64, height: f64) -> GestureController {
        let mut controller = GestureController::new();
        controller.set_container(ContainerSize::new(width, height));
        controller
    }

    #[test]
    fn test_drag_clamps_to_scale_dependent_max() {
        // Duration-60s video; instance at (70, 70, 0.25); drag +200px in a
        // 300px-wide container: x clamps to 75 (= 100 - 25), y stays 70.
        let mut session = session_with_committed(70.0, 70.0, 0.25);
        let mut gesture = controller(300.0, 500.0);

        assert!(gesture.press(
            &session,
            GestureTarget::Committed(0),
            GestureKind::Move,
            PointerEvent::down(100.0, 200.0),
        ));
        gesture.motion(PointerEvent::moved(300.0, 200.0));
        let committed = gesture
            .release(&mut session, PointerEvent::up(300.0, 200.0))
            .unwrap();

        assert!((committed.x - 75.0).abs() < 1e-9);
        assert!((committed.y - 70.0).abs() < 1e-9);
        let stored = &session.settings().overlays[0];
        assert!((stored.x - 75.0).abs() < 1e-9);
        assert!((stored.y - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_drag_recomputes_from_anchor_not_previous_frame() {
        let mut session = session_with_committed(40.0, 40.0, 0.25);
        let mut gesture = controller(100.0, 100.0);

        gesture.press(
            &session,
            GestureTarget::Committed(0),
            GestureKind::Move,
            PointerEvent::down(50.0, 50.0),
        );
        // Same move delivered three times must not triple the displacement.
        for _ in 0..3 {
            gesture.motion(PointerEvent::moved(60.0, 50.0));
        }
        let committed = gesture
            .release(&mut session, PointerEvent::up(60.0, 50.0))
            .unwrap();
        assert!((committed.x - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_reacts_to_horizontal_delta_only() {
        let mut session = session_with_staged();
        let mut gesture = controller(200.0, 200.0);

        gesture.press(
            &session,
            GestureTarget::Staging,
            GestureKind::Resize,
            PointerEvent::down(100.0, 100.0),
        );
        // +40px horizontal in a 200px container = +20 scale percent; the
        // large vertical excursion is ignored.
        let live = gesture.motion(PointerEvent::moved(140.0, 900.0)).unwrap();
        assert!((live.scale - 0.45).abs() < 1e-9);
        assert!((live.y - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_clamps_scale_bounds() {
        let mut session = session_with_staged();
        let mut gesture = controller(200.0, 200.0);

        gesture.press(
            &session,
            GestureTarget::Staging,
            GestureKind::Resize,
            PointerEvent::down(100.0, 100.0),
        );
        let live = gesture.motion(PointerEvent::moved(5000.0, 100.0)).unwrap();
        assert!((live.scale - 0.6).abs() < 1e-9);
        let live = gesture.motion(PointerEvent::moved(-5000.0, 100.0)).unwrap();
        assert!((live.scale - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_growing_scale_pulls_x_back_on_canvas() {
        let mut session = session_with_committed(75.0, 70.0, 0.25);
        let mut gesture = controller(100.0, 100.0);

        gesture.press(
            &session,
            GestureTarget::Committed(0),
            GestureKind::Resize,
            PointerEvent::down(0.0, 0.0),
        );
        let live = gesture.motion(PointerEvent::moved(35.0, 0.0)).unwrap();
        assert!((live.scale - 0.6).abs() < 1e-9);
        assert!(live.x <= 100.0 - live.scale * 100.0 + 1e-9);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut session = session_with_committed(40.0, 40.0, 0.25);
        let mut gesture = controller(100.0, 100.0);

        gesture.press(
            &session,
            GestureTarget::Committed(0),
            GestureKind::Move,
            PointerEvent::down(50.0, 50.0),
        );
        gesture.motion(PointerEvent::moved(55.0, 50.0));
        assert!(gesture
            .release(&mut session, PointerEvent::up(55.0, 50.0))
            .is_some());
        let after_first = session.settings().overlays.clone();

        // Delivering the terminal event again produces no further change.
        assert!(gesture
            .release(&mut session, PointerEvent::up(200.0, 200.0))
            .is_none());
        assert_eq!(session.settings().overlays, after_first);
    }

    #[test]
    fn test_second_press_is_ignored_while_captured() {
        let mut session = session_with_committed(40.0, 40.0, 0.25);
        session.push_overlay(OverlayInstance {
            asset_id: "other".to_string(),
            x: 10.0,
            y: 10.0,
            scale: 0.2,
            chroma: ChromaKey::None,
        });
        let mut gesture = controller(100.0, 100.0);

        assert!(gesture.press(
            &session,
            GestureTarget::Committed(0),
            GestureKind::Move,
            PointerEvent::down(50.0, 50.0),
        ));
        // A second touch lands on the other overlay; it must not steal or
        // corrupt the anchor.
        assert!(!gesture.press(
            &session,
            GestureTarget::Committed(1),
            GestureKind::Move,
            PointerEvent::down(10.0, 10.0),
        ));
        let live = gesture.motion(PointerEvent::moved(60.0, 50.0)).unwrap();
        assert!((live.x - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_unmeasured_container_makes_moves_no_ops() {
        let mut session = session_with_committed(40.0, 40.0, 0.25);
        let mut gesture = GestureController::new();
        gesture.set_container(None);

        gesture.press(
            &session,
            GestureTarget::Committed(0),
            GestureKind::Move,
            PointerEvent::down(50.0, 50.0),
        );
        assert!(gesture.motion(PointerEvent::moved(500.0, 500.0)).is_none());

        // The last valid value (the anchor snapshot) is what gets committed.
        let committed = gesture
            .release(&mut session, PointerEvent::up(500.0, 500.0))
            .unwrap();
        assert!((committed.x - 40.0).abs() < 1e-9);
        assert!((committed.y - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_press_on_missing_target_is_ignored() {
        let session = EditSession::new();
        let mut gesture = controller(100.0, 100.0);
        assert!(!gesture.press(
            &session,
            GestureTarget::Staging,
            GestureKind::Move,
            PointerEvent::down(0.0, 0.0),
        ));
        assert!(!gesture.press(
            &session,
            GestureTarget::Committed(3),
            GestureKind::Move,
            PointerEvent::down(0.0, 0.0),
        ));
    }

    #[test]
    fn test_staging_commit_lands_in_legacy_fields() {
        let mut session = session_with_staged();
        let mut gesture = controller(100.0, 100.0);

        gesture.press(
            &session,
            GestureTarget::Staging,
            GestureKind::Move,
            PointerEvent::down(0.0, 0.0),
        );
        gesture.motion(PointerEvent::moved(5.0, -10.0));
        gesture.release(&mut session, PointerEvent::up(5.0, -10.0));

        assert!((session.settings().overlay_x - 75.0).abs() < 1e-9);
        assert!((session.settings().overlay_y - 60.0).abs() < 1e-9);
        assert!(session.settings().overlays.is_empty());
    }

    #[test]
    fn test_live_placement_only_for_captured_target() {
        let mut session = session_with_committed(40.0, 40.0, 0.25);
        let mut gesture = controller(100.0, 100.0);

        gesture.press(
            &session,
            GestureTarget::Committed(0),
            GestureKind::Move,
            PointerEvent::down(50.0, 50.0),
        );
        gesture.motion(PointerEvent::moved(60.0, 50.0));

        assert!(gesture.live_placement(GestureTarget::Committed(0)).is_some());
        assert!(gesture.live_placement(GestureTarget::Staging).is_none());

        gesture.release(&mut session, PointerEvent::up(60.0, 50.0));
        assert!(gesture.live_placement(GestureTarget::Committed(0)).is_none());
    }
}
