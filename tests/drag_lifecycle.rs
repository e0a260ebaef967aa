//! End-to-end drag lifecycle tests driven through the controller

mod common;

use common::{drag_to_gap, gap_center, off_dock, order, slot_center, test_dock};
use dock_reorder::messages::{Msg, SettleMsg};
use dock_reorder::model::{DragStatus, SlotStatus};
use dock_reorder::reflow::{CANCEL_RETURN_MS, DROP_EASE_MS, RESTORE_PULSE_MS};

// ============================================================================
// Drop
// ============================================================================

#[test]
fn test_drag_first_item_past_third() {
    let mut dock = test_dock(&["A", "B", "C", "D", "E"]);

    dock.pick(0);
    let point = gap_center(&mut dock, 3); // right gap of slot 2
    dock.move_to(point);
    assert_eq!(dock.model().drag.target_index, Some(2));

    dock.release();
    assert_eq!(dock.status(), DragStatus::Dropped);
    // Nothing moves until the drop animation has finished
    assert_eq!(order(&dock), vec!["A", "B", "C", "D", "E"]);

    dock.advance(DROP_EASE_MS);
    assert_eq!(order(&dock), vec!["B", "C", "A", "D", "E"]);
    assert_eq!(dock.status(), DragStatus::None);
}

#[test]
fn test_drag_last_item_to_front() {
    let mut dock = test_dock(&["A", "B", "C"]);
    drag_to_gap(&mut dock, 2, 0);
    assert_eq!(dock.model().drag.target_index, Some(0));

    dock.advance(DROP_EASE_MS);
    assert_eq!(order(&dock), vec!["C", "A", "B"]);
}

#[test]
fn test_drop_back_in_place_keeps_order() {
    let mut dock = test_dock(&["A", "B", "C"]);
    let generation = dock.model().reflow.generation();

    drag_to_gap(&mut dock, 1, 1); // right gap of slot 0, next to the source
    assert_eq!(dock.status(), DragStatus::Dropped);

    dock.advance(DROP_EASE_MS);
    assert_eq!(order(&dock), vec!["A", "B", "C"]);
    assert_eq!(dock.model().reflow.generation(), generation + 1);
}

#[test]
fn test_press_picks_slot_under_pointer() {
    let mut dock = test_dock(&["A", "B", "C"]);
    let point = slot_center(&mut dock, 1);

    assert!(dock.pick_at(point));
    assert_eq!(dock.status(), DragStatus::Picked);
    assert_eq!(dock.model().drag.source_index, Some(1));
    assert_eq!(dock.model().reflow.status(1), Some(SlotStatus::Hidden));
}

#[test]
fn test_all_slots_filled_after_drop() {
    let mut dock = test_dock(&["A", "B", "C", "D"]);
    drag_to_gap(&mut dock, 3, 2);
    dock.advance(DROP_EASE_MS);

    let slots = dock.model().reflow.slots();
    assert!(slots.iter().all(|s| s.status == SlotStatus::Filled));
    assert!(dock.view().avatar.is_none());
}

// ============================================================================
// Cancel
// ============================================================================

#[test]
fn test_release_off_dock_cancels_and_restores() {
    let mut dock = test_dock(&["A", "B", "C"]);

    dock.pick(1);
    dock.move_to(off_dock());
    assert_eq!(dock.model().drag.target_index, None);

    dock.release();
    assert_eq!(dock.status(), DragStatus::Cancelled);
    assert_eq!(dock.model().reflow.status(1), Some(SlotStatus::Hidden));

    dock.advance(CANCEL_RETURN_MS);
    assert_eq!(dock.status(), DragStatus::Cancelled);
    assert_eq!(dock.model().reflow.status(1), Some(SlotStatus::Empty));

    dock.advance(RESTORE_PULSE_MS);
    assert_eq!(dock.status(), DragStatus::None);
    assert_eq!(dock.model().reflow.status(1), Some(SlotStatus::Filled));
    assert_eq!(order(&dock), vec!["A", "B", "C"]);
}

#[test]
fn test_cancel_does_not_bump_generation() {
    let mut dock = test_dock(&["A", "B"]);
    let generation = dock.model().reflow.generation();

    dock.pick(0);
    dock.release();
    dock.advance(CANCEL_RETURN_MS + RESTORE_PULSE_MS);

    assert_eq!(dock.model().reflow.generation(), generation);
}

#[test]
fn test_target_clears_when_pointer_leaves() {
    let mut dock = test_dock(&["A", "B", "C"]);
    dock.pick(0);
    let point = gap_center(&mut dock, 3);
    dock.move_to(point);
    assert_eq!(dock.model().drag.target_index, Some(2));

    dock.move_to(off_dock());
    assert_eq!(dock.model().drag.target_index, None);
    dock.release();
    assert_eq!(dock.status(), DragStatus::Cancelled);
}

// ============================================================================
// Rejected and stale input
// ============================================================================

#[test]
fn test_pick_rejected_until_idle() {
    let mut dock = test_dock(&["A", "B", "C"]);
    drag_to_gap(&mut dock, 0, 3);
    assert_eq!(dock.status(), DragStatus::Dropped);

    assert!(!dock.pick(1));
    assert_eq!(dock.model().drag.source_index, Some(0));

    dock.advance(DROP_EASE_MS);
    assert!(dock.pick(1));
}

#[test]
fn test_pick_rejected_while_cancelling() {
    let mut dock = test_dock(&["A", "B", "C"]);
    dock.pick(2);
    dock.release();

    dock.advance(CANCEL_RETURN_MS);
    assert!(!dock.pick(0));
    assert_eq!(dock.model().drag.source_index, Some(2));
}

#[test]
fn test_stale_timer_from_previous_drag_is_ignored() {
    let mut dock = test_dock(&["A", "B", "C"]);
    dock.pick(0);
    dock.release();
    dock.advance(CANCEL_RETURN_MS + RESTORE_PULSE_MS);

    dock.pick(1);
    let stale = Msg::Settle(SettleMsg::Return { epoch: 1 });
    assert!(!dock.handle(stale));
    assert_eq!(dock.status(), DragStatus::Picked);
    assert_eq!(dock.model().reflow.status(1), Some(SlotStatus::Hidden));
}

#[test]
fn test_release_when_idle_is_noop() {
    let mut dock = test_dock(&["A", "B"]);
    assert!(!dock.release());
    assert_eq!(dock.scheduler().pending_count(), 0);
}

#[test]
fn test_hover_waits_for_fresh_measurement_after_commit() {
    let mut dock = test_dock(&["A", "B", "C"]);
    let stale_point = gap_center(&mut dock, 0);
    drag_to_gap(&mut dock, 2, 0);
    dock.advance(DROP_EASE_MS);

    // New handles were issued by the commit; nothing has measured them yet
    dock.pick(1);
    dock.move_to(stale_point);
    assert_eq!(dock.model().drag.target_index, None);

    let point = gap_center(&mut dock, 0);
    dock.move_to(point);
    assert_eq!(dock.model().drag.target_index, Some(0));
}
