//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dock_reorder::controller::DockController;
use dock_reorder::geometry::{DockMetrics, Point, Viewport};
use dock_reorder::model::{DockModel, Item};
use dock_reorder::scheduler::VirtualClock;

/// Create a controller on a virtual clock with the row already measured
pub fn test_dock(ids: &[&str]) -> DockController<VirtualClock> {
    let model = DockModel::new(
        ids.iter().map(|id| Item::new(*id)).collect(),
        DockMetrics::default(),
        Viewport::new(800.0, 600.0),
    );
    let mut dock = DockController::new(model, VirtualClock::new());
    dock.relayout();
    dock
}

/// Current order as plain strings
pub fn order<S: dock_reorder::scheduler::Scheduler>(dock: &DockController<S>) -> Vec<String> {
    dock.items().iter().map(|i| i.as_str().to_string()).collect()
}

/// Center of the gap at display index `gap` after re-measuring the row
pub fn gap_center(dock: &mut DockController<VirtualClock>, gap: usize) -> Point {
    dock.relayout().gaps[gap].1.center()
}

/// Center of the slot at display index `slot` after re-measuring the row
pub fn slot_center(dock: &mut DockController<VirtualClock>, slot: usize) -> Point {
    dock.relayout().slots[slot].center()
}

/// A point nowhere near the dock
pub fn off_dock() -> Point {
    Point::new(400.0, 40.0)
}

/// Pick `source`, hover the gap at display index `gap`, and release
pub fn drag_to_gap(dock: &mut DockController<VirtualClock>, source: usize, gap: usize) {
    dock.pick(source);
    let point = gap_center(dock, gap);
    dock.move_to(point);
    dock.release();
}
