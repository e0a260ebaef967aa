//! Drag update handlers
//!
//! Handles gesture messages: picking a slot, following the pointer, and
//! releasing into either a drop or a cancel.

use crate::commands::Cmd;
use crate::geometry::{dragged_rect, Point};
use crate::hover;
use crate::messages::{GestureMsg, Msg, SettleMsg};
use crate::model::{DockModel, DragStatus, SlotStatus};
use crate::reflow::{CANCEL_RETURN_MS, DROP_EASE_MS};

/// Update function for gesture messages
pub fn update_drag(model: &mut DockModel, msg: GestureMsg) -> Option<Cmd> {
    match msg {
        GestureMsg::Pick(index) => pick(model, index, None),

        GestureMsg::PressStart(point) => {
            if !model.drag.is_idle() {
                tracing::trace!(target: "drag", status = model.drag.status.as_str(), "press ignored: drag in progress");
                return None;
            }
            // Presses outside the measured slots are not drags
            let index = model.layout.slot_at(point)?;
            pick(model, index, Some(point))
        }

        GestureMsg::PressMove(point) => move_to(model, point),

        GestureMsg::PressEnd => release(model),
    }
}

/// `none --pick(index)--> picked`
fn pick(model: &mut DockModel, index: usize, pointer: Option<Point>) -> Option<Cmd> {
    if !model.drag.is_idle() {
        tracing::trace!(
            target: "drag",
            index,
            status = model.drag.status.as_str(),
            "pick rejected: drag in progress"
        );
        return None;
    }
    if index >= model.reflow.len() {
        tracing::debug!(target: "drag", index, len = model.reflow.len(), "pick rejected: no such slot");
        return None;
    }

    model.epoch += 1;
    model.drag.begin(index, pointer);
    model.reflow.set_status(index, SlotStatus::Hidden);

    tracing::debug!(target: "drag", index, epoch = model.epoch, "picked");
    Some(Cmd::Redraw)
}

/// `picked --move(point)--> picked`
///
/// Recomputes the target from the measured gaps. No target under the pointer
/// is a normal state, not an error.
fn move_to(model: &mut DockModel, point: Point) -> Option<Cmd> {
    if model.drag.status != DragStatus::Picked {
        return None;
    }
    let source = model.drag.source_index?;

    model.drag.pointer = Some(point);
    let dragged = dragged_rect(point, &model.metrics);
    let target = hover::resolve(dragged, source, model.reflow.slots(), &model.layout);

    if target != model.drag.target_index {
        tracing::debug!(
            target: "drag",
            from = ?model.drag.target_index,
            to = ?target,
            "target changed"
        );
    }
    model.drag.target_index = target;

    Some(Cmd::Redraw)
}

/// `picked --release--> dropped | cancelled`
fn release(model: &mut DockModel) -> Option<Cmd> {
    if model.drag.status != DragStatus::Picked {
        tracing::trace!(target: "drag", status = model.drag.status.as_str(), "release ignored");
        return None;
    }
    let epoch = model.epoch;

    match model.drag.target_index {
        Some(target_index) => {
            model.drag.status = DragStatus::Dropped;
            tracing::debug!(target: "drag", target_index, epoch, "dropped");
            Some(Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::after(DROP_EASE_MS, Msg::Settle(SettleMsg::Land { epoch })),
            ]))
        }
        None => {
            model.drag.status = DragStatus::Cancelled;
            tracing::debug!(target: "drag", epoch, "cancelled");
            Some(Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::after(CANCEL_RETURN_MS, Msg::Settle(SettleMsg::Return { epoch })),
            ]))
        }
    }
}
