//! Settle timer handlers
//!
//! Runs the exit sequences after a release:
//! - drop: `Land` commits the move and returns to idle
//! - cancel: `Return` empties the source slot, `Restore` refills it and
//!   returns to idle

use crate::commands::Cmd;
use crate::messages::{Msg, SettleMsg};
use crate::model::{DockModel, DragStatus, SlotStatus};
use crate::reflow::RESTORE_PULSE_MS;

/// Handle settle timers
pub fn update_settle(model: &mut DockModel, msg: SettleMsg) -> Option<Cmd> {
    // Skip timers scheduled by an earlier drag
    if msg.epoch() != model.epoch {
        tracing::debug!(
            target: "drag",
            ?msg,
            current_epoch = model.epoch,
            "ignoring stale settle timer"
        );
        return None;
    }

    match msg {
        SettleMsg::Land { .. } => {
            if model.drag.status != DragStatus::Dropped {
                tracing::debug!(target: "drag", status = model.drag.status.as_str(), "land ignored");
                return None;
            }
            let (source, target) = (model.drag.source_index?, model.drag.target_index?);

            model.reflow.commit_move(source, target);
            model.layout.invalidate(model.reflow.generation());
            model.drag.clear();

            tracing::debug!(target: "drag", source, target_index = target, "landed");
            Some(Cmd::Redraw)
        }

        SettleMsg::Return { epoch } => {
            if model.drag.status != DragStatus::Cancelled {
                return None;
            }
            let source = model.drag.source_index?;
            model.reflow.set_status(source, SlotStatus::Empty);

            tracing::debug!(target: "drag", source, "returned to origin");
            Some(Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::after(RESTORE_PULSE_MS, Msg::Settle(SettleMsg::Restore { epoch })),
            ]))
        }

        SettleMsg::Restore { .. } => {
            if model.drag.status != DragStatus::Cancelled {
                return None;
            }
            let source = model.drag.source_index?;
            model.reflow.set_status(source, SlotStatus::Filled);
            model.drag.clear();

            tracing::debug!(target: "drag", source, "restored");
            Some(Cmd::Redraw)
        }
    }
}
