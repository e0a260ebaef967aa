//! Layout update handlers
//!
//! Stores what the renderer measured and tracks viewport size changes.

use crate::commands::Cmd;
use crate::geometry::Viewport;
use crate::messages::LayoutMsg;
use crate::model::DockModel;

/// Handle layout reports from the renderer
pub fn update_layout(model: &mut DockModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::RowMeasured(row) => {
            let generation = row.generation;
            if !model.layout.replace(row) {
                // Measured against handles that have since been reissued
                tracing::trace!(
                    target: "layout",
                    measured = generation,
                    current = model.layout.generation(),
                    "dropping stale row measurement"
                );
            }
            // Measurements feed the next hover pass; nothing to repaint
            None
        }

        LayoutMsg::Viewport { width, height } => {
            model.viewport = Viewport::new(width, height);
            tracing::debug!(target: "layout", width, height, "viewport resized");
            Some(Cmd::Redraw)
        }
    }
}
