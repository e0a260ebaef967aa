//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod drag;
mod layout;
mod settle;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::DockModel;

#[cfg(debug_assertions)]
use crate::tracing::DragSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use drag::update_drag;
pub use layout::update_layout;
pub use settle::update_settle;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut DockModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut DockModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Gesture(m) => drag::update_drag(model, m),
        Msg::Settle(m) => settle::update_settle(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after drag state, logs the diff, and checks model
/// invariants. Pointer moves and layout reports are too frequent to get
/// their own span.
#[cfg(debug_assertions)]
fn update_traced(model: &mut DockModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::GestureMsg;

    let is_noisy = matches!(
        &msg,
        Msg::Gesture(GestureMsg::PressMove(_)) | Msg::Layout(_)
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = DragSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = DragSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "drag", %diff, "state changed");
    }

    model.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Gesture::Pick(2)`
/// - `Settle::Land { epoch: 3 }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Gesture(m) => format!("Gesture::{:?}", m),
        Msg::Settle(m) => format!("Settle::{:?}", m),
        Msg::Layout(crate::messages::LayoutMsg::RowMeasured(row)) => {
            format!("Layout::RowMeasured(gen {})", row.generation)
        }
        Msg::Layout(m) => format!("Layout::{:?}", m),
    }
}
