//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::geometry::{Point, RowLayout};

/// Pointer gesture callbacks from the input layer
#[derive(Debug, Clone, PartialEq)]
pub enum GestureMsg {
    /// Press began at a window position (picks the slot under it)
    PressStart(Point),
    /// Pointer moved while pressed
    PressMove(Point),
    /// Press released
    PressEnd,
    /// Pick a slot by index (callers that already hit-tested)
    Pick(usize),
}

/// Settle timers scheduled by the drag state machine
///
/// `epoch` names the drag that scheduled the timer; a timer from an earlier
/// drag is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleMsg {
    /// Drop animation finished: commit the move and go idle
    Land { epoch: u64 },
    /// Cancel animation finished: show the source slot empty
    Return { epoch: u64 },
    /// Empty pulse finished: refill the source slot and go idle
    Restore { epoch: u64 },
}

impl SettleMsg {
    pub fn epoch(&self) -> u64 {
        match self {
            SettleMsg::Land { epoch } | SettleMsg::Return { epoch } | SettleMsg::Restore { epoch } => {
                *epoch
            }
        }
    }
}

/// Reports from the layout collaborator
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Renderer measured the row for the given slot generation
    RowMeasured(RowLayout),
    /// Drawable area changed size
    Viewport { width: f32, height: f32 },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Gesture(GestureMsg),
    Settle(SettleMsg),
    Layout(LayoutMsg),
}
