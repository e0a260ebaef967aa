//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::messages::Msg;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the dock
    Redraw,
    /// Deliver `msg` back to the update loop after `delay_ms`
    ///
    /// Fire-and-forget: once scheduled, the timer cannot be cancelled. Stale
    /// deliveries are filtered by the receiving handler.
    ScheduleAfter { delay_ms: u64, msg: Box<Msg> },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Schedule a message after a fixed delay
    pub fn after(delay_ms: u64, msg: Msg) -> Self {
        Cmd::ScheduleAfter {
            delay_ms,
            msg: Box::new(msg),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Timers redraw when they fire, not when they are scheduled
            Cmd::ScheduleAfter { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Convert Option<Cmd> with None to Cmd::None
    pub fn from_option(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
