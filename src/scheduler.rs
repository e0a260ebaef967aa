//! Time-based resumption for the drag state machine
//!
//! Settle delays are expressed as "deliver this message later", never as a
//! blocking wait. The runtime uses [`ChannelScheduler`]; tests drive a
//! [`VirtualClock`] forward by hand.

use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::messages::Msg;

/// Injected timer primitive (`after(ms, callback)`)
pub trait Scheduler {
    fn schedule_after(&mut self, delay_ms: u64, msg: Msg);
}

/// Sends the message back through a channel from a helper thread
///
/// The UI loop drains the receiving end every iteration, so delivery always
/// happens on the UI thread.
#[derive(Debug, Clone)]
pub struct ChannelScheduler {
    tx: Sender<Msg>,
}

impl ChannelScheduler {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }
}

impl Scheduler for ChannelScheduler {
    fn schedule_after(&mut self, delay_ms: u64, msg: Msg) {
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(delay_ms));
            // Receiver is gone only when the app is shutting down
            let _ = tx.send(msg);
        });
    }
}

#[derive(Debug, Clone)]
struct PendingTimer {
    due_ms: u64,
    seq: u64,
    msg: Msg,
}

/// Deterministic virtual-time scheduler
///
/// Nothing fires until the clock is advanced. Timers due at the same instant
/// fire in scheduling order.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingTimer>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return the earliest timer due at or before `until_ms`
    ///
    /// Moves the clock to that timer's due time, so anything it schedules is
    /// measured from the moment it fired.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Msg> {
        let (index, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))?;

        let timer = self.pending.remove(index);
        self.now_ms = self.now_ms.max(timer.due_ms);
        Some(timer.msg)
    }

    /// Move the clock forward without firing anything
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Advance by `ms` and collect every timer that fell due, in order
    ///
    /// Timers scheduled by the caller while handling the returned messages
    /// are not included; use [`crate::controller::DockController::advance`]
    /// to run a full settle sequence.
    pub fn advance(&mut self, ms: u64) -> Vec<Msg> {
        let until = self.now_ms + ms;
        let mut due = Vec::new();
        while let Some(msg) = self.pop_due(until) {
            due.push(msg);
        }
        self.set_now(until);
        due
    }
}

impl Scheduler for VirtualClock {
    fn schedule_after(&mut self, delay_ms: u64, msg: Msg) {
        self.pending.push(PendingTimer {
            due_ms: self.now_ms + delay_ms,
            seq: self.next_seq,
            msg,
        });
        self.next_seq += 1;
    }
}
