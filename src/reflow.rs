//! Reflow engine - the ordered item list and its animation policy
//!
//! `commit_move` is the only mutator of item order. Every commit rebuilds the
//! slot records with handles from a new generation so that measurements of
//! the previous layout can never be mistaken for the current one.

use crate::model::{Item, Slot, SlotStatus};

/// Near-zero relayout used while the pointer is moving
pub const SNAP_MS: u64 = 16;
/// Avatar catching up with the pointer
pub const AVATAR_FOLLOW_MS: u64 = 60;
/// Avatar flying to its landing slot and gaps settling after a drop
pub const DROP_EASE_MS: u64 = 250;
/// Avatar flying back to its origin after a cancelled drag
pub const CANCEL_RETURN_MS: u64 = 250;
/// How long the source slot stays empty before its icon comes back
pub const RESTORE_PULSE_MS: u64 = 80;
/// Source slot easing back to full width
pub const RESTORE_EASE_MS: u64 = 150;

/// Owns the authoritative item order and the slot records derived from it
#[derive(Debug, Clone)]
pub struct ReflowEngine {
    items: Vec<Item>,
    slots: Vec<Slot>,
    generation: u32,
}

impl ReflowEngine {
    pub fn new(items: Vec<Item>) -> Self {
        let generation = 1;
        let slots = Slot::build_row(items.len(), generation);
        Self {
            items,
            slots,
            generation,
        }
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current slot generation; gap handles from other generations are stale
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn status(&self, index: usize) -> Option<SlotStatus> {
        self.slots.get(index).map(|slot| slot.status)
    }

    /// Change a slot's visual status without touching order or handles
    pub fn set_status(&mut self, index: usize, status: SlotStatus) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.status = status;
        }
    }

    /// Move the item at `source` so it ends up at `target`
    ///
    /// Splice semantics: the item is removed first and `target` is measured
    /// against the shortened list. Out-of-range indices mean the drag state
    /// and the order have desynchronized; debug builds panic, release builds
    /// log, clamp the target, and ignore an invalid source.
    pub fn commit_move(&mut self, source: usize, target: usize) -> &[Item] {
        let len = self.items.len();
        debug_assert!(source < len, "commit_move source {} out of range (len {})", source, len);
        debug_assert!(
            target < len,
            "commit_move target {} out of range (len {})",
            target,
            len
        );

        if source >= len {
            tracing::error!(source, len, "commit_move with out-of-range source, ignoring");
            return &self.items;
        }
        let target = if target >= len {
            tracing::error!(target_index = target, len, "commit_move with out-of-range target, clamping");
            len - 1
        } else {
            target
        };

        let item = self.items.remove(source);
        self.items.insert(target, item);
        self.rebuild_slots();

        tracing::debug!(
            target: "reflow",
            source,
            target_index = target,
            generation = self.generation,
            "order committed"
        );
        &self.items
    }

    /// Reissue every slot record with fresh gap handles
    fn rebuild_slots(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.slots = Slot::build_row(self.items.len(), self.generation);
    }
}

// ============================================================================
// Animation Policy
// ============================================================================

/// How the renderer should move a visual toward its new value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Jump immediately
    Instant,
    /// Near-zero relayout, so gaps don't chase the pointer
    Snap { duration_ms: u64 },
    /// Eased interpolation
    Eased { duration_ms: u64 },
}

impl Motion {
    pub fn duration_ms(&self) -> u64 {
        match self {
            Motion::Instant => 0,
            Motion::Snap { duration_ms } | Motion::Eased { duration_ms } => *duration_ms,
        }
    }
}

/// Visual phase of the dock, derived from drag status and slot status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Picked,
    Dropped,
    /// Cancelled; the avatar is flying back while the source stays hidden
    Returning,
    /// Cancelled; the avatar is gone and the source slot is refilling
    Restoring,
}

/// Motions the renderer applies in one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseMotion {
    pub slots: Motion,
    pub gaps: Motion,
    /// `None` when no avatar is shown
    pub avatar: Option<Motion>,
}

impl Phase {
    pub fn motion(&self) -> PhaseMotion {
        match self {
            Phase::Idle => PhaseMotion {
                slots: Motion::Instant,
                gaps: Motion::Instant,
                avatar: None,
            },
            Phase::Picked => PhaseMotion {
                slots: Motion::Instant,
                gaps: Motion::Snap {
                    duration_ms: SNAP_MS,
                },
                avatar: Some(Motion::Eased {
                    duration_ms: AVATAR_FOLLOW_MS,
                }),
            },
            Phase::Dropped => PhaseMotion {
                slots: Motion::Eased {
                    duration_ms: DROP_EASE_MS,
                },
                gaps: Motion::Eased {
                    duration_ms: DROP_EASE_MS,
                },
                avatar: Some(Motion::Eased {
                    duration_ms: DROP_EASE_MS,
                }),
            },
            Phase::Returning => PhaseMotion {
                slots: Motion::Eased {
                    duration_ms: CANCEL_RETURN_MS,
                },
                gaps: Motion::Eased {
                    duration_ms: CANCEL_RETURN_MS,
                },
                avatar: Some(Motion::Eased {
                    duration_ms: CANCEL_RETURN_MS,
                }),
            },
            Phase::Restoring => PhaseMotion {
                slots: Motion::Eased {
                    duration_ms: RESTORE_EASE_MS,
                },
                gaps: Motion::Eased {
                    duration_ms: RESTORE_EASE_MS,
                },
                avatar: None,
            },
        }
    }
}
