//! Drag status and transient per-gesture fields

use crate::geometry::Point;

/// Authoritative status of the single drag gesture
///
/// ```text
/// none ──pick──▶ picked ──release (target)──▶ dropped   ──settle──▶ none
///                       └─release (no target)─▶ cancelled ──settle──▶ none
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragStatus {
    #[default]
    None,
    Picked,
    Dropped,
    Cancelled,
}

impl DragStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DragStatus::None => "none",
            DragStatus::Picked => "picked",
            DragStatus::Dropped => "dropped",
            DragStatus::Cancelled => "cancelled",
        }
    }
}

/// Drag state, bound to one gesture
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    pub status: DragStatus,
    /// Index of the picked item in the current order
    pub source_index: Option<usize>,
    /// Insertion index, measured against the order after the source is removed
    pub target_index: Option<usize>,
    /// Last pointer position reported while picked
    pub pointer: Option<Point>,
}

impl DragState {
    /// True when no gesture is active or settling
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.status == DragStatus::None
    }

    /// Start a gesture on `index`
    pub fn begin(&mut self, index: usize, pointer: Option<Point>) {
        self.status = DragStatus::Picked;
        self.source_index = Some(index);
        self.target_index = None;
        self.pointer = pointer;
    }

    /// Return to idle, dropping every transient field
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Verify the status/field invariants against an order of `len` items
    ///
    /// Panics with `context` in the message when an invariant is violated.
    pub fn assert_invariants(&self, len: usize, context: &str) {
        match self.status {
            DragStatus::None => {
                assert!(
                    self.source_index.is_none()
                        && self.target_index.is_none()
                        && self.pointer.is_none(),
                    "[{}] idle drag state carries transient fields: {:?}",
                    context,
                    self
                );
            }
            DragStatus::Picked | DragStatus::Dropped | DragStatus::Cancelled => {
                let source = self.source_index.unwrap_or_else(|| {
                    panic!("[{}] {} drag without source index", context, self.status.as_str())
                });
                assert!(
                    source < len,
                    "[{}] source index {} out of range for {} items",
                    context,
                    source,
                    len
                );
                if let Some(target) = self.target_index {
                    assert!(
                        target < len,
                        "[{}] target index {} out of range for {} items",
                        context,
                        target,
                        len
                    );
                }
            }
        }

        if self.status == DragStatus::Dropped {
            assert!(
                self.target_index.is_some(),
                "[{}] dropped without a target index",
                context
            );
        }
        if self.status == DragStatus::Cancelled {
            assert!(
                self.target_index.is_none(),
                "[{}] cancelled drag still has a target index",
                context
            );
        }
    }
}
