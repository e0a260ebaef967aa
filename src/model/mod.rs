//! Dock model - the complete state of the dock
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod drag;
pub mod slot;

pub use drag::{DragState, DragStatus};
pub use slot::{GapId, Item, Slot, SlotStatus};

use crate::config::DockConfig;
use crate::geometry::{DockMetrics, Viewport};
use crate::probe::MeasuredLayout;
use crate::reflow::{Phase, ReflowEngine};

/// The complete dock model
#[derive(Debug, Clone)]
pub struct DockModel {
    /// Item order and slot records
    pub reflow: ReflowEngine,
    /// The single drag gesture
    pub drag: DragState,
    /// Last layout the renderer reported
    pub layout: MeasuredLayout,
    /// Fixed dock dimensions
    pub metrics: DockMetrics,
    /// Size of the area the dock is centered in
    pub viewport: Viewport,
    /// Incremented on every accepted pick; timers carry it to detect staleness
    pub epoch: u64,
}

impl DockModel {
    pub fn new(items: Vec<Item>, metrics: DockMetrics, viewport: Viewport) -> Self {
        let reflow = ReflowEngine::new(items);
        let layout = MeasuredLayout::new(reflow.generation());
        Self {
            reflow,
            drag: DragState::default(),
            layout,
            metrics,
            viewport,
            epoch: 0,
        }
    }

    pub fn from_config(config: &DockConfig) -> Self {
        let items = config.items.iter().map(|id| Item::new(id.as_str())).collect();
        Self::new(
            items,
            config.metrics,
            Viewport::new(config.window_width as f32, config.window_height as f32),
        )
    }

    pub fn items(&self) -> &[Item] {
        self.reflow.items()
    }

    /// Visual phase, derived from the drag status and the source slot
    pub fn phase(&self) -> Phase {
        match self.drag.status {
            DragStatus::None => Phase::Idle,
            DragStatus::Picked => Phase::Picked,
            DragStatus::Dropped => Phase::Dropped,
            DragStatus::Cancelled => {
                let source_status = self.drag.source_index.and_then(|i| self.reflow.status(i));
                if source_status == Some(SlotStatus::Hidden) {
                    Phase::Returning
                } else {
                    Phase::Restoring
                }
            }
        }
    }

    /// Check that drag state, slot records and measurements agree
    ///
    /// Called after every update in debug builds.
    pub fn assert_invariants(&self, context: &str) {
        let len = self.reflow.len();
        self.drag.assert_invariants(len, context);

        assert_eq!(
            self.reflow.slots().len(),
            len,
            "[{}] slot count does not match item count",
            context
        );
        assert!(
            self.layout.generation() == self.reflow.generation(),
            "[{}] measured layout generation {} lags slot generation {}",
            context,
            self.layout.generation(),
            self.reflow.generation()
        );

        let vacated = self
            .reflow
            .slots()
            .iter()
            .filter(|slot| slot.status != SlotStatus::Filled)
            .count();
        if self.drag.is_idle() {
            assert_eq!(vacated, 0, "[{}] idle dock has vacated slots", context);
        } else {
            assert!(vacated <= 1, "[{}] more than one vacated slot", context);
        }
    }
}
