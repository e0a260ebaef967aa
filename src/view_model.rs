//! Dock view model - the read side consumed by the renderer
//!
//! A pure derivation from [`DockModel`]: no state of its own, recomputed for
//! every render pass.

use crate::geometry::{dragged_rect, steady_slot_rect, Rect};
use crate::hover::gap_for_target;
use crate::model::{DockModel, DragStatus, GapId, Item, SlotStatus};
use crate::reflow::{Phase, PhaseMotion};

/// One slot as it should be displayed
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView {
    pub status: SlotStatus,
    /// `0.0` when hidden, the full slot width otherwise
    pub width: f32,
    /// Icon to draw, `None` while the slot is vacated
    pub icon: Option<Item>,
}

/// One gap as it should be displayed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapView {
    pub id: GapId,
    pub width: f32,
    /// True for the gap under the current drop target
    pub wide: bool,
}

/// The floating copy of the dragged item
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    pub rect: Rect,
    pub icon: Item,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DockView {
    /// Generation of the gap handles below
    pub generation: u32,
    pub phase: Phase,
    pub motion: PhaseMotion,
    pub slots: Vec<SlotView>,
    /// `slots.len() + 1` gaps in display order (none for an empty dock)
    pub gaps: Vec<GapView>,
    pub avatar: Option<Avatar>,
}

impl DockView {
    pub fn derive(model: &DockModel) -> Self {
        let metrics = &model.metrics;
        let phase = model.phase();
        let items = model.reflow.items();

        let slots = model
            .reflow
            .slots()
            .iter()
            .map(|slot| SlotView {
                status: slot.status,
                width: match slot.status {
                    SlotStatus::Hidden => 0.0,
                    SlotStatus::Filled | SlotStatus::Empty => metrics.slot_width,
                },
                icon: match slot.status {
                    SlotStatus::Filled => items.get(slot.source_index).cloned(),
                    SlotStatus::Empty | SlotStatus::Hidden => None,
                },
            })
            .collect();

        let wide_gap = wide_gap_index(model);
        let gaps = model
            .reflow
            .slots()
            .iter()
            .flat_map(|slot| slot.gaps())
            .map(|id| {
                let wide = wide_gap == Some(id.index());
                GapView {
                    id,
                    width: if wide {
                        metrics.wide_gap()
                    } else {
                        metrics.narrow_gap()
                    },
                    wide,
                }
            })
            .collect();

        Self {
            generation: model.reflow.generation(),
            phase,
            motion: phase.motion(),
            slots,
            gaps,
            avatar: avatar(model, phase),
        }
    }

    /// Display index of the wide gap, if any
    pub fn wide_gap(&self) -> Option<usize> {
        self.gaps.iter().position(|g| g.wide)
    }
}

/// The gap drawn wide while a target is held (picked) or being landed on
fn wide_gap_index(model: &DockModel) -> Option<usize> {
    match model.drag.status {
        DragStatus::Picked | DragStatus::Dropped => {
            let source = model.drag.source_index?;
            let target = model.drag.target_index?;
            Some(gap_for_target(target, source))
        }
        DragStatus::None | DragStatus::Cancelled => None,
    }
}

fn avatar(model: &DockModel, phase: Phase) -> Option<Avatar> {
    let source = model.drag.source_index?;
    let icon = model.reflow.items().get(source)?.clone();
    let count = model.reflow.len();
    let metrics = &model.metrics;

    let rect = match phase {
        Phase::Idle | Phase::Restoring => return None,
        Phase::Picked => match model.drag.pointer {
            Some(pointer) => dragged_rect(pointer, metrics),
            None => steady_slot_rect(metrics, model.viewport, count, source),
        },
        Phase::Dropped => {
            let target = model.drag.target_index?;
            steady_slot_rect(metrics, model.viewport, count, target)
        }
        Phase::Returning => steady_slot_rect(metrics, model.viewport, count, source),
    };

    Some(Avatar { rect, icon })
}
