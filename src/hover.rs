//! Hover resolver - maps the dragged rectangle to an insertion index
//!
//! Gaps are probed left to right (the leftmost slot's left gap, then each
//! slot's right gap) and the first gap the dragged rectangle overlaps wins.
//! When hit zones overlap, the leftmost candidate is chosen.
//!
//! The returned index is expressed against the order *after* the source item
//! has been removed, which is why gaps to the right of the source map one
//! lower than their display position.

use crate::geometry::Rect;
use crate::model::Slot;
use crate::probe::GeometryProbe;

/// Which side of a slot a gap sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapSide {
    Left,
    Right,
}

/// Insertion index for a hit on `side` of the slot at `slot_index`
#[inline]
pub fn target_for_gap(side: GapSide, slot_index: usize, source_index: usize) -> usize {
    match side {
        GapSide::Left if source_index < slot_index => slot_index - 1,
        GapSide::Left => slot_index,
        GapSide::Right if source_index < slot_index => slot_index,
        GapSide::Right => slot_index + 1,
    }
}

/// Display index of the gap that drops at `target_index`
///
/// Inverse of [`target_for_gap`], used to pick the gap drawn wide.
#[inline]
pub fn gap_for_target(target_index: usize, source_index: usize) -> usize {
    if source_index < target_index {
        target_index + 1
    } else {
        target_index
    }
}

/// Resolve the current insertion index, or `None` when no gap is hit
///
/// Unmeasured gaps never hit. The result is clamped to the last valid
/// insertion index (`slots.len() - 1`), which only matters for the right gap
/// of the source slot when the source is the last item.
pub fn resolve<P>(dragged: Rect, source_index: usize, slots: &[Slot], probe: &P) -> Option<usize>
where
    P: GeometryProbe + ?Sized,
{
    let last = slots.len().checked_sub(1)?;

    for (i, slot) in slots.iter().enumerate() {
        let candidates = slot
            .left_gap
            .map(|gap| (GapSide::Left, gap))
            .into_iter()
            .chain(std::iter::once((GapSide::Right, slot.right_gap)));

        for (side, gap) in candidates {
            let Some(rect) = probe.measure(gap).rect() else {
                continue;
            };
            if rect.overlaps(&dragged) {
                let target = target_for_gap(side, i, source_index).min(last);
                tracing::trace!(target: "hover", %gap, ?side, slot = i, insert_at = target, "gap hit");
                return Some(target);
            }
        }
    }

    None
}
