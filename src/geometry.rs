//! Geometry primitives and dock row layout
//!
//! All coordinates are window pixels with the origin at the top-left corner.
//! The dock is a single horizontal row, centered horizontally and anchored to
//! the bottom of the viewport:
//!
//! ```text
//! | gap0 | slot0 | gap1 | slot1 | ... | slotN-1 | gapN |
//! ```
//!
//! Gap `0` is owned by the leftmost slot as its left gap; gap `k + 1` is the
//! right gap of slot `k`.

use serde::{Deserialize, Serialize};

use crate::model::GapId;
use crate::view_model::DockView;

// ============================================================================
// Core Types
// ============================================================================

/// A point in window coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in window coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered_at(center: Point, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Standard overlap test: non-empty intersection on both axes.
    ///
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Size of the drawable area the dock is laid out in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Fixed dock dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DockMetrics {
    /// Width of a filled slot
    #[serde(default = "default_slot_width")]
    pub slot_width: f32,
    /// Height of every slot and gap
    #[serde(default = "default_slot_height")]
    pub slot_height: f32,
    /// Width of a narrow (inactive) gap
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    /// Distance between the dock's bottom edge and the viewport's bottom edge
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: f32,
}

fn default_slot_width() -> f32 {
    56.0
}

fn default_slot_height() -> f32 {
    56.0
}

fn default_spacing() -> f32 {
    8.0
}

fn default_bottom_margin() -> f32 {
    24.0
}

impl Default for DockMetrics {
    fn default() -> Self {
        Self {
            slot_width: default_slot_width(),
            slot_height: default_slot_height(),
            spacing: default_spacing(),
            bottom_margin: default_bottom_margin(),
        }
    }
}

impl DockMetrics {
    /// Width of a gap that is not the current drop target
    #[inline]
    pub fn narrow_gap(&self) -> f32 {
        self.spacing
    }

    /// Width of the gap under the current drop target: room for one slot
    #[inline]
    pub fn wide_gap(&self) -> f32 {
        self.slot_width + self.spacing
    }

    /// Top edge of the dock row
    pub fn row_top(&self, viewport: Viewport) -> f32 {
        viewport.height - self.bottom_margin - self.slot_height
    }

    /// Total width of a row with `count` filled slots and narrow gaps
    pub fn steady_row_width(&self, count: usize) -> f32 {
        count as f32 * self.slot_width + (count + 1) as f32 * self.spacing
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Measured rectangles for one layout pass of the dock row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowLayout {
    /// Slot generation the gap handles belong to
    pub generation: u32,
    /// Slot rectangles in display order
    pub slots: Vec<Rect>,
    /// Gap rectangles in display order, keyed by handle
    pub gaps: Vec<(GapId, Rect)>,
}

impl RowLayout {
    /// Lay out the row from a view model's displayed widths
    pub fn from_view(view: &DockView, metrics: &DockMetrics, viewport: Viewport) -> Self {
        let slot_widths: Vec<f32> = view.slots.iter().map(|s| s.width).collect();
        let gap_widths: Vec<f32> = view.gaps.iter().map(|g| g.width).collect();
        let gap_ids: Vec<GapId> = view.gaps.iter().map(|g| g.id).collect();
        layout_row(
            &slot_widths,
            &gap_widths,
            &gap_ids,
            metrics,
            viewport,
            view.generation,
        )
    }
}

/// Lay out a row from explicit widths
///
/// `gap_widths` and `gap_ids` must have exactly `slot_widths.len() + 1`
/// entries (an empty row has no gaps at all). The row is centered using the
/// sum of the given widths, so a widening gap pushes both neighbours outward.
pub fn layout_row(
    slot_widths: &[f32],
    gap_widths: &[f32],
    gap_ids: &[GapId],
    metrics: &DockMetrics,
    viewport: Viewport,
    generation: u32,
) -> RowLayout {
    debug_assert_eq!(gap_widths.len(), gap_ids.len());
    if slot_widths.is_empty() {
        return RowLayout {
            generation,
            ..RowLayout::default()
        };
    }
    debug_assert_eq!(gap_widths.len(), slot_widths.len() + 1);

    let total: f32 = slot_widths.iter().sum::<f32>() + gap_widths.iter().sum::<f32>();
    let top = metrics.row_top(viewport);
    let height = metrics.slot_height;

    let mut x = (viewport.width - total) / 2.0;
    let mut slots = Vec::with_capacity(slot_widths.len());
    let mut gaps = Vec::with_capacity(gap_widths.len());

    for (i, (&gap_width, &gap_id)) in gap_widths.iter().zip(gap_ids).enumerate() {
        gaps.push((gap_id, Rect::new(x, top, gap_width, height)));
        x += gap_width;
        if let Some(&slot_width) = slot_widths.get(i) {
            slots.push(Rect::new(x, top, slot_width, height));
            x += slot_width;
        }
    }

    RowLayout {
        generation,
        slots,
        gaps,
    }
}

/// Rectangle of slot `index` in a row of `count` filled slots with narrow gaps
///
/// This is where the dragged item lands after a drop (with `index` being the
/// target in the reordered list) or returns to after a cancel.
pub fn steady_slot_rect(metrics: &DockMetrics, viewport: Viewport, count: usize, index: usize) -> Rect {
    let left = (viewport.width - metrics.steady_row_width(count)) / 2.0;
    let x = left + metrics.spacing + index as f32 * (metrics.slot_width + metrics.spacing);
    Rect::new(x, metrics.row_top(viewport), metrics.slot_width, metrics.slot_height)
}

/// Rectangle of the floating avatar: one slot, centered under the pointer
pub fn dragged_rect(pointer: Point, metrics: &DockMetrics) -> Rect {
    Rect::centered_at(pointer, metrics.slot_width, metrics.slot_height)
}
