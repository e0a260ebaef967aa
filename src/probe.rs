//! Geometry probe - measured on-screen rectangles of dock gaps
//!
//! The renderer lays out the row and reports what it measured; the hover
//! resolver reads it back through [`GeometryProbe`]. Reads are idempotent and
//! side-effect free, so they can run every frame while a drag is active.

use std::collections::HashMap;

use crate::geometry::{Point, Rect, RowLayout};
use crate::model::GapId;

/// Result of measuring one gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Measured(Rect),
    /// Not laid out yet (first frame, or the handle was just reissued)
    Unmeasured,
}

impl Measurement {
    pub fn rect(self) -> Option<Rect> {
        match self {
            Measurement::Measured(rect) => Some(rect),
            Measurement::Unmeasured => None,
        }
    }
}

/// Read side of the layout collaborator
pub trait GeometryProbe {
    fn measure(&self, gap: GapId) -> Measurement;
}

/// Last reported layout of the dock row
///
/// Holds measurements for exactly one slot generation. Queries with a handle
/// from any other generation answer [`Measurement::Unmeasured`].
#[derive(Debug, Clone, Default)]
pub struct MeasuredLayout {
    generation: u32,
    gaps: HashMap<GapId, Rect>,
    slots: Vec<Rect>,
}

impl MeasuredLayout {
    pub fn new(generation: u32) -> Self {
        Self {
            generation,
            ..Self::default()
        }
    }

    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Forget every measurement and start accepting a new generation
    pub fn invalidate(&mut self, generation: u32) {
        self.generation = generation;
        self.gaps.clear();
        self.slots.clear();
    }

    /// Replace the measurements with a full layout pass
    ///
    /// Returns false (and keeps the old measurements) when the layout was
    /// computed for a different generation.
    pub fn replace(&mut self, layout: RowLayout) -> bool {
        if layout.generation != self.generation {
            return false;
        }
        self.gaps = layout.gaps.into_iter().collect();
        self.slots = layout.slots;
        true
    }

    /// Record a single gap measurement; stale handles are refused
    pub fn record(&mut self, gap: GapId, rect: Rect) -> bool {
        if gap.generation() != self.generation {
            return false;
        }
        self.gaps.insert(gap, rect);
        true
    }

    /// Number of gaps with a current measurement
    pub fn measured_gaps(&self) -> usize {
        self.gaps.len()
    }

    /// Display index of the measured slot containing `point`
    pub fn slot_at(&self, point: Point) -> Option<usize> {
        self.slots.iter().position(|rect| rect.contains(point))
    }
}

impl GeometryProbe for MeasuredLayout {
    fn measure(&self, gap: GapId) -> Measurement {
        if gap.generation() != self.generation {
            return Measurement::Unmeasured;
        }
        self.gaps
            .get(&gap)
            .copied()
            .map_or(Measurement::Unmeasured, Measurement::Measured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_gap_is_unmeasured() {
        let layout = MeasuredLayout::new(1);
        assert_eq!(layout.measure(GapId::new(1, 0)), Measurement::Unmeasured);
    }

    #[test]
    fn test_record_then_measure() {
        let mut layout = MeasuredLayout::new(1);
        let rect = Rect::new(0.0, 0.0, 8.0, 56.0);
        assert!(layout.record(GapId::new(1, 2), rect));
        assert_eq!(layout.measure(GapId::new(1, 2)), Measurement::Measured(rect));
    }

    #[test]
    fn test_stale_generation_is_refused() {
        let mut layout = MeasuredLayout::new(2);
        let rect = Rect::new(0.0, 0.0, 8.0, 56.0);

        assert!(!layout.record(GapId::new(1, 0), rect));
        assert_eq!(layout.measured_gaps(), 0);

        layout.record(GapId::new(2, 0), rect);
        layout.invalidate(3);
        assert_eq!(layout.measure(GapId::new(2, 0)), Measurement::Unmeasured);
    }

    #[test]
    fn test_replace_rejects_other_generation() {
        let mut layout = MeasuredLayout::new(4);
        let stale = RowLayout {
            generation: 3,
            slots: vec![Rect::new(0.0, 0.0, 10.0, 10.0)],
            gaps: vec![(GapId::new(3, 0), Rect::new(0.0, 0.0, 1.0, 1.0))],
        };
        assert!(!layout.replace(stale));
        assert_eq!(layout.slot_at(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_slot_at() {
        let mut layout = MeasuredLayout::new(1);
        layout.replace(RowLayout {
            generation: 1,
            slots: vec![
                Rect::new(0.0, 0.0, 10.0, 10.0),
                Rect::new(20.0, 0.0, 10.0, 10.0),
            ],
            gaps: Vec::new(),
        });

        assert_eq!(layout.slot_at(Point::new(25.0, 5.0)), Some(1));
        assert_eq!(layout.slot_at(Point::new(15.0, 5.0)), None);
    }
}
