//! Items, slot records, and generation-tagged gap handles

use std::fmt;

/// Opaque dock payload (an icon identifier)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item(String);

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Item {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Handle used to measure one gap region of the dock row
///
/// Handles are tied to layout identity: every time the slot list is rebuilt
/// the generation is bumped, and handles from an older generation must never
/// be measured again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GapId {
    generation: u32,
    index: u32,
}

impl GapId {
    pub fn new(generation: u32, index: u32) -> Self {
        Self { generation, index }
    }

    /// Slot-list generation this handle was issued for
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Display position of the gap: `0` is left of the first slot, `k + 1` is
    /// right of slot `k`
    #[inline]
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for GapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gap#{}@{}", self.index, self.generation)
    }
}

/// Visual status of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotStatus {
    /// Full width with its icon
    #[default]
    Filled,
    /// Full width, no icon (the restore pulse after a cancelled drag)
    Empty,
    /// Zero width, no icon (the vacated source of a drag)
    Hidden,
}

/// Rendering-facing record for one dock position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub status: SlotStatus,
    /// Index into the authoritative item order
    pub source_index: usize,
    /// Only the leftmost slot owns a left gap
    pub left_gap: Option<GapId>,
    pub right_gap: GapId,
}

impl Slot {
    /// Build the slot list for `count` items with handles from `generation`
    ///
    /// An N-slot row gets exactly N + 1 gap handles.
    pub fn build_row(count: usize, generation: u32) -> Vec<Slot> {
        (0..count)
            .map(|i| Slot {
                status: SlotStatus::Filled,
                source_index: i,
                left_gap: (i == 0).then(|| GapId::new(generation, 0)),
                right_gap: GapId::new(generation, i as u32 + 1),
            })
            .collect()
    }

    /// Gap handles this slot owns, in left-to-right order
    pub fn gaps(&self) -> impl Iterator<Item = GapId> {
        self.left_gap.into_iter().chain(std::iter::once(self.right_gap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_row_issues_n_plus_one_gaps() {
        let slots = Slot::build_row(5, 7);
        let gaps: Vec<GapId> = slots.iter().flat_map(|s| s.gaps()).collect();

        assert_eq!(gaps.len(), 6);
        for (i, gap) in gaps.iter().enumerate() {
            assert_eq!(gap.index(), i);
            assert_eq!(gap.generation(), 7);
        }
    }

    #[test]
    fn test_only_first_slot_owns_left_gap() {
        let slots = Slot::build_row(3, 1);
        assert!(slots[0].left_gap.is_some());
        assert!(slots[1].left_gap.is_none());
        assert!(slots[2].left_gap.is_none());
    }

    #[test]
    fn test_build_row_empty() {
        assert!(Slot::build_row(0, 1).is_empty());
    }

    #[test]
    fn test_gap_ids_differ_across_generations() {
        assert_ne!(GapId::new(1, 0), GapId::new(2, 0));
    }
}
