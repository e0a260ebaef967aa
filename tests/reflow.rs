//! Property tests for committing a move

use dock_reorder::model::{Item, SlotStatus};
use dock_reorder::reflow::ReflowEngine;
use proptest::prelude::*;

fn engine(len: usize) -> ReflowEngine {
    ReflowEngine::new((0..len).map(|i| Item::new(format!("item-{}", i))).collect())
}

/// A list length with a valid (source, target) pair
fn move_case() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..24).prop_flat_map(|len| (Just(len), 0..len, 0..len))
}

proptest! {
    #[test]
    fn prop_commit_preserves_items((len, source, target) in move_case()) {
        let mut reflow = engine(len);
        let mut before: Vec<String> = reflow.items().iter().map(|i| i.to_string()).collect();

        let mut after: Vec<String> = reflow
            .commit_move(source, target)
            .iter()
            .map(|i| i.to_string())
            .collect();

        prop_assert_eq!(after.len(), len);
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_moved_item_lands_at_target((len, source, target) in move_case()) {
        let mut reflow = engine(len);
        let moved = reflow.items()[source].clone();

        let items = reflow.commit_move(source, target);
        prop_assert_eq!(&items[target], &moved);
    }

    #[test]
    fn prop_others_keep_relative_order((len, source, target) in move_case()) {
        let mut reflow = engine(len);
        let moved = reflow.items()[source].clone();
        let others: Vec<Item> = reflow
            .items()
            .iter()
            .filter(|i| **i != moved)
            .cloned()
            .collect();

        let remaining: Vec<Item> = reflow
            .commit_move(source, target)
            .iter()
            .filter(|i| **i != moved)
            .cloned()
            .collect();
        prop_assert_eq!(others, remaining);
    }

    #[test]
    fn prop_same_index_is_noop(len in 1usize..24, index in 0usize..24) {
        let index = index % len;
        let mut reflow = engine(len);
        let before = reflow.items().to_vec();

        prop_assert_eq!(reflow.commit_move(index, index), &before[..]);
    }

    #[test]
    fn prop_commit_reissues_filled_slots((len, source, target) in move_case()) {
        let mut reflow = engine(len);
        reflow.set_status(source, SlotStatus::Hidden);
        let generation = reflow.generation();

        reflow.commit_move(source, target);

        prop_assert_eq!(reflow.generation(), generation.wrapping_add(1));
        prop_assert_eq!(reflow.slots().len(), len);
        for (i, slot) in reflow.slots().iter().enumerate() {
            prop_assert_eq!(slot.status, SlotStatus::Filled);
            prop_assert_eq!(slot.source_index, i);
            prop_assert_eq!(slot.right_gap.generation(), reflow.generation());
        }
    }
}
