//! Benchmarks for committing a reorder
//!
//! Run with: cargo bench reflow

use dock_reorder::model::Item;
use dock_reorder::reflow::ReflowEngine;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn engine(len: usize) -> ReflowEngine {
    ReflowEngine::new((0..len).map(|i| Item::new(format!("item-{}", i))).collect())
}

#[divan::bench(args = [8, 32, 64])]
fn commit_first_to_last(bencher: divan::Bencher, len: usize) {
    bencher
        .with_inputs(|| engine(len))
        .bench_local_values(|mut reflow| {
            reflow.commit_move(0, len - 1);
            reflow
        });
}

#[divan::bench(args = [8, 32, 64])]
fn commit_last_to_first(bencher: divan::Bencher, len: usize) {
    bencher
        .with_inputs(|| engine(len))
        .bench_local_values(|mut reflow| {
            reflow.commit_move(len - 1, 0);
            reflow
        });
}
