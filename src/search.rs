use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::grid::{Adjacency, Cell};

/// A frontier entry. `Ord` is reversed so `BinaryHeap` pops the entry
/// with the smallest distance first; ties break on coordinates, which
/// never affects settled distances since all edges cost 1.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Entry {
    dist: u32,
    cell: Cell,
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

/// Computes the distance from `start` to every reachable open cell.
///
/// Uniform-cost search: pop the smallest-distance entry, settle its cell
/// on first sight, and push `dist + 1` entries for unsettled neighbors.
/// Stale duplicate entries are discarded at pop time instead of being
/// reprioritized in place. Cells absent from the result are unreachable.
pub fn distance_map(neighbors: &Adjacency, start: Cell) -> FxHashMap<Cell, u32> {
    debug_assert!(
        neighbors.contains_key(&start),
        "start {:?} is not an open cell",
        start
    );

    let mut dist: FxHashMap<Cell, u32> = FxHashMap::default();
    let mut queue = BinaryHeap::new();
    queue.push(Entry {
        dist: 0,
        cell: start,
    });

    while let Some(Entry { dist: d, cell }) = queue.pop() {
        if dist.contains_key(&cell) {
            continue;
        }
        dist.insert(cell, d);

        let Some(adjacent) = neighbors.get(&cell) else {
            continue;
        };
        for &next in adjacent {
            if !dist.contains_key(&next) {
                queue.push(Entry {
                    dist: d + 1,
                    cell: next,
                });
            }
        }
    }

    dist
}
