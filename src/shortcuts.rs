use rustc_hash::FxHashMap;

use crate::grid::Cell;

/// Counts ordered pairs (a, b) of settled cells where jumping straight
/// from `a` to `b` through the walls beats walking the maze.
///
/// The jump costs `manhattan(a, b)` steps and must not exceed
/// `max_jump`; the saving is `dist[b] - dist[a] - jump` and must be at
/// least `min_saving`. Both orderings of each pair are evaluated: the
/// reverse direction of a genuine shortcut has a negative saving and
/// drops out on its own.
pub fn count_shortcuts(distances: &FxHashMap<Cell, u32>, max_jump: u32, min_saving: u32) -> u64 {
    let cells: Vec<(Cell, i64)> = distances
        .iter()
        .map(|(&cell, &d)| (cell, i64::from(d)))
        .collect();

    let mut count = 0;
    for &(a, da) in &cells {
        for &(b, db) in &cells {
            if a == b {
                continue;
            }
            let jump = a.manhattan(b);
            if jump > max_jump {
                continue;
            }
            let saving = db - da - i64::from(jump);
            if saving >= i64::from(min_saving) {
                count += 1;
            }
        }
    }

    count
}
