//! Maze shortcut analysis: compute shortest-path distances over the open
//! cells of a maze, then count cell pairs where jumping straight through
//! the walls would beat walking the maze by a given margin.

pub mod config;
pub mod grid;
pub mod report;
pub mod search;
pub mod shortcuts;
