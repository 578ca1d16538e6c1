use std::fmt;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// A grid coordinate. Row 0 is the top row, column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Manhattan distance to `other`, ignoring walls.
    pub fn manhattan(&self, other: Cell) -> u32 {
        let span = self.row.abs_diff(other.row) + self.col.abs_diff(other.col);
        debug_assert!(u32::try_from(span).is_ok(), "cell span overflows u32");
        span as u32
    }
}

/// Open cell -> its open, in-bounds neighbors in a fixed order
/// (up, down, left, right). Wall cells are absent as keys.
pub type Adjacency = FxHashMap<Cell, Vec<Cell>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("maze has no rows")]
    Empty,
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("unrecognized character {ch:?} at row {row}, column {col}")]
    UnknownChar { ch: char, row: usize, col: usize },
    #[error("maze has no start marker 'S'")]
    MissingStart,
    #[error("maze has no end marker 'E'")]
    MissingEnd,
}

/// A parsed maze: dimensions, the start and end markers, and the
/// adjacency mapping over all open cells.
pub struct Maze {
    pub height: usize,
    pub width: usize,
    pub start: Cell,
    pub end: Cell,
    pub neighbors: Adjacency,
    open: Vec<Vec<bool>>,
}

impl Maze {
    /// Parses maze text: `#` is a wall, `.` an open cell, `S` the start
    /// and `E` the end (both open). Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
        let height = rows.len();
        if height == 0 {
            return Err(ParseError::Empty);
        }
        let width = rows[0].chars().count();

        let mut open = vec![vec![false; width]; height];
        let mut start = None;
        let mut end = None;

        for (row, line) in rows.iter().enumerate() {
            let mut cols = 0;
            for (col, ch) in line.chars().enumerate() {
                cols += 1;
                match ch {
                    '#' => continue,
                    '.' => {}
                    'S' => start = Some(Cell { row, col }),
                    'E' => end = Some(Cell { row, col }),
                    _ => return Err(ParseError::UnknownChar { ch, row, col }),
                }
                if col < width {
                    open[row][col] = true;
                }
            }
            if cols != width {
                return Err(ParseError::RaggedRow {
                    row,
                    got: cols,
                    expected: width,
                });
            }
        }

        let start = start.ok_or(ParseError::MissingStart)?;
        let end = end.ok_or(ParseError::MissingEnd)?;

        let mut neighbors: Adjacency = FxHashMap::default();
        for row in 0..height {
            for col in 0..width {
                if !open[row][col] {
                    continue;
                }
                let cell = Cell { row, col };
                let mut adjacent = Vec::with_capacity(4);

                // Up, down, left, right.
                for (dr, dc) in [(-1i64, 0i64), (1, 0), (0, -1), (0, 1)] {
                    let nr = row as i64 + dr;
                    let nc = col as i64 + dc;
                    if nr < 0 || nr >= height as i64 || nc < 0 || nc >= width as i64 {
                        continue;
                    }
                    let (nr, nc) = (nr as usize, nc as usize);
                    if open[nr][nc] {
                        adjacent.push(Cell { row: nr, col: nc });
                    }
                }

                neighbors.insert(cell, adjacent);
            }
        }

        Ok(Maze {
            height,
            width,
            start,
            end,
            neighbors,
            open,
        })
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Cell { row, col };
                let ch = if cell == self.start {
                    'S'
                } else if cell == self.end {
                    'E'
                } else if self.open[row][col] {
                    '.'
                } else {
                    '#'
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
#####
#S.E#
#.#.#
#...#
#####
";

    #[test]
    fn parses_dimensions_and_markers() {
        let maze = Maze::parse(SMALL).unwrap();
        assert_eq!(maze.height, 5);
        assert_eq!(maze.width, 5);
        assert_eq!(maze.start, Cell { row: 1, col: 1 });
        assert_eq!(maze.end, Cell { row: 1, col: 3 });
    }

    #[test]
    fn walls_are_absent_from_adjacency() {
        let maze = Maze::parse(SMALL).unwrap();
        assert!(!maze.neighbors.contains_key(&Cell { row: 0, col: 0 }));
        assert!(!maze.neighbors.contains_key(&Cell { row: 2, col: 2 }));
        assert_eq!(maze.neighbors.len(), 8);
    }

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let maze = Maze::parse(SMALL).unwrap();
        let center = Cell { row: 3, col: 2 };
        // (2,2) is a wall, so only left and right remain, in that order.
        assert_eq!(
            maze.neighbors[&center],
            vec![Cell { row: 3, col: 1 }, Cell { row: 3, col: 3 }]
        );
        let corner = Cell { row: 1, col: 1 };
        assert_eq!(
            maze.neighbors[&corner],
            vec![Cell { row: 2, col: 1 }, Cell { row: 1, col: 2 }]
        );
    }

    #[test]
    fn adjacency_is_symmetric() {
        let maze = Maze::parse(SMALL).unwrap();
        for (&cell, adjacent) in &maze.neighbors {
            for n in adjacent {
                assert!(
                    maze.neighbors[n].contains(&cell),
                    "{:?} -> {:?} has no reverse edge",
                    cell,
                    n
                );
            }
        }
    }

    #[test]
    fn blank_lines_are_skipped() {
        let padded = format!("\n{}\n\n", SMALL);
        let maze = Maze::parse(&padded).unwrap();
        assert_eq!(maze.height, 5);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(Maze::parse(""), Err(ParseError::Empty)));
        assert!(matches!(
            Maze::parse("###\n##\n###"),
            Err(ParseError::RaggedRow { row: 1, got: 2, expected: 3 })
        ));
        assert!(matches!(
            Maze::parse("#S?\n#.E"),
            Err(ParseError::UnknownChar { ch: '?', row: 0, col: 2 })
        ));
        assert!(matches!(Maze::parse("#.E"), Err(ParseError::MissingStart)));
        assert!(matches!(Maze::parse("#.S"), Err(ParseError::MissingEnd)));
    }

    #[test]
    fn display_round_trips_the_grid() {
        let maze = Maze::parse(SMALL).unwrap();
        assert_eq!(maze.to_string(), SMALL);
    }

    #[test]
    fn manhattan_ignores_walls() {
        let a = Cell { row: 1, col: 1 };
        let b = Cell { row: 4, col: 0 };
        assert_eq!(a.manhattan(b), 4);
        assert_eq!(b.manhattan(a), 4);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn manhattan_spans_the_full_u32_range() {
        let a = Cell { row: 0, col: 0 };
        let b = Cell {
            row: u32::MAX as usize,
            col: 0,
        };
        assert_eq!(a.manhattan(b), u32::MAX);
    }
}
