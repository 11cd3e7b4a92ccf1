//! Weighted grid maps parsed from text.
//!
//! Each character is one cell: `.` costs 1, a digit `1`-`9` costs that
//! much to enter, and `#` cannot be entered at all.

use std::fmt;
use std::str::FromStr;

use wayfind_core::{Point, Range};

use crate::distance::chebyshev;
use crate::neighbors::moves_8;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Errors that can occur when parsing a terrain map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    /// The input had no cells.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `.`, `#` and `1`-`9` was found.
    InvalidCell { ch: char, pos: Point },
    /// A cell weight outside `1..=9`.
    InvalidWeight { weight: u8, pos: Point },
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "terrain: empty map"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "terrain: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidCell { ch, pos } => {
                write!(f, "terrain: invalid cell \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InvalidWeight { weight, pos } => {
                write!(f, "terrain: weight {weight} at {pos} outside 1..=9")
            }
        }
    }
}

impl std::error::Error for TerrainError {}

/// A rectangular cost map searched with 8-way movement.
///
/// Entering a cell costs that cell's weight; the heuristic is the Chebyshev
/// distance, which never overestimates since every passable cell costs at
/// least 1. Weights are always in `1..=9`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    range: Range,
    // None marks a wall.
    cells: Vec<Option<u8>>,
}

impl Terrain {
    /// Parse a map, one text line per row.
    pub fn parse(src: &str) -> Result<Self, TerrainError> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (y, line) in src.lines().enumerate() {
            let line = line.trim_end();
            let found = line.chars().count();
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(TerrainError::InconsistentWidth {
                        line: y,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            for (x, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => Some(1),
                    '#' => None,
                    '1'..='9' => Some(ch as u8 - b'0'),
                    _ => {
                        return Err(TerrainError::InvalidCell {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                cells.push(cell);
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(TerrainError::Empty);
        }
        Ok(Self {
            range: Range::new(0, 0, width as i32, height),
            cells,
        })
    }

    /// Build a map covering `range`, asking `cell` for the weight of each
    /// point in row-major order. `None` marks a wall.
    ///
    /// Weights must lie in `1..=9`; anything else is rejected.
    pub fn from_fn(
        range: Range,
        mut cell: impl FnMut(Point) -> Option<u8>,
    ) -> Result<Self, TerrainError> {
        let mut cells = Vec::with_capacity(range.len());
        for p in range.iter() {
            let c = cell(p);
            if let Some(weight) = c {
                if !(1..=9).contains(&weight) {
                    return Err(TerrainError::InvalidWeight { weight, pos: p });
                }
            }
            cells.push(c);
        }
        Ok(Self { range, cells })
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.range.size()
    }

    /// Cost of entering `p`, or `None` for walls and out-of-range points.
    #[inline]
    pub fn cost_at(&self, p: Point) -> Option<u8> {
        self.range.index_of(p).and_then(|i| self.cells[i])
    }

    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.cost_at(p).is_some()
    }

    /// Total cost of walking `steps` from `start`, or `None` if a step is
    /// not a legal move.
    pub fn path_cost(&self, start: Point, steps: &[Point]) -> Option<f64> {
        let mut prev = start;
        let mut total = 0.0;
        for &p in steps {
            if !prev.is_adjacent(p) {
                return None;
            }
            total += f64::from(self.cost_at(p)?);
            prev = p;
        }
        Some(total)
    }
}

impl FromStr for Terrain {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.range.iter().enumerate() {
            if i > 0 && p.x == self.range.min.x {
                writeln!(f)?;
            }
            let ch = match self.cells[i] {
                None => '#',
                Some(1) => '.',
                Some(c) => char::from(b'0' + c),
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl Pather<Point> for Terrain {
    fn neighbors(&self, p: &Point, buf: &mut Vec<Point>) {
        buf.extend(moves_8(*p).into_iter().filter(|&n| self.is_passable(n)));
    }
}

impl WeightedPather<Point> for Terrain {
    fn cost(&self, _from: &Point, to: &Point) -> f64 {
        self.cost_at(*to).map_or(f64::INFINITY, f64::from)
    }
}

impl AstarPather<Point> for Terrain {
    fn estimate(&self, from: &Point, to: &Point) -> f64 {
        f64::from(chebyshev(*from, *to))
    }
}
