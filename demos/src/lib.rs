//! Shared helpers for the wayfind demos.
//!
//! Demonstrates: random terrain generation, A* over a weighted map, and
//! rendering a route on top of the map in a terminal.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use rand::Rng;
use wayfind_core::{Point, Range};
use wayfind_paths::{Terrain, TerrainError};

// Colours
const COL_WALL: Color = Color::Rgb {
    r: 100,
    g: 100,
    b: 130,
};
const COL_PLAIN: Color = Color::Rgb {
    r: 60,
    g: 55,
    b: 50,
};
const COL_ROUGH: Color = Color::Rgb {
    r: 150,
    g: 120,
    b: 60,
};
const COL_PATH: Color = Color::Rgb {
    r: 50,
    g: 180,
    b: 255,
};
const COL_ENDPOINT: Color = Color::Rgb {
    r: 255,
    g: 220,
    b: 80,
};

/// Knobs for [`random_terrain`].
#[derive(Debug, Clone, Copy)]
pub struct TerrainGen {
    pub width: i32,
    pub height: i32,
    /// Percentage of cells that become walls.
    pub wall_pct: u32,
    /// Percentage of open cells that get a random cost in 2..=9.
    pub rough_pct: u32,
}

impl Default for TerrainGen {
    fn default() -> Self {
        Self {
            width: 60,
            height: 20,
            wall_pct: 18,
            rough_pct: 25,
        }
    }
}

/// Generate a random terrain. The corners (0, 0) and (w-1, h-1) are always
/// plain ground so they can serve as endpoints.
pub fn random_terrain(cfg: TerrainGen, rng: &mut impl Rng) -> Result<Terrain, TerrainError> {
    let range = Range::new(0, 0, cfg.width.max(1), cfg.height.max(1));
    let last = range.max.shift(-1, -1);
    Terrain::from_fn(range, |p| {
        if p == range.min || p == last {
            return Some(1);
        }
        if rng.random_range(0..100) < cfg.wall_pct {
            None
        } else if rng.random_range(0..100) < cfg.rough_pct {
            Some(rng.random_range(2..=9))
        } else {
            Some(1)
        }
    })
}

/// Draw `terrain` with the route `steps` (walked from `start`) highlighted.
pub fn render(
    out: &mut impl Write,
    terrain: &Terrain,
    start: Point,
    steps: &[Point],
) -> io::Result<()> {
    let on_path: HashSet<Point> = steps.iter().copied().collect();
    let goal = steps.last().copied().unwrap_or(start);
    let rng = terrain.range();

    for p in rng.iter() {
        let (col, ch) = if p == start || p == goal {
            (COL_ENDPOINT, '@')
        } else if on_path.contains(&p) {
            (COL_PATH, '*')
        } else {
            match terrain.cost_at(p) {
                None => (COL_WALL, '#'),
                Some(1) => (COL_PLAIN, '.'),
                Some(c) => (COL_ROUGH, char::from(b'0' + c.min(9))),
            }
        };
        queue!(out, SetForegroundColor(col), Print(ch))?;
        if p.x == rng.max.x - 1 {
            queue!(out, ResetColor, Print('\n'))?;
        }
    }
    queue!(out, ResetColor)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_terrain_has_open_corners() {
        let mut rng = StdRng::seed_from_u64(7);
        let cfg = TerrainGen {
            width: 10,
            height: 6,
            wall_pct: 100,
            rough_pct: 0,
        };
        let t = random_terrain(cfg, &mut rng).unwrap();
        assert_eq!(t.size(), Point::new(10, 6));
        assert_eq!(t.cost_at(Point::new(0, 0)), Some(1));
        assert_eq!(t.cost_at(Point::new(9, 5)), Some(1));
        assert!(!t.is_passable(Point::new(4, 3)));
    }

    #[test]
    fn render_marks_route() {
        let t = Terrain::parse("...\n...").unwrap();
        let mut buf = Vec::new();
        render(&mut buf, &t, Point::new(0, 0), &[Point::new(1, 0), Point::new(2, 1)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches('@').count(), 2);
        assert_eq!(text.matches('*').count(), 1);
        assert_eq!(text.matches('\n').count(), 2);
    }
}
