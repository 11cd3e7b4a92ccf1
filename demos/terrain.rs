//! Random terrain demo: finds the cheapest route between opposite corners
//! of a generated map and draws it.
//!
//! Usage: `terrain [seed]`

use std::io;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wayfind_core::Point;
use wayfind_paths::{PathFinder, SearchConfig};
use wayfind_demos::{TerrainGen, random_terrain, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = match std::env::args().nth(1) {
        Some(s) => s.parse()?,
        None => 42,
    };
    let cfg = TerrainGen::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let terrain = random_terrain(cfg, &mut rng)?;

    let start = Point::ZERO;
    let goal = terrain.range().max.shift(-1, -1);
    let finder = PathFinder::new(
        SearchConfig::default().with_capacity_hint(terrain.range().len()),
    );

    let mut stdout = io::stdout();
    match finder.search(&terrain, start, goal) {
        Ok(path) => {
            render(&mut stdout, &terrain, start, &path.steps)?;
            println!(
                "seed {seed}: {} steps, cost {:.0}, {} expanded, {} discovered",
                path.len(),
                path.cost,
                path.stats.expanded,
                path.stats.discovered
            );
        }
        Err(e) => {
            log::warn!("seed {seed}: {e}");
            render(&mut stdout, &terrain, start, &[])?;
            println!("seed {seed}: {e}");
        }
    }
    Ok(())
}
