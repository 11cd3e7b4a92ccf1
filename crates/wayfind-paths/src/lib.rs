//! Generic A* shortest-path search.
//!
//! The engine works over any state type that can be hashed and compared
//! for equality; it never looks inside a state. Callers describe the space
//! with three functions:
//!
//! - a **move function** listing the states one step away,
//! - an **edge cost** for each such step,
//! - a **heuristic** estimating the remaining cost to the goal.
//!
//! [`find_path`] takes these as plain closures. [`PathFinder`] takes them as
//! an [`AstarPather`] implementation and adds an expansion budget
//! ([`SearchConfig`]) and a richer result ([`Path`], [`SearchError`]).
//!
//! Routes exclude the start state and end with the goal; a search whose
//! start already is the goal yields an empty route.
//!
//! # Trait hierarchy
//!
//! | Trait | Supplies |
//! |---|---|
//! | [`Pather`] | move function |
//! | [`WeightedPather`] : [`Pather`] | edge cost |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic |
//!
//! # Grid helpers
//!
//! For 2D maps over [`wayfind_core::Point`], the crate ships move functions
//! ([`moves_4`], [`moves_8`]), heuristics ([`straight_line`],
//! [`pythagorean`], [`manhattan`], [`chebyshev`]) and a text-parsed cost map
//! ([`Terrain`]).

mod config;
mod distance;
mod error;
mod neighbors;
mod search;
mod state;
mod terrain;
mod traits;

pub use config::SearchConfig;
pub use distance::{chebyshev, manhattan, pythagorean, straight_line};
pub use error::SearchError;
pub use neighbors::{moves_4, moves_8};
pub use search::{Path, PathFinder, SearchStats, find_path};
pub use terrain::{Terrain, TerrainError};
pub use traits::{AstarPather, FnPather, Pather, WeightedPather};
