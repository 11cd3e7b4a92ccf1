//! **wayfind-core** — geometry primitives for the wayfind crates.
//!
//! Grid callers of the search engine describe their states as [`Point`]s
//! and bound their maps with a [`Range`].

pub mod geom;

pub use geom::{Point, Range, RangeIter};
