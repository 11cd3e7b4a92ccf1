use std::hash::Hash;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::state::SearchState;
use crate::traits::{AstarPather, FnPather};

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States moved into the evaluated set.
    pub expanded: usize,
    /// Distinct states that ever received a cost.
    pub discovered: usize,
}

/// A route found by [`PathFinder::search`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<S> {
    /// States after the start, through the goal. Empty when start and goal
    /// are the same state.
    pub steps: Vec<S>,
    /// Sum of edge costs along the route.
    pub cost: f64,
    pub stats: SearchStats,
}

impl<S> Path<S> {
    /// Number of moves in the route.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the start already was the goal.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The full route, including `start` in front.
    pub fn with_start(self, start: S) -> Vec<S> {
        let mut out = Vec::with_capacity(self.steps.len() + 1);
        out.push(start);
        out.extend(self.steps);
        out
    }
}

/// A* search entry point.
///
/// A `PathFinder` holds only configuration; every call builds and drops its
/// own working set, so one finder can serve any number of searches,
/// including concurrent ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder {
    config: SearchConfig,
}

impl PathFinder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Compute the cheapest route from `start` to `end`.
    ///
    /// Returns the states after `start` through `end`, `Some(vec![])` when
    /// `start == end`, or `None` when the goal cannot be reached (or the
    /// expansion budget ran out).
    pub fn find_path<S, P>(&self, pather: &P, start: S, end: S) -> Option<Vec<S>>
    where
        S: Clone + Eq + Hash,
        P: AstarPather<S> + ?Sized,
    {
        self.search(pather, start, end).ok().map(|p| p.steps)
    }

    /// Like [`find_path`](Self::find_path), but reports the route cost and
    /// search counters, and why no route was produced.
    ///
    /// The frontier is expanded cheapest `g + h` first; ties go to the
    /// state queued earliest. Expanded states are final: a cheaper route to
    /// one found later is ignored, so the result is optimal only for
    /// consistent heuristics.
    pub fn search<S, P>(&self, pather: &P, start: S, end: S) -> Result<Path<S>, SearchError>
    where
        S: Clone + Eq + Hash,
        P: AstarPather<S> + ?Sized,
    {
        let h0 = pather.estimate(&start, &end);
        let mut st = SearchState::new(start, h0, self.config.capacity_hint);
        let mut nbuf: Vec<S> = Vec::new();

        let goal = loop {
            let Some(ci) = st.pop_cheapest() else {
                log::debug!(
                    "astar: frontier exhausted after {} expansions",
                    st.expanded()
                );
                return Err(SearchError::NoPath {
                    expanded: st.expanded(),
                });
            };

            if *st.state(ci) == end {
                break ci;
            }

            if let Some(limit) = self.config.max_expansions {
                if st.expanded() >= limit {
                    log::debug!("astar: expansion limit {limit} reached");
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }

            st.close(ci);
            log::trace!(
                "astar: expand #{} g={:.3} discovered={}",
                st.expanded(),
                st.g(ci),
                st.discovered()
            );

            nbuf.clear();
            pather.neighbors(st.state(ci), &mut nbuf);

            for n in nbuf.drain(..) {
                if st.is_closed(&n) {
                    continue;
                }
                let step = pather.cost(st.state(ci), &n);
                st.relax(ci, n, step, |s| pather.estimate(s, &end));
            }
        };

        let path = Path {
            steps: st.reconstruct(goal),
            cost: st.g(goal),
            stats: SearchStats {
                expanded: st.expanded(),
                discovered: st.discovered(),
            },
        };
        log::debug!(
            "astar: found path of {} steps, cost {:.3}, {} expansions",
            path.len(),
            path.cost,
            path.stats.expanded
        );
        Ok(path)
    }
}

/// Compute the cheapest route from `start` to `end` with plain functions.
///
/// - `neighbor_cost(from, to)`: cost of the edge between adjacent states.
/// - `heuristic(a, b)`: estimate of the remaining cost from `a` to `b`.
/// - `move_fn(s)`: the states reachable from `s` in one move.
///
/// The returned route excludes `start` and ends with `end`. When
/// `start == end` the result is `Some(vec![])`; when `end` is unreachable it
/// is `None`. See [`PathFinder`] for budgets and statistics.
///
/// A state's recorded cost is the sum of `neighbor_cost` along its best
/// known route, not the number of moves; the two agree when every edge
/// costs 1.
///
/// ```
/// use wayfind_core::Point;
/// use wayfind_paths::{find_path, moves_8, straight_line};
///
/// let path = find_path(
///     |_: &Point, _: &Point| 1.0,
///     |a: &Point, b: &Point| straight_line(*a, *b),
///     |p: &Point| moves_8(*p),
///     Point::new(0, 0),
///     Point::new(2, 0),
/// );
/// assert_eq!(path, Some(vec![Point::new(1, 0), Point::new(2, 0)]));
/// ```
pub fn find_path<S, C, H, M, I>(
    neighbor_cost: C,
    heuristic: H,
    move_fn: M,
    start: S,
    end: S,
) -> Option<Vec<S>>
where
    S: Clone + Eq + Hash,
    C: Fn(&S, &S) -> f64,
    H: Fn(&S, &S) -> f64,
    M: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let pather = FnPather::new(neighbor_cost, heuristic, move_fn);
    PathFinder::default().find_path(&pather, start, end)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use wayfind_core::Point;

    #[test]
    fn path_round_trip() {
        let path = Path {
            steps: vec![Point::new(1, 0), Point::new(2, 1)],
            cost: 2.5,
            stats: SearchStats {
                expanded: 4,
                discovered: 11,
            },
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: Path<Point> = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }

    #[test]
    fn stats_field_names() {
        let stats = SearchStats {
            expanded: 3,
            discovered: 7,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"expanded":3,"discovered":7}"#);
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
