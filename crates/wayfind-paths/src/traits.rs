use std::marker::PhantomData;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather<S> {
    /// Append the states reachable from `s` in one step into `buf`.
    /// The caller clears `buf` before calling.
    ///
    /// Must be a pure function of `s`.
    fn neighbors(&self, s: &S, buf: &mut Vec<S>);
}

/// Pather with weighted edges.
pub trait WeightedPather<S>: Pather<S> {
    /// Cost of moving from `from` to adjacent `to`. Should be ≥ 0; this is
    /// not checked.
    fn cost(&self, from: &S, to: &S) -> f64;
}

/// Full A* pather with a heuristic.
pub trait AstarPather<S>: WeightedPather<S> {
    /// Heuristic estimate of the distance from `from` to `to`.
    ///
    /// Must never overestimate the true cost for the returned path to be
    /// optimal, and should be consistent since expanded states are never
    /// reopened.
    fn estimate(&self, from: &S, to: &S) -> f64;
}

/// An [`AstarPather`] assembled from three closures: edge cost, heuristic
/// and move function.
///
/// The move function may return any iterable of states (a `Vec`, a
/// `HashSet`, an array...).
pub struct FnPather<S, C, H, M> {
    cost: C,
    estimate: H,
    moves: M,
    _state: PhantomData<fn(&S)>,
}

impl<S, C, H, M, I> FnPather<S, C, H, M>
where
    C: Fn(&S, &S) -> f64,
    H: Fn(&S, &S) -> f64,
    M: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    pub fn new(cost: C, estimate: H, moves: M) -> Self {
        Self {
            cost,
            estimate,
            moves,
            _state: PhantomData,
        }
    }
}

impl<S, C, H, M, I> Pather<S> for FnPather<S, C, H, M>
where
    M: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    fn neighbors(&self, s: &S, buf: &mut Vec<S>) {
        buf.extend((self.moves)(s));
    }
}

impl<S, C, H, M, I> WeightedPather<S> for FnPather<S, C, H, M>
where
    C: Fn(&S, &S) -> f64,
    M: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    fn cost(&self, from: &S, to: &S) -> f64 {
        (self.cost)(from, to)
    }
}

impl<S, C, H, M, I> AstarPather<S> for FnPather<S, C, H, M>
where
    C: Fn(&S, &S) -> f64,
    H: Fn(&S, &S) -> f64,
    M: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    fn estimate(&self, from: &S, to: &S) -> f64 {
        (self.estimate)(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn fn_pather_forwards_to_closures() {
        let p = FnPather::new(
            |a: &i32, b: &i32| (b - a).abs() as f64 * 2.0,
            |a: &i32, b: &i32| (b - a).abs() as f64,
            |s: &i32| BTreeSet::from([s - 1, s + 1]),
        );
        let mut buf = vec![];
        p.neighbors(&5, &mut buf);
        assert_eq!(buf, vec![4, 6]);
        assert_eq!(p.cost(&5, &6), 2.0);
        assert_eq!(p.estimate(&0, &3), 3.0);
    }

    #[test]
    fn neighbors_append_to_existing_buffer() {
        let p = FnPather::new(|_: &u8, _: &u8| 1.0, |_: &u8, _: &u8| 0.0, |s: &u8| [s + 1]);
        let mut buf = vec![0];
        p.neighbors(&1, &mut buf);
        assert_eq!(buf, vec![0, 2]);
    }
}
