use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// Parent index of a node with no recorded predecessor.
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    Open,
    Closed,
}

// ---------------------------------------------------------------------------
// Internal node for the A* search
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub(crate) struct Node<S> {
    pub(crate) state: S,
    pub(crate) g: f64,
    pub(crate) parent: usize,
    pub(crate) status: Status,
    /// Bumped on every relaxation; frontier entries carrying an older
    /// version are stale.
    pub(crate) version: u32,
}

/// Reference into the node table, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
    pub(crate) version: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest pushed entry among equal f.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Working set of a single search call.
///
/// Every state ever seen gets one slot in `nodes`; `index` maps states to
/// slots. A slot with `Status::Open` is in the frontier, `Status::Closed` in
/// the evaluated set, never both. `g` and `parent` hold the best known cost
/// and predecessor.
pub(crate) struct SearchState<S> {
    nodes: Vec<Node<S>>,
    index: HashMap<S, usize>,
    open: BinaryHeap<NodeRef>,
    seq: u64,
    expanded: usize,
}

impl<S: Clone + Eq + Hash> SearchState<S> {
    /// Seed the search with `start` at cost 0.
    pub(crate) fn new(start: S, estimate: f64, capacity: usize) -> Self {
        let mut st = Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            open: BinaryHeap::with_capacity(capacity),
            seq: 0,
            expanded: 0,
        };
        st.insert(start, 0.0, NO_PARENT, estimate);
        st
    }

    #[inline]
    pub(crate) fn state(&self, idx: usize) -> &S {
        &self.nodes[idx].state
    }

    #[inline]
    pub(crate) fn g(&self, idx: usize) -> f64 {
        self.nodes[idx].g
    }

    #[inline]
    pub(crate) fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of distinct states recorded so far.
    #[inline]
    pub(crate) fn discovered(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `s` has already been expanded.
    #[inline]
    pub(crate) fn is_closed(&self, s: &S) -> bool {
        self.index
            .get(s)
            .is_some_and(|&i| self.nodes[i].status == Status::Closed)
    }

    /// Pop the open node with the lowest `g + h`, skipping stale entries.
    pub(crate) fn pop_cheapest(&mut self) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            let n = &self.nodes[entry.idx];
            if n.status == Status::Open && n.version == entry.version {
                return Some(entry.idx);
            }
        }
        None
    }

    /// Move an open node into the evaluated set.
    pub(crate) fn close(&mut self, idx: usize) {
        debug_assert_eq!(self.nodes[idx].status, Status::Open);
        self.nodes[idx].status = Status::Closed;
        self.expanded += 1;
    }

    /// Offer a route to `to` through `from` costing `step` for the last
    /// edge. The route is recorded if `to` is new or strictly cheaper than
    /// its best known route. Closed nodes are left untouched.
    pub(crate) fn relax(
        &mut self,
        from: usize,
        to: S,
        step: f64,
        estimate: impl FnOnce(&S) -> f64,
    ) {
        let tentative_g = self.nodes[from].g + step;

        let Some(&ni) = self.index.get(&to) else {
            let h = estimate(&to);
            self.insert(to, tentative_g, from, h);
            return;
        };

        let n = &self.nodes[ni];
        // NaN costs never relax.
        if n.status == Status::Closed || !(tentative_g < n.g) {
            return;
        }
        let h = estimate(&n.state);

        let n = &mut self.nodes[ni];
        n.g = tentative_g;
        n.parent = from;
        n.version = n.version.wrapping_add(1);
        let version = n.version;
        self.push(ni, tentative_g + h, version);
    }

    /// Follow parents back from `goal`, returning the states after the
    /// root through `goal` in forward order.
    pub(crate) fn reconstruct(&self, goal: usize) -> Vec<S> {
        let mut path = Vec::new();
        let mut ci = goal;
        while self.nodes[ci].parent != NO_PARENT {
            path.push(self.nodes[ci].state.clone());
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }

    fn insert(&mut self, s: S, g: f64, parent: usize, h: f64) {
        let idx = self.nodes.len();
        self.index.insert(s.clone(), idx);
        self.nodes.push(Node {
            state: s,
            g,
            parent,
            status: Status::Open,
            version: 0,
        });
        self.push(idx, g + h, 0);
    }

    fn push(&mut self, idx: usize, f: f64, version: u32) {
        self.open.push(NodeRef {
            idx,
            f,
            seq: self.seq,
            version,
        });
        self.seq += 1;
    }
}
