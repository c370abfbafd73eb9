//! Generic best-first search loop shared by breadth-first search, Dijkstra and A*. The
//! expansion order is delegated to a [Frontier]; the loop records parents and costs in an
//! insertion-ordered map so nodes can be referred to by index.
use crate::error::{SearchError, SearchResult};
use crate::frontier::Frontier;
use crate::path::reconstruct;
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::{SaturatingAdd, Zero};
use std::hash::Hash;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Maps every discovered node to the index of its parent and its best known cost. The start
/// node is stored at index 0 with parent index [usize::MAX].
pub type PredecessorMap<N, C> = FxIndexMap<N, (usize, C)>;

pub(crate) const NO_PARENT: usize = usize::MAX;

/// Everything a single search produced: the predecessor and cost maps, the order in which
/// nodes were expanded and whether the goal was reached.
#[derive(Clone, Debug)]
pub struct SearchTree<N, C> {
    parents: PredecessorMap<N, C>,
    expansion_order: Vec<usize>,
    goal: Option<usize>,
}

impl<N, C> SearchTree<N, C>
where
    N: Eq + Hash + Clone,
    C: Copy,
{
    /// Whether the goal was popped from the frontier.
    pub fn reached(&self) -> bool {
        self.goal.is_some()
    }

    pub fn start(&self) -> Option<&N> {
        self.parents.get_index(0).map(|(node, _)| node)
    }

    pub fn goal(&self) -> Option<&N> {
        self.goal
            .and_then(|ix| self.parents.get_index(ix))
            .map(|(node, _)| node)
    }

    pub fn goal_cost(&self) -> Option<C> {
        self.goal
            .and_then(|ix| self.parents.get_index(ix))
            .map(|(_, &(_, cost))| cost)
    }

    /// Number of nodes taken off the frontier, the goal included.
    pub fn expanded(&self) -> usize {
        self.expansion_order.len()
    }

    /// Nodes in the order they were expanded.
    pub fn expansion_order(&self) -> impl Iterator<Item = &N> + '_ {
        self.expansion_order
            .iter()
            .filter_map(|&ix| self.parents.get_index(ix).map(|(node, _)| node))
    }

    /// Every node that was discovered, in discovery order.
    pub fn visited(&self) -> impl Iterator<Item = &N> + '_ {
        self.parents.keys()
    }

    pub fn predecessors(&self) -> &PredecessorMap<N, C> {
        &self.parents
    }

    pub fn parent(&self, node: &N) -> Option<&N> {
        let &(parent_ix, _) = self.parents.get(node)?;
        self.parents.get_index(parent_ix).map(|(parent, _)| parent)
    }

    pub fn cost(&self, node: &N) -> Option<C> {
        self.parents.get(node).map(|&(_, cost)| cost)
    }

    /// The route from start to goal, or [None] if the goal was never reached.
    pub fn path(&self) -> Option<Vec<N>> {
        let goal = self.goal()?;
        let start = self.start()?;
        reconstruct(&self.parents, start, goal)
    }
}

/// Expands nodes from `start` in the order given by `frontier` until `success` holds for a
/// popped node or the frontier runs dry. `heuristic` is added to the accumulated cost to form
/// the frontier priority; pass a constant zero for uninformed search. The priority saturates
/// instead of overflowing, so arbitrarily large estimates are allowed.
///
/// A node is re-queued when a cheaper route to it is found. Entries whose cost is worse than
/// the recorded one are skipped when popped.
pub fn best_first<N, C, FR, FN, IN, FH, FS>(
    start: &N,
    mut frontier: FR,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
) -> SearchResult<SearchTree<N, C>>
where
    N: Eq + Hash + Clone,
    C: Zero + SaturatingAdd + Ord + Copy,
    FR: Frontier<C>,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut parents: PredecessorMap<N, C> = FxIndexMap::default();
    parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
    frontier.push(0, Zero::zero(), heuristic(start));
    let mut expansion_order = Vec::new();
    let mut goal = None;

    while let Some((index, cost)) = frontier.pop() {
        let successors = {
            let Some((node, &(_, recorded))) = parents.get_index(index) else {
                continue;
            };
            // A node may sit in the frontier several times if a cheaper route was found after
            // it was first pushed. Only the entry matching the recorded cost is expanded.
            if cost > recorded {
                continue;
            }
            if let Some(limit) = max_expansions {
                if expansion_order.len() >= limit {
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }
            expansion_order.push(index);
            if success(node) {
                goal = Some(index);
                break;
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }
            frontier.push(n, new_cost, new_cost.saturating_add(&h));
        }
    }

    Ok(SearchTree {
        parents,
        expansion_order,
        goal,
    })
}
