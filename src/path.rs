//! Turning search results into routes a renderer can follow.
use crate::best_first::{PredecessorMap, NO_PARENT};
use crate::pathing_grid::PathingGrid;
use grid_util::point::Point;
use itertools::Itertools;
use std::hash::Hash;

/// Walks the predecessor links from `goal` back to the root of the map and returns the route
/// from `start` to `goal`, both inclusive.
///
/// Returns [None] if `goal` was never discovered or if the chain of parents does not end at
/// `start`. Absent entries are never filled in with a default, so an unreachable goal cannot
/// produce a truncated route.
pub fn reconstruct<N, C>(predecessors: &PredecessorMap<N, C>, start: &N, goal: &N) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
{
    let goal_ix = predecessors.get_index_of(goal)?;
    let mut path = std::iter::successors(Some(goal_ix), |&ix| {
        predecessors
            .get_index(ix)
            .map(|(_, &(parent, _))| parent)
            .filter(|&parent| parent != NO_PARENT)
    })
    // A well-formed map has no cycles; this bound keeps a corrupted one from looping forever.
    .take(predecessors.len())
    .filter_map(|ix| predecessors.get_index(ix).map(|(node, _)| node.clone()))
    .collect::<Vec<N>>();
    path.reverse();
    if path.first() == Some(start) {
        Some(path)
    } else {
        None
    }
}

/// Turns waypoints into a path on the grid which can be followed step by step. Consecutive
/// waypoints are joined by moving along the x axis first, then along the y axis.
pub fn waypoints_to_path(waypoints: Vec<Point>) -> Vec<Point> {
    let mut waypoints = waypoints.into_iter();
    let Some(mut current) = waypoints.next() else {
        return Vec::new();
    };
    let mut path = vec![current];
    for next in waypoints {
        while current != next {
            current = if current.x != next.x {
                Point::new(current.x + (next.x - current.x).signum(), current.y)
            } else {
                Point::new(current.x, current.y + (next.y - current.y).signum())
            };
            path.push(current);
        }
    }
    path
}

/// Compresses a unit-step path into its endpoints and the cells where it changes direction.
pub fn path_to_waypoints(path: &[Point]) -> Vec<Point> {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return Vec::new();
    };
    let mut waypoints = vec![*first];
    waypoints.extend(
        path.iter()
            .tuple_windows()
            .filter(|(a, b, c)| (b.x - a.x, b.y - a.y) != (c.x - b.x, c.y - b.y))
            .map(|(_, b, _)| *b),
    );
    if path.len() > 1 {
        waypoints.push(*last);
    }
    waypoints
}

/// Number of unit steps along `path`.
pub fn path_cost(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}

/// Checks that every cell of `path` is open and that consecutive cells are 4-neighbours.
pub fn is_valid_path(grid: &PathingGrid, path: &[Point]) -> bool {
    path.iter().all(|p| grid.can_move_to(*p))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| (a.x - b.x).abs() + (a.y - b.y).abs() == 1)
}
