use grid_util::point::Point;

use crate::{frontier::FifoFrontier, solver::GridSolver};

/// Breadth-first search. Every step costs the same, so expanding cells in discovery order
/// finds a path with the fewest steps.
#[derive(Clone, Debug)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = FifoFrontier<i32>;

    fn name(&self) -> &'static str {
        "bfs"
    }

    fn frontier(&self) -> Self::Frontier {
        FifoFrontier::default()
    }

    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}
