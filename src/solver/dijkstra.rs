use grid_util::point::Point;

use crate::{frontier::PriorityFrontier, solver::GridSolver};

#[derive(Clone, Debug)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Frontier = PriorityFrontier<i32>;

    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn frontier(&self) -> Self::Frontier {
        PriorityFrontier::default()
    }

    /// Uniform-cost search has no estimate of the remaining distance.
    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}
