use grid_util::point::Point;

use crate::{frontier::PriorityFrontier, solver::GridSolver, STEP_COST};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Multiplier on the Manhattan estimate. At 1.0 the heuristic is admissible and paths are
    /// optimal; larger values expand fewer cells but may return longer paths.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

/// Lower bound on the number of 4-directional unit steps between two cells.
pub fn manhattan_distance(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

impl GridSolver for AstarSolver {
    type Frontier = PriorityFrontier<i32>;

    fn name(&self) -> &'static str {
        "astar"
    }

    fn frontier(&self) -> Self::Frontier {
        PriorityFrontier::default()
    }

    /// Just the Manhattan cost times a heuristic factor.
    fn heuristic(&self, point: &Point, goal: &Point) -> i32 {
        ((manhattan_distance(point, goal) * STEP_COST) as f32 * self.heuristic_factor) as i32
    }
}
