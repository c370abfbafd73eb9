//! # maze_pathfinding
//!
//! Shortest-path search on a static occupancy grid with three interchangeable strategies:
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//! Movement is restricted to the four axis-aligned neighbours and every step costs the same,
//! so all three strategies return paths of equal length; they differ in how many cells they
//! expand on the way. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_util::point::Point;
//! use maze_pathfinding::{find_path, PathingGrid, Strategy};
//!
//! let grid: PathingGrid = "...\n.#.\n...".parse().unwrap();
//! let outcome = find_path(&grid, Point::new(0, 0), Point::new(2, 2), Strategy::AStar).unwrap();
//! assert!(outcome.reachable);
//! assert_eq!(outcome.path.len(), 5);
//! ```
pub mod best_first;
pub mod error;
pub mod frontier;
pub mod path;
pub mod pathing_grid;
pub mod solver;

use grid_util::point::Point;
use log::info;
use rayon::prelude::*;

pub use crate::error::{SearchError, SearchResult};
pub use crate::pathing_grid::PathingGrid;
pub use crate::solver::{GridSearchTree, GridSolver, SearchConfig, SearchOutcome, Strategy};

/// Cost of a single step between 4-neighbours.
pub const STEP_COST: i32 = 1;

/// Neighbour offsets in expansion order: up, right, down, left. `y` grows downwards.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Runs `strategy` from `start` to `goal` and returns the whole search tree. The tree's
/// [reached](best_first::SearchTree::reached) flag tells whether the goal was found.
pub fn search(
    grid: &PathingGrid,
    start: Point,
    goal: Point,
    strategy: Strategy,
) -> SearchResult<GridSearchTree> {
    strategy.search_tree(grid, start, goal, &SearchConfig::default())
}

/// Computes the path from `start` to `goal` with the default [SearchConfig].
pub fn find_path(
    grid: &PathingGrid,
    start: Point,
    goal: Point,
    strategy: Strategy,
) -> SearchResult<SearchOutcome> {
    strategy.get_path_single_goal(grid, start, goal, &SearchConfig::default())
}

/// [Pathfinder] couples a [PathingGrid] with the [SearchConfig] used for every query on it.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    pub grid: PathingGrid,
    pub config: SearchConfig,
}

impl Pathfinder {
    pub fn new(grid: PathingGrid) -> Pathfinder {
        Pathfinder {
            grid,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(grid: PathingGrid, config: SearchConfig) -> Pathfinder {
        Pathfinder { grid, config }
    }

    pub fn search(
        &self,
        start: Point,
        goal: Point,
        strategy: Strategy,
    ) -> SearchResult<GridSearchTree> {
        strategy.search_tree(&self.grid, start, goal, &self.config)
    }

    pub fn find_path(
        &self,
        start: Point,
        goal: Point,
        strategy: Strategy,
    ) -> SearchResult<SearchOutcome> {
        strategy.get_path_single_goal(&self.grid, start, goal, &self.config)
    }

    /// Runs every [Strategy] on the shared grid in parallel. Results are returned in the order
    /// of [Strategy::ALL].
    pub fn compare_strategies(
        &self,
        start: Point,
        goal: Point,
    ) -> Vec<(Strategy, SearchResult<SearchOutcome>)> {
        info!("Comparing strategies from {} to {}", start, goal);
        Strategy::ALL
            .par_iter()
            .map(|&strategy| (strategy, self.find_path(start, goal, strategy)))
            .collect()
    }
}
