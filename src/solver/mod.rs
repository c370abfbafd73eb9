use crate::best_first::{best_first, SearchTree};
use crate::error::{SearchError, SearchResult};
use crate::frontier::Frontier;
use crate::pathing_grid::PathingGrid;
use crate::STEP_COST;
use core::fmt;
use grid_util::point::Point;
use log::{debug, info, warn};
use std::str::FromStr;

pub mod astar;
pub mod bfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use dijkstra::DijkstraSolver;

/// Search tree over grid cells with integer step costs.
pub type GridSearchTree = SearchTree<Point, i32>;

/// Per-call search settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Abort with [SearchError::ExpansionLimit] after this many expansions.
    pub max_expansions: Option<usize>,
    /// Consult the grid's connected components before searching, so that unreachable goals
    /// are reported without flood-filling the start's component.
    pub check_components: bool,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            max_expansions: None,
            check_components: true,
        }
    }
}

/// What a caller (typically a renderer) gets back from a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Start-to-goal route, both inclusive. Empty when the goal is unreachable.
    pub path: Vec<Point>,
    pub reachable: bool,
    /// Number of cells taken off the frontier before the search stopped.
    pub expanded: usize,
}

impl SearchOutcome {
    fn unreachable(expanded: usize) -> SearchOutcome {
        SearchOutcome {
            path: Vec::new(),
            reachable: false,
            expanded,
        }
    }

    /// Number of unit steps on the path, if there is one.
    pub fn cost(&self) -> Option<usize> {
        if self.reachable {
            Some(crate::path::path_cost(&self.path))
        } else {
            None
        }
    }
}

pub trait GridSolver {
    type Frontier: Frontier<i32>;

    fn name(&self) -> &'static str;

    /// A fresh, empty frontier for one search.
    fn frontier(&self) -> Self::Frontier;

    /// Estimate of the remaining cost from `point` to `goal`. Zero for uninformed search.
    fn heuristic(&self, point: &Point, goal: &Point) -> i32;

    /// Runs the search and returns the full tree, including the expansion order. Start and
    /// goal must be open cells inside the grid.
    fn search_tree(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
        config: &SearchConfig,
    ) -> SearchResult<GridSearchTree> {
        grid.validate_endpoint(&start)?;
        grid.validate_endpoint(&goal)?;
        let tree = best_first(
            &start,
            self.frontier(),
            |node| grid.neighbours(*node).map(|p| (p, STEP_COST)),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
            config.max_expansions,
        )?;
        debug!(
            "{}: expanded {} and discovered {} cells between {} and {}",
            self.name(),
            tree.expanded(),
            tree.visited().count(),
            start,
            goal
        );
        Ok(tree)
    }

    /// Computes the path from start to goal. An unreachable goal is reported through
    /// [SearchOutcome::reachable] with an empty path.
    fn get_path_single_goal(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
        config: &SearchConfig,
    ) -> SearchResult<SearchOutcome> {
        if config.check_components {
            // Walls and outside points are never on a component, so reject them first.
            grid.validate_endpoint(&start)?;
            grid.validate_endpoint(&goal)?;
            // Check if start and goal are on the same connected component.
            if grid.unreachable(&start, &goal) {
                info!("{} is not reachable from {}", goal, start);
                return Ok(SearchOutcome::unreachable(0));
            }
        }
        info!("{}: computing path from {} to {}", self.name(), start, goal);
        let tree = self.search_tree(grid, start, goal, config)?;
        match tree.path() {
            Some(path) => Ok(SearchOutcome {
                path,
                reachable: true,
                expanded: tree.expanded(),
            }),
            None => {
                if config.check_components {
                    warn!("Reachable goal could not be pathed to, are the components correct?");
                }
                Ok(SearchOutcome::unreachable(tree.expanded()))
            }
        }
    }
}

/// Selects one of the three solvers at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    Dijkstra,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::BreadthFirst, Strategy::Dijkstra, Strategy::AStar];

    pub fn search_tree(
        self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
        config: &SearchConfig,
    ) -> SearchResult<GridSearchTree> {
        match self {
            Strategy::BreadthFirst => BfsSolver.search_tree(grid, start, goal, config),
            Strategy::Dijkstra => DijkstraSolver.search_tree(grid, start, goal, config),
            Strategy::AStar => AstarSolver::new().search_tree(grid, start, goal, config),
        }
    }

    pub fn get_path_single_goal(
        self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
        config: &SearchConfig,
    ) -> SearchResult<SearchOutcome> {
        match self {
            Strategy::BreadthFirst => BfsSolver.get_path_single_goal(grid, start, goal, config),
            Strategy::Dijkstra => DijkstraSolver.get_path_single_goal(grid, start, goal, config),
            Strategy::AStar => AstarSolver::new().get_path_single_goal(grid, start, goal, config),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::BreadthFirst => BfsSolver.name(),
            Strategy::Dijkstra => DijkstraSolver.name(),
            Strategy::AStar => AstarSolver::new().name(),
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> SearchResult<Strategy> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dijkstra" => Ok(Strategy::Dijkstra),
            "astar" | "a*" => Ok(Strategy::AStar),
            _ => Err(SearchError::UnknownStrategy(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::is_valid_path;

    // |..#..|
    // |.S#..|
    // |..#..|
    // |...G.|  gap at (2, 3)
    // |..#..|
    const GAP_GRID: &str = "..#..\n..#..\n..#..\n.....\n..#..";

    fn gap_grid() -> PathingGrid {
        GAP_GRID.parse().unwrap()
    }

    #[test]
    fn strategies_agree_on_gap_grid() {
        let grid = gap_grid();
        let config = SearchConfig::default();
        let expected = vec![
            Point::new(1, 1),
            Point::new(1, 2),
            Point::new(1, 3),
            Point::new(2, 3),
            Point::new(3, 3),
        ];
        for strategy in Strategy::ALL {
            let outcome = strategy
                .get_path_single_goal(&grid, Point::new(1, 1), Point::new(3, 3), &config)
                .unwrap();
            assert!(outcome.reachable);
            assert_eq!(outcome.path, expected, "{strategy}");
            assert_eq!(outcome.cost(), Some(4));
            assert!(is_valid_path(&grid, &outcome.path));
        }
    }

    /// Heuristic guidance heads straight for the gap while BFS floods the left half.
    #[test]
    fn astar_expands_fewer_cells_than_bfs() {
        let grid = gap_grid();
        let config = SearchConfig::default();
        let start = Point::new(1, 1);
        let goal = Point::new(3, 3);
        let bfs = Strategy::BreadthFirst
            .search_tree(&grid, start, goal, &config)
            .unwrap();
        let astar = Strategy::AStar
            .search_tree(&grid, start, goal, &config)
            .unwrap();
        assert_eq!(bfs.expanded(), 11);
        assert_eq!(astar.expanded(), 5);
        assert!(astar.expanded() < bfs.expanded());
        assert!(astar.visited().count() < bfs.visited().count());
    }

    #[test]
    fn bfs_expansion_order_is_up_right_down_left() {
        let grid = PathingGrid::new(3, 3, false).unwrap();
        let tree = BfsSolver
            .search_tree(
                &grid,
                Point::new(1, 1),
                Point::new(2, 2),
                &SearchConfig::default(),
            )
            .unwrap();
        let order = tree.expansion_order().take(5).copied().collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                Point::new(1, 1),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1)
            ]
        );
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        // |.....|
        // |.###.|
        // |.#G#.|
        // |.###.|
        let grid: PathingGrid = ".....\n.###.\n.#.#.\n.###.".parse().unwrap();
        for check_components in [false, true] {
            let config = SearchConfig {
                check_components,
                ..Default::default()
            };
            for strategy in Strategy::ALL {
                let outcome = strategy
                    .get_path_single_goal(&grid, Point::new(0, 0), Point::new(2, 2), &config)
                    .unwrap();
                assert!(!outcome.reachable);
                assert!(outcome.path.is_empty());
                assert_eq!(outcome.cost(), None);
                if check_components {
                    assert_eq!(outcome.expanded, 0);
                } else {
                    // every cell of the outer ring gets expanded
                    assert_eq!(outcome.expanded, 11);
                }
            }
        }
    }

    #[test]
    fn start_equals_goal() {
        let grid = gap_grid();
        for strategy in Strategy::ALL {
            let outcome = strategy
                .get_path_single_goal(
                    &grid,
                    Point::new(4, 4),
                    Point::new(4, 4),
                    &SearchConfig::default(),
                )
                .unwrap();
            assert!(outcome.reachable);
            assert_eq!(outcome.path, vec![Point::new(4, 4)]);
            assert_eq!(outcome.expanded, 1);
        }
    }

    #[test]
    fn invalid_endpoints_fail_fast() {
        let grid = gap_grid();
        let config = SearchConfig::default();
        for strategy in Strategy::ALL {
            assert_eq!(
                strategy
                    .get_path_single_goal(&grid, Point::new(2, 0), Point::new(3, 3), &config)
                    .unwrap_err(),
                SearchError::Blocked {
                    point: Point::new(2, 0)
                }
            );
            assert_eq!(
                strategy
                    .search_tree(&grid, Point::new(0, 0), Point::new(5, 0), &config)
                    .unwrap_err(),
                SearchError::OutOfBounds {
                    point: Point::new(5, 0),
                    width: 5,
                    height: 5
                }
            );
        }
    }

    /// Endpoint errors do not depend on the component pre-check.
    #[test]
    fn invalid_endpoints_without_component_check() {
        let grid = gap_grid();
        let config = SearchConfig {
            check_components: false,
            ..Default::default()
        };
        for strategy in Strategy::ALL {
            assert_eq!(
                strategy
                    .get_path_single_goal(&grid, Point::new(1, 1), Point::new(2, 1), &config)
                    .unwrap_err(),
                SearchError::Blocked {
                    point: Point::new(2, 1)
                }
            );
            assert!(matches!(
                strategy.get_path_single_goal(&grid, Point::new(-1, 0), Point::new(3, 3), &config),
                Err(SearchError::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn expansion_limit() {
        let grid = gap_grid();
        let start = Point::new(1, 1);
        let goal = Point::new(3, 3);
        let tight = SearchConfig {
            max_expansions: Some(5),
            ..Default::default()
        };
        assert!(Strategy::AStar
            .get_path_single_goal(&grid, start, goal, &tight)
            .unwrap()
            .reachable);
        assert_eq!(
            Strategy::BreadthFirst
                .get_path_single_goal(&grid, start, goal, &tight)
                .unwrap_err(),
            SearchError::ExpansionLimit { limit: 5 }
        );
    }

    #[test]
    fn repeated_searches_are_identical() {
        let grid = PathingGrid::new(6, 6, false).unwrap();
        let config = SearchConfig::default();
        for strategy in Strategy::ALL {
            let first = strategy
                .get_path_single_goal(&grid, Point::new(0, 0), Point::new(5, 5), &config)
                .unwrap();
            let second = strategy
                .get_path_single_goal(&grid, Point::new(0, 0), Point::new(5, 5), &config)
                .unwrap();
            assert_eq!(first, second);
            assert_eq!(first.cost(), Some(10));
        }
    }

    #[test]
    fn parse_strategy() {
        assert_eq!("BFS".parse::<Strategy>().unwrap(), Strategy::BreadthFirst);
        assert_eq!("dijkstra".parse::<Strategy>().unwrap(), Strategy::Dijkstra);
        assert_eq!("a*".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!(
            "greedy".parse::<Strategy>().unwrap_err(),
            SearchError::UnknownStrategy("greedy".to_owned())
        );
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }
}
