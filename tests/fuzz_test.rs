/// Fuzzes the search strategies on many random grids: a path must be found exactly when start
/// and goal share a connected component, and all strategies must agree on its length.
use grid_util::point::Point;
use maze_pathfinding::{
    path::is_valid_path, PathingGrid, Pathfinder, SearchConfig, SearchOutcome, Strategy,
};
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng, keep_open: &[Point]) -> PathingGrid {
    let rows = (0..h as i32)
        .map(|y| {
            (0..w as i32)
                .map(|x| {
                    let blocked = rng.gen_bool(0.4) && !keep_open.contains(&Point::new(x, y));
                    blocked as u8
                })
                .collect::<Vec<u8>>()
        })
        .collect::<Vec<_>>();
    PathingGrid::from_rows(&rows).unwrap()
}

fn visualize_grid(grid: &PathingGrid, start: &Point, end: &Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if !grid.is_open(x, y) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn outcomes(pathfinder: &Pathfinder, start: Point, end: Point) -> Vec<SearchOutcome> {
    Strategy::ALL
        .iter()
        .map(|&strategy| pathfinder.find_path(start, end, strategy).unwrap())
        .collect()
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for check_components in [false, true] {
        let config = SearchConfig {
            check_components,
            ..Default::default()
        };
        for _ in 0..N_GRIDS {
            let grid = random_grid(N, N, &mut rng, &[start, end]);
            let reachable = grid.reachable(&start, &end);
            let pathfinder = Pathfinder::with_config(grid, config);
            let results = outcomes(&pathfinder, start, end);
            // Show the grid if the strategies disagree with the components
            if results.iter().any(|o| o.reachable != reachable) {
                visualize_grid(&pathfinder.grid, &start, &end);
            }
            for outcome in &results {
                assert_eq!(outcome.reachable, reachable);
                if reachable {
                    assert_eq!(outcome.path.first(), Some(&start));
                    assert_eq!(outcome.path.last(), Some(&end));
                    assert!(is_valid_path(&pathfinder.grid, &outcome.path));
                } else {
                    assert!(outcome.path.is_empty());
                }
            }
            let lengths = results.iter().map(|o| o.path.len()).collect::<Vec<_>>();
            assert!(lengths.iter().all(|l| *l == lengths[0]), "{lengths:?}");
        }
    }
}

/// A* with the Manhattan heuristic never expands more cells than Dijkstra on a 4-grid.
#[test]
fn fuzz_expansions() {
    const N: usize = 12;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let grid = random_grid(N, N, &mut rng, &[start, end]);
        if grid.unreachable(&start, &end) {
            continue;
        }
        let pathfinder = Pathfinder::new(grid);
        let results = outcomes(&pathfinder, start, end);
        let (dijkstra, astar) = (&results[1], &results[2]);
        assert!(astar.expanded <= dijkstra.expanded);
        assert_eq!(astar.path.len(), dijkstra.path.len());
    }
}

/// Searching twice with the same inputs gives the same path and expansion order.
#[test]
fn fuzz_determinism() {
    const N: usize = 8;
    let mut rng = StdRng::seed_from_u64(2);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, 0);
    for _ in 0..200 {
        let grid = random_grid(N, N, &mut rng, &[start, end]);
        let pathfinder = Pathfinder::new(grid);
        for strategy in Strategy::ALL {
            let first = pathfinder.search(start, end, strategy).unwrap();
            let second = pathfinder.search(start, end, strategy).unwrap();
            assert_eq!(first.path(), second.path());
            assert!(first.expansion_order().eq(second.expansion_order()));
        }
    }
}
