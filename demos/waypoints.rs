use grid_util::point::Point;
use maze_pathfinding::path::{path_to_waypoints, waypoints_to_path};
use maze_pathfinding::{PathingGrid, Pathfinder, SearchConfig, SearchResult, Strategy};

// Finds a path on a 10x10 grid with four 2x2 obstacles, prints the turning points and expands
// them again into the step-by-step route.

fn main() -> SearchResult<()> {
    let blocks = [(1, 1), (5, 0), (0, 5), (8, 8)];
    let walls = blocks
        .iter()
        .flat_map(|&(x, y)| [(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)])
        .map(|(x, y)| Point::new(x, y));
    let grid = PathingGrid::new(10, 10, false)?.with_walls(walls)?;
    let pathfinder = Pathfinder::with_config(
        grid,
        SearchConfig {
            max_expansions: Some(100),
            ..Default::default()
        },
    );
    let outcome = pathfinder.find_path(Point::new(0, 0), Point::new(7, 7), Strategy::AStar)?;
    let waypoints = path_to_waypoints(&outcome.path);
    println!("Waypoints: {:?}", waypoints);
    println!("Path:");
    for p in waypoints_to_path(waypoints) {
        println!("{:?}", p);
    }
    Ok(())
}
