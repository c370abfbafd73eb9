use grid_util::point::Point;
use maze_pathfinding::{find_path, PathingGrid, SearchResult, Strategy};
use std::collections::HashSet;

// Solves the 20x15 maze below from S to E with the strategy given as first argument
// (bfs, dijkstra or astar; astar by default) and prints the route as
//  - # an obstacle
//  - * a cell on the path
const MAZE: &str = "\
####################
#S...#.#.....#.#...#
#.##.#.#.###.#.###.#
#..#.......#.....#.#
##.#######.#####.#.#
#........#.........#
#.######.#########.#
#......#.......#...#
######.#######.#####
#....#.#...#.......#
#.##.#.#.###.#####.#
#..#.......#.....#.#
##.#######.#####.#.#
#........#........E#
####################";

fn main() -> SearchResult<()> {
    let strategy = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<Strategy>())
        .transpose()?
        .unwrap_or(Strategy::AStar);
    let grid: PathingGrid = MAZE.replace(&['S', 'E'][..], ".").parse()?;
    let start = Point::new(1, 1);
    let end = Point::new(18, 13);
    let outcome = find_path(&grid, start, end, strategy)?;
    if !outcome.reachable {
        println!("{} is not reachable from {}", end, start);
        return Ok(());
    }
    let on_path = outcome.path.iter().copied().collect::<HashSet<Point>>();
    for y in 0..grid.height() as i32 {
        let row = (0..grid.width() as i32)
            .map(|x| match Point::new(x, y) {
                p if p == start => 'S',
                p if p == end => 'E',
                p if on_path.contains(&p) => '*',
                _ if grid.is_open(x, y) => ' ',
                _ => '#',
            })
            .collect::<String>();
        println!("{}", row);
    }
    println!(
        "{}: {} steps, {} cells expanded",
        strategy,
        outcome.path.len() - 1,
        outcome.expanded
    );
    Ok(())
}
