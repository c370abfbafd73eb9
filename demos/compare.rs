use grid_util::point::Point;
use maze_pathfinding::{PathingGrid, Pathfinder, SearchResult};

// Runs all strategies in parallel on the grid
//  ______
// |S.#..|
// |..#..|
// |..#..|
// |.....|
// |..#.E|
//  ______
// and reports path length and search effort for each.

fn main() -> SearchResult<()> {
    let grid: PathingGrid = "..#..\n..#..\n..#..\n.....\n..#..".parse()?;
    println!("{}", grid);
    let pathfinder = Pathfinder::new(grid);
    let start = Point::new(0, 0);
    let end = Point::new(4, 4);
    for (strategy, result) in pathfinder.compare_strategies(start, end) {
        let outcome = result?;
        println!(
            "{:>8}: {} cells on path, {} expanded",
            strategy.to_string(),
            outcome.path.len(),
            outcome.expanded
        );
    }
    Ok(())
}
