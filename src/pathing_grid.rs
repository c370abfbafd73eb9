use crate::error::{SearchError, SearchResult};
use crate::NEIGHBOUR_OFFSETS;
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use std::str::FromStr;

/// [PathingGrid] is the read-only occupancy map searches run on. Occupied cells are stored as
/// [true] in the underlying [BoolGrid]. Connected components under 4-connectivity are
/// computed once with a [UnionFind] structure so that reachability can be answered without
/// flood-filling.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    grid: BoolGrid,
    components: UnionFind<usize>,
}

impl PathingGrid {
    /// Creates a `width` x `height` grid in which every cell is `blocked` or open.
    pub fn new(width: usize, height: usize, blocked: bool) -> SearchResult<PathingGrid> {
        if width == 0 || height == 0 {
            return Err(SearchError::EmptyGrid);
        }
        Ok(PathingGrid::from_bool_grid(BoolGrid::new(width, height, blocked)))
    }

    /// Builds a grid from rows of traversability flags where `0` is open and anything else is
    /// a wall. Rows are indexed by `y`, cells within a row by `x`.
    pub fn from_rows<R, T>(rows: &[R]) -> SearchResult<PathingGrid>
    where
        R: AsRef<[T]>,
        T: Copy + PartialEq + Default,
    {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(SearchError::EmptyGrid);
        }
        let mut grid = BoolGrid::new(width, height, false);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(SearchError::MalformedGrid {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, value) in row.iter().enumerate() {
                grid.set(x, y, *value != T::default());
            }
        }
        Ok(PathingGrid::from_bool_grid(grid))
    }

    /// Returns a copy of this grid with the given cells turned into walls. Points outside the
    /// grid are rejected.
    pub fn with_walls<I>(self, walls: I) -> SearchResult<PathingGrid>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut grid = self.grid;
        for p in walls {
            if !(p.x >= 0 && p.y >= 0 && grid.index_in_bounds(p.x as usize, p.y as usize)) {
                return Err(SearchError::OutOfBounds {
                    point: p,
                    width: grid.width(),
                    height: grid.height(),
                });
            }
            grid.set(p.x as usize, p.y as usize, true);
        }
        Ok(PathingGrid::from_bool_grid(grid))
    }

    fn from_bool_grid(grid: BoolGrid) -> PathingGrid {
        let mut pathing_grid = PathingGrid {
            components: UnionFind::new(0),
            grid,
        };
        pathing_grid.generate_components();
        pathing_grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }

    /// True if `(x, y)` is inside the grid and not a wall.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && !self.grid.get(x as usize, y as usize)
    }

    pub fn can_move_to(&self, pos: Point) -> bool {
        self.is_open(pos.x, pos.y)
    }

    /// Open 4-neighbours of `point` in the order up, right, down, left.
    pub fn neighbours(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        NEIGHBOUR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(move |p| self.can_move_to(*p))
    }

    /// Iterates over every open cell, row by row.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        let (w, h) = (self.width() as i32, self.height() as i32);
        (0..h)
            .flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
            .filter(move |p| self.can_move_to(*p))
    }

    /// Checks that `point` can serve as a start or goal: inside the grid and open.
    pub fn validate_endpoint(&self, point: &Point) -> SearchResult<()> {
        if !self.in_bounds(point.x, point.y) {
            return Err(SearchError::OutOfBounds {
                point: *point,
                width: self.width(),
                height: self.height(),
            });
        }
        if !self.can_move_to(*point) {
            return Err(SearchError::Blocked { point: *point });
        }
        Ok(())
    }

    fn get_ix_point(&self, point: &Point) -> usize {
        self.grid.get_ix(point.x as usize, point.y as usize)
    }

    /// Retrieves the component id a given [Point] belongs to, or [None] if it lies outside
    /// the grid.
    pub fn component(&self, point: &Point) -> Option<usize> {
        if self.in_bounds(point.x, point.y) {
            Some(self.components.find(self.get_ix_point(point)))
        } else {
            None
        }
    }

    /// Checks if start and goal are open and on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Links every open cell to its open right and lower neighbours, which covers each
    /// 4-connected edge exactly once.
    fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.width(),
            self.height()
        );
        let w = self.width() as i32;
        let h = self.height() as i32;
        self.components = UnionFind::new(self.width() * self.height());
        for x in 0..w {
            for y in 0..h {
                let point = Point::new(x, y);
                if !self.can_move_to(point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.can_move_to(p) {
                        let ix = self.get_ix_point(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

/// Parses the ASCII form used by tests and demos: `#` is a wall, `.` or a space is open, one
/// row per line. Leading and trailing empty lines are ignored. [SearchError::InvalidCell]
/// reports the line of the input the symbol is on, counting from zero.
impl FromStr for PathingGrid {
    type Err = SearchError;

    fn from_str(s: &str) -> SearchResult<PathingGrid> {
        let lines = s
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect::<Vec<_>>();
        let first = lines
            .iter()
            .position(|line| !line.is_empty())
            .unwrap_or(lines.len());
        let end = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(first, |ix| ix + 1);
        let mut rows = Vec::with_capacity(end - first);
        for (row, line) in lines.iter().enumerate().take(end).skip(first) {
            let cells = line
                .chars()
                .enumerate()
                .map(|(column, symbol)| match symbol {
                    '#' => Ok(1u8),
                    '.' | ' ' => Ok(0u8),
                    _ => Err(SearchError::InvalidCell {
                        row,
                        column,
                        symbol,
                    }),
                })
                .collect::<SearchResult<Vec<u8>>>()?;
            rows.push(cells);
        }
        PathingGrid::from_rows(&rows)
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let row = (0..self.width() as i32)
                .map(|x| if self.is_open(x, y) { '.' } else { '#' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
