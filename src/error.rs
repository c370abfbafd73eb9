use grid_util::point::Point;
use thiserror::Error;

/// Failures raised while building a [PathingGrid](crate::pathing_grid::PathingGrid) or
/// preparing a search. An unreachable goal is not an error, see
/// [SearchOutcome::reachable](crate::solver::SearchOutcome::reachable).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("{point} lies outside the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("{point} is a wall")]
    Blocked { point: Point },

    #[error("row {row} has {found} cells, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("unknown cell symbol {symbol:?} at row {row}, column {column}")]
    InvalidCell {
        row: usize,
        column: usize,
        symbol: char,
    },

    #[error("unknown search strategy {0:?}")]
    UnknownStrategy(String),

    #[error("search gave up after expanding {limit} cells")]
    ExpansionLimit { limit: usize },
}

pub type SearchResult<T> = Result<T, SearchError>;
