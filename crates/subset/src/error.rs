//! Error types for the boreas-subset crate.

use boreas_grid::{Dim, GridError};

/// Error type for all fallible subsetting operations.
///
/// Semantic query failures get their own variants; index-level and
/// rebuild failures from the grid layer pass through transparently.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubsetError {
    /// Returned when a requested variable name is absent from the grid.
    #[error("variable '{name}' not found (available: {available})")]
    VariableNotFound {
        /// The missing variable name.
        name: String,
        /// Comma-separated names present in the grid.
        available: String,
    },

    /// Returned when a requested member position is outside the valid range.
    #[error("member position {position} out of range 1..={count}")]
    MemberOutOfBounds {
        /// The offending one-based position.
        position: usize,
        /// The number of members in the grid.
        count: usize,
    },

    /// Returned when none of the requested years are present in the grid.
    #[error("requested years [{requested}] have no overlap with available years [{available}]")]
    NoYearMatch {
        /// Comma-separated requested years.
        requested: String,
        /// Comma-separated available assigned years.
        available: String,
    },

    /// Returned when a requested year falls outside the available period.
    #[error("year {year} outside the available period {min}..={max}")]
    YearOutOfRange {
        /// The offending year.
        year: i32,
        /// First available assigned year.
        min: i32,
        /// Last available assigned year.
        max: i32,
    },

    /// Returned when a requested month is not part of the grid's season.
    #[error("month {month} is not part of the grid season [{season}]")]
    InvalidSeason {
        /// The offending month.
        month: u8,
        /// Comma-separated months of the grid's season.
        season: String,
    },

    /// Returned when a spatial bound is not a scalar or a 2-element range.
    #[error("'{axis}' bounds must hold one or two values, got {len}")]
    InvalidBounds {
        /// The spatial axis being bounded.
        axis: Dim,
        /// Number of values supplied.
        len: usize,
    },

    /// Returned when a spatial bound falls outside the coordinate extent.
    #[error("'{axis}' bound {bound} outside the grid extent {min}..{max}")]
    BoundOutOfExtent {
        /// The spatial axis being bounded.
        axis: Dim,
        /// The offending bound value.
        bound: f64,
        /// Westernmost or southernmost coordinate.
        min: f64,
        /// Easternmost or northernmost coordinate.
        max: f64,
    },

    /// A slicing or rebuild step in the grid layer failed.
    #[error(transparent)]
    Grid(#[from] GridError),
}
