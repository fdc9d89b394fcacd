//! Error types for the boreas-grid crate.

use chrono::NaiveDateTime;

use crate::dim::Dim;

/// Error type for grid construction, validation, and slicing.
///
/// Construction errors report the first violated invariant between the data
/// array and its auxiliary structures; slicing errors report invalid index
/// or dimension arguments.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Returned when the dimension-tag list length differs from the array rank.
    #[error("dimension tag count {tags} does not match array rank {rank}")]
    RankMismatch {
        /// Rank of the data array.
        rank: usize,
        /// Number of dimension tags provided.
        tags: usize,
    },

    /// Returned when dimension tags repeat or break the canonical
    /// var < member < time < lat < lon order.
    #[error("dimension tags [{dims}] are not in canonical order")]
    DimensionOrder {
        /// The offending tag list.
        dims: String,
    },

    /// Returned when an array axis has zero length.
    #[error("dimension '{dim}' has zero length")]
    EmptyDimension {
        /// The empty dimension.
        dim: Dim,
    },

    /// Returned when an operation targets a dimension the array does not have.
    #[error("array has no '{dim}' dimension")]
    DimensionAbsent {
        /// The missing dimension.
        dim: Dim,
    },

    /// Returned when a selection along a dimension is given no indices.
    #[error("empty index selection along dimension '{dim}'")]
    EmptySelection {
        /// The dimension being selected.
        dim: Dim,
    },

    /// Returned when a selection index exceeds the dimension size.
    #[error("index {index} out of bounds for dimension '{dim}' of size {size}")]
    IndexOutOfBounds {
        /// The dimension being selected.
        dim: Dim,
        /// The offending zero-based index.
        index: usize,
        /// The size of the dimension.
        size: usize,
    },

    /// Returned when a grid is built without a time dimension.
    #[error("grid must have a 'time' dimension")]
    MissingTimeDimension,

    /// Returned when the variable metadata count disagrees with the grid shape.
    #[error("variable metadata count {variables} does not match expected {expected}")]
    VariableCount {
        /// Number of variable records provided.
        variables: usize,
        /// Expected count (the variable dimension size, or 1 without one).
        expected: usize,
    },

    /// Returned when a grid with a variable dimension carries a single shared
    /// date series instead of one series per variable.
    #[error("grid has a 'var' dimension but a single shared date series")]
    SharedDatesWithVariables,

    /// Returned when a grid without a variable dimension carries per-variable
    /// date series.
    #[error("grid has per-variable date series but no 'var' dimension")]
    PerVariableDatesWithoutVariables,

    /// Returned when the number of per-variable date series disagrees with
    /// the variable count.
    #[error("date series count {series} does not match variable count {variables}")]
    DateSeriesCount {
        /// Number of date series provided.
        series: usize,
        /// Number of variables.
        variables: usize,
    },

    /// Returned when a date series length disagrees with the time dimension.
    #[error("date series length {len} does not match time dimension size {steps}")]
    DateLength {
        /// Length of the date series.
        len: usize,
        /// Size of the time dimension.
        steps: usize,
    },

    /// Returned when a time step's start timestamp is after its end timestamp.
    #[error("time bounds start {start} is after end {end}")]
    InvalidTimeBounds {
        /// Start of the time step.
        start: NaiveDateTime,
        /// End of the time step.
        end: NaiveDateTime,
    },

    /// Returned when a coordinate vector is not strictly increasing.
    #[error("'{axis}' coordinates must be strictly increasing")]
    NonMonotonicCoords {
        /// The offending spatial axis.
        axis: Dim,
    },

    /// Returned when a coordinate vector length disagrees with its dimension.
    #[error("'{axis}' coordinate count {len} does not match dimension size {size}")]
    CoordLength {
        /// The spatial axis.
        axis: Dim,
        /// Length of the coordinate vector.
        len: usize,
        /// Size of the matching dimension.
        size: usize,
    },

    /// Returned when more than one coordinate is supplied for a spatial axis
    /// the grid does not have.
    #[error("{len} '{axis}' coordinates supplied but grid has no '{axis}' dimension")]
    CoordWithoutDim {
        /// The spatial axis.
        axis: Dim,
        /// Length of the coordinate vector.
        len: usize,
    },

    /// Returned when the member label count disagrees with the member
    /// dimension size.
    #[error("member label count {members} does not match member dimension size {size}")]
    MemberCount {
        /// Number of member labels provided.
        members: usize,
        /// Size of the member dimension.
        size: usize,
    },

    /// Returned when a grid has a member dimension but no member labels.
    #[error("grid has a 'member' dimension but no member labels")]
    MissingMemberLabels,

    /// Returned when member labels are supplied for a grid without a member
    /// dimension.
    #[error("{members} member labels supplied but grid has no 'member' dimension")]
    MemberLabelsWithoutDim {
        /// Number of member labels provided.
        members: usize,
    },

    /// Returned when initialization dates are supplied without member labels.
    #[error("initialization dates supplied but grid has no members")]
    InitDatesWithoutMembers,

    /// Returned when the initialization date count disagrees with the member
    /// count.
    #[error("initialization date count {entries} does not match member count {members}")]
    InitDateCount {
        /// Number of initialization date entries (outer list for lagged ensembles).
        entries: usize,
        /// Number of members.
        members: usize,
    },

    /// Returned when a lagged member's initialization date list length
    /// disagrees with the number of years on the time axis.
    #[error(
        "lagged initialization dates for member {member} have length {len}, expected {expected} (one per year)"
    )]
    LaggedInitLength {
        /// Zero-based member position.
        member: usize,
        /// Length of that member's initialization date list.
        len: usize,
        /// Expected length (number of distinct assigned years).
        expected: usize,
    },

    /// Returned when a flattened-space matrix cannot be folded back into the
    /// requested array shape.
    #[error("matrix holds {len} values but the target shape holds {expected}")]
    MatrixShape {
        /// Number of matrix elements.
        len: usize,
        /// Product of the requested shape.
        expected: usize,
    },

    /// A season or year-labeling computation on the time axis failed.
    #[error(transparent)]
    Calendar(#[from] boreas_calendar::CalendarError),
}
