//! The rescaled grid and the audit record of applied corrections.

use boreas_grid::Grid;
use ndarray::ArrayD;

/// One centering offset actually applied: the field added to every cell
/// of one variable, member and month.
///
/// `member` is `None` when the offset was shared across members or the
/// simulation has no member dimension. The field has the simulation's
/// spatial shape; for a grid without spatial axes it is a single value of
/// shape `[]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CenteringOffset {
    variable: String,
    member: Option<String>,
    month: u8,
    field: ArrayD<f64>,
}

impl CenteringOffset {
    pub(crate) fn new(
        variable: String,
        member: Option<String>,
        month: u8,
        field: ArrayD<f64>,
    ) -> Self {
        Self {
            variable,
            member,
            month,
            field,
        }
    }

    /// Name of the corrected variable.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Label of the corrected member, if the correction was per-member.
    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// Calendar month (1..=12) the correction applies to.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The spatial field added to the simulation's cells.
    pub fn field(&self) -> &ArrayD<f64> {
        &self.field
    }
}

/// A rescaled simulation grid together with the offsets that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RescaleResult {
    grid: Grid,
    offsets: Vec<CenteringOffset>,
}

impl RescaleResult {
    pub(crate) fn new(grid: Grid, offsets: Vec<CenteringOffset>) -> Self {
        Self { grid, offsets }
    }

    /// The corrected simulation grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The applied offsets, sorted by variable position, member slot and
    /// calendar month.
    pub fn offsets(&self) -> &[CenteringOffset] {
        &self.offsets
    }

    /// Consumes the result, returning the corrected grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
