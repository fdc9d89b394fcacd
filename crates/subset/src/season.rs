//! Subsetting along time by month of year.

use std::collections::BTreeSet;

use boreas_grid::{Grid, SubsetOp};
use tracing::warn;

use crate::common::{join_list, select_time_steps};
use crate::error::SubsetError;

/// Restricts a grid to the time steps falling in the given months.
///
/// Every requested month must belong to the season already spanned by the
/// axis; this subsetter narrows a season, it cannot extend one. The time
/// dimension is never dropped.
///
/// An empty `months` slice returns the grid unchanged with a warning.
///
/// # Errors
///
/// Returns [`SubsetError::InvalidSeason`] when a requested month is not
/// part of the grid's season.
#[tracing::instrument(skip(grid))]
pub fn subset_season(grid: &Grid, months: &[u8]) -> Result<Grid, SubsetError> {
    if months.is_empty() {
        warn!("no months requested, returning the grid unchanged");
        return Ok(grid.clone());
    }

    let season = grid.season()?;
    let requested: BTreeSet<u8> = months.iter().copied().collect();
    for &month in &requested {
        if !season.contains(month) {
            return Err(SubsetError::InvalidSeason {
                month,
                season: join_list(season.months()),
            });
        }
    }

    let axis_months = grid.months();
    let indices: Vec<usize> = axis_months
        .iter()
        .enumerate()
        .filter(|(_, month)| requested.contains(month))
        .map(|(index, _)| index)
        .collect();
    select_time_steps(grid, &indices, SubsetOp::Season)
}
