//! Subsetting along time by assigned year.

use std::collections::BTreeSet;

use boreas_grid::{Grid, SubsetOp};
use tracing::warn;

use crate::common::{join_list, select_time_steps};
use crate::error::SubsetError;

/// Restricts a grid to the time steps whose assigned year is in `years`.
///
/// Years are matched against the assigned year of each step, so for a
/// year-crossing season the months before the year boundary count toward
/// the following year. The time dimension is never dropped, even when a
/// single step remains.
///
/// An empty `years` slice returns the grid unchanged with a warning.
///
/// # Errors
///
/// Returns [`SubsetError::NoYearMatch`] when no requested year occurs on
/// the axis, and [`SubsetError::YearOutOfRange`] when the request mixes
/// matching years with years outside the axis span.
#[tracing::instrument(skip(grid))]
pub fn subset_years(grid: &Grid, years: &[i32]) -> Result<Grid, SubsetError> {
    if years.is_empty() {
        warn!("no years requested, returning the grid unchanged");
        return Ok(grid.clone());
    }

    let assigned = grid.assigned_years()?;
    let available: BTreeSet<i32> = assigned.iter().copied().collect();
    let requested: BTreeSet<i32> = years.iter().copied().collect();

    if requested.intersection(&available).next().is_none() {
        return Err(SubsetError::NoYearMatch {
            requested: join_list(&requested),
            available: join_list(&available),
        });
    }
    let min = *available.iter().next().unwrap(); // safe: the time axis is non-empty
    let max = *available.iter().next_back().unwrap(); // safe: the time axis is non-empty
    if let Some(&year) = requested.iter().find(|&&y| y < min || y > max) {
        return Err(SubsetError::YearOutOfRange { year, min, max });
    }

    let indices: Vec<usize> = assigned
        .iter()
        .enumerate()
        .filter(|(_, year)| requested.contains(year))
        .map(|(index, _)| index)
        .collect();
    select_time_steps(grid, &indices, SubsetOp::Year)
}
