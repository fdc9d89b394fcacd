//! Shared helpers for subsetting along the time axis.

use boreas_grid::{Dim, DropMode, Grid, InitDates, SubsetOp};

use crate::error::SubsetError;

/// Formats values as a comma-separated list for error messages.
pub(crate) fn join_list<T: std::fmt::Display>(values: impl IntoIterator<Item = T>) -> String {
    let parts: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    parts.join(",")
}

fn distinct_in_order(values: &[i32]) -> Vec<i32> {
    let mut out = Vec::new();
    for &value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Rebuilds a grid with the given time steps, never dropping the time
/// dimension, and re-slices dates and lagged initialization dates in
/// lockstep.
///
/// `op` is recorded as the provenance of the date metadata.
pub(crate) fn select_time_steps(
    grid: &Grid,
    indices: &[usize],
    op: SubsetOp,
) -> Result<Grid, SubsetError> {
    let array = grid.data().select(Dim::Time, indices, DropMode::Keep)?;
    let time = grid.time_axis().select(indices)?;

    // Lagged initialization dates are sub-indexed by assigned year; they
    // must follow the years surviving the selection.
    let init_dates = match grid.init_dates() {
        Some(init @ InitDates::Lagged(_)) => {
            let assigned = grid.assigned_years()?;
            let old_unique = distinct_in_order(&assigned);
            let surviving: Vec<i32> = indices.iter().map(|&i| assigned[i]).collect();
            let mut positions = Vec::new();
            for year in distinct_in_order(&surviving) {
                if let Some(position) = old_unique.iter().position(|&y| y == year) {
                    positions.push(position);
                }
            }
            Some(init.select_year_positions(&positions)?)
        }
        Some(flat) => Some(flat.clone()),
        None => None,
    };

    let provenance = grid.provenance().with_dates(op);
    Ok(Grid::new(
        array,
        grid.variables().to_vec(),
        grid.coords().clone(),
        time,
        grid.members().map(<[String]>::to_vec),
        init_dates,
    )?
    .with_provenance(provenance))
}
