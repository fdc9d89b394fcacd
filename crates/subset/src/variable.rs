//! Subsetting a multigrid by variable name.

use std::collections::BTreeSet;

use boreas_grid::{Dim, DropMode, Grid, SubsetOp, TimeAxis};
use tracing::warn;

use crate::error::SubsetError;

/// Restricts a multigrid to the named variables.
///
/// Matches are exact on the variable name and keep the grid's internal
/// variable order, whatever the order of `names`. Duplicate names count
/// once. When a single variable remains the variable dimension is dropped
/// and its date series becomes the shared time axis of the result.
///
/// A grid without a variable dimension, or an empty `names` slice, returns
/// the grid unchanged with a warning.
///
/// # Errors
///
/// Returns [`SubsetError::VariableNotFound`] when a requested name matches
/// no variable.
#[tracing::instrument(skip(grid))]
pub fn subset_variables(grid: &Grid, names: &[&str]) -> Result<Grid, SubsetError> {
    if names.is_empty() {
        warn!("no variable names requested, returning the grid unchanged");
        return Ok(grid.clone());
    }
    if !grid.has_dim(Dim::Variable) {
        warn!("grid has no 'var' dimension, returning it unchanged");
        return Ok(grid.clone());
    }

    let requested: BTreeSet<&str> = names.iter().copied().collect();
    for &name in &requested {
        if !grid.variables().iter().any(|v| v.name() == name) {
            return Err(SubsetError::VariableNotFound {
                name: name.to_string(),
                available: crate::common::join_list(grid.variables().iter().map(|v| v.name())),
            });
        }
    }

    // Positions in the grid's own variable order; a name shared by several
    // levels selects all of them.
    let positions: Vec<usize> = grid
        .variables()
        .iter()
        .enumerate()
        .filter(|(_, v)| requested.contains(v.name()))
        .map(|(position, _)| position)
        .collect();

    let array = grid
        .data()
        .select(Dim::Variable, &positions, DropMode::Drop)?;
    let variables = positions
        .iter()
        .map(|&p| grid.variables()[p].clone())
        .collect();
    // Grid::new rejects a shared axis on any grid with a variable
    // dimension, so the axis is per-variable here.
    let TimeAxis::PerVariable(series) = grid.time_axis() else {
        unreachable!("multigrid carries per-variable dates");
    };
    let time = if positions.len() > 1 {
        TimeAxis::PerVariable(positions.iter().map(|&p| series[p].clone()).collect())
    } else {
        TimeAxis::Shared(series[positions[0]].clone())
    };

    let provenance = grid.provenance().with_variable(SubsetOp::Variable);
    Ok(Grid::new(
        array,
        variables,
        grid.coords().clone(),
        time,
        grid.members().map(<[String]>::to_vec),
        grid.init_dates().cloned(),
    )?
    .with_provenance(provenance))
}
