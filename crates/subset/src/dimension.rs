//! Index-level subsetting along a single named dimension.

use boreas_grid::{Dim, DropMode, Grid, SpatialCoords, SubsetOp, TimeAxis};
use tracing::warn;

use crate::common::select_time_steps;
use crate::error::SubsetError;

/// Restricts a grid to the zero-based `indices` along `dim`, keeping the
/// dimension even when a single index remains.
///
/// Metadata tied to the dimension follows the selection: variable entries
/// and per-variable dates for [`Dim::Variable`], member labels and
/// initialization dates for [`Dim::Member`], the date series for
/// [`Dim::Time`] and the coordinate vector for [`Dim::Lat`] / [`Dim::Lon`].
///
/// `None`, an empty slice, or a dimension the grid does not carry returns
/// the grid unchanged with a warning.
///
/// # Errors
///
/// Returns [`SubsetError::Grid`] for out-of-range indices, and for
/// spatial index lists that do not leave coordinates strictly increasing.
#[tracing::instrument(skip(grid))]
pub fn subset_dimension(
    grid: &Grid,
    dim: Dim,
    indices: Option<&[usize]>,
) -> Result<Grid, SubsetError> {
    let Some(indices) = indices else {
        warn!(dim = %dim, "no indices supplied, returning the grid unchanged");
        return Ok(grid.clone());
    };
    if indices.is_empty() {
        warn!(dim = %dim, "empty index list, returning the grid unchanged");
        return Ok(grid.clone());
    }
    if !grid.has_dim(dim) {
        warn!(dim = %dim, "grid does not carry this dimension, returning it unchanged");
        return Ok(grid.clone());
    }

    if dim == Dim::Time {
        return select_time_steps(grid, indices, SubsetOp::Dimension);
    }

    let array = grid.data().select(dim, indices, DropMode::Keep)?;
    let mut variables = grid.variables().to_vec();
    let mut coords = grid.coords().clone();
    let mut time = grid.time_axis().clone();
    let mut members = grid.members().map(<[String]>::to_vec);
    let mut init_dates = grid.init_dates().cloned();
    let mut provenance = *grid.provenance();

    match dim {
        Dim::Variable => {
            variables = indices.iter().map(|&i| variables[i].clone()).collect();
            if let TimeAxis::PerVariable(series) = &time {
                time = TimeAxis::PerVariable(indices.iter().map(|&i| series[i].clone()).collect());
            }
            provenance = provenance.with_variable(SubsetOp::Dimension);
        }
        Dim::Member => {
            if let Some(labels) = &members {
                members = Some(indices.iter().map(|&i| labels[i].clone()).collect());
            }
            init_dates = match init_dates {
                Some(init) => Some(init.select_members(indices)?),
                None => None,
            };
            provenance = provenance.with_members(SubsetOp::Dimension);
        }
        Dim::Lat => {
            let y: Vec<f64> = indices.iter().map(|&i| coords.y()[i]).collect();
            coords = SpatialCoords::new(coords.x().to_vec(), y)?;
            provenance = provenance.with_coords(SubsetOp::Dimension);
        }
        Dim::Lon => {
            let x: Vec<f64> = indices.iter().map(|&i| coords.x()[i]).collect();
            coords = SpatialCoords::new(x, coords.y().to_vec())?;
            provenance = provenance.with_coords(SubsetOp::Dimension);
        }
        Dim::Time => unreachable!("handled above"),
    }

    Ok(Grid::new(array, variables, coords, time, members, init_dates)?
        .with_provenance(provenance))
}
