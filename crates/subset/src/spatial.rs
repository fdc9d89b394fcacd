//! Spatial subsetting with nearest-neighbour bound snapping.

use boreas_grid::{Dim, DimArray, DropMode, Grid, SpatialCoords, SubsetOp};
use tracing::warn;

use crate::error::SubsetError;

/// Restricts a grid to a spatial window given in coordinate units.
///
/// Each axis takes either a single value or a two-value range. Values are
/// snapped to the nearest grid coordinate; a single value collapses the
/// axis to that point and drops the dimension, a range keeps every
/// coordinate between the two snapped endpoints and never drops, not even
/// when it covers a single column.
///
/// Bounds for an axis the grid does not carry are ignored with a warning,
/// and a call with neither axis set returns the grid unchanged.
///
/// # Errors
///
/// Returns [`SubsetError::InvalidBounds`] when a bounds slice has more
/// than two values, and [`SubsetError::BoundOutOfExtent`] when a value
/// falls outside the coordinate span of its axis.
#[tracing::instrument(skip(grid))]
pub fn subset_spatial(
    grid: &Grid,
    lon: Option<&[f64]>,
    lat: Option<&[f64]>,
) -> Result<Grid, SubsetError> {
    if lon.is_none() && lat.is_none() {
        warn!("no spatial bounds supplied, returning the grid unchanged");
        return Ok(grid.clone());
    }
    for (axis, bounds) in [(Dim::Lon, lon), (Dim::Lat, lat)] {
        if let Some(bounds) = bounds {
            if bounds.is_empty() || bounds.len() > 2 {
                return Err(SubsetError::InvalidBounds {
                    axis,
                    len: bounds.len(),
                });
            }
        }
    }

    let mut array = grid.data().clone();
    let mut x = grid.coords().x().to_vec();
    let mut y = grid.coords().y().to_vec();

    // One pass per axis; each pass looks its axis up afresh so the
    // latitude pass sees the rank left behind by the longitude pass.
    if let Some(bounds) = lon {
        if array.has_dim(Dim::Lon) {
            (x, array) = select_axis(&array, &x, Dim::Lon, bounds)?;
        } else {
            warn!("grid has no 'lon' dimension, longitude bounds ignored");
        }
    }
    if let Some(bounds) = lat {
        if array.has_dim(Dim::Lat) {
            (y, array) = select_axis(&array, &y, Dim::Lat, bounds)?;
        } else {
            warn!("grid has no 'lat' dimension, latitude bounds ignored");
        }
    }

    let provenance = grid.provenance().with_coords(SubsetOp::Spatial);
    Ok(Grid::new(
        array,
        grid.variables().to_vec(),
        SpatialCoords::new(x, y)?,
        grid.time_axis().clone(),
        grid.members().map(<[String]>::to_vec),
        grid.init_dates().cloned(),
    )?
    .with_provenance(provenance))
}

/// Applies one axis of the spatial window, returning the surviving
/// coordinates and the narrowed array.
fn select_axis(
    array: &DimArray,
    coords: &[f64],
    axis: Dim,
    bounds: &[f64],
) -> Result<(Vec<f64>, DimArray), SubsetError> {
    // Coordinates are non-empty whenever the axis exists. NaN bounds fail
    // the extent check rather than snapping somewhere arbitrary.
    let min = coords[0];
    let max = coords[coords.len() - 1];
    for &bound in bounds {
        if bound.is_nan() || bound < min || bound > max {
            return Err(SubsetError::BoundOutOfExtent {
                axis,
                bound,
                min,
                max,
            });
        }
    }

    if bounds.len() == 1 {
        let index = nearest_index(coords, bounds[0]);
        let narrowed = array.select(axis, &[index], DropMode::Drop)?;
        Ok((vec![coords[index]], narrowed))
    } else {
        let first = nearest_index(coords, bounds[0]);
        let second = nearest_index(coords, bounds[1]);
        let (lo, hi) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };
        let indices: Vec<usize> = (lo..=hi).collect();
        let narrowed = array.select(axis, &indices, DropMode::Keep)?;
        Ok((coords[lo..=hi].to_vec(), narrowed))
    }
}

/// Index of the coordinate closest to `target`; ties go to the lower
/// index.
fn nearest_index(coords: &[f64], target: f64) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, &coord) in coords.iter().enumerate() {
        let distance = (coord - target).abs();
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}
