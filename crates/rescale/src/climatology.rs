//! Monthly climatology fields, computed by repeated subsetting.

use std::collections::BTreeMap;

use boreas_grid::{Dim, Grid, flatten_space};
use boreas_stats::column_nan_means;
use boreas_subset::{SubsetQuery, subset};
use ndarray::Array1;

use crate::error::RescaleError;

/// Addresses one centering offset: variable position in the simulation's
/// order, member slot (`None` when shared across members), calendar month.
pub(crate) type OffsetKey = (usize, Option<usize>, u8);

/// Mean spatial field of one variable and month, pooling the time axis
/// and any member axis. NaN cells are skipped; an all-NaN cell stays NaN.
fn pooled_field(grid: &Grid, name: &str, month: u8) -> Result<Array1<f64>, RescaleError> {
    let narrowed = subset(
        grid,
        &SubsetQuery::new().with_variables([name]).with_season([month]),
    )?;
    Ok(column_nan_means(flatten_space(narrowed.data()).view()))
}

/// Mean spatial field of one variable, member and month.
fn member_field(
    grid: &Grid,
    name: &str,
    member: usize,
    month: u8,
) -> Result<Array1<f64>, RescaleError> {
    let narrowed = subset(
        grid,
        &SubsetQuery::new()
            .with_variables([name])
            .with_members([member + 1])
            .with_season([month]),
    )?;
    Ok(column_nan_means(flatten_space(narrowed.data()).view()))
}

/// Builds the per-cell centering offsets `predictor - reference` for every
/// simulation variable and season month.
///
/// The predictor side is always one pooled climatology per (variable,
/// month). The reference side matches it unless `ensemble` is false and
/// the reference carries a member dimension, in which case each member
/// gets its own climatology and its own offset.
pub(crate) fn centering_offsets(
    predictor: &Grid,
    reference: &Grid,
    simulation: &Grid,
    ensemble: bool,
) -> Result<BTreeMap<OffsetKey, Array1<f64>>, RescaleError> {
    let months: Vec<u8> = simulation.season()?.months().to_vec();
    let member_count = reference.len_of(Dim::Member).filter(|_| !ensemble);

    let mut offsets = BTreeMap::new();
    for (position, variable) in simulation.variables().iter().enumerate() {
        let name = variable.name();
        for &month in &months {
            let predictor_field = pooled_field(predictor, name, month)?;
            match member_count {
                Some(count) => {
                    for member in 0..count {
                        let reference_field = member_field(reference, name, member, month)?;
                        offsets.insert(
                            (position, Some(member), month),
                            &predictor_field - &reference_field,
                        );
                    }
                }
                None => {
                    let reference_field = pooled_field(reference, name, month)?;
                    offsets.insert((position, None, month), &predictor_field - &reference_field);
                }
            }
        }
    }
    Ok(offsets)
}
