//! # boreas-rescale
//!
//! Monthly-mean recentering of simulated climate grids: each cell's time
//! series is shifted so its monthly climatology matches a predictor,
//! relative to a reference period.
//!
//! # Pipeline
//!
//! 1. **Validate** that predictor, reference and simulation agree on
//!    dimensions, season and variables
//! 2. **Climatologies**: one pooled spatial mean field per (variable,
//!    month) on the predictor side, pooled or per-member on the reference
//!    side
//! 3. **Recenter**: add `predictor - reference` to every cell of the
//!    matching month, writing at the original time indices
//!
//! The corrected series is `data - meanOf(reference) + meanOf(predictor)`
//! per cell and month. With no reference supplied the predictor's own
//! climatology is reused and the data pass through unchanged.
//!
//! # Quick Start
//!
//! ```ignore
//! use boreas_rescale::rescale_monthly_means;
//!
//! // Recenter a seasonal forecast against observations, keeping each
//! // ensemble member's own reference climatology.
//! let result = rescale_monthly_means(&observations, &forecast, Some(&hindcast), false)?;
//! let corrected = result.into_grid();
//! ```

pub(crate) mod apply;
pub(crate) mod climatology;
mod error;
mod result;

pub use boreas_grid::Grid;
pub use error::RescaleError;
pub use result::{CenteringOffset, RescaleResult};

use std::collections::BTreeSet;

use boreas_grid::Dim;
use ndarray::{ArrayD, IxDyn};

use crate::apply::OffsetTable;

fn join<T: std::fmt::Display>(values: impl IntoIterator<Item = T>) -> String {
    let parts: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    parts.join(",")
}

/// Validates the inputs to [`rescale_monthly_means`].
fn validate(predictor: &Grid, reference: &Grid, simulation: &Grid) -> Result<(), RescaleError> {
    // 1. Reference and simulation must carry the same dimension tags.
    if reference.dims() != simulation.dims() {
        return Err(RescaleError::DimensionTags {
            reference: join(reference.dims()),
            simulation: join(simulation.dims()),
        });
    }

    // 2. All three grids must span the same set of months.
    let expected_season = simulation.season()?.month_set();
    for (role, grid) in [("predictor", predictor), ("reference", reference)] {
        let found = grid.season()?.month_set();
        if found != expected_season {
            return Err(RescaleError::SeasonMismatch {
                role: role.to_string(),
                found: join(&found),
                expected: join(&expected_season),
            });
        }
    }

    // 3. All three grids must carry the same variable names.
    let expected_vars: BTreeSet<&str> = simulation.variables().iter().map(|v| v.name()).collect();
    for (role, grid) in [("predictor", predictor), ("reference", reference)] {
        let found: BTreeSet<&str> = grid.variables().iter().map(|v| v.name()).collect();
        if found != expected_vars {
            return Err(RescaleError::VariableSetMismatch {
                role: role.to_string(),
                found: join(&found),
                expected: join(&expected_vars),
            });
        }
    }

    // 4. Reference sizes must match the simulation everywhere but time.
    for dim in [Dim::Variable, Dim::Member, Dim::Lat, Dim::Lon] {
        if let (Some(reference_size), Some(simulation_size)) =
            (reference.len_of(dim), simulation.len_of(dim))
        {
            if reference_size != simulation_size {
                return Err(RescaleError::DimensionSize {
                    dim,
                    reference: reference_size,
                    simulation: simulation_size,
                });
            }
        }
    }

    // 5. The predictor's spatial cells must line up with the simulation's.
    for dim in [Dim::Lat, Dim::Lon] {
        let predictor_size = predictor.len_of(dim).unwrap_or(1);
        let simulation_size = simulation.len_of(dim).unwrap_or(1);
        if predictor_size != simulation_size {
            return Err(RescaleError::PredictorShape {
                dim,
                predictor: predictor_size,
                simulation: simulation_size,
            });
        }
    }

    Ok(())
}

/// Recenters a simulation's monthly means on a predictor's climatology.
///
/// Every cell becomes `data - meanOf(reference, month) +
/// meanOf(predictor, month)`, computed per variable and season month. The
/// predictor climatology always pools the time and member axes. The
/// reference climatology pools them too when `ensemble` is true; with
/// `ensemble` false and a member dimension present, each member is
/// corrected against its own reference climatology. When `reference` is
/// `None` the predictor's pooled climatology stands in for it, which
/// leaves the data unchanged.
///
/// The output grid keeps the simulation's metadata and time order; the
/// offsets actually applied are returned alongside it.
///
/// # Errors
///
/// Returns a [`RescaleError`] variant naming the first precondition the
/// inputs violate, or a wrapped subsetting error from the climatology
/// computation.
#[tracing::instrument(skip(predictor, simulation, reference))]
pub fn rescale_monthly_means(
    predictor: &Grid,
    simulation: &Grid,
    reference: Option<&Grid>,
    ensemble: bool,
) -> Result<RescaleResult, RescaleError> {
    // 1. Preconditions, against the effective reference.
    let effective = reference.unwrap_or(predictor);
    validate(predictor, effective, simulation)?;

    // 2. Per-cell centering offsets. An omitted reference pins the offsets
    //    to predictor-minus-predictor.
    let pooled = ensemble || reference.is_none();
    let offsets = climatology::centering_offsets(predictor, effective, simulation, pooled)?;

    // 3. Dense lookup table addressed by (variable, member, month).
    let spatial_shape: Vec<usize> = simulation
        .dims()
        .iter()
        .zip(simulation.data().shape())
        .filter(|(dim, _)| matches!(dim, Dim::Lat | Dim::Lon))
        .map(|(_, &size)| size)
        .collect();
    let cells: usize = spatial_shape.iter().product();
    let variable_count = simulation.len_of(Dim::Variable).unwrap_or(1);
    let member_count = simulation.len_of(Dim::Member).unwrap_or(1);
    let mut table = OffsetTable::zeros(variable_count, member_count, cells);
    for (&(variable, member, month), field) in &offsets {
        table.set(variable, member, month, field);
    }

    // 4. Apply at the original time indices.
    let corrected = apply::apply_offsets(simulation, &table)?;

    // 5. Audit record of what was added where.
    let applied: Vec<CenteringOffset> = offsets
        .into_iter()
        .map(|((variable, member, month), field)| {
            let label = member.and_then(|slot| {
                simulation
                    .members()
                    .and_then(|labels| labels.get(slot))
                    .cloned()
            });
            // safe: the field holds exactly one value per spatial cell
            let field = ArrayD::from_shape_vec(IxDyn(&spatial_shape), field.to_vec()).unwrap();
            CenteringOffset::new(
                simulation.variables()[variable].name().to_string(),
                label,
                month,
                field,
            )
        })
        .collect();

    Ok(RescaleResult::new(corrected, applied))
}
