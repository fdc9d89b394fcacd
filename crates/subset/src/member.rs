//! Subsetting an ensemble by member position.

use std::collections::BTreeSet;

use boreas_grid::{Dim, DropMode, Grid, SubsetOp};
use tracing::warn;

use crate::error::SubsetError;

/// Restricts an ensemble grid to the members at the given 1-based
/// positions, keeping the grid's internal member order whatever the order
/// of `positions`. Duplicate positions count once.
///
/// Member labels and initialization dates follow the selection. When a
/// single member remains the member dimension is dropped and the result
/// carries no member metadata at all.
///
/// A grid without a member dimension, or an empty `positions` slice,
/// returns the grid unchanged with a warning.
///
/// # Errors
///
/// Returns [`SubsetError::MemberOutOfBounds`] for positions outside
/// `1..=count`.
#[tracing::instrument(skip(grid))]
pub fn subset_members(grid: &Grid, positions: &[usize]) -> Result<Grid, SubsetError> {
    if positions.is_empty() {
        warn!("no member positions requested, returning the grid unchanged");
        return Ok(grid.clone());
    }
    let Some(count) = grid.len_of(Dim::Member) else {
        warn!("grid has no 'member' dimension, returning it unchanged");
        return Ok(grid.clone());
    };

    for &position in positions {
        if position < 1 || position > count {
            return Err(SubsetError::MemberOutOfBounds { position, count });
        }
    }
    // Ascending internal order, like the variable selector: the request
    // order never reorders the result.
    let zero_based: Vec<usize> = positions
        .iter()
        .map(|&p| p - 1)
        .collect::<BTreeSet<usize>>()
        .into_iter()
        .collect();

    let array = grid
        .data()
        .select(Dim::Member, &zero_based, DropMode::Drop)?;
    let labels = grid.members().unwrap_or(&[]);
    let (members, init_dates) = if zero_based.len() == 1 {
        // The dimension collapsed; a degenerate ensemble keeps no member
        // metadata.
        (None, None)
    } else {
        let picked = zero_based.iter().map(|&p| labels[p].clone()).collect();
        let init_dates = match grid.init_dates() {
            Some(init) => Some(init.select_members(&zero_based)?),
            None => None,
        };
        (Some(picked), init_dates)
    };

    let provenance = grid.provenance().with_members(SubsetOp::Member);
    Ok(Grid::new(
        array,
        grid.variables().to_vec(),
        grid.coords().clone(),
        grid.time_axis().clone(),
        members,
        init_dates,
    )?
    .with_provenance(provenance))
}
