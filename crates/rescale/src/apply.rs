//! In-place application of centering offsets to a simulation grid.

use boreas_grid::{Dim, DimArray, Grid, TimeAxis, TimeBounds, flatten_space, unflatten_space};
use ndarray::Array1;

use crate::error::RescaleError;

/// A dense offset lookup: one spatial field per (variable, member, month).
///
/// Months outside the simulation's season keep a zero field and are never
/// addressed.
pub(crate) struct OffsetTable {
    fields: Vec<Array1<f64>>,
    member_count: usize,
}

impl OffsetTable {
    pub(crate) fn zeros(variable_count: usize, member_count: usize, cells: usize) -> Self {
        Self {
            fields: vec![Array1::zeros(cells); variable_count * member_count * 12],
            member_count,
        }
    }

    fn index(&self, variable: usize, member: usize, month: u8) -> usize {
        (variable * self.member_count + member) * 12 + (month as usize - 1)
    }

    /// Stores a field for one member slot, or for every member when
    /// `member` is `None`.
    pub(crate) fn set(&mut self, variable: usize, member: Option<usize>, month: u8, field: &Array1<f64>) {
        match member {
            Some(member) => {
                let index = self.index(variable, member, month);
                self.fields[index] = field.clone();
            }
            None => {
                for member in 0..self.member_count {
                    let index = self.index(variable, member, month);
                    self.fields[index] = field.clone();
                }
            }
        }
    }

    fn field(&self, variable: usize, member: usize, month: u8) -> &Array1<f64> {
        &self.fields[self.index(variable, member, month)]
    }
}

/// Adds each time step's offset field to the simulation's cells, writing
/// at the original time indices so the output keeps the input's time
/// order.
///
/// Rows of the flattened matrix run variable-major, then member, then
/// time; the month of a row comes from that variable's own date series.
pub(crate) fn apply_offsets(simulation: &Grid, offsets: &OffsetTable) -> Result<Grid, RescaleError> {
    let step_count = simulation.time_axis().steps();
    let member_count = simulation.len_of(Dim::Member).unwrap_or(1);
    let month_rows: Vec<Vec<u8>> = match simulation.time_axis() {
        TimeAxis::Shared(series) => vec![series.iter().map(TimeBounds::month).collect()],
        TimeAxis::PerVariable(list) => list
            .iter()
            .map(|series| series.iter().map(TimeBounds::month).collect())
            .collect(),
    };

    let mut matrix = flatten_space(simulation.data());
    for (row_index, mut row) in matrix.rows_mut().into_iter().enumerate() {
        let step = row_index % step_count;
        let member = (row_index / step_count) % member_count;
        let variable = row_index / (step_count * member_count);
        let months = if month_rows.len() > 1 {
            &month_rows[variable]
        } else {
            &month_rows[0]
        };
        row += offsets.field(variable, member, months[step]);
    }

    let data = unflatten_space(&matrix, simulation.data().shape())?;
    let array = DimArray::new(data, simulation.dims().to_vec())?;
    Ok(Grid::new(
        array,
        simulation.variables().to_vec(),
        simulation.coords().clone(),
        simulation.time_axis().clone(),
        simulation.members().map(<[String]>::to_vec),
        simulation.init_dates().cloned(),
    )?
    .with_provenance(*simulation.provenance()))
}
