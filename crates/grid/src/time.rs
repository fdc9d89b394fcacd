//! Per-time-step date bounds and the grid time axis.

use chrono::{Datelike, NaiveDateTime};

use crate::dim::Dim;
use crate::error::GridError;

/// Start and end timestamps of one time step.
///
/// Calendar lookups (`year`, `month`) use the start timestamp; the end
/// timestamp only marks the extent of the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBounds {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeBounds {
    /// Creates the bounds of a time step.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidTimeBounds`] if `start` is after `end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, GridError> {
        if start > end {
            return Err(GridError::InvalidTimeBounds { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start timestamp.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the end timestamp.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the calendar year of the start timestamp.
    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// Returns the calendar month (1..=12) of the start timestamp.
    pub fn month(&self) -> u8 {
        self.start.month() as u8
    }
}

/// The dates of a grid's time steps.
///
/// A grid without a variable dimension carries one shared date series.
/// A multigrid carries one series per variable, since variables loaded
/// from different sources can have distinct time axes of equal length.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeAxis {
    /// One date series shared by all variables.
    Shared(Vec<TimeBounds>),
    /// One date series per variable, in variable order.
    PerVariable(Vec<Vec<TimeBounds>>),
}

impl TimeAxis {
    /// Returns the reference date series: the shared series, or the first
    /// variable's series for a multigrid.
    ///
    /// Month and year lookups for index computation use this series; the
    /// resulting indices are applied to every series.
    pub fn reference(&self) -> &[TimeBounds] {
        match self {
            Self::Shared(series) => series,
            Self::PerVariable(list) => list.first().map_or(&[], Vec::as_slice),
        }
    }

    /// Returns the number of time steps of the reference series.
    pub fn steps(&self) -> usize {
        self.reference().len()
    }

    /// Returns the number of per-variable series, or `None` for a shared
    /// axis.
    pub fn series_count(&self) -> Option<usize> {
        match self {
            Self::Shared(_) => None,
            Self::PerVariable(list) => Some(list.len()),
        }
    }

    /// Selects time steps by index, preserving the axis shape.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if any index exceeds a
    /// series length.
    pub fn select(&self, indices: &[usize]) -> Result<TimeAxis, GridError> {
        let pick = |series: &[TimeBounds]| -> Result<Vec<TimeBounds>, GridError> {
            indices
                .iter()
                .map(|&index| {
                    series.get(index).copied().ok_or(GridError::IndexOutOfBounds {
                        dim: Dim::Time,
                        index,
                        size: series.len(),
                    })
                })
                .collect()
        };
        match self {
            Self::Shared(series) => Ok(Self::Shared(pick(series)?)),
            Self::PerVariable(list) => {
                let selected: Result<Vec<_>, GridError> =
                    list.iter().map(|series| pick(series)).collect();
                Ok(Self::PerVariable(selected?))
            }
        }
    }
}
