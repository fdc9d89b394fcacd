//! The grid root entity: labeled data array plus lockstep metadata.

use boreas_calendar::{Season, assign_years};

use crate::array::DimArray;
use crate::coords::SpatialCoords;
use crate::dim::Dim;
use crate::error::GridError;
use crate::members::InitDates;
use crate::provenance::Provenance;
use crate::time::TimeAxis;
use crate::variable::Variable;

/// A climate grid bundling a labeled data array with coordinate, temporal,
/// and membership metadata.
///
/// Construction validates every cross-structure invariant: variable records
/// and date series match the variable dimension, coordinate vectors match
/// the spatial dimensions, member labels and initialization dates match the
/// member dimension, and every date series matches the time dimension. All
/// operations that produce a grid re-validate through [`Grid::new`], so a
/// `Grid` value always satisfies these invariants.
///
/// Grids are value-like: subsetting operations return new grids and never
/// mutate their input.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    array: DimArray,
    variables: Vec<Variable>,
    coords: SpatialCoords,
    time: TimeAxis,
    members: Option<Vec<String>>,
    init_dates: Option<InitDates>,
    provenance: Provenance,
}

impl Grid {
    /// Creates a grid after validating all cross-structure invariants.
    ///
    /// # Errors
    ///
    /// Returns the [`GridError`] variant for the first violated invariant:
    /// missing time dimension, variable or date shape mismatches, coordinate
    /// or member count mismatches, or inconsistent initialization dates.
    pub fn new(
        array: DimArray,
        variables: Vec<Variable>,
        coords: SpatialCoords,
        time: TimeAxis,
        members: Option<Vec<String>>,
        init_dates: Option<InitDates>,
    ) -> Result<Self, GridError> {
        // 1. A time dimension is required.
        let Some(n_time) = array.len_of(Dim::Time) else {
            return Err(GridError::MissingTimeDimension);
        };

        // 2. Variable records and date shape must match the variable dimension.
        match array.len_of(Dim::Variable) {
            Some(size) => {
                if variables.len() != size {
                    return Err(GridError::VariableCount {
                        variables: variables.len(),
                        expected: size,
                    });
                }
                match &time {
                    TimeAxis::Shared(_) => return Err(GridError::SharedDatesWithVariables),
                    TimeAxis::PerVariable(list) => {
                        if list.len() != size {
                            return Err(GridError::DateSeriesCount {
                                series: list.len(),
                                variables: size,
                            });
                        }
                    }
                }
            }
            None => {
                if variables.len() != 1 {
                    return Err(GridError::VariableCount {
                        variables: variables.len(),
                        expected: 1,
                    });
                }
                if let TimeAxis::PerVariable(_) = &time {
                    return Err(GridError::PerVariableDatesWithoutVariables);
                }
            }
        }

        // 3. Every date series must cover the time dimension.
        match &time {
            TimeAxis::Shared(series) => {
                if series.len() != n_time {
                    return Err(GridError::DateLength {
                        len: series.len(),
                        steps: n_time,
                    });
                }
            }
            TimeAxis::PerVariable(list) => {
                for series in list {
                    if series.len() != n_time {
                        return Err(GridError::DateLength {
                            len: series.len(),
                            steps: n_time,
                        });
                    }
                }
            }
        }

        // 4. Coordinate vectors must match the spatial dimensions.
        for (axis, coord) in [(Dim::Lon, coords.x()), (Dim::Lat, coords.y())] {
            match array.len_of(axis) {
                Some(size) => {
                    if coord.len() != size {
                        return Err(GridError::CoordLength {
                            axis,
                            len: coord.len(),
                            size,
                        });
                    }
                }
                None => {
                    if coord.len() > 1 {
                        return Err(GridError::CoordWithoutDim {
                            axis,
                            len: coord.len(),
                        });
                    }
                }
            }
        }

        // 5. Member labels are present exactly when a member dimension is.
        match (array.len_of(Dim::Member), &members) {
            (Some(size), Some(labels)) => {
                if labels.len() != size {
                    return Err(GridError::MemberCount {
                        members: labels.len(),
                        size,
                    });
                }
            }
            (Some(_), None) => return Err(GridError::MissingMemberLabels),
            (None, Some(labels)) => {
                return Err(GridError::MemberLabelsWithoutDim {
                    members: labels.len(),
                });
            }
            (None, None) => {}
        }

        // 6. Initialization dates must match the members and, for lagged
        //    ensembles, the years of the time axis.
        if let Some(init) = &init_dates {
            let Some(labels) = &members else {
                return Err(GridError::InitDatesWithoutMembers);
            };
            if init.member_count() != labels.len() {
                return Err(GridError::InitDateCount {
                    entries: init.member_count(),
                    members: labels.len(),
                });
            }
            if let InitDates::Lagged(lists) = init {
                let reference = time.reference();
                let years: Vec<i32> = reference.iter().map(|b| b.year()).collect();
                let months: Vec<u8> = reference.iter().map(|b| b.month()).collect();
                let assigned = assign_years(&years, &months)?;
                let expected = distinct_in_order(&assigned).len();
                for (member, list) in lists.iter().enumerate() {
                    if list.len() != expected {
                        return Err(GridError::LaggedInitLength {
                            member,
                            len: list.len(),
                            expected,
                        });
                    }
                }
            }
        }

        Ok(Self {
            array,
            variables,
            coords,
            time,
            members,
            init_dates,
            provenance: Provenance::new(),
        })
    }

    /// Replaces the provenance tags, consuming the grid.
    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    /// Returns the labeled data array.
    pub fn data(&self) -> &DimArray {
        &self.array
    }

    /// Returns the dimension-tag list.
    pub fn dims(&self) -> &[Dim] {
        self.array.dims()
    }

    /// Returns `true` if the grid has a `dim` axis.
    pub fn has_dim(&self, dim: Dim) -> bool {
        self.array.has_dim(dim)
    }

    /// Returns the length of the `dim` axis, if present.
    pub fn len_of(&self, dim: Dim) -> Option<usize> {
        self.array.len_of(dim)
    }

    /// Returns the per-variable metadata, in variable-dimension order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Returns the spatial coordinates.
    pub fn coords(&self) -> &SpatialCoords {
        &self.coords
    }

    /// Returns the time axis.
    pub fn time_axis(&self) -> &TimeAxis {
        &self.time
    }

    /// Returns the member labels, present only for multimember grids.
    pub fn members(&self) -> Option<&[String]> {
        self.members.as_deref()
    }

    /// Returns the initialization dates, if any.
    pub fn init_dates(&self) -> Option<&InitDates> {
        self.init_dates.as_ref()
    }

    /// Returns the provenance tags.
    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Returns the calendar month (1..=12) of each time step, from the
    /// reference date series.
    pub fn months(&self) -> Vec<u8> {
        self.time.reference().iter().map(|b| b.month()).collect()
    }

    /// Returns the calendar year of each time step, from the reference date
    /// series.
    pub fn years(&self) -> Vec<i32> {
        self.time.reference().iter().map(|b| b.year()).collect()
    }

    /// Derives the grid's season: its distinct months in order of first
    /// appearance along the time axis.
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`boreas_calendar::CalendarError`] if the time axis
    /// is empty.
    pub fn season(&self) -> Result<Season, GridError> {
        Ok(Season::from_sequence(&self.months())?)
    }

    /// Returns the assigned year of each time step, relabeling year-crossing
    /// seasons so every season instance shares one year value.
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`boreas_calendar::CalendarError`] if the time axis
    /// is empty.
    pub fn assigned_years(&self) -> Result<Vec<i32>, GridError> {
        Ok(assign_years(&self.years(), &self.months())?)
    }

    /// Returns the distinct assigned years in order of first appearance.
    ///
    /// Lagged initialization date lists are sub-indexed by position in this
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`boreas_calendar::CalendarError`] if the time axis
    /// is empty.
    pub fn unique_assigned_years(&self) -> Result<Vec<i32>, GridError> {
        Ok(distinct_in_order(&self.assigned_years()?))
    }
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
