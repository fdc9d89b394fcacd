//! Composite subsetting across several dimensions at once.

use boreas_grid::Grid;

use crate::error::SubsetError;
use crate::member::subset_members;
use crate::season::subset_season;
use crate::spatial::subset_spatial;
use crate::variable::subset_variables;
use crate::years::subset_years;

/// A multi-dimension subsetting request.
///
/// Selectors left at their defaults are skipped, so a query only narrows
/// the dimensions it names.
///
/// ```ignore
/// let query = SubsetQuery::new()
///     .with_variables(["tas"])
///     .with_years([2001, 2002])
///     .with_lon([-10.0, 10.0]);
/// let narrowed = subset(&grid, &query)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubsetQuery {
    variables: Vec<String>,
    members: Vec<usize>,
    years: Vec<i32>,
    season: Vec<u8>,
    lon: Option<Vec<f64>>,
    lat: Option<Vec<f64>>,
}

impl SubsetQuery {
    /// Creates a query that selects everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects variables by name.
    pub fn with_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = names.into_iter().map(Into::into).collect();
        self
    }

    /// Selects ensemble members by 1-based position.
    pub fn with_members(mut self, positions: impl IntoIterator<Item = usize>) -> Self {
        self.members = positions.into_iter().collect();
        self
    }

    /// Selects time steps by assigned year.
    pub fn with_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.years = years.into_iter().collect();
        self
    }

    /// Selects time steps by month of year.
    pub fn with_season(mut self, months: impl IntoIterator<Item = u8>) -> Self {
        self.season = months.into_iter().collect();
        self
    }

    /// Sets the longitude window, a single value or a two-value range.
    pub fn with_lon(mut self, bounds: impl IntoIterator<Item = f64>) -> Self {
        self.lon = Some(bounds.into_iter().collect());
        self
    }

    /// Sets the latitude window, a single value or a two-value range.
    pub fn with_lat(mut self, bounds: impl IntoIterator<Item = f64>) -> Self {
        self.lat = Some(bounds.into_iter().collect());
        self
    }

    /// Requested variable names.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Requested 1-based member positions.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Requested years.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Requested months.
    pub fn season(&self) -> &[u8] {
        &self.season
    }

    /// Requested longitude window.
    pub fn lon(&self) -> Option<&[f64]> {
        self.lon.as_deref()
    }

    /// Requested latitude window.
    pub fn lat(&self) -> Option<&[f64]> {
        self.lat.as_deref()
    }

    /// True when the query selects nothing, i.e. `subset` would be a
    /// no-op.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
            && self.members.is_empty()
            && self.years.is_empty()
            && self.season.is_empty()
            && self.lon.is_none()
            && self.lat.is_none()
    }
}

/// Applies every selector of `query` to `grid`.
///
/// Selectors run in a fixed order: variables, members, years, season,
/// spatial window.
///
/// # Errors
///
/// Propagates the first failing selector's error.
#[tracing::instrument(skip(grid, query))]
pub fn subset(grid: &Grid, query: &SubsetQuery) -> Result<Grid, SubsetError> {
    let mut current = grid.clone();
    if !query.variables().is_empty() {
        let names: Vec<&str> = query.variables().iter().map(String::as_str).collect();
        current = subset_variables(&current, &names)?;
    }
    if !query.members().is_empty() {
        current = subset_members(&current, query.members())?;
    }
    if !query.years().is_empty() {
        current = subset_years(&current, query.years())?;
    }
    if !query.season().is_empty() {
        current = subset_season(&current, query.season())?;
    }
    if query.lon().is_some() || query.lat().is_some() {
        current = subset_spatial(&current, query.lon(), query.lat())?;
    }
    Ok(current)
}
