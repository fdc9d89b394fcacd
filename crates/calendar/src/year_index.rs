//! Season-aware year labeling for time axes.

use crate::error::CalendarError;
use crate::season::Season;

/// Assigns a year label to each step of a time axis.
///
/// `years` and `months` give the calendar year and month of each step in
/// time order. For a non-year-crossing season the labels are the calendar
/// years unchanged. For a year-crossing season the steps whose month falls
/// before the year boundary are labeled with the following year, so that
/// all steps of one season instance share one label: in a `[12, 1, 2]`
/// season, December 1999 is labeled 2000 together with January and
/// February 2000.
///
/// # Errors
///
/// Returns [`CalendarError::LengthMismatch`] if `years` and `months` have
/// different lengths, [`CalendarError::EmptySeason`] if both are empty,
/// and [`CalendarError::InvalidMonth`] if any month is outside 1..=12.
///
/// # Examples
///
/// ```ignore
/// // DJF axis starting in December 1999:
/// let years = [1999, 2000, 2000, 2000, 2001, 2001];
/// let months = [12, 1, 2, 12, 1, 2];
/// let labels = assign_years(&years, &months).unwrap();
/// assert_eq!(labels, vec![2000, 2000, 2000, 2001, 2001, 2001]);
/// ```
pub fn assign_years(years: &[i32], months: &[u8]) -> Result<Vec<i32>, CalendarError> {
    if years.len() != months.len() {
        return Err(CalendarError::LengthMismatch {
            years: years.len(),
            months: months.len(),
        });
    }
    let season = Season::from_sequence(months)?;
    if !season.is_year_crossing() {
        return Ok(years.to_vec());
    }
    let pre_boundary = season.pre_boundary_months();
    Ok(years
        .iter()
        .zip(months)
        .map(|(&year, month)| {
            if pre_boundary.contains(month) {
                year + 1
            } else {
                year
            }
        })
        .collect())
}
