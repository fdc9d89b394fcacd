//! Season definition derived from month sequences.

use std::collections::BTreeSet;

use crate::error::CalendarError;

/// An ordered set of months defining a season.
///
/// The order is the order in which the months appear along a time axis,
/// which for year-crossing seasons differs from calendar order: a
/// December-to-February season whose axis starts in December is stored as
/// `[12, 1, 2]`, while the same months starting in January are stored as
/// `[1, 2, 12]` and do not count as year-crossing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Season {
    months: Vec<u8>,
}

impl Season {
    /// Creates a season from an explicit list of months.
    ///
    /// The list order is preserved and determines whether the season is
    /// year-crossing.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptySeason`] if `months` is empty,
    /// [`CalendarError::InvalidMonth`] if any month is outside 1..=12, and
    /// [`CalendarError::DuplicateMonth`] if a month appears twice.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let djf = Season::new(&[12, 1, 2]).unwrap();
    /// assert!(djf.is_year_crossing());
    ///
    /// let jja = Season::new(&[6, 7, 8]).unwrap();
    /// assert!(!jja.is_year_crossing());
    /// ```
    pub fn new(months: &[u8]) -> Result<Self, CalendarError> {
        if months.is_empty() {
            return Err(CalendarError::EmptySeason);
        }
        let mut seen = BTreeSet::new();
        for &month in months {
            if !(1..=12).contains(&month) {
                return Err(CalendarError::InvalidMonth { month });
            }
            if !seen.insert(month) {
                return Err(CalendarError::DuplicateMonth { month });
            }
        }
        Ok(Self {
            months: months.to_vec(),
        })
    }

    /// Derives the season of a time axis from its per-step months.
    ///
    /// Keeps the distinct months in order of first appearance, so an axis
    /// stepping through `Dec 1999, Jan 2000, Feb 2000, Dec 2000, ...` yields
    /// the season `[12, 1, 2]`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptySeason`] if `months` is empty and
    /// [`CalendarError::InvalidMonth`] if any month is outside 1..=12.
    pub fn from_sequence(months: &[u8]) -> Result<Self, CalendarError> {
        if months.is_empty() {
            return Err(CalendarError::EmptySeason);
        }
        let mut distinct = Vec::new();
        for &month in months {
            if !(1..=12).contains(&month) {
                return Err(CalendarError::InvalidMonth { month });
            }
            if !distinct.contains(&month) {
                distinct.push(month);
            }
        }
        Ok(Self { months: distinct })
    }

    /// The months of the season in order of appearance.
    pub fn months(&self) -> &[u8] {
        &self.months
    }

    /// Returns `true` if the season contains `month`.
    pub fn contains(&self, month: u8) -> bool {
        self.months.contains(&month)
    }

    /// Returns `true` if the season wraps around a calendar year boundary.
    ///
    /// A season is year-crossing when its months are not in strictly
    /// ascending calendar order, e.g. `[12, 1, 2]` or `[11, 12, 1]`.
    pub fn is_year_crossing(&self) -> bool {
        self.months.windows(2).any(|pair| pair[1] < pair[0])
    }

    /// The months that precede the calendar year boundary in a
    /// year-crossing season.
    ///
    /// For `[11, 12, 1, 2]` this is `[11, 12]`: the steps falling in these
    /// months belong to the season instance labeled with the following
    /// year. For a season that does not cross the year boundary the slice
    /// is empty.
    pub fn pre_boundary_months(&self) -> &[u8] {
        for (i, pair) in self.months.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return &self.months[..=i];
            }
        }
        &[]
    }

    /// The months of the season as a sorted set, ignoring appearance order.
    pub fn month_set(&self) -> BTreeSet<u8> {
        self.months.iter().copied().collect()
    }
}
