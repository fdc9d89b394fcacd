//! Ensemble member initialization dates.

use chrono::NaiveDateTime;

use crate::dim::Dim;
use crate::error::GridError;

/// Initialization dates of an ensemble's members.
///
/// Most ensembles carry one initialization date per member. Lagged
/// ensembles carry one list per member, sub-indexed by year of the time
/// axis, because each member is built from a different initialization
/// within every forecast year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitDates {
    /// One initialization date per member.
    PerMember(Vec<NaiveDateTime>),
    /// One list per member with one date per assigned year, for lagged
    /// ensembles.
    Lagged(Vec<Vec<NaiveDateTime>>),
}

impl InitDates {
    /// Returns the number of members covered.
    pub fn member_count(&self) -> usize {
        match self {
            Self::PerMember(dates) => dates.len(),
            Self::Lagged(lists) => lists.len(),
        }
    }

    /// Selects members by zero-based position, preserving the shape.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if any position exceeds the
    /// member count.
    pub fn select_members(&self, positions: &[usize]) -> Result<InitDates, GridError> {
        let count = self.member_count();
        for &index in positions {
            if index >= count {
                return Err(GridError::IndexOutOfBounds {
                    dim: Dim::Member,
                    index,
                    size: count,
                });
            }
        }
        Ok(match self {
            Self::PerMember(dates) => {
                Self::PerMember(positions.iter().map(|&i| dates[i]).collect())
            }
            Self::Lagged(lists) => {
                Self::Lagged(positions.iter().map(|&i| lists[i].clone()).collect())
            }
        })
    }

    /// Selects year positions within each member's lagged date list.
    ///
    /// Per-member dates have no year axis and are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if any position exceeds a
    /// lagged list length.
    pub fn select_year_positions(&self, positions: &[usize]) -> Result<InitDates, GridError> {
        match self {
            Self::PerMember(dates) => Ok(Self::PerMember(dates.clone())),
            Self::Lagged(lists) => {
                let selected: Result<Vec<Vec<NaiveDateTime>>, GridError> = lists
                    .iter()
                    .map(|list| {
                        positions
                            .iter()
                            .map(|&index| {
                                list.get(index).copied().ok_or(GridError::IndexOutOfBounds {
                                    dim: Dim::Time,
                                    index,
                                    size: list.len(),
                                })
                            })
                            .collect()
                    })
                    .collect();
                Ok(Self::Lagged(selected?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn member_count_both_shapes() {
        let flat = InitDates::PerMember(vec![date(2000, 1, 1), date(2000, 1, 1)]);
        assert_eq!(flat.member_count(), 2);

        let lagged = InitDates::Lagged(vec![vec![date(2000, 1, 1)]; 3]);
        assert_eq!(lagged.member_count(), 3);
    }

    #[test]
    fn select_members_flat() {
        let flat = InitDates::PerMember(vec![date(2000, 1, 1), date(2000, 1, 2), date(2000, 1, 3)]);
        let out = flat.select_members(&[2, 0]).unwrap();
        assert_eq!(
            out,
            InitDates::PerMember(vec![date(2000, 1, 3), date(2000, 1, 1)])
        );
    }

    #[test]
    fn select_members_lagged_keeps_inner_lists() {
        let lagged = InitDates::Lagged(vec![
            vec![date(1999, 11, 1), date(2000, 11, 1)],
            vec![date(1999, 12, 1), date(2000, 12, 1)],
        ]);
        let out = lagged.select_members(&[1]).unwrap();
        assert_eq!(
            out,
            InitDates::Lagged(vec![vec![date(1999, 12, 1), date(2000, 12, 1)]])
        );
    }

    #[test]
    fn select_members_out_of_bounds() {
        let flat = InitDates::PerMember(vec![date(2000, 1, 1)]);
        let err = flat.select_members(&[1]).unwrap_err();
        assert_eq!(
            err,
            GridError::IndexOutOfBounds {
                dim: Dim::Member,
                index: 1,
                size: 1
            }
        );
    }

    #[test]
    fn select_year_positions_slices_lagged_lists() {
        let lagged = InitDates::Lagged(vec![
            vec![date(1999, 11, 1), date(2000, 11, 1), date(2001, 11, 1)],
            vec![date(1999, 12, 1), date(2000, 12, 1), date(2001, 12, 1)],
        ]);
        let out = lagged.select_year_positions(&[0, 2]).unwrap();
        assert_eq!(
            out,
            InitDates::Lagged(vec![
                vec![date(1999, 11, 1), date(2001, 11, 1)],
                vec![date(1999, 12, 1), date(2001, 12, 1)],
            ])
        );
    }

    #[test]
    fn select_year_positions_leaves_flat_unchanged() {
        let flat = InitDates::PerMember(vec![date(2000, 1, 1), date(2000, 1, 2)]);
        let out = flat.select_year_positions(&[0]).unwrap();
        assert_eq!(out, flat);
    }

    #[test]
    fn select_year_positions_out_of_bounds() {
        let lagged = InitDates::Lagged(vec![vec![date(1999, 11, 1)]]);
        let err = lagged.select_year_positions(&[1]).unwrap_err();
        assert_eq!(
            err,
            GridError::IndexOutOfBounds {
                dim: Dim::Time,
                index: 1,
                size: 1
            }
        );
    }
}
