//! Error types for the boreas-calendar crate.

/// Error type for all fallible operations in the boreas-calendar crate.
///
/// This enum covers validation failures for month numbers, season
/// definitions, and mismatched year/month sequences.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a season is defined with no months.
    #[error("season must contain at least one month")]
    EmptySeason,

    /// Returned when a season definition lists the same month twice.
    #[error("duplicate month in season: {month}")]
    DuplicateMonth {
        /// The month number that appears more than once.
        month: u8,
    },

    /// Returned when the year and month sequences of a time axis have
    /// different lengths.
    #[error("year/month length mismatch: {years} years vs {months} months")]
    LengthMismatch {
        /// Number of per-step year values.
        years: usize,
        /// Number of per-step month values.
        months: usize,
    },
}
