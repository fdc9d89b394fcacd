//! Error types for the boreas-rescale crate.

use boreas_grid::{Dim, GridError};
use boreas_subset::SubsetError;

/// Error type for the monthly-mean rescaler.
///
/// The grids involved are checked against each other up front; each
/// disagreement has its own variant so callers can tell which input to
/// fix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RescaleError {
    /// Returned when reference and simulation disagree on dimension tags.
    #[error("reference dimensions [{reference}] do not match simulation dimensions [{simulation}]")]
    DimensionTags {
        /// Comma-separated reference dimension tags.
        reference: String,
        /// Comma-separated simulation dimension tags.
        simulation: String,
    },

    /// Returned when a grid's derived season differs from the simulation's.
    #[error("{role} season [{found}] does not match simulation season [{expected}]")]
    SeasonMismatch {
        /// Which input disagrees, `predictor` or `reference`.
        role: String,
        /// Comma-separated months of that input's season.
        found: String,
        /// Comma-separated months of the simulation's season.
        expected: String,
    },

    /// Returned when a grid's variable names differ from the simulation's.
    #[error("{role} variables [{found}] do not match simulation variables [{expected}]")]
    VariableSetMismatch {
        /// Which input disagrees, `predictor` or `reference`.
        role: String,
        /// Comma-separated variable names of that input.
        found: String,
        /// Comma-separated variable names of the simulation.
        expected: String,
    },

    /// Returned when reference and simulation disagree on a dimension size.
    #[error("reference '{dim}' has size {reference} but simulation has {simulation}")]
    DimensionSize {
        /// The disagreeing dimension.
        dim: Dim,
        /// Size in the reference grid.
        reference: usize,
        /// Size in the simulation grid.
        simulation: usize,
    },

    /// Returned when the predictor's spatial layout does not fit the
    /// simulation's cells.
    #[error("predictor '{dim}' has size {predictor} but simulation has {simulation}")]
    PredictorShape {
        /// The disagreeing spatial dimension.
        dim: Dim,
        /// Size in the predictor grid (1 when absent).
        predictor: usize,
        /// Size in the simulation grid (1 when absent).
        simulation: usize,
    },

    /// A climatology subsetting step failed.
    #[error(transparent)]
    Subset(#[from] SubsetError),

    /// An array rebuild in the grid layer failed.
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_dimension_tags() {
        let err = RescaleError::DimensionTags {
            reference: "time,lat,lon".to_string(),
            simulation: "member,time,lat,lon".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "reference dimensions [time,lat,lon] do not match simulation dimensions [member,time,lat,lon]"
        );
    }

    #[test]
    fn error_season_mismatch() {
        let err = RescaleError::SeasonMismatch {
            role: "predictor".to_string(),
            found: "6,7,8".to_string(),
            expected: "1,2,12".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "predictor season [6,7,8] does not match simulation season [1,2,12]"
        );
    }

    #[test]
    fn error_variable_set_mismatch() {
        let err = RescaleError::VariableSetMismatch {
            role: "reference".to_string(),
            found: "pr".to_string(),
            expected: "pr,tas".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "reference variables [pr] do not match simulation variables [pr,tas]"
        );
    }

    #[test]
    fn error_dimension_size() {
        let err = RescaleError::DimensionSize {
            dim: Dim::Member,
            reference: 3,
            simulation: 5,
        };
        assert_eq!(
            err.to_string(),
            "reference 'member' has size 3 but simulation has 5"
        );
    }

    #[test]
    fn error_predictor_shape() {
        let err = RescaleError::PredictorShape {
            dim: Dim::Lon,
            predictor: 4,
            simulation: 6,
        };
        assert_eq!(
            err.to_string(),
            "predictor 'lon' has size 4 but simulation has 6"
        );
    }

    #[test]
    fn error_wraps_lower_layers() {
        let err = RescaleError::from(GridError::MissingTimeDimension);
        assert_eq!(err.to_string(), "grid must have a 'time' dimension");

        let err = RescaleError::from(SubsetError::MemberOutOfBounds {
            position: 9,
            count: 2,
        });
        assert_eq!(err.to_string(), "member position 9 out of range 1..=2");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<RescaleError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<RescaleError>();
    }
}
