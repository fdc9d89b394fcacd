//! Spatial coordinate vectors.

use crate::dim::Dim;
use crate::error::GridError;

/// Spatial coordinates of a grid: longitudes (`x`) and latitudes (`y`).
///
/// Both vectors are strictly increasing. A vector may be empty when the
/// grid carries no information for that axis, or hold a single value for a
/// grid collapsed to a point along it.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialCoords {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SpatialCoords {
    /// Creates spatial coordinates after checking monotonicity.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NonMonotonicCoords`] if either vector is not
    /// strictly increasing.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, GridError> {
        if x.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(GridError::NonMonotonicCoords { axis: Dim::Lon });
        }
        if y.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(GridError::NonMonotonicCoords { axis: Dim::Lat });
        }
        Ok(Self { x, y })
    }

    /// Creates empty coordinates for a grid without spatial axes.
    pub fn none() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Returns the longitude values, west to east.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the latitude values, south to north.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the coordinate vector for a spatial axis.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionAbsent`] if `axis` is not `Lon` or
    /// `Lat`.
    pub fn along(&self, axis: Dim) -> Result<&[f64], GridError> {
        match axis {
            Dim::Lon => Ok(&self.x),
            Dim::Lat => Ok(&self.y),
            dim => Err(GridError::DimensionAbsent { dim }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_increasing_vectors() {
        let coords = SpatialCoords::new(vec![-10.0, -5.0, 0.0], vec![40.0, 42.5]).unwrap();
        assert_eq!(coords.x(), &[-10.0, -5.0, 0.0]);
        assert_eq!(coords.y(), &[40.0, 42.5]);
    }

    #[test]
    fn accepts_empty_and_single() {
        let coords = SpatialCoords::new(vec![], vec![7.25]).unwrap();
        assert!(coords.x().is_empty());
        assert_eq!(coords.y(), &[7.25]);
        assert_eq!(SpatialCoords::none(), SpatialCoords::new(vec![], vec![]).unwrap());
    }

    #[test]
    fn rejects_decreasing_longitudes() {
        let err = SpatialCoords::new(vec![0.0, -5.0], vec![]).unwrap_err();
        assert_eq!(err, GridError::NonMonotonicCoords { axis: Dim::Lon });
    }

    #[test]
    fn rejects_duplicate_latitudes() {
        let err = SpatialCoords::new(vec![], vec![40.0, 40.0]).unwrap_err();
        assert_eq!(err, GridError::NonMonotonicCoords { axis: Dim::Lat });
    }

    #[test]
    fn along_maps_axes() {
        let coords = SpatialCoords::new(vec![1.0], vec![2.0]).unwrap();
        assert_eq!(coords.along(Dim::Lon).unwrap(), &[1.0]);
        assert_eq!(coords.along(Dim::Lat).unwrap(), &[2.0]);
        assert_eq!(
            coords.along(Dim::Time).unwrap_err(),
            GridError::DimensionAbsent { dim: Dim::Time }
        );
    }
}
