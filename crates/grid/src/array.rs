//! Labeled N-D array and the dimension-aware slicing primitive.

use ndarray::{ArrayD, Axis};

use crate::dim::{Dim, format_dims};
use crate::error::GridError;

/// Whether selecting a single index collapses the selected dimension.
///
/// With [`DropMode::Drop`], a single-index selection removes the dimension
/// from the array's rank and its tag from the tag list. With
/// [`DropMode::Keep`], rank and tags are preserved even for single-index
/// selections. Multi-index selections never collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropMode {
    /// Collapse the dimension when exactly one index is selected.
    Drop,
    /// Preserve the dimension regardless of how many indices are selected.
    Keep,
}

/// A data array with an ordered list of semantic dimension tags.
///
/// The tag list always has one entry per array axis, in the canonical
/// `var < member < time < lat < lon` order. Every slicing operation keeps
/// the tags synchronized with the array rank.
#[derive(Debug, Clone, PartialEq)]
pub struct DimArray {
    dims: Vec<Dim>,
    data: ArrayD<f64>,
}

impl DimArray {
    /// Creates a labeled array after validating the tag list against the
    /// array shape.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RankMismatch`] if the tag count differs from the
    /// array rank, [`GridError::DimensionOrder`] if tags repeat or break the
    /// canonical order, and [`GridError::EmptyDimension`] if any axis has
    /// zero length.
    pub fn new(data: ArrayD<f64>, dims: Vec<Dim>) -> Result<Self, GridError> {
        if data.ndim() != dims.len() {
            return Err(GridError::RankMismatch {
                rank: data.ndim(),
                tags: dims.len(),
            });
        }
        if dims.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(GridError::DimensionOrder {
                dims: format_dims(&dims),
            });
        }
        for (axis, &dim) in dims.iter().enumerate() {
            if data.len_of(Axis(axis)) == 0 {
                return Err(GridError::EmptyDimension { dim });
            }
        }
        Ok(Self { dims, data })
    }

    /// Returns the data array.
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Returns the dimension-tag list.
    pub fn dims(&self) -> &[Dim] {
        &self.dims
    }

    /// Returns the array shape.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Returns the axis position of `dim`, if present.
    pub fn axis_of(&self, dim: Dim) -> Option<usize> {
        self.dims.iter().position(|&d| d == dim)
    }

    /// Returns `true` if the array has a `dim` axis.
    pub fn has_dim(&self, dim: Dim) -> bool {
        self.axis_of(dim).is_some()
    }

    /// Returns the length of the `dim` axis, if present.
    pub fn len_of(&self, dim: Dim) -> Option<usize> {
        self.axis_of(dim).map(|axis| self.data.len_of(Axis(axis)))
    }

    /// Selects `indices` along the `dim` axis.
    ///
    /// Output values follow the order of `indices`. With [`DropMode::Drop`]
    /// and exactly one index the dimension collapses: the result has one
    /// axis less and `dim` is removed from the tag list. In every other case
    /// rank and tags are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionAbsent`] if the array has no `dim`
    /// axis, [`GridError::EmptySelection`] if `indices` is empty, and
    /// [`GridError::IndexOutOfBounds`] if any index exceeds the axis length.
    pub fn select(&self, dim: Dim, indices: &[usize], mode: DropMode) -> Result<Self, GridError> {
        let axis = self
            .axis_of(dim)
            .ok_or(GridError::DimensionAbsent { dim })?;
        if indices.is_empty() {
            return Err(GridError::EmptySelection { dim });
        }
        let size = self.data.len_of(Axis(axis));
        for &index in indices {
            if index >= size {
                return Err(GridError::IndexOutOfBounds { dim, index, size });
            }
        }

        if mode == DropMode::Drop && indices.len() == 1 {
            let data = self.data.index_axis(Axis(axis), indices[0]).to_owned();
            let mut dims = self.dims.clone();
            dims.remove(axis);
            Ok(Self { dims, data })
        } else {
            let data = self.data.select(Axis(axis), indices);
            Ok(Self {
                dims: self.dims.clone(),
                data,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    fn make_array(shape: &[usize], dims: Vec<Dim>) -> DimArray {
        let n: usize = shape.iter().product();
        let values: Vec<f64> = (0..n).map(|v| v as f64).collect();
        let data = ArrayD::from_shape_vec(IxDyn(shape), values).unwrap();
        DimArray::new(data, dims).unwrap()
    }

    #[test]
    fn new_accepts_canonical_tags() {
        let arr = make_array(&[2, 3, 4], vec![Dim::Time, Dim::Lat, Dim::Lon]);
        assert_eq!(arr.dims(), &[Dim::Time, Dim::Lat, Dim::Lon]);
        assert_eq!(arr.shape(), &[2, 3, 4]);
    }

    #[test]
    fn new_rejects_rank_mismatch() {
        let data = ArrayD::<f64>::zeros(IxDyn(&[2, 3]));
        let err = DimArray::new(data, vec![Dim::Time]).unwrap_err();
        assert_eq!(err, GridError::RankMismatch { rank: 2, tags: 1 });
    }

    #[test]
    fn new_rejects_out_of_order_tags() {
        let data = ArrayD::<f64>::zeros(IxDyn(&[2, 3]));
        let err = DimArray::new(data, vec![Dim::Lat, Dim::Time]).unwrap_err();
        assert_eq!(
            err,
            GridError::DimensionOrder {
                dims: "lat,time".to_string()
            }
        );
    }

    #[test]
    fn new_rejects_duplicate_tags() {
        let data = ArrayD::<f64>::zeros(IxDyn(&[2, 3]));
        let err = DimArray::new(data, vec![Dim::Time, Dim::Time]).unwrap_err();
        assert!(matches!(err, GridError::DimensionOrder { .. }));
    }

    #[test]
    fn new_rejects_empty_axis() {
        let data = ArrayD::<f64>::zeros(IxDyn(&[2, 0]));
        let err = DimArray::new(data, vec![Dim::Time, Dim::Lat]).unwrap_err();
        assert_eq!(err, GridError::EmptyDimension { dim: Dim::Lat });
    }

    #[test]
    fn axis_lookup() {
        let arr = make_array(&[2, 3, 4], vec![Dim::Time, Dim::Lat, Dim::Lon]);
        assert_eq!(arr.axis_of(Dim::Time), Some(0));
        assert_eq!(arr.axis_of(Dim::Lon), Some(2));
        assert_eq!(arr.axis_of(Dim::Member), None);
        assert!(arr.has_dim(Dim::Lat));
        assert!(!arr.has_dim(Dim::Variable));
        assert_eq!(arr.len_of(Dim::Lat), Some(3));
        assert_eq!(arr.len_of(Dim::Member), None);
    }

    #[test]
    fn select_keep_preserves_rank() {
        let arr = make_array(&[3, 2], vec![Dim::Time, Dim::Lat]);
        let out = arr.select(Dim::Time, &[1], DropMode::Keep).unwrap();
        assert_eq!(out.dims(), &[Dim::Time, Dim::Lat]);
        assert_eq!(out.shape(), &[1, 2]);
        assert_eq!(out.data()[[0, 0]], 2.0);
        assert_eq!(out.data()[[0, 1]], 3.0);
    }

    #[test]
    fn select_drop_collapses_single_index() {
        let arr = make_array(&[3, 2], vec![Dim::Time, Dim::Lat]);
        let out = arr.select(Dim::Time, &[1], DropMode::Drop).unwrap();
        assert_eq!(out.dims(), &[Dim::Lat]);
        assert_eq!(out.shape(), &[2]);
        assert_eq!(out.data()[[0]], 2.0);
        assert_eq!(out.data()[[1]], 3.0);
    }

    #[test]
    fn select_drop_keeps_rank_for_multiple_indices() {
        let arr = make_array(&[3, 2], vec![Dim::Time, Dim::Lat]);
        let out = arr.select(Dim::Time, &[0, 2], DropMode::Drop).unwrap();
        assert_eq!(out.dims(), &[Dim::Time, Dim::Lat]);
        assert_eq!(out.shape(), &[2, 2]);
        assert_eq!(out.data()[[1, 0]], 4.0);
    }

    #[test]
    fn select_follows_index_order() {
        let arr = make_array(&[4], vec![Dim::Time]);
        let out = arr.select(Dim::Time, &[2, 0, 3], DropMode::Keep).unwrap();
        assert_eq!(out.data().as_slice().unwrap(), &[2.0, 0.0, 3.0]);
    }

    #[test]
    fn select_middle_axis() {
        let arr = make_array(&[2, 3, 2], vec![Dim::Time, Dim::Lat, Dim::Lon]);
        let out = arr.select(Dim::Lat, &[2], DropMode::Drop).unwrap();
        assert_eq!(out.dims(), &[Dim::Time, Dim::Lon]);
        assert_eq!(out.shape(), &[2, 2]);
        // Row t=0 of the original lat=2 slice is values [4, 5].
        assert_eq!(out.data()[[0, 0]], 4.0);
        assert_eq!(out.data()[[0, 1]], 5.0);
        assert_eq!(out.data()[[1, 0]], 10.0);
    }

    #[test]
    fn select_missing_dimension_errors() {
        let arr = make_array(&[3], vec![Dim::Time]);
        let err = arr.select(Dim::Member, &[0], DropMode::Keep).unwrap_err();
        assert_eq!(err, GridError::DimensionAbsent { dim: Dim::Member });
    }

    #[test]
    fn select_empty_indices_errors() {
        let arr = make_array(&[3], vec![Dim::Time]);
        let err = arr.select(Dim::Time, &[], DropMode::Keep).unwrap_err();
        assert_eq!(err, GridError::EmptySelection { dim: Dim::Time });
    }

    #[test]
    fn select_out_of_bounds_errors() {
        let arr = make_array(&[3], vec![Dim::Time]);
        let err = arr.select(Dim::Time, &[0, 3], DropMode::Keep).unwrap_err();
        assert_eq!(
            err,
            GridError::IndexOutOfBounds {
                dim: Dim::Time,
                index: 3,
                size: 3
            }
        );
    }

    #[test]
    fn full_selection_round_trips() {
        let arr = make_array(&[2, 3], vec![Dim::Time, Dim::Lat]);
        let out = arr.select(Dim::Lat, &[0, 1, 2], DropMode::Drop).unwrap();
        assert_eq!(out, arr);
    }
}
