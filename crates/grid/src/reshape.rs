//! Reshaping between grid arrays and flattened-space matrices.

use ndarray::{Array2, ArrayD, IxDyn};

use crate::array::DimArray;
use crate::dim::Dim;
use crate::error::GridError;

/// Flattens an array's spatial axes into a `rows x space` matrix.
///
/// Rows run over the non-spatial axes in canonical order, so for a
/// `time x lat x lon` array each row is one time step, and for a
/// `member x time x lat x lon` array the rows are member-major. Columns run
/// over the spatial cells lat-major (`cell = lat * n_lon + lon`). An array
/// without spatial axes yields a single column.
///
/// The flattening is lossless and order-preserving; [`unflatten_space`]
/// inverts it.
pub fn flatten_space(array: &DimArray) -> Array2<f64> {
    let cols: usize = array
        .dims()
        .iter()
        .zip(array.shape())
        .filter(|(dim, _)| matches!(dim, Dim::Lat | Dim::Lon))
        .map(|(_, &size)| size)
        .product();
    let rows: usize = array.shape().iter().product::<usize>() / cols;
    let values: Vec<f64> = array.data().iter().copied().collect();
    // safe: rows * cols equals the element count by construction
    Array2::from_shape_vec((rows, cols), values).unwrap()
}

/// Folds a flattened-space matrix back into an array of the given shape.
///
/// The matrix is read row by row, so passing the shape the array had
/// before [`flatten_space`] restores it exactly, trailing spatial axes
/// included.
///
/// # Errors
///
/// Returns [`GridError::MatrixShape`] if the element counts of the matrix
/// and of `shape` differ.
pub fn unflatten_space(matrix: &Array2<f64>, shape: &[usize]) -> Result<ArrayD<f64>, GridError> {
    let expected: usize = shape.iter().product();
    if matrix.len() != expected {
        return Err(GridError::MatrixShape {
            len: matrix.len(),
            expected,
        });
    }
    let values: Vec<f64> = matrix.iter().copied().collect();
    // safe: the target shape holds exactly the matrix's element count
    Ok(ArrayD::from_shape_vec(IxDyn(shape), values).unwrap())
}
