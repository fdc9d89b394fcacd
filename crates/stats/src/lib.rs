//! NaN-aware statistical helpers for gridded climate data.
//!
//! NaN is the missing-value marker throughout: every function here skips
//! NaN entries instead of propagating them, and yields NaN only when no
//! valid value remains.

use ndarray::{Array1, ArrayView2};

/// Arithmetic mean of the non-NaN values of a slice.
///
/// Returns NaN if the slice is empty or contains only NaN values.
pub fn nan_mean(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0_usize;
    for &value in data {
        if !value.is_nan() {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Number of non-NaN values in a slice.
pub fn valid_count(data: &[f64]) -> usize {
    data.iter().filter(|value| !value.is_nan()).count()
}

/// Per-column mean over the rows of a matrix, skipping NaN values.
///
/// For a `time x space` matrix this yields the temporal mean of each
/// spatial cell. Columns with no non-NaN values yield NaN.
pub fn column_nan_means(data: ArrayView2<'_, f64>) -> Array1<f64> {
    let cols = data.ncols();
    let mut sums = vec![0.0; cols];
    let mut counts = vec![0_usize; cols];
    for row in data.rows() {
        for (j, &value) in row.iter().enumerate() {
            if !value.is_nan() {
                sums[j] += value;
                counts[j] += 1;
            }
        }
    }
    Array1::from_iter((0..cols).map(|j| {
        if counts[j] == 0 {
            f64::NAN
        } else {
            sums[j] / counts[j] as f64
        }
    }))
}
