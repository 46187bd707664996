use ndarray::{Array2, ArrayView2, Axis};

use crate::error::KernelPcaError;

/// Subtracts the per-feature mean from every sample column of `data`, shape
/// (d_features, n_samples), and returns the centered copy.
///
/// This is centering in input space, applied once before kernel
/// construction. It is intentionally NOT the canonical kernel-PCA
/// double-centering of the Gram matrix in feature space; the two differ
/// numerically for nonlinear kernels, and the simplified input-space
/// behavior is the one this crate preserves.
///
/// After the call, the mean of each feature row across samples is zero up to
/// floating-point rounding.
///
/// # Errors
///
/// Returns `DimensionMismatch` if `data` has zero sample columns.
pub fn center_data(data: ArrayView2<f64>) -> Result<Array2<f64>, KernelPcaError> {
    if data.ncols() == 0 {
        return Err(KernelPcaError::DimensionMismatch(
            "cannot center a data matrix with no sample columns".to_string(),
        ));
    }
    let mean = data.mean_axis(Axis(1)).ok_or_else(|| {
        KernelPcaError::DimensionMismatch("failed to compute per-feature mean".to_string())
    })?;

    let mut centered = data.to_owned();
    centered -= &mean.insert_axis(Axis(1));
    Ok(centered)
}
