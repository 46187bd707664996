use log::{debug, warn};
use ndarray::{s, Array1, Array2, ArrayView2};
use ndarray_linalg::{Eigh, UPLO};

use crate::error::KernelPcaError;

/// Relative tolerance below zero within which an eigenvalue is treated as a
/// rounding artifact of an exactly-zero eigenvalue and clipped.
const EIGENVALUE_CLIP_TOLERANCE: f64 = 1e-10;

/// Projects the samples of the symmetric Gram matrix onto its top
/// `n_components` eigen-directions. Returns the (n_samples, n_components)
/// embedding; row i is the embedding of sample i.
///
/// # Errors
///
/// Fails with `DimensionMismatch` for a non-square or empty matrix,
/// `InvalidComponentCount` for `n_components` outside `[1, n]`,
/// `SolverDidNotConverge` if the backend solver fails, and
/// `NonPositiveEigenvalue` for a genuinely negative eigenvalue.
pub fn fit_transform(
    gram: ArrayView2<f64>,
    n_components: usize,
) -> Result<Array2<f64>, KernelPcaError> {
    let (_, coordinates) = eigen_project(gram, n_components)?;
    Ok(coordinates)
}

/// Eigendecomposes the symmetric Gram matrix, keeps the `n_components`
/// largest eigenpairs in descending eigenvalue order, and scales each
/// eigenvector column by the square root of its eigenvalue.
///
/// The backend solver returns the full ascending spectrum; the top slice
/// `[n - q, n)` is taken from it and reversed to descending order.
///
/// Eigenvalues below zero but within `EIGENVALUE_CLIP_TOLERANCE` relative to
/// the largest magnitude are clipped to zero with a warning; anything more
/// negative fails with `NonPositiveEigenvalue` instead of propagating NaN
/// through the square root.
///
/// # Errors
///
/// - `DimensionMismatch` if `gram` is empty or not square.
/// - `InvalidComponentCount` if `n_components` is outside `[1, n]`.
/// - `SolverDidNotConverge` if the backend eigensolver fails.
/// - `NonPositiveEigenvalue` if a requested eigenvalue is genuinely negative.
pub fn eigen_project(
    gram: ArrayView2<f64>,
    n_components: usize,
) -> Result<(Array1<f64>, Array2<f64>), KernelPcaError> {
    let n_samples = gram.nrows();
    if n_samples == 0 || gram.ncols() != n_samples {
        return Err(KernelPcaError::DimensionMismatch(format!(
            "kernel matrix must be square and non-empty, got {}x{}",
            n_samples,
            gram.ncols()
        )));
    }
    if n_components < 1 || n_components > n_samples {
        return Err(KernelPcaError::InvalidComponentCount {
            requested: n_components,
            n_samples,
        });
    }

    debug!(
        "eigendecomposing {}x{} kernel matrix, keeping top {} components",
        n_samples, n_samples, n_components
    );
    let (eigenvalues_ascending, eigenvectors) = gram
        .eigh(UPLO::Upper)
        .map_err(|e| KernelPcaError::SolverDidNotConverge(e.to_string()))?;

    let top_values = eigenvalues_ascending.slice(s![n_samples - n_components..]);
    let top_vectors = eigenvectors.slice(s![.., n_samples - n_components..]);

    let largest_magnitude = eigenvalues_ascending[n_samples - 1].abs().max(1.0);
    let clip_floor = -EIGENVALUE_CLIP_TOLERANCE * largest_magnitude;

    let mut eigenvalues = Array1::<f64>::zeros(n_components);
    let mut coordinates = Array2::<f64>::zeros((n_samples, n_components));
    for k in 0..n_components {
        // reverse the ascending solver order to descending
        let source = n_components - 1 - k;
        let raw = top_values[source];
        let eigenvalue = if raw >= 0.0 {
            raw
        } else if raw >= clip_floor {
            warn!(
                "clipping eigenvalue {:.6e} of component {} to zero",
                raw, k
            );
            0.0
        } else {
            return Err(KernelPcaError::NonPositiveEigenvalue {
                component: k,
                value: raw,
            });
        };
        eigenvalues[k] = eigenvalue;
        let scaled = top_vectors.column(source).mapv(|v| v * eigenvalue.sqrt());
        coordinates.column_mut(k).assign(&scaled);
    }

    Ok((eigenvalues, coordinates))
}
