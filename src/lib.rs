// Kernel principal component analysis (KPCA)

#![doc = include_str!("../README.md")]

mod center;
mod error;
mod kernel;
mod projection;

pub use center::center_data;
pub use error::KernelPcaError;
pub use kernel::Kernel;
pub use projection::fit_transform;

use log::debug;
use ndarray::{Array1, Array2, ArrayView2};

/// Kernel principal component analysis pipeline.
///
/// Holds a kernel choice and a target dimension, and runs input-space
/// centering, Gram matrix construction, and the eigen-projection in one call.
/// The eigenvalues of the most recent run are kept for inspection.
pub struct KernelPca {
    kernel: Kernel,
    n_components: usize,
    eigenvalues: Option<Array1<f64>>,
}

impl KernelPca {
    /// Creates a pipeline for the given kernel and embedding dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use kernel_pca::{Kernel, KernelPca};
    /// let kpca = KernelPca::new(Kernel::rbf(), 2);
    /// ```
    pub fn new(kernel: Kernel, n_components: usize) -> Self {
        Self {
            kernel,
            n_components,
            eigenvalues: None,
        }
    }

    /// Embeds `records`, shape (n_samples, n_features), into
    /// `n_components` dimensions. Row i of the result is the embedding of
    /// sample i.
    ///
    /// The records are transposed to the internal features-by-samples
    /// orientation, centered per feature in input space, turned into an
    /// n×n Gram matrix under the configured kernel, and projected onto the
    /// top eigen-directions scaled by the square roots of the eigenvalues.
    ///
    /// # Errors
    ///
    /// Propagates [`KernelPcaError`] from any stage: invalid kernel
    /// parameters, degenerate input shapes, an out-of-range component count,
    /// a genuinely negative eigenvalue, or an eigensolver failure. On error
    /// no eigenvalue state is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use kernel_pca::{Kernel, KernelPca};
    /// use ndarray::array;
    ///
    /// let records = array![
    ///     [0.0, 2.0, 1.0],
    ///     [2.0, 0.0, 4.0],
    ///     [3.0, 1.0, 2.0],
    ///     [1.0, 0.0, 2.0],
    ///     [1.0, 5.0, 5.0],
    ///     [0.0, 8.0, 3.0],
    /// ];
    /// let mut kpca = KernelPca::new(Kernel::Linear, 2);
    /// let embedding = kpca.fit_transform(records.view()).unwrap();
    /// assert_eq!(embedding.dim(), (6, 2));
    /// ```
    pub fn fit_transform(
        &mut self,
        records: ArrayView2<f64>,
    ) -> Result<Array2<f64>, KernelPcaError> {
        self.eigenvalues = None;
        debug!(
            "KPCA reducing {} samples from {} to {} dimensions with {:?}",
            records.nrows(),
            records.ncols(),
            self.n_components,
            self.kernel
        );

        let data = records.t();
        let centered = center_data(data)?;
        let gram = self.kernel.gram_matrix(centered.view())?;
        let (eigenvalues, coordinates) =
            projection::eigen_project(gram.view(), self.n_components)?;
        self.eigenvalues = Some(eigenvalues);
        Ok(coordinates)
    }

    /// Descending eigenvalues of the most recent successful run, or `None`
    /// before the first fit.
    pub fn eigenvalues(&self) -> Option<&Array1<f64>> {
        self.eigenvalues.as_ref()
    }

    /// The configured kernel.
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// The configured embedding dimension.
    pub fn n_components(&self) -> usize {
        self.n_components
    }
}
