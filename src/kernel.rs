use ndarray::{Array2, ArrayView2, Zip};

use crate::error::KernelPcaError;

/// Kernel function used to build the Gram matrix of a data set.
///
/// Each variant carries its own typed parameters; there is no shared state
/// between kernels and no caching of previously built matrices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Kernel {
    /// `K = Xᵀ·X`. No parameters.
    Linear,
    /// `K = (Xᵀ·X + c)^p`, the power applied element-wise after the additive
    /// constant. `degree` must be non-negative.
    Polynomial { degree: i32, constant: f64 },
    /// `K[i,j] = exp(-‖xᵢ - xⱼ‖² / (2σ²))`. `sigma` must be positive.
    Rbf { sigma: f64 },
}

impl Default for Kernel {
    fn default() -> Self {
        Kernel::Linear
    }
}

impl Kernel {
    /// Polynomial kernel with the default degree 2 and constant 1.0.
    pub fn polynomial() -> Self {
        Kernel::Polynomial {
            degree: 2,
            constant: 1.0,
        }
    }

    /// RBF kernel with the default bandwidth of 15.
    pub fn rbf() -> Self {
        Kernel::Rbf { sigma: 15.0 }
    }

    /// Checks the kernel hyperparameters against their domains.
    pub fn validate(&self) -> Result<(), KernelPcaError> {
        match *self {
            Kernel::Linear => Ok(()),
            Kernel::Polynomial { degree, .. } => {
                if degree < 0 {
                    Err(KernelPcaError::InvalidParameter(format!(
                        "polynomial degree must be non-negative, got {}",
                        degree
                    )))
                } else {
                    Ok(())
                }
            }
            Kernel::Rbf { sigma } => {
                if sigma <= 0.0 {
                    Err(KernelPcaError::InvalidParameter(format!(
                        "RBF bandwidth sigma must be positive, got {}",
                        sigma
                    )))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Builds the n×n Gram matrix for `data` of shape (d_features, n_samples),
    /// columns being samples.
    ///
    /// The result is symmetric, and positive semi-definite for valid kernel
    /// parameters. It is recomputed from scratch on every call.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a hyperparameter violates its domain and
    /// `DimensionMismatch` if `data` has zero sample columns.
    pub fn gram_matrix(&self, data: ArrayView2<f64>) -> Result<Array2<f64>, KernelPcaError> {
        self.validate()?;
        if data.ncols() == 0 {
            return Err(KernelPcaError::DimensionMismatch(
                "data matrix has no sample columns".to_string(),
            ));
        }

        let gram = match *self {
            Kernel::Linear => data.t().dot(&data),
            Kernel::Polynomial { degree, constant } => {
                let mut gram = data.t().dot(&data);
                gram.mapv_inplace(|v| (v + constant).powi(degree));
                gram
            }
            Kernel::Rbf { sigma } => rbf_gram(data, sigma),
        };
        Ok(gram)
    }
}

/// RBF Gram matrix from the inner-product matrix: the pairwise squared
/// distance is `‖xᵢ‖² + ‖xⱼ‖² − 2⟨xᵢ,xⱼ⟩`, clamped at zero against rounding.
fn rbf_gram(data: ArrayView2<f64>, sigma: f64) -> Array2<f64> {
    let mut gram = data.t().dot(&data);
    let squared_norms = gram.diag().to_owned();
    let denominator = 2.0 * sigma * sigma;

    Zip::indexed(&mut gram).par_for_each(|(i, j), v| {
        let squared_distance = (squared_norms[i] + squared_norms[j] - 2.0 * *v).max(0.0);
        *v = (-squared_distance / denominator).exp();
    });
    gram
}
