use thiserror::Error;

/// The error type for every fallible operation in this crate.
///
/// Each variant is detected at the boundary of the function that can verify
/// the precondition; nothing is retried and no partial results are returned.
#[derive(Debug, Error)]
pub enum KernelPcaError {
    /// A kernel hyperparameter violates its domain, e.g. a non-positive RBF
    /// bandwidth or a negative polynomial degree.
    #[error("invalid kernel parameter: {0}")]
    InvalidParameter(String),

    /// The input matrix has a degenerate or inconsistent shape.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The requested number of components lies outside `[1, n_samples]`.
    #[error("requested {requested} components but the kernel matrix has {n_samples} samples")]
    InvalidComponentCount { requested: usize, n_samples: usize },

    /// A requested eigenvalue is negative beyond rounding tolerance, so the
    /// square-root scaling of the projection is undefined. The kernel matrix
    /// is not positive semi-definite.
    #[error("eigenvalue {value:.6e} of component {component} is negative; kernel matrix is not positive semi-definite")]
    NonPositiveEigenvalue { component: usize, value: f64 },

    /// The backend symmetric eigensolver failed to converge.
    #[error("symmetric eigensolver did not converge: {0}")]
    SolverDidNotConverge(String),
}
