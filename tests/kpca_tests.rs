use approx::assert_abs_diff_eq;
use kernel_pca::{center_data, fit_transform, Kernel, KernelPca, KernelPcaError};
use ndarray::{array, Array2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates random data of shape (n_samples x n_features) in [0, 1), seeded
/// for reproducibility.
fn generate_random_data(n_samples: usize, n_features: usize, seed: u64) -> Array2<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Array2::from_shape_fn((n_samples, n_features), |_| rng.gen_range(0.0..1.0))
}

/// The 3-feature, 6-sample reference matrix, stored samples-as-rows.
fn reference_records() -> Array2<f64> {
    array![
        [0.0, 2.0, 1.0],
        [2.0, 0.0, 4.0],
        [3.0, 1.0, 2.0],
        [1.0, 0.0, 2.0],
        [1.0, 5.0, 5.0],
        [0.0, 8.0, 3.0],
    ]
}

#[test]
fn linear_kpca_on_the_reference_matrix() {
    let records = reference_records();
    let mut kpca = KernelPca::new(Kernel::Linear, 2);
    let embedding = kpca.fit_transform(records.view()).unwrap();
    assert_eq!(embedding.dim(), (6, 2));

    // the centered Gram matrix must be symmetric and positive semi-definite
    let centered = center_data(records.t()).unwrap();
    let gram = Kernel::Linear.gram_matrix(centered.view()).unwrap();
    for i in 0..6 {
        for j in 0..6 {
            assert_abs_diff_eq!(gram[[i, j]], gram[[j, i]], epsilon = 1e-10);
        }
    }
    let mut full = KernelPca::new(Kernel::Linear, 6);
    full.fit_transform(records.view()).unwrap();
    let spectrum = full.eigenvalues().unwrap();
    assert!(spectrum.iter().all(|&v| v >= -1e-8));

    // column contributions (sqrt of eigenvalues) are non-increasing
    let column_norms: Vec<f64> = (0..2)
        .map(|k| embedding.column(k).dot(&embedding.column(k)).sqrt())
        .collect();
    assert!(column_norms[0] >= column_norms[1]);
}

#[test]
fn all_kernel_variants_produce_finite_embeddings() {
    let records = generate_random_data(40, 8, 1234);
    for kernel in [Kernel::Linear, Kernel::polynomial(), Kernel::rbf()] {
        let mut kpca = KernelPca::new(kernel, 3);
        let embedding = kpca.fit_transform(records.view()).unwrap();
        assert_eq!(embedding.dim(), (40, 3));
        assert!(embedding.iter().all(|v| v.is_finite()));
        let eigenvalues = kpca.eigenvalues().unwrap();
        for k in 1..eigenvalues.len() {
            assert!(eigenvalues[k - 1] >= eigenvalues[k]);
        }
    }
}

#[test]
fn rbf_gram_entries_stay_in_unit_interval_after_centering() {
    let records = generate_random_data(25, 5, 42);
    let centered = center_data(records.t()).unwrap();
    let gram = Kernel::rbf().gram_matrix(centered.view()).unwrap();
    for i in 0..25 {
        assert_abs_diff_eq!(gram[[i, i]], 1.0, epsilon = 1e-12);
        for j in 0..25 {
            assert!(gram[[i, j]] > 0.0 && gram[[i, j]] <= 1.0);
        }
    }
}

#[test]
fn centering_leaves_zero_feature_means() {
    let records = generate_random_data(30, 7, 7);
    let centered = center_data(records.t()).unwrap();
    for row in centered.rows() {
        assert_abs_diff_eq!(row.mean().unwrap(), 0.0, epsilon = 1e-10);
    }
}

#[test]
fn smaller_embeddings_are_prefixes_up_to_sign() {
    let records = generate_random_data(20, 6, 99);
    let centered = center_data(records.t()).unwrap();
    let gram = Kernel::polynomial().gram_matrix(centered.view()).unwrap();

    let small = fit_transform(gram.view(), 2).unwrap();
    let large = fit_transform(gram.view(), 5).unwrap();
    for k in 0..2 {
        let a = small.column(k);
        let b = large.column(k);
        let same: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum();
        let flipped: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x + y).abs()).sum();
        assert!(same.min(flipped) < 1e-8);
    }
}

#[test]
fn full_rank_run_succeeds_and_matches_the_trace() {
    let records = reference_records();
    let centered = center_data(records.t()).unwrap();
    let gram = Kernel::Linear.gram_matrix(centered.view()).unwrap();

    let embedding = fit_transform(gram.view(), 6).unwrap();
    assert_eq!(embedding.dim(), (6, 6));

    // sum of squared embedding entries equals the eigenvalue sum, the trace
    let trace: f64 = (0..6).map(|i| gram[[i, i]]).sum();
    let total: f64 = embedding.iter().map(|v| v * v).sum();
    assert_abs_diff_eq!(total, trace, epsilon = 1e-8);
}

#[test]
fn invalid_component_counts_fail_without_partial_results() {
    let records = reference_records();
    for requested in [0usize, 7] {
        let mut kpca = KernelPca::new(Kernel::Linear, requested);
        let err = kpca.fit_transform(records.view()).unwrap_err();
        assert!(matches!(err, KernelPcaError::InvalidComponentCount { .. }));
        assert!(kpca.eigenvalues().is_none());
    }
}

#[test]
fn rbf_with_zero_bandwidth_fails() {
    let records = reference_records();
    let mut kpca = KernelPca::new(Kernel::Rbf { sigma: 0.0 }, 2);
    let err = kpca.fit_transform(records.view()).unwrap_err();
    assert!(matches!(err, KernelPcaError::InvalidParameter(_)));
}

#[test]
fn independent_runs_share_no_state() {
    let records = generate_random_data(15, 4, 5);
    let mut first = KernelPca::new(Kernel::Linear, 2);
    let mut second = KernelPca::new(Kernel::Linear, 2);
    let a = first.fit_transform(records.view()).unwrap();
    let b = second.fit_transform(records.view()).unwrap();
    assert_abs_diff_eq!(a, b, epsilon = 1e-12);
}
