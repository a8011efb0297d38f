// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Goodness-of-fit helpers for distribution tests.

/// Standard normal quantile for p = 0.0001 (upper tail).
const Z_P_0_0001: f64 = 3.719;

/// Pearson's chi-squared statistic of `observed` against a uniform expectation.
///
/// Returns 0.0 for empty input or zero total count.
pub fn chi_squared(observed: &[usize]) -> f64 {
    let total: usize = observed.iter().sum();
    if observed.is_empty() || total == 0 {
        return 0.0;
    }

    let expected = total as f64 / observed.len() as f64;

    observed
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            (diff * diff) / expected
        })
        .sum()
}

/// Approximate chi-squared critical value for `df` degrees of freedom at the
/// upper-tail quantile `z` (Wilson-Hilferty transform).
pub fn chi_squared_critical(df: usize, z: f64) -> f64 {
    let df = df as f64;
    let h = 2.0 / (9.0 * df);

    df * (1.0 - h + z * h.sqrt()).powi(3)
}

/// Asserts that `observed` bucket counts are consistent with a uniform
/// distribution at p = 0.0001.
///
/// # Panics
///
/// Panics if fewer than two buckets are given, if any bucket is empty, or if
/// the chi-squared statistic exceeds the critical value.
pub fn assert_uniform(observed: &[usize]) {
    assert!(observed.len() >= 2, "need at least two buckets");

    for (bucket, &count) in observed.iter().enumerate() {
        assert!(count > 0, "bucket {} was never hit", bucket);
    }

    let statistic = chi_squared(observed);
    let critical = chi_squared_critical(observed.len() - 1, Z_P_0_0001);

    assert!(
        statistic <= critical,
        "chi-squared {:.2} exceeds critical value {:.2} (df={}, counts={:?})",
        statistic,
        critical,
        observed.len() - 1,
        observed
    );
}
