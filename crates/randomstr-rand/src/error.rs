// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when generating random data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntropyError {
    /// System entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,
}

/// Errors returned by [`sample_below`](crate::sample_below) and
/// [`shuffle`](crate::shuffle).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    /// The exclusive upper bound was zero, so `[0, bound)` is empty.
    #[error("upper bound must be positive")]
    InvalidBound,

    /// The entropy source failed while drawing bytes.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
