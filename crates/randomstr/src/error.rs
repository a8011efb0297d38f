// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! randomstr error types

use thiserror::Error;

use randomstr_rand::SampleError;

/// Errors returned by the string composer and character samplers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Fewer characters were requested than there are mandatory classes.
    #[error("length {length} is shorter than the {required} required character classes")]
    LengthTooShort {
        /// Requested length.
        length: usize,
        /// Number of enabled character classes.
        required: usize,
    },

    /// The exclusion set removes every character the operation could draw.
    #[error("exclusions leave no usable characters")]
    ExhaustedAlphabet,

    /// The sampler returned a value outside the printable pool.
    ///
    /// Signals a broken sampler. Never retried.
    #[error("sampled value {raw} is outside the printable range")]
    InternalInvariantViolation {
        /// Offending raw sample.
        raw: usize,
    },

    /// Sampling failed, usually because the entropy source did.
    #[error(transparent)]
    Sample(#[from] SampleError),
}
