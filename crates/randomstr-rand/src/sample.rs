// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Unbiased bounded sampling.
//!
//! # Algorithm
//!
//! 1. Compute the bit length `k` of `bound - 1`
//! 2. Draw `ceil(k / 8)` bytes and keep the low `k` bits
//! 3. Reject and redraw while the candidate is `>= bound`
//!
//! Every candidate in `[0, 2^k)` is equally likely and at least half of them
//! are accepted, so the expected number of draws is below two. Modulo
//! reduction is never used.

use core::mem::size_of;

use zeroize::Zeroize;

use crate::error::SampleError;
use crate::traits::EntropySource;

const WORD_BYTES: usize = size_of::<usize>();

/// Returns a uniformly distributed integer in `[0, bound)`.
///
/// A `bound` of 1 always yields 0 without touching the entropy source.
///
/// # Errors
///
/// - [`SampleError::InvalidBound`] if `bound` is 0
/// - [`SampleError::Entropy`] if the entropy source fails
///
/// # Example
///
/// ```rust
/// use randomstr_rand::{SampleError, SystemEntropySource, sample_below};
///
/// let entropy = SystemEntropySource {};
///
/// assert!(sample_below(&entropy, 94).expect("Failed to sample") < 94);
/// assert_eq!(sample_below(&entropy, 0), Err(SampleError::InvalidBound));
/// ```
pub fn sample_below<E: EntropySource + ?Sized>(
    entropy: &E,
    bound: usize,
) -> Result<usize, SampleError> {
    if bound == 0 {
        return Err(SampleError::InvalidBound);
    }

    if bound == 1 {
        return Ok(0);
    }

    let bits = usize::BITS - (bound - 1).leading_zeros();
    let byte_len = bits.div_ceil(8) as usize;
    let mask = usize::MAX >> (usize::BITS - bits);

    let mut buf = [0u8; WORD_BYTES];
    let result = draw_below(entropy, bound, mask, &mut buf[..byte_len]);
    buf.zeroize();

    result
}

#[inline(always)]
fn draw_below<E: EntropySource + ?Sized>(
    entropy: &E,
    bound: usize,
    mask: usize,
    buf: &mut [u8],
) -> Result<usize, SampleError> {
    loop {
        entropy.fill_bytes(buf)?;

        let candidate = from_le_bytes(buf) & mask;
        if candidate < bound {
            return Ok(candidate);
        }
    }
}

#[inline(always)]
fn from_le_bytes(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .rev()
        .fold(0usize, |acc, &byte| (acc << 8) | byte as usize)
}
