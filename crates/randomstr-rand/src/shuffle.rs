// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fisher-Yates shuffle driven by [`sample_below`].

use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::error::SampleError;
use crate::sample::sample_below;
use crate::traits::EntropySource;

/// Permutes `items` uniformly at random.
///
/// Repeatedly picks a uniform index into the not-yet-drawn pool, removes that
/// element and appends it to the output, until the pool is empty. Given an
/// unbiased [`sample_below`], every permutation is equiprobable.
///
/// Sequences of length 0 or 1 are left untouched and consume no entropy. The
/// intermediate pool buffer is zeroized before it is released, and `items`
/// keeps at least its original capacity.
///
/// # Errors
///
/// Returns [`SampleError::Entropy`] if the entropy source fails. `items` still
/// holds the same elements in that case, partially reordered.
///
/// # Example
///
/// ```rust
/// use randomstr_rand::{SystemEntropySource, shuffle};
///
/// let entropy = SystemEntropySource {};
/// let mut data = vec![1u8, 2, 3, 4, 5];
/// shuffle(&entropy, &mut data).expect("Failed to shuffle");
///
/// data.sort();
/// assert_eq!(data, [1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, E>(entropy: &E, items: &mut Vec<T>) -> Result<(), SampleError>
where
    T: Zeroize,
    E: EntropySource + ?Sized,
{
    if items.len() <= 1 {
        return Ok(());
    }

    // A pre-sized caller buffer must never regrow: the old block would be
    // freed without zeroization.
    let capacity = items.capacity();
    let mut pool = core::mem::replace(items, Vec::with_capacity(capacity));

    let result = drain_randomly(entropy, &mut pool, items);

    // Only non-empty on failure.
    items.append(&mut pool);
    pool.zeroize();

    result
}

fn drain_randomly<T, E>(entropy: &E, pool: &mut Vec<T>, out: &mut Vec<T>) -> Result<(), SampleError>
where
    E: EntropySource + ?Sized,
{
    while !pool.is_empty() {
        let index = sample_below(entropy, pool.len())?;
        out.push(pool.remove(index));
    }

    Ok(())
}
