// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Adapter from `rand_core` generators to [`EntropySource`].

use core::cell::RefCell;

use rand_core::{CryptoRng, RngCore};

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Entropy source backed by a [`CryptoRng`].
///
/// Lets callers plug in a seeded generator (e.g. `rand::rngs::StdRng`) to get
/// reproducible output. The generator sits behind a `RefCell`, so this type
/// is meant for single-threaded use; share [`SystemEntropySource`] instead
/// when threads are involved.
///
/// [`SystemEntropySource`]: crate::SystemEntropySource
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use randomstr_rand::{RngEntropySource, sample_below};
///
/// let a = RngEntropySource::new(StdRng::seed_from_u64(7));
/// let b = RngEntropySource::new(StdRng::seed_from_u64(7));
///
/// assert_eq!(sample_below(&a, 1000), sample_below(&b, 1000));
/// ```
#[derive(Debug)]
pub struct RngEntropySource<R> {
    rng: RefCell<R>,
}

impl<R: CryptoRng> RngEntropySource<R> {
    /// Wraps `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng.into_inner()
    }
}

impl<R: CryptoRng> EntropySource for RngEntropySource<R> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        // Re-entrant use would be a caller bug; report it instead of panicking.
        let mut rng = self
            .rng
            .try_borrow_mut()
            .map_err(|_| EntropyError::EntropyNotAvailable)?;
        RngCore::fill_bytes(&mut *rng, dest);

        Ok(())
    }
}
