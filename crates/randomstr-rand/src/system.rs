// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// The operating system CSPRNG, reached through `getrandom`.
///
/// Default source for every `randomstr` operation. It holds no state, so one
/// value can be copied into, or shared between, any number of threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemEntropySource {}

impl SystemEntropySource {
    /// Runs `fill` over `dest`, collapsing any platform error into
    /// [`EntropyError::EntropyNotAvailable`].
    #[inline(always)]
    pub(crate) fn fill_via<F, P>(fill: F, dest: &mut [u8]) -> Result<(), EntropyError>
    where
        F: FnOnce(&mut [u8]) -> Result<(), P>,
    {
        fill(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if dest.is_empty() {
            return Ok(());
        }

        Self::fill_via(getrandom::fill, dest)
    }
}
