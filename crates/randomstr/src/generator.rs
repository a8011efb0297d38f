// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroize;

use randomstr_rand::{EntropySource, SampleError, SystemEntropySource};

use crate::charset::CharClass;
use crate::compose::{self, DiverseOptions};
use crate::error::GenerateError;
use crate::exclusion::ExclusionSet;

/// Generator bound to one entropy source.
///
/// Bundles the free functions of [`compose`], [`crate::charset`] and
/// `randomstr_rand` behind a single handle so callers pass the source once.
///
/// # Example
///
/// ```rust
/// use randomstr::{DiverseOptions, ExclusionSet, RandomStr};
///
/// let generator = RandomStr::system();
///
/// let token = generator
///     .generate(32, &ExclusionSet::new())
///     .expect("Failed to generate token");
/// let password = generator
///     .generate_diverse(12, &ExclusionSet::from("lI1O0"), DiverseOptions::new())
///     .expect("Failed to generate password");
///
/// assert_eq!(token.len(), 32);
/// assert_eq!(password.len(), 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RandomStr<E: EntropySource> {
    entropy: E,
}

impl RandomStr<SystemEntropySource> {
    /// Generator over the operating system CSPRNG.
    pub fn system() -> Self {
        Self::new(SystemEntropySource {})
    }
}

impl<E: EntropySource> RandomStr<E> {
    /// Wraps `entropy`.
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// The underlying entropy source.
    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    /// Unwraps the entropy source.
    pub fn into_inner(self) -> E {
        self.entropy
    }

    /// See [`randomstr_rand::sample_below`].
    pub fn sample_below(&self, bound: usize) -> Result<usize, SampleError> {
        randomstr_rand::sample_below(&self.entropy, bound)
    }

    /// See [`randomstr_rand::shuffle`].
    pub fn shuffle<T: Zeroize>(&self, items: &mut Vec<T>) -> Result<(), SampleError> {
        randomstr_rand::shuffle(&self.entropy, items)
    }

    /// Draws one character of `class`.
    pub fn char_of(&self, class: CharClass) -> Result<char, SampleError> {
        class.sample(&self.entropy)
    }

    /// See [`compose::generate`].
    pub fn generate(
        &self,
        length: usize,
        exclusions: &ExclusionSet,
    ) -> Result<String, GenerateError> {
        compose::generate(&self.entropy, length, exclusions)
    }

    /// See [`compose::generate_diverse`].
    pub fn generate_diverse(
        &self,
        length: usize,
        exclusions: &ExclusionSet,
        options: DiverseOptions,
    ) -> Result<String, GenerateError> {
        compose::generate_diverse(&self.entropy, length, exclusions, options)
    }
}
