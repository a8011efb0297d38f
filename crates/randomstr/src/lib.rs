// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # randomstr
//!
//! Random strings for passwords and tokens, drawn from a cryptographically
//! secure entropy source.
//!
//! Output is restricted to printable ASCII (code points 33-126). Callers may
//! exclude characters and, with [`generate_diverse`], require at least one
//! special character, upper case letter, lower case letter and digit.
//!
//! ## Core Types
//!
//! - [`CharClass`]: special, numeric, lower and upper character tables
//! - [`ExclusionSet`]: characters that must never be produced
//! - [`DiverseOptions`]: classes left out of the inclusion guarantee
//! - [`RandomStr`]: generator bound to an [`EntropySource`]
//!
//! ## Example
//!
//! ```rust
//! use randomstr::{DiverseOptions, ExclusionSet};
//!
//! let token = randomstr::generate(20, &ExclusionSet::new()).expect("Failed to generate");
//! assert_eq!(token.len(), 20);
//!
//! let password = randomstr::generate_diverse(
//!     12,
//!     &ExclusionSet::from("\"'\\"),
//!     DiverseOptions::new(),
//! )
//! .expect("Failed to generate");
//! assert!(password.chars().any(|c| c.is_ascii_digit()));
//! ```
//!
//! ## Entropy
//!
//! Every random decision goes through [`randomstr_rand::sample_below`] on an
//! explicitly passed [`EntropySource`]. The free functions in this module use
//! a fresh [`SystemEntropySource`]; use [`compose`] or [`RandomStr`] to supply
//! another one, e.g. a seeded [`randomstr_rand::RngEntropySource`] in tests.
//!
//! ## Logging
//!
//! Generation emits `tracing` debug events carrying the requested length and
//! counts only. Generated characters are never logged.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod exclusion;
mod generator;

pub mod charset;
pub mod compose;

use alloc::string::String;

pub use charset::{
    CharClass, PRINTABLE, gen_lower_char, gen_numeric_char, gen_special_char, gen_upper_char,
    lower_chars, numeric_chars, special_chars, upper_chars,
};
pub use compose::DiverseOptions;
pub use error::GenerateError;
pub use exclusion::ExclusionSet;
pub use generator::RandomStr;
pub use randomstr_rand::{EntropySource, SampleError, SystemEntropySource};

#[cfg(any(test, feature = "test-utils"))]
pub use randomstr_rand::test_utils;

/// [`compose::generate`] over the system entropy source.
pub fn generate(length: usize, exclusions: &ExclusionSet) -> Result<String, GenerateError> {
    compose::generate(&SystemEntropySource {}, length, exclusions)
}

/// [`compose::generate_diverse`] over the system entropy source.
pub fn generate_diverse(
    length: usize,
    exclusions: &ExclusionSet,
    options: DiverseOptions,
) -> Result<String, GenerateError> {
    compose::generate_diverse(&SystemEntropySource {}, length, exclusions, options)
}
