// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # randomstr_rand
//!
//! Cryptographically secure randomness primitives for `randomstr`.
//!
//! Every random decision made by `randomstr` (index selection, character
//! selection and shuffling) goes through [`sample_below`], which draws from an
//! explicitly passed [`EntropySource`]. There is no process-wide generator.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`RngEntropySource`]: adapter over any [`rand_core::CryptoRng`], useful
//!   for seeded, reproducible runs
//!
//! ## Operations
//!
//! - [`sample_below`]: uniform integer in `[0, bound)` by rejection sampling
//! - [`shuffle`]: uniform permutation of a `Vec` driven by [`sample_below`]
//!
//! ## Example
//!
//! ```rust
//! use randomstr_rand::{SystemEntropySource, sample_below, shuffle};
//!
//! let entropy = SystemEntropySource {};
//!
//! let die = sample_below(&entropy, 6).expect("Failed to sample");
//! assert!(die < 6);
//!
//! let mut deck = vec!['a', 'b', 'c', 'd'];
//! shuffle(&entropy, &mut deck).expect("Failed to shuffle");
//! assert_eq!(deck.len(), 4);
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod rng;
mod sample;
mod shuffle;
mod support;
mod system;
mod traits;

pub use error::{EntropyError, SampleError};
pub use rng::RngEntropySource;
pub use sample::sample_below;
pub use shuffle::shuffle;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
