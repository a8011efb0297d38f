// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for randomstr crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod stats;

pub use stats::{assert_uniform, chi_squared, chi_squared_critical};
