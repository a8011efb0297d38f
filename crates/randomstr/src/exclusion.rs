// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::collections::BTreeSet;
use alloc::collections::btree_set;

/// Characters that must never appear in generated output.
///
/// Duplicates collapse. Characters outside the printable pool may be added
/// but have no effect, since they are never sampled.
///
/// # Example
///
/// ```rust
/// use randomstr::ExclusionSet;
///
/// let ambiguous = ExclusionSet::from("0O1lI|0O");
///
/// assert_eq!(ambiguous.len(), 6);
/// assert!(ambiguous.contains('O'));
/// assert!(!ambiguous.contains('o'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    chars: BTreeSet<char>,
}

impl ExclusionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `c`, returning `false` if it was already excluded.
    pub fn insert(&mut self, c: char) -> bool {
        self.chars.insert(c)
    }

    /// Returns `true` if `c` is excluded.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of distinct excluded characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns `true` if every character of `pool` is excluded.
    ///
    /// An empty pool is trivially covered.
    pub fn covers(&self, pool: &[char]) -> bool {
        pool.iter().all(|&c| self.contains(c))
    }

    /// Iterates the excluded characters in code point order.
    pub fn iter(&self) -> btree_set::Iter<'_, char> {
        self.chars.iter()
    }
}

impl FromIterator<char> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for ExclusionSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.chars.extend(iter);
    }
}

impl From<&str> for ExclusionSet {
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}

impl From<&[char]> for ExclusionSet {
    fn from(chars: &[char]) -> Self {
        chars.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a ExclusionSet {
    type Item = &'a char;
    type IntoIter = btree_set::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
