// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! String composition.
//!
//! Two algorithms, both driven solely by [`sample_below`]:
//!
//! - [`generate`]: `length` characters drawn uniformly from the printable
//!   pool, skipping excluded ones.
//! - [`generate_diverse`]: one character per enabled [`CharClass`], shuffled,
//!   then filled from the pool with a full reshuffle after every append.
//!
//! Both reject impossible exclusion sets up front, so the rejection loops
//! always terminate with probability one.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::debug;
use zeroize::Zeroizing;

use randomstr_rand::{EntropySource, sample_below, shuffle};

use crate::charset::{CharClass, PRINTABLE, PRINTABLE_FIRST, PRINTABLE_LAST, PRINTABLE_LEN};
use crate::error::GenerateError;
use crate::exclusion::ExclusionSet;

/// Character classes to leave out of the mandatory-inclusion guarantee of
/// [`generate_diverse`].
///
/// Disabled classes may still appear in the fill characters.
///
/// # Example
///
/// ```rust
/// use randomstr::{CharClass, DiverseOptions};
///
/// let options = DiverseOptions::new().without(CharClass::Special);
///
/// assert_eq!(options.enabled_count(), 3);
/// assert!(!options.is_enabled(CharClass::Special));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiverseOptions {
    /// Do not require a special character.
    pub no_special: bool,
    /// Do not require an upper case letter.
    pub no_upper: bool,
    /// Do not require a lower case letter.
    pub no_lower: bool,
    /// Do not require a digit.
    pub no_numeric: bool,
}

impl DiverseOptions {
    /// Seeding order of the mandatory characters.
    const SEED_ORDER: [CharClass; 4] = [
        CharClass::Special,
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Numeric,
    ];

    /// Every class enabled.
    pub const fn new() -> Self {
        Self {
            no_special: false,
            no_upper: false,
            no_lower: false,
            no_numeric: false,
        }
    }

    /// Every class disabled.
    pub const fn none() -> Self {
        Self {
            no_special: true,
            no_upper: true,
            no_lower: true,
            no_numeric: true,
        }
    }

    /// Returns a copy with `class` disabled.
    pub const fn without(mut self, class: CharClass) -> Self {
        match class {
            CharClass::Special => self.no_special = true,
            CharClass::Upper => self.no_upper = true,
            CharClass::Lower => self.no_lower = true,
            CharClass::Numeric => self.no_numeric = true,
        }
        self
    }

    /// Returns `true` if `class` must be represented.
    pub const fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Special => !self.no_special,
            CharClass::Upper => !self.no_upper,
            CharClass::Lower => !self.no_lower,
            CharClass::Numeric => !self.no_numeric,
        }
    }

    /// Enabled classes in seeding order: special, upper, lower, numeric.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        Self::SEED_ORDER
            .into_iter()
            .filter(|&class| self.is_enabled(class))
    }

    /// Number of enabled classes, i.e. the minimum diverse length.
    pub fn enabled_count(&self) -> usize {
        self.enabled_classes().count()
    }
}

impl FromIterator<CharClass> for DiverseOptions {
    /// Builds options with the given classes disabled.
    fn from_iter<I: IntoIterator<Item = CharClass>>(disabled: I) -> Self {
        disabled
            .into_iter()
            .fold(Self::new(), |options, class| options.without(class))
    }
}

/// Generates `length` printable characters, none of them in `exclusions`.
///
/// Each character is `sample_below(94) + 33`; excluded characters are
/// discarded and redrawn. A length of 0 returns immediately without touching
/// the entropy source.
///
/// # Errors
///
/// - [`GenerateError::ExhaustedAlphabet`] if `exclusions` covers the whole
///   printable pool
/// - [`GenerateError::InternalInvariantViolation`] if the sampler produces an
///   out-of-range value
/// - [`GenerateError::Sample`] if the entropy source fails
///
/// # Example
///
/// ```rust
/// use randomstr::{ExclusionSet, compose::generate};
/// use randomstr_rand::SystemEntropySource;
///
/// let entropy = SystemEntropySource {};
/// let token = generate(&entropy, 24, &ExclusionSet::from("\"'`\\"))
///     .expect("Failed to generate");
///
/// assert_eq!(token.len(), 24);
/// assert!(!token.contains('\''));
/// ```
pub fn generate<E: EntropySource + ?Sized>(
    entropy: &E,
    length: usize,
    exclusions: &ExclusionSet,
) -> Result<String, GenerateError> {
    debug!(length, excluded = exclusions.len(), "generating random string");

    if length == 0 {
        return Ok(String::new());
    }

    if exclusions.covers(&PRINTABLE) {
        return Err(GenerateError::ExhaustedAlphabet);
    }

    let mut output = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        output.push(draw_printable(entropy, exclusions)?);
    }

    Ok(core::mem::take(&mut *output))
}

/// Generates `length` characters with at least one from every class enabled in
/// `options`.
///
/// 1. Draw one non-excluded character per enabled class and shuffle them.
/// 2. Draw the remaining characters from the printable pool, skipping
///    excluded ones, and reshuffle the whole buffer after every append.
///
/// With every class disabled this is [`generate`] plus the reshuffles.
///
/// # Errors
///
/// - [`GenerateError::LengthTooShort`] if `length` is below the number of
///   enabled classes
/// - [`GenerateError::ExhaustedAlphabet`] if an enabled class is fully
///   excluded, or fill characters are needed and the whole pool is excluded
/// - [`GenerateError::InternalInvariantViolation`] if the sampler produces an
///   out-of-range value
/// - [`GenerateError::Sample`] if the entropy source fails
///
/// # Example
///
/// ```rust
/// use randomstr::{CharClass, DiverseOptions, ExclusionSet, compose::generate_diverse};
/// use randomstr_rand::SystemEntropySource;
///
/// let entropy = SystemEntropySource {};
/// let password = generate_diverse(&entropy, 16, &ExclusionSet::new(), DiverseOptions::new())
///     .expect("Failed to generate");
///
/// for class in CharClass::ALL {
///     assert!(password.chars().any(|c| class.contains(c)));
/// }
/// ```
pub fn generate_diverse<E: EntropySource + ?Sized>(
    entropy: &E,
    length: usize,
    exclusions: &ExclusionSet,
    options: DiverseOptions,
) -> Result<String, GenerateError> {
    let required = options.enabled_count();
    debug!(
        length,
        excluded = exclusions.len(),
        required,
        "generating diverse random string"
    );

    if length < required {
        return Err(GenerateError::LengthTooShort { length, required });
    }

    if options
        .enabled_classes()
        .any(|class| exclusions.covers(class.chars()))
    {
        return Err(GenerateError::ExhaustedAlphabet);
    }

    if length > required && exclusions.covers(&PRINTABLE) {
        return Err(GenerateError::ExhaustedAlphabet);
    }

    if length == 0 {
        return Ok(String::new());
    }

    let mut buffer: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(length));

    for class in options.enabled_classes() {
        buffer.push(class.sample_excluding(entropy, exclusions)?);
    }
    shuffle(entropy, &mut *buffer)?;

    for _ in required..length {
        buffer.push(draw_printable(entropy, exclusions)?);
        shuffle(entropy, &mut *buffer)?;
    }

    Ok(buffer.iter().collect())
}

/// Draws printable characters until one is not excluded.
///
/// Callers must have ruled out a fully covered pool.
fn draw_printable<E: EntropySource + ?Sized>(
    entropy: &E,
    exclusions: &ExclusionSet,
) -> Result<char, GenerateError> {
    loop {
        let c = printable_from_raw(sample_below(entropy, PRINTABLE_LEN)?)?;
        if !exclusions.contains(c) {
            return Ok(c);
        }
    }
}

/// Maps a pool index to its character, `raw + 33`.
pub(crate) fn printable_from_raw(raw: usize) -> Result<char, GenerateError> {
    let printable = PRINTABLE_FIRST as usize..=PRINTABLE_LAST as usize;

    match raw.checked_add(PRINTABLE_FIRST as usize) {
        Some(code) if printable.contains(&code) => Ok(char::from(code as u8)),
        _ => Err(GenerateError::InternalInvariantViolation { raw }),
    }
}
