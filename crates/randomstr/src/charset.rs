// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Character classes over the printable ASCII pool.
//!
//! All tables are built at compile time and live in static memory.
//!
//! | class   | code points                                  | size |
//! |---------|----------------------------------------------|------|
//! | Special | 33-47, 58-64, 91-96, 123-126                 | 32   |
//! | Numeric | 48-57 (`0`-`9`)                              | 10   |
//! | Lower   | 97-122 (`a`-`z`)                             | 26   |
//! | Upper   | 65-90 (`A`-`Z`)                              | 26   |
//! | Pool    | 33-126                                       | 94   |

use randomstr_rand::{EntropySource, SampleError, sample_below};

use crate::error::GenerateError;
use crate::exclusion::ExclusionSet;

/// First printable (non-space) ASCII code point.
pub const PRINTABLE_FIRST: u8 = 33;

/// Last printable ASCII code point.
pub const PRINTABLE_LAST: u8 = 126;

/// Size of the printable pool.
pub const PRINTABLE_LEN: usize = (PRINTABLE_LAST - PRINTABLE_FIRST + 1) as usize;

/// Every printable ASCII character, in code point order.
pub static PRINTABLE: [char; PRINTABLE_LEN] = char_sequence(PRINTABLE_FIRST, PRINTABLE_LAST);

static SPECIAL: [char; 32] = ascii_runs(&[(33, 47), (58, 64), (91, 96), (123, 126)]);
static NUMERIC: [char; 10] = char_sequence(b'0', b'9');
static LOWER: [char; 26] = char_sequence(b'a', b'z');
static UPPER: [char; 26] = char_sequence(b'A', b'Z');

/// Ordered run of ASCII characters from `first` to `last`, both inclusive.
///
/// `N` must equal `last - first + 1`; a mismatch fails const evaluation.
///
/// ```rust
/// use randomstr::charset::char_sequence;
///
/// const HEX_LOWER: [char; 6] = char_sequence(b'a', b'f');
/// assert_eq!(HEX_LOWER, ['a', 'b', 'c', 'd', 'e', 'f']);
/// ```
pub const fn char_sequence<const N: usize>(first: u8, last: u8) -> [char; N] {
    ascii_runs(&[(first, last)])
}

const fn ascii_runs<const N: usize>(runs: &[(u8, u8)]) -> [char; N] {
    let mut out = ['\0'; N];
    let mut filled = 0;
    let mut run = 0;

    while run < runs.len() {
        let (first, last) = runs[run];
        assert!(first <= last && last < 0x80, "runs must be ascending ASCII ranges");

        let mut code = first;
        while code <= last {
            out[filled] = code as char;
            filled += 1;
            code += 1;
        }
        run += 1;
    }

    assert!(filled == N, "run lengths must add up to the table size");
    out
}

/// Special characters: printable ASCII that is neither a letter nor a digit.
pub fn special_chars() -> &'static [char] {
    &SPECIAL
}

/// Decimal digits `0`-`9`.
pub fn numeric_chars() -> &'static [char] {
    &NUMERIC
}

/// Lower case letters `a`-`z`.
pub fn lower_chars() -> &'static [char] {
    &LOWER
}

/// Upper case letters `A`-`Z`.
pub fn upper_chars() -> &'static [char] {
    &UPPER
}

/// One of the four character classes that partition the printable pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    /// Punctuation and symbols.
    Special,
    /// Decimal digits.
    Numeric,
    /// Lower case letters.
    Lower,
    /// Upper case letters.
    Upper,
}

impl CharClass {
    /// All classes.
    pub const ALL: [CharClass; 4] = [
        CharClass::Special,
        CharClass::Numeric,
        CharClass::Lower,
        CharClass::Upper,
    ];

    /// The class's characters in code point order.
    pub fn chars(self) -> &'static [char] {
        match self {
            CharClass::Special => special_chars(),
            CharClass::Numeric => numeric_chars(),
            CharClass::Lower => lower_chars(),
            CharClass::Upper => upper_chars(),
        }
    }

    /// Number of characters in the class.
    pub fn size(self) -> usize {
        self.chars().len()
    }

    /// Returns `true` if `c` belongs to this class.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Special => c.is_ascii_punctuation(),
            CharClass::Numeric => c.is_ascii_digit(),
            CharClass::Lower => c.is_ascii_lowercase(),
            CharClass::Upper => c.is_ascii_uppercase(),
        }
    }

    /// Classifies a character, or `None` if it is outside the printable pool.
    pub fn of(c: char) -> Option<CharClass> {
        CharClass::ALL.into_iter().find(|class| class.contains(c))
    }

    /// Draws one character uniformly from the class.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::Entropy`] if the entropy source fails.
    pub fn sample<E: EntropySource + ?Sized>(self, entropy: &E) -> Result<char, SampleError> {
        let chars = self.chars();
        let index = sample_below(entropy, chars.len())?;

        Ok(chars[index])
    }

    /// Draws one character uniformly from the class members not in `exclusions`.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::ExhaustedAlphabet`] if every class member is excluded
    /// - [`GenerateError::Sample`] if the entropy source fails
    pub fn sample_excluding<E: EntropySource + ?Sized>(
        self,
        entropy: &E,
        exclusions: &ExclusionSet,
    ) -> Result<char, GenerateError> {
        if exclusions.covers(self.chars()) {
            return Err(GenerateError::ExhaustedAlphabet);
        }

        loop {
            let c = self.sample(entropy)?;
            if !exclusions.contains(c) {
                return Ok(c);
            }
        }
    }
}

/// Draws one special character.
pub fn gen_special_char<E: EntropySource + ?Sized>(entropy: &E) -> Result<char, SampleError> {
    CharClass::Special.sample(entropy)
}

/// Draws one digit.
pub fn gen_numeric_char<E: EntropySource + ?Sized>(entropy: &E) -> Result<char, SampleError> {
    CharClass::Numeric.sample(entropy)
}

/// Draws one lower case letter.
pub fn gen_lower_char<E: EntropySource + ?Sized>(entropy: &E) -> Result<char, SampleError> {
    CharClass::Lower.sample(entropy)
}

/// Draws one upper case letter.
pub fn gen_upper_char<E: EntropySource + ?Sized>(entropy: &E) -> Result<char, SampleError> {
    CharClass::Upper.sample(entropy)
}
