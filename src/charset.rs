// Segwit Bech32 Library
// Written by
//   The segwit-bech32 developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! # Charset
//!
//! The 32-symbol bech32 alphabet and the 5-bit values it encodes.
//!
//! The alphabet excludes `1`, `b`, `i` and `o`. Lookups from character to
//! value are case-insensitive.

use std::convert::TryFrom;
use std::fmt;

use crate::Error;

/// Encoding character set. Maps data value -> char
pub const CHARSET: [u8; 32] = *b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

// Reverse character set. Maps ASCII byte -> CHARSET index on [0,31]
const CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30, 7, 5, -1, -1, -1, -1, -1, -1, -1, 29, -1, 24, 13, 25, 9, 8, 23,
    -1, 18, 22, 31, 27, 19, -1, 1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2, -1, -1, -1, -1, -1, -1, 29,
    -1, 24, 13, 25, 9, 8, 23, -1, 18, 22, 31, 27, 19, -1, 1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2, -1,
    -1, -1, -1, -1,
];

/// A 5-bit value, the numeric form of one bech32 character.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U5(u8);

impl U5 {
    /// The zero value, written `q`.
    pub const Q: U5 = U5(0);

    /// Largest representable value.
    pub const MAX: u8 = 31;

    /// Wraps `value`, failing if it does not fit in 5 bits.
    pub fn try_from_u8(value: u8) -> Result<U5, Error> {
        if value > U5::MAX {
            Err(Error::InvalidData(value))
        } else {
            Ok(U5(value))
        }
    }

    /// Keeps only the low 5 bits of `value`.
    pub(crate) fn from_u8_masked(value: u8) -> U5 {
        U5(value & U5::MAX)
    }

    /// The numeric value, in [0, 31].
    pub fn to_u8(self) -> u8 {
        self.0
    }

    /// The lowercase alphabet character for this value.
    pub fn to_char(self) -> char {
        char::from(CHARSET[usize::from(self.0)])
    }

    /// Looks up the value of an alphabet character, in either case.
    pub fn from_char(c: char) -> Result<U5, Error> {
        if !c.is_ascii() {
            return Err(Error::NotBech32Character(c));
        }
        // c < 128 since it is ASCII and CHARSET_REV.len() == 128
        match CHARSET_REV[c as usize] {
            v if v < 0 => Err(Error::NotBech32Character(c)),
            v => Ok(U5(v as u8)),
        }
    }
}

impl TryFrom<u8> for U5 {
    type Error = Error;

    fn try_from(value: u8) -> Result<U5, Error> {
        U5::try_from_u8(value)
    }
}

impl From<U5> for u8 {
    fn from(v: U5) -> u8 {
        v.0
    }
}

impl AsRef<u8> for U5 {
    fn as_ref(&self) -> &u8 {
        &self.0
    }
}

impl fmt::Display for U5 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        f.write_char(self.to_char())
    }
}

/// Maps every character of `s` to its 5-bit value.
///
/// Stops at the first character outside the alphabet. To decode part of a
/// string, slice it first.
pub fn decode_characters(s: &str) -> Result<Vec<U5>, Error> {
    s.chars().map(U5::from_char).collect()
}
