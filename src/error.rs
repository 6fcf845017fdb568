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

//! Error types returned by every encoding, decoding and conversion function.
//!

use std::{error, fmt};

use crate::checksum::Variant;

/// Formats an error whose source is exposed through [`std::error::Error::source`].
///
/// The source itself is not written, callers that want the full chain should
/// walk `source()`.
macro_rules! write_err {
    ($writer:expr, $string:literal $(, $args:expr)*; $source:expr) => {
        {
            let _ = &$source;   // Prevents clippy warnings.
            write!($writer, $string $(, $args)*)
        }
    }
}

/// Error validating the padding bits left over by a strict bit conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PaddingError {
    /// A whole source group was left unconsumed.
    TooMuch,
    /// The leftover bits are not all zero.
    NonZero,
}

impl fmt::Display for PaddingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PaddingError::TooMuch => write!(f, "the data payload has too many bits of padding"),
            PaddingError::NonZero => write!(f, "the data payload is padded with non-zero bits"),
        }
    }
}

impl error::Error for PaddingError {}

/// Encoding and decoding error.
///
/// Validation stops at the first violation, so exactly one of these is
/// reported for any rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A human-readable part character outside the printable ASCII range [33, 126].
    InvalidHrpCharacter(char),
    /// The human-readable part is empty.
    EmptyHrp,
    /// The string mixes upper and lower case characters.
    MixedCase,
    /// The string (or human-readable part) exceeds the maximum length.
    TooLong(usize),
    /// Fewer than six characters follow the separator.
    TooShort(usize),
    /// The string contains no `1` separator.
    SeparatorNotFound,
    /// A data or checksum character outside the 32-symbol alphabet.
    NotBech32Character(char),
    /// A value does not fit in the source bit width.
    InvalidData(u8),
    /// A bit width outside 1..=8 was requested.
    InvalidBitWidth(u32),
    /// The checksum matches neither the bech32 nor the bech32m constant.
    InvalidChecksum,
    /// The checksum is valid, but for the wrong variant.
    WrongEncodingVariant {
        /// The variant required by the context.
        expected: Variant,
        /// The variant the checksum was computed with.
        found: Variant,
    },
    /// Invalid padding after converting 5-bit groups back to bytes.
    InvalidPadding(PaddingError),
    /// The decoded human-readable part is not the expected one.
    HrpMismatch {
        /// The human-readable part the caller asked for.
        expected: String,
        /// The human-readable part found in the string.
        found: String,
    },
    /// A segwit address with an empty data part.
    MissingWitnessVersion,
    /// Witness version must be 0 to 16 inclusive.
    InvalidWitnessVersion(u8),
    /// The witness program must be between 2 and 40 bytes in length, and
    /// 20 or 32 bytes for version 0.
    InvalidWitnessProgramLength(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidHrpCharacter(c) => {
                write!(f, "invalid human-readable part character (code={})", u32::from(c))
            }
            Error::EmptyHrp => write!(f, "the human-readable part is empty"),
            Error::MixedCase => write!(f, "mixed-case strings not allowed"),
            Error::TooLong(len) => write!(f, "string is too long ({} characters)", len),
            Error::TooShort(len) => {
                write!(f, "only {} characters after the separator, a checksum needs 6", len)
            }
            Error::SeparatorNotFound => write!(f, "missing human-readable separator, \"1\""),
            Error::NotBech32Character(c) => write!(f, "invalid bech32 character (code={})", u32::from(c)),
            Error::InvalidData(v) => write!(f, "value {} does not fit in the source bit width", v),
            Error::InvalidBitWidth(w) => write!(f, "bit width {} is not in 1..=8", w),
            Error::InvalidChecksum => write!(f, "invalid checksum"),
            Error::WrongEncodingVariant { expected, found } => {
                write!(f, "expected {} checksum, found {}", expected, found)
            }
            Error::InvalidPadding(ref e) => write_err!(f, "invalid padding on the witness data"; e),
            Error::HrpMismatch { ref expected, ref found } => {
                write!(f, "expected human-readable part {}, found {}", expected, found)
            }
            Error::MissingWitnessVersion => write!(f, "the witness version byte is missing"),
            Error::InvalidWitnessVersion(v) => write!(f, "invalid witness script version: {}", v),
            Error::InvalidWitnessProgramLength(len) => {
                write!(f, "invalid witness program length: {}", len)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::InvalidPadding(ref e) => Some(e),
            _ => None,
        }
    }
}

#[doc(hidden)]
impl From<PaddingError> for Error {
    fn from(e: PaddingError) -> Error {
        Error::InvalidPadding(e)
    }
}
