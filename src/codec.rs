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

//! # Bech32 strings
//!
//! Encoding and decoding of the general checksummed base32 format.
//!
//! A bech32 string is at most 90 characters long and consists of:
//!
//! - The human-readable part, 1 to 83 printable US-ASCII characters.
//! - The separator, which is always "1". The *last* "1" in the string is the
//!   separator, the human-readable part may contain others.
//! - The data part, at least 6 characters long (the checksum) and drawn from
//!   the 32-symbol alphabet.
//!
//! The whole string is either all lowercase or all uppercase. Encoding always
//! produces lowercase.
//!

use std::fmt;

use crate::checksum::{self, Variant, CHECKSUM_LENGTH};
use crate::{Error, Hrp, U5};

/// The separator between the human-readable and data parts.
pub const SEP: char = '1';

/// Maximum length of an encoded string, checksum included.
pub const MAX_LENGTH: usize = 90;

/// Encodes `data` under `hrp` with the checksum of `variant`.
///
/// The output is lowercase even if `hrp` is uppercase.
pub fn encode(hrp: &str, data: &[U5], variant: Variant) -> Result<String, Error> {
    if hrp.is_empty() {
        return Err(Error::EmptyHrp);
    }
    let len = hrp.len() + 1 + data.len() + CHECKSUM_LENGTH;
    if len > MAX_LENGTH {
        return Err(Error::TooLong(len));
    }
    let hrp = Hrp::parse(hrp)?;

    let mut s = String::with_capacity(len);
    // Writing to a String does not fail.
    let _ = encode_to_fmt(&mut s, &hrp, data, variant);
    Ok(s)
}

/// Writes the encoding of `data` under `hrp` to `w`.
///
/// No length limit is applied.
pub fn encode_to_fmt<W: fmt::Write>(
    w: &mut W,
    hrp: &Hrp,
    data: &[U5],
    variant: Variant,
) -> fmt::Result {
    w.write_str(hrp.as_str())?;
    w.write_char(SEP)?;
    for fe in data {
        w.write_char(fe.to_char())?;
    }
    for fe in &checksum::create_checksum(hrp.as_bytes(), data, variant) {
        w.write_char(fe.to_char())?;
    }
    Ok(())
}

/// Decodes a bech32 or bech32m string of at most 90 characters.
///
/// Returns the lowercase human-readable part, the data with the checksum
/// removed, and the checksum variant found.
pub fn decode(s: &str) -> Result<(Hrp, Vec<U5>, Variant), Error> {
    decode_with_length_check(s, true)
}

/// Decodes a bech32 or bech32m string, applying the 90 character limit only
/// if `enforce_max_length` is set.
pub fn decode_with_length_check(
    s: &str,
    enforce_max_length: bool,
) -> Result<(Hrp, Vec<U5>, Variant), Error> {
    if enforce_max_length {
        check_length(s)?;
    }
    let sep = check_characters(s)?;
    let data_part = check_parts(s, sep)?;

    let hrp = Hrp::parse_unbounded(&s[..sep])?;
    let mut data = data_part.chars().map(U5::from_char).collect::<Result<Vec<U5>, Error>>()?;

    let variant = checksum::verify_checksum(hrp.as_bytes(), &data).ok_or(Error::InvalidChecksum)?;
    data.truncate(data.len() - CHECKSUM_LENGTH);
    Ok((hrp, data, variant))
}

fn check_length(s: &str) -> Result<(), Error> {
    let len = s.chars().count();
    if len > MAX_LENGTH {
        Err(Error::TooLong(len))
    } else {
        Ok(())
    }
}

/// Checks that every character is printable ASCII and that the string has
/// consistent casing.
///
/// # Returns
///
/// The byte index of the last '1' separator.
fn check_characters(s: &str) -> Result<usize, Error> {
    let sep_pos = s.rfind(SEP);

    let mut has_upper = false;
    let mut has_lower = false;
    for (n, ch) in s.char_indices() {
        if !('!'..='~').contains(&ch) {
            return match sep_pos {
                Some(pos) if n > pos => Err(Error::NotBech32Character(ch)),
                _ => Err(Error::InvalidHrpCharacter(ch)),
            };
        }
        if ch.is_ascii_uppercase() {
            has_upper = true;
        } else if ch.is_ascii_lowercase() {
            has_lower = true;
        }
    }
    if has_upper && has_lower {
        return Err(Error::MixedCase);
    }
    sep_pos.ok_or(Error::SeparatorNotFound)
}

/// Splits off the data part, which must hold at least a checksum.
fn check_parts(s: &str, sep: usize) -> Result<&str, Error> {
    if sep == 0 {
        return Err(Error::EmptyHrp);
    }
    // All characters are ASCII by now, so byte offsets are character offsets.
    let data_part = &s[sep + 1..];
    if data_part.len() < CHECKSUM_LENGTH {
        return Err(Error::TooShort(data_part.len()));
    }
    Ok(data_part)
}
