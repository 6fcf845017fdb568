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

//! # Bit conversion
//!
//! Repacking of values between bit widths, typically bytes to 5-bit groups
//! and back.
//!
//! With `pad` set, a trailing partial group is zero-filled and emitted, so
//! conversion always succeeds. Without it, the trailing bits must be fewer
//! than one source group and all zero. From BIP-173:
//!
//! > Re-arrange those bits into groups of 8 bits. Any incomplete group at the
//! > end MUST be 4 bits or less, MUST be all zeroes, and is discarded.

use crate::error::PaddingError;
use crate::{Error, U5};

/// Converts `data` from groups of `from` bits to groups of `to` bits.
///
/// Both widths must be in 1..=8. Every input value must fit in `from` bits.
pub fn convert_bits<T>(data: &[T], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, Error>
where
    T: Into<u8> + Copy,
{
    if from == 0 || from > 8 {
        return Err(Error::InvalidBitWidth(from));
    }
    if to == 0 || to > 8 {
        return Err(Error::InvalidBitWidth(to));
    }

    let max_value: u32 = (1 << to) - 1;
    // Only the bits that can still reach the output are kept.
    let max_acc: u32 = (1 << (from + to - 1)) - 1;

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut ret: Vec<u8> = Vec::with_capacity(data.len() * from as usize / to as usize + 1);
    for value in data {
        let v: u8 = (*value).into();
        if u32::from(v) >> from != 0 {
            return Err(Error::InvalidData(v));
        }
        acc = ((acc << from) | u32::from(v)) & max_acc;
        bits += from;
        while bits >= to {
            bits -= to;
            ret.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            ret.push(((acc << (to - bits)) & max_value) as u8);
        }
    } else if bits >= from {
        return Err(PaddingError::TooMuch.into());
    } else if (acc << (to - bits)) & max_value != 0 {
        return Err(PaddingError::NonZero.into());
    }
    Ok(ret)
}

/// Conversion of bytes to 5-bit groups.
pub trait ToBase32 {
    /// Splits into 5-bit groups, zero-padding the last one.
    fn to_base32(&self) -> Vec<U5>;
}

impl<T: AsRef<[u8]> + ?Sized> ToBase32 for T {
    fn to_base32(&self) -> Vec<U5> {
        let mut ret = Vec::with_capacity((self.as_ref().len() * 8 + 4) / 5);
        let mut acc: u16 = 0;
        let mut bits: u32 = 0;
        for &b in self.as_ref() {
            acc = (acc << 8) | u16::from(b);
            bits += 8;
            while bits >= 5 {
                bits -= 5;
                ret.push(U5::from_u8_masked((acc >> bits) as u8));
            }
            acc &= (1 << bits) - 1;
        }
        if bits > 0 {
            ret.push(U5::from_u8_masked((acc << (5 - bits)) as u8));
        }
        ret
    }
}

/// Conversion of 5-bit groups back to bytes.
pub trait FromBase32: Sized {
    /// Joins 5-bit groups into bytes, rejecting invalid padding.
    fn from_base32(data: &[U5]) -> Result<Self, Error>;
}

impl FromBase32 for Vec<u8> {
    fn from_base32(data: &[U5]) -> Result<Vec<u8>, Error> {
        convert_bits(data, 5, 8, false)
    }
}

/// Checks that a sequence of raw values are all valid 5-bit values.
pub trait CheckBase32 {
    /// Wraps every value as a [`U5`], failing on the first one above 31.
    fn check_base32(&self) -> Result<Vec<U5>, Error>;
}

impl<T: AsRef<[u8]> + ?Sized> CheckBase32 for T {
    fn check_base32(&self) -> Result<Vec<U5>, Error> {
        self.as_ref().iter().map(|&v| U5::try_from_u8(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(convert_bits(&[1u8], 5, 8, true), Ok(vec![8]));
        // A lone 5-bit group is a whole unconsumed source group.
        assert_eq!(convert_bits(&[1u8], 5, 8, false), Err(Error::InvalidPadding(PaddingError::TooMuch)));
        assert_eq!(convert_bits(&[0u8], 5, 8, false), Err(Error::InvalidPadding(PaddingError::TooMuch)));
        assert_eq!(convert_bits(&[0xffu8], 8, 5, true), Ok(vec![31, 28]));
        assert_eq!(convert_bits(&[0u8, 0], 5, 8, false), Ok(vec![0]));
        assert_eq!(convert_bits::<u8>(&[], 8, 5, false), Ok(vec![]));
    }

    #[test]
    fn sample_digest() {
        // SHA256("sample data")
        let data = [
            241u8, 7, 170, 197, 157, 255, 29, 73, 235, 254, 219, 127, 3, 135, 126, 170, 2, 151,
            249, 167, 211, 207, 242, 110, 223, 199, 84, 6, 242, 34, 37, 109,
        ];
        let expected = vec![
            30u8, 4, 3, 26, 21, 17, 12, 29, 31, 28, 14, 20, 19, 26, 31, 30, 27, 13, 31, 16, 7, 1,
            27, 30, 21, 8, 1, 9, 15, 30, 13, 7, 26, 15, 7, 31, 4, 27, 22, 31, 24, 29, 10, 0, 13,
            28, 17, 2, 4, 21, 22, 16,
        ];
        assert_eq!(convert_bits(&data, 8, 5, true).unwrap(), expected);
        assert_eq!(
            data.to_base32().iter().map(|v| v.to_u8()).collect::<Vec<_>>(),
            expected,
        );
        assert_eq!(convert_bits(&expected, 5, 8, false).unwrap(), data.to_vec());
    }

    #[test]
    fn strict_padding() {
        // Three 5-bit groups leave 7 bits, more than a whole source group.
        assert_eq!(
            convert_bits(&[0u8, 0, 0], 5, 8, false),
            Err(Error::InvalidPadding(PaddingError::TooMuch)),
        );
        // Two groups leave 2 bits, which must be zero.
        assert_eq!(convert_bits(&[31u8, 28], 5, 8, false), Ok(vec![0xff]));
        assert_eq!(
            convert_bits(&[31u8, 29], 5, 8, false),
            Err(Error::InvalidPadding(PaddingError::NonZero)),
        );
    }

    #[test]
    fn rejects_out_of_range_input() {
        assert_eq!(convert_bits(&[32u8], 5, 8, true), Err(Error::InvalidData(32)));
        assert_eq!(convert_bits(&[2u8], 1, 8, true), Err(Error::InvalidData(2)));
        assert_eq!(convert_bits(&[1u8], 0, 8, true), Err(Error::InvalidBitWidth(0)));
        assert_eq!(convert_bits(&[1u8], 8, 9, true), Err(Error::InvalidBitWidth(9)));
    }

    #[test]
    fn other_widths() {
        assert_eq!(convert_bits(&[0b1010_0101u8], 8, 1, false), Ok(vec![1, 0, 1, 0, 0, 1, 0, 1]));
        assert_eq!(convert_bits(&[1u8, 0, 1, 0, 0, 1, 0, 1], 1, 8, false), Ok(vec![0b1010_0101]));
        assert_eq!(convert_bits(&[0xabu8, 0xcd], 8, 4, false), Ok(vec![0xa, 0xb, 0xc, 0xd]));
        assert_eq!(convert_bits(&[5u8, 6, 7], 3, 8, true), Ok(vec![0b1011_1011, 0b1000_0000]));
    }

    #[test]
    fn base32_traits_roundtrip() {
        for len in 0..64usize {
            let data: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            let b32 = data.to_base32();
            assert_eq!(b32.len(), (len * 8 + 4) / 5);
            assert_eq!(Vec::<u8>::from_base32(&b32).unwrap(), data);
            assert_eq!(convert_bits(&b32, 5, 8, false).unwrap(), data);
        }
    }

    #[test]
    fn check_base32() {
        assert_eq!([0u8, 31, 7].check_base32().map(|v| v.len()), Ok(3));
        assert_eq!([0u8, 32].check_base32(), Err(Error::InvalidData(32)));
    }
}
