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

//! # Checksums
//!
//! The BCH checksum shared by bech32 ([BIP-173]) and bech32m ([BIP-350]).
//!
//! Both variants use the same generator and differ only in the constant the
//! residue is XORed with. The human-readable part enters the checksum through
//! its "expansion": the high 3 bits of every byte, a zero, then the low 5 bits
//! of every byte.
//!
//! [BIP-173]: <https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki>
//! [BIP-350]: <https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki>

use std::fmt;

use crate::U5;

/// Number of characters in a checksum.
pub const CHECKSUM_LENGTH: usize = 6;

/// Target residue of a bech32m checksum.
pub const BECH32M_CONST: u32 = 0x2bc8_30a3;

/// Generator coefficients
const GEN: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];

/// The checksum algorithm an encoding uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// The original checksum from BIP-173.
    Bech32,
    /// The improved checksum from BIP-350.
    Bech32m,
}

impl Variant {
    /// The value a valid checksum leaves as polymod residue.
    pub fn constant(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => BECH32M_CONST,
        }
    }

    /// Finds the variant whose constant is `residue`, if any.
    pub fn from_residue(residue: u32) -> Option<Variant> {
        match residue {
            1 => Some(Variant::Bech32),
            BECH32M_CONST => Some(Variant::Bech32m),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Variant::Bech32 => f.write_str("bech32"),
            Variant::Bech32m => f.write_str("bech32m"),
        }
    }
}

/// Incremental polymod computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    residue: u32,
}

impl Default for Engine {
    fn default() -> Engine {
        Engine::new()
    }
}

impl Engine {
    /// A fresh engine, with residue 1.
    pub fn new() -> Engine {
        Engine { residue: 1 }
    }

    /// Feeds the expansion of `hrp`, without allocating it.
    pub fn input_hrp(&mut self, hrp: &[u8]) {
        for b in hrp {
            self.input_fe(U5::from_u8_masked(b >> 5));
        }
        self.input_fe(U5::Q);
        for b in hrp {
            self.input_fe(U5::from_u8_masked(*b));
        }
    }

    /// Feeds a single value.
    pub fn input_fe(&mut self, fe: U5) {
        let top = self.residue >> 25;
        self.residue = ((self.residue & 0x1ff_ffff) << 5) ^ u32::from(fe.to_u8());
        for (i, gen) in GEN.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                self.residue ^= gen;
            }
        }
    }

    /// Feeds the six zero values a checksum occupies while it is computed.
    pub fn input_checksum_placeholder(&mut self) {
        for _ in 0..CHECKSUM_LENGTH {
            self.input_fe(U5::Q);
        }
    }

    /// The current residue.
    pub fn residue(&self) -> u32 {
        self.residue
    }
}

/// Computes the polymod residue of `values`.
pub fn polymod(values: &[U5]) -> u32 {
    let mut engine = Engine::new();
    for v in values {
        engine.input_fe(*v);
    }
    engine.residue()
}

/// Expands the human-readable part into values for checksum computation.
pub fn hrp_expand(hrp: &[u8]) -> Vec<U5> {
    let mut v = Vec::with_capacity(hrp.len() * 2 + 1);
    v.extend(hrp.iter().map(|b| U5::from_u8_masked(b >> 5)));
    v.push(U5::Q);
    v.extend(hrp.iter().map(|b| U5::from_u8_masked(*b)));
    v
}

/// Computes the checksum of `data` under `hrp`.
///
/// `hrp` is used byte for byte, callers lowercase it first.
pub fn create_checksum(hrp: &[u8], data: &[U5], variant: Variant) -> [U5; CHECKSUM_LENGTH] {
    let mut engine = Engine::new();
    engine.input_hrp(hrp);
    for fe in data {
        engine.input_fe(*fe);
    }
    engine.input_checksum_placeholder();

    let plm = engine.residue() ^ variant.constant();
    let mut checksum = [U5::Q; CHECKSUM_LENGTH];
    for (i, fe) in checksum.iter_mut().enumerate() {
        *fe = U5::from_u8_masked((plm >> (5 * (5 - i))) as u8);
    }
    checksum
}

/// Checks the checksum at the end of `data`, returning the variant it was made with.
///
/// Returns `None` if the residue matches neither variant.
pub fn verify_checksum(hrp: &[u8], data: &[U5]) -> Option<Variant> {
    let mut engine = Engine::new();
    engine.input_hrp(hrp);
    for fe in data {
        engine.input_fe(*fe);
    }
    Variant::from_residue(engine.residue())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::convert::{CheckBase32, ToBase32};

    fn fes(values: &[u8]) -> Vec<U5> {
        values.check_base32().unwrap()
    }

    #[test]
    fn polymod_vectors() {
        let vectors: [(&[u8], u32); 7] = [
            (&[0], 32),
            (&[1], 33),
            (&[0, 1], 1025),
            (&[2, 3, 4], 34916),
            (&[5, 6, 7, 8], 1_218_792),
            (&[9, 10, 11, 12, 13], 43_330_957),
            (&[14, 15, 16, 17, 18, 19], 663_884_257),
        ];
        for (values, expected) in vectors.iter() {
            assert_eq!(polymod(&fes(values)), *expected, "polymod({:?})", values);
        }
        assert_eq!(polymod(&[]), 1);
    }

    #[test]
    fn polymod_sanity() {
        let data: [u8; 32] = rand::random();

        let data1_b32 = data.to_base32();
        let polymod1 = polymod(&data1_b32);

        // The code length is 1023, appending that many zeros is a no-op.
        let mut data2_b32 = data.to_base32();
        data2_b32.extend(vec![U5::Q; 1023]);
        let polymod2 = polymod(&data2_b32);
        assert_eq!(polymod1, polymod2);
        assert!(polymod1 < 1 << 30);
    }

    #[test]
    fn hrp_expansion() {
        assert_eq!(hrp_expand(b"a"), fes(&[3, 0, 1]));
        assert_eq!(hrp_expand(b"tb"), fes(&[3, 3, 0, 20, 2]));
        assert_eq!(hrp_expand(b""), fes(&[0]));

        let printable: Vec<u8> = (33..=126).collect();
        let expanded = hrp_expand(&printable);
        assert_eq!(expanded.len(), printable.len() * 2 + 1);
        for (i, b) in printable.iter().enumerate() {
            assert_eq!(expanded[i].to_u8(), b >> 5);
            assert_eq!(expanded[printable.len() + 1 + i].to_u8(), b & 31);
        }

        let mut engine = Engine::new();
        engine.input_hrp(&printable);
        assert_eq!(engine.residue(), polymod(&expanded));
    }

    #[test]
    fn checksum_vectors() {
        assert_eq!(
            create_checksum(b"tb", &[], Variant::Bech32).to_vec(),
            fes(&[24, 4, 15, 0, 30, 1]),
        );
        assert_eq!(
            create_checksum(b"bt", &fes(&[13, 9, 17, 27, 29]), Variant::Bech32m).to_vec(),
            fes(&[30, 22, 4, 1, 5, 9]),
        );
        assert_eq!(
            create_checksum(b"btcdd", &fes(&[0, 4, 19, 10, 9, 0]), Variant::Bech32m).to_vec(),
            fes(&[27, 26, 24, 10, 2, 4]),
        );
        let all: Vec<u8> = (0..32).collect();
        assert_eq!(
            create_checksum(b"bc", &fes(&all), Variant::Bech32).to_vec(),
            fes(&[15, 6, 28, 24, 29, 17]),
        );
    }

    #[test]
    fn checksum_verifies() {
        let data = fes(&[0, 1, 2]);
        for &variant in &[Variant::Bech32, Variant::Bech32m] {
            let mut full = data.clone();
            full.extend_from_slice(&create_checksum(b"tb", &data, variant));
            assert_eq!(verify_checksum(b"tb", &full), Some(variant));

            // Any single changed value is detected.
            for i in 0..full.len() {
                let mut broken = full.clone();
                broken[i] = U5::from_u8_masked(broken[i].to_u8() ^ 1);
                assert_eq!(verify_checksum(b"tb", &broken), None);
            }
            // So is a different human-readable part.
            assert_eq!(verify_checksum(b"bc", &full), None);
        }
    }

    #[test]
    fn variant_constants() {
        assert_eq!(Variant::Bech32.constant(), 1);
        assert_eq!(Variant::Bech32m.constant(), 0x2bc8_30a3);
        assert_eq!(Variant::from_residue(1), Some(Variant::Bech32));
        assert_eq!(Variant::from_residue(0x2bc8_30a3), Some(Variant::Bech32m));
        assert_eq!(Variant::from_residue(0), None);
    }
}
