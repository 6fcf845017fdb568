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

//! # Segwit addresses
//!
//! Native segwit output addresses as defined by [BIP-173] and [BIP-350].
//!
//! The data part holds the witness version as its first symbol followed by
//! the witness program converted to 5-bit groups. Version 0 programs use the
//! bech32 checksum, every later version uses bech32m.
//!
//! [BIP-173]: <https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki>
//! [BIP-350]: <https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki>

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::checksum::{Variant, CHECKSUM_LENGTH};
use crate::codec::{self, MAX_LENGTH};
use crate::convert::{FromBase32, ToBase32};
use crate::{Error, Hrp, U5};

/// Minimum length of a witness program, in bytes.
pub const MIN_PROGRAM_LENGTH: usize = 2;

/// Maximum length of a witness program, in bytes.
pub const MAX_PROGRAM_LENGTH: usize = 40;

/// Length of a version 0 pay-to-witness-pubkey-hash program.
pub const P2WPKH_PROGRAM_LENGTH: usize = 20;

/// Length of a version 0 pay-to-witness-script-hash program.
pub const P2WSH_PROGRAM_LENGTH: usize = 32;

/// Version of a witness program, 0 to 16 inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WitnessVersion(u8);

impl WitnessVersion {
    /// Version 0, segwit as introduced by BIP-141.
    pub const V0: WitnessVersion = WitnessVersion(0);
    /// Version 1, taproot.
    pub const V1: WitnessVersion = WitnessVersion(1);
    /// The highest version.
    pub const V16: WitnessVersion = WitnessVersion(16);

    /// Checks that `version` is at most 16.
    pub fn new(version: u8) -> Result<WitnessVersion, Error> {
        if version > 16 {
            Err(Error::InvalidWitnessVersion(version))
        } else {
            Ok(WitnessVersion(version))
        }
    }

    /// The version number.
    pub fn to_u8(self) -> u8 {
        self.0
    }

    /// The version as the first data symbol of an address.
    pub fn to_fe(self) -> U5 {
        U5::from_u8_masked(self.0)
    }

    /// The checksum variant addresses of this version must use.
    pub fn variant(self) -> Variant {
        if self.0 == 0 {
            Variant::Bech32
        } else {
            Variant::Bech32m
        }
    }

    /// The opcode that pushes this version in an output script,
    /// `OP_0` or `OP_1` to `OP_16`.
    pub fn opcode(self) -> u8 {
        if self.0 == 0 {
            0x00
        } else {
            0x50 + self.0
        }
    }

    fn from_opcode(op: u8) -> Option<WitnessVersion> {
        match op {
            0x00 => Some(WitnessVersion(0)),
            0x51..=0x60 => Some(WitnessVersion(op - 0x50)),
            _ => None,
        }
    }
}

impl TryFrom<u8> for WitnessVersion {
    type Error = Error;

    fn try_from(version: u8) -> Result<WitnessVersion, Error> {
        WitnessVersion::new(version)
    }
}

impl From<WitnessVersion> for u8 {
    fn from(version: WitnessVersion) -> u8 {
        version.0
    }
}

impl fmt::Display for WitnessVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Checks the program length allowed for `version`.
fn check_program_length(version: WitnessVersion, len: usize) -> Result<(), Error> {
    if len < MIN_PROGRAM_LENGTH || len > MAX_PROGRAM_LENGTH {
        return Err(Error::InvalidWitnessProgramLength(len));
    }
    if version == WitnessVersion::V0 && len != P2WPKH_PROGRAM_LENGTH && len != P2WSH_PROGRAM_LENGTH {
        return Err(Error::InvalidWitnessProgramLength(len));
    }
    Ok(())
}

/// Length of the address string for a program of `program_len` bytes.
fn encoded_length(hrp: &Hrp, program_len: usize) -> usize {
    hrp.len() + 1 + 1 + (program_len * 8 + 4) / 5 + CHECKSUM_LENGTH
}

/// Validates the data part of a decoded address.
fn check_payload(data: &[U5], variant: Variant) -> Result<(WitnessVersion, Vec<u8>), Error> {
    let (first, rest) = data.split_first().ok_or(Error::MissingWitnessVersion)?;
    let version = WitnessVersion::new(first.to_u8())?;
    let program = Vec::<u8>::from_base32(rest)?;
    check_program_length(version, program.len())?;

    if variant != version.variant() {
        return Err(Error::WrongEncodingVariant { expected: version.variant(), found: variant });
    }
    Ok((version, program))
}

fn payload_fes(version: WitnessVersion, program: &[u8]) -> Vec<U5> {
    let mut data = Vec::with_capacity(1 + (program.len() * 8 + 4) / 5);
    data.push(version.to_fe());
    data.extend(program.to_base32());
    data
}

/// Encodes a segwit address.
///
/// The checksum variant follows from the version.
pub fn encode(hrp: &str, witver: u8, witprog: &[u8]) -> Result<String, Error> {
    let version = WitnessVersion::new(witver)?;
    check_program_length(version, witprog.len())?;
    codec::encode(hrp, &payload_fes(version, witprog), version.variant())
}

/// Decodes a segwit address, requiring its human-readable part to be
/// `expected_hrp` in either case.
pub fn decode(expected_hrp: &str, address: &str) -> Result<(WitnessVersion, Vec<u8>), Error> {
    let (hrp, data, variant) = codec::decode(address)?;
    if !hrp.matches(expected_hrp) {
        return Err(Error::HrpMismatch {
            expected: expected_hrp.to_ascii_lowercase(),
            found: hrp.as_str().to_owned(),
        });
    }
    check_payload(&data, variant)
}

/// The parameters to derive addresses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressParams {
    /// The bech32 HRP for segwit addresses.
    pub bech_hrp: &'static str,
}

impl AddressParams {
    /// The Bitcoin mainnet address parameters.
    pub const BITCOIN: AddressParams = AddressParams { bech_hrp: "bc" };

    /// The Bitcoin testnet and signet address parameters.
    pub const TESTNET: AddressParams = AddressParams { bech_hrp: "tb" };

    /// The Bitcoin regtest address parameters.
    pub const REGTEST: AddressParams = AddressParams { bech_hrp: "bcrt" };

    const KNOWN: [&'static AddressParams; 3] =
        [&AddressParams::BITCOIN, &AddressParams::TESTNET, &AddressParams::REGTEST];
}

/// A segwit address: human-readable part, witness version and program.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegwitAddress {
    hrp: Hrp,
    version: WitnessVersion,
    program: Vec<u8>,
}

impl SegwitAddress {
    /// Creates an address, checking the program length and that the
    /// encoding fits in 90 characters.
    pub fn new(hrp: &str, version: WitnessVersion, program: Vec<u8>) -> Result<SegwitAddress, Error> {
        check_program_length(version, program.len())?;
        let hrp = Hrp::parse(hrp)?;
        let len = encoded_length(&hrp, program.len());
        if len > MAX_LENGTH {
            return Err(Error::TooLong(len));
        }
        Ok(SegwitAddress { hrp, version, program })
    }

    /// Create a witness pay to public key address from a public key hash.
    pub fn p2wpkh(
        pubkey_hash: &[u8; P2WPKH_PROGRAM_LENGTH],
        params: &AddressParams,
    ) -> Result<SegwitAddress, Error> {
        SegwitAddress::new(params.bech_hrp, WitnessVersion::V0, pubkey_hash.to_vec())
    }

    /// Create a witness pay to script hash address from a script hash.
    pub fn p2wsh(
        script_hash: &[u8; P2WSH_PROGRAM_LENGTH],
        params: &AddressParams,
    ) -> Result<SegwitAddress, Error> {
        SegwitAddress::new(params.bech_hrp, WitnessVersion::V0, script_hash.to_vec())
    }

    /// Create a pay to taproot address from a tweaked x-only output key.
    pub fn p2tr(output_key: &[u8; 32], params: &AddressParams) -> Result<SegwitAddress, Error> {
        SegwitAddress::new(params.bech_hrp, WitnessVersion::V1, output_key.to_vec())
    }

    /// Get a [SegwitAddress] from a witness output script.
    ///
    /// Returns `None` if the script is not `OP_n <push program>` with a
    /// valid program for that version.
    pub fn from_script(script: &[u8], params: &AddressParams) -> Option<SegwitAddress> {
        if script.len() < 2 + MIN_PROGRAM_LENGTH || script.len() > 2 + MAX_PROGRAM_LENGTH {
            return None;
        }
        if usize::from(script[1]) != script.len() - 2 {
            return None;
        }
        let version = WitnessVersion::from_opcode(script[0])?;
        SegwitAddress::new(params.bech_hrp, version, script[2..].to_vec()).ok()
    }

    /// Generates a script pubkey spending to this address.
    pub fn script_pubkey(&self) -> Vec<u8> {
        let mut script = Vec::with_capacity(2 + self.program.len());
        script.push(self.version.opcode());
        // Programs are at most 40 bytes, so a direct push.
        script.push(self.program.len() as u8);
        script.extend_from_slice(&self.program);
        script
    }

    /// Parse the address, requiring the human-readable part of `params`.
    /// To accept any human-readable part, use [FromStr].
    pub fn parse_with_params(s: &str, params: &AddressParams) -> Result<SegwitAddress, Error> {
        let (version, program) = decode(params.bech_hrp, s)?;
        let hrp = Hrp::parse(params.bech_hrp)?;
        Ok(SegwitAddress { hrp, version, program })
    }

    /// The known network this address belongs to, if any.
    pub fn params(&self) -> Option<&'static AddressParams> {
        AddressParams::KNOWN.iter().copied().find(|p| self.hrp.matches(p.bech_hrp))
    }

    /// The lowercase human-readable part.
    pub fn hrp(&self) -> &Hrp {
        &self.hrp
    }

    /// The witness version.
    pub fn version(&self) -> WitnessVersion {
        self.version
    }

    /// The witness program.
    pub fn program(&self) -> &[u8] {
        &self.program
    }
}

impl fmt::Display for SegwitAddress {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let data = payload_fes(self.version, &self.program);
        codec::encode_to_fmt(fmt, &self.hrp, &data, self.version.variant())
    }
}

impl fmt::Debug for SegwitAddress {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

impl FromStr for SegwitAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<SegwitAddress, Error> {
        let (hrp, data, variant) = codec::decode(s)?;
        let (version, program) = check_payload(&data, variant)?;
        Ok(SegwitAddress { hrp, version, program })
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SegwitAddress {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::fmt::Formatter;

        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = SegwitAddress;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("a segwit address")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                SegwitAddress::from_str(v).map_err(E::custom)
            }

            fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_str(v)
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_str(&v)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SegwitAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
