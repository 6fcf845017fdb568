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

//! # Segwit Bech32 Library
//!
//! Bech32 ([BIP-173]) and bech32m ([BIP-350]) encoding and decoding, and
//! the segwit address format built on them.
//!
//! ```
//! use segwit_bech32::{segwit, SegwitAddress, WitnessVersion};
//!
//! let addr = segwit::encode("bc", 0, &[0x75; 20]).unwrap();
//! let (version, program) = segwit::decode("bc", &addr).unwrap();
//! assert_eq!(version, WitnessVersion::V0);
//! assert_eq!(program, vec![0x75; 20]);
//!
//! let parsed: SegwitAddress = addr.parse().unwrap();
//! assert_eq!(parsed.to_string(), addr);
//! ```
//!
//! [BIP-173]: <https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki>
//! [BIP-350]: <https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki>
//!

// Coding conventions
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

#[cfg(feature = "serde")] extern crate actual_serde as serde;

pub mod charset;
pub mod checksum;
pub mod codec;
pub mod convert;
pub mod error;
pub mod hrp;
pub mod segwit;

// export the most used items at the top level so they can be used as `segwit_bech32::Hrp` etc.
pub use crate::charset::U5;
pub use crate::checksum::Variant;
pub use crate::error::Error;
pub use crate::hrp::Hrp;
pub use crate::segwit::{AddressParams, SegwitAddress, WitnessVersion};
