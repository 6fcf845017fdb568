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

//! # Human-readable part
//!
//! The prefix before the `1` separator, e.g. `bc` in a mainnet address.
//!

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Maximum length of a human-readable part.
pub const MAX_HRP_LENGTH: usize = 83;

/// A validated human-readable part.
///
/// Holds 1 to 83 printable ASCII characters (codes 33 to 126) of a single
/// case, and stores them lowercased.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hrp(String);

impl Hrp {
    /// Parses and validates a human-readable part.
    pub fn parse(s: &str) -> Result<Hrp, Error> {
        if s.len() > MAX_HRP_LENGTH {
            return Err(Error::TooLong(s.len()));
        }
        Hrp::parse_unbounded(s)
    }

    /// Same as [`Hrp::parse`] without the length limit, for decoding
    /// strings that are allowed to exceed 90 characters.
    pub(crate) fn parse_unbounded(s: &str) -> Result<Hrp, Error> {
        if s.is_empty() {
            return Err(Error::EmptyHrp);
        }

        let mut has_lower = false;
        let mut has_upper = false;
        for c in s.chars() {
            if !('!'..='~').contains(&c) {
                return Err(Error::InvalidHrpCharacter(c));
            }
            if c.is_ascii_lowercase() {
                has_lower = true;
            } else if c.is_ascii_uppercase() {
                has_upper = true;
            }
        }
        if has_lower && has_upper {
            return Err(Error::MixedCase);
        }

        Ok(Hrp(s.to_ascii_lowercase()))
    }

    /// The lowercase string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lowercase ASCII bytes, as fed to the checksum.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, a human-readable part has at least one character.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compares against `other` ignoring case.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for Hrp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Hrp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Hrp({})", self.0)
    }
}

impl FromStr for Hrp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Hrp, Error> {
        Hrp::parse(s)
    }
}

impl AsRef<str> for Hrp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hrp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Hrp;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a bech32 human-readable part")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Hrp::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hrp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!(Hrp::parse("bc").unwrap().as_str(), "bc");
        assert_eq!(Hrp::parse("BC").unwrap().as_str(), "bc");
        assert_eq!(Hrp::parse("?").unwrap().as_bytes(), b"?");
        assert_eq!(Hrp::parse("a1b").unwrap().len(), 3);

        let printable: String = (33u8..=126).map(char::from).filter(|c| !c.is_ascii_uppercase()).collect();
        assert_eq!(Hrp::parse(&printable).unwrap().as_str(), printable);

        let longest = "a".repeat(MAX_HRP_LENGTH);
        assert!(Hrp::parse(&longest).is_ok());
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(Hrp::parse(""), Err(Error::EmptyHrp));
        assert_eq!(Hrp::parse("Bc"), Err(Error::MixedCase));
        assert_eq!(Hrp::parse("b c"), Err(Error::InvalidHrpCharacter(' ')));
        assert_eq!(Hrp::parse("\u{7f}"), Err(Error::InvalidHrpCharacter('\u{7f}')));
        assert_eq!(Hrp::parse("\u{80}"), Err(Error::InvalidHrpCharacter('\u{80}')));
        assert_eq!(Hrp::parse(&"a".repeat(84)), Err(Error::TooLong(84)));
        assert!(Hrp::parse_unbounded(&"a".repeat(84)).is_ok());
    }

    #[test]
    fn matching_ignores_case() {
        let hrp: Hrp = "tb".parse().unwrap();
        assert!(hrp.matches("tb"));
        assert!(hrp.matches("TB"));
        assert!(hrp.matches("Tb"));
        assert!(!hrp.matches("bc"));
        assert!(!hrp.matches("tbc"));
        assert_eq!(hrp.to_string(), "tb");
        assert_eq!(format!("{:?}", hrp), "Hrp(tb)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_string() {
        use serde_test::{assert_de_tokens_error, assert_tokens, Token};

        let hrp = Hrp::parse("bc").unwrap();
        assert_tokens(&hrp, &[Token::Str("bc")]);
        assert_de_tokens_error::<Hrp>(&[Token::Str("Bc")], "mixed-case strings not allowed");
    }
}
