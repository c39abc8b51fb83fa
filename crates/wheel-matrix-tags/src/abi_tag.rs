use std::fmt::Formatter;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A tag to represent the ABI compatibility of a Python distribution.
///
/// This is the second segment in the wheel filename, following the language tag. For example,
/// in `cp39-abi3-freebsd_13_2_release_amd64.whl`, the ABI tag is `abi3`.
///
/// A package declaring an ABI tag is built once per platform against the lowest supported Python
/// version, since the resulting wheel remains compatible with later minor versions.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AbiTag(String);

impl AbiTag {
    /// The stable ABI, see PEP 384.
    pub fn abi3() -> Self {
        Self("abi3".to_string())
    }

    /// Return the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AbiTag {
    /// Format an [`AbiTag`] as a string.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AbiTag {
    type Err = ParseAbiTagError;

    /// Parse an [`AbiTag`] from a string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseAbiTagError::Empty);
        }
        if let Some(character) = s
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(ParseAbiTagError::InvalidCharacter {
                character,
                tag: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl Serialize for AbiTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AbiTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, thiserror::Error, Clone, Eq, PartialEq)]
pub enum ParseAbiTagError {
    #[error("ABI tag must not be empty")]
    Empty,
    #[error("Invalid character `{character}` in ABI tag: {tag}")]
    InvalidCharacter { character: char, tag: String },
}
