use std::fmt;

use serde::{Serialize, Serializer};

/// A tag to represent the language and implementation of the Python interpreter.
///
/// This is the first segment in the wheel filename. For example, in
/// `cp39-abi3-freebsd_13_2_release_amd64.whl`, the language tag is `cp39`.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Create the CPython language tag for a dotted Python version.
    ///
    /// Every `.` is dropped, such that `3.11` becomes `cp311` and `3.9` becomes `cp39`.
    pub fn cpython(python_version: &str) -> Self {
        Self(format!("cp{}", python_version.replace('.', "")))
    }

    /// Return the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for LanguageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
