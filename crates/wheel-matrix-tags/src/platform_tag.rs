use std::fmt;

use serde::{Serialize, Serializer};

/// A tag to represent the platform compatibility of a Python distribution.
///
/// This is the third segment in the wheel filename, following the language and ABI tags. For
/// example, in `cp39-abi3-freebsd_13_2_release_amd64.whl`, the platform tag is
/// `freebsd_13_2_release_amd64`.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PlatformTag {
    /// Ex) `freebsd_13_2_release_amd64`
    FreeBsd { release_arch: String },
}

impl PlatformTag {
    /// Create the platform tag for a FreeBSD `-RELEASE` on the given architecture label.
    ///
    /// The architecture label is the name FreeBSD itself uses (`amd64`, `arm64`), not the
    /// canonical machine name.
    pub fn freebsd(release: &str, arch_label: &str) -> Self {
        let release_tag = release.replace('.', "_");
        Self::FreeBsd {
            release_arch: format!("{release_tag}_release_{arch_label}"),
        }
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FreeBsd { release_arch } => write!(f, "freebsd_{release_arch}"),
        }
    }
}

impl Serialize for PlatformTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The build host that produces wheels for a platform, e.g. `freebsd/13.2`.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PlatformInstance {
    FreeBsd { release: String },
}

impl PlatformInstance {
    pub fn freebsd(release: &str) -> Self {
        Self::FreeBsd {
            release: release.to_string(),
        }
    }
}

impl fmt::Display for PlatformInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FreeBsd { release } => write!(f, "freebsd/{release}"),
        }
    }
}

impl Serialize for PlatformInstance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
