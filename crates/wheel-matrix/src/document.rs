//! The generated wheel matrix document.
//!
//! Field declaration order is the key order of the serialized document, and every map preserves
//! insertion order, so the output follows the order in which the inputs were declared.

use indexmap::IndexMap;
use serde::Serialize;

use wheel_matrix_tags::{AbiTag, LanguageTag, PlatformInstance, PlatformTag};

/// The full matrix: every package, every version, every wheel to build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WheelMatrix {
    pub packages: IndexMap<String, PackageEntry>,
}

impl WheelMatrix {
    /// Return the wheels to build for a given package version, if the package version is part
    /// of the matrix.
    pub fn wheels(&self, package: &str, version: &str) -> Option<&[WheelTarget]> {
        self.packages
            .get(package)?
            .versions
            .get(version)
            .map(|entry| entry.wheels.as_slice())
    }

    /// The total number of wheels across all packages and versions.
    pub fn len(&self) -> usize {
        self.packages
            .values()
            .flat_map(|package| package.versions.values())
            .map(|version| version.wheels.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageEntry {
    pub versions: IndexMap<String, VersionEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionEntry {
    pub wheels: Vec<WheelTarget>,
}

/// A single wheel build: one platform, one architecture, one Python.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WheelTarget {
    /// Ex) `freebsd_13_2_release_amd64`
    pub platform_tag: PlatformTag,
    /// Ex) `freebsd/13.2`
    pub platform_instance: PlatformInstance,
    /// Ex) `x86_64`
    pub platform_arch: String,
    /// Always exactly one entry.
    pub python: Vec<PythonEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PythonEntry {
    pub tag: LanguageTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abi: Option<AbiTag>,
}
