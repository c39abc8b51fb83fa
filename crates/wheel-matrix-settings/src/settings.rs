use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use wheel_matrix_tags::AbiTag;

use crate::Error;

/// The input tables from which the wheel matrix is expanded.
///
/// In a settings file, release keys contain dots and must be quoted:
///
/// ```toml
/// [releases]
/// "12.4" = ["3.9"]
/// "13.2" = ["3.9", "3.11"]
///
/// [architectures]
/// amd64 = "x86_64"
///
/// [[packages]]
/// name = "bcrypt"
/// versions = ["latest"]
/// abi = "abi3"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixSettings {
    /// FreeBSD releases, each mapped to its supported Python versions, lowest first.
    pub releases: IndexMap<String, Vec<String>>,
    /// FreeBSD architecture labels mapped to their canonical machine names.
    pub architectures: IndexMap<String, String>,
    /// The packages to build wheels for.
    pub packages: Vec<PackageSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageSettings {
    pub name: String,
    /// The versions to build, which may include the literal `latest`.
    pub versions: Vec<String>,
    /// When set, a single wheel per platform is built against the lowest Python version.
    #[serde(
        default,
        deserialize_with = "deserialize_abi",
        skip_serializing_if = "Option::is_none"
    )]
    pub abi: Option<AbiTag>,
}

impl PackageSettings {
    pub fn new(name: &str, versions: &[&str], abi: Option<AbiTag>) -> Self {
        Self {
            name: name.to_string(),
            versions: versions.iter().map(ToString::to_string).collect(),
            abi,
        }
    }
}

/// An empty `abi` is treated the same as an absent one.
fn deserialize_abi<'de, D>(deserializer: D) -> Result<Option<AbiTag>, D::Error>
where
    D: Deserializer<'de>,
{
    let abi = String::deserialize(deserializer)?;
    if abi.is_empty() {
        return Ok(None);
    }
    AbiTag::from_str(&abi)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

impl Default for MatrixSettings {
    fn default() -> Self {
        let releases = IndexMap::from([
            ("12.4".to_string(), vec!["3.9".to_string()]),
            (
                "13.2".to_string(),
                vec!["3.9".to_string(), "3.11".to_string()],
            ),
        ]);

        let architectures = IndexMap::from([
            ("amd64".to_string(), "x86_64".to_string()),
            ("arm64".to_string(), "aarch64".to_string()),
        ]);

        let packages = vec![
            PackageSettings::new("bcrypt", &["latest"], Some(AbiTag::abi3())),
            PackageSettings::new("cryptography", &["40.0.1", "latest"], Some(AbiTag::abi3())),
            PackageSettings::new("cffi", &["latest"], None),
            PackageSettings::new("coverage", &["6.5.0", "latest"], None),
            PackageSettings::new("lazy-object-proxy", &["latest"], None),
            PackageSettings::new("MarkupSafe", &["2.0.0", "2.1.2", "latest"], None),
            PackageSettings::new("PyYAML", &["6.0", "latest"], None),
        ];

        Self {
            releases,
            architectures,
            packages,
        }
    }
}

impl MatrixSettings {
    /// Parse [`MatrixSettings`] from a raw TOML string, without validating them.
    pub fn from_string(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Read and validate [`MatrixSettings`] from the TOML file at the given path.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("Reading wheel matrix settings from: `{}`", path.display());
        let contents = fs_err::read_to_string(path)?;
        let settings = Self::from_string(&contents)
            .map_err(|err| Error::Toml(path.to_path_buf(), Box::new(err)))?;
        settings
            .validate()
            .map_err(|defects| Error::Invalid(path.to_path_buf(), defects))?;
        Ok(settings)
    }
}
