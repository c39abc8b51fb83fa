use std::fmt;

use crate::MatrixSettings;

/// A defect in externally supplied settings that would produce a wrong or empty matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsDefect {
    NoReleases,
    NoPythonVersions { release: String },
    NoArchitectures,
    NoPackages,
    EmptyPackageName { index: usize },
    NoVersions { package: String },
}

impl fmt::Display for SettingsDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoReleases => write!(f, "no FreeBSD releases are defined"),
            Self::NoPythonVersions { release } => {
                write!(f, "release `{release}` has no Python versions")
            }
            Self::NoArchitectures => write!(f, "no architectures are defined"),
            Self::NoPackages => write!(f, "no packages are defined"),
            Self::EmptyPackageName { index } => write!(f, "package #{index} has an empty name"),
            Self::NoVersions { package } => write!(f, "package `{package}` has no versions"),
        }
    }
}

/// Every defect found in a set of settings, in the order the tables are declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defects(Vec<SettingsDefect>);

impl Defects {
    pub fn iter(&self) -> impl Iterator<Item = &SettingsDefect> {
        self.0.iter()
    }
}

impl fmt::Display for Defects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, defect) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "- {defect}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Defects {}

impl MatrixSettings {
    /// Check that every table is populated, such that each package version expands to at least
    /// one wheel.
    ///
    /// Duplicate package names are allowed; the later declaration wins.
    pub fn validate(&self) -> Result<(), Defects> {
        let mut defects = Vec::new();

        if self.releases.is_empty() {
            defects.push(SettingsDefect::NoReleases);
        }
        for (release, pythons) in &self.releases {
            if pythons.is_empty() {
                defects.push(SettingsDefect::NoPythonVersions {
                    release: release.clone(),
                });
            }
        }

        if self.architectures.is_empty() {
            defects.push(SettingsDefect::NoArchitectures);
        }

        if self.packages.is_empty() {
            defects.push(SettingsDefect::NoPackages);
        }
        for (index, package) in self.packages.iter().enumerate() {
            if package.name.is_empty() {
                defects.push(SettingsDefect::EmptyPackageName { index });
            } else if package.versions.is_empty() {
                defects.push(SettingsDefect::NoVersions {
                    package: package.name.clone(),
                });
            }
        }

        if defects.is_empty() {
            Ok(())
        } else {
            Err(Defects(defects))
        }
    }
}
