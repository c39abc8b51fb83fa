use indexmap::IndexMap;
use tracing::debug;

use wheel_matrix_settings::{MatrixSettings, PackageSettings};
use wheel_matrix_tags::{LanguageTag, PlatformInstance, PlatformTag};

use crate::document::{PackageEntry, PythonEntry, VersionEntry, WheelMatrix, WheelTarget};
use crate::warnings::warn_user;

/// Expands [`MatrixSettings`] into a [`WheelMatrix`].
///
/// Every package version is built for each architecture, then each FreeBSD release, then each
/// Python version supported on that release, in declaration order. Packages with an ABI tag are
/// only built against the lowest Python version of each release.
#[derive(Debug, Clone, Copy)]
pub struct MatrixBuilder<'a> {
    settings: &'a MatrixSettings,
}

impl<'a> MatrixBuilder<'a> {
    pub fn new(settings: &'a MatrixSettings) -> Self {
        Self { settings }
    }

    pub fn build(&self) -> WheelMatrix {
        let mut packages = IndexMap::with_capacity(self.settings.packages.len());

        for package in &self.settings.packages {
            let versions: IndexMap<String, VersionEntry> = package
                .versions
                .iter()
                .map(|version| {
                    let wheels = self.wheels(package);
                    (version.clone(), VersionEntry { wheels })
                })
                .collect();
            debug!(
                "Expanded {} version(s) of `{}` into {} wheel(s) each",
                versions.len(),
                package.name,
                versions.values().next().map_or(0, |entry| entry.wheels.len())
            );

            // The later declaration replaces the earlier one, but keeps its position.
            if packages
                .insert(package.name.clone(), PackageEntry { versions })
                .is_some()
            {
                warn_user!(
                    "Package `{}` is declared more than once; using the last declaration",
                    package.name
                );
            }
        }

        WheelMatrix { packages }
    }

    fn wheels(&self, package: &PackageSettings) -> Vec<WheelTarget> {
        let mut wheels = Vec::new();

        for (arch_label, arch) in &self.settings.architectures {
            for (release, pythons) in &self.settings.releases {
                // ABI wheels built against the lowest Python version cover every later one.
                let pythons = if package.abi.is_some() {
                    &pythons[..pythons.len().min(1)]
                } else {
                    pythons.as_slice()
                };

                for python in pythons {
                    wheels.push(WheelTarget {
                        platform_tag: PlatformTag::freebsd(release, arch_label),
                        platform_instance: PlatformInstance::freebsd(release),
                        platform_arch: arch.clone(),
                        python: vec![PythonEntry {
                            tag: LanguageTag::cpython(python),
                            abi: package.abi.clone(),
                        }],
                    });
                }
            }
        }

        wheels
    }
}
