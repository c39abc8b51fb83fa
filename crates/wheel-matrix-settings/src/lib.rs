use std::io;
use std::path::PathBuf;

pub use crate::settings::{MatrixSettings, PackageSettings};
pub use crate::validate::{Defects, SettingsDefect};

mod settings;
mod validate;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Failed to parse: `{}`", _0.display())]
    Toml(PathBuf, #[source] Box<toml::de::Error>),

    #[error("Invalid wheel matrix settings in `{}`", _0.display())]
    Invalid(PathBuf, #[source] Defects),
}
