use std::path::PathBuf;

use clap::Parser;

use crate::generate::DEFAULT_OUTPUT;

/// Generate the matrix of FreeBSD wheels to build for each package version.
#[derive(Parser, Debug)]
#[command(name = "wheel-matrix", version, about, long_about = None)]
pub(crate) struct Cli {
    /// The file to write the generated matrix to.
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    pub(crate) output: PathBuf,

    /// Read the release, architecture, and package tables from a TOML file, rather than using
    /// the built-in tables.
    #[arg(long, value_name = "CONFIG_FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Do not print warnings.
    #[arg(long, short, conflicts_with = "verbose")]
    pub(crate) quiet: bool,

    /// Use verbose output.
    #[arg(long, short)]
    pub(crate) verbose: bool,
}
