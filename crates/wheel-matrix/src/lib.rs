use std::ffi::OsString;
use std::process::ExitCode;
use std::time::Instant;

use anstream::eprintln;
use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::debug;

use wheel_matrix_settings::MatrixSettings;

pub use crate::builder::MatrixBuilder;
pub use crate::document::{PackageEntry, PythonEntry, VersionEntry, WheelMatrix, WheelTarget};
pub use crate::generate::{DEFAULT_OUTPUT, GENERATOR, generate};
pub use crate::render::render;

use crate::cli::Cli;
use crate::logging::{Level, setup_logging};

mod builder;
mod cli;
mod document;
mod generate;
mod logging;
mod render;
mod warnings;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The matrix was written.
    Success,

    /// The command failed with an unexpected error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Error => Self::from(2),
        }
    }
}

fn run(cli: Cli) -> Result<ExitStatus> {
    setup_logging(if cli.verbose {
        Level::Verbose
    } else {
        Level::Default
    })?;

    if !cli.quiet {
        warnings::enable();
    }

    let start = Instant::now();

    let settings = if let Some(config) = &cli.config {
        MatrixSettings::from_path(config)?
    } else {
        MatrixSettings::default()
    };
    let matrix = MatrixBuilder::new(&settings).build();
    generate(&matrix, &cli.output)?;

    debug!("Took {}ms", start.elapsed().as_millis());
    Ok(ExitStatus::Success)
}

/// Run the generator with the given command-line arguments.
pub fn main<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // Prints help and version output too, with clap's own exit code.
        Err(err) => err.exit(),
    };

    match run(cli) {
        Ok(status) => status.into(),
        Err(err) => {
            let mut causes = err.chain();
            if let Some(err) = causes.next() {
                eprintln!("{}: {}", "error".red().bold(), err);
            }
            for err in causes {
                eprintln!("  {}: {}", "Caused by".red().bold(), err);
            }
            ExitStatus::Error.into()
        }
    }
}
