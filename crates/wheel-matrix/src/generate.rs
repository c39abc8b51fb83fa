use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::document::WheelMatrix;
use crate::render::render;

/// The file the matrix is written to, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "wheel_matrix.yml";

/// The name recorded in the generated file's header.
pub const GENERATOR: &str = env!("CARGO_PKG_NAME");

/// Render the matrix and overwrite `output` with it.
///
/// The file is always truncated and rewritten, even when its contents are unchanged.
pub fn generate(matrix: &WheelMatrix, output: &Path) -> Result<()> {
    let rendered = render(matrix, GENERATOR).context("Failed to serialize the wheel matrix")?;
    let filename = output.display();

    let current = fs_err::read_to_string(output).ok();
    fs_err::write(output, rendered.as_bytes())
        .with_context(|| format!("Failed to write the wheel matrix to `{filename}`"))?;
    if current.as_deref() == Some(rendered.as_str()) {
        anstream::println!("Up-to-date: {filename}");
    } else {
        anstream::println!("Updating: {filename}");
    }
    info!(
        "Wrote {} wheel(s) for {} package(s) to `{filename}`",
        matrix.len(),
        matrix.packages.len()
    );

    Ok(())
}
