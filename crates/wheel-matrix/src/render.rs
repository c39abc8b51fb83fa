use crate::document::WheelMatrix;

/// Render the matrix as YAML, preceded by a comment naming the generator.
pub fn render(matrix: &WheelMatrix, generator: &str) -> Result<String, serde_yaml::Error> {
    let mut output = format!("# This file was generated by the `{generator}` tool.\n");
    output.push_str(&serde_yaml::to_string(matrix)?);
    Ok(output)
}
