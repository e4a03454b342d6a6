//! Identifier derivation for generated headers.

use std::path::Path;

use crate::error::EmbedError;

/// Derive the array identifier from the output header path.
///
/// The file name loses its final extension and every `.` left in it becomes
/// `_`, so `shaders/foo.bar.hpp` yields `foo_bar`. No other characters are
/// rewritten.
pub fn identifier_for(output: &Path) -> Result<String, EmbedError> {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| EmbedError::InvalidOutputPath {
            path: output.to_path_buf(),
        })?;

    Ok(stem.replace('.', "_"))
}

/// Name of the byte-length constant that accompanies the array.
pub fn size_identifier(name: &str) -> String {
    format!("{name}_size")
}
