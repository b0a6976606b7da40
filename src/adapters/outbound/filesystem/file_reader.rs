use crate::ports::outbound::SourceReader;
use crate::shared::error::GeneratorError;
use crate::shared::security::{validate_source_file, MAX_SOURCE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading source descriptions from disk
///
/// Symbolic links, non-regular files and oversized files are rejected
/// before any content is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Verifies that `path` names a readable source file without reading it
    pub fn check(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(GeneratorError::SourceNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        validate_source_file(path, MAX_SOURCE_SIZE).map_err(|e| GeneratorError::SourceReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for FileSystemReader {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        self.check(path)?;

        let content = fs::read_to_string(path).map_err(|e| GeneratorError::SourceReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(content.lines().map(String::from).collect())
    }
}
