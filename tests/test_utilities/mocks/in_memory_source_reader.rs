use std::path::{Path, PathBuf};
use sv_ifgen::prelude::*;

/// Mock SourceReader serving a fixed text, or failing like a missing file
pub struct InMemorySourceReader {
    content: Option<String>,
}

impl InMemorySourceReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    #[allow(dead_code)]
    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl SourceReader for InMemorySourceReader {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        match &self.content {
            Some(content) => Ok(content.lines().map(str::to_string).collect()),
            None => Err(GeneratorError::SourceNotFound {
                path: PathBuf::from(path),
            }
            .into()),
        }
    }
}
