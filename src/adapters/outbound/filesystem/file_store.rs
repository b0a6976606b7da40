use crate::ports::outbound::FileStore;
use crate::shared::error::GeneratorError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemStore adapter writing generated documents into a directory
///
/// Writes use create-new semantics: an existing file is never overwritten.
pub struct FileSystemStore {
    root: PathBuf,
}

impl FileSystemStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Validates that the output directory exists before writing
    fn validate_root(&self, path: &Path) -> Result<()> {
        if self.root != Path::new("") && !self.root.is_dir() {
            return Err(GeneratorError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Output directory does not exist: {}", self.root.display()),
            }
            .into());
        }
        if self.root != Path::new("") {
            validate_not_symlink(&self.root, "write").map_err(|e| {
                GeneratorError::FileWriteError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
            })?;
        }
        Ok(())
    }

    /// Removes a half-written file so a failed write leaves nothing behind
    fn finish_write(path: &Path, written: io::Result<()>) -> Result<()> {
        written.map_err(|e| {
            let _ = fs::remove_file(path);
            GeneratorError::FileWriteError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl FileStore for FileSystemStore {
    fn exists(&self, name: &str) -> bool {
        let path = self.path_for(name);
        // dangling symlinks count as taken
        path.exists() || path.symlink_metadata().is_ok()
    }

    fn write(&self, name: &str, content: &str) -> Result<String> {
        let path = self.path_for(name);
        self.validate_root(&path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| GeneratorError::FileWriteError {
                path: path.clone(),
                details: e.to_string(),
            })?;

        let written = file.write_all(content.as_bytes()).and_then(|_| file.flush());
        drop(file);
        Self::finish_write(&path, written)?;

        Ok(path.display().to_string())
    }
}
